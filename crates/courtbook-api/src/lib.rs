// courtbook-api: Async Rust client for the court-slot booking REST API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::SlotClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
