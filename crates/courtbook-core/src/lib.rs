//! Court time-slot grid and booking selection for courtbook.
//!
//! The grid for a (field, date) pair is fetched from the backend and
//! never edited locally. Users build a [`Selection`] of slots per court,
//! the total price is derived from it, and lock/unlock/merge/unmerge
//! requests are built from it. Every write is followed by a refetch.
//!
//! ## Architecture
//!
//! - [`Controller`] owns the HTTP client, the active [`GridContext`], the
//!   last fetched grid and a [`SelectionStore`].
//! - [`generate_time_line`] builds the vertical axis of the grid view.
//! - [`command`] holds the request shapes; [`convert`] maps them to and
//!   from the wire types in `courtbook_api`.

pub mod command;
pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod timeline;

// ── Primary re-exports ──────────────────────────────────────────
pub use command::{Command, CommandResult, LockRequest, MergeRequest, UnlockRequest};
pub use config::{ClientConfig, TlsVerification};
pub use controller::{Controller, GridContext};
pub use error::CoreError;
pub use store::{Selection, SelectionStore};
pub use timeline::{TimeLine, TimeMark, generate_time_line};

// Model re-exports
pub use model::{
    Court, CourtId, CourtSlot, CourtStatus, FieldId, FieldSlotGrid, SlotId, SlotStatus,
    TimeInput, TimeOfDay, format_date, format_time, parse_date, parse_time,
};
