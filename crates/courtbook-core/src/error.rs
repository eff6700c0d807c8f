// ── Core error types ──
//
// User-facing errors from courtbook-core. Consumers never see HTTP status
// codes or JSON parse failures directly. The `From<courtbook_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach booking API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Invalid time '{input}': expected HH:MM or HH:MM:SS")]
    InvalidTime { input: String },

    #[error("Invalid step of {step} minutes: must be greater than zero")]
    InvalidStep { step: i64 },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Slot not found: {identifier}")]
    SlotNotFound { identifier: String },

    #[error("Not found on booking API: {message}")]
    NotFound { message: String },

    #[error("No field/date selected -- set a grid context first")]
    NoContext,

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation rejected by booking API: {message}")]
    Rejected { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// The backend error code or reason phrase (e.g. "Bad Request").
        code: Option<String>,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<courtbook_api::Error> for CoreError {
    fn from(err: courtbook_api::Error) -> Self {
        match err {
            courtbook_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            courtbook_api::Error::Transport(ref e) => {
                if e.is_timeout() || e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            courtbook_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            courtbook_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            courtbook_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            courtbook_api::Error::Api {
                message,
                status: 404,
                ..
            } => CoreError::NotFound { message },
            courtbook_api::Error::Api {
                message,
                status: 409,
                ..
            } => CoreError::Rejected { message },
            courtbook_api::Error::Api {
                message,
                code,
                status,
            } => CoreError::Api {
                message,
                code,
                status: Some(status),
            },
            courtbook_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
