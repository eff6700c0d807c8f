//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use courtbook_config::ConfigError;
use courtbook_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the booking API at {url}")]
    #[diagnostic(
        code(courtbook::connection_failed),
        help(
            "Check the API URL and your network connection.\n\
             URL: {url}\n\
             Self-signed staging backend? Try --insecure (-k)."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(courtbook::auth_failed),
        help(
            "The backend rejected the bearer token.\n\
             Store a fresh one with: courtbook config set-token\n\
             Or pass --token / set COURTBOOK_TOKEN."
        )
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(courtbook::not_found),
        help("Run: courtbook {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Not found: {message}")]
    #[diagnostic(
        code(courtbook::not_found),
        help("Check the field or slot id. Run: courtbook grid show to list slots")
    )]
    MissingOnServer { message: String },

    #[error("Rejected by the booking API: {message}")]
    #[diagnostic(
        code(courtbook::rejected),
        help("The slots changed on the server. Run: courtbook grid show to see their current status")
    )]
    Rejected { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(courtbook::api_error))]
    ApiError { code: String, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(courtbook::validation))]
    Validation { field: String, reason: String },

    #[error("No field given")]
    #[diagnostic(
        code(courtbook::no_field),
        help(
            "Pass --field, or set a default for this profile:\n\
             courtbook config set default_field <FIELD_ID>"
        )
    )]
    NoField,

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(courtbook::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: courtbook config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No booking API configured")]
    #[diagnostic(
        code(courtbook::no_config),
        help(
            "Create a profile with: courtbook config init\n\
             Or pass --api-url / set COURTBOOK_API_URL.\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(courtbook::config))]
    Config(#[from] ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("'{action}' requires confirmation")]
    #[diagnostic(
        code(courtbook::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(courtbook::timeout),
        help("Increase the timeout with --timeout or try again later.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(courtbook::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(courtbook::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(courtbook::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::MissingOnServer { .. } | Self::ProfileNotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Rejected { .. } => exit_code::CONFLICT,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::NoField
            | Self::NoConfig { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::InvalidTime { input } => CliError::Validation {
                field: "time".into(),
                reason: format!("'{input}' is not HH:MM or HH:MM:SS"),
            },

            CoreError::InvalidStep { step } => CliError::Validation {
                field: "step".into(),
                reason: format!("{step} is not a positive number of minutes"),
            },

            CoreError::InvalidDate { input } => CliError::Validation {
                field: "date".into(),
                reason: format!("'{input}' is not YYYY-MM-DD"),
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "slots".into(),
                reason: message,
            },

            CoreError::SlotNotFound { identifier } => CliError::NotFound {
                resource_type: "slot".into(),
                identifier,
                list_command: "grid show".into(),
            },

            CoreError::NotFound { message } => CliError::MissingOnServer { message },

            CoreError::NoContext => CliError::Validation {
                field: "field/date".into(),
                reason: "no grid loaded".into(),
            },

            CoreError::Rejected { message } => CliError::Rejected { message },

            CoreError::Api {
                message,
                code,
                status,
            } => CliError::ApiError {
                code: code
                    .or_else(|| status.map(|s| s.to_string()))
                    .unwrap_or_else(|| "unknown".into()),
                message,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(msg) => CliError::Internal(msg),
        }
    }
}
