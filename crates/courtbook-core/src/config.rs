// ── Runtime connection configuration ──
//
// These types describe *how* to reach the booking API. They carry
// credential data and connection tuning, but never touch disk.
// The CLI constructs a `ClientConfig` and hands it in.

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Default for a public API.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed staging backends).
    DangerAcceptInvalid,
}

/// Configuration for talking to one booking backend.
///
/// Built by the CLI, passed to `Controller` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., `https://api.example.com/api/v1/`).
    pub url: Url,
    /// Bearer token, if the deployment requires one.
    pub token: Option<SecretString>,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
}

impl ClientConfig {
    /// Minimal config: the given URL, no token, strict TLS, 30s timeout.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            token: None,
            tls: TlsVerification::default(),
            timeout: std::time::Duration::from_secs(30),
        }
    }
}
