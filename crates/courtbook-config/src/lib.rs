//! Configuration for the courtbook CLI.
//!
//! TOML profiles, bearer-token resolution (env + keyring + plaintext),
//! and translation to `courtbook_core::ClientConfig`. The CLI adds
//! `GlobalOpts`-aware overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use courtbook_core::{ClientConfig, TlsVerification};

/// Keyring service name under which tokens are stored.
pub const KEYRING_SERVICE: &str = "courtbook";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some(DEFAULT_PROFILE.into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use when none is given explicitly.
    pub fn active_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named backend profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Profile {
    /// API base URL (e.g., "https://api.example.com/api/v1/").
    pub api_url: String,

    /// Bearer token (plaintext; prefer keyring or env var).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Environment variable name containing the bearer token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// Field used when a command omits `--field`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_field: Option<String>,

    /// Path to custom CA certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "courtbook", "courtbook").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("courtbook");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layered over defaults and under
/// `COURTBOOK_*` environment variables (nested keys use `__`, e.g.
/// `COURTBOOK_DEFAULTS__TIMEOUT=10`). A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("COURTBOOK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(&path, cfg)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Token resolution (without CLI flags) ────────────────────────────

fn keyring_user(profile_name: &str) -> String {
    format!("{profile_name}/token")
}

/// Resolve the bearer token for a profile.
///
/// Order: `token_env` variable, system keyring, plaintext `token`.
/// `None` means the profile talks to the backend anonymously.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    resolve_token_with(
        profile,
        |name| std::env::var(name).ok(),
        || {
            keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name))
                .and_then(|entry| entry.get_password())
                .ok()
        },
    )
}

fn resolve_token_with(
    profile: &Profile,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl FnOnce() -> Option<String>,
) -> Option<SecretString> {
    // 1. Profile's token_env → env var lookup
    if let Some(val) = profile.token_env.as_deref().and_then(&env) {
        return Some(SecretString::from(val));
    }

    // 2. System keyring
    if let Some(secret) = keyring() {
        return Some(SecretString::from(secret));
    }

    // 3. Plaintext in config
    profile.token.clone().map(SecretString::from)
}

/// Store a token in the system keyring for `profile_name`.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name))?;
    entry.set_password(token)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// TLS mode for a profile: `insecure` wins over `ca_cert`, otherwise the
/// system store.
pub fn profile_tls(profile: &Profile, defaults: &Defaults) -> TlsVerification {
    if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `ClientConfig` from a profile, without CLI flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let url = parse_api_url(&profile.api_url)?;

    Ok(ClientConfig {
        url,
        token: resolve_token(profile, profile_name),
        tls: profile_tls(profile, defaults),
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
    })
}

/// Parse and sanity-check an API base URL.
pub fn parse_api_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("expected http or https, got '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn profile() -> Profile {
        Profile {
            api_url: "https://api.example.com/api/v1/".into(),
            ..Profile::default()
        }
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.active_profile_name(), "default");
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "club".into(),
            Profile {
                token_env: Some("CLUB_TOKEN".into()),
                default_field: Some("field-7".into()),
                timeout: Some(5),
                ..profile()
            },
        );
        cfg.default_profile = Some("club".into());
        save_config_to(&path, &cfg).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.active_profile_name(), "club");
        assert_eq!(loaded.profile("club").unwrap(), cfg.profile("club").unwrap());
    }

    #[test]
    fn load_reads_handwritten_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "home"

[defaults]
output = "json"

[profiles.home]
api_url = "http://localhost:3000/"
insecure = true
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.defaults.timeout, 30);
        let home = cfg.profile("home").unwrap();
        assert_eq!(home.insecure, Some(true));
        assert!(matches!(
            profile_tls(home, &cfg.defaults),
            TlsVerification::DangerAcceptInvalid
        ));
    }

    #[test]
    fn unknown_profile_is_reported() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.profile("missing"),
            Err(ConfigError::UnknownProfile { .. })
        ));
    }

    #[test]
    fn token_env_wins_over_keyring_and_plaintext() {
        let p = Profile {
            token_env: Some("T".into()),
            token: Some("plain".into()),
            ..profile()
        };
        let token = resolve_token_with(&p, |_| Some("from-env".into()), || Some("kr".into()));
        assert_eq!(token.unwrap().expose_secret(), "from-env");
    }

    #[test]
    fn keyring_wins_over_plaintext() {
        let p = Profile {
            token_env: Some("UNSET".into()),
            token: Some("plain".into()),
            ..profile()
        };
        let token = resolve_token_with(&p, |_| None, || Some("kr".into()));
        assert_eq!(token.unwrap().expose_secret(), "kr");
    }

    #[test]
    fn plaintext_is_last_resort_and_absence_is_anonymous() {
        let p = Profile {
            token: Some("plain".into()),
            ..profile()
        };
        let token = resolve_token_with(&p, |_| None, || None);
        assert_eq!(token.unwrap().expose_secret(), "plain");

        assert!(resolve_token_with(&profile(), |_| None, || None).is_none());
    }

    #[test]
    fn ca_cert_used_when_not_insecure() {
        let p = Profile {
            ca_cert: Some("/etc/ca.pem".into()),
            ..profile()
        };
        match profile_tls(&p, &Defaults::default()) {
            TlsVerification::CustomCa(path) => assert_eq!(path, PathBuf::from("/etc/ca.pem")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            profile_tls(&profile(), &Defaults::default()),
            TlsVerification::SystemDefaults
        ));
    }

    #[test]
    fn api_url_must_be_http() {
        assert!(parse_api_url("https://api.example.com").is_ok());
        assert!(matches!(
            parse_api_url("ftp://api.example.com"),
            Err(ConfigError::Validation { .. })
        ));
        assert!(parse_api_url("not a url").is_err());
    }
}
