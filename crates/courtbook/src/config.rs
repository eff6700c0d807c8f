//! CLI configuration: thin wrapper around `courtbook_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --token, --insecure, --timeout).

use std::time::Duration;

use secrecy::SecretString;

use courtbook_core::{ClientConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use courtbook_config::{
    Config, DEFAULT_PROFILE, Defaults, Profile, config_path, load_config, save_config,
};

/// A resolved connection plus the profile defaults commands need.
#[derive(Debug)]
pub struct ResolvedProfile {
    pub name: String,
    pub client: ClientConfig,
    pub default_field: Option<String>,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.active_profile_name().to_owned())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    names.sort();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}

/// Build the `ClientConfig` from the config file, profile and CLI overrides.
///
/// CLI flags take priority over profile values. Without a profile,
/// `--api-url` alone is enough to run against a backend.
pub fn resolve(global: &GlobalOpts) -> Result<ResolvedProfile, CliError> {
    let cfg = load_config()?;
    let name = active_profile_name(global, &cfg);

    let profile = match cfg.profiles.get(&name) {
        Some(p) => p.clone(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                available: available_profiles(&cfg),
                name,
            });
        }
        None if global.api_url.is_some() => Profile::default(),
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    // 1. API URL (flag > env > profile)
    let url_str = global.api_url.as_deref().unwrap_or(&profile.api_url);
    let url = courtbook_config::parse_api_url(url_str)?;

    // 2. Token (flag > token_env > keyring > plaintext)
    let token = global
        .token
        .clone()
        .map(SecretString::from)
        .or_else(|| courtbook_config::resolve_token(&profile, &name));

    // 3. TLS verification
    let tls = if global.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        courtbook_config::profile_tls(&profile, &cfg.defaults)
    };

    // 4. Timeout
    let timeout = Duration::from_secs(
        global
            .timeout
            .or(profile.timeout)
            .unwrap_or(cfg.defaults.timeout),
    );

    Ok(ResolvedProfile {
        name,
        client: ClientConfig {
            url,
            token,
            tls,
            timeout,
        },
        default_field: profile.default_field,
    })
}
