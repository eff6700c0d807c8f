//! Config subcommand handlers.

use std::collections::HashMap;
use std::fmt::Write;

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Defaults, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking the plaintext token.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let Some(p) = cfg.profiles.get(name) else {
            continue;
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "api_url = \"{}\"", p.api_url);
        if p.token.is_some() {
            let _ = writeln!(out, "token = \"****\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(ref field) = p.default_field {
            let _ = writeln!(out, "default_field = \"{field}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}

/// Copy of the config with plaintext tokens masked, for structured output.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("****".into());
        }
    }
    cfg
}

fn save_config(cfg: &Config) -> Result<std::path::PathBuf, CliError> {
    Ok(config::save_config(cfg)?)
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_token() -> Result<String, CliError> {
    let token = rpassword::prompt_password("Bearer token: ").map_err(prompt_err)?;
    if token.is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "token cannot be empty".into(),
        });
    }
    Ok(token)
}

fn store_in_keyring(profile_name: &str, token: &str) -> Result<(), CliError> {
    courtbook_config::store_token(profile_name, token).map_err(|e| CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to store token in keyring: {e}"),
    })
}

/// Where the wizard should keep the token.
struct TokenChoice {
    token: Option<String>,
    token_env: Option<String>,
}

fn prompt_token_storage(profile_name: &str) -> Result<TokenChoice, CliError> {
    let choices = &[
        "Store in system keyring (recommended)",
        "Read from an environment variable",
        "Save to config file (plaintext)",
        "No token (anonymous access)",
    ];
    let selection = Select::new()
        .with_prompt("Bearer token")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    Ok(match selection {
        0 => {
            let token = prompt_token()?;
            store_in_keyring(profile_name, &token)?;
            eprintln!("   ✓ Token stored in system keyring");
            TokenChoice {
                token: None,
                token_env: None,
            }
        }
        1 => {
            let var: String = Input::new()
                .with_prompt("Environment variable")
                .default("COURTBOOK_TOKEN".into())
                .interact_text()
                .map_err(prompt_err)?;
            TokenChoice {
                token: None,
                token_env: Some(var),
            }
        }
        2 => TokenChoice {
            token: Some(prompt_token()?),
            token_env: None,
        },
        _ => TokenChoice {
            token: None,
            token_env: None,
        },
    })
}

fn profile_not_found(cfg: &Config, name: String) -> CliError {
    CliError::ProfileNotFound {
        available: config::available_profiles(cfg),
        name,
    }
}

fn parse_flag<T: std::str::FromStr>(field: &str, value: &str, hint: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: hint.into(),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("courtbook configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default(config::DEFAULT_PROFILE.into())
                .interact_text()
                .map_err(prompt_err)?;

            let api_url: String = Input::new()
                .with_prompt("Booking API base URL")
                .default("https://api.example.com/api/v1/".into())
                .validate_with(|input: &String| {
                    courtbook_config::parse_api_url(input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;

            let default_field: String = Input::new()
                .with_prompt("Default field ID (blank for none)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;

            let TokenChoice { token, token_env } = prompt_token_storage(&profile_name)?;

            let profile = Profile {
                api_url,
                token,
                token_env,
                default_field: (!default_field.is_empty()).then_some(default_field),
                ..Profile::default()
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Defaults::default(),
                profiles,
            };

            let path = save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: courtbook grid show --date <YYYY-MM-DD>");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config()?);
            let out = output::render_single(&global.output, &cfg, format_config_redacted, |c| {
                c.active_profile_name().to_owned()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            let profile = cfg.profiles.entry(profile_name.clone()).or_default();

            match key.as_str() {
                "api_url" | "api-url" => {
                    courtbook_config::parse_api_url(&value)?;
                    profile.api_url = value;
                }
                "token" => profile.token = Some(value),
                "token_env" | "token-env" => profile.token_env = Some(value),
                "default_field" | "default-field" => profile.default_field = Some(value),
                "insecure" => {
                    profile.insecure = Some(parse_flag("insecure", &value, "must be 'true' or 'false'")?);
                }
                "timeout" => {
                    profile.timeout = Some(parse_flag("timeout", &value, "must be a number (seconds)")?);
                }
                "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: api_url, token, \
                             token_env, default_field, insecure, timeout, ca_cert"
                        ),
                    });
                }
            }

            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Set {key} on profile '{profile_name}'");
            }
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.active_profile_name();
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: courtbook config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(profile_not_found(&cfg, name));
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Default profile set to '{name}'");
            }
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken => {
            let cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);
            if !cfg.profiles.contains_key(&profile_name) {
                return Err(profile_not_found(&cfg, profile_name));
            }

            let token = prompt_token()?;
            store_in_keyring(&profile_name, &token)?;
            eprintln!("✓ Token stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}
