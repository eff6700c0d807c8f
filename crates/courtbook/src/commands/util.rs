//! Shared helpers for command handlers.

use std::io::IsTerminal;

use chrono::{Local, NaiveDate};

use courtbook_core::{FieldId, SlotId, parse_date};

use crate::cli::GridContextArgs;
use crate::error::CliError;

/// Field from `--field`, else the profile's default field.
pub fn resolve_field(
    args: &GridContextArgs,
    default_field: Option<&str>,
) -> Result<FieldId, CliError> {
    args.field
        .as_deref()
        .or(default_field)
        .map(FieldId::from)
        .ok_or(CliError::NoField)
}

/// Date from `--date`, else today in local time.
pub fn resolve_date(args: &GridContextArgs) -> Result<NaiveDate, CliError> {
    match args.date.as_deref() {
        Some(raw) => Ok(parse_date(raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn slot_ids(raw: &[String]) -> Vec<SlotId> {
    raw.iter().map(|s| SlotId::from(s.as_str())).collect()
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal to ask on, the operation is refused instead.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
