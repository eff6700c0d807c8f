//! Command handlers, one module per top-level subcommand.

pub mod config_cmd;
pub mod grid;
pub mod slots;
pub mod timeline;
pub mod util;

use courtbook_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::config::ResolvedProfile;
use crate::error::CliError;

/// Route commands that talk to the booking API.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    profile: &ResolvedProfile,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Grid(args) => grid::handle(controller, args, profile, global).await,
        Command::Slots(args) => slots::handle(controller, args, profile, global).await,
        Command::Timeline(_) | Command::Config(_) | Command::Completions(_) => {
            Err(CliError::Internal("offline command routed to the API dispatcher".into()))
        }
    }
}
