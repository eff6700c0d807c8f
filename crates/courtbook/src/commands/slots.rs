//! Slot command handlers: quote, lock, unlock, merge, unmerge.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::Tabled;
use tracing::debug;

use courtbook_core::{
    CommandResult, Controller, CourtId, FieldSlotGrid, Selection, SlotId,
};

use crate::cli::{GlobalOpts, SlotSelectionArgs, SlotsArgs, SlotsCommand};
use crate::config::ResolvedProfile;
use crate::error::CliError;
use crate::output;

use super::{grid, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SelectedRow {
    #[tabled(rename = "Court")]
    court: String,
    #[tabled(rename = "Slot")]
    id: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Price")]
    price: String,
}

fn quote_detail(grid: &FieldSlotGrid, selection: &Selection) -> String {
    let rows: Vec<SelectedRow> = selection
        .courts()
        .flat_map(|(court_id, slots)| {
            let court = grid
                .court(court_id)
                .map_or_else(|| court_id.to_string(), |c| c.name.clone());
            slots.iter().map(move |slot| SelectedRow {
                court: court.clone(),
                id: slot.id.to_string(),
                start: slot.start_time.format_hm(),
                end: slot.end_time.format_hm(),
                price: output::format_price(slot.price_or_zero()),
            })
        })
        .collect();

    let mut out = output::render_table(&rows);
    let _ = write!(out, "\nTotal: {}", output::format_price(selection.total_price()));
    out
}

fn render_quote(
    grid: &FieldSlotGrid,
    selection: &Selection,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = output::render_single(
        &global.output,
        selection,
        |s| quote_detail(grid, s),
        |s| output::format_price(s.total_price()),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Command helpers ─────────────────────────────────────────────────

/// Print the refetched grid for the courts a command touched.
fn show_refreshed(
    result: &CommandResult,
    date: NaiveDate,
    courts: &[CourtId],
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match result {
        CommandResult::Refreshed(grid) => grid::render(grid, date, Some(courts), global),
        CommandResult::Ok => Ok(()),
    }
}

fn announce(verb: &str, selection: &Selection, global: &GlobalOpts) {
    if !global.quiet {
        eprintln!(
            "✓ {verb} {} slot(s) on {} court(s)",
            selection.slot_count(),
            selection.court_count()
        );
    }
}

fn touched_courts(selection: &Selection) -> Vec<CourtId> {
    selection.courts().map(|(id, _)| id.clone()).collect()
}

/// Load the grid and select the requested slots.
async fn prepare(
    controller: &Controller,
    args: &SlotSelectionArgs,
    profile: &ResolvedProfile,
    any_status: bool,
) -> Result<(std::sync::Arc<FieldSlotGrid>, NaiveDate), CliError> {
    let (grid, date) = grid::load(controller, &args.context, profile).await?;
    let ids = util::slot_ids(&args.slots);
    let total = if any_status {
        controller.select_any(&ids)?
    } else {
        controller.select_available(&ids)?
    };
    debug!(slots = ids.len(), total, "selection built");
    Ok((grid, date))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: SlotsArgs,
    profile: &ResolvedProfile,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SlotsCommand::Quote(sel) => {
            let (grid, _) = prepare(controller, &sel, profile, false).await?;
            render_quote(&grid, &controller.selection().snapshot(), global)
        }

        SlotsCommand::Lock(sel) => {
            let (_, date) = prepare(controller, &sel, profile, false).await?;
            let selection = controller.selection().snapshot();
            let result = controller.lock_selection().await?;
            announce("Locked", &selection, global);
            show_refreshed(&result, date, &touched_courts(&selection), global)
        }

        SlotsCommand::Unlock(sel) => {
            let (_, date) = prepare(controller, &sel, profile, true).await?;
            let selection = controller.selection().snapshot();
            let result = controller.unlock_selection().await?;
            announce("Unlocked", &selection, global);
            show_refreshed(&result, date, &touched_courts(&selection), global)
        }

        SlotsCommand::Merge(sel) => {
            let (_, date) = prepare(controller, &sel, profile, false).await?;
            let selection = controller.selection().snapshot();
            let result = controller.merge_selection().await?;
            announce("Merged", &selection, global);
            show_refreshed(&result, date, &touched_courts(&selection), global)
        }

        SlotsCommand::Unmerge { slot_id, context } => {
            if !util::confirm(
                &format!("Split merged slot '{slot_id}' back into its original slots?"),
                "slots unmerge",
                global.yes,
            )? {
                return Ok(());
            }

            // Only refetch when the caller said which grid to show.
            let wants_grid = context.field.is_some() || context.date.is_some();
            let date = if wants_grid {
                let field = util::resolve_field(&context, profile.default_field.as_deref())?;
                let date = util::resolve_date(&context)?;
                controller.set_context(field, date).await;
                Some(date)
            } else {
                None
            };

            let result = controller.unmerge(SlotId::from(slot_id.as_str())).await?;
            if !global.quiet {
                eprintln!("✓ Unmerged slot '{slot_id}'");
            }

            match (&result, date) {
                (CommandResult::Refreshed(grid), Some(date)) => {
                    grid::render(grid, date, None, global)
                }
                _ => Ok(()),
            }
        }
    }
}
