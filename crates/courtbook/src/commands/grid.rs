//! Grid command handlers.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::Tabled;

use courtbook_core::{Controller, Court, CourtId, CourtSlot, FieldSlotGrid, format_date};

use crate::cli::{GlobalOpts, GridArgs, GridCommand, GridContextArgs};
use crate::config::ResolvedProfile;
use crate::error::CliError;
use crate::output;

use super::{timeline, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct SlotRow {
    #[tabled(rename = "Court")]
    court: String,
    #[tabled(rename = "Slot")]
    id: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Merged")]
    merged: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl SlotRow {
    pub(crate) fn new(court: &Court, slot: &CourtSlot, color: bool) -> Self {
        Self {
            court: court.name.clone(),
            id: slot.id.to_string(),
            start: slot.start_time.format_hm(),
            end: slot.end_time.format_hm(),
            status: output::paint_status(slot.status, color),
            merged: if slot.is_merge { "yes".into() } else { String::new() },
            price: slot.price.map(output::format_price).unwrap_or_default(),
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────

fn detail(grid: &FieldSlotGrid, date: NaiveDate, courts: Option<&[CourtId]>, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})  {}  {}-{}",
        grid.name,
        grid.id,
        format_date(date),
        grid.open_time,
        grid.close_time
    );
    for court in grid.courts.iter().filter(|c| !c.is_enabled()) {
        let _ = writeln!(out, "  {} is {}", court.name, court.status);
    }

    let rows: Vec<SlotRow> = grid
        .courts
        .iter()
        .filter(|c| courts.is_none_or(|ids| ids.contains(&c.id)))
        .flat_map(|court| court.slots.iter().map(move |slot| SlotRow::new(court, slot, color)))
        .collect();
    out.push_str(&output::render_table(&rows));
    out
}

fn plain(grid: &FieldSlotGrid, courts: Option<&[CourtId]>) -> String {
    grid.courts
        .iter()
        .filter(|c| courts.is_none_or(|ids| ids.contains(&c.id)))
        .flat_map(|court| {
            court.slots.iter().map(move |slot| {
                format!(
                    "{}\t{}\t{}-{}\t{}",
                    court.id, slot.id, slot.start_time, slot.end_time, slot.status
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a grid, optionally limited to some courts in table/plain form.
pub(crate) fn render(
    grid: &FieldSlotGrid,
    date: NaiveDate,
    courts: Option<&[CourtId]>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        grid,
        |g| detail(g, date, courts, color),
        |g| plain(g, courts),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Set the controller's context from the arguments and fetch the grid.
pub(crate) async fn load(
    controller: &Controller,
    args: &GridContextArgs,
    profile: &ResolvedProfile,
) -> Result<(std::sync::Arc<FieldSlotGrid>, NaiveDate), CliError> {
    let field = util::resolve_field(args, profile.default_field.as_deref())?;
    let date = util::resolve_date(args)?;
    let grid = controller.load_grid(field, date).await?;
    Ok((grid, date))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: GridArgs,
    profile: &ResolvedProfile,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        GridCommand::Show(context) => {
            let (grid, date) = load(controller, &context, profile).await?;
            render(&grid, date, None, global)
        }

        GridCommand::Timeline { context, step } => {
            let (grid, _) = load(controller, &context, profile).await?;
            let line = grid.time_line(step)?;
            timeline::render(&line, global)
        }
    }
}
