//! Offline `timeline` command and time-line rendering shared with `grid timeline`.

use tabled::Tabled;

use courtbook_core::{TimeLine, TimeMark, generate_time_line};

use crate::cli::{GlobalOpts, TimelineArgs};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct TimeRow {
    #[tabled(rename = "Time")]
    time: String,
}

impl From<&TimeMark> for TimeRow {
    fn from(m: &TimeMark) -> Self {
        Self {
            time: m.time.format_hm(),
        }
    }
}

pub fn render(line: &TimeLine, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_list(
        &global.output,
        line.marks(),
        |m| TimeRow::from(m),
        |m| m.time.format_hm(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn handle(args: &TimelineArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let line = generate_time_line(args.open.as_str(), args.close.as_str(), args.step)?;
    tracing::debug!(marks = line.len(), "generated time line");
    render(&line, global)
}
