// ── Domain model ──
//
// Canonical representation of a field's slot grid. Wire types from
// `courtbook-api` are converted into these (see `convert`), and every
// consumer (CLI, selection model, request builders) depends only on them.

pub mod court;
pub mod grid;
pub mod ids;
pub mod slot;
pub mod time;

// ── Re-exports ──────────────────────────────────────────────────────

pub use court::{Court, CourtStatus};
pub use grid::FieldSlotGrid;
pub use ids::{CourtId, FieldId, SlotId};
pub use slot::{CourtSlot, SlotStatus};
pub use time::{
    MINUTES_PER_DAY, TimeInput, TimeOfDay, format_date, format_time, parse_date, parse_time,
};
