// ── Court domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ids::{CourtId, SlotId};
use super::slot::CourtSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CourtStatus {
    Enable,
    Unable,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub status: CourtStatus,
    /// Time ordered, non-overlapping.
    pub slots: Vec<CourtSlot>,
}

impl Court {
    pub fn is_enabled(&self) -> bool {
        self.status == CourtStatus::Enable
    }

    pub fn slot(&self, id: &SlotId) -> Option<&CourtSlot> {
        self.slots.iter().find(|s| &s.id == id)
    }

    pub fn available_slots(&self) -> impl Iterator<Item = &CourtSlot> {
        self.slots.iter().filter(|s| s.is_selectable())
    }
}
