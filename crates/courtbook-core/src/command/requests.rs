// ── Typed request structs for slot commands ──
//
// Pure shape builders. They copy ids and times out of a selection and
// never check slot status or overlap; the backend decides whether the
// operation is valid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{CourtId, CourtSlot, FieldId, SlotId, TimeOfDay};
use crate::store::Selection;

// ── Lock ───────────────────────────────────────────────────────────

/// Move the selected slots out of AVAILABLE (hold pending payment, or an
/// administrative block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRequest {
    pub date: NaiveDate,
    pub field_id: FieldId,
    pub courts: Vec<LockCourt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockCourt {
    pub id: CourtId,
    pub time_slots: Vec<LockTimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockTimeSlot {
    pub id: SlotId,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl LockRequest {
    /// One entry per court with a non-empty selection, in selection order.
    pub fn from_selection(date: NaiveDate, field_id: FieldId, selection: &Selection) -> Self {
        let courts = selection
            .courts()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(court_id, slots)| LockCourt {
                id: court_id.clone(),
                time_slots: slots
                    .iter()
                    .map(|s| LockTimeSlot {
                        id: s.id.clone(),
                        start_time: s.start_time,
                        end_time: s.end_time,
                    })
                    .collect(),
            })
            .collect();

        Self {
            date,
            field_id,
            courts,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.courts.iter().map(|c| c.time_slots.len()).sum()
    }
}

// ── Unlock ─────────────────────────────────────────────────────────

/// Reverse a lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRequest {
    pub date: NaiveDate,
    pub field_id: FieldId,
    pub courts: Vec<UnlockCourt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockCourt {
    pub id: CourtId,
    pub slot_ids: Vec<SlotId>,
}

impl UnlockRequest {
    pub fn from_selection(date: NaiveDate, field_id: FieldId, selection: &Selection) -> Self {
        let courts = selection
            .courts()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(court_id, slots)| UnlockCourt {
                id: court_id.clone(),
                slot_ids: slots.iter().map(|s| s.id.clone()).collect(),
            })
            .collect();

        Self {
            date,
            field_id,
            courts,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.courts.iter().map(|c| c.slot_ids.len()).sum()
    }
}

// ── Merge ──────────────────────────────────────────────────────────

/// Combine adjacent AVAILABLE slots on one court into a single bookable
/// range. The backend marks the resulting slot `isMerge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequest {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub date: NaiveDate,
    pub court_id: CourtId,
}

impl MergeRequest {
    /// Range spans the earliest start to the latest end of `slots`.
    pub fn from_slots(
        date: NaiveDate,
        court_id: CourtId,
        slots: &[CourtSlot],
    ) -> Result<Self, CoreError> {
        let start_time = slots.iter().map(|s| s.start_time).min();
        let end_time = slots.iter().map(|s| s.end_time).max();

        match (start_time, end_time) {
            (Some(start_time), Some(end_time)) => Ok(Self {
                start_time,
                end_time,
                date,
                court_id,
            }),
            _ => Err(CoreError::ValidationFailed {
                message: format!("no slots selected on court {court_id} to merge"),
            }),
        }
    }

    /// Merge whatever is selected, which must sit on exactly one court.
    pub fn from_selection(date: NaiveDate, selection: &Selection) -> Result<Self, CoreError> {
        let mut courts = selection.courts().filter(|(_, slots)| !slots.is_empty());
        let Some((court_id, slots)) = courts.next() else {
            return Err(CoreError::ValidationFailed {
                message: "nothing selected to merge".into(),
            });
        };
        if courts.next().is_some() {
            return Err(CoreError::ValidationFailed {
                message: "merge needs slots from a single court".into(),
            });
        }
        Self::from_slots(date, court_id.clone(), slots)
    }
}
