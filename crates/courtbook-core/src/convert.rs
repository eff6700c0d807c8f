// ── Wire ↔ domain conversion ──
//
// Grid responses from `courtbook-api` become domain types here, with the
// slot invariants checked on the way in. Request structs go the other
// way, into wire bodies with `HH:MM:SS` times and `YYYY-MM-DD` dates.

use courtbook_api::types::{
    CourtResponse, CourtSlotResponse, FieldSlotGridResponse, LockCourtBody, LockSlotsBody,
    LockTimeSlotBody, MergeSlotsBody, UnlockCourtBody, UnlockSlotsBody, WireTime,
};

use crate::command::{LockRequest, MergeRequest, UnlockRequest};
use crate::error::CoreError;
use crate::model::{
    Court, CourtSlot, CourtStatus, FieldSlotGrid, SlotStatus, TimeInput, TimeOfDay, format_date,
};

// ── Wire → domain ───────────────────────────────────────────────────

fn time_from_wire(t: WireTime) -> Result<TimeOfDay, CoreError> {
    let input = match t {
        WireTime::Text(s) => TimeInput::Raw(s),
        WireTime::Parts { hour, minute } => TimeInput::Structured { hour, minute },
    };
    input.normalize()
}

fn slot_from_wire(raw: CourtSlotResponse) -> Result<CourtSlot, CoreError> {
    let status: SlotStatus = raw.status.parse().map_err(|_| CoreError::ValidationFailed {
        message: format!("slot {} has unknown status '{}'", raw.id, raw.status),
    })?;
    let start_time = time_from_wire(raw.start_time)?;
    let end_time = time_from_wire(raw.end_time)?;

    if start_time >= end_time {
        return Err(CoreError::ValidationFailed {
            message: format!("slot {} starts at {start_time} but ends at {end_time}", raw.id),
        });
    }

    Ok(CourtSlot {
        id: raw.id.into(),
        start_time,
        end_time,
        status,
        is_merge: raw.is_merge,
        price: raw.price,
    })
}

fn court_from_wire(raw: CourtResponse) -> Result<Court, CoreError> {
    let status = match raw.status.as_deref() {
        None => CourtStatus::Enable,
        Some(s) => s.parse().map_err(|_| CoreError::ValidationFailed {
            message: format!("court {} has unknown status '{s}'", raw.id),
        })?,
    };

    let mut slots = raw
        .court_slots
        .into_iter()
        .map(slot_from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    slots.sort_by_key(|s| s.start_time);

    if let Some(pair) = slots.windows(2).find(|w| w[1].start_time < w[0].end_time) {
        return Err(CoreError::ValidationFailed {
            message: format!(
                "court {}: slot {} overlaps slot {}",
                raw.id, pair[0].id, pair[1].id
            ),
        });
    }

    Ok(Court {
        id: raw.id.into(),
        name: raw.name,
        status,
        slots,
    })
}

impl TryFrom<FieldSlotGridResponse> for FieldSlotGrid {
    type Error = CoreError;

    fn try_from(raw: FieldSlotGridResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id.into(),
            name: raw.name,
            month_limit: raw.month_limit,
            min_booking_minutes: raw.min_booking_minutes,
            status: raw.status,
            open_time: time_from_wire(raw.open_time)?,
            close_time: time_from_wire(raw.close_time)?,
            courts: raw
                .courts
                .into_iter()
                .map(court_from_wire)
                .collect::<Result<_, _>>()?,
        })
    }
}

// ── Domain → wire ───────────────────────────────────────────────────

impl From<&LockRequest> for LockSlotsBody {
    fn from(req: &LockRequest) -> Self {
        Self {
            date: format_date(req.date),
            field_id: req.field_id.to_string(),
            courts: req
                .courts
                .iter()
                .map(|c| LockCourtBody {
                    id: c.id.to_string(),
                    time_slots: c
                        .time_slots
                        .iter()
                        .map(|s| LockTimeSlotBody {
                            id: s.id.to_string(),
                            start_time: s.start_time.to_wire(),
                            end_time: s.end_time.to_wire(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl From<&UnlockRequest> for UnlockSlotsBody {
    fn from(req: &UnlockRequest) -> Self {
        Self {
            date: format_date(req.date),
            field_id: req.field_id.to_string(),
            courts: req
                .courts
                .iter()
                .map(|c| UnlockCourtBody {
                    id: c.id.to_string(),
                    slot_ids: c.slot_ids.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        }
    }
}

impl From<&MergeRequest> for MergeSlotsBody {
    fn from(req: &MergeRequest) -> Self {
        Self {
            start_time: req.start_time.to_wire(),
            end_time: req.end_time.to_wire(),
            date: format_date(req.date),
            court_id: req.court_id.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{CourtId, SlotId, parse_date};

    fn wire_slot(id: &str, start: &str, end: &str, status: &str) -> CourtSlotResponse {
        CourtSlotResponse {
            id: id.into(),
            start_time: WireTime::Text(start.into()),
            end_time: WireTime::Text(end.into()),
            status: status.into(),
            is_merge: false,
            price: Some(80.0),
        }
    }

    fn wire_grid(slots: Vec<CourtSlotResponse>) -> FieldSlotGridResponse {
        FieldSlotGridResponse {
            id: "f1".into(),
            name: "Riverside".into(),
            month_limit: Some(1),
            min_booking_minutes: Some(30),
            status: Some("ACTIVE".into()),
            open_time: WireTime::Parts { hour: 8, minute: 0 },
            close_time: WireTime::Text("10:00:00".into()),
            courts: vec![CourtResponse {
                id: "c1".into(),
                name: "Court 1".into(),
                status: Some("ENABLE".into()),
                court_slots: slots,
            }],
        }
    }

    #[test]
    fn grid_converts_and_orders_slots() {
        let grid = FieldSlotGrid::try_from(wire_grid(vec![
            wire_slot("s2", "08:30:00", "09:00:00", "HOLD"),
            wire_slot("s1", "08:00:00", "08:30:00", "AVAILABLE"),
        ]))
        .unwrap();

        assert_eq!(grid.open_time, TimeOfDay::new(8, 0).unwrap());
        assert_eq!(grid.close_time.format_hm(), "10:00");
        let court = grid.court(&CourtId::new("c1")).unwrap();
        assert_eq!(court.slots[0].id, SlotId::new("s1"));
        assert_eq!(court.slots[1].status, SlotStatus::Hold);
        assert_eq!(court.available_slots().count(), 1);
        assert_eq!(grid.time_line(None).unwrap().len(), 5);
    }

    #[test]
    fn inverted_slot_is_rejected() {
        let err = FieldSlotGrid::try_from(wire_grid(vec![wire_slot(
            "s1", "09:00:00", "08:00:00", "AVAILABLE",
        )]))
        .unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));
    }

    #[test]
    fn overlapping_slots_are_rejected() {
        let err = FieldSlotGrid::try_from(wire_grid(vec![
            wire_slot("s1", "08:00:00", "09:00:00", "AVAILABLE"),
            wire_slot("s2", "08:30:00", "09:30:00", "AVAILABLE"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = FieldSlotGrid::try_from(wire_grid(vec![wire_slot(
            "s1", "08:00:00", "09:00:00", "BOOKED",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("BOOKED"));
    }

    #[test]
    fn requests_use_wire_formats() {
        let merge = MergeRequest {
            start_time: TimeOfDay::new(8, 0).unwrap(),
            end_time: TimeOfDay::new(9, 30).unwrap(),
            date: parse_date("2025-03-01").unwrap(),
            court_id: "c1".into(),
        };
        let body = MergeSlotsBody::from(&merge);
        assert_eq!(
            body,
            MergeSlotsBody {
                start_time: "08:00:00".into(),
                end_time: "09:30:00".into(),
                date: "2025-03-01".into(),
                court_id: "c1".into(),
            }
        );
    }
}
