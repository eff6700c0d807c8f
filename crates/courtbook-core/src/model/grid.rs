// ── Field slot grid ──
//
// Root aggregate returned by `GET fields/{fieldId}/slots?date=...`:
// one field, its opening hours and every court with its slots for
// that date.

use serde::{Deserialize, Serialize};

use super::court::Court;
use super::ids::{CourtId, FieldId, SlotId};
use super::slot::CourtSlot;
use super::time::TimeOfDay;
use crate::error::CoreError;
use crate::timeline::{TimeLine, generate_time_line};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSlotGrid {
    pub id: FieldId,
    pub name: String,
    /// How many months ahead bookings are accepted.
    pub month_limit: Option<u32>,
    /// Shortest bookable duration; also the natural grid step.
    pub min_booking_minutes: Option<u32>,
    pub status: Option<String>,
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
    pub courts: Vec<Court>,
}

impl FieldSlotGrid {
    pub fn court(&self, id: &CourtId) -> Option<&Court> {
        self.courts.iter().find(|c| &c.id == id)
    }

    /// Locate a slot anywhere in the grid, together with its court.
    pub fn find_slot(&self, id: &SlotId) -> Option<(&Court, &CourtSlot)> {
        self.courts
            .iter()
            .find_map(|court| court.slot(id).map(|slot| (court, slot)))
    }

    /// Look up slot ids and group them by court, in grid order. Slots
    /// come back time ordered with duplicates dropped.
    pub fn group_slots(&self, ids: &[SlotId]) -> Result<Vec<(CourtId, Vec<CourtSlot>)>, CoreError> {
        for id in ids {
            if self.find_slot(id).is_none() {
                return Err(CoreError::SlotNotFound {
                    identifier: id.to_string(),
                });
            }
        }

        Ok(self
            .courts
            .iter()
            .filter_map(|court| {
                let picked: Vec<CourtSlot> = court
                    .slots
                    .iter()
                    .filter(|slot| ids.contains(&slot.id))
                    .cloned()
                    .collect();
                (!picked.is_empty()).then(|| (court.id.clone(), picked))
            })
            .collect())
    }

    pub fn slot_count(&self) -> usize {
        self.courts.iter().map(|c| c.slots.len()).sum()
    }

    /// Time line over this field's opening hours. `step` defaults to the
    /// field's minimum booking duration.
    pub fn time_line(&self, step: Option<i64>) -> Result<TimeLine, CoreError> {
        let step = match step {
            Some(step) => step,
            None => self
                .min_booking_minutes
                .map(i64::from)
                .ok_or_else(|| CoreError::ValidationFailed {
                    message: format!("field {} has no minimum booking duration; pass a step", self.id),
                })?,
        };
        generate_time_line(self.open_time, self.close_time, step)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{CourtStatus, SlotStatus};

    fn slot(id: &str, start: &str, end: &str, price: f64) -> CourtSlot {
        CourtSlot {
            id: SlotId::new(id),
            start_time: TimeOfDay::parse(start).unwrap(),
            end_time: TimeOfDay::parse(end).unwrap(),
            status: SlotStatus::Available,
            is_merge: false,
            price: Some(price),
        }
    }

    fn grid() -> FieldSlotGrid {
        FieldSlotGrid {
            id: FieldId::new("f1"),
            name: "Riverside".into(),
            month_limit: None,
            min_booking_minutes: Some(60),
            status: None,
            open_time: TimeOfDay::parse("08:00").unwrap(),
            close_time: TimeOfDay::parse("10:00").unwrap(),
            courts: vec![
                Court {
                    id: CourtId::new("c1"),
                    name: "Court 1".into(),
                    status: CourtStatus::Enable,
                    slots: vec![
                        slot("a", "08:00", "09:00", 100.0),
                        slot("b", "09:00", "10:00", 50.0),
                    ],
                },
                Court {
                    id: CourtId::new("c2"),
                    name: "Court 2".into(),
                    status: CourtStatus::Enable,
                    slots: vec![slot("x", "08:00", "09:00", 25.0)],
                },
            ],
        }
    }

    #[test]
    fn find_slot_returns_owning_court() {
        let g = grid();
        let (court, slot) = g.find_slot(&SlotId::new("x")).unwrap();
        assert_eq!(court.id.as_str(), "c2");
        assert_eq!(slot.price, Some(25.0));
        assert!(g.find_slot(&SlotId::new("zz")).is_none());
        assert_eq!(g.slot_count(), 3);
    }

    #[test]
    fn group_slots_orders_by_grid_and_drops_duplicates() {
        let g = grid();
        let ids = [SlotId::new("x"), SlotId::new("b"), SlotId::new("a"), SlotId::new("b")];
        let grouped = g.group_slots(&ids).unwrap();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0.as_str(), "c1");
        let c1: Vec<&str> = grouped[0].1.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(c1, ["a", "b"]);
        assert_eq!(grouped[1].1.len(), 1);
    }

    #[test]
    fn group_slots_rejects_unknown_ids() {
        let err = grid().group_slots(&[SlotId::new("nope")]).unwrap_err();
        assert!(matches!(err, CoreError::SlotNotFound { .. }));
    }

    #[test]
    fn time_line_defaults_to_min_booking() {
        let labels = grid().time_line(None).unwrap().labels();
        assert_eq!(labels, ["08:00", "09:00", "10:00"]);

        let mut no_min = grid();
        no_min.min_booking_minutes = None;
        assert!(no_min.time_line(None).is_err());
        assert_eq!(no_min.time_line(Some(30)).unwrap().len(), 5);
    }
}
