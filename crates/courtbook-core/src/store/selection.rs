// ── Booking selection ──
//
// Which slots the user has picked, per court, and the price they add up
// to. Writes replace a court's whole list; there is no append. The total
// is derived from the map on every read and never stored.

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::model::{CourtId, CourtSlot, SlotId};

/// Selected slots keyed by court, in the order courts were first selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    courts: IndexMap<CourtId, Vec<CourtSlot>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection for `court_id` with `slots`. The previous
    /// list for that court is discarded entirely; an empty list removes
    /// the court. Returns the new total price.
    pub fn replace(&mut self, court_id: CourtId, slots: Vec<CourtSlot>) -> f64 {
        if slots.is_empty() {
            self.courts.shift_remove(&court_id);
        } else {
            self.courts.insert(court_id, slots);
        }
        self.total_price()
    }

    /// Pure form of [`replace`](Self::replace).
    pub fn with_court(mut self, court_id: CourtId, slots: Vec<CourtSlot>) -> Self {
        self.replace(court_id, slots);
        self
    }

    /// Drop every court's selection.
    pub fn clear(&mut self) {
        self.courts.clear();
    }

    /// Pure form of [`clear`](Self::clear).
    pub fn cleared(mut self) -> Self {
        self.clear();
        self
    }

    /// Σ over courts, Σ over selected slots, of the slot price. Missing
    /// prices count as zero.
    pub fn total_price(&self) -> f64 {
        self.courts
            .values()
            .flat_map(|slots| slots.iter())
            .map(CourtSlot::price_or_zero)
            .sum()
    }

    pub fn court(&self, court_id: &CourtId) -> &[CourtSlot] {
        self.courts.get(court_id).map_or(&[][..], Vec::as_slice)
    }

    pub fn courts(&self) -> impl Iterator<Item = (&CourtId, &[CourtSlot])> {
        self.courts.iter().map(|(id, slots)| (id, slots.as_slice()))
    }

    pub fn contains(&self, slot_id: &SlotId) -> bool {
        self.courts
            .values()
            .any(|slots| slots.iter().any(|s| &s.id == slot_id))
    }

    pub fn court_count(&self) -> usize {
        self.courts.len()
    }

    pub fn slot_count(&self) -> usize {
        self.courts.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Selection", 2)?;
        state.serialize_field("courts", &self.courts)?;
        state.serialize_field("totalPrice", &self.total_price())?;
        state.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{SlotStatus, TimeOfDay};

    fn priced(id: &str, start_hour: u32, price: Option<f64>) -> CourtSlot {
        CourtSlot {
            id: SlotId::new(id),
            start_time: TimeOfDay::new(start_hour, 0).unwrap(),
            end_time: TimeOfDay::new(start_hour + 1, 0).unwrap(),
            status: SlotStatus::Available,
            is_merge: false,
            price,
        }
    }

    fn assert_price(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn total_tracks_replacements_across_courts() {
        let mut sel = Selection::new();
        sel.replace(
            "court1".into(),
            vec![priced("a", 8, Some(100.0)), priced("b", 9, Some(50.0))],
        );
        let total = sel.replace("court2".into(), vec![priced("c", 8, Some(25.0))]);
        assert_price(total, 175.0);

        let total = sel.replace("court1".into(), vec![]);
        assert_price(total, 25.0);
        assert_price(sel.total_price(), 25.0);
    }

    #[test]
    fn replace_discards_previous_list() {
        let mut sel = Selection::new();
        sel.replace("court1".into(), vec![priced("a", 8, Some(10.0)), priced("b", 9, Some(10.0))]);
        sel.replace("court1".into(), vec![priced("c", 10, Some(5.0))]);

        let ids: Vec<&str> = sel.court(&"court1".into()).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
        assert!(!sel.contains(&SlotId::new("a")));
        assert_eq!(sel.court_count(), 1);
        assert_price(sel.total_price(), 5.0);
    }

    #[test]
    fn missing_price_counts_as_zero() {
        let sel = Selection::new().with_court(
            "court1".into(),
            vec![priced("a", 8, None), priced("b", 9, Some(40.0))],
        );
        assert_price(sel.total_price(), 40.0);
        assert_eq!(sel.slot_count(), 2);
    }

    #[test]
    fn cleared_resets_everything() {
        let sel = Selection::new()
            .with_court("court1".into(), vec![priced("a", 8, Some(1.0))])
            .cleared();
        assert!(sel.is_empty());
        assert_price(sel.total_price(), 0.0);
    }

    #[test]
    fn court_order_is_first_selection_order() {
        let sel = Selection::new()
            .with_court("b".into(), vec![priced("1", 8, None)])
            .with_court("a".into(), vec![priced("2", 8, None)])
            .with_court("b".into(), vec![priced("3", 9, None)]);
        let order: Vec<&str> = sel.courts().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn serializes_with_derived_total() {
        let sel = Selection::new().with_court("court1".into(), vec![priced("a", 8, Some(12.5))]);
        let value = serde_json::to_value(&sel).unwrap();
        assert_eq!(value["totalPrice"], 12.5);
        assert_eq!(value["courts"]["court1"][0]["id"], "a");
        assert_eq!(value["courts"]["court1"][0]["startTime"], "08:00");
    }
}
