// ── Observable selection store ──
//
// Owned by the UI layer. Holds the current `Selection` in a `watch`
// channel so views can subscribe; every write publishes a fresh snapshot.

use std::sync::Arc;

use tokio::sync::watch;

use super::selection::Selection;
use crate::model::{CourtId, CourtSlot};

pub struct SelectionStore {
    current: watch::Sender<Arc<Selection>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(Arc::new(Selection::new()));
        Self { current }
    }

    /// Current selection.
    pub fn snapshot(&self) -> Arc<Selection> {
        self.current.borrow().clone()
    }

    /// Receiver that wakes on every selection change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Selection>> {
        self.current.subscribe()
    }

    pub fn total_price(&self) -> f64 {
        self.current.borrow().total_price()
    }

    /// Replace one court's selection and publish. Returns the new total.
    ///
    /// Callers are expected to pass only AVAILABLE slots; the store does
    /// not check status.
    pub fn set_selection(&self, court_id: CourtId, slots: Vec<CourtSlot>) -> f64 {
        let mut total = 0.0;
        self.current.send_modify(|sel| {
            total = Arc::make_mut(sel).replace(court_id, slots);
        });
        total
    }

    /// Reset to empty. Called whenever the active field or date changes.
    pub fn clear_on_context_change(&self) {
        self.current.send_replace(Arc::new(Selection::new()));
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{SlotId, SlotStatus, TimeOfDay};

    fn slot(id: &str, price: f64) -> CourtSlot {
        CourtSlot {
            id: SlotId::new(id),
            start_time: TimeOfDay::new(8, 0).unwrap(),
            end_time: TimeOfDay::new(9, 0).unwrap(),
            status: SlotStatus::Available,
            is_merge: false,
            price: Some(price),
        }
    }

    #[tokio::test]
    async fn subscribers_see_each_write() {
        let store = SelectionStore::new();
        let mut rx = store.subscribe();

        let total = store.set_selection("court1".into(), vec![slot("a", 30.0)]);
        assert!((total - 30.0).abs() < 1e-9);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().slot_count(), 1);

        store.clear_on_context_change();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
        assert!(store.total_price().abs() < 1e-9);
    }

    #[test]
    fn old_snapshots_are_unaffected_by_later_writes() {
        let store = SelectionStore::new();
        store.set_selection("court1".into(), vec![slot("a", 10.0)]);
        let before = store.snapshot();

        store.set_selection("court1".into(), vec![slot("b", 20.0)]);

        assert!(before.contains(&SlotId::new("a")));
        assert!(store.snapshot().contains(&SlotId::new("b")));
        assert!(!store.snapshot().contains(&SlotId::new("a")));
    }
}
