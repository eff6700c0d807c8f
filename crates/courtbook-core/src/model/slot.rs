// ── Court slot domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::ids::SlotId;
use super::time::TimeOfDay;

/// Booking state of a slot as reported by the backend.
///
/// The client never moves a slot between states itself; a new status is
/// only ever observed by refetching the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SlotStatus {
    Available,
    Hold,
    Lock,
    Paid,
}

/// A bookable interval on one court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSlot {
    pub id: SlotId,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: SlotStatus,
    /// Set by the backend when this slot was produced by a merge.
    pub is_merge: bool,
    pub price: Option<f64>,
}

impl CourtSlot {
    /// Only AVAILABLE slots may enter a selection.
    pub fn is_selectable(&self) -> bool {
        self.status == SlotStatus::Available
    }

    /// Price with a missing value counted as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn slot(start: &str, end: &str, status: SlotStatus) -> CourtSlot {
        CourtSlot {
            id: SlotId::new("s"),
            start_time: TimeOfDay::parse(start).unwrap(),
            end_time: TimeOfDay::parse(end).unwrap(),
            status,
            is_merge: false,
            price: None,
        }
    }

    #[test]
    fn status_round_trips_through_strum() {
        assert_eq!("AVAILABLE".parse::<SlotStatus>().unwrap(), SlotStatus::Available);
        assert_eq!("paid".parse::<SlotStatus>().unwrap(), SlotStatus::Paid);
        assert_eq!(SlotStatus::Hold.to_string(), "HOLD");
        assert!("BOOKED".parse::<SlotStatus>().is_err());
    }

    #[test]
    fn only_available_is_selectable() {
        assert!(slot("08:00", "09:00", SlotStatus::Available).is_selectable());
        assert!(!slot("08:00", "09:00", SlotStatus::Hold).is_selectable());
        assert!(!slot("08:00", "09:00", SlotStatus::Lock).is_selectable());
        assert!(!slot("08:00", "09:00", SlotStatus::Paid).is_selectable());
    }

    #[test]
    fn missing_price_is_zero() {
        let s = slot("08:00", "09:30", SlotStatus::Available);
        assert!((s.price_or_zero() - 0.0).abs() < f64::EPSILON);
    }
}
