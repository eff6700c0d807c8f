// ── Time grid generator ──
//
// Produces the column labels of the booking grid: every `step` minutes
// from opening time up to and including closing time. No wrap past
// midnight; an opening time after the closing time yields an empty line.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{TimeInput, TimeOfDay};

/// One label on the time line, serialised as `{"time": "HH:MM"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeMark {
    pub time: TimeOfDay,
}

/// A finite, materialised sequence of time marks. Iterating borrows, so
/// the same line can be walked any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeLine {
    marks: Vec<TimeMark>,
}

impl TimeLine {
    pub fn iter(&self) -> std::slice::Iter<'_, TimeMark> {
        self.marks.iter()
    }

    pub fn marks(&self) -> &[TimeMark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn first(&self) -> Option<TimeOfDay> {
        self.marks.first().map(|m| m.time)
    }

    pub fn last(&self) -> Option<TimeOfDay> {
        self.marks.last().map(|m| m.time)
    }

    /// The `HH:MM` labels in order.
    pub fn labels(&self) -> Vec<String> {
        self.marks.iter().map(|m| m.time.format_hm()).collect()
    }
}

impl<'a> IntoIterator for &'a TimeLine {
    type Item = &'a TimeMark;
    type IntoIter = std::slice::Iter<'a, TimeMark>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.iter()
    }
}

impl IntoIterator for TimeLine {
    type Item = TimeMark;
    type IntoIter = std::vec::IntoIter<TimeMark>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.into_iter()
    }
}

/// Generate the time line for `[open, close]` in `step_minutes` increments.
///
/// Both bounds accept either time shape and are normalised the same way.
/// A step of zero or less is rejected with [`CoreError::InvalidStep`].
pub fn generate_time_line(
    open: impl Into<TimeInput>,
    close: impl Into<TimeInput>,
    step_minutes: i64,
) -> Result<TimeLine, CoreError> {
    if step_minutes <= 0 {
        return Err(CoreError::InvalidStep { step: step_minutes });
    }
    // Any step past the end of the day yields just the opening mark.
    let step = usize::try_from(step_minutes).unwrap_or(usize::MAX);

    let open = open.into().normalize()?;
    let close = close.into().normalize()?;

    let end = close.minutes_since_midnight();
    let marks = (open.minutes_since_midnight()..=end)
        .step_by(step)
        .filter_map(TimeOfDay::from_minutes)
        .map(|time| TimeMark { time })
        .collect();

    Ok(TimeLine { marks })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(open: &str, close: &str, step: i64) -> Vec<String> {
        generate_time_line(open, close, step).unwrap().labels()
    }

    #[test]
    fn single_point_when_open_equals_close() {
        assert_eq!(labels("08:00", "08:00", 30), vec!["08:00"]);
    }

    #[test]
    fn inclusive_of_close() {
        assert_eq!(labels("08:00", "09:00", 30), vec!["08:00", "08:30", "09:00"]);
    }

    #[test]
    fn empty_when_open_after_close() {
        assert!(generate_time_line("09:00", "08:00", 30).unwrap().is_empty());
    }

    #[test]
    fn minute_overflow_carries_into_hours() {
        assert_eq!(
            labels("08:45", "10:00", 25),
            vec!["08:45", "09:10", "09:35", "10:00"]
        );
    }

    #[test]
    fn close_not_on_step_boundary() {
        assert_eq!(labels("08:00", "09:10", 30), vec!["08:00", "08:30", "09:00"]);
    }

    #[test]
    fn accepts_mixed_input_shapes() {
        let line = generate_time_line(
            TimeInput::Structured { hour: 8, minute: 0 },
            "09:00:00",
            60,
        )
        .unwrap();
        assert_eq!(line.labels(), vec!["08:00", "09:00"]);
    }

    #[test]
    fn oversized_step_yields_only_open() {
        assert_eq!(labels("08:00", "09:00", 5_000_000_000), vec!["08:00"]);
        assert_eq!(labels("08:00", "09:00", i64::MAX), vec!["08:00"]);
    }

    #[test]
    fn non_positive_step_fails_fast() {
        assert!(matches!(
            generate_time_line("08:00", "09:00", 0),
            Err(CoreError::InvalidStep { step: 0 })
        ));
        assert!(matches!(
            generate_time_line("08:00", "09:00", -15),
            Err(CoreError::InvalidStep { step: -15 })
        ));
    }

    #[test]
    fn malformed_bound_fails_fast() {
        assert!(matches!(
            generate_time_line("8h", "09:00", 30),
            Err(CoreError::InvalidTime { .. })
        ));
    }

    #[test]
    fn line_is_restartable() {
        let line = generate_time_line("06:00", "07:00", 20).unwrap();
        let first: Vec<_> = line.iter().collect();
        let second: Vec<_> = (&line).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(line.len(), 4);
    }

    #[test]
    fn bounds_property_holds_over_a_day() {
        let steps = [1_i64, 7, 15, 25, 30, 45, 60, 90, 240];
        for open_min in (0..24 * 60).step_by(97) {
            for close_min in (open_min..24 * 60).step_by(131) {
                for step in steps {
                    let open = TimeOfDay::from_minutes(open_min).unwrap();
                    let close = TimeOfDay::from_minutes(close_min).unwrap();
                    let line = generate_time_line(open, close, step).unwrap();

                    assert_eq!(line.first(), Some(open));
                    let marks: Vec<u32> =
                        line.iter().map(|m| m.time.minutes_since_midnight()).collect();
                    assert!(marks.windows(2).all(|w| w[0] < w[1]));

                    let last = i64::from(*marks.last().unwrap());
                    let close = i64::from(close_min);
                    assert!(last <= close);
                    assert!(last > close - step);
                }
            }
        }
    }
}
