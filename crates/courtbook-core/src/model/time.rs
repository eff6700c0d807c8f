// ── Time-of-day ──
//
// Opening hours and slot boundaries are wall-clock times with minute
// precision: no date, no timezone, no seconds. The backend sends them as
// "HH:MM:SS" text or as `{hour, minute}` objects; `TimeInput` models both
// shapes and `TimeInput::normalize` is the one place they become a
// `TimeOfDay`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time, normalised to 24h and minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, CoreError> {
        match (u8::try_from(hour), u8::try_from(minute)) {
            (Ok(h), Ok(m)) if h < 24 && m < 60 => Ok(Self { hour: h, minute: m }),
            _ => Err(CoreError::InvalidTime {
                input: format!("{hour}:{minute}"),
            }),
        }
    }

    /// Parse `H:MM`, `HH:MM` or `HH:MM:SS`. Seconds are validated, then dropped.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidTime {
            input: input.to_owned(),
        };

        let mut parts = input.trim().split(':');
        let hour = parts.next().and_then(parse_component).ok_or_else(invalid)?;
        let minute = parts.next().and_then(parse_component).ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            match parse_component(seconds) {
                Some(s) if s < 60 => {}
                _ => return Err(invalid()),
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Self::new(hour, minute).map_err(|_| invalid())
    }

    /// Build from minutes since midnight. `None` past 23:59.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        Self::new(minutes / 60, minutes % 60).ok()
    }

    pub fn hour(self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.minute)
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Display form, `HH:MM`.
    pub fn format_hm(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Wire form, `HH:MM:SS` with zero seconds.
    pub fn to_wire(self) -> String {
        format!("{:02}:{:02}:00", self.hour, self.minute)
    }
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_hm())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TimeInput::deserialize(deserializer)?
            .normalize()
            .map_err(serde::de::Error::custom)
    }
}

// ── TimeInput ───────────────────────────────────────────────────────

/// A time value in either of the shapes callers and the backend use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    /// `"HH:MM"` or `"HH:MM:SS"`.
    Raw(String),
    /// `{hour, minute}`.
    Structured { hour: u32, minute: u32 },
}

impl TimeInput {
    /// Canonicalise to a `TimeOfDay`. Both shapes go through the same
    /// range checks; malformed input is an error, never a silent 00:00.
    pub fn normalize(&self) -> Result<TimeOfDay, CoreError> {
        match self {
            Self::Raw(s) => TimeOfDay::parse(s),
            Self::Structured { hour, minute } => TimeOfDay::new(*hour, *minute),
        }
    }
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_owned())
    }
}

impl From<String> for TimeInput {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<TimeOfDay> for TimeInput {
    fn from(t: TimeOfDay) -> Self {
        Self::Structured {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

/// Normalise either time shape. Convenience wrapper over [`TimeInput::normalize`].
pub fn parse_time(input: impl Into<TimeInput>) -> Result<TimeOfDay, CoreError> {
    input.into().normalize()
}

/// Format as `HH:MM`.
pub fn format_time(time: TimeOfDay) -> String {
    time.format_hm()
}

// ── Dates ───────────────────────────────────────────────────────────

/// Parse a booking date, `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CoreError::InvalidDate {
        input: input.to_owned(),
    })
}

/// Format a booking date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn structured_and_text_normalize_identically() {
        let structured = parse_time(TimeInput::Structured { hour: 9, minute: 30 }).unwrap();
        let text = parse_time("09:30:00").unwrap();
        assert_eq!(structured, text);
        assert_eq!(text.hour(), 9);
        assert_eq!(text.minute(), 30);
    }

    #[test]
    fn format_parse_round_trip() {
        for s in ["00:00", "07:05", "12:30", "23:59"] {
            assert_eq!(format_time(parse_time(s).unwrap()), s);
        }
        assert_eq!(format_time(parse_time("18:45:59").unwrap()), "18:45");
    }

    #[test]
    fn single_digit_hour_accepted() {
        assert_eq!(TimeOfDay::parse("9:05").unwrap(), TimeOfDay::new(9, 5).unwrap());
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "0930", "24:00", "12:60", "ab:cd", "12:30:61", "1:2:3:4", "-1:00", "123:00"] {
            assert!(
                matches!(TimeOfDay::parse(bad), Err(CoreError::InvalidTime { .. })),
                "expected InvalidTime for {bad:?}"
            );
        }
        assert!(TimeInput::Structured { hour: 25, minute: 0 }.normalize().is_err());
    }

    #[test]
    fn ordering_follows_clock() {
        let a = TimeOfDay::new(8, 59).unwrap();
        let b = TimeOfDay::new(9, 0).unwrap();
        assert!(a < b);
        assert_eq!(b.minutes_since_midnight(), 540);
        assert_eq!(TimeOfDay::from_minutes(540), Some(b));
        assert_eq!(TimeOfDay::from_minutes(MINUTES_PER_DAY), None);
    }

    #[test]
    fn dates_use_iso_calendar_form() {
        let d = parse_date("2025-03-01").unwrap();
        assert_eq!(format_date(d), "2025-03-01");
        assert!(matches!(parse_date("01/03/2025"), Err(CoreError::InvalidDate { .. })));
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn serde_uses_display_form_and_accepts_both_shapes() {
        let t = TimeOfDay::new(6, 0).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"06:00\"");
        assert_eq!(t.to_wire(), "06:00:00");

        let from_obj: TimeOfDay = serde_json::from_str(r#"{"hour":6,"minute":0}"#).unwrap();
        let from_text: TimeOfDay = serde_json::from_str(r#""06:00:00""#).unwrap();
        assert_eq!(from_obj, t);
        assert_eq!(from_text, t);
    }
}
