// Wire types for the booking backend.
//
// Field names follow the backend's camelCase JSON. Identifiers are
// accepted as JSON strings or integers and normalised to `String`; time
// fields are accepted either as "HH:MM[:SS]" text or `{hour, minute}`.

use serde::{Deserialize, Deserializer, Serialize};

// ── Envelope ─────────────────────────────────────────────────────────

/// Successful bodies arrive either bare or wrapped in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeEnveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Error body shape. `message` is a string or, for validation failures,
/// an array of strings.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub(crate) fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                Some(parts.join("; "))
            }
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ── Time ─────────────────────────────────────────────────────────────

/// A time-of-day as the backend sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireTime {
    Text(String),
    Parts { hour: u32, minute: u32 },
}

// ── Slot grid ────────────────────────────────────────────────────────

/// `GET fields/{fieldId}/slots?date=YYYY-MM-DD`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSlotGridResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub month_limit: Option<u32>,
    #[serde(default)]
    pub min_booking_minutes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    pub open_time: WireTime,
    pub close_time: WireTime,
    #[serde(default)]
    pub courts: Vec<CourtResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "slots", alias = "timeSlots")]
    pub court_slots: Vec<CourtSlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSlotResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub start_time: WireTime,
    pub end_time: WireTime,
    pub status: String,
    #[serde(default)]
    pub is_merge: bool,
    #[serde(default)]
    pub price: Option<f64>,
}

// ── Mutation bodies ──────────────────────────────────────────────────

/// `POST court-slots/lock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockSlotsBody {
    pub date: String,
    pub field_id: String,
    pub courts: Vec<LockCourtBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockCourtBody {
    pub id: String,
    pub time_slots: Vec<LockTimeSlotBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockTimeSlotBody {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
}

/// `POST court-slots/unlock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockSlotsBody {
    pub date: String,
    pub field_id: String,
    pub courts: Vec<UnlockCourtBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockCourtBody {
    pub id: String,
    pub slot_ids: Vec<String>,
}

/// `POST court-slots/merge`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSlotsBody {
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub court_id: String,
}

// ── Helpers ──────────────────────────────────────────────────────────

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn grid_accepts_numeric_ids_and_both_time_forms() {
        let raw = serde_json::json!({
            "id": 7,
            "name": "Riverside",
            "monthLimit": 2,
            "minBookingMinutes": 30,
            "status": "ACTIVE",
            "openTime": "06:00:00",
            "closeTime": { "hour": 22, "minute": 0 },
            "courts": [{
                "id": "c1",
                "name": "Court 1",
                "status": "ENABLE",
                "slots": [{
                    "id": 99,
                    "startTime": "06:00:00",
                    "endTime": "06:30:00",
                    "status": "AVAILABLE",
                    "price": 120000
                }]
            }]
        });

        let grid: FieldSlotGridResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(grid.id, "7");
        assert_eq!(grid.open_time, WireTime::Text("06:00:00".into()));
        assert_eq!(grid.close_time, WireTime::Parts { hour: 22, minute: 0 });
        assert_eq!(grid.courts[0].court_slots[0].id, "99");
        assert!(!grid.courts[0].court_slots[0].is_merge);
    }

    #[test]
    fn envelope_unwraps_data_or_passes_through() {
        let wrapped: MaybeEnveloped<Vec<u32>> =
            serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        let bare: MaybeEnveloped<Vec<u32>> = serde_json::from_str("[3]").unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
        assert_eq!(bare.into_inner(), vec![3]);
    }

    #[test]
    fn error_message_array_is_joined() {
        let err: ErrorResponse = serde_json::from_str(
            r#"{"statusCode":400,"message":["date must be a date","courts should not be empty"],"error":"Bad Request"}"#,
        )
        .unwrap();
        assert_eq!(
            err.message_text().as_deref(),
            Some("date must be a date; courts should not be empty")
        );
    }

    #[test]
    fn lock_body_uses_camel_case() {
        let body = LockSlotsBody {
            date: "2025-03-01".into(),
            field_id: "f1".into(),
            courts: vec![LockCourtBody {
                id: "c1".into(),
                time_slots: vec![LockTimeSlotBody {
                    id: "s1".into(),
                    start_time: "08:00:00".into(),
                    end_time: "08:30:00".into(),
                }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["fieldId"], "f1");
        assert_eq!(value["courts"][0]["timeSlots"][0]["startTime"], "08:00:00");
    }
}
