// ── Identity types ──
//
// The backend identifies fields, courts and slots by opaque strings
// (numeric ids are normalised to text at the wire layer). Each gets its
// own newtype so a court id can never be passed where a slot id belongs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a field (venue area that owns a set of courts).
    FieldId
);
string_id!(
    /// Identifier of a single court within a field.
    CourtId
);
string_id!(
    /// Identifier of a bookable slot on a court.
    SlotId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = CourtId::new("court-7");
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("\"court-7\""));
        assert_eq!(id.to_string(), "court-7");
    }

    #[test]
    fn ids_parse_from_str() {
        let id: SlotId = "42".parse().unwrap_or_else(|e| match e {});
        assert_eq!(id.as_str(), "42");
    }
}
