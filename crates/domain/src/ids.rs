use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned character identifier.
///
/// Opaque to the client: the API may hand out numeric or string ids, and
/// whichever form arrives is sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(IdRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Numeric(i64),
    Text(String),
}

impl CharacterId {
    pub fn numeric(value: i64) -> Self {
        Self(IdRepr::Numeric(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self(IdRepr::Text(value.into()))
    }

    /// Parses an id taken from a route segment.
    ///
    /// Digit-only segments become numeric ids so they compare equal to ids
    /// the API returned as JSON numbers.
    pub fn from_route(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(n) => Self::numeric(n),
            Err(_) => Self::text(segment),
        }
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            IdRepr::Numeric(n) => write!(f, "{}", n),
            IdRepr::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CharacterId {
    fn from(value: i64) -> Self {
        Self::numeric(value)
    }
}

impl From<&str> for CharacterId {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let n: CharacterId = serde_json::from_str("7").unwrap();
        let s: CharacterId = serde_json::from_str("\"6571f0c2\"").unwrap();

        assert_eq!(n, CharacterId::numeric(7));
        assert_eq!(s, CharacterId::text("6571f0c2"));
        assert_eq!(serde_json::to_string(&n).unwrap(), "7");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"6571f0c2\"");
    }

    #[test]
    fn route_segments_match_wire_ids() {
        assert_eq!(CharacterId::from_route("7"), CharacterId::numeric(7));
        assert_eq!(CharacterId::from_route("abc"), CharacterId::text("abc"));
        assert_eq!(CharacterId::from_route("42").to_string(), "42");
    }
}
