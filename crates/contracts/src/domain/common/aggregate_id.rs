use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// Identifier of an API record
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + fmt::Debug
{
    /// Render the id the way the API expects it in paths
    fn as_string(&self) -> String;

    /// Parse an id taken from a route or local storage
    fn from_string(s: &str) -> Result<Self, String>;
}

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new(value: Uuid) -> Self {
                Self(value)
            }

            pub fn value(&self) -> Uuid {
                self.0
            }
        }

        impl AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                Uuid::parse_str(s.trim())
                    .map(Self::new)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Venue identifier
    VenueId
);

uuid_id!(
    /// Booking identifier
    BookingId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_string() {
        let raw = "4f1c1a52-7d3f-4d1e-9a9c-2b6f5a0e8c11";
        let id = VenueId::from_string(raw).unwrap();
        assert_eq!(id.as_string(), raw);
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = BookingId::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("Invalid BookingId"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = VenueId::from_string("4f1c1a52-7d3f-4d1e-9a9c-2b6f5a0e8c11").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"4f1c1a52-7d3f-4d1e-9a9c-2b6f5a0e8c11\"");
    }
}
