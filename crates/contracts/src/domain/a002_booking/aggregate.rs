use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_venue::aggregate::Venue;
use crate::domain::a003_profile::aggregate::ProfileSummary;
use crate::domain::common::{BookingId, VenueId};

/// Reservation of a venue for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub venue: Option<Box<Venue>>,
    #[serde(default)]
    pub customer: Option<ProfileSummary>,
}

impl Booking {
    pub fn check_in(&self) -> NaiveDate {
        self.date_from.date_naive()
    }

    pub fn check_out(&self) -> NaiveDate {
        self.date_to.date_naive()
    }

    pub fn nights(&self) -> i64 {
        (self.check_out() - self.check_in()).num_days().max(1)
    }

    /// Cost of the stay at `price_per_night`, rounded to cents
    pub fn cost(&self, price_per_night: f64) -> f64 {
        ((price_per_night * self.nights() as f64) * 100.0).round() / 100.0
    }

    /// Total cost when the venue was loaded alongside the booking
    pub fn total_price(&self) -> Option<f64> {
        self.venue.as_ref().map(|v| self.cost(v.price))
    }
}

/// Payload for `POST /holidaze/bookings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub guests: u32,
    pub venue_id: VenueId,
}

/// Midnight UTC of a calendar date, the form the API stores stay dates in
pub fn date_to_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn booking(id_suffix: u32, from: &str, to: &str, guests: u32) -> Booking {
        serde_json::from_value(json!({
            "id": format!("00000000-0000-4000-9000-{:012}", id_suffix),
            "dateFrom": format!("{}T00:00:00.000Z", from),
            "dateTo": format!("{}T00:00:00.000Z", to),
            "guests": guests,
            "created": "2024-01-01T10:00:00.000Z",
            "updated": "2024-01-01T10:00:00.000Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserializes_api_payload() {
        let b = booking(1, "2024-05-01", "2024-05-04", 2);
        assert_eq!(b.check_in(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(b.check_out(), NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
        assert_eq!(b.nights(), 3);
        assert_eq!(b.guests, 2);
        assert!(b.total_price().is_none());
    }

    #[test]
    fn test_total_price_with_venue() {
        let mut b = booking(1, "2024-05-01", "2024-05-04", 2);
        let venue = crate::domain::a001_venue::aggregate::tests::venue(
            "00000000-0000-4000-8000-000000000001",
            "Cabin",
            99.99,
            2,
            "2024-01-01T00:00:00Z",
        );
        b.venue = Some(Box::new(venue));
        assert_eq!(b.total_price(), Some(299.97));
    }

    #[test]
    fn test_dto_wire_format() {
        let dto = BookingDto {
            date_from: date_to_utc(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()),
            date_to: date_to_utc(NaiveDate::from_ymd_opt(2024, 7, 3).unwrap()),
            guests: 3,
            venue_id: VenueId::new(uuid::Uuid::nil()),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["dateFrom"], "2024-07-01T00:00:00Z");
        assert_eq!(value["dateTo"], "2024-07-03T00:00:00Z");
        assert_eq!(value["guests"], 3);
        assert_eq!(value["venueId"], "00000000-0000-0000-0000-000000000000");
    }
}
