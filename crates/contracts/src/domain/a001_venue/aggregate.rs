use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_booking::aggregate::Booking;
use crate::domain::a003_profile::aggregate::ProfileSummary;
use crate::domain::common::VenueId;
use crate::shared::media::{is_valid_image_url, Media};
use crate::shared::validation::ValidationErrors;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PRICE: f64 = 10_000.0;
pub const MAX_GUESTS: u32 = 100;
pub const MAX_RATING: f64 = 5.0;
pub const MAX_MEDIA: usize = 8;

// ============================================================================
// Aggregate
// ============================================================================

/// Rentable property as returned by `/holidaze/venues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub meta: VenueMeta,
    #[serde(default)]
    pub location: VenueLocation,
    #[serde(default)]
    pub owner: Option<ProfileSummary>,
    #[serde(default)]
    pub bookings: Option<Vec<Booking>>,
    #[serde(rename = "_count", default)]
    pub count: Option<VenueCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VenueCount {
    #[serde(default)]
    pub bookings: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VenueMeta {
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub pets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Parking,
    Breakfast,
    Pets,
}

impl Amenity {
    pub const ALL: [Amenity; 4] = [
        Amenity::Wifi,
        Amenity::Parking,
        Amenity::Breakfast,
        Amenity::Pets,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "Wifi",
            Amenity::Parking => "Parking",
            Amenity::Breakfast => "Breakfast",
            Amenity::Pets => "Pets allowed",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Breakfast => "coffee",
            Amenity::Pets => "paw",
        }
    }
}

impl VenueMeta {
    pub fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Wifi => self.wifi,
            Amenity::Parking => self.parking,
            Amenity::Breakfast => self.breakfast,
            Amenity::Pets => self.pets,
        }
    }

    pub fn set(&mut self, amenity: Amenity, value: bool) {
        match amenity {
            Amenity::Wifi => self.wifi = value,
            Amenity::Parking => self.parking = value,
            Amenity::Breakfast => self.breakfast = value,
            Amenity::Pets => self.pets = value,
        }
    }

    pub fn amenities(&self) -> Vec<Amenity> {
        Amenity::ALL.into_iter().filter(|a| self.has(*a)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VenueLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl VenueLocation {
    /// "City, Country" with missing parts dropped
    pub fn display(&self) -> String {
        let parts: Vec<&str> = [non_blank(&self.city), non_blank(&self.country)]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            "Unknown location".to_string()
        } else {
            parts.join(", ")
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }
}

impl Venue {
    /// First usable image, or a placeholder when the venue has none
    pub fn primary_media(&self) -> Media {
        self.media
            .iter()
            .find(|m| m.is_valid())
            .cloned()
            .unwrap_or_else(Media::placeholder)
    }

    pub fn valid_media(&self) -> Vec<Media> {
        self.media.iter().filter(|m| m.is_valid()).cloned().collect()
    }

    pub fn is_owned_by(&self, profile_name: &str) -> bool {
        self.owner
            .as_ref()
            .map(|o| o.name.eq_ignore_ascii_case(profile_name))
            .unwrap_or(false)
    }

    pub fn bookings(&self) -> &[Booking] {
        self.bookings.as_deref().unwrap_or(&[])
    }

    pub fn booking_count(&self) -> u32 {
        self.count
            .map(|c| c.bookings)
            .unwrap_or_else(|| self.bookings().len() as u32)
    }

    pub fn to_dto(&self) -> VenueDto {
        VenueDto {
            name: self.name.clone(),
            description: self.description.clone(),
            media: self.media.clone(),
            price: self.price,
            max_guests: self.max_guests,
            rating: self.rating,
            meta: self.meta,
            location: self.location.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for creating or updating a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDto {
    pub name: String,
    pub description: String,
    pub media: Vec<Media>,
    pub price: f64,
    pub max_guests: u32,
    pub rating: f64,
    pub meta: VenueMeta,
    pub location: VenueLocation,
}

impl Default for VenueDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            media: Vec::new(),
            price: 0.0,
            max_guests: 1,
            rating: 0.0,
            meta: VenueMeta::default(),
            location: VenueLocation::default(),
        }
    }
}

impl VenueDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.add(
                "name",
                format!("Name must be at most {} characters", MAX_NAME_LEN),
            );
        }

        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            errors.add("price", "Price must be greater than 0");
        } else if self.price > MAX_PRICE {
            errors.add("price", format!("Price must be at most {}", MAX_PRICE));
        }

        if self.max_guests == 0 || self.max_guests > MAX_GUESTS {
            errors.add(
                "maxGuests",
                format!("Guests must be between 1 and {}", MAX_GUESTS),
            );
        }

        if !self.rating.is_finite() || self.rating < 0.0 || self.rating > MAX_RATING {
            errors.add("rating", "Rating must be between 0 and 5");
        }

        if self.media.len() > MAX_MEDIA {
            errors.add("media", format!("At most {} images are allowed", MAX_MEDIA));
        }
        for (i, m) in self.media.iter().enumerate() {
            if !is_valid_image_url(&m.url) {
                errors.add(
                    "media",
                    format!("Image {} must be a valid http(s) URL", i + 1),
                );
            }
        }

        errors.into_result()
    }

    /// Drops blank media rows and trims text fields before sending
    pub fn normalized(&self) -> Self {
        let mut dto = self.clone();
        dto.name = dto.name.trim().to_string();
        dto.description = dto.description.trim().to_string();
        dto.media = dto
            .media
            .into_iter()
            .filter(|m| !m.url.trim().is_empty())
            .map(|m| Media::new(m.url.trim(), m.alt.trim()))
            .collect();
        dto
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn venue_json(
        id: &str,
        name: &str,
        price: f64,
        max_guests: u32,
        created: &str,
    ) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "description": format!("{} description", name),
            "media": [{ "url": "https://example.com/a.jpg", "alt": name }],
            "price": price,
            "maxGuests": max_guests,
            "rating": 4,
            "created": created,
            "updated": created,
            "meta": { "wifi": true, "parking": false, "breakfast": true, "pets": false },
            "location": {
                "address": "Main street 1",
                "city": "Oslo",
                "zip": "0150",
                "country": "Norway",
                "continent": "Europe",
                "lat": 59.9,
                "lng": 10.7
            },
            "_count": { "bookings": 2 }
        })
    }

    pub fn venue(id: &str, name: &str, price: f64, max_guests: u32, created: &str) -> Venue {
        serde_json::from_value(venue_json(id, name, price, max_guests, created)).unwrap()
    }

    fn valid_dto() -> VenueDto {
        VenueDto {
            name: "Cabin".into(),
            description: "Cosy cabin".into(),
            media: vec![Media::new("https://example.com/cabin.jpg", "Cabin")],
            price: 120.0,
            max_guests: 4,
            rating: 4.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_deserializes_api_payload() {
        let v = venue(
            "8e5c7c0f-1111-4c1e-9a1b-000000000001",
            "Beach house",
            250.0,
            6,
            "2024-01-10T12:00:00.000Z",
        );
        assert_eq!(v.name, "Beach house");
        assert_eq!(v.max_guests, 6);
        assert!(v.meta.wifi);
        assert_eq!(v.meta.amenities(), vec![Amenity::Wifi, Amenity::Breakfast]);
        assert_eq!(v.location.display(), "Oslo, Norway");
        assert_eq!(v.booking_count(), 2);
        assert!(v.owner.is_none());
    }

    #[test]
    fn test_tolerates_null_location_fields() {
        let mut raw = venue_json(
            "8e5c7c0f-1111-4c1e-9a1b-000000000001",
            "X",
            10.0,
            1,
            "2024-01-10T12:00:00Z",
        );
        raw["location"] = json!({
            "address": null,
            "city": null,
            "country": "",
            "lat": 0,
            "lng": 0
        });
        raw["media"] = json!([]);
        let v: Venue = serde_json::from_value(raw).unwrap();
        assert_eq!(v.location.display(), "Unknown location");
        assert!(!v.location.has_coordinates());
        assert_eq!(v.primary_media(), Media::placeholder());
    }

    #[test]
    fn test_primary_media_skips_invalid_urls() {
        let mut v = venue(
            "8e5c7c0f-1111-4c1e-9a1b-000000000001",
            "X",
            10.0,
            1,
            "2024-01-10T12:00:00Z",
        );
        v.media = vec![
            Media::new("not a url", "bad"),
            Media::new("https://example.com/good.jpg", "good"),
        ];
        assert_eq!(v.primary_media().alt, "good");
        assert_eq!(v.valid_media().len(), 1);
    }

    #[test]
    fn test_is_owned_by_ignores_case() {
        let mut raw = venue_json(
            "8e5c7c0f-1111-4c1e-9a1b-000000000001",
            "X",
            10.0,
            1,
            "2024-01-10T12:00:00Z",
        );
        raw["owner"] = json!({ "name": "Kari_Host", "email": "kari@stud.noroff.no" });
        let v: Venue = serde_json::from_value(raw).unwrap();
        assert!(v.is_owned_by("kari_host"));
        assert!(!v.is_owned_by("ola"));
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_dto_reports_each_bad_field() {
        let dto = VenueDto {
            name: "  ".into(),
            description: String::new(),
            media: vec![Media::new("ftp://x.com/a.jpg", "")],
            price: 0.0,
            max_guests: 0,
            rating: 6.0,
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        for field in ["name", "description", "price", "maxGuests", "rating", "media"] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
    }

    #[test]
    fn test_dto_limits() {
        let mut dto = valid_dto();
        dto.max_guests = 101;
        dto.price = 10_000.5;
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("maxGuests"), Some("Guests must be between 1 and 100"));
        assert!(errors.get("price").is_some());

        let mut dto = valid_dto();
        dto.max_guests = 100;
        dto.price = 10_000.0;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_normalized_drops_blank_media() {
        let mut dto = valid_dto();
        dto.name = "  Cabin  ".into();
        dto.media.push(Media::new("   ", ""));
        let n = dto.normalized();
        assert_eq!(n.name, "Cabin");
        assert_eq!(n.media.len(), 1);
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let value = serde_json::to_value(valid_dto()).unwrap();
        assert_eq!(value["maxGuests"], 4);
        assert!(value.get("max_guests").is_none());
        assert_eq!(value["meta"]["wifi"], false);
    }

    #[test]
    fn test_to_dto_copies_editable_fields() {
        let v = venue(
            "8e5c7c0f-1111-4c1e-9a1b-000000000001",
            "Loft",
            99.0,
            2,
            "2024-01-10T12:00:00Z",
        );
        let dto = v.to_dto();
        assert_eq!(dto.name, "Loft");
        assert_eq!(dto.price, 99.0);
        assert_eq!(dto.location.city.as_deref(), Some("Oslo"));
    }
}
