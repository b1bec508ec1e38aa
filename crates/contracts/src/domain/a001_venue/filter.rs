//! Client-side venue filtering
//!
//! The venues page loads the whole catalogue once and narrows it down in
//! memory on every keystroke.

use serde::{Deserialize, Serialize};

use super::aggregate::{Amenity, Venue};

/// Continents offered by the filter; matched case-insensitively
pub const CONTINENTS: [&str; 7] = [
    "Africa",
    "Antarctica",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueFilter {
    /// Free text matched against name, description, city and country
    pub query: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum capacity required
    pub guests: Option<u32>,
    /// Every listed amenity must be offered
    pub amenities: Vec<Amenity>,
    pub continent: Option<String>,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl VenueFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.guests.map(|g| g > 1).unwrap_or(false)
            || !self.amenities.is_empty()
            || self
                .continent
                .as_deref()
                .map(|c| !c.trim().is_empty())
                .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if let Some(pos) = self.amenities.iter().position(|a| *a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity);
        }
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        let query = self.query.trim().to_lowercase();
        self.matches_with_query(venue, &query)
    }

    fn matches_with_query(&self, venue: &Venue, query: &str) -> bool {
        if !query.is_empty() {
            let loc = &venue.location;
            let hit = contains_ci(&venue.name, query)
                || contains_ci(&venue.description, query)
                || loc.city.as_deref().map(|c| contains_ci(c, query)).unwrap_or(false)
                || loc
                    .country
                    .as_deref()
                    .map(|c| contains_ci(c, query))
                    .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if venue.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if venue.price > max {
                return false;
            }
        }

        if let Some(guests) = self.guests {
            if venue.max_guests < guests {
                return false;
            }
        }

        if !self.amenities.iter().all(|a| venue.meta.has(*a)) {
            return false;
        }

        match self.continent.as_deref().map(str::trim) {
            Some(wanted) if !wanted.is_empty() => venue
                .location
                .continent
                .as_deref()
                .map(|c| c.trim().eq_ignore_ascii_case(wanted))
                .unwrap_or(false),
            _ => true,
        }
    }

    /// Matching venues in their original order
    pub fn apply(&self, venues: &[Venue]) -> Vec<Venue> {
        let query = self.query.trim().to_lowercase();
        venues
            .iter()
            .filter(|v| self.matches_with_query(v, &query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_venue::aggregate::tests::venue;

    fn catalogue() -> Vec<Venue> {
        let mut cabin = venue(
            "00000000-0000-4000-8000-000000000001",
            "Mountain cabin",
            80.0,
            2,
            "2024-01-01T00:00:00Z",
        );
        cabin.location.city = Some("Bergen".into());
        cabin.meta.parking = true;

        let mut villa = venue(
            "00000000-0000-4000-8000-000000000002",
            "Sunny villa",
            450.0,
            10,
            "2024-02-01T00:00:00Z",
        );
        villa.location.city = Some("Malaga".into());
        villa.location.country = Some("Spain".into());
        villa.meta.pets = true;

        let mut loft = venue(
            "00000000-0000-4000-8000-000000000003",
            "City loft",
            150.0,
            4,
            "2024-03-01T00:00:00Z",
        );
        loft.location.continent = Some("Asia".into());
        loft.location.city = Some("Tokyo".into());
        loft.location.country = Some("Japan".into());
        loft.meta.wifi = false;

        vec![cabin, villa, loft]
    }

    fn names(venues: &[Venue]) -> Vec<&str> {
        venues.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let all = catalogue();
        let filter = VenueFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&all).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive_and_searches_location() {
        let all = catalogue();
        let mut filter = VenueFilter {
            query: "  SPAIN ".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&all)), vec!["Sunny villa"]);

        filter.query = "bergen".into();
        assert_eq!(names(&filter.apply(&all)), vec!["Mountain cabin"]);

        filter.query = "loft".into();
        assert_eq!(names(&filter.apply(&all)), vec!["City loft"]);

        filter.query = "nowhere".into();
        assert!(filter.apply(&all).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let all = catalogue();
        let filter = VenueFilter {
            min_price: Some(80.0),
            max_price: Some(150.0),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&all)), vec!["Mountain cabin", "City loft"]);
    }

    #[test]
    fn test_guest_capacity() {
        let all = catalogue();
        let filter = VenueFilter { guests: Some(4), ..Default::default() };
        assert_eq!(names(&filter.apply(&all)), vec!["Sunny villa", "City loft"]);
    }

    #[test]
    fn test_all_amenities_required() {
        let all = catalogue();
        let mut filter = VenueFilter::default();
        filter.toggle_amenity(Amenity::Wifi);
        filter.toggle_amenity(Amenity::Parking);
        assert_eq!(names(&filter.apply(&all)), vec!["Mountain cabin"]);

        filter.toggle_amenity(Amenity::Parking);
        assert_eq!(filter.amenities, vec![Amenity::Wifi]);
        assert_eq!(names(&filter.apply(&all)), vec!["Mountain cabin", "Sunny villa"]);
    }

    #[test]
    fn test_continent() {
        let all = catalogue();
        let filter = VenueFilter {
            continent: Some("asia".into()),
            ..Default::default()
        };
        assert!(filter.is_active());
        assert_eq!(names(&filter.apply(&all)), vec!["City loft"]);

        let blank = VenueFilter {
            continent: Some("  ".into()),
            ..Default::default()
        };
        assert!(!blank.is_active());
        assert_eq!(blank.apply(&all).len(), 3);
    }

    #[test]
    fn test_clear_resets() {
        let mut filter = VenueFilter {
            query: "x".into(),
            guests: Some(3),
            ..Default::default()
        };
        assert!(filter.is_active());
        filter.clear();
        assert_eq!(filter, VenueFilter::default());
    }
}
