//! Bookmarked venues, kept in the browser only

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::a001_venue::aggregate::Venue;
use crate::domain::common::VenueId;

const KEY_PREFIX: &str = "holidaze_favorites";

/// Key of the anonymous visitor; `:` never appears in a profile name
const GUEST_KEY: &str = "holidaze_favorites:guest";

/// Storage key of the favorites of a user (or of the anonymous visitor)
pub fn storage_key(user_name: Option<&str>) -> String {
    match user_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{}_{}", KEY_PREFIX, name.to_lowercase()),
        None => GUEST_KEY.to_string(),
    }
}

/// Insertion-ordered set of venue ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<VenueId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = VenueId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: &VenueId) -> bool {
        self.ids.contains(id)
    }

    /// Adds or removes the id; returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: VenueId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn remove(&mut self, id: &VenueId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| x != id);
        self.ids.len() != before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VenueId> {
        self.ids.iter()
    }

    /// Favorite venues in bookmark order; ids without a loaded venue are skipped.
    pub fn retain_existing<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        self.ids
            .iter()
            .filter_map(|id| venues.iter().find(|v| v.id == *id))
            .collect()
    }
}

impl Serialize for FavoriteSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FavoriteSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<VenueId>::deserialize(deserializer)?;
        Ok(Self::from_ids(ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_venue::aggregate::tests::venue;
    use crate::domain::common::AggregateId;

    fn id(n: u8) -> VenueId {
        VenueId::from_string(&format!("00000000-0000-4000-8000-0000000000{:02x}", n)).unwrap()
    }

    #[test]
    fn test_toggle() {
        let mut favs = FavoriteSet::new();
        assert!(favs.toggle(id(1)));
        assert!(favs.toggle(id(2)));
        assert!(favs.contains(&id(1)));
        assert!(!favs.toggle(id(1)));
        assert!(!favs.contains(&id(1)));
        assert_eq!(favs.len(), 1);
    }

    #[test]
    fn test_json_round_trip_collapses_duplicates() {
        let raw = format!("[\"{}\",\"{}\",\"{}\"]", id(3), id(1), id(3));
        let favs: FavoriteSet = serde_json::from_str(&raw).unwrap();
        assert_eq!(favs.iter().copied().collect::<Vec<_>>(), vec![id(3), id(1)]);
        let json = serde_json::to_string(&favs).unwrap();
        assert_eq!(json, format!("[\"{}\",\"{}\"]", id(3), id(1)));
    }

    #[test]
    fn test_retain_existing_keeps_bookmark_order() {
        let a = venue(&id(1).to_string(), "A", 10.0, 1, "2024-01-01T00:00:00Z");
        let b = venue(&id(2).to_string(), "B", 10.0, 1, "2024-01-01T00:00:00Z");
        let venues = vec![a, b];

        let favs = FavoriteSet::from_ids([id(2), id(9), id(1)]);
        let names: Vec<&str> = favs
            .retain_existing(&venues)
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key(Some("Kari_Host")), "holidaze_favorites_kari_host");
        assert_eq!(storage_key(Some("  ")), "holidaze_favorites:guest");
        assert_eq!(storage_key(None), "holidaze_favorites:guest");
    }

    #[test]
    fn test_user_named_guest_has_own_list() {
        assert_eq!(storage_key(Some("guest")), "holidaze_favorites_guest");
        assert_ne!(storage_key(Some("guest")), storage_key(None));
        assert_ne!(storage_key(Some("Guest")), storage_key(None));
    }
}
