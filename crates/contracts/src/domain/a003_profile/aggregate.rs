use serde::{Deserialize, Serialize};

use crate::domain::a001_venue::aggregate::Venue;
use crate::domain::a002_booking::aggregate::Booking;
use crate::shared::media::{is_valid_image_url, Media};
use crate::shared::validation::ValidationErrors;

pub const MAX_BIO_LEN: usize = 160;

/// Full profile from `/holidaze/profiles/<name>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
    #[serde(default)]
    pub venue_manager: bool,
    #[serde(default)]
    pub venues: Option<Vec<Venue>>,
    #[serde(default)]
    pub bookings: Option<Vec<Booking>>,
    #[serde(rename = "_count", default)]
    pub count: Option<ProfileCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileCount {
    #[serde(default)]
    pub venues: u32,
    #[serde(default)]
    pub bookings: u32,
}

/// Owner / customer block embedded in venues and bookings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
}

/// Payload for `PUT /holidaze/profiles/<name>`; unset fields are left untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_manager: Option<bool>,
}

impl ProfileUpdateDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.bio.is_none()
            && self.avatar.is_none()
            && self.banner.is_none()
            && self.venue_manager.is_none()
        {
            errors.add("form", "Nothing to update");
        }

        if let Some(bio) = &self.bio {
            if bio.chars().count() > MAX_BIO_LEN {
                errors.add("bio", format!("Bio must be at most {} characters", MAX_BIO_LEN));
            }
        }

        if let Some(avatar) = &self.avatar {
            if !is_valid_image_url(&avatar.url) {
                errors.add("avatar", "Avatar must be a valid http(s) URL");
            }
        }

        if let Some(banner) = &self.banner {
            if !is_valid_image_url(&banner.url) {
                errors.add("banner", "Banner must be a valid http(s) URL");
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_profile_with_relations() {
        let raw = json!({
            "name": "kari_host",
            "email": "kari@stud.noroff.no",
            "bio": null,
            "avatar": { "url": "https://example.com/a.png", "alt": "Kari" },
            "banner": { "url": "https://example.com/b.png", "alt": "" },
            "venueManager": true,
            "venues": [],
            "bookings": [],
            "_count": { "venues": 3, "bookings": 1 }
        });
        let p: Profile = serde_json::from_value(raw).unwrap();
        assert!(p.venue_manager);
        assert_eq!(
            p.count,
            Some(ProfileCount {
                venues: 3,
                bookings: 1
            })
        );
        assert_eq!(p.venues.as_deref().map(|v| v.len()), Some(0));
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let dto = ProfileUpdateDto {
            venue_manager: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value, json!({ "venueManager": false }));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_validation() {
        assert_eq!(
            ProfileUpdateDto::default().validate().unwrap_err().get("form"),
            Some("Nothing to update")
        );

        let dto = ProfileUpdateDto {
            bio: Some("x".repeat(161)),
            avatar: Some(Media::new("avatar.png", "")),
            banner: Some(Media::new("https://example.com/banner.jpg", "")),
            venue_manager: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.get("bio").is_some());
        assert!(errors.get("avatar").is_some());
        assert!(errors.get("banner").is_none());
    }
}
