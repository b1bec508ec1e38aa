use contracts::domain::a001_venue::aggregate::MAX_MEDIA;
use contracts::domain::a001_venue::{Venue, VenueDto, VenueLocation};
use contracts::domain::common::VenueId;
use contracts::shared::media::Media;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::domain::a001_venue::api;
use crate::system::auth::context::{expire_session_on, use_auth, AuthState};

/// Parse a number field; blank means `blank`, garbage becomes NaN so validation rejects it
fn parse_number(value: &str, blank: f64) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        blank
    } else {
        value.parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// Combine the text form with the raw number inputs
pub fn compose_dto(form: &VenueDto, price: &str, max_guests: &str, rating: &str) -> VenueDto {
    let mut dto = form.normalized();
    dto.price = parse_number(price, 0.0);
    dto.max_guests = max_guests.trim().parse::<u32>().unwrap_or(0);
    dto.rating = parse_number(rating, 0.0);
    dto
}

fn optional_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Copy)]
pub struct VenueFormViewModel {
    pub editing: Option<VenueId>,
    pub form: RwSignal<VenueDto>,
    pub price: RwSignal<String>,
    pub max_guests: RwSignal<String>,
    pub rating: RwSignal<String>,
    pub field_errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    set_auth_state: WriteSignal<AuthState>,
}

impl VenueFormViewModel {
    pub fn new(venue: Option<&Venue>) -> Self {
        let dto = venue.map(Venue::to_dto).unwrap_or_default();
        let format_number = |v: f64| {
            if v == 0.0 {
                String::new()
            } else {
                v.to_string()
            }
        };

        Self {
            editing: venue.map(|v| v.id),
            price: RwSignal::new(format_number(dto.price)),
            max_guests: RwSignal::new(dto.max_guests.to_string()),
            rating: RwSignal::new(format_number(dto.rating)),
            form: RwSignal::new(dto),
            field_errors: RwSignal::new(ValidationErrors::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            set_auth_state: use_auth().1,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    /// Tracked lookup of the message for one field
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors
            .with(|errors| errors.get(field).map(str::to_string))
    }

    pub fn set_location_field(&self, value: String, field: fn(&mut VenueLocation) -> &mut Option<String>) {
        self.form.update(|f| *field(&mut f.location) = optional_text(value));
    }

    pub fn can_add_media(&self) -> bool {
        self.form.with(|f| f.media.len() < MAX_MEDIA)
    }

    pub fn add_media_row(&self) {
        if self.can_add_media() {
            self.form.update(|f| f.media.push(Media::default()));
        }
    }

    pub fn remove_media_row(&self, index: usize) {
        self.form.update(|f| {
            if index < f.media.len() {
                f.media.remove(index);
            }
        });
    }

    pub fn update_media(&self, index: usize, update: impl FnOnce(&mut Media)) {
        self.form.update(|f| {
            if let Some(media) = f.media.get_mut(index) {
                update(media);
            }
        });
    }

    pub fn to_dto(&self) -> VenueDto {
        self.form.with(|form| {
            compose_dto(
                form,
                &self.price.get(),
                &self.max_guests.get(),
                &self.rating.get(),
            )
        })
    }

    /// Validate, then create or update the venue
    pub fn save_command(&self, on_saved: Callback<Venue>) {
        let dto = self.to_dto();
        if let Err(errors) = dto.validate() {
            self.error.set(Some("Please fix the highlighted fields".to_string()));
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(ValidationErrors::default());
        self.error.set(None);
        self.is_saving.set(true);

        let set_auth_state = self.set_auth_state;
        let editing = self.editing;
        let error = self.error;
        let is_saving = self.is_saving;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_venue(id, &dto).await,
                None => api::create_venue(&dto).await,
            };
            is_saving.set(false);
            match result {
                Ok(venue) => on_saved.run(venue),
                Err(e) => {
                    expire_session_on(&e, set_auth_state);
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_dto_parses_numbers() {
        let form = VenueDto {
            name: "  Cabin ".into(),
            description: "Cosy".into(),
            media: vec![Media::new("", ""), Media::new(" https://img.example.com/a.jpg ", "A")],
            ..VenueDto::default()
        };
        let dto = compose_dto(&form, "120.5", "4", "");
        assert_eq!(dto.name, "Cabin");
        assert_eq!(dto.price, 120.5);
        assert_eq!(dto.max_guests, 4);
        assert_eq!(dto.rating, 0.0);
        assert_eq!(dto.media, vec![Media::new("https://img.example.com/a.jpg", "A")]);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_compose_dto_rejects_garbage_numbers() {
        let form = VenueDto {
            name: "Cabin".into(),
            description: "Cosy".into(),
            ..VenueDto::default()
        };
        let errors = compose_dto(&form, "12a", "x", "9").validate().unwrap_err();
        assert!(errors.get("price").is_some());
        assert!(errors.get("maxGuests").is_some());
        assert!(errors.get("rating").is_some());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  ".into()), None);
        assert_eq!(optional_text(" Oslo ".into()), Some("Oslo".into()));
    }
}
