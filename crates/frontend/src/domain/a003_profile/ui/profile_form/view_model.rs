use contracts::domain::a003_profile::{Profile, ProfileUpdateDto};
use contracts::shared::media::Media;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

use crate::domain::a003_profile::api;
use crate::system::auth::context::{expire_session_on, update_session_user, use_auth, AuthState};

/// Form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormValues {
    pub bio: String,
    pub avatar_url: String,
    pub banner_url: String,
    pub venue_manager: bool,
}

impl ProfileFormValues {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            bio: profile.bio.clone().unwrap_or_default(),
            avatar_url: profile.avatar.as_ref().map(|m| m.url.clone()).unwrap_or_default(),
            banner_url: profile.banner.as_ref().map(|m| m.url.clone()).unwrap_or_default(),
            venue_manager: profile.venue_manager,
        }
    }

    /// Update payload; blank image fields keep the current image
    pub fn to_dto(&self, name: &str) -> ProfileUpdateDto {
        let media = |url: &str, what: &str| {
            let url = url.trim();
            (!url.is_empty()).then(|| Media::new(url, format!("{} of {}", what, name)))
        };
        ProfileUpdateDto {
            bio: Some(self.bio.trim().to_string()),
            avatar: media(&self.avatar_url, "Avatar"),
            banner: media(&self.banner_url, "Banner"),
            venue_manager: Some(self.venue_manager),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProfileFormViewModel {
    pub form: RwSignal<ProfileFormValues>,
    pub field_errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saved: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    set_auth_state: WriteSignal<AuthState>,
}

impl ProfileFormViewModel {
    pub fn new(profile: &Profile) -> Self {
        Self {
            form: RwSignal::new(ProfileFormValues::from_profile(profile)),
            field_errors: RwSignal::new(ValidationErrors::default()),
            error: RwSignal::new(None),
            saved: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            set_auth_state: use_auth().1,
        }
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors
            .with(|errors| errors.get(field).map(str::to_string))
    }

    pub fn save_command(&self, name: String, on_saved: Callback<Profile>) {
        let dto = self.form.with(|f| f.to_dto(&name));
        if let Err(errors) = dto.validate() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(ValidationErrors::default());
        self.error.set(None);
        self.saved.set(false);
        self.is_saving.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_profile(&name, &dto).await {
                Ok(profile) => {
                    update_session_user(vm.set_auth_state, |user| {
                        user.bio = profile.bio.clone();
                        user.avatar = profile.avatar.clone();
                        user.banner = profile.banner.clone();
                        user.venue_manager = profile.venue_manager;
                    });
                    vm.saved.set(true);
                    on_saved.run(profile);
                }
                Err(e) => {
                    expire_session_on(&e, vm.set_auth_state);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.is_saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dto_skips_blank_images() {
        let values = ProfileFormValues {
            bio: " Hello ".into(),
            avatar_url: "".into(),
            banner_url: "https://img.example.com/b.jpg".into(),
            venue_manager: true,
        };
        let dto = values.to_dto("kari");
        assert_eq!(dto.bio.as_deref(), Some("Hello"));
        assert!(dto.avatar.is_none());
        assert_eq!(dto.banner.unwrap().alt, "Banner of kari");
        assert_eq!(dto.venue_manager, Some(true));
    }

    #[test]
    fn test_invalid_avatar_is_reported() {
        let values = ProfileFormValues {
            avatar_url: "not a url".into(),
            ..ProfileFormValues::default()
        };
        let errors = values.to_dto("kari").validate().unwrap_err();
        assert!(errors.get("avatar").is_some());
    }
}
