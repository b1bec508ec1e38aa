use serde::{Deserialize, Serialize};

use crate::shared::media::{is_valid_image_url, Media};
use crate::shared::validation::ValidationErrors;

/// Registration is restricted to Noroff student accounts
pub const REQUIRED_EMAIL_DOMAIN: &str = "@stud.noroff.no";
pub const MAX_NAME_LEN: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Media>,
    pub venue_manager: bool,
}

/// Payload of `POST /auth/login?_holidaze=true`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
    pub access_token: String,
    #[serde(default)]
    pub venue_manager: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub name: String,
    pub status: String,
    pub key: String,
}

fn validate_email(email: &str, errors: &mut ValidationErrors) {
    let email = email.trim();
    if email.is_empty() {
        errors.add("email", "Email is required");
        return;
    }
    let lower = email.to_lowercase();
    let local = lower.strip_suffix(REQUIRED_EMAIL_DOMAIN).unwrap_or("");
    if local.is_empty() || local.contains('@') || local.contains(char::is_whitespace) {
        errors.add(
            "email",
            format!("Email must be a valid {} address", REQUIRED_EMAIL_DOMAIN),
        );
    }
}

fn validate_password(password: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);
        errors.into_result()
    }
}

impl RegisterRequest {
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
        } else if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            errors.add(
                "name",
                "Name may only contain letters, numbers and underscores",
            );
        }

        validate_email(&self.email, &mut errors);
        validate_password(&self.password, &mut errors);

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

    fn register() -> RegisterRequest {
        RegisterRequest {
            name: "kari_host".into(),
            email: "kari@stud.noroff.no".into(),
            password: "hunter2hunter2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_validation() {
        let ok = LoginRequest {
            email: "ola@stud.noroff.no".into(),
            password: "12345678".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            email: "ola@gmail.com".into(),
            password: "short".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be a valid @stud.noroff.no address"));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));

        let empty = LoginRequest::default().validate().unwrap_err();
        assert_eq!(empty.get("email"), Some("Email is required"));
        assert_eq!(empty.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_email_edge_cases() {
        for email in ["@stud.noroff.no", "a@b@stud.noroff.no", "a b@stud.noroff.no"] {
            let req = LoginRequest {
                email: email.into(),
                password: "12345678".into(),
            };
            assert!(req.validate().is_err(), "{} should be rejected", email);
        }
        let upper = LoginRequest {
            email: "Ola@Stud.Noroff.no".into(),
            password: "12345678".into(),
        };
        assert!(upper.validate().is_ok());
    }

    #[test]
    fn test_register_name_rules() {
        assert!(register().validate().is_ok());

        let mut req = register();
        req.name = "kari-host".into();
        assert!(req.validate().unwrap_err().get("name").is_some());

        req.name = "a".repeat(21);
        assert_eq!(
            req.validate().unwrap_err().get("name"),
            Some("Name must be at most 20 characters")
        );
    }

    #[test]
    fn test_register_media_urls() {
        let mut req = register();
        req.avatar = Some(Media::new("nope", ""));
        assert!(req.validate().unwrap_err().get("avatar").is_some());
    }

    #[test]
    fn test_register_wire_format() {
        let value = serde_json::to_value(register()).unwrap();
        assert_eq!(value["venueManager"], false);
        assert!(value.get("bio").is_none());
    }

    #[test]
    fn test_auth_user_from_login_payload() {
        let user: AuthUser = serde_json::from_value(json!({
            "name": "kari_host",
            "email": "kari@stud.noroff.no",
            "avatar": { "url": "https://example.com/a.png", "alt": "" },
            "banner": null,
            "accessToken": "token-123",
            "venueManager": true
        }))
        .unwrap();
        assert_eq!(user.access_token, "token-123");
        assert!(user.venue_manager);
        assert!(user.banner.is_none());
    }
}
