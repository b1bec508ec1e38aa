use contracts::system::auth::{ApiKey, ApiKeyRequest, AuthUser, LoginRequest, RegisterRequest};
use contracts::domain::a003_profile::Profile;

use crate::shared::api_utils::{api_key, api_url, post_json, ApiError, Auth};
use crate::shared::config::config;

use super::storage;

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<AuthUser, ApiError> {
    let response = post_json::<_, AuthUser>(
        &api_url("/auth/login?_holidaze=true"),
        request,
        Auth::None,
    )
    .await?;
    log::info!("Logged in as {}", response.data.name);
    Ok(response.data)
}

/// Register a new account; the caller logs in afterwards
pub async fn register(request: &RegisterRequest) -> Result<Profile, ApiError> {
    let response =
        post_json::<_, Profile>(&api_url("/auth/register"), request, Auth::None).await?;
    log::info!("Registered {}", response.data.name);
    Ok(response.data)
}

/// Create an API key for the logged in user
pub async fn create_api_key(name: &str) -> Result<ApiKey, ApiError> {
    let request = ApiKeyRequest {
        name: name.to_string(),
    };
    let response =
        post_json::<_, ApiKey>(&api_url("/auth/create-api-key"), &request, Auth::Required)
            .await?;
    Ok(response.data)
}

/// Holidaze endpoints reject requests without an API key, so make sure one
/// exists once a token is available.
pub async fn ensure_api_key() -> Result<(), ApiError> {
    if api_key().is_some() {
        return Ok(());
    }
    let key = create_api_key(&config().api.api_key_name).await?;
    storage::save_api_key(&key.key);
    log::info!("Created API key '{}'", key.name);
    Ok(())
}
