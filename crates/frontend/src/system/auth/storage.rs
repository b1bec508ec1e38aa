use contracts::system::auth::AuthUser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "holidaze_access_token";
const USER_KEY: &str = "holidaze_user";
const API_KEY_KEY: &str = "holidaze_api_key";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("Could not write '{}' to localStorage", key);
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Read and deserialize a JSON value; corrupt entries are dropped
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable '{}' from localStorage: {}", key, e);
            remove_item(key);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set_item(key, &raw),
        Err(e) => log::error!("Could not serialize '{}': {}", key, e),
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Get the logged in user from localStorage
pub fn get_user() -> Option<AuthUser> {
    get_json(USER_KEY)
}

/// Save the logged in user and their token
pub fn save_session(user: &AuthUser) {
    set_item(ACCESS_TOKEN_KEY, &user.access_token);
    set_json(USER_KEY, user);
}

pub fn get_api_key() -> Option<String> {
    get_item(API_KEY_KEY).filter(|k| !k.is_empty())
}

pub fn save_api_key(key: &str) {
    set_item(API_KEY_KEY, key);
}

/// Clear the session; the API key is kept, it is not tied to a login
pub fn clear_session() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(USER_KEY);
}
