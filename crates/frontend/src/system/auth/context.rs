use std::future::Future;

use contracts::system::auth::{AuthUser, LoginRequest};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<AuthUser>,
}

impl AuthState {
    /// Session restored from localStorage; both halves must be present
    pub fn from_storage() -> Self {
        match (storage::get_access_token(), storage::get_user()) {
            (Some(token), Some(user)) => Self {
                access_token: Some(token),
                user: Some(user),
            },
            (None, None) => Self::default(),
            _ => {
                log::warn!("Incomplete session in localStorage, clearing it");
                storage::clear_session();
                Self::default()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    pub fn is_venue_manager(&self) -> bool {
        self.user.as_ref().map(|u| u.venue_manager).unwrap_or(false)
    }

    pub fn user_name(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.name.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

    if let Some(name) = auth_state.get_untracked().user_name() {
        log::debug!("Restored session for {}", name);
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login, persist the session and make sure an API key exists
pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<AuthUser, ApiError> {
    let user = api::login(&request).await?;

    let user = establish_session(
        user,
        storage::save_session,
        api::ensure_api_key,
        |state| set_auth_state.set(state),
    )
    .await;

    Ok(user)
}

/// Save the session, then wait for the API key before publishing the new state.
/// Authenticated views fire requests as soon as they see the session, and
/// those need the key header.
async fn establish_session<K, Fut>(
    user: AuthUser,
    save: impl FnOnce(&AuthUser),
    ensure_key: K,
    publish: impl FnOnce(AuthState),
) -> AuthUser
where
    K: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    save(&user);

    if let Err(e) = ensure_key().await {
        log::warn!("Could not create API key: {}", e);
    }

    publish(AuthState {
        access_token: Some(user.access_token.clone()),
        user: Some(user.clone()),
    });
    user
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("Logged out");
}

/// Mirror profile changes (avatar, venue manager flag, ...) into the session
pub fn update_session_user(set_auth_state: WriteSignal<AuthState>, f: impl FnOnce(&mut AuthUser)) {
    set_auth_state.update(|state| {
        if let Some(user) = state.user.as_mut() {
            f(user);
            storage::save_session(user);
        }
    });
}

/// Drop a session the API no longer accepts
pub fn expire_session_on(err: &ApiError, set_auth_state: WriteSignal<AuthState>) {
    if *err == ApiError::Unauthorized {
        log::warn!("Access token rejected, ending session");
        do_logout(set_auth_state);
    }
}
