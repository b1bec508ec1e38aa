use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_auth;

/// Component that requires authentication
/// Shows a login prompt if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! {
                <div class="notice">
                    <p>"You need to be logged in to see this page."</p>
                    <A href="/login">"Log in"</A>
                    " or "
                    <A href="/register">"create an account"</A>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires the venue manager role
#[component]
pub fn RequireVenueManager(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_venue_manager()
            fallback=|| view! {
                <div class="notice">"Only venue managers can manage venues. Enable hosting in your profile."</div>
            }
        >
            {children()}
        </Show>
    }
}
