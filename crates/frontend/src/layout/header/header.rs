use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::favorites::use_favorites;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let favorites = use_favorites();
    let menu_open = RwSignal::new(false);

    let avatar = move || {
        auth_state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.avatar.clone())
                .filter(|a| a.is_valid())
        })
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">{icon("home")}"Holidaze"</A>
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    "☰"
                </button>
                <nav class=move || if menu_open.get() { "header__nav header__nav--open" } else { "header__nav" }>
                    <A href="/">"Home"</A>
                    <A href="/venues">"Venues"</A>
                </nav>
            </div>
            <div class="header__actions">
                <A href="/account" attr:class="header__favorites" attr:title="Favorites">
                    {icon("heart")}
                    {move || {
                        let count = favorites.count();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </A>
                <Show
                    when=move || auth_state.get().is_authenticated()
                    fallback=|| view! {
                        <A href="/login" attr:class="button button--ghost">"Log in"</A>
                        <A href="/register" attr:class="button button--primary">"Register"</A>
                    }
                >
                    <A href="/account" attr:class="header__profile">
                        {move || match avatar() {
                            Some(a) => view! { <img class="avatar avatar--small" src=a.url alt=a.alt/> }.into_any(),
                            None => icon("user"),
                        }}
                        <span>{move || auth_state.get().user_name().unwrap_or_default()}</span>
                    </A>
                    <button
                        class="button button--ghost"
                        aria-label="Log out"
                        title="Log out"
                        on:click=move |_| do_logout(set_auth_state)
                    >
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
