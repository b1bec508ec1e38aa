use contracts::domain::a001_venue::{featured_count, newest, Venue, VenueSort};
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::{Form, A};
use thaw::*;

use crate::domain::a001_venue::api::fetch_venues;
use crate::domain::a001_venue::ui::VenueGrid;
use crate::shared::icons::icon;

/// Cards fetched for the featured section; enough for two rows at any width
const FEATURED_FETCH_LIMIT: u32 = 8;

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1280.0)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (venues, set_venues) = signal::<Vec<Venue>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let width = RwSignal::new(viewport_width());

    let handle = window_event_listener(ev::resize, move |_| width.set(viewport_width()));
    on_cleanup(move || handle.remove());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_venues(1, FEATURED_FETCH_LIMIT, VenueSort::Newest).await {
            Ok(response) => set_venues.set(response.data),
            Err(e) => {
                log::error!("Failed to load featured venues: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_is_loading.set(false);
    });

    let featured = Signal::derive(move || {
        let count = featured_count(width.get());
        venues.with(|v| newest(v, count))
    });

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Find your next stay"</h1>
                <p class="hero__subtitle">"Cabins, city flats and villas from hosts around the world."</p>
                <Form action="/venues" attr:class="hero__search">
                    <span class="hero__search-icon">{icon("search")}</span>
                    <input type="search" name="q" placeholder="Where do you want to go?"/>
                    <button type="submit" class="button button--primary">"Search"</button>
                </Form>
            </section>

            <section class="featured">
                <div class="header">
                    <h2 class="header__title">"Newest venues"</h2>
                    <A href="/venues">"Browse all venues"</A>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error"><span class="warning-box__text">{e}</span></div>
                })}

                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <div class="loading"><Spinner/></div> }
                >
                    <VenueGrid venues=featured/>
                </Show>
            </section>

            <section class="host-cta">
                <h2>"Have a place to share?"</h2>
                <p>"Register as a venue manager and start hosting guests."</p>
                <A href="/register">"Become a host"</A>
            </section>
        </div>
    }
}
