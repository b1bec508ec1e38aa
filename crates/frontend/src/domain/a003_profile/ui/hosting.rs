use contracts::domain::a001_venue::Venue;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_venue::ui::VenueForm;
use crate::domain::a002_booking::ui::VenueBookingsTable;
use crate::domain::a003_profile::api;
use crate::shared::format::{format_price, plural};
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session_on, use_auth};

#[component]
fn HostedVenueRow(venue: Venue) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let media = venue.primary_media();
    let href = format!("/venues/{}", venue.id);
    let bookings = venue.bookings().to_vec();
    let booking_count = venue.booking_count();
    let price = venue.price;

    view! {
        <li class="hosted-venue">
            <div class="hosted-venue__summary">
                <img class="hosted-venue__image" src=media.url alt=media.alt loading="lazy"/>
                <div class="hosted-venue__body">
                    <A href=href>{venue.name.clone()}</A>
                    <p>{venue.location.display()}" · "{format_price(price)}" / night"</p>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    {plural(booking_count, "booking", "bookings")}
                </Button>
            </div>
            <Show when=move || is_expanded.get()>
                <VenueBookingsTable bookings=bookings.clone() price=price show_past=true/>
            </Show>
        </li>
    }
}

/// Venues managed by `name`, with a button to list a new one
#[component]
pub fn HostedVenues(name: String) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let (venues, set_venues) = signal::<Vec<Venue>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let show_form = RwSignal::new(false);
    let name = StoredValue::new(name);

    let load = move || {
        let name = name.get_value();
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_profile_venues(&name).await {
                Ok(v) => {
                    set_venues.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    expire_session_on(&e, set_auth_state);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    load();

    view! {
        <div class="hosted-venues">
            <div class="header">
                <h2 class="header__title">"Your venues"</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.set(true)>
                        {icon("plus")}
                        "New venue"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <Spinner/> }
            >
                <Show
                    when=move || !venues.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"You have not listed any venues yet."</p> }
                >
                    <ul class="hosted-venues__list">
                        <For
                            each=move || venues.get()
                            key=|v| (v.id, v.updated)
                            children=|v| view! { <HostedVenueRow venue=v/> }
                        />
                    </ul>
                </Show>
            </Show>

            <Show when=move || show_form.get()>
                <VenueForm
                    on_saved=Callback::new(move |_| {
                        show_form.set(false);
                        load();
                    })
                    on_close=Callback::new(move |_| show_form.set(false))
                />
            </Show>
        </div>
    }
}
