use contracts::domain::a002_booking::{split_upcoming, Booking};
use contracts::shared::media::Media;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a002_booking::api;
use crate::shared::date_utils::{format_stay, today};
use crate::shared::format::{format_price, plural};
use crate::shared::modal::confirm;
use crate::system::auth::context::{expire_session_on, use_auth};

#[component]
fn BookingItem(booking: Booking, can_cancel: bool, on_changed: Callback<()>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let error = RwSignal::new(None::<String>);
    let is_cancelling = RwSignal::new(false);

    let venue = booking.venue.as_deref();
    let media = venue.map(|v| v.primary_media()).unwrap_or_else(Media::placeholder);
    let venue_name = venue
        .map(|v| v.name.clone())
        .unwrap_or_else(|| "Unknown venue".to_string());
    let venue_href = venue.map(|v| format!("/venues/{}", v.id));
    let location = venue.map(|v| v.location.display());
    let total = booking.total_price();
    let id = booking.id;

    let on_cancel = move |_| {
        if !confirm("Cancel this booking?") {
            return;
        }
        is_cancelling.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_booking(id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => {
                    expire_session_on(&e, set_auth_state);
                    error.set(Some(e.to_string()));
                }
            }
            is_cancelling.set(false);
        });
    };

    view! {
        <li class="booking-item">
            <img class="booking-item__image" src=media.url alt=media.alt loading="lazy"/>
            <div class="booking-item__body">
                <h3 class="booking-item__title">
                    {match venue_href {
                        Some(href) => view! { <A href=href>{venue_name}</A> }.into_any(),
                        None => view! { <span>{venue_name}</span> }.into_any(),
                    }}
                </h3>
                {location.map(|l| view! { <p class="booking-item__location">{l}</p> })}
                <p class="booking-item__dates">
                    {format_stay(booking.check_in(), booking.check_out())}
                    " · "
                    {plural(booking.nights() as u32, "night", "nights")}
                    " · "
                    {plural(booking.guests, "guest", "guests")}
                </p>
                {total.map(|t| view! { <p class="booking-item__total">{format_price(t)}</p> })}
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            </div>
            {can_cancel.then(|| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || is_cancelling.get())
                    on_click=on_cancel
                >
                    "Cancel"
                </Button>
            })}
        </li>
    }
}

/// A customer's bookings, upcoming first; upcoming stays can be cancelled
#[component]
pub fn BookingList(
    #[prop(into)] bookings: Signal<Vec<Booking>>,
    /// Called after a booking was cancelled
    on_changed: Callback<()>,
) -> impl IntoView {
    let split = Memo::new(move |_| bookings.with(|b| split_upcoming(b, today())));

    view! {
        <div class="booking-list">
            <h2>"Upcoming stays"</h2>
            {move || {
                let (upcoming, _) = split.get();
                if upcoming.is_empty() {
                    view! { <p class="empty-state">"No upcoming stays. Time to plan a trip!"</p> }.into_any()
                } else {
                    view! {
                        <ul class="booking-list__items">
                            {upcoming
                                .into_iter()
                                .map(|b| view! { <BookingItem booking=b can_cancel=true on_changed=on_changed/> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}

            {move || {
                let (_, past) = split.get();
                (!past.is_empty()).then(|| view! {
                    <h2>"Past stays"</h2>
                    <ul class="booking-list__items booking-list__items--past">
                        {past
                            .into_iter()
                            .map(|b| view! { <BookingItem booking=b can_cancel=false on_changed=on_changed/> })
                            .collect_view()}
                    </ul>
                })
            }}
        </div>
    }
}
