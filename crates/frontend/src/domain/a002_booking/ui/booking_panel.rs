use contracts::domain::a001_venue::Venue;
use contracts::domain::a002_booking::{booked_ranges, total_price, Booking, BookingRequest};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a002_booking::api;
use crate::shared::components::{AvailabilityCalendar, Selection};
use crate::shared::date_utils::{format_stay, today};
use crate::shared::format::{format_price, plural};
use crate::system::auth::context::{expire_session_on, use_auth};

/// Guest count from the input; anything unparsable counts as zero guests
fn parse_guests(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}

/// Calendar, guest count and price summary for booking a stay
#[component]
pub fn BookingPanel(venue: Venue, on_booked: Callback<Booking>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let ranges = booked_ranges(venue.bookings());
    let today = today();
    let price = venue.price;
    let max_guests = venue.max_guests;
    let venue = StoredValue::new(venue);

    let selection = RwSignal::new(Selection::default());
    let guests = RwSignal::new("1".to_string());
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let summary = Memo::new(move |_| {
        selection
            .get()
            .range()
            .map(|range| (range, total_price(price, &range)))
    });

    let submit = move || {
        let current = selection.get_untracked();
        let (Some(check_in), Some(check_out)) = (current.check_in, current.check_out) else {
            error.set(Some("Pick a check-in and a check-out date".to_string()));
            return;
        };
        let request = BookingRequest {
            check_in,
            check_out,
            guests: parse_guests(&guests.get_untracked()),
        };

        let validated =
            venue.with_value(|v| request.validate(v, &booked_ranges(v.bookings()), today));
        let dto = match validated {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_booking(&dto).await {
                Ok(booking) => {
                    selection.set(Selection::default());
                    on_booked.run(booking);
                }
                Err(e) => {
                    log::warn!("Booking failed: {}", e);
                    expire_session_on(&e, set_auth_state);
                    error.set(Some(e.to_string()));
                }
            }
            is_saving.set(false);
        });
    };

    view! {
        <Card class="booking-panel">
            <div class="booking-panel__price">
                <strong>{format_price(price)}</strong>
                <span>" / night"</span>
            </div>

            <AvailabilityCalendar ranges=ranges today=today selection=selection/>

            <div class="form-group">
                <label for="booking-guests">{format!("Guests (max {})", max_guests)}</label>
                <Input
                    input_type=InputType::Number
                    value=guests
                    attr:id="booking-guests"
                    attr:min="1"
                    attr:max=max_guests.to_string()
                />
            </div>

            {move || summary.get().map(|(range, total)| view! {
                <dl class="booking-panel__summary">
                    <dt>"Dates"</dt>
                    <dd>{format_stay(range.check_in, range.check_out)}</dd>
                    <dt>{format!("{} x {}", format_price(price), plural(range.nights(), "night", "nights"))}</dt>
                    <dd><strong>{format_price(total)}</strong></dd>
                </dl>
            })}

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || auth_state.get().is_authenticated()
                fallback=|| view! {
                    <A href="/login" attr:class="button button--primary booking-panel__login">
                        "Log in to book"
                    </A>
                }
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:style="width: 100%;"
                    disabled=Signal::derive(move || is_saving.get())
                    on_click=move |_| submit()
                >
                    {move || if is_saving.get() { "Booking..." } else { "Book now" }}
                </Button>
            </Show>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guests() {
        assert_eq!(parse_guests(" 3 "), 3);
        assert_eq!(parse_guests(""), 0);
        assert_eq!(parse_guests("two"), 0);
    }
}
