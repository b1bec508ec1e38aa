use contracts::domain::a002_booking::{split_upcoming, Booking};
use leptos::prelude::*;

use crate::shared::date_utils::{format_date, format_stay, today};
use crate::shared::format::format_price;

/// Host view of the bookings on one venue
#[component]
pub fn VenueBookingsTable(
    bookings: Vec<Booking>,
    /// Nightly price of the venue, for the totals column
    price: f64,
    /// Include stays that are already over
    #[prop(optional)]
    show_past: bool,
) -> impl IntoView {
    let (upcoming, past) = split_upcoming(&bookings, today());
    let rows: Vec<Booking> = if show_past {
        upcoming.into_iter().chain(past).collect()
    } else {
        upcoming
    };

    if rows.is_empty() {
        return view! { <p class="empty-state">"No upcoming bookings for this venue."</p> }.into_any();
    }

    view! {
        <table class="table venue-bookings">
            <thead>
                <tr>
                    <th>"Dates"</th>
                    <th class="table__cell--right">"Nights"</th>
                    <th class="table__cell--right">"Guests"</th>
                    <th>"Guest"</th>
                    <th class="table__cell--right">"Total"</th>
                    <th>"Booked"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|b| {
                        let customer = b
                            .customer
                            .as_ref()
                            .map(|c| c.name.clone())
                            .unwrap_or_else(|| "-".to_string());
                        let total = b.cost(price);
                        view! {
                            <tr>
                                <td>{format_stay(b.check_in(), b.check_out())}</td>
                                <td class="table__cell--right">{b.nights()}</td>
                                <td class="table__cell--right">{b.guests}</td>
                                <td>{customer}</td>
                                <td class="table__cell--right">{format_price(total)}</td>
                                <td>{format_date(&b.created)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
