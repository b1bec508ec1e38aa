use contracts::domain::a001_venue::Venue;
use contracts::domain::common::VenueId;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::{AmenityList, Rating};
use crate::shared::favorites::use_favorites;
use crate::shared::format::{format_price, plural};
use crate::shared::icons::icon;

/// Heart button toggling a venue in the favorites list
#[component]
pub fn FavoriteButton(venue_id: VenueId) -> impl IntoView {
    let favorites = use_favorites();
    let is_favorite = move || favorites.contains(&venue_id);

    view! {
        <button
            type="button"
            class=move || {
                if is_favorite() {
                    "favorite-button favorite-button--active"
                } else {
                    "favorite-button"
                }
            }
            aria-pressed=move || is_favorite().to_string()
            title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                favorites.toggle(venue_id);
            }
        >
            {move || if is_favorite() { icon("heart-filled") } else { icon("heart") }}
        </button>
    }
}

#[component]
pub fn VenueCard(venue: Venue) -> impl IntoView {
    let media = venue.primary_media();
    let href = format!("/venues/{}", venue.id);
    let guests = plural(venue.max_guests, "guest", "guests");

    view! {
        <article class="venue-card">
            <A href=href>
                <div class="venue-card__image">
                    <img src=media.url alt=media.alt loading="lazy"/>
                    <FavoriteButton venue_id=venue.id/>
                </div>
                <div class="venue-card__body">
                    <div class="venue-card__title-row">
                        <h3 class="venue-card__title">{venue.name.clone()}</h3>
                        <Rating value=venue.rating/>
                    </div>
                    <p class="venue-card__location">
                        {icon("map-pin")}
                        <span>{venue.location.display()}</span>
                    </p>
                    <div class="venue-card__meta">
                        <span class="venue-card__guests">{icon("users")}{guests}</span>
                        <AmenityList meta=venue.meta compact=true/>
                    </div>
                    <p class="venue-card__price">
                        <strong>{format_price(venue.price)}</strong>
                        <span>" / night"</span>
                    </p>
                </div>
            </A>
        </article>
    }
}

/// Responsive grid of venue cards
#[component]
pub fn VenueGrid(#[prop(into)] venues: Signal<Vec<Venue>>) -> impl IntoView {
    view! {
        <div class="venue-grid">
            <For
                each=move || venues.get()
                key=|venue| venue.id
                children=move |venue| view! { <VenueCard venue=venue/> }
            />
        </div>
    }
}
