use contracts::domain::a001_venue::Venue;
use contracts::domain::a002_booking::{booked_ranges, Booking};
use contracts::domain::common::{AggregateId, VenueId};
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a001_venue::api;
use crate::domain::a001_venue::ui::card::FavoriteButton;
use crate::domain::a001_venue::ui::form::VenueForm;
use crate::domain::a002_booking::ui::{BookingPanel, VenueBookingsTable};
use crate::shared::components::{AmenityList, AvailabilityCalendar, ImageGallery, Rating, Selection};
use crate::shared::date_utils::{format_date, today};
use crate::shared::format::{format_price, plural};
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::system::auth::context::{expire_session_on, use_auth};

#[component]
fn LocationDetails(venue: Venue) -> impl IntoView {
    let loc = venue.location;
    let rows: Vec<(&'static str, String)> = [
        ("Address", loc.address.clone()),
        ("Zip", loc.zip.clone()),
        ("City", loc.city.clone()),
        ("Country", loc.country.clone()),
        ("Continent", loc.continent.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| (label, v))
    })
    .collect();

    view! {
        <section class="venue-detail__section">
            <h2>"Location"</h2>
            {if rows.is_empty() {
                view! { <p>"The host has not shared the location yet."</p> }.into_any()
            } else {
                view! {
                    <dl class="venue-detail__location">
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                }
                .into_any()
            }}
            {loc.has_coordinates().then(|| view! {
                <p class="venue-detail__coords">{format!("{:.4}, {:.4}", loc.lat, loc.lng)}</p>
            })}
        </section>
    }
}

#[component]
fn HostCard(venue: Venue) -> impl IntoView {
    let Some(owner) = venue.owner else {
        return ().into_any();
    };
    let avatar = owner.avatar.filter(|a| a.is_valid());

    view! {
        <section class="venue-detail__section host-card">
            <h2>"Your host"</h2>
            <div class="host-card__body">
                {match avatar {
                    Some(a) => view! { <img class="avatar" src=a.url alt=a.alt/> }.into_any(),
                    None => view! { <span class="avatar avatar--empty">{icon("user")}</span> }.into_any(),
                }}
                <div>
                    <strong>{owner.name}</strong>
                    {owner.bio.map(|bio| view! { <p>{bio}</p> })}
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Owner tools: edit, delete and the bookings on this venue
#[component]
fn OwnerPanel(venue: Venue, on_changed: Callback<()>) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let deleted = RwSignal::new(false);
    let show_form = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let id = venue.id;
    let bookings = venue.bookings().to_vec();
    let price = venue.price;
    let venue = StoredValue::new(venue);

    let on_delete = move |_| {
        if !confirm("Delete this venue? Its bookings will be lost.") {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_venue(id).await {
                Ok(()) => deleted.set(true),
                Err(e) => {
                    expire_session_on(&e, set_auth_state);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Card class="owner-panel">
            <h2>"Manage venue"</h2>
            <Flex gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.set(true)>
                    {icon("edit")}
                    "Edit"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=on_delete>
                    {icon("delete")}
                    "Delete"
                </Button>
            </Flex>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <h3>"Bookings"</h3>
            <VenueBookingsTable bookings=bookings price=price/>

            <Show when=move || deleted.get()>
                <Redirect path="/account"/>
            </Show>

            <Show when=move || show_form.get()>
                <VenueForm
                    venue=venue.get_value()
                    on_saved=Callback::new(move |_| {
                        show_form.set(false);
                        on_changed.run(());
                    })
                    on_close=Callback::new(move |_| show_form.set(false))
                />
            </Show>
        </Card>
    }
}

#[component]
pub fn VenueDetailPage() -> impl IntoView {
    let params = use_params_map();
    let (auth_state, _) = use_auth();

    let (venue, set_venue) = signal::<Option<Venue>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let venue_id = Memo::new(move |_| {
        params.with(|p| p.get("id").map(|id| VenueId::from_string(&id)))
    });

    let load = move || {
        let id = match venue_id.get_untracked() {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                log::warn!("{}", e);
                set_error.set(Some("This venue does not exist.".to_string()));
                set_is_loading.set(false);
                return;
            }
            None => return,
        };
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_venue(id).await {
                Ok(v) => {
                    set_venue.set(Some(v));
                    set_error.set(None);
                }
                Err(e) if e.is_not_found() => {
                    set_venue.set(None);
                    set_error.set(Some("This venue does not exist.".to_string()));
                }
                Err(e) => {
                    log::error!("Failed to load venue {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        venue_id.track();
        load();
    });

    let is_owner = move || {
        let name = auth_state.with(|s| s.user_name());
        venue.with(|v| match (v, name) {
            (Some(v), Some(name)) => v.is_owned_by(&name),
            _ => false,
        })
    };

    let on_booked = Callback::new(move |booking: Booking| {
        set_notice.set(Some(format!(
            "Booked! {} to {}.",
            booking.check_in().format("%-d %b"),
            booking.check_out().format("%-d %b %Y")
        )));
        load();
    });

    view! {
        <div class="page venue-detail">
            <A href="/venues" attr:class="back-link">{icon("chevron-left")}"All venues"</A>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || notice.get().map(|n| view! {
                <div class="warning-box warning-box--success">
                    <span class="warning-box__text">{n}</span>
                    <A href="/account">"See your bookings"</A>
                </div>
            })}

            <Show
                when=move || !is_loading.get() || venue.with(Option::is_some)
                fallback=|| view! { <div class="loading"><Spinner label="Loading venue..."/></div> }
            >
                {move || venue.get().map(|v| {
                    let owner_view = is_owner();
                    view! {
                        <ImageGallery images=v.valid_media()/>

                        <div class="venue-detail__layout">
                            <div class="venue-detail__main">
                                <div class="venue-detail__title-row">
                                    <h1>{v.name.clone()}</h1>
                                    <FavoriteButton venue_id=v.id/>
                                </div>
                                <p class="venue-detail__subtitle">
                                    {icon("map-pin")}
                                    {v.location.display()}
                                    " · "
                                    <Rating value=v.rating show_zero=true/>
                                    " · "
                                    {plural(v.max_guests, "guest", "guests")}
                                    " · "
                                    {plural(v.booking_count(), "booking", "bookings")}
                                </p>

                                <section class="venue-detail__section">
                                    <h2>"About this place"</h2>
                                    <p class="venue-detail__description">{v.description.clone()}</p>
                                </section>

                                <section class="venue-detail__section">
                                    <h2>"Amenities"</h2>
                                    <AmenityList meta=v.meta/>
                                </section>

                                <LocationDetails venue=v.clone()/>
                                <HostCard venue=v.clone()/>

                                <p class="venue-detail__dates">
                                    {format!("Listed {} · updated {}", format_date(&v.created), format_date(&v.updated))}
                                </p>
                            </div>

                            <aside class="venue-detail__aside">
                                {if owner_view {
                                    view! {
                                        <div class="venue-detail__owner">
                                            <p class="venue-detail__price">
                                                <strong>{format_price(v.price)}</strong>" / night"
                                            </p>
                                            <AvailabilityCalendar
                                                ranges=booked_ranges(v.bookings())
                                                today=today()
                                                selection=RwSignal::new(Selection::default())
                                                readonly=true
                                            />
                                            <OwnerPanel venue=v.clone() on_changed=Callback::new(move |_| load())/>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! { <BookingPanel venue=v.clone() on_booked=on_booked/> }.into_any()
                                }}
                            </aside>
                        </div>
                    }
                })}
            </Show>
        </div>
    }
}
