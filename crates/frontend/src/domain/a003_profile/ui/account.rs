use contracts::domain::a001_venue::Venue;
use contracts::domain::a002_booking::Booking;
use contracts::domain::a003_profile::Profile;
use leptos::prelude::*;
use thaw::*;

use super::hosting::HostedVenues;
use super::profile_form::ProfileForm;
use crate::domain::a001_venue::api::fetch_all_venues;
use crate::domain::a001_venue::ui::VenueGrid;
use crate::domain::a002_booking::api::fetch_profile_bookings;
use crate::domain::a002_booking::ui::BookingList;
use crate::domain::a003_profile::api::fetch_profile;
use crate::shared::favorites::use_favorites;
use crate::shared::icons::icon;
use crate::system::auth::context::{expire_session_on, use_auth};
use crate::system::auth::guard::{RequireAuth, RequireVenueManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountTab {
    Profile,
    Hosting,
    Bookings,
    Favorites,
}

impl AccountTab {
    const ALL: [AccountTab; 4] = [
        AccountTab::Profile,
        AccountTab::Hosting,
        AccountTab::Bookings,
        AccountTab::Favorites,
    ];

    fn key(&self) -> &'static str {
        match self {
            AccountTab::Profile => "profile",
            AccountTab::Hosting => "hosting",
            AccountTab::Bookings => "bookings",
            AccountTab::Favorites => "favorites",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AccountTab::Profile => "Profile",
            AccountTab::Hosting => "Hosting",
            AccountTab::Bookings => "Bookings",
            AccountTab::Favorites => "Favorites",
        }
    }

    fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or(AccountTab::Profile)
    }
}

#[component]
fn ProfileHeader(profile: Profile) -> impl IntoView {
    let banner = profile.banner.filter(|m| m.is_valid());
    let avatar = profile.avatar.filter(|m| m.is_valid());

    view! {
        <div class="profile-header">
            {banner.map(|b| view! { <img class="profile-header__banner" src=b.url alt=b.alt/> })}
            <div class="profile-header__identity">
                {match avatar {
                    Some(a) => view! { <img class="avatar avatar--large" src=a.url alt=a.alt/> }.into_any(),
                    None => view! { <span class="avatar avatar--large avatar--empty">{icon("user")}</span> }.into_any(),
                }}
                <div>
                    <h1>{profile.name}</h1>
                    <p class="profile-header__email">{profile.email}</p>
                    {profile.venue_manager.then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Venue manager"</Badge>
                    })}
                </div>
            </div>
            {profile.bio.filter(|b| !b.trim().is_empty()).map(|bio| view! {
                <p class="profile-header__bio">{bio}</p>
            })}
        </div>
    }
}

#[component]
fn MyBookings(name: String) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(true);
    let name = StoredValue::new(name);

    let load = move || {
        let name = name.get_value();
        is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_profile_bookings(&name).await {
                Ok(b) => bookings.set(b),
                Err(e) => {
                    expire_session_on(&e, set_auth_state);
                    error.set(Some(e.to_string()));
                }
            }
            is_loading.set(false);
        });
    };

    load();

    view! {
        {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
        <Show when=move || !is_loading.get() fallback=|| view! { <Spinner/> }>
            <BookingList bookings=bookings on_changed=Callback::new(move |_| load())/>
        </Show>
    }
}

#[component]
fn MyFavorites() -> impl IntoView {
    let favorites = use_favorites();
    let all = RwSignal::new(Vec::<Venue>::new());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_all_venues().await {
            Ok(catalogue) => all.set(catalogue.venues),
            Err(e) => error.set(Some(e.to_string())),
        }
        is_loading.set(false);
    });

    let favorite_venues = Signal::derive(move || {
        all.with(|venues| {
            favorites
                .set
                .with(|s| s.retain_existing(venues).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
        <Show when=move || !is_loading.get() fallback=|| view! { <Spinner/> }>
            <Show
                when=move || !favorite_venues.with(Vec::is_empty)
                fallback=|| view! {
                    <p class="empty-state">"No favorites yet. Tap the heart on a venue to save it here."</p>
                }
            >
                <VenueGrid venues=favorite_venues/>
            </Show>
        </Show>
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AccountContent/>
        </RequireAuth>
    }
}

#[component]
fn AccountContent() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let (profile, set_profile) = signal::<Option<Profile>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let selected_tab = RwSignal::new(AccountTab::Profile.key().to_string());
    let tab = Memo::new(move |_| AccountTab::from_key(&selected_tab.get()));

    let name = auth_state.get_untracked().user_name().unwrap_or_default();

    {
        let name = name.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_profile(&name).await {
                Ok(p) => set_profile.set(Some(p)),
                Err(e) => {
                    log::error!("Failed to load profile {}: {}", name, e);
                    expire_session_on(&e, set_auth_state);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    }

    let visible_tabs = move || {
        let is_manager = auth_state.get().is_venue_manager();
        AccountTab::ALL
            .into_iter()
            .filter(|t| *t != AccountTab::Hosting || is_manager)
            .collect::<Vec<_>>()
    };

    let name = StoredValue::new(name);

    view! {
        <div class="page account-page">
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error"><span class="warning-box__text">{e}</span></div>
            })}

            {move || match profile.get() {
                None => view! { <div class="loading"><Spinner label="Loading profile..."/></div> }.into_any(),
                Some(p) => view! { <ProfileHeader profile=p/> }.into_any(),
            }}

            <TabList selected_value=selected_tab>
                {move || {
                    visible_tabs()
                        .into_iter()
                        .map(|t| view! { <Tab value=t.key()>{t.label()}</Tab> })
                        .collect_view()
                }}
            </TabList>

            <div class="tab-content">
                {move || match tab.get() {
                    AccountTab::Profile => match profile.get() {
                        Some(p) => view! {
                            <ProfileForm
                                profile=p
                                on_saved=Callback::new(move |p: Profile| set_profile.set(Some(p)))
                            />
                        }
                        .into_any(),
                        None => ().into_any(),
                    },
                    AccountTab::Hosting => view! {
                        <RequireVenueManager>
                            <HostedVenues name=name.get_value()/>
                        </RequireVenueManager>
                    }
                    .into_any(),
                    AccountTab::Bookings => view! { <MyBookings name=name.get_value()/> }.into_any(),
                    AccountTab::Favorites => view! { <MyFavorites/> }.into_any(),
                }}
            </div>
        </div>
    }
}
