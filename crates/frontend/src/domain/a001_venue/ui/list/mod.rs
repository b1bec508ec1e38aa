mod filters;

pub use filters::{FilterInputs, VenueFilterFields};

use contracts::domain::a001_venue::{merge_missing, paginate, sort_venues, Venue, VenueSort};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use thaw::*;

use self::filters::active_tags;
use crate::domain::a001_venue::api::{fetch_all_venues, search_venues};
use crate::domain::a001_venue::ui::card::VenueGrid;
use crate::shared::components::{FilterPanel, FilterTag, PaginationControls};
use crate::shared::config::config;
use crate::shared::format::plural;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn VenueListPage() -> impl IntoView {
    let query_map = use_query_map();
    let initial_query = query_map.with_untracked(|q| q.get("q").unwrap_or_default());

    let (venues, set_venues) = signal::<Vec<Venue>>(Vec::new());
    let (is_complete, set_is_complete) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    let inputs = FilterInputs::new(initial_query.clone());
    let debounced_query = RwSignal::new(initial_query);
    let sort_key = RwSignal::new(VenueSort::default().key().to_string());
    let page = RwSignal::new(0usize);
    let is_filter_expanded = RwSignal::new(true);
    let page_size = config().ui.page_size;

    let load = move || {
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_all_venues().await {
                Ok(catalogue) => {
                    set_venues.set(catalogue.venues);
                    set_is_complete.set(catalogue.complete);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load venues: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    // Debounce typing in the search box
    let search_generation = StoredValue::new(0u32);
    Effect::new(move |_| {
        let q = inputs.query.get();
        search_generation.update_value(|g| *g += 1);
        let generation = search_generation.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_generation.get_value() == generation {
                debounced_query.set(q);
            }
        });
    });

    // A capped catalogue may miss matches; ask the server and merge its hits
    Effect::new(move |_| {
        let q = debounced_query.get();
        if is_complete.get() || q.trim().is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match search_venues(&q).await {
                Ok(hits) => {
                    let mut added = 0;
                    set_venues.update(|v| added = merge_missing(v, hits));
                    log::debug!("Search for '{}' added {} venue(s)", q, added);
                }
                Err(e) => log::warn!("Venue search failed: {}", e),
            }
        });
    });

    let filter = Memo::new(move |_| inputs.to_filter(&debounced_query.get()));
    let sort = Memo::new(move |_| VenueSort::from_key(&sort_key.get()));

    // Back to the first page whenever the result set changes
    Effect::new(move |_| {
        filter.track();
        sort.track();
        page.set(0);
    });

    let filtered = Memo::new(move |_| {
        let mut matching = venues.with(|all| filter.with(|f| f.apply(all)));
        sort_venues(&mut matching, sort.get());
        matching
    });
    let current_page = Memo::new(move |_| filtered.with(|v| paginate(v, page.get(), page_size)));

    let active_filters_count = Signal::derive(move || filter.with(|f| active_tags(f).len()));
    let summary = Signal::derive(move || {
        let count = filtered.with(|v| v.len()) as u32;
        plural(count, "venue", "venues")
    });

    load();

    view! {
        <div class="page venues-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Venues"</h1>
                </div>
                <div class="header__actions">
                    <Label>"Sort by"</Label>
                    <Select value=sort_key>
                        {VenueSort::ALL
                            .iter()
                            .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                summary=summary
                filter_tags=move || {
                    view! {
                        {move || {
                            let tags = filter.with(active_tags);
                            let has_tags = !tags.is_empty();
                            view! {
                                {tags
                                    .into_iter()
                                    .map(|(field, label)| view! {
                                        <FilterTag
                                            label=label
                                            on_remove=Callback::new(move |_| inputs.clear_field(field))
                                        />
                                    })
                                    .collect_view()}
                                {has_tags.then(|| view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        on_click=move |_| inputs.clear()
                                    >
                                        "Clear all"
                                    </Button>
                                })}
                            }
                        }}
                    }
                }
            >
                <VenueFilterFields inputs=inputs/>
            </FilterPanel>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        "Try again"
                    </Button>
                </div>
            })}

            <Show
                when=move || !is_loading.get()
                fallback=|| view! {
                    <div class="loading"><Spinner label="Loading venues..."/></div>
                }
            >
                <Show
                    when=move || current_page.with(|p| p.total > 0)
                    fallback=move || view! {
                        <div class="empty-state">
                            <p>"No venues match your filters."</p>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| inputs.clear()>
                                "Clear filters"
                            </Button>
                        </div>
                    }
                >
                    <VenueGrid venues=Signal::derive(move || current_page.with(|p| p.items.clone()))/>
                </Show>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || current_page.with(|p| p.page))
                total_pages=Signal::derive(move || current_page.with(|p| p.page_count))
                on_page_change=Callback::new(move |p: usize| {
                    page.set(p);
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                })
            />
        </div>
    }
}
