use contracts::domain::a001_venue::{Venue, VenueDto, VenueSort};
use contracts::domain::common::VenueId;
use contracts::shared::api::{next_page, ApiResponse, ListQuery, PageWalk};

use crate::shared::api_utils::{delete, get_json, holidaze_url, post_json, put_json, ApiError, Auth};
use crate::shared::config::config;

/// One page of venues, ordered by the API
pub async fn fetch_venues(
    page: u32,
    limit: u32,
    sort: VenueSort,
) -> Result<ApiResponse<Vec<Venue>>, ApiError> {
    let (field, order) = sort.api_sort();
    let query = ListQuery::page(page, limit)
        .sorted_by(field, order)
        .with_owner();
    get_json(
        &format!("{}{}", holidaze_url("/venues"), query.to_query_string()),
        Auth::Optional,
    )
    .await
}

/// Venues loaded for client-side filtering
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub venues: Vec<Venue>,
    /// False when the page cap stopped the walk before the last page
    pub complete: bool,
}

/// The whole catalogue, walking pages until the last one
pub async fn fetch_all_venues() -> Result<Catalogue, ApiError> {
    let ui = &config().ui;
    let mut venues = Vec::new();
    let mut page = 1;

    let complete = loop {
        let response = fetch_venues(page, ui.fetch_page_limit, VenueSort::Newest).await?;
        let fetched = response.data.len();
        venues.extend(response.data);

        match next_page(page, fetched, response.meta.as_ref(), ui.max_fetch_pages) {
            PageWalk::Next(next) => page = next,
            PageWalk::Done => break true,
            PageWalk::Truncated => {
                log::warn!("Stopped loading venues after {} pages", page);
                break false;
            }
        }
    };

    log::debug!("Loaded {} venues in {} page(s)", venues.len(), page);
    Ok(Catalogue { venues, complete })
}

/// A single venue with its owner and bookings
pub async fn fetch_venue(id: VenueId) -> Result<Venue, ApiError> {
    let query = ListQuery::default().with_owner().with_bookings();
    let url = format!(
        "{}{}",
        holidaze_url(&format!("/venues/{}", id)),
        query.to_query_string()
    );
    Ok(get_json::<Venue>(&url, Auth::Optional).await?.data)
}

/// Server-side search over name and description
pub async fn search_venues(q: &str) -> Result<Vec<Venue>, ApiError> {
    let query = ListQuery {
        q: Some(q.trim().to_string()),
        ..ListQuery::default()
    }
    .with_owner();
    let url = format!("{}{}", holidaze_url("/venues/search"), query.to_query_string());
    Ok(get_json::<Vec<Venue>>(&url, Auth::Optional).await?.data)
}

pub async fn create_venue(dto: &VenueDto) -> Result<Venue, ApiError> {
    let response = post_json::<_, Venue>(&holidaze_url("/venues"), dto, Auth::Required).await?;
    log::info!("Created venue {} ({})", response.data.name, response.data.id);
    Ok(response.data)
}

pub async fn update_venue(id: VenueId, dto: &VenueDto) -> Result<Venue, ApiError> {
    let response = put_json::<_, Venue>(
        &holidaze_url(&format!("/venues/{}", id)),
        dto,
        Auth::Required,
    )
    .await?;
    log::info!("Updated venue {}", id);
    Ok(response.data)
}

pub async fn delete_venue(id: VenueId) -> Result<(), ApiError> {
    delete(&holidaze_url(&format!("/venues/{}", id)), Auth::Required).await?;
    log::info!("Deleted venue {}", id);
    Ok(())
}
