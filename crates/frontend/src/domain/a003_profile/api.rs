use contracts::domain::a001_venue::Venue;
use contracts::domain::a003_profile::{Profile, ProfileUpdateDto};
use contracts::shared::api::ListQuery;

use crate::shared::api_utils::{get_json, holidaze_url, path_segment, put_json, ApiError, Auth};

fn profile_url(name: &str) -> String {
    holidaze_url(&format!("/profiles/{}", path_segment(name)))
}

pub async fn fetch_profile(name: &str) -> Result<Profile, ApiError> {
    Ok(get_json::<Profile>(&profile_url(name), Auth::Required).await?.data)
}

pub async fn update_profile(name: &str, dto: &ProfileUpdateDto) -> Result<Profile, ApiError> {
    let response = put_json::<_, Profile>(&profile_url(name), dto, Auth::Required).await?;
    log::info!("Updated profile {}", name);
    Ok(response.data)
}

/// Venues owned by `name`, each with its bookings
pub async fn fetch_profile_venues(name: &str) -> Result<Vec<Venue>, ApiError> {
    let query = ListQuery::default().with_bookings().with_owner();
    let url = format!("{}/venues{}", profile_url(name), query.to_query_string());
    Ok(get_json::<Vec<Venue>>(&url, Auth::Required).await?.data)
}
