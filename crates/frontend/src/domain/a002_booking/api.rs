use contracts::domain::a002_booking::{Booking, BookingDto};
use contracts::domain::common::BookingId;
use contracts::shared::api::ListQuery;

use crate::shared::api_utils::{
    delete, get_json, holidaze_url, path_segment, post_json, ApiError, Auth,
};

pub async fn create_booking(dto: &BookingDto) -> Result<Booking, ApiError> {
    let response =
        post_json::<_, Booking>(&holidaze_url("/bookings"), dto, Auth::Required).await?;
    log::info!(
        "Booked venue {} for {} guest(s), booking {}",
        dto.venue_id,
        dto.guests,
        response.data.id
    );
    Ok(response.data)
}

pub async fn delete_booking(id: BookingId) -> Result<(), ApiError> {
    delete(&holidaze_url(&format!("/bookings/{}", id)), Auth::Required).await?;
    log::info!("Cancelled booking {}", id);
    Ok(())
}

/// Bookings made by `name`, each with its venue
pub async fn fetch_profile_bookings(name: &str) -> Result<Vec<Booking>, ApiError> {
    let query = ListQuery::default().with_venue();
    let url = format!(
        "{}{}",
        holidaze_url(&format!("/profiles/{}/bookings", path_segment(name))),
        query.to_query_string()
    );
    Ok(get_json::<Vec<Booking>>(&url, Auth::Required).await?.data)
}
