pub mod aggregate;
pub mod filter;
pub mod listing;

pub use aggregate::{Amenity, Venue, VenueCount, VenueDto, VenueLocation, VenueMeta};
pub use filter::{VenueFilter, CONTINENTS};
pub use listing::{
    columns_for_width, featured_count, merge_missing, newest, paginate, sort_venues, Page,
    VenueSort,
};
