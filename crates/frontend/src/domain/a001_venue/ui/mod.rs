pub mod card;
pub mod details;
pub mod form;
pub mod list;

pub use card::{VenueCard, VenueGrid};
pub use details::VenueDetailPage;
pub use form::VenueForm;
pub use list::VenueListPage;
