pub mod amenity_list;
pub mod availability_calendar;
pub mod filter_panel;
pub mod image_gallery;
pub mod pagination_controls;
pub mod rating;

pub use amenity_list::AmenityList;
pub use availability_calendar::{AvailabilityCalendar, Selection};
pub use filter_panel::{FilterPanel, FilterTag};
pub use image_gallery::ImageGallery;
pub use pagination_controls::PaginationControls;
pub use rating::Rating;
