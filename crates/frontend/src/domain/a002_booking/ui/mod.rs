pub mod booking_list;
pub mod booking_panel;
pub mod venue_bookings;

pub use booking_list::BookingList;
pub use booking_panel::BookingPanel;
pub use venue_bookings::VenueBookingsTable;
