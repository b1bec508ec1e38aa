pub mod aggregate;
pub mod availability;

pub use aggregate::{date_to_utc, Booking, BookingDto};
pub use availability::{
    booked_ranges, first_blocked_after, is_date_booked, is_date_disabled, is_range_available,
    split_upcoming, total_price, BookingError, BookingRequest, StayRange,
};
