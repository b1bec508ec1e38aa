pub mod a001_venue;
pub mod a002_booking;
pub mod a003_profile;
