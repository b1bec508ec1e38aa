//! Common identifier types shared by all aggregates

pub mod aggregate_id;

pub use aggregate_id::{AggregateId, BookingId, VenueId};
