pub mod aggregate;

pub use aggregate::{Profile, ProfileCount, ProfileSummary, ProfileUpdateDto};
