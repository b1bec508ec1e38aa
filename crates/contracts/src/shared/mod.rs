pub mod api;
pub mod favorites;
pub mod media;
pub mod validation;
