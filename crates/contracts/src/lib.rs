//! Shared wire types and pure logic for the Holidaze front end.
//!
//! Everything in here compiles natively, so the filtering, availability and
//! validation rules are unit tested without a browser.

pub mod domain;
pub mod shared;
pub mod system;
