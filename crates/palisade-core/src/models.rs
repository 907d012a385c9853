//! Domain models for Palisade.

pub mod tenant;
pub mod user;
