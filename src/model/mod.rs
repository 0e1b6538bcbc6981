//! Data transfer objects serialized over the HTTP API.

pub mod api;
pub mod hotel;
