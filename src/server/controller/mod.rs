//! HTTP request handlers.

pub mod hotel;
