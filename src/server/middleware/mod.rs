//! Request guards run by controllers before touching business logic.

pub mod auth;
