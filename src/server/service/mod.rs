//! Business logic layer.
//!
//! Services sit between controllers and repositories, work with domain models, and
//! translate missing data into the `AppError` variants the HTTP layer maps to status codes.

pub mod enrollment;
pub mod hotel;

#[cfg(test)]
mod test;
