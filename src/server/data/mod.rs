//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to maintain
//! separation between the data layer and business logic layer. All queries are reads.

pub mod enrollment;
pub mod hotel;
pub mod session;
pub mod ticket;
pub mod user;
