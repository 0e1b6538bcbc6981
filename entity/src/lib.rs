//! SeaORM entity definitions for the hotel access service.

pub mod prelude;

pub mod enrollment;
pub mod hotel;
pub mod room;
pub mod sea_orm_active_enums;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;
