//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let hotel = factory::hotel::create_hotel(&db).await?;
//!
//!     // Create a user holding a paid hotel ticket, plus a bearer token
//!     let (user, session) = factory::helpers::create_user_with_hotel_ticket(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let ticket_type = factory::ticket_type::TicketTypeFactory::new(&db)
//!     .includes_hotel(false)
//!     .is_remote(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `session` - Create sessions holding a signed bearer token
//! - `enrollment` - Create enrollment entities
//! - `ticket_type` - Create ticket type entities
//! - `ticket` - Create ticket entities
//! - `hotel` - Create hotel entities
//! - `room` - Create room entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod enrollment;
pub mod helpers;
pub mod hotel;
pub mod room;
pub mod session;
pub mod ticket;
pub mod ticket_type;
pub mod user;

pub use enrollment::create_enrollment;
pub use hotel::create_hotel;
pub use room::{create_room, create_rooms};
pub use session::create_session;
pub use ticket::create_ticket;
pub use ticket_type::{create_hotel_ticket_type, create_ticket_type};
pub use user::create_user;
