//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with a session and an enrollment, but no ticket.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, session, enrollment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrolled_user(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::session::Model,
        entity::enrollment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let session = crate::factory::session::create_session(db, user.id).await?;
    let enrollment = crate::factory::enrollment::create_enrollment(db, user.id).await?;

    Ok((user, session, enrollment))
}

/// Creates a user holding a ticket of the given type and status.
///
/// Creates a user, a session with a bearer token, an enrollment, and a ticket for the
/// enrollment referencing `ticket_type`.
///
/// # Arguments
/// - `db` - Database connection
/// - `ticket_type` - Ticket type the ticket references
/// - `status` - Ticket status
///
/// # Returns
/// - `Ok((user, session))` - The ticket holder and their session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_ticket(
    db: &DatabaseConnection,
    ticket_type: &entity::ticket_type::Model,
    status: TicketStatus,
) -> Result<(entity::user::Model, entity::session::Model), DbErr> {
    let (user, session, enrollment) = create_enrolled_user(db).await?;
    crate::factory::ticket::create_ticket(db, enrollment.id, ticket_type.id, status).await?;

    Ok((user, session))
}

/// Creates a user holding a paid, hotel-inclusive, in-person ticket.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, session))` - The ticket holder and their session
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_hotel_ticket(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::session::Model), DbErr> {
    let ticket_type = crate::factory::ticket_type::create_hotel_ticket_type(db).await?;

    create_user_with_ticket(db, &ticket_type, TicketStatus::Paid).await
}
