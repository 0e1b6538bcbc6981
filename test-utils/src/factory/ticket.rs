//! Ticket factory for creating test ticket entities.

use chrono::Utc;
use entity::sea_orm_active_enums::TicketStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory for the given enrollment and ticket type.
    ///
    /// Defaults:
    /// - status: `TicketStatus::Reserved`
    pub fn new(db: &'a DatabaseConnection, enrollment_id: i32, ticket_type_id: i32) -> Self {
        Self {
            db,
            enrollment_id,
            ticket_type_id,
            status: TicketStatus::Reserved,
        }
    }

    /// Sets the ticket status.
    pub fn status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ticket::Model)` - Created ticket entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let now = Utc::now();
        entity::ticket::ActiveModel {
            ticket_type_id: ActiveValue::Set(self.ticket_type_id),
            enrollment_id: ActiveValue::Set(self.enrollment_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket for an enrollment.
///
/// # Arguments
/// - `db` - Database connection
/// - `enrollment_id` - Enrollment owning the ticket
/// - `ticket_type_id` - Ticket type the ticket references
/// - `status` - Ticket status
pub async fn create_ticket(
    db: &DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, enrollment_id, ticket_type_id)
        .status(status)
        .build()
        .await
}
