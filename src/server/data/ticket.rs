//! Ticket data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::enrollment::TicketWithType;

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the ticket attached to an enrollment along with its ticket type.
    ///
    /// # Arguments
    /// - `enrollment_id` - ID of the enrollment owning the ticket
    ///
    /// # Returns
    /// - `Ok(Some(TicketWithType))` - Ticket found with its ticket type
    /// - `Ok(None)` - Enrollment has no ticket
    /// - `Err(DbErr)` - Database error, or the ticket's type is missing
    pub async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<TicketWithType>, DbErr> {
        let result = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::EnrollmentId.eq(enrollment_id))
            .find_also_related(entity::prelude::TicketType)
            .one(self.db)
            .await?;

        result
            .map(|(ticket, ticket_type)| TicketWithType::from_entity(ticket, ticket_type))
            .transpose()
    }
}
