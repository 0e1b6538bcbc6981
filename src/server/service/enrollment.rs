//! Enrollment service deciding whether a user may view hotels.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{enrollment::EnrollmentRepository, ticket::TicketRepository},
    error::AppError,
};

/// Service providing the hotel access check for enrolled users.
pub struct EnrollmentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    /// Creates a new EnrollmentService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies that a user holds a ticket granting hotel access.
    ///
    /// Checks run in order: the user must have an enrollment, the enrollment must have a
    /// ticket, and the ticket must be paid and of an in-person type that includes hotel
    /// access.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User may view hotels and rooms
    /// - `Err(AppError::NotFound)` - User has no enrollment, or the enrollment has no ticket
    /// - `Err(AppError::PaymentRequired)` - Ticket is unpaid, remote, or excludes hotel
    /// - `Err(AppError::DbErr)` - Database error during lookups
    pub async fn verify_hotel_access(&self, user_id: i32) -> Result<(), AppError> {
        let Some(enrollment) = EnrollmentRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Err(AppError::NotFound("Enrollment not found".to_string()));
        };

        let Some(ticket) = TicketRepository::new(self.db)
            .find_by_enrollment_id(enrollment.id)
            .await?
        else {
            tracing::debug!(
                "Enrollment {} of user {} has no ticket",
                enrollment.id,
                enrollment.user_id
            );
            return Err(AppError::NotFound("Ticket not found".to_string()));
        };

        if !ticket.grants_hotel_access() {
            tracing::debug!(
                "Ticket {} of enrollment {} does not grant hotel access",
                ticket.id,
                ticket.enrollment_id
            );
            return Err(AppError::PaymentRequired(
                "Ticket must be paid, in person and include hotel".to_string(),
            ));
        }

        Ok(())
    }
}
