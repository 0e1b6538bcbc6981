//! Enrollment and ticket domain models.
//!
//! Provides the enrollment a user registers for the event with, the ticket attached to
//! that enrollment, and the ticket type defining its entitlements. The hotel access rule
//! lives on [`TicketWithType::grants_hotel_access`].

use sea_orm::DbErr;

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
}

impl Enrollment {
    /// Converts an entity model to an enrollment domain model at the repository boundary.
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
        }
    }
}

/// Payment state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl From<entity::sea_orm_active_enums::TicketStatus> for TicketStatus {
    fn from(status: entity::sea_orm_active_enums::TicketStatus) -> Self {
        match status {
            entity::sea_orm_active_enums::TicketStatus::Reserved => Self::Reserved,
            entity::sea_orm_active_enums::TicketStatus::Paid => Self::Paid,
        }
    }
}

/// Ticket category and the entitlements it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketType {
    /// Remote-only tickets never include on-site lodging.
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TicketType {
    /// Converts an entity model to a ticket type domain model at the repository boundary.
    pub fn from_entity(entity: entity::ticket_type::Model) -> Self {
        Self {
            is_remote: entity.is_remote,
            includes_hotel: entity.includes_hotel,
        }
    }
}

/// Ticket joined with its ticket type.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithType {
    pub id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

impl TicketWithType {
    /// Converts a ticket entity and its related ticket type at the repository boundary.
    ///
    /// # Arguments
    /// - `ticket` - The ticket entity from the database
    /// - `ticket_type` - The ticket type loaded alongside the ticket
    ///
    /// # Returns
    /// - `Ok(TicketWithType)` - Converted domain model
    /// - `Err(DbErr::RecordNotFound)` - The ticket references a missing ticket type
    pub fn from_entity(
        ticket: entity::ticket::Model,
        ticket_type: Option<entity::ticket_type::Model>,
    ) -> Result<Self, DbErr> {
        let ticket_type = ticket_type.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Ticket type {} referenced by ticket {} not found",
                ticket.ticket_type_id, ticket.id
            ))
        })?;

        Ok(Self {
            id: ticket.id,
            enrollment_id: ticket.enrollment_id,
            status: ticket.status.into(),
            ticket_type: TicketType::from_entity(ticket_type),
        })
    }

    /// Whether this ticket entitles its holder to view hotels and rooms.
    ///
    /// Requires the ticket to be paid and its type to include hotel access without
    /// being remote-only.
    pub fn grants_hotel_access(&self) -> bool {
        self.status == TicketStatus::Paid
            && self.ticket_type.includes_hotel
            && !self.ticket_type.is_remote
    }
}
