//! Ticket type factory for creating test ticket type entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ticket types with customizable entitlements.
///
/// # Example
///
/// ```rust,ignore
/// let remote = TicketTypeFactory::new(&db)
///     .is_remote(true)
///     .includes_hotel(false)
///     .build()
///     .await?;
/// ```
pub struct TicketTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl<'a> TicketTypeFactory<'a> {
    /// Creates a new TicketTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Ticket Type {id}"`
    /// - price: `250`
    /// - is_remote: `false`
    /// - includes_hotel: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ticket Type {}", id),
            price: 250,
            is_remote: false,
            includes_hotel: false,
        }
    }

    /// Sets the ticket type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the ticket price.
    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    /// Sets whether the ticket type is remote-only.
    pub fn is_remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    /// Sets whether the ticket type includes hotel access.
    pub fn includes_hotel(mut self, includes_hotel: bool) -> Self {
        self.includes_hotel = includes_hotel;
        self
    }

    /// Builds and inserts the ticket type entity into the database.
    pub async fn build(self) -> Result<entity::ticket_type::Model, DbErr> {
        let now = Utc::now();
        entity::ticket_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            is_remote: ActiveValue::Set(self.is_remote),
            includes_hotel: ActiveValue::Set(self.includes_hotel),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket type with default values (in-person, no hotel).
pub async fn create_ticket_type(
    db: &DatabaseConnection,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db).build().await
}

/// Creates an in-person ticket type that includes hotel access.
pub async fn create_hotel_ticket_type(
    db: &DatabaseConnection,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db).includes_hotel(true).build().await
}
