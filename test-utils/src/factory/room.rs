//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    capacity: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory for the given hotel.
    ///
    /// Defaults:
    /// - name: `"Room {id}"`
    /// - capacity: `2`
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: format!("Room {}", id),
            capacity: 2,
        }
    }

    /// Sets the room name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the room capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            hotel_id: ActiveValue::Set(self.hotel_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in `hotel_id`.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}

/// Creates `count` rooms with default values in `hotel_id`.
pub async fn create_rooms(
    db: &DatabaseConnection,
    hotel_id: i32,
    count: usize,
) -> Result<Vec<entity::room::Model>, DbErr> {
    let mut rooms = Vec::with_capacity(count);
    for _ in 0..count {
        rooms.push(create_room(db, hotel_id).await?);
    }
    Ok(rooms)
}
