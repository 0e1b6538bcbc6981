//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    image: String,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"`
    /// - image: `"https://images.example.com/hotel-{id}.png"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            image: format!("https://images.example.com/hotel-{}.png", id),
        }
    }

    /// Sets the hotel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hotel image URL.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        let now = Utc::now();
        entity::hotel::ActiveModel {
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
