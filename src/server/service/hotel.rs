//! Hotel service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::hotel::{Hotel, HotelWithRooms},
};

/// Service providing hotel and room listings.
pub struct HotelService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    /// Creates a new HotelService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all hotels.
    ///
    /// An empty catalogue is not an error.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - All hotels ordered by ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        let hotels = HotelRepository::new(self.db).get_all().await?;
        Ok(hotels)
    }

    /// Retrieves a hotel with its rooms.
    ///
    /// # Arguments
    /// - `hotel_id` - ID of the hotel
    ///
    /// # Returns
    /// - `Ok(HotelWithRooms)` - Hotel and its rooms
    /// - `Err(AppError::NotFound)` - No hotel with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_rooms(&self, hotel_id: i32) -> Result<HotelWithRooms, AppError> {
        HotelRepository::new(self.db)
            .get_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))
    }
}
