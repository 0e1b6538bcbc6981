//! Hotel data repository for database operations.
//!
//! Provides read access to hotels and the rooms they own, converting entity models to
//! domain models at the repository boundary.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder};

use crate::server::model::hotel::{Hotel, HotelWithRooms, Room};

/// Repository providing read operations for hotels and rooms.
pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    /// Creates a new HotelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all hotels ordered by ID.
    ///
    /// Rooms are not loaded; use `get_with_rooms` for a single hotel's rooms.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - All hotels (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Hotel>, DbErr> {
        let entities = entity::prelude::Hotel::find()
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Gets a hotel by ID together with its rooms ordered by ID.
    ///
    /// # Arguments
    /// - `hotel_id` - ID of the hotel
    ///
    /// # Returns
    /// - `Ok(Some(HotelWithRooms))` - Hotel found with all of its rooms
    /// - `Ok(None)` - No hotel with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_with_rooms(&self, hotel_id: i32) -> Result<Option<HotelWithRooms>, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(hotel_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let rooms = hotel
            .find_related(entity::prelude::Room)
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(HotelWithRooms {
            hotel: Hotel::from_entity(hotel),
            rooms: rooms.into_iter().map(Room::from_entity).collect(),
        }))
    }
}
