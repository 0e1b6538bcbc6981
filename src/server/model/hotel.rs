//! Hotel and room domain models.

use chrono::{DateTime, Utc};

use crate::model::hotel::{HotelDto, HotelWithRoomsDto, RoomDto};

/// Hotel available to ticket holders with lodging.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    /// Converts an entity model to a hotel domain model at the repository boundary.
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the hotel domain model to a DTO for API responses.
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Room within a hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            capacity: entity.capacity,
            hotel_id: entity.hotel_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the room domain model to a DTO for API responses.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            hotel_id: self.hotel_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Hotel together with all of its rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    /// Converts the hotel and its rooms to a DTO for API responses.
    pub fn into_dto(self) -> HotelWithRoomsDto {
        let rooms = self.rooms.into_iter().map(Room::into_dto).collect();

        HotelWithRoomsDto {
            id: self.hotel.id,
            name: self.hotel.name,
            image: self.hotel.image,
            created_at: self.hotel.created_at,
            updated_at: self.hotel.updated_at,
            rooms,
        }
    }
}
