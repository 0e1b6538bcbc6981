use super::*;

/// Tests loading a hotel together with its rooms.
///
/// Expected: Ok(Some(HotelWithRooms)) containing only this hotel's rooms
#[tokio::test]
async fn returns_hotel_with_its_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let rooms = factory::room::create_rooms(db, hotel.id, 3).await?;

    let other_hotel = factory::hotel::create_hotel(db).await?;
    factory::room::create_room(db, other_hotel.id).await?;

    let result = HotelRepository::new(db).get_with_rooms(hotel.id).await?;

    let hotel_with_rooms = result.expect("hotel should exist");
    assert_eq!(hotel_with_rooms.hotel.id, hotel.id);
    assert_eq!(hotel_with_rooms.hotel.name, hotel.name);
    assert_eq!(
        hotel_with_rooms.rooms.iter().map(|r| r.id).collect::<Vec<_>>(),
        rooms.iter().map(|r| r.id).collect::<Vec<_>>()
    );
    assert!(hotel_with_rooms
        .rooms
        .iter()
        .all(|room| room.hotel_id == hotel.id));

    Ok(())
}

/// Tests loading a hotel that has no rooms yet.
///
/// Expected: Ok(Some(HotelWithRooms)) with an empty room list
#[tokio::test]
async fn returns_hotel_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let result = HotelRepository::new(db).get_with_rooms(hotel.id).await?;

    assert!(result.is_some());
    assert!(result.unwrap().rooms.is_empty());

    Ok(())
}

/// Tests loading a hotel ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelRepository::new(db).get_with_rooms(999_999).await?;

    assert!(result.is_none());

    Ok(())
}
