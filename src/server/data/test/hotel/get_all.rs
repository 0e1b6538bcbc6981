use super::*;

/// Tests listing hotels when none exist.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_when_no_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotels = HotelRepository::new(db).get_all().await?;

    assert!(hotels.is_empty());

    Ok(())
}

/// Tests listing every hotel ordered by ID.
///
/// Verifies that all stored hotels are returned with their stored fields.
///
/// Expected: Ok(Vec<Hotel>) in insertion order
#[tokio::test]
async fn returns_all_hotels_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::hotel::HotelFactory::new(db)
        .name("Seaside Inn")
        .image("https://images.example.com/seaside.png")
        .build()
        .await?;
    let second = factory::hotel::create_hotel(db).await?;
    let third = factory::hotel::create_hotel(db).await?;

    let hotels = HotelRepository::new(db).get_all().await?;

    assert_eq!(hotels.len(), 3);
    assert_eq!(
        hotels.iter().map(|h| h.id).collect::<Vec<_>>(),
        vec![first.id, second.id, third.id]
    );
    assert_eq!(hotels[0].name, "Seaside Inn");
    assert_eq!(hotels[0].image, "https://images.example.com/seaside.png");

    Ok(())
}
