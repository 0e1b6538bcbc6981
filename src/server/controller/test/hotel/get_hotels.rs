use super::*;

/// Expected: 401 when no token is given
#[tokio::test]
async fn responds_401_without_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(db, get("/hotels", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expected: 401 when the token is not a valid JWT
#[tokio::test]
async fn responds_401_with_invalid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(db, get("/hotels", Some("lorem"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expected: 401 when no session exists for a correctly signed token
#[tokio::test]
async fn responds_401_without_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::session::sign_token(user.id, TEST_JWT_SECRET)?;

    let (status, _) = send(db, get("/hotels", Some(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expected: 404 when the user has no enrollment yet
#[tokio::test]
async fn responds_404_without_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::session::create_session(db, user.id).await?;

    let (status, body) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.unwrap()["error"].is_string());

    Ok(())
}

/// Expected: 404 when the user is enrolled but has no ticket yet
#[tokio::test]
async fn responds_404_without_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session, _) = factory::helpers::create_enrolled_user(db).await?;
    let hotel = factory::hotel::create_hotel(db).await?;
    factory::room::create_rooms(db, hotel.id, 3).await?;

    let (status, _) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 402 when the ticket is reserved and excludes hotel
#[tokio::test]
async fn responds_402_without_paid_hotel_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket_type = factory::ticket_type::TicketTypeFactory::new(db)
        .is_remote(true)
        .includes_hotel(false)
        .build()
        .await?;
    let (_, session) =
        factory::helpers::create_user_with_ticket(db, &ticket_type, TicketStatus::Reserved)
            .await?;
    let hotel = factory::hotel::create_hotel(db).await?;
    factory::room::create_rooms(db, hotel.id, 3).await?;

    let (status, _) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

    Ok(())
}

/// Expected: 402 when a paid ticket is remote
#[tokio::test]
async fn responds_402_for_remote_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket_type = factory::ticket_type::TicketTypeFactory::new(db)
        .is_remote(true)
        .includes_hotel(true)
        .build()
        .await?;
    let (_, session) =
        factory::helpers::create_user_with_ticket(db, &ticket_type, TicketStatus::Paid).await?;

    let (status, _) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

    Ok(())
}

/// Expected: 200 and an empty array when no hotels are available
#[tokio::test]
async fn responds_200_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_user_with_hotel_ticket(db).await?;

    let (status, body) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(Value::Array(vec![])));

    Ok(())
}

/// Expected: 200 with every stored hotel, without rooms embedded
#[tokio::test]
async fn responds_200_with_existing_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    let hotels = vec![
        factory::hotel::create_hotel(db).await?,
        factory::hotel::create_hotel(db).await?,
        factory::hotel::create_hotel(db).await?,
    ];
    factory::room::create_rooms(db, hotels[0].id, 2).await?;

    let (status, body) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), hotels.len());

    for (json, hotel) in listed.iter().zip(&hotels) {
        assert_keys(json, &["id", "name", "image", "createdAt", "updatedAt"]);
        assert_eq!(json["id"], hotel.id);
        assert_eq!(json["name"], hotel.name.as_str());
        assert_eq!(json["image"], hotel.image.as_str());
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }

    Ok(())
}

/// Expected: 404 when the hotel list cannot be loaded after access was granted
#[tokio::test]
async fn responds_404_when_hotels_fail_to_load() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, session) = factory::helpers::create_user_with_hotel_ticket(db).await?;
    db.execute_unprepared("DROP TABLE room").await?;
    db.execute_unprepared("DROP TABLE hotel").await?;

    let (status, body) = send(db, get("/hotels", Some(&session.token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.unwrap()["error"].is_string());

    Ok(())
}
