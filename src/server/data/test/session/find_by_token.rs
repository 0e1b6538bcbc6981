use super::*;

/// Tests finding the session holding a bearer token.
///
/// Expected: Ok(Some(UserSession)) matching the stored session
#[tokio::test]
async fn finds_session_by_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::session::create_session(db, user.id).await?;

    let result = SessionRepository::new(db)
        .find_by_token(&session.token)
        .await?;

    let found = result.expect("session should exist");
    assert_eq!(found.id, session.id);

    Ok(())
}

/// Tests looking up a token no session holds.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::session::SessionFactory::new(db, user.id)
        .token("issued-token")
        .build()
        .await?;

    let result = SessionRepository::new(db)
        .find_by_token("some-other-token")
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that two sessions cannot share a token.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    factory::session::SessionFactory::new(db, first.id)
        .token("shared-token")
        .build()
        .await?;

    let result = factory::session::SessionFactory::new(db, second.id)
        .token("shared-token")
        .build()
        .await;

    assert!(result.is_err());

    Ok(())
}
