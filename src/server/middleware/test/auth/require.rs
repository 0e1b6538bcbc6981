use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingBearerToken)
#[tokio::test]
async fn fails_without_authorization_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingBearerToken))
    ));

    Ok(())
}

/// Tests an Authorization header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingBearerToken)
#[tokio::test]
async fn fails_with_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingBearerToken))
    ));

    Ok(())
}

/// Tests a bearer token that is not a JWT.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer("lorem");
    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token signed with a different secret, even though a session holds it.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_token_signed_by_other_secret() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::session::sign_token(user.id, "another-secret")?;
    factory::session::SessionFactory::new(db, user.id)
        .token(token.clone())
        .build()
        .await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a correctly signed token that no session holds.
///
/// Expected: Err(AuthError::SessionNotFound)
#[tokio::test]
async fn fails_without_session_for_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::session::sign_token(user.id, TEST_JWT_SECRET)?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionNotFound))
    ));

    Ok(())
}

/// Tests a session whose token names a user that does not exist.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_token_user_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let token = factory::session::sign_token(999_999, TEST_JWT_SECRET)?;
    factory::session::SessionFactory::new(db, owner.id)
        .token(token.clone())
        .build()
        .await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999_999)))
    ));

    Ok(())
}

/// Tests authentication alone, with no permissions required.
///
/// Expected: Ok(User) for the session's user
#[tokio::test]
async fn authenticates_user_with_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::session::create_session(db, user.id).await?;

    let headers = bearer(&session.token);
    let authenticated = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[])
        .await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}

/// Tests the hotel access permission for a paid hotel ticket holder.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_hotel_access_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, session) = factory::helpers::create_user_with_hotel_ticket(db).await?;

    let headers = bearer(&session.token);
    let authenticated = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[Permission::HotelAccess])
        .await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}

/// Tests the hotel access permission for an authenticated user without enrollment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn denies_hotel_access_without_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let session = factory::session::create_session(db, user.id).await?;

    let headers = bearer(&session.token);
    let result = AuthGuard::new(db, TEST_JWT_SECRET, &headers)
        .require(&[Permission::HotelAccess])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
