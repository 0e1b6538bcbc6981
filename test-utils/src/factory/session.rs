//! Session factory for creating authenticated test sessions.
//!
//! Sessions carry a bearer token signed with [`crate::TEST_JWT_SECRET`], so the token of a
//! created session can be sent as-is in an `Authorization: Bearer` header.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::TEST_JWT_SECRET;

/// Signs a bearer token for `user_id` with the given secret.
///
/// The claims carry `userId` and `iat`, without an expiry.
///
/// # Returns
/// - `Ok(String)` - Encoded token
/// - `Err(DbErr::Custom)` - Token encoding failed
pub fn sign_token(user_id: i32, secret: &str) -> Result<String, DbErr> {
    let claims = json!({
        "userId": user_id,
        "iat": Utc::now().timestamp(),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Factory for creating test sessions.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: Option<String>,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory for the given user.
    ///
    /// By default the token is signed with [`TEST_JWT_SECRET`] at build time.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: None,
        }
    }

    /// Stores an explicit token instead of signing one.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::session::Model)` - Created session entity
    /// - `Err(DbErr)` - Token signing or insert failed
    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        let token = match self.token {
            Some(token) => token,
            None => sign_token(self.user_id, TEST_JWT_SECRET)?,
        };

        let now = Utc::now();
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session with a freshly signed token for `user_id`.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}
