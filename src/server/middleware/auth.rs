use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::enrollment::EnrollmentService,
};

pub enum Permission {
    /// Holds a paid, in-person ticket that includes hotel access.
    HotelAccess,
}

/// Claims carried by bearer tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt_secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt_secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            jwt_secret,
            headers,
        }
    }

    /// Authenticates the request's bearer token and checks each permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AppError::AuthErr)` - Missing/invalid token, no session, or unknown user
    /// - `Err(AppError::NotFound | AppError::PaymentRequired)` - `HotelAccess` denied
    /// - `Err(AppError::DbErr)` - Database error during lookups
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingBearerToken.into());
        };

        let claims = decode_claims(token, self.jwt_secret)?;

        let Some(session) = SessionRepository::new(self.db)
            .find_by_token(token)
            .await?
        else {
            return Err(AuthError::SessionNotFound.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(claims.user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(claims.user_id).into());
        };

        tracing::debug!(
            "Authenticated user {} ({}) with session {}",
            user.id,
            user.email,
            session.id
        );

        for permission in permissions {
            match permission {
                Permission::HotelAccess => {
                    EnrollmentService::new(self.db)
                        .verify_hotel_access(user.id)
                        .await?;
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Verifies the HS256 signature of `token` and decodes its claims.
///
/// Tokens are issued without an expiry, so `exp` is validated only when present.
fn decode_claims(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.set_required_spec_claims::<&str>(&[]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}
