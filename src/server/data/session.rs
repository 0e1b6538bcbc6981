//! Session data repository for bearer token lookups.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::session::UserSession;

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the session holding exactly this bearer token.
    ///
    /// # Returns
    /// - `Ok(Some(UserSession))` - A session holds the token
    /// - `Ok(None)` - Token unknown, e.g. signed but never issued or logged out
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_token(&self, token: &str) -> Result<Option<UserSession>, DbErr> {
        let entity = entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(UserSession::from_entity))
    }
}
