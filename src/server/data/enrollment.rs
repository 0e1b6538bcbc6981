//! Enrollment data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::enrollment::Enrollment;

pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the enrollment registered by a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the enrolled user
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - User has enrolled
    /// - `Ok(None)` - User has no enrollment
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Enrollment::from_entity))
    }
}
