//! Enrollment factory for creating test enrollment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments with customizable fields.
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory for the given user.
    ///
    /// Defaults:
    /// - name: `"Attendee {id}"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Attendee {}", id),
        }
    }

    /// Sets the enrollment name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        let now = Utc::now();
        entity::enrollment::ActiveModel {
            name: ActiveValue::Set(self.name),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enrollment with default values for `user_id`.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, user_id).build().await
}
