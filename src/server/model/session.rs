//! Login session domain model.

/// Session binding a bearer token to a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub id: i32,
}

impl UserSession {
    /// Converts an entity model to a session domain model at the repository boundary.
    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self { id: entity.id }
    }
}
