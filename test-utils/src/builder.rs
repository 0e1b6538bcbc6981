use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Hotel, Room};
///
/// let test = TestBuilder::new()
///     .with_table(Hotel)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to authenticate a bearer token.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Session
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(Session)
    }

    /// Adds the tables needed to evaluate a user's hotel access.
    ///
    /// Adds the auth tables followed by:
    /// - Enrollment
    /// - TicketType
    /// - Ticket
    pub fn with_ticket_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Enrollment)
            .with_table(TicketType)
            .with_table(Ticket)
    }

    /// Adds the hotel catalogue tables.
    ///
    /// Adds, in dependency order:
    /// - Hotel
    /// - Room
    pub fn with_hotel_tables(self) -> Self {
        self.with_table(Hotel).with_table(Room)
    }

    /// Adds every table used by the service.
    ///
    /// Equivalent to `with_ticket_tables()` followed by `with_hotel_tables()`. Use this for
    /// tests that drive the HTTP router end to end.
    pub fn with_all_tables(self) -> Self {
        self.with_ticket_tables().with_hotel_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
