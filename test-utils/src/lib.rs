//! Event Hotels Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the hotel
//! access service. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Factories inserting users, sessions, enrollments, tickets and hotels
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Hotel;
//!
//! #[tokio::test]
//! async fn test_hotel_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Hotel)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

/// Secret used to sign bearer tokens issued by `factory::session`.
///
/// Application state built in tests must verify tokens with this same secret.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
