use std::path::PathBuf;

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory::helpers::next_id};

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
/// use entity::prelude::{Court, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Court)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Backing file for a pooled on-disk database, `None` for in-memory.
    path: Option<PathBuf>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            path: None,
        }
    }

    /// Backs the test database with a temporary file and a multi-connection pool.
    ///
    /// Use when a test needs statements from concurrent tasks to run on separate
    /// connections. The file is removed when the `TestContext` is dropped.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn on_disk(mut self) -> Self {
        let name = format!("courtopia-test-{}-{}.db", std::process::id(), next_id());
        self.path = Some(std::env::temp_dir().join(name));
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table required for booking operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Court
    /// - Booking
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User).with_table(Court).with_table(Booking)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates the SQLite database connection (in-memory unless `on_disk()` was called)
    /// and executes all CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.path {
            Some(path) => TestContext::on_disk(path),
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
