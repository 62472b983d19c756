//! Declarative test builder.
//!
//! Configuration methods queue tables and fixtures; everything is executed in order during
//! the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_recipe_tables: bool,

    users: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_recipe_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the user account table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the user account and recipe tables to the test database.
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_recipe_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order after the
    /// standard tables.
    ///
    /// ```no_run
    /// use recipe_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), recipe_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .with_table(Recipe)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a fixture user with the given email during `build()`.
    ///
    /// Requires user tables. Fixture users carry a placeholder password hash.
    pub fn with_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Build the test context, creating tables and inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut tables = Vec::new();
        if self.include_user_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::AppUser));
        }
        if self.include_recipe_tables {
            tables.push(schema.create_table_from_entity(entity::prelude::Recipe));
        }
        tables.extend(self.tables);

        context.with_tables(tables).await?;

        for email in &self.users {
            context.user().insert_user(email).await?;
        }

        Ok(context)
    }
}
