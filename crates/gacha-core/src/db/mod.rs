//! Database operations and SQLite management for recipes and the meal plan.
//!
//! This module provides the persisted Recipe Store and Meal Plan Store. Every
//! mutating call commits before returning, so state survives a reload as soon
//! as the call succeeds.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod backup_queries;
pub mod migrations;
pub mod plan_queries;
pub mod recipe_queries;
pub mod stores;

pub use recipe_queries::DeletedRecipe;
pub use stores::{MealPlanStore, RecipeStore, Store};

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mainly for tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
