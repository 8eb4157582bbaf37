//! Database schema initialization and sample data.

use log::info;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Recipe,
};

const SAMPLES_SEEDED_KEY: &str = "samples_seeded";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Inserts the sample recipes the first time it is called on an empty
    /// cookbook. Returns whether anything was inserted.
    pub fn seed_samples(&mut self) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let seeded: Option<String> = tx
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![SAMPLES_SEEDED_KEY],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read seed marker")?;
        let recipe_count: i64 = tx
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .db_context("Failed to count recipes")?;

        let should_seed = seeded.is_none() && recipe_count == 0;
        if should_seed {
            for (position, recipe) in sample_recipes().iter().enumerate() {
                super::recipe_queries::insert_recipe_row(&tx, recipe, position as i64)?;
            }
            info!("Seeded {} sample recipes", sample_recipes().len());
        }

        tx.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![SAMPLES_SEEDED_KEY, "1"],
        )
        .db_context("Failed to write seed marker")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(should_seed)
    }
}

/// The recipes a fresh cookbook starts with.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("uuid-1", "Chili con Carne")
            .with_image("https://placehold.co/400x300?text=Chili")
            .with_minutes(45)
            .with_tags(["Fleisch", "Scharf"])
            .with_rating(5),
        Recipe::new("uuid-2", "Pfannkuchen")
            .with_image("https://placehold.co/400x300?text=Pfannkuchen")
            .with_minutes(20)
            .with_tags(["Süß", "Schnell", "Veggie"])
            .with_rating(4),
        Recipe::new("uuid-3", "Caesar Salad")
            .with_image("https://placehold.co/400x300?text=Salad")
            .with_minutes(15)
            .with_tags(["Veggie", "Schnell", "Leicht"])
            .with_rating(3),
    ]
}
