//! Whole-store snapshot and restore for backups.

use log::info;
use rusqlite::{params, OptionalExtension};

use crate::{
    backup::BackupDocument,
    error::{DatabaseResultExt, Result},
    models::Settings,
};

const DARK_MODE_KEY: &str = "dark_mode";

impl super::Database {
    /// Snapshot of every recipe, plan entry and setting.
    pub fn export_document(&self) -> Result<BackupDocument> {
        let recipes = self.list_recipes()?;
        let meal_plan = self
            .plan_entries()?
            .into_iter()
            .map(|entry| (entry.date, entry.recipe_id))
            .collect();
        let settings = self.settings()?;

        Ok(BackupDocument {
            recipes,
            meal_plan,
            settings,
        })
    }

    /// Replaces the whole store with `document` in a single transaction.
    /// Nothing is written if any row fails.
    pub fn replace_all(&mut self, document: &BackupDocument) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute("DELETE FROM meal_plan", [])
            .db_context("Failed to clear meal plan")?;
        tx.execute("DELETE FROM recipes", [])
            .db_context("Failed to clear recipes")?;

        for (position, recipe) in document.recipes.iter().enumerate() {
            super::recipe_queries::insert_recipe_row(&tx, recipe, position as i64)?;
        }
        for (date, recipe_id) in &document.meal_plan {
            tx.execute(
                "INSERT INTO meal_plan (date, recipe_id) VALUES (?1, ?2)",
                params![date.to_string(), recipe_id],
            )
            .db_context("Failed to insert meal plan entry")?;
        }
        tx.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![DARK_MODE_KEY, document.settings.dark_mode.to_string()],
        )
        .db_context("Failed to write settings")?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Restored {} recipes and {} plan entries",
            document.recipes.len(),
            document.meal_plan.len()
        );
        Ok(())
    }

    /// Stored user settings, defaulting any that were never written.
    pub fn settings(&self) -> Result<Settings> {
        let dark_mode: Option<String> = self
            .connection
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![DARK_MODE_KEY],
                |row| row.get(0),
            )
            .optional()
            .db_context("Failed to read settings")?;

        Ok(Settings {
            dark_mode: dark_mode.map_or(Settings::default().dark_mode, |v| v == "true"),
        })
    }
}
