//! Meal plan operations and queries.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, GachaError, Result},
    models::{PlanEntry, Week},
};

const SELECT_PLAN_SQL: &str = "SELECT recipe_id FROM meal_plan WHERE date = ?1";
const SELECT_ALL_PLAN_SQL: &str = "SELECT date, recipe_id FROM meal_plan ORDER BY date";
const UPSERT_PLAN_SQL: &str = "INSERT INTO meal_plan (date, recipe_id) VALUES (?1, ?2) ON CONFLICT(date) DO UPDATE SET recipe_id = excluded.recipe_id";
const DELETE_PLAN_SQL: &str = "DELETE FROM meal_plan WHERE date = ?1";
const CHECK_RECIPE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?1)";

impl super::Database {
    /// Recipe id planned for `date`, if any.
    pub fn planned_recipe_id(&self, date: Date) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![date.to_string()], |row| row.get(0))
            .optional()
            .db_context("Failed to query meal plan")
    }

    /// Plans `recipe_id` for `date`, replacing whatever was planned.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::RecipeNotFound`] when the recipe does not exist.
    pub fn set_plan(&mut self, date: Date, recipe_id: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_RECIPE_EXISTS_SQL, params![recipe_id], |row| row.get(0))
            .db_context("Failed to check recipe existence")?;
        if !exists {
            return Err(GachaError::RecipeNotFound {
                id: recipe_id.to_string(),
            });
        }

        tx.execute(UPSERT_PLAN_SQL, params![date.to_string(), recipe_id])
            .db_context("Failed to write meal plan entry")?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Planned {recipe_id} for {date}");
        Ok(())
    }

    /// Removes the entry for `date`. Returns whether one existed.
    pub fn clear_plan(&mut self, date: Date) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_PLAN_SQL, params![date.to_string()])
            .db_context("Failed to clear meal plan entry")?;
        Ok(removed > 0)
    }

    /// Removes the entries for every date in `dates` in one transaction.
    /// Returns how many entries were removed.
    pub fn clear_plan_dates(&mut self, dates: &[Date]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut removed = 0;
        for date in dates {
            removed += tx
                .execute(DELETE_PLAN_SQL, params![date.to_string()])
                .db_context("Failed to clear meal plan entry")?;
        }
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(removed)
    }

    /// All meal plan entries ordered by date.
    pub fn plan_entries(&self) -> Result<Vec<PlanEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let entries = stmt
            .query_map([], |row| {
                let date: String = row.get(0)?;
                let date = date.parse::<Date>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })?;
                Ok(PlanEntry {
                    date,
                    recipe_id: row.get(1)?,
                })
            })
            .db_context("Failed to query meal plan")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read meal plan entry")?;
        Ok(entries)
    }

    /// The week at `offset` from the week containing `today`, with planned
    /// recipes resolved.
    pub fn week(&self, today: Date, offset: i32) -> Result<Week> {
        let recipes = self.list_recipes()?;
        let entries = self.plan_entries()?;
        Week::build(today, offset, |date| {
            entries
                .iter()
                .find(|e| e.date == date)
                .and_then(|e| recipes.iter().find(|r| r.id == e.recipe_id))
                .cloned()
        })
    }
}
