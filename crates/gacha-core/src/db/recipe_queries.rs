//! Recipe CRUD operations and queries.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, GachaError, Result},
    models::Recipe,
};

const RECIPE_COLUMNS: &str =
    "id, title, image, link, time_minutes, tags, rating, last_cooked";
const INSERT_RECIPE_SQL: &str = "INSERT INTO recipes (id, title, image, link, time_minutes, tags, rating, last_cooked, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_RECIPE_SQL: &str = "UPDATE recipes SET title = ?2, image = ?3, link = ?4, time_minutes = ?5, tags = ?6, rating = ?7, last_cooked = ?8 WHERE id = ?1";
const CHECK_RECIPE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?1)";
const NEXT_POSITION_SQL: &str = "SELECT COALESCE(MAX(position), -1) + 1 FROM recipes";
const SELECT_PLAN_DATES_FOR_RECIPE_SQL: &str =
    "SELECT date FROM meal_plan WHERE recipe_id = ?1 ORDER BY date";
const DELETE_RECIPE_PLAN_SQL: &str = "DELETE FROM meal_plan WHERE recipe_id = ?1";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";

/// A recipe removed from the cookbook together with the plan slots that
/// pointed at it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedRecipe {
    pub recipe: Recipe,
    pub cleared_dates: Vec<Date>,
}

/// Maps a row selected with [`RECIPE_COLUMNS`] to a recipe.
pub(crate) fn row_to_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let tags: String = row.get(5)?;
    let tags: Vec<String> = serde_json::from_str(&tags)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    let last_cooked = row
        .get::<_, Option<String>>(7)?
        .map(|s| s.parse::<Date>())
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(Recipe {
        id: row.get(0)?,
        title: row.get(1)?,
        image: row.get(2)?,
        link: row.get(3)?,
        time_minutes: row.get(4)?,
        tags,
        rating: row.get(6)?,
        last_cooked,
    })
}

/// Inserts `recipe` at `position` using an existing connection or
/// transaction.
pub(crate) fn insert_recipe_row(conn: &Connection, recipe: &Recipe, position: i64) -> Result<()> {
    let tags = serde_json::to_string(&recipe.tags)?;
    conn.execute(
        INSERT_RECIPE_SQL,
        params![
            recipe.id,
            recipe.title,
            recipe.image,
            recipe.link,
            recipe.time_minutes,
            tags,
            recipe.rating,
            recipe.last_cooked.map(|d| d.to_string()),
            position
        ],
    )
    .db_context("Failed to insert recipe")?;
    Ok(())
}

impl super::Database {
    /// Lists all recipes in the order they were added.
    pub fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY position, id"
            ))
            .db_context("Failed to prepare query")?;

        let recipes = stmt
            .query_map([], row_to_recipe)
            .db_context("Failed to query recipes")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read recipe row")?;
        Ok(recipes)
    }

    /// Retrieves a recipe by its ID.
    pub fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        self.connection
            .query_row(
                &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
                params![id],
                row_to_recipe,
            )
            .optional()
            .db_context("Failed to query recipe")
    }

    /// Recipes whose title contains `term`, ignoring case.
    pub fn search_recipes(&self, term: &str) -> Result<Vec<Recipe>> {
        let needle = term.to_lowercase();
        Ok(self
            .list_recipes()?
            .into_iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .collect())
    }

    /// Inserts `recipe` if its id is unseen, otherwise replaces the stored
    /// recipe with the same id. Returns `true` for an insert.
    pub fn upsert_recipe(&mut self, recipe: &Recipe) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_RECIPE_EXISTS_SQL, params![recipe.id], |row| row.get(0))
            .db_context("Failed to check recipe existence")?;

        if exists {
            let tags = serde_json::to_string(&recipe.tags)?;
            tx.execute(
                UPDATE_RECIPE_SQL,
                params![
                    recipe.id,
                    recipe.title,
                    recipe.image,
                    recipe.link,
                    recipe.time_minutes,
                    tags,
                    recipe.rating,
                    recipe.last_cooked.map(|d| d.to_string())
                ],
            )
            .db_context("Failed to update recipe")?;
        } else {
            let position: i64 = tx
                .query_row(NEXT_POSITION_SQL, [], |row| row.get(0))
                .db_context("Failed to compute recipe position")?;
            insert_recipe_row(&tx, recipe, position)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "{} recipe {}",
            if exists { "Updated" } else { "Inserted" },
            recipe.id
        );
        Ok(!exists)
    }

    /// Deletes a recipe and every meal plan entry that references it.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::RecipeNotFound`] when no recipe has that id.
    pub fn delete_recipe(&mut self, id: &str) -> Result<DeletedRecipe> {
        let recipe = self
            .get_recipe(id)?
            .ok_or_else(|| GachaError::RecipeNotFound { id: id.to_string() })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let cleared_dates = {
            let mut stmt = tx
                .prepare(SELECT_PLAN_DATES_FOR_RECIPE_SQL)
                .db_context("Failed to prepare query")?;
            let dates = stmt
                .query_map(params![id], |row| row.get::<_, String>(0))
                .db_context("Failed to query plan entries")?
                .collect::<rusqlite::Result<Vec<_>>>()
                .db_context("Failed to read plan entry")?;
            dates
                .iter()
                .filter_map(|d| d.parse::<Date>().ok())
                .collect::<Vec<_>>()
        };

        tx.execute(DELETE_RECIPE_PLAN_SQL, params![id])
            .db_context("Failed to delete plan entries")?;
        tx.execute(DELETE_RECIPE_SQL, params![id])
            .db_context("Failed to delete recipe")?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!(
            "Deleted recipe {id} and {} plan entries",
            cleared_dates.len()
        );
        Ok(DeletedRecipe {
            recipe,
            cleared_dates,
        })
    }
}
