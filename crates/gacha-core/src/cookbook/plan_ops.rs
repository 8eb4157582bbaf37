//! Week plan and oracle operations for the Cookbook.

use jiff::civil::Date;
use log::info;

use crate::{
    db::{MealPlanStore, RecipeStore, Store},
    error::{GachaError, Result},
    models::{today, OracleFilter, Recipe, Week},
    oracle::{self, Draw},
    params::PlanDay,
};

use super::Cookbook;

impl Cookbook {
    /// The week `offset` weeks away from the current one.
    pub async fn week(&self, offset: i32) -> Result<Week> {
        self.with_database(move |db| Store::week(&db, today(), offset)).await
    }

    /// Plans a recipe on a day, replacing whatever was planned. Returns the
    /// planned recipe.
    pub async fn plan_day(&self, params: &PlanDay) -> Result<Recipe> {
        let PlanDay { date, recipe_id } = params.clone();
        self.with_database(move |mut db| {
            let recipe = RecipeStore::get(&db, &recipe_id)?.ok_or_else(|| {
                GachaError::RecipeNotFound {
                    id: recipe_id.clone(),
                }
            })?;
            db.set(date, &recipe_id)?;
            info!("Planned '{}' for {date}", recipe.title);
            Ok(recipe)
        })
        .await
    }

    /// Removes the entry for `date`. Returns whether one existed.
    pub async fn clear_day(&self, date: Date) -> Result<bool> {
        self.with_database(move |mut db| db.clear(date)).await
    }

    /// Removes every entry of the week at `offset`. Returns how many were
    /// removed.
    pub async fn clear_week(&self, offset: i32) -> Result<usize> {
        self.with_database(move |mut db| {
            let dates = Week::dates(today(), offset)?;
            db.clear_range(&dates)
        })
        .await
    }

    /// Draws a recipe with the thread-local random generator.
    pub async fn draw(&self, filter: OracleFilter) -> Result<Draw> {
        self.draw_and_plan(filter, None).await
    }

    /// Draws a recipe and, when `plan_on` is given, plans the winner on
    /// that day. This is the one-shot equivalent of accepting a draw with a
    /// target date.
    pub async fn draw_and_plan(&self, filter: OracleFilter, plan_on: Option<Date>) -> Result<Draw> {
        self.with_database(move |mut db| {
            let recipes = db.list()?;
            let draw = oracle::draw(&recipes, &filter, &mut rand::thread_rng())?;
            if let Some(date) = plan_on {
                db.set(date, &draw.recipe.id)?;
                info!("Planned '{}' for {date}", draw.recipe.title);
            }
            Ok(draw)
        })
        .await
    }
}
