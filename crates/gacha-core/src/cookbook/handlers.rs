//! Cookbook operations that return display wrapper types.
//!
//! Interfaces print these directly; the wrappers decide how each outcome
//! reads.

use jiff::civil::Date;

use super::Cookbook;
use crate::{
    db::DeletedRecipe,
    display::{CreateResult, DeleteResult, OperationStatus, Recipes, ShortDate, UpdateResult},
    error::Result,
    models::{Recipe, Week},
    params::{Id, PlanDay, RecipeForm, RecipeUpdate},
};

impl Cookbook {
    /// Handle listing recipes, optionally narrowed by a title search.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use gacha_core::CookbookBuilder;
    /// # async {
    /// let cookbook = CookbookBuilder::new().build().await?;
    /// let recipes = cookbook.list_recipes_display(Some("salad")).await?;
    /// println!("{recipes}");
    /// # Result::<(), gacha_core::GachaError>::Ok(())
    /// # };
    /// ```
    pub async fn list_recipes_display(&self, search: Option<&str>) -> Result<Recipes> {
        let recipes = match search {
            Some(term) => self.search_recipes(term).await?,
            None => self.list_recipes().await?,
        };
        Ok(Recipes(recipes))
    }

    /// Handle adding a recipe.
    pub async fn create_recipe_result(&self, form: &RecipeForm) -> Result<CreateResult<Recipe>> {
        let recipe = self.create_recipe(form).await?;
        Ok(CreateResult::new(recipe))
    }

    /// Handle editing a recipe, reporting which fields the update touched.
    pub async fn update_recipe_result(
        &self,
        update: &RecipeUpdate,
    ) -> Result<UpdateResult<Recipe>> {
        let changes = update.changes();
        let recipe = self.update_recipe(update).await?;
        Ok(UpdateResult::with_changes(recipe, changes))
    }

    /// Handle deleting a recipe.
    pub async fn delete_recipe_result(&self, params: &Id) -> Result<DeleteResult<DeletedRecipe>> {
        let deleted = self.delete_recipe(params).await?;
        Ok(DeleteResult::new(deleted))
    }

    /// Handle showing the week at `offset`.
    pub async fn show_week(&self, offset: i32) -> Result<Week> {
        self.week(offset).await
    }

    /// Handle planning a recipe on a day.
    pub async fn plan_day_status(&self, params: &PlanDay) -> Result<OperationStatus> {
        let recipe = self.plan_day(params).await?;
        Ok(OperationStatus::success(format!(
            "Planned '{}' for {}",
            recipe.title,
            ShortDate(&params.date)
        )))
    }

    /// Handle clearing a day.
    pub async fn clear_day_status(&self, date: Date) -> Result<OperationStatus> {
        let label = ShortDate(&date);
        Ok(if self.clear_day(date).await? {
            OperationStatus::success(format!("Cleared {label}"))
        } else {
            OperationStatus::failure(format!("Nothing planned for {label}"))
        })
    }

    /// Handle clearing the week at `offset`.
    pub async fn clear_week_status(&self, offset: i32) -> Result<OperationStatus> {
        let removed = self.clear_week(offset).await?;
        Ok(OperationStatus::success(format!(
            "Cleared {removed} planned days"
        )))
    }
}
