//! Recipe operations for the Cookbook.

use crate::{
    db::{DeletedRecipe, RecipeStore},
    error::{GachaError, Result},
    models::Recipe,
    params::{Id, RecipeForm, RecipeUpdate},
};

use super::Cookbook;

impl Cookbook {
    /// All recipes in the order they were added.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.with_database(|db| db.list()).await
    }

    /// Retrieves a recipe by its id.
    pub async fn get_recipe(&self, params: &Id) -> Result<Option<Recipe>> {
        let id = params.id.clone();
        self.with_database(move |db| RecipeStore::get(&db, &id)).await
    }

    /// Recipes whose title contains `term`, ignoring case.
    pub async fn search_recipes(&self, term: &str) -> Result<Vec<Recipe>> {
        let term = term.to_string();
        self.with_database(move |db| db.search(&term)).await
    }

    /// Adds a recipe under a freshly generated id.
    pub async fn create_recipe(&self, form: &RecipeForm) -> Result<Recipe> {
        let form = form.clone();
        self.with_database(move |mut db| db.save(None, form).map(|(recipe, _)| recipe))
            .await
    }

    /// Applies `update` to an existing recipe.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::RecipeNotFound`] when the id is unknown.
    pub async fn update_recipe(&self, update: &RecipeUpdate) -> Result<Recipe> {
        let update = update.clone();
        self.with_database(move |mut db| {
            let current = RecipeStore::get(&db, &update.id)?.ok_or_else(|| {
                GachaError::RecipeNotFound {
                    id: update.id.clone(),
                }
            })?;
            let id = current.id.clone();
            let form = update.apply_to(&current);
            db.save(Some(&id), form).map(|(recipe, _)| recipe)
        })
        .await
    }

    /// Deletes a recipe and every meal plan entry referencing it.
    pub async fn delete_recipe(&self, params: &Id) -> Result<DeletedRecipe> {
        let id = params.id.clone();
        self.with_database(move |mut db| db.delete(&id)).await
    }
}
