//! Recipe form and deletion.

use log::info;

use super::{App, Renderer, Surface};
use crate::{
    db::{DeletedRecipe, Store},
    error::{GachaError, Result},
    models::Recipe,
    navigator::{Modal, NavigationHistory},
    params::RecipeForm,
};

impl<S: Store, H: NavigationHistory, R: Renderer> App<S, H, R> {
    /// All recipes in cookbook order.
    pub fn recipes(&self) -> Result<Vec<Recipe>> {
        self.store.list()
    }

    /// Opens the recipe form in add mode.
    pub fn open_new_recipe(&mut self) {
        self.editing = None;
        self.open_modal(Modal::AddEditRecipe);
    }

    /// Opens the recipe form for an existing recipe and returns the values
    /// to prefill it with.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::RecipeNotFound`] for an unknown id; nothing is
    /// opened.
    pub fn open_edit_recipe(&mut self, id: &str) -> Result<RecipeForm> {
        let recipe = self
            .store
            .get(id)?
            .ok_or_else(|| GachaError::RecipeNotFound { id: id.to_string() })?;

        self.editing = Some(recipe.id.clone());
        self.open_modal(Modal::AddEditRecipe);
        Ok(RecipeForm::from_recipe(&recipe))
    }

    /// Saves the form as a new recipe or over the recipe being edited, then
    /// closes the form.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid form and store errors from the
    /// write. The form stays open in both cases.
    pub fn save_recipe(&mut self, form: RecipeForm) -> Result<Recipe> {
        let editing = self.editing.clone();
        let (recipe, inserted) = self.store.save(editing.as_deref(), form)?;
        info!(
            "{} recipe '{}' ({})",
            if inserted { "Added" } else { "Saved" },
            recipe.title,
            recipe.id
        );

        self.editing = None;
        self.renderer.refresh(Surface::Cookbook);
        self.renderer.refresh(Surface::WeekPlan);
        self.finish_modal(Modal::AddEditRecipe);
        Ok(recipe)
    }

    /// Deletes the recipe open in the form.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the form is in add mode.
    pub fn delete_editing_recipe(&mut self) -> Result<DeletedRecipe> {
        let id = self.editing.clone().ok_or_else(|| {
            GachaError::invalid_input("recipe").with_reason("no recipe is being edited")
        })?;
        self.delete_recipe(&id)
    }

    /// Deletes a recipe with its plan entries and closes the form if open.
    /// An oracle result showing the recipe is discarded.
    pub fn delete_recipe(&mut self, id: &str) -> Result<DeletedRecipe> {
        let deleted = self.store.delete(id)?;
        info!(
            "Deleted recipe '{}' and {} plan entries",
            deleted.recipe.title,
            deleted.cleared_dates.len()
        );

        if self
            .oracle
            .result
            .as_ref()
            .is_some_and(|draw| draw.recipe.id == id)
        {
            self.oracle.reset_result();
            self.renderer.refresh(Surface::Oracle);
        }
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }

        self.renderer.refresh(Surface::Cookbook);
        self.renderer.refresh(Surface::WeekPlan);
        self.finish_modal(Modal::AddEditRecipe);
        Ok(deleted)
    }
}
