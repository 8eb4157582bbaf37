//! Store interfaces consumed by the application controller.
//!
//! [`Database`](super::Database) implements all of them. The controller is
//! generic over [`Store`], so tests can wrap the database to inject failures.

use jiff::civil::Date;

use crate::{
    backup::BackupDocument,
    error::Result,
    models::{generate_id, PlanEntry, Recipe, Week},
    params::RecipeForm,
};

use super::{recipe_queries::DeletedRecipe, Database};

/// Persisted, ordered collection of recipes.
pub trait RecipeStore {
    fn list(&self) -> Result<Vec<Recipe>>;
    fn get(&self, id: &str) -> Result<Option<Recipe>>;

    /// Inserts when the id is unseen, otherwise replaces. Returns `true` for
    /// an insert.
    fn upsert(&mut self, recipe: &Recipe) -> Result<bool>;

    /// Removes the recipe and every meal plan entry pointing at it.
    fn delete(&mut self, id: &str) -> Result<DeletedRecipe>;

    /// Case-insensitive title substring search.
    fn search(&self, term: &str) -> Result<Vec<Recipe>>;

    /// Validates `form` and stores it as recipe `id`, or as a new recipe
    /// when `id` is `None`. Editing keeps the id and `last_cooked` date.
    /// Returns the stored recipe and whether it was inserted.
    fn save(&mut self, id: Option<&str>, form: RecipeForm) -> Result<(Recipe, bool)> {
        let form = form.validated()?;
        let (id, last_cooked) = match id {
            Some(id) => {
                let last_cooked = self.get(id)?.and_then(|r| r.last_cooked);
                (id.to_string(), last_cooked)
            }
            None => (generate_id(), None),
        };

        let recipe = form.into_recipe(id, last_cooked);
        let inserted = self.upsert(&recipe)?;
        Ok((recipe, inserted))
    }
}

/// Persisted date → recipe id mapping.
pub trait MealPlanStore {
    fn planned(&self, date: Date) -> Result<Option<String>>;

    /// Fails with `RecipeNotFound` when the recipe does not exist.
    fn set(&mut self, date: Date, recipe_id: &str) -> Result<()>;

    /// Returns whether an entry was removed.
    fn clear(&mut self, date: Date) -> Result<bool>;

    fn entries(&self) -> Result<Vec<PlanEntry>>;

    /// Returns how many entries were removed.
    fn clear_range(&mut self, dates: &[Date]) -> Result<usize>;
}

/// Everything the controller needs from persistence.
pub trait Store: RecipeStore + MealPlanStore {
    /// The week at `offset` from the week containing `today`.
    fn week(&self, today: Date, offset: i32) -> Result<Week>;

    /// Snapshot of all stored data.
    fn export_document(&self) -> Result<BackupDocument>;

    /// Replaces all stored data with `document` atomically.
    fn replace_all(&mut self, document: &BackupDocument) -> Result<()>;
}

impl RecipeStore for Database {
    fn list(&self) -> Result<Vec<Recipe>> {
        self.list_recipes()
    }

    fn get(&self, id: &str) -> Result<Option<Recipe>> {
        self.get_recipe(id)
    }

    fn upsert(&mut self, recipe: &Recipe) -> Result<bool> {
        self.upsert_recipe(recipe)
    }

    fn delete(&mut self, id: &str) -> Result<DeletedRecipe> {
        self.delete_recipe(id)
    }

    fn search(&self, term: &str) -> Result<Vec<Recipe>> {
        self.search_recipes(term)
    }
}

impl MealPlanStore for Database {
    fn planned(&self, date: Date) -> Result<Option<String>> {
        self.planned_recipe_id(date)
    }

    fn set(&mut self, date: Date, recipe_id: &str) -> Result<()> {
        self.set_plan(date, recipe_id)
    }

    fn clear(&mut self, date: Date) -> Result<bool> {
        self.clear_plan(date)
    }

    fn entries(&self) -> Result<Vec<PlanEntry>> {
        self.plan_entries()
    }

    fn clear_range(&mut self, dates: &[Date]) -> Result<usize> {
        self.clear_plan_dates(dates)
    }
}

impl Store for Database {
    fn week(&self, today: Date, offset: i32) -> Result<Week> {
        Database::week(self, today, offset)
    }

    fn export_document(&self) -> Result<BackupDocument> {
        Database::export_document(self)
    }

    fn replace_all(&mut self, document: &BackupDocument) -> Result<()> {
        Database::replace_all(self, document)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::error::GachaError;

    fn form(title: &str) -> RecipeForm {
        RecipeForm {
            title: title.to_string(),
            time_minutes: 25,
            ..Default::default()
        }
    }

    #[test]
    fn test_save_new_recipe_generates_id() {
        let mut db = Database::in_memory().unwrap();
        let (recipe, inserted) = db.save(None, form("Soup")).unwrap();
        assert!(inserted);
        assert!(recipe.id.starts_with("uuid-"));
        assert_eq!(RecipeStore::get(&db, &recipe.id).unwrap(), Some(recipe));
    }

    #[test]
    fn test_save_edit_preserves_last_cooked() {
        let mut db = Database::in_memory().unwrap();
        let mut original = Recipe::new("uuid-1", "Soup");
        original.last_cooked = Some(date(2024, 5, 1));
        db.upsert(&original).unwrap();

        let (edited, inserted) = db.save(Some("uuid-1"), form("Tomato Soup")).unwrap();
        assert!(!inserted);
        assert_eq!(edited.title, "Tomato Soup");
        assert_eq!(edited.last_cooked, Some(date(2024, 5, 1)));
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[test]
    fn test_save_rejects_invalid_form_without_writing() {
        let mut db = Database::in_memory().unwrap();
        let result = db.save(None, form("   "));
        assert!(matches!(result, Err(GachaError::InvalidInput { .. })));
        assert!(db.list().unwrap().is_empty());
    }
}
