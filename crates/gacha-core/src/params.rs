//! Parameter structures for gacha operations.
//!
//! These structures are shared by every interface (one-shot CLI commands and
//! the interactive shell) and carry no framework-specific derives. Interface
//! layers define their own argument types and convert into these.

use jiff::civil::Date;

use crate::{
    error::{GachaError, Result},
    models::{Recipe, DEFAULT_RATING, MAX_RATING, MIN_RATING},
};

/// Generic parameters for operations requiring just a recipe id.
#[derive(Debug, Clone, Default)]
pub struct Id {
    pub id: String,
}

/// Contents of the add/edit recipe form.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    pub title: String,
    pub image: String,
    pub link: Option<String>,
    pub time_minutes: u32,
    pub tags: Vec<String>,
    pub rating: u8,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            image: String::new(),
            link: None,
            time_minutes: 0,
            tags: Vec::new(),
            rating: DEFAULT_RATING,
        }
    }
}

impl RecipeForm {
    /// Prefills the form from an existing recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            link: recipe.link.clone(),
            time_minutes: recipe.time_minutes,
            tags: recipe.tags.clone(),
            rating: recipe.effective_rating(),
        }
    }

    /// Splits a comma-separated tag field, trimming entries and dropping
    /// empty ones.
    pub fn parse_tags(field: &str) -> Vec<String> {
        field
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    /// Validates the form and returns it with whitespace and empty values
    /// cleaned up.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::InvalidInput`] for an empty title or a rating
    /// outside 1–5.
    pub fn validated(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(GachaError::invalid_input("title").with_reason("must not be empty"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(GachaError::invalid_input("rating").with_reason(format!(
                "must be between {MIN_RATING} and {MAX_RATING}, got {}",
                self.rating
            )));
        }

        Ok(Self {
            title,
            image: self.image.trim().to_string(),
            link: self
                .link
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            time_minutes: self.time_minutes,
            tags: self
                .tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
            rating: self.rating,
        })
    }

    /// Builds the stored recipe for this form.
    pub fn into_recipe(self, id: String, last_cooked: Option<Date>) -> Recipe {
        Recipe {
            id,
            title: self.title,
            image: self.image,
            link: self.link,
            time_minutes: self.time_minutes,
            tags: self.tags,
            rating: self.rating,
            last_cooked,
        }
    }
}

/// Partial changes to an existing recipe. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub id: String,
    pub title: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub time_minutes: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<u8>,
}

impl RecipeUpdate {
    /// The form that results from applying these changes to `recipe`.
    pub fn apply_to(self, recipe: &Recipe) -> RecipeForm {
        let current = RecipeForm::from_recipe(recipe);
        RecipeForm {
            title: self.title.unwrap_or(current.title),
            image: self.image.unwrap_or(current.image),
            link: self.link.or(current.link),
            time_minutes: self.time_minutes.unwrap_or(current.time_minutes),
            tags: self.tags.unwrap_or(current.tags),
            rating: self.rating.unwrap_or(current.rating),
        }
    }

    /// Human-readable list of the fields this update touches.
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.image.is_some() {
            changes.push("Updated image".to_string());
        }
        if self.link.is_some() {
            changes.push("Updated link".to_string());
        }
        if let Some(minutes) = self.time_minutes {
            changes.push(format!("Set time to {minutes} min"));
        }
        if self.tags.is_some() {
            changes.push("Updated tags".to_string());
        }
        if let Some(rating) = self.rating {
            changes.push(format!("Set rating to {rating}"));
        }
        changes
    }
}

/// Parameters for planning a recipe on a day.
#[derive(Debug, Clone)]
pub struct PlanDay {
    pub date: Date,
    pub recipe_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(
            RecipeForm::parse_tags(" Veggie, ,Schnell ,"),
            vec!["Veggie".to_string(), "Schnell".to_string()]
        );
        assert!(RecipeForm::parse_tags("").is_empty());
    }

    #[test]
    fn test_validated_cleans_fields() {
        let form = RecipeForm {
            title: "  Soup ".to_string(),
            link: Some("   ".to_string()),
            tags: vec![" Warm ".to_string(), String::new()],
            ..Default::default()
        }
        .validated()
        .unwrap();

        assert_eq!(form.title, "Soup");
        assert_eq!(form.link, None);
        assert_eq!(form.tags, vec!["Warm".to_string()]);
        assert_eq!(form.rating, DEFAULT_RATING);
    }

    #[test]
    fn test_validated_rejects_bad_input() {
        let empty_title = RecipeForm::default().validated();
        assert!(matches!(
            empty_title,
            Err(GachaError::InvalidInput { ref field, .. }) if field == "title"
        ));

        let bad_rating = RecipeForm {
            title: "Soup".to_string(),
            rating: 6,
            ..Default::default()
        }
        .validated();
        assert!(matches!(
            bad_rating,
            Err(GachaError::InvalidInput { ref field, .. }) if field == "rating"
        ));
    }

    #[test]
    fn test_update_keeps_unset_fields() {
        let recipe = Recipe::new("uuid-1", "Chili")
            .with_minutes(45)
            .with_tags(["Scharf"])
            .with_rating(5);
        let update = RecipeUpdate {
            id: "uuid-1".to_string(),
            rating: Some(4),
            ..Default::default()
        };
        assert_eq!(update.changes(), vec!["Set rating to 4".to_string()]);

        let form = update.apply_to(&recipe);
        assert_eq!(form.title, "Chili");
        assert_eq!(form.time_minutes, 45);
        assert_eq!(form.tags, vec!["Scharf".to_string()]);
        assert_eq!(form.rating, 4);
    }
}
