//! Filter types for narrowing the oracle's candidate set.

use super::Recipe;

/// Longest preparation time that still counts as "quick".
pub const QUICK_MAX_MINUTES: u32 = 30;

/// Lowercase tag fragments that mark a recipe as vegetarian.
const VEGETARIAN_TOKENS: &[&str] = &["veggie", "vegetarisch", "vegetarian"];

/// Oracle filter options. Active filters combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleFilter {
    /// Only recipes ready in at most [`QUICK_MAX_MINUTES`]
    pub quick: bool,

    /// Only recipes carrying a vegetarian tag
    pub vegetarian: bool,
}

impl OracleFilter {
    /// Whether `recipe` satisfies every active filter.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.quick && recipe.time_minutes > QUICK_MAX_MINUTES {
            return false;
        }
        if self.vegetarian && !is_vegetarian(recipe) {
            return false;
        }
        true
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        !self.quick && !self.vegetarian
    }
}

fn is_vegetarian(recipe: &Recipe) -> bool {
    recipe.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        VEGETARIAN_TOKENS.iter().any(|token| tag.contains(token))
    })
}
