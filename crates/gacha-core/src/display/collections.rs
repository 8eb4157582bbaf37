//! Collection wrappers for displaying groups of recipes.

use std::{fmt, ops::Index};

use crate::models::Recipe;

/// Newtype wrapper for displaying a list of recipes.
///
/// Empty lists render a short notice instead of nothing.
///
/// ```rust
/// use gacha_core::{display::Recipes, models::Recipe};
///
/// let recipes = Recipes(vec![Recipe::new("uuid-1", "Chili con Carne")]);
/// assert!(recipes.to_string().contains("Chili con Carne"));
/// assert_eq!(Recipes(vec![]).to_string(), "No recipes found.\n");
/// ```
pub struct Recipes(pub Vec<Recipe>);

impl Recipes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.0.iter()
    }
}

impl Index<usize> for Recipes {
    type Output = Recipe;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Recipes {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Recipes {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Recipes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recipes found.")
        } else {
            for recipe in &self.0 {
                write!(f, "{recipe}")?;
            }
            Ok(())
        }
    }
}
