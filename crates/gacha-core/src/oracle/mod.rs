//! Weighted random recipe selection.
//!
//! The oracle narrows the cookbook with an [`OracleFilter`], expands the
//! remaining candidates into a weighted pool (see [`Recipe::pool_copies`])
//! and picks one pool entry uniformly at random. Higher-rated recipes
//! therefore win proportionally more often: weight 3 for rating 5, weight 2
//! for rating 4 and weight 1 otherwise.
//!
//! ```rust
//! use gacha_core::{models::{OracleFilter, Recipe}, oracle};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let recipes = vec![
//!     Recipe::new("A", "Chili").with_rating(5),
//!     Recipe::new("B", "Salad").with_rating(3),
//! ];
//! let pool = oracle::build_pool(&recipes, &OracleFilter::default()).unwrap();
//! let ids: Vec<&str> = pool.iter().map(|r| r.id.as_str()).collect();
//! assert_eq!(ids, ["A", "A", "A", "B"]);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let draw = oracle::draw(&recipes, &OracleFilter::default(), &mut rng).unwrap();
//! assert!(draw.recipe.id == "A" || draw.recipe.id == "B");
//! ```

pub mod reveal;
pub mod session;

use log::debug;
use rand::Rng;

use crate::{
    error::{GachaError, Result},
    models::{OracleFilter, Rarity, Recipe},
};

pub use reveal::{RevealStage, FLASH_FADE, REVEAL_SEQUENCE};
pub use session::OracleSession;

/// Result of a successful draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    /// The winning recipe
    pub recipe: Recipe,

    /// Presentation tier derived from the winner's rating
    pub rarity: Rarity,

    /// Number of entries in the pool the winner was drawn from
    pub pool_size: usize,
}

/// Recipes that pass every active filter, in cookbook order.
pub fn candidates<'a>(recipes: &'a [Recipe], filter: &OracleFilter) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).collect()
}

/// Builds the weighted pool for `filter`.
///
/// # Errors
///
/// Returns [`GachaError::EmptyPool`] when no recipe passes the filter.
pub fn build_pool<'a>(recipes: &'a [Recipe], filter: &OracleFilter) -> Result<Vec<&'a Recipe>> {
    let candidates = candidates(recipes, filter);
    if candidates.is_empty() {
        return Err(GachaError::EmptyPool);
    }

    let pool: Vec<&Recipe> = candidates
        .into_iter()
        .flat_map(|recipe| std::iter::repeat(recipe).take(recipe.pool_copies()))
        .collect();
    Ok(pool)
}

/// Draws one recipe from the weighted pool.
///
/// Each call is independent; the same inputs may produce the same winner
/// twice in a row.
///
/// # Errors
///
/// Returns [`GachaError::EmptyPool`] when no recipe passes the filter. No
/// random number is consumed in that case.
pub fn draw<R: Rng>(recipes: &[Recipe], filter: &OracleFilter, rng: &mut R) -> Result<Draw> {
    let pool = build_pool(recipes, filter)?;
    let index = rng.gen_range(0..pool.len());
    let recipe = pool[index].clone();
    debug!(
        "Oracle drew '{}' ({}) from a pool of {}",
        recipe.title,
        recipe.id,
        pool.len()
    );

    Ok(Draw {
        rarity: recipe.rarity(),
        pool_size: pool.len(),
        recipe,
    })
}
