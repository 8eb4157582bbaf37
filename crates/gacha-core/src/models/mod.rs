//! Data models for recipes, ratings and the meal plan.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use gacha_core::models::{Rarity, Recipe};
//!
//! let recipe = Recipe::new("uuid-1", "Chili con Carne")
//!     .with_minutes(45)
//!     .with_rating(5);
//! assert_eq!(recipe.rarity(), Rarity::Legendary);
//! assert_eq!(recipe.pool_copies(), 3);
//! ```

pub mod filters;
pub mod meal_plan;
pub mod rarity;
pub mod recipe;
pub mod settings;


pub use filters::{OracleFilter, QUICK_MAX_MINUTES};
pub use meal_plan::{today, PlanEntry, Week, WeekDay};
pub use rarity::Rarity;
pub use recipe::{generate_id, Recipe, DEFAULT_RATING, MAX_RATING, MIN_RATING};
pub use settings::Settings;
