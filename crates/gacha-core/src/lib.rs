//! Core library for Gourmet Gacha, a recipe box with a weighted random
//! picker and a weekly meal plan.
//!
//! The crate is split along the same lines as the app:
//!
//! - [`models`]: recipes, rarity tiers, filters and the week plan
//! - [`oracle`]: filtering, the weighted pool and the draw
//! - [`navigator`]: the view/modal state machine over a history stack
//! - [`db`]: SQLite persistence behind the [`RecipeStore`] and
//!   [`MealPlanStore`] traits
//! - [`backup`]: versioned JSON import and export
//! - [`app`]: the interactive controller that owns all session state
//! - [`cookbook`]: an async façade for one-shot commands
//! - [`display`]: markdown formatting of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use gacha_core::{CookbookBuilder, models::OracleFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = CookbookBuilder::new()
//!     .with_database_path(Some("gacha.db"))
//!     .build()
//!     .await?;
//!
//! // Three sample recipes are seeded on first use
//! let recipes = cookbook.list_recipes().await?;
//! println!("{} recipes", recipes.len());
//!
//! let draw = cookbook.draw(OracleFilter::default()).await?;
//! println!("{draw}");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod backup;
pub mod cookbook;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod navigator;
pub mod oracle;
pub mod params;

// Re-export commonly used types
pub use app::{App, Renderer, Surface};
pub use backup::{BackupDocument, MigrationReport};
pub use cookbook::{Cookbook, CookbookBuilder};
pub use db::{Database, DeletedRecipe, MealPlanStore, RecipeStore, Store};
pub use display::{
    CreateResult, DeleteResult, ImportResult, OperationStatus, Recipes, UpdateResult,
};
pub use error::{GachaError, Result};
pub use models::{OracleFilter, Rarity, Recipe, Settings, Week, WeekDay};
pub use navigator::{MemoryHistory, Modal, NavigationHistory, Navigator, View};
pub use oracle::{Draw, OracleSession};
pub use params::{Id, PlanDay, RecipeForm, RecipeUpdate};
