//! Async façade for one-shot commands.
//!
//! A [`Cookbook`] only remembers where its database lives. Each operation
//! opens its own connection on the blocking thread pool, does its work and
//! commits before the future resolves, so concurrent CLI invocations never
//! share a connection.
//!
//! ## Submodules
//!
//! - [`builder`]: database location and first-run seeding
//! - [`recipe_ops`]: recipe CRUD and search
//! - [`plan_ops`]: the week plan and oracle draws
//! - [`backup_ops`]: export and import
//! - [`handlers`]: the same operations returning display wrappers
//!
//! ```rust,no_run
//! use gacha_core::{CookbookBuilder, params::RecipeForm};
//!
//! # async fn example() -> gacha_core::Result<()> {
//! let cookbook = CookbookBuilder::new().build().await?;
//! let recipe = cookbook
//!     .create_recipe(&RecipeForm {
//!         title: "Shakshuka".to_string(),
//!         time_minutes: 25,
//!         tags: vec!["Veggie".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{recipe}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, ResultExt},
};

pub mod backup_ops;
pub mod builder;
pub mod handlers;
pub mod plan_ops;
pub mod recipe_ops;

pub use builder::CookbookBuilder;

/// Entry point for one-shot cookbook operations.
#[derive(Debug, Clone)]
pub struct Cookbook {
    pub(crate) db_path: PathBuf,
}

impl Cookbook {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a connection for long-lived use, e.g. by the interactive
    /// controller.
    pub async fn open_database(&self) -> Result<Database> {
        self.with_database(Ok).await
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            op(db)
        })
        .await
        .with_context("Task join error")?
    }
}
