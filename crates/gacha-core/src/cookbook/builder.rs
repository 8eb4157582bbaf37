//! Builder for creating and configuring Cookbook instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Cookbook;
use crate::{
    db::Database,
    error::{GachaError, Result, ResultExt},
};

/// Directory name under the XDG data home.
const APP_PREFIX: &str = "gourmet-gacha";

/// Database file name inside [`APP_PREFIX`].
const DATABASE_FILE: &str = "gacha.db";

/// Builder for creating and configuring Cookbook instances.
#[derive(Debug, Clone)]
pub struct CookbookBuilder {
    database_path: Option<PathBuf>,
    sample_recipes: bool,
}

impl CookbookBuilder {
    /// Creates a builder that uses the default database location and seeds
    /// sample recipes on first use.
    pub fn new() -> Self {
        Self {
            database_path: None,
            sample_recipes: true,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/gourmet-gacha/gacha.db` or
    /// `~/.local/share/gourmet-gacha/gacha.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Whether a brand-new cookbook gets the three sample recipes.
    pub fn with_sample_recipes(mut self, enabled: bool) -> Self {
        self.sample_recipes = enabled;
        self
    }

    /// Builds the configured cookbook, creating the database (and its
    /// parent directories) if needed.
    ///
    /// # Errors
    ///
    /// Returns `GachaError::FileSystem` if the parent directory cannot be
    /// created, `GachaError::XdgDirectory` if no default location exists and
    /// `GachaError::Database` if initialization fails.
    pub async fn build(self) -> Result<Cookbook> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GachaError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let sample_recipes = self.sample_recipes;
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path_clone)?;
            if sample_recipes && db.seed_samples()? {
                info!("Seeded sample recipes into {}", db_path_clone.display());
            }
            Ok::<(), GachaError>(())
        })
        .await
        .with_context("Task join error")??;

        Ok(Cookbook::new(db_path))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_data_file(DATABASE_FILE)
            .map_err(|e| GachaError::XdgDirectory(e.to_string()))
    }
}

impl Default for CookbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
