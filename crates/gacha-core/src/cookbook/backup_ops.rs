//! Backup operations for the Cookbook.

use log::info;

use crate::{
    backup::BackupDocument,
    display::ImportResult,
    error::Result,
    models::today,
};

use super::Cookbook;

impl Cookbook {
    /// All data as a backup file in the current format.
    pub async fn export_backup(&self) -> Result<String> {
        self.with_database(|db| db.export_document()?.to_json()).await
    }

    /// Replaces all data with the contents of a backup file.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBackup` when the file cannot be read as a backup.
    /// Nothing is written in that case.
    pub async fn import_backup(&self, json: &str) -> Result<ImportResult> {
        let json = json.to_string();
        self.with_database(move |mut db| {
            let (document, report) = BackupDocument::parse(&json, today())?;
            db.replace_all(&document)?;
            info!(
                "Replaced cookbook with {} recipes and {} plan entries",
                document.recipes.len(),
                document.meal_plan.len()
            );
            Ok(ImportResult {
                recipes: document.recipes.len(),
                plan_entries: document.meal_plan.len(),
                report,
            })
        })
        .await
    }
}
