//! Backup export and import.

use log::info;

use super::{App, Renderer, Surface};
use crate::{
    backup::BackupDocument,
    db::Store,
    display::ImportResult,
    error::Result,
    navigator::{Modal, NavigationHistory},
};

impl<S: Store, H: NavigationHistory, R: Renderer> App<S, H, R> {
    pub fn open_backup(&mut self) {
        self.open_modal(Modal::DataBackup);
    }

    /// Current data as a backup file.
    pub fn export_backup(&self) -> Result<String> {
        self.store.export_document()?.to_json()
    }

    /// Replaces all data with the contents of a backup file and closes the
    /// backup modal.
    ///
    /// # Errors
    ///
    /// Returns `MalformedBackup` for unreadable files. Nothing is written in
    /// that case.
    pub fn import_backup(&mut self, json: &str) -> Result<ImportResult> {
        let (document, report) = BackupDocument::parse(json, self.today())?;
        self.store.replace_all(&document)?;
        info!(
            "Imported {} recipes and {} plan entries",
            document.recipes.len(),
            document.meal_plan.len()
        );

        self.oracle.reset_result();
        self.editing = None;
        for surface in [Surface::Cookbook, Surface::WeekPlan, Surface::Oracle] {
            self.renderer.refresh(surface);
        }
        if self.navigator.history_modal() == Some(Modal::DataBackup) {
            self.back();
        }

        Ok(ImportResult {
            recipes: document.recipes.len(),
            plan_entries: document.meal_plan.len(),
            report,
        })
    }
}
