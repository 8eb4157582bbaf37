//! Backup documents and the versioned loader that reads them.
//!
//! Exports always use the current schema:
//!
//! ```json
//! { "recipes": [...], "mealPlan": { "2024-05-06": "uuid-1" }, "settings": { "darkMode": true } }
//! ```
//!
//! Imports accept the current schema and the legacy one, where the plan was a
//! single week keyed by weekday name (`weeklyPlan: { "Monday": "uuid-1" }`).
//! Loading is split into a detection step that only inspects the parsed JSON
//! and a pure [`migrate`] step that builds a fresh [`BackupDocument`].

pub mod migrate;

use std::collections::BTreeMap;

use jiff::civil::Date;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{GachaError, Result},
    models::{Recipe, Settings},
};

pub use migrate::{migrate, MigrationReport, PLACEHOLDER_IMAGE_BASE};

/// Field holding the current date-keyed plan.
pub const MEAL_PLAN_FIELD: &str = "mealPlan";

/// Field holding the legacy weekday-keyed plan.
pub const LEGACY_PLAN_FIELD: &str = "weeklyPlan";

/// Schema generation of a backup document, detected from the fields present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// Single week keyed by weekday name
    LegacyWeekly,
    /// Date-keyed meal plan
    Current,
}

/// A complete snapshot of the cookbook in the current schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub recipes: Vec<Recipe>,

    /// Date → recipe id
    pub meal_plan: BTreeMap<Date, String>,

    #[serde(default)]
    pub settings: Settings,
}

impl BackupDocument {
    /// Serializes the document in the current schema.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and migrates a backup file's contents. Legacy weekday keys are
    /// mapped onto the week containing `today`.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::MalformedBackup`] when the text is not JSON, or
    /// lacks a `recipes` list or any plan field.
    pub fn parse(json: &str, today: Date) -> Result<(Self, MigrationReport)> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GachaError::malformed_backup(format!("invalid JSON: {e}")))?;
        let version = detect_version(&value)?;
        let (document, report) = migrate(&value, version, today)?;
        info!(
            "Loaded {:?} backup with {} recipes and {} plan entries",
            version,
            document.recipes.len(),
            document.meal_plan.len()
        );
        Ok((document, report))
    }
}

/// Determines the schema of a parsed backup without modifying it.
///
/// # Errors
///
/// Returns [`GachaError::MalformedBackup`] when required fields are missing.
pub fn detect_version(value: &Value) -> Result<SchemaVersion> {
    let object = value
        .as_object()
        .ok_or_else(|| GachaError::malformed_backup("expected a JSON object"))?;

    if !object.get("recipes").is_some_and(Value::is_array) {
        return Err(GachaError::malformed_backup("missing 'recipes' list"));
    }

    if object.get(LEGACY_PLAN_FIELD).is_some_and(Value::is_object) {
        Ok(SchemaVersion::LegacyWeekly)
    } else if object.get(MEAL_PLAN_FIELD).is_some_and(Value::is_object) {
        Ok(SchemaVersion::Current)
    } else {
        Err(GachaError::malformed_backup(format!(
            "missing '{MEAL_PLAN_FIELD}' or '{LEGACY_PLAN_FIELD}'"
        )))
    }
}
