//! Pure migrations from any supported backup schema to the current one.

use std::collections::{BTreeMap, HashSet};

use jiff::{civil::Date, ToSpan};
use log::{info, warn};
use serde_json::{Map, Value};

use super::{BackupDocument, SchemaVersion, LEGACY_PLAN_FIELD, MEAL_PLAN_FIELD};
use crate::{
    error::{GachaError, Result},
    models::{Recipe, Settings, Week, DEFAULT_RATING},
};

/// Weekday keys of the legacy plan, Monday first.
const LEGACY_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Image references containing any of these are known to be dead links.
const BROKEN_IMAGE_MARKERS: [&str; 2] = ["unsplash.com", "404"];

/// Placeholder service used for repaired images; the recipe title is
/// appended URL-encoded.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/400x300?text=";

/// What a migration changed on the way to the current schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Legacy weekday entries converted to dates
    pub converted_weekdays: usize,
    /// Recipes whose dead image link was replaced with a placeholder
    pub repaired_images: usize,
    /// Plan entries dropped because their recipe is not in the document
    pub dropped_entries: usize,
    /// Plan keys that are not valid `YYYY-MM-DD` dates
    pub invalid_dates: usize,
}

/// Builds a current-schema document from a parsed backup of `version`.
///
/// The input is never modified. Legacy weekday entries land on the week
/// containing `today` and win over date entries for the same day.
///
/// # Errors
///
/// Returns [`GachaError::MalformedBackup`] when recipes cannot be read or two
/// recipes share an id.
pub fn migrate(
    value: &Value,
    version: SchemaVersion,
    today: Date,
) -> Result<(BackupDocument, MigrationReport)> {
    let mut report = MigrationReport::default();

    let mut recipes: Vec<Recipe> = serde_json::from_value(value["recipes"].clone())
        .map_err(|e| GachaError::malformed_backup(format!("unreadable recipe: {e}")))?;
    check_unique_ids(&recipes)?;
    for recipe in &mut recipes {
        normalize_recipe(recipe);
        if repair_image(recipe) {
            report.repaired_images += 1;
        }
    }

    let mut meal_plan = BTreeMap::new();
    if let Some(plan) = value.get(MEAL_PLAN_FIELD).and_then(Value::as_object) {
        for (key, recipe_id) in plan {
            match (key.parse::<Date>(), recipe_id.as_str()) {
                (Ok(date), Some(id)) => {
                    meal_plan.insert(date, id.to_string());
                }
                _ => {
                    warn!("Skipping unreadable plan entry '{key}'");
                    report.invalid_dates += 1;
                }
            }
        }
    }

    if version == SchemaVersion::LegacyWeekly {
        if let Some(weekly) = value.get(LEGACY_PLAN_FIELD).and_then(Value::as_object) {
            report.converted_weekdays = merge_weekly_plan(weekly, today, &mut meal_plan);
        }
    }

    let known: HashSet<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
    let before = meal_plan.len();
    meal_plan.retain(|date, id| {
        let keep = known.contains(id.as_str());
        if !keep {
            warn!("Dropping plan entry for {date}: unknown recipe {id}");
        }
        keep
    });
    report.dropped_entries = before - meal_plan.len();

    let settings = value
        .get("settings")
        .cloned()
        .and_then(|s| serde_json::from_value::<Settings>(s).ok())
        .unwrap_or_default();

    if report.repaired_images > 0 {
        info!("Repaired {} broken image links", report.repaired_images);
    }

    Ok((
        BackupDocument {
            recipes,
            meal_plan,
            settings,
        },
        report,
    ))
}

/// Maps weekday-keyed entries onto the week containing `today`. Returns the
/// number of entries converted.
fn merge_weekly_plan(
    weekly: &Map<String, Value>,
    today: Date,
    meal_plan: &mut BTreeMap<Date, String>,
) -> usize {
    let monday = Week::start_of(today);
    let mut converted = 0;
    for (offset, day) in LEGACY_WEEKDAYS.iter().enumerate() {
        let Some(id) = weekly.get(*day).and_then(Value::as_str) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        let date = monday.saturating_add((offset as i64).days());
        meal_plan.insert(date, id.to_string());
        converted += 1;
    }
    converted
}

fn check_unique_ids(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            return Err(GachaError::malformed_backup(format!(
                "duplicate recipe id '{}'",
                recipe.id
            )));
        }
    }
    Ok(())
}

fn normalize_recipe(recipe: &mut Recipe) {
    if recipe.rating == 0 {
        recipe.rating = DEFAULT_RATING;
    }
    if recipe.link.as_deref().is_some_and(|l| l.trim().is_empty()) {
        recipe.link = None;
    }
}

/// Replaces a known-dead image reference with a titled placeholder.
/// Returns whether the image changed.
pub fn repair_image(recipe: &mut Recipe) -> bool {
    let broken = BROKEN_IMAGE_MARKERS
        .iter()
        .any(|marker| recipe.image.contains(marker));
    if broken {
        recipe.image = format!(
            "{PLACEHOLDER_IMAGE_BASE}{}",
            urlencoding::encode(&recipe.title)
        );
    }
    broken
}
