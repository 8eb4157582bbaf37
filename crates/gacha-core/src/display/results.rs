//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{backup::MigrationReport, db::recipe_queries::DeletedRecipe, models::Recipe};

use super::dates::ShortDate;

/// Outcome of adding a recipe.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added recipe '{}' (ID: {})",
            self.resource.title, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of editing a recipe, with the list of changed fields.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated recipe with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of deleting a recipe, listing the plan days it was removed from.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<DeletedRecipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = &self.resource.recipe;
        writeln!(f, "Deleted recipe '{}' (ID: {})", recipe.title, recipe.id)?;

        let dates = &self.resource.cleared_dates;
        if !dates.is_empty() {
            let labels: Vec<String> = dates.iter().map(|d| ShortDate(d).to_string()).collect();
            writeln!(f)?;
            writeln!(f, "Removed from the plan on: {}", labels.join(", "))?;
        }
        Ok(())
    }
}

/// Outcome of importing a backup.
pub struct ImportResult {
    pub recipes: usize,
    pub plan_entries: usize,
    pub report: MigrationReport,
}

impl fmt::Display for ImportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} recipes and {} plan entries",
            self.recipes, self.plan_entries
        )?;

        let report = &self.report;
        if report.converted_weekdays > 0 {
            writeln!(
                f,
                "- Moved {} legacy weekday entries onto the current week",
                report.converted_weekdays
            )?;
        }
        if report.repaired_images > 0 {
            writeln!(f, "- Replaced {} broken images", report.repaired_images)?;
        }
        if report.dropped_entries > 0 {
            writeln!(
                f,
                "- Dropped {} plan entries for unknown recipes",
                report.dropped_entries
            )?;
        }
        if report.invalid_dates > 0 {
            writeln!(f, "- Skipped {} invalid plan dates", report.invalid_dates)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_update_result_lists_changes() {
        let recipe = Recipe::new("uuid-1", "Chili");
        let output =
            UpdateResult::with_changes(recipe, vec!["Set rating to 4".to_string()]).to_string();
        assert!(output.contains("Changes made:\n- Set rating to 4"));
    }

    #[test]
    fn test_delete_result_lists_cleared_days() {
        let deleted = DeletedRecipe {
            recipe: Recipe::new("uuid-1", "Chili"),
            cleared_dates: vec![date(2024, 5, 6), date(2024, 5, 9)],
        };
        let output = DeleteResult::new(deleted).to_string();
        assert!(output.contains("Deleted recipe 'Chili' (ID: uuid-1)"));
        assert!(output.contains("Removed from the plan on: 06.05., 09.05."));
    }

    #[test]
    fn test_import_result_summarizes_report() {
        let result = ImportResult {
            recipes: 3,
            plan_entries: 2,
            report: MigrationReport {
                converted_weekdays: 2,
                repaired_images: 1,
                ..Default::default()
            },
        };
        let output = result.to_string();
        assert!(output.starts_with("Imported 3 recipes and 2 plan entries"));
        assert!(output.contains("2 legacy weekday entries"));
        assert!(output.contains("Replaced 1 broken images"));
        assert!(!output.contains("Dropped"));
    }
}
