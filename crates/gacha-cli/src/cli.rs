//! Command-line argument types.
//!
//! Each clap structure here converts into a core parameter type, keeping
//! clap derives out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Cookbook
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand};
use gacha_core::{
    models::{OracleFilter, DEFAULT_RATING},
    params::{Id, PlanDay, RecipeForm, RecipeUpdate},
};
use jiff::{civil::Date, ToSpan};

/// Parses `today`, `tomorrow`, `yesterday` or an ISO date (`2024-05-06`).
pub fn parse_date(value: &str) -> Result<Date, String> {
    let today = gacha_core::models::today();
    match value.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today.saturating_add(1.day())),
        "yesterday" => Ok(today.saturating_sub(1.day())),
        other => other
            .parse::<Date>()
            .map_err(|e| format!("invalid date '{value}': {e}")),
    }
}

/// Parses a reveal speed factor: a finite number of at least zero.
pub fn parse_reveal_speed(value: &str) -> Result<f64, String> {
    let factor: f64 = value
        .parse()
        .map_err(|e| format!("invalid speed '{value}': {e}"))?;
    if factor.is_finite() && factor >= 0.0 {
        Ok(factor)
    } else {
        Err(format!("speed must be a finite number of at least 0, got '{value}'"))
    }
}

/// Add a new recipe
#[derive(Args)]
pub struct AddRecipeArgs {
    /// Title of the recipe
    pub title: String,
    /// Preparation time in minutes
    #[arg(short, long, default_value_t = 0)]
    pub minutes: u32,
    /// Comma-separated tags, e.g. "Veggie,Schnell"
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
    /// Rating from 1 to 5
    #[arg(short, long, default_value_t = DEFAULT_RATING)]
    pub rating: u8,
    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,
    /// Link to the full recipe
    #[arg(long)]
    pub link: Option<String>,
}

impl From<AddRecipeArgs> for RecipeForm {
    fn from(val: AddRecipeArgs) -> Self {
        RecipeForm {
            title: val.title,
            image: val.image,
            link: val.link,
            time_minutes: val.minutes,
            tags: val.tags,
            rating: val.rating,
        }
    }
}

/// Edit an existing recipe. Omitted options keep their value.
#[derive(Args)]
pub struct EditRecipeArgs {
    /// ID of the recipe to edit
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New preparation time in minutes
    #[arg(short, long)]
    pub minutes: Option<u32>,
    /// New comma-separated tags (replaces all tags)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,
    /// New rating from 1 to 5
    #[arg(short, long)]
    pub rating: Option<u8>,
    /// New image URL
    #[arg(long)]
    pub image: Option<String>,
    /// New link to the full recipe
    #[arg(long)]
    pub link: Option<String>,
}

impl From<EditRecipeArgs> for RecipeUpdate {
    fn from(val: EditRecipeArgs) -> Self {
        RecipeUpdate {
            id: val.id,
            title: val.title,
            image: val.image,
            link: val.link,
            time_minutes: val.minutes,
            tags: val.tags,
            rating: val.rating,
        }
    }
}

/// Identify a recipe by id
#[derive(Args)]
pub struct RecipeIdArgs {
    /// ID of the recipe
    pub id: String,
}

impl From<RecipeIdArgs> for Id {
    fn from(val: RecipeIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// List recipes
#[derive(Args)]
pub struct ListRecipesArgs {
    /// Only show recipes whose title contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a new recipe
    #[command(aliases = ["a", "new"])]
    Add(AddRecipeArgs),
    /// Edit a recipe
    #[command(alias = "e")]
    Edit(EditRecipeArgs),
    /// Delete a recipe and remove it from the plan
    #[command(aliases = ["d", "rm"])]
    Delete(RecipeIdArgs),
    /// List recipes
    #[command(aliases = ["l", "ls"])]
    List(ListRecipesArgs),
    /// Show a recipe
    #[command(alias = "s")]
    Show(RecipeIdArgs),
}

/// Select a week relative to the current one
#[derive(Args)]
pub struct WeekArgs {
    /// Weeks from now (-1 = last week, 1 = next week)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,
}

/// Plan a recipe on a day
#[derive(Args)]
pub struct SetPlanArgs {
    /// Day to plan (YYYY-MM-DD, today or tomorrow)
    #[arg(value_parser = parse_date)]
    pub date: Date,
    /// ID of the recipe
    pub recipe_id: String,
}

impl From<SetPlanArgs> for PlanDay {
    fn from(val: SetPlanArgs) -> Self {
        PlanDay {
            date: val.date,
            recipe_id: val.recipe_id,
        }
    }
}

/// Clear a day
#[derive(Args)]
pub struct ClearPlanArgs {
    /// Day to clear (YYYY-MM-DD, today or tomorrow)
    #[arg(value_parser = parse_date)]
    pub date: Date,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show a week of the plan
    #[command(alias = "w")]
    Week(WeekArgs),
    /// Plan a recipe on a day
    #[command(alias = "s")]
    Set(SetPlanArgs),
    /// Clear a day
    #[command(alias = "c")]
    Clear(ClearPlanArgs),
    /// Clear every day of a week
    ClearWeek(WeekArgs),
}

/// Let the oracle pick a recipe
#[derive(Args)]
pub struct OracleArgs {
    /// Only recipes that take 30 minutes or less
    #[arg(short, long)]
    pub quick: bool,
    /// Only vegetarian recipes
    #[arg(short = 'v', long)]
    pub veggie: bool,
    /// Plan the winner on this day right away
    #[arg(long, value_parser = parse_date)]
    pub plan: Option<Date>,
}

impl From<&OracleArgs> for OracleFilter {
    fn from(val: &OracleArgs) -> Self {
        OracleFilter {
            quick: val.quick,
            vegetarian: val.veggie,
        }
    }
}

/// Write a backup file
#[derive(Args)]
pub struct ExportArgs {
    /// File to write; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Replace all data with a backup file
#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to read
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Export all recipes, the meal plan and settings as JSON
    #[command(alias = "e")]
    Export(ExportArgs),
    /// Import a backup, replacing all current data
    #[command(alias = "i")]
    Import(ImportArgs),
}

/// Interactive shell options
#[derive(Args)]
pub struct ShellArgs {
    /// Address fragment to start on, e.g. #view-oracle
    #[arg(long, default_value = "")]
    pub fragment: String,
    /// Multiplier for the reveal animation delays (0 disables them)
    #[arg(long, default_value_t = 1.0, value_parser = parse_reveal_speed)]
    pub reveal_speed: f64,
}
