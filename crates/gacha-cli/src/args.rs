use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BackupCommands, OracleArgs, PlanCommands, RecipeCommands, ShellArgs};

/// Gourmet Gacha: a recipe box with a weighted oracle and a weekly meal plan
///
/// Keep recipes with a rating, let the oracle pick dinner (better-rated
/// recipes win more often) and plan the week. Without a subcommand the
/// cookbook is listed.
#[derive(Parser)]
#[command(version, about, name = "gacha")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/gourmet-gacha/gacha.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not add the sample recipes to a new cookbook
    #[arg(long, global = true)]
    pub no_samples: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the gacha CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Show and edit the weekly meal plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Ask the oracle for a recipe
    #[command(aliases = ["o", "spin"])]
    Oracle(OracleArgs),
    /// Export or import a backup file
    #[command(alias = "b")]
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
    /// Start the interactive shell
    #[command(alias = "sh")]
    Shell(ShellArgs),
}
