//! Gourmet Gacha CLI
//!
//! Command-line interface for the recipe oracle and weekly meal planner.

mod args;
mod cli;
mod handlers;
mod renderer;
mod shell;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use gacha_core::CookbookBuilder;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        no_samples,
        command,
    } = Args::parse();

    let cookbook = CookbookBuilder::new()
        .with_database_path(database_file)
        .with_sample_recipes(!no_samples)
        .build()
        .await
        .context("Failed to initialize cookbook")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Gourmet Gacha started");

    match command {
        Some(Recipe { command }) => {
            Cli::new(cookbook, renderer)
                .handle_recipe_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(cookbook, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Oracle(args)) => Cli::new(cookbook, renderer).handle_oracle(args).await,
        Some(Backup { command }) => {
            Cli::new(cookbook, renderer)
                .handle_backup_command(command)
                .await
        }
        Some(Shell(args)) => {
            info!("Starting interactive shell");
            let db = cookbook
                .open_database()
                .await
                .context("Failed to open database")?;
            shell::Shell::new(db, &args.fragment, renderer, args.reveal_speed)
                .run()
                .await
        }
        None => Cli::new(cookbook, renderer).list_recipes(None).await,
    }
}
