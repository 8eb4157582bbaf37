//! Handlers for one-shot commands.

use anyhow::{bail, Context, Result};
use gacha_core::{
    params::{Id, PlanDay, RecipeForm, RecipeUpdate},
    Cookbook, OperationStatus,
};
use log::info;

use crate::{
    cli::{BackupCommands, OracleArgs, PlanCommands, RecipeCommands},
    renderer::TerminalRenderer,
};

/// Runs one command against a cookbook and renders the outcome.
pub struct Cli {
    cookbook: Cookbook,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(cookbook: Cookbook, renderer: TerminalRenderer) -> Self {
        Self { cookbook, renderer }
    }

    /// Lists the cookbook, optionally narrowed by a title search.
    pub async fn list_recipes(&self, search: Option<&str>) -> Result<()> {
        let recipes = self
            .cookbook
            .list_recipes_display(search)
            .await
            .context("Failed to list recipes")?;
        self.renderer.render(&recipes.to_string())
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::Add(args) => {
                let form: RecipeForm = args.into();
                let result = self
                    .cookbook
                    .create_recipe_result(&form)
                    .await
                    .context("Failed to add recipe")?;
                self.renderer.render(&result.to_string())
            }
            RecipeCommands::Edit(args) => {
                let update: RecipeUpdate = args.into();
                let result = self
                    .cookbook
                    .update_recipe_result(&update)
                    .await
                    .with_context(|| format!("Failed to edit recipe {}", update.id))?;
                self.renderer.render(&result.to_string())
            }
            RecipeCommands::Delete(args) => {
                let id: Id = args.into();
                let result = self
                    .cookbook
                    .delete_recipe_result(&id)
                    .await
                    .with_context(|| format!("Failed to delete recipe {}", id.id))?;
                self.renderer.render(&result.to_string())
            }
            RecipeCommands::List(args) => self.list_recipes(args.search.as_deref()).await,
            RecipeCommands::Show(args) => {
                let id: Id = args.into();
                match self
                    .cookbook
                    .get_recipe(&id)
                    .await
                    .context("Failed to load recipe")?
                {
                    Some(recipe) => self.renderer.render(&recipe.to_string()),
                    None => bail!("Recipe with ID {} not found", id.id),
                }
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Week(args) => {
                let week = self
                    .cookbook
                    .show_week(args.offset)
                    .await
                    .context("Failed to load week")?;
                self.renderer.render(&week.to_string())
            }
            PlanCommands::Set(args) => {
                let params: PlanDay = args.into();
                let status = self
                    .cookbook
                    .plan_day_status(&params)
                    .await
                    .context("Failed to plan day")?;
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Clear(args) => {
                let status = self
                    .cookbook
                    .clear_day_status(args.date)
                    .await
                    .context("Failed to clear day")?;
                self.renderer.render(&status.to_string())
            }
            PlanCommands::ClearWeek(args) => {
                let status = self
                    .cookbook
                    .clear_week_status(args.offset)
                    .await
                    .context("Failed to clear week")?;
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn handle_oracle(&self, args: OracleArgs) -> Result<()> {
        let draw = self
            .cookbook
            .draw_and_plan((&args).into(), args.plan)
            .await
            .context("The oracle could not pick a recipe")?;
        self.renderer.render(&draw.to_string())?;

        if let Some(date) = args.plan {
            let status = OperationStatus::success(format!(
                "Planned '{}' for {}",
                draw.recipe.title,
                gacha_core::display::ShortDate(&date)
            ));
            self.renderer.render(&format!("\n{status}"))?;
        }
        Ok(())
    }

    pub async fn handle_backup_command(&self, command: BackupCommands) -> Result<()> {
        match command {
            BackupCommands::Export(args) => {
                let json = self
                    .cookbook
                    .export_backup()
                    .await
                    .context("Failed to export backup")?;
                match args.output {
                    Some(path) => {
                        std::fs::write(&path, json)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        info!("Backup written to {}", path.display());
                        let status =
                            OperationStatus::success(format!("Exported to {}", path.display()));
                        self.renderer.render(&status.to_string())
                    }
                    // Raw JSON so the output can be redirected to a file
                    None => {
                        println!("{json}");
                        Ok(())
                    }
                }
            }
            BackupCommands::Import(args) => {
                let json = std::fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let result = self
                    .cookbook
                    .import_backup(&json)
                    .await
                    .context("Failed to import backup")?;
                self.renderer.render(&result.to_string())
            }
        }
    }
}
