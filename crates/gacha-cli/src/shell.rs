//! Interactive shell driving the application controller.
//!
//! Each input line is split with shell quoting rules and parsed with clap.
//! After every command the shell redraws whatever the controller marked as
//! changed, limited to the view that is currently visible.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, Args, Parser, Subcommand};
use gacha_core::{
    app::{Acceptance, DayChoice},
    display::{Recipes, ShortDate},
    models::OracleFilter,
    navigator::HistoryMove,
    oracle::{reveal::scaled, Draw, RevealStage, FLASH_FADE},
    App, Database, GachaError, MemoryHistory, Modal, NavigationHistory, OperationStatus,
    RecipeForm, Surface, View,
};
use jiff::civil::Date;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{cli::parse_date, renderer::TerminalRenderer};

type ShellApp = App<Database, MemoryHistory, Vec<Surface>>;

const NEW_RECIPE_HELP: &str =
    "`save <title> [--minutes N] [--tags a,b] [--rating 1-5] [--image URL] [--link URL]`";

const BACKUP_HELP: &str = "`export [file]` writes a backup, `import <file>` replaces all data";

const DAY_PICKER_HELP: &str =
    "`choose <date>` plans it, `next`/`prev` change the week, `close` keeps the result";

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true, name = "gacha")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Switch view: cookbook, oracle or week
    #[command(aliases = ["go", "view"])]
    Tab { view: String },
    /// Go back (leaves the shell at the first entry)
    Back,
    /// Go forward
    Forward,
    /// Close the open dialog
    Close,
    /// Click outside a dialog
    Dismiss { modal: String },
    /// Show the cookbook
    #[command(alias = "ls")]
    List,
    /// Open the form for a new recipe
    New,
    /// Open the form for an existing recipe
    Edit { id: String },
    /// Save the recipe form
    Save(SaveArgs),
    /// Delete the recipe in the form, or the recipe with this id
    #[command(alias = "rm")]
    Delete { id: Option<String> },
    /// Let the oracle draw a recipe
    Spin {
        /// Only recipes that take 30 minutes or less
        #[arg(short, long)]
        quick: bool,
        /// Only vegetarian recipes
        #[arg(short = 'v', long)]
        veggie: bool,
    },
    /// Take the drawn recipe
    Accept,
    /// Plan the drawn recipe on a day
    Choose {
        #[arg(value_parser = parse_date)]
        date: Date,
        /// Overwrite a day that already has a recipe
        #[arg(long)]
        replace: bool,
    },
    /// Show the week plan
    Week,
    /// Show the next week
    Next,
    /// Show the previous week
    #[command(alias = "previous")]
    Prev,
    /// Fill a day from the cookbook
    Fill {
        #[arg(value_parser = parse_date)]
        date: Date,
    },
    /// Search recipes by title
    Search { term: Option<String> },
    /// Plan a recipe on the day being filled
    Pick { id: String },
    /// Let the oracle fill the day being filled
    AskOracle,
    /// Clear a day
    Clear {
        #[arg(value_parser = parse_date)]
        date: Date,
    },
    /// Clear the displayed week
    ClearWeek,
    /// Open the backup dialog
    Backup,
    /// Export a backup, to a file or the screen
    Export { path: Option<PathBuf> },
    /// Import a backup file, replacing all data
    Import { path: PathBuf },
    /// Show where you are
    Status,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Recipe form fields. Omitted fields keep the form's current value.
#[derive(Args)]
struct SaveArgs {
    /// Title of the recipe
    title: Option<String>,
    /// Preparation time in minutes
    #[arg(short, long)]
    minutes: Option<u32>,
    /// Comma-separated tags
    #[arg(short, long, value_delimiter = ',')]
    tags: Option<Vec<String>>,
    /// Rating from 1 to 5
    #[arg(short, long)]
    rating: Option<u8>,
    /// Image URL
    #[arg(long)]
    image: Option<String>,
    /// Link to the full recipe
    #[arg(long)]
    link: Option<String>,
}

impl SaveArgs {
    fn apply_to(self, mut form: RecipeForm) -> RecipeForm {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(minutes) = self.minutes {
            form.time_minutes = minutes;
        }
        if let Some(tags) = self.tags {
            form.tags = tags;
        }
        if let Some(rating) = self.rating {
            form.rating = rating;
        }
        if let Some(image) = self.image {
            form.image = image;
        }
        if self.link.is_some() {
            form.link = self.link;
        }
        form
    }
}

enum Flow {
    Continue,
    Quit,
}

/// The interactive shell.
pub struct Shell {
    app: ShellApp,
    renderer: TerminalRenderer,
    draft: RecipeForm,
    reveal_speed: f64,
    rng: StdRng,
}

impl Shell {
    pub fn new(
        db: Database,
        fragment: &str,
        renderer: TerminalRenderer,
        reveal_speed: f64,
    ) -> Self {
        let app = App::start(db, MemoryHistory::new(fragment), Vec::new());
        Self {
            app,
            renderer,
            draft: RecipeForm::default(),
            reveal_speed,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reads commands until `quit`, end of input, or going back past the
    /// first history entry.
    pub async fn run(mut self) -> Result<()> {
        if let Err(e) = self.render_pending() {
            self.report(&e)?;
        }
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            self.renderer.prompt(&format!("{}>", self.app.navigator().current()))?;
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                println!();
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.execute(line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => self.report(&e)?,
            }
            if let Err(e) = self.render_pending() {
                self.report(&e)?;
            }
        }
        Ok(())
    }

    /// Shows a failed command. Mistakes the user can fix become a failed
    /// status line, everything else goes to stderr.
    fn report(&self, error: &anyhow::Error) -> Result<()> {
        match error.downcast_ref::<GachaError>() {
            Some(e) if e.is_user_facing() => {
                let status = OperationStatus::failure(e.to_string());
                self.renderer.render(&status.to_string())
            }
            _ => {
                self.renderer.render_error(&format!("{error:#}"));
                Ok(())
            }
        }
    }

    async fn execute(&mut self, line: &str) -> Result<Flow> {
        let Some(words) = shlex::split(line) else {
            bail!("Unbalanced quotes in input");
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => print!("{e}"),
                    _ => self.renderer.render_error(e.to_string().trim_end()),
                }
                return Ok(Flow::Continue);
            }
        };
        self.dispatch(command).await
    }

    #[allow(clippy::too_many_lines)]
    async fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Tab { view } => {
                self.app.navigate_to(&view)?;
            }
            ShellCommand::Back => {
                if self.app.back() == HistoryMove::Edge {
                    self.renderer.render("Bye!\n")?;
                    return Ok(Flow::Quit);
                }
            }
            ShellCommand::Forward => {
                self.app.forward();
            }
            ShellCommand::Close => self.app.close_modal(),
            ShellCommand::Dismiss { modal } => {
                let modal: Modal = modal.parse()?;
                self.app.dismiss(modal);
            }
            ShellCommand::List => {
                let recipes = Recipes(self.app.recipes()?);
                self.renderer.render(&recipes.to_string())?;
            }
            ShellCommand::New => {
                self.draft = RecipeForm::default();
                self.app.open_new_recipe();
                self.renderer.render(&format!("## New recipe\n\n{NEW_RECIPE_HELP}\n"))?;
            }
            ShellCommand::Edit { id } => {
                self.draft = self.app.open_edit_recipe(&id)?;
                self.render_draft()?;
            }
            ShellCommand::Save(args) => {
                if self.app.modal() != Some(Modal::AddEditRecipe) {
                    bail!("Open the recipe form with `new` or `edit <id>` first");
                }
                let form = args.apply_to(self.draft.clone());
                let recipe = self.app.save_recipe(form)?;
                self.draft = RecipeForm::default();
                let status =
                    OperationStatus::success(format!("Saved '{}' ({})", recipe.title, recipe.id));
                self.renderer.render(&status.to_string())?;
            }
            ShellCommand::Delete { id } => {
                let deleted = match id {
                    Some(id) => self.app.delete_recipe(&id)?,
                    None => self.app.delete_editing_recipe()?,
                };
                let status =
                    OperationStatus::success(format!("Deleted '{}'", deleted.recipe.title));
                self.renderer.render(&status.to_string())?;
            }
            ShellCommand::Spin { quick, veggie } => {
                let filter = OracleFilter {
                    quick,
                    vegetarian: veggie,
                };
                if self.app.view() != View::Oracle {
                    self.app.switch_view(View::Oracle);
                }
                let draw = self.app.spin(&filter, &mut self.rng)?;
                self.reveal(&draw).await?;
                self.app.renderer_mut().retain(|s| *s != Surface::Oracle);
            }
            ShellCommand::Accept => match self.app.accept()? {
                Acceptance::Planned { date, recipe } => {
                    let status = OperationStatus::success(format!(
                        "Planned '{}' for {}",
                        recipe.title,
                        ShortDate(&date)
                    ));
                    self.renderer.render(&status.to_string())?;
                }
                Acceptance::ChooseDay => self.render_day_picker()?,
            },
            ShellCommand::Choose { date, replace } => match self.app.choose_day(date, replace)? {
                DayChoice::Planned { date, recipe } => {
                    let status = OperationStatus::success(format!(
                        "Planned '{}' for {}",
                        recipe.title,
                        ShortDate(&date)
                    ));
                    self.renderer.render(&status.to_string())?;
                }
                DayChoice::Occupied { date, current } => {
                    let status = OperationStatus::failure(format!(
                        "{} already has '{}'. Use `choose {date} --replace` to overwrite it",
                        ShortDate(&date),
                        current.title
                    ));
                    self.renderer.render(&status.to_string())?;
                }
            },
            ShellCommand::Week => {
                if self.app.view() == View::WeekPlan {
                    self.render_surface(Surface::WeekPlan)?;
                } else {
                    self.app.switch_view(View::WeekPlan);
                }
            }
            ShellCommand::Next => self.app.change_week(1)?,
            ShellCommand::Prev => self.app.change_week(-1)?,
            ShellCommand::Fill { date } => {
                self.app.fill_day(date);
                let candidates = Recipes(self.app.slot_candidates("")?);
                self.renderer.render(&format!(
                    "## Fill {}\n\n{candidates}\n`search <text>`, `pick <id>` or `ask-oracle`\n",
                    ShortDate(&date)
                ))?;
            }
            ShellCommand::Search { term } => {
                let found = Recipes(self.app.slot_candidates(term.as_deref().unwrap_or(""))?);
                self.renderer.render(&found.to_string())?;
            }
            ShellCommand::Pick { id } => {
                let date = self.app.pick_for_slot(&id)?;
                debug!("Filled {date} with {id}");
            }
            ShellCommand::AskOracle => {
                let date = self.app.ask_oracle_for_slot()?;
                debug!("Asking the oracle for {date}");
            }
            ShellCommand::Clear { date } => {
                let status = if self.app.clear_day(date)? {
                    OperationStatus::success(format!("Cleared {}", ShortDate(&date)))
                } else {
                    OperationStatus::failure(format!("Nothing planned for {}", ShortDate(&date)))
                };
                self.renderer.render(&status.to_string())?;
            }
            ShellCommand::ClearWeek => {
                let removed = self.app.clear_week()?;
                let status = OperationStatus::success(format!("Cleared {removed} planned days"));
                self.renderer.render(&status.to_string())?;
            }
            ShellCommand::Backup => {
                self.app.open_backup();
                self.renderer.render(&format!("## Backup\n\n{BACKUP_HELP}\n"))?;
            }
            ShellCommand::Export { path } => {
                let json = self.app.export_backup()?;
                match path {
                    Some(path) => {
                        std::fs::write(&path, json)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        let status =
                            OperationStatus::success(format!("Exported to {}", path.display()));
                        self.renderer.render(&status.to_string())?;
                    }
                    None => println!("{json}"),
                }
            }
            ShellCommand::Import { path } => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let result = self.app.import_backup(&json)?;
                self.renderer.render(&result.to_string())?;
            }
            ShellCommand::Status => self.render_status()?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Plays the reveal stages for a draw that is already stored.
    async fn reveal(&self, draw: &Draw) -> Result<()> {
        for (stage, delay) in RevealStage::scaled_sequence(self.reveal_speed) {
            tokio::time::sleep(delay).await;
            match stage {
                RevealStage::Charging => self.renderer.render("*The oracle is charging...*\n")?,
                RevealStage::Flash => {
                    let rays = if draw.rarity.has_rays() { " ✦ ✦ ✦" } else { "" };
                    self.renderer
                        .render(&format!("**{}!**{rays}\n\n", draw.rarity.with_icon()))?;
                }
                RevealStage::Revealed => self.renderer.render(&draw.to_string())?,
            }
        }
        tokio::time::sleep(scaled(FLASH_FADE, self.reveal_speed)).await;
        self.renderer
            .render(&format!("\n`accept`: {}\n", self.app.oracle().accept_label()))
    }

    fn render_draft(&self) -> Result<()> {
        let draft = &self.draft;
        let mut text = String::from("## Edit recipe\n\n");
        text.push_str(&format!("- Title: {}\n", draft.title));
        text.push_str(&format!("- Minutes: {}\n", draft.time_minutes));
        text.push_str(&format!("- Tags: {}\n", draft.tags.join(", ")));
        text.push_str(&format!("- Rating: {}\n", draft.rating));
        if let Some(link) = &draft.link {
            text.push_str(&format!("- Link: {link}\n"));
        }
        text.push_str("\n`save [title] [--minutes N] ...` stores changes, ");
        text.push_str("`delete` removes the recipe\n");
        self.renderer.render(&text)
    }

    fn render_status(&self) -> Result<()> {
        let nav = self.app.navigator();
        let oracle = self.app.oracle();
        let mut text = format!("## {}\n\n", nav.current());
        text.push_str(&format!("- Address: {}\n", nav.history().fragment()));
        text.push_str(&format!(
            "- History: entry {} of {}\n",
            nav.history().index() + 1,
            nav.history().len()
        ));
        text.push_str(&format!("- Week offset: {}\n", self.app.week_offset()));
        if let Some(date) = oracle.target_date {
            text.push_str(&format!("- Oracle is filling: {}\n", ShortDate(&date)));
        }
        if let Some(draw) = &oracle.result {
            text.push_str(&format!("- Oracle result: {}\n", draw.recipe.title));
        }
        self.renderer.render(&text)
    }

    fn render_day_picker(&self) -> Result<()> {
        let week = self.app.day_selection_week()?;
        self.renderer.render(&format!("## Pick a day\n\n{week}\n{DAY_PICKER_HELP}\n"))
    }

    /// Draws the surfaces the controller marked since the last call, as far
    /// as they are visible.
    fn render_pending(&mut self) -> Result<()> {
        let pending = std::mem::take(self.app.renderer_mut());
        if self.app.modal() == Some(Modal::DaySelection) {
            if pending.contains(&Surface::WeekPlan) {
                self.render_day_picker()?;
            }
        } else if self.app.modal().is_none() {
            let visible = match self.app.view() {
                View::Cookbook => Surface::Cookbook,
                View::WeekPlan => Surface::WeekPlan,
                View::Oracle => Surface::Oracle,
            };
            if pending.contains(&visible) {
                self.render_surface(visible)?;
            }
        }
        if pending.contains(&Surface::Navigation) {
            debug!("Navigation now at {}", self.app.navigator().history().fragment());
        }
        Ok(())
    }

    fn render_surface(&self, surface: Surface) -> Result<()> {
        match surface {
            Surface::Cookbook => {
                let recipes = Recipes(self.app.recipes()?);
                self.renderer.render(&format!("# Cookbook\n\n{recipes}"))
            }
            Surface::WeekPlan => {
                let week = self.app.week()?;
                self.renderer.render(&week.to_string())
            }
            Surface::Oracle => {
                let oracle = self.app.oracle();
                let mut text = String::from("# Oracle\n\n");
                if let Some(date) = oracle.target_date {
                    text.push_str(&format!("Filling {}\n\n", ShortDate(&date)));
                }
                match &oracle.result {
                    Some(draw) => {
                        text.push_str(&draw.to_string());
                        text.push_str(&format!("\n`accept`: {}\n", oracle.accept_label()));
                    }
                    None => text.push_str("`spin [--quick] [--veggie]` draws a recipe\n"),
                }
                self.renderer.render(&text)
            }
            Surface::Navigation => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        let words = shlex::split(line).unwrap();
        ShellLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn test_parse_quoted_save() {
        let ShellCommand::Save(args) = parse("save 'Chili con Carne' -m 45 --tags Fleisch,Scharf")
        else {
            panic!("expected save");
        };
        let form = args.apply_to(RecipeForm::default());
        assert_eq!(form.title, "Chili con Carne");
        assert_eq!(form.time_minutes, 45);
        assert_eq!(form.tags, vec!["Fleisch", "Scharf"]);
        assert_eq!(form.rating, 3);
    }

    #[test]
    fn test_save_keeps_draft_fields() {
        let ShellCommand::Save(args) = parse("save --rating 5") else {
            panic!("expected save");
        };
        let draft = RecipeForm {
            title: "Soup".to_string(),
            time_minutes: 20,
            ..Default::default()
        };
        let form = args.apply_to(draft);
        assert_eq!(form.title, "Soup");
        assert_eq!(form.time_minutes, 20);
        assert_eq!(form.rating, 5);
    }

    #[test]
    fn test_parse_choose_with_replace() {
        let ShellCommand::Choose { date, replace } = parse("choose 2024-05-06 --replace") else {
            panic!("expected choose");
        };
        assert_eq!(date, jiff::civil::date(2024, 5, 6));
        assert!(replace);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(ShellLine::try_parse_from(["dance"]).is_err());
    }
}
