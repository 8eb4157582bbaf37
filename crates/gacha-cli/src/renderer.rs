//! Terminal rendering for markdown output.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown
//! unchanged.

use std::io::Write;

use anyhow::{Context, Result};
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Yellow);
        skin.bold.set_fg(Color::Cyan);
        skin.italic.set_fg(Color::DarkGrey);
        skin.strikeout.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[33m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render an error or notice on stderr.
    pub fn render_error(&self, message: &str) {
        eprintln!("{}", self.error_text(message));
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&self, text: &str) -> Result<()> {
        print!("{} ", self.prompt_text(text));
        std::io::stdout().flush().context("Failed to flush stdout")
    }

    fn error_text(&self, message: &str) -> String {
        if self.rich_enabled {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }

    fn prompt_text(&self, text: &str) -> String {
        if self.rich_enabled {
            text.magenta().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
