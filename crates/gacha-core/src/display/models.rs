//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; every implementation emits
//! markdown.

use std::fmt;

use super::dates::{DayLabel, DayMonth};
use crate::{
    models::{Rarity, Recipe, Week, WeekDay, MAX_RATING},
    oracle::Draw,
};

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filled and empty stars for a rating.
fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.rarity().with_icon())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Time: {} min", self.time_minutes)?;
        writeln!(f, "- Rating: {}", stars(self.effective_rating()))?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tag_line())?;
        }
        if let Some(link) = &self.link {
            writeln!(f, "- Link: {link}")?;
        }
        if let Some(date) = &self.last_cooked {
            writeln!(f, "- Last cooked: {date}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.rarity.with_icon())?;
        writeln!(f)?;
        writeln!(f, "## {}", self.recipe.title)?;
        writeln!(f)?;
        writeln!(f, "- Time: {} min", self.recipe.time_minutes)?;
        writeln!(f, "- Rating: {}", stars(self.recipe.effective_rating()))?;
        if !self.recipe.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.recipe.tag_line())?;
        }
        writeln!(f, "- Drawn from a pool of {}", self.pool_size)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = DayLabel(&self.date);
        if self.is_today {
            write!(f, "- **{label}** (today): ")?;
        } else if self.is_past {
            write!(f, "- ~~{label}~~: ")?;
        } else {
            write!(f, "- {label}: ")?;
        }

        match &self.recipe {
            Some(recipe) => writeln!(f, "{}", recipe.title),
            None => writeln!(f, "*nothing planned*"),
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        if let (Some(start), Some(end)) = (self.start(), self.end()) {
            write!(f, " {} - {}", DayMonth(&start), DayMonth(&end))?;
        }
        match self.relative_label() {
            Some(label) => writeln!(f, " ({label})")?,
            None => writeln!(f)?,
        }
        writeln!(f)?;

        if let Some(week) = self.iso_week() {
            writeln!(f, "Week {week}")?;
            writeln!(f)?;
        }

        for day in &self.days {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
