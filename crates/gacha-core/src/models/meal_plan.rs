//! Meal plan entries and the week view built from them.

use jiff::{civil::Date, Span, ToSpan};
use serde::{Deserialize, Serialize};

use super::Recipe;
use crate::error::{GachaError, Result};

/// The current date in the system time zone.
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

/// One filled slot of the meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanEntry {
    pub date: Date,
    pub recipe_id: String,
}

/// A single day of a planned week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekDay {
    pub date: Date,

    /// Recipe planned for this day, if any
    pub recipe: Option<Recipe>,

    /// The day is before today
    pub is_past: bool,

    /// The day is today
    pub is_today: bool,
}

/// Seven consecutive days starting on a Monday.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    /// Offset from the current week (0 = this week, 1 = next week)
    pub offset: i32,

    pub days: Vec<WeekDay>,
}

impl Week {
    /// Monday of the week containing `date`.
    pub fn start_of(date: Date) -> Date {
        let back = i64::from(date.weekday().to_monday_zero_offset());
        date.saturating_sub(back.days())
    }

    /// The seven dates of the week shown at `offset` weeks from `today`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the week falls outside the supported
    /// calendar range.
    pub fn dates(today: Date, offset: i32) -> Result<[Date; 7]> {
        let out_of_range = |e: jiff::Error| {
            GachaError::invalid_input("offset")
                .with_reason(format!("week {offset} is out of range: {e}"))
        };
        let span = Span::new()
            .try_days(i64::from(offset) * 7)
            .map_err(out_of_range)?;
        let anchor = today.checked_add(span).map_err(out_of_range)?;
        let start = Self::start_of(anchor);

        let mut dates = [start; 7];
        for (i, date) in dates.iter_mut().enumerate() {
            *date = start.checked_add((i as i64).days()).map_err(out_of_range)?;
        }
        Ok(dates)
    }

    /// Builds the week at `offset`, resolving planned recipes with `lookup`.
    ///
    /// # Errors
    ///
    /// Fails like [`Week::dates`] for an out-of-range offset.
    pub fn build<F>(today: Date, offset: i32, mut lookup: F) -> Result<Self>
    where
        F: FnMut(Date) -> Option<Recipe>,
    {
        let days = Self::dates(today, offset)?
            .into_iter()
            .map(|date| WeekDay {
                date,
                recipe: lookup(date),
                is_past: date < today,
                is_today: date == today,
            })
            .collect();
        Ok(Self { offset, days })
    }

    /// First day of the week.
    pub fn start(&self) -> Option<Date> {
        self.days.first().map(|d| d.date)
    }

    /// Last day of the week.
    pub fn end(&self) -> Option<Date> {
        self.days.last().map(|d| d.date)
    }

    /// ISO 8601 week number of this week.
    pub fn iso_week(&self) -> Option<i8> {
        self.start().map(|d| d.iso_week_date().week())
    }

    /// Human label for the offset, if it has one.
    pub fn relative_label(&self) -> Option<&'static str> {
        match self.offset {
            0 => Some("this week"),
            1 => Some("next week"),
            _ => None,
        }
    }
}
