//! Spinning the oracle and planning its result.

use jiff::civil::Date;
use log::{debug, info};
use rand::Rng;

use super::{App, Renderer, Surface};
use crate::{
    db::Store,
    error::{GachaError, Result},
    models::{OracleFilter, Recipe, Week},
    navigator::{Modal, NavigationHistory, View},
    oracle::{self, Draw},
};

/// What accepting the oracle result did.
#[derive(Debug, Clone, PartialEq)]
pub enum Acceptance {
    /// The result was written to the target date
    Planned { date: Date, recipe: Recipe },
    /// No target date was set; the day picker is open
    ChooseDay,
}

/// What picking a day for the oracle result did.
#[derive(Debug, Clone, PartialEq)]
pub enum DayChoice {
    /// The result was written to the day
    Planned { date: Date, recipe: Recipe },
    /// The day already holds another recipe; nothing was written
    Occupied { date: Date, current: Recipe },
}

impl<S: Store, H: NavigationHistory, R: Renderer> App<S, H, R> {
    /// Draws a recipe and stores it as the session result.
    ///
    /// # Errors
    ///
    /// Returns [`GachaError::EmptyPool`] when no recipe passes `filter`.
    /// Session state and stores are unchanged in that case.
    pub fn spin<G: Rng>(&mut self, filter: &OracleFilter, rng: &mut G) -> Result<Draw> {
        let recipes = self.store.list()?;
        let draw = oracle::draw(&recipes, filter, rng)?;
        self.oracle.record(draw.clone());
        self.renderer.refresh(Surface::Oracle);
        Ok(draw)
    }

    fn current_result(&self) -> Result<Draw> {
        self.oracle
            .result
            .clone()
            .ok_or_else(|| {
                GachaError::invalid_input("oracle").with_reason("nothing has been drawn yet")
            })
    }

    /// Accepts the drawn recipe.
    ///
    /// With a target date the recipe is planned there and the week plan is
    /// shown. Without one the day picker opens and the meal plan is not
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when nothing has been drawn, and store errors
    /// from the write. Session state is kept when the write fails.
    pub fn accept(&mut self) -> Result<Acceptance> {
        let draw = self.current_result()?;

        let Some(date) = self.oracle.target_date else {
            self.open_modal(Modal::DaySelection);
            return Ok(Acceptance::ChooseDay);
        };

        self.store.set(date, &draw.recipe.id)?;
        info!("Planned '{}' for {date}", draw.recipe.title);

        self.oracle.clear_target();
        self.oracle.reset_result();
        self.renderer.refresh(Surface::WeekPlan);
        self.renderer.refresh(Surface::Oracle);
        self.switch_view(View::WeekPlan);

        Ok(Acceptance::Planned {
            date,
            recipe: draw.recipe,
        })
    }

    /// Week offered by the day picker.
    pub fn day_selection_week(&self) -> Result<Week> {
        self.store.week(self.today(), self.week_offset)
    }

    /// Plans the drawn recipe on `date`, then leaves the day picker and
    /// shows the week plan.
    ///
    /// A day holding another recipe is only overwritten when `replace` is
    /// set; otherwise [`DayChoice::Occupied`] is returned and nothing
    /// changes.
    pub fn choose_day(&mut self, date: Date, replace: bool) -> Result<DayChoice> {
        let draw = self.current_result()?;

        if !replace {
            if let Some(current_id) = self.store.planned(date)? {
                if current_id != draw.recipe.id {
                    if let Some(current) = self.store.get(&current_id)? {
                        debug!("{date} already holds '{}'", current.title);
                        return Ok(DayChoice::Occupied { date, current });
                    }
                }
            }
        }

        self.store.set(date, &draw.recipe.id)?;
        info!("Planned '{}' for {date}", draw.recipe.title);

        self.oracle.reset_result();
        self.renderer.refresh(Surface::WeekPlan);
        self.renderer.refresh(Surface::Oracle);
        if self.navigator.history_modal() == Some(Modal::DaySelection) {
            self.back();
        }
        self.switch_view(View::WeekPlan);

        Ok(DayChoice::Planned {
            date,
            recipe: draw.recipe,
        })
    }
}
