//! Week plan navigation and slot filling.

use jiff::civil::Date;
use log::info;

use super::{App, Renderer, Surface};
use crate::{
    db::Store,
    error::{GachaError, Result},
    models::{Recipe, Week},
    navigator::{Modal, NavigationHistory, View},
};

impl<S: Store, H: NavigationHistory, R: Renderer> App<S, H, R> {
    /// The week currently shown.
    pub fn week(&self) -> Result<Week> {
        self.store.week(self.today(), self.week_offset)
    }

    /// Moves the displayed week by `delta` weeks.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the target week is outside the calendar;
    /// the displayed week stays as it was.
    pub fn change_week(&mut self, delta: i32) -> Result<()> {
        let offset = self.week_offset.saturating_add(delta);
        Week::dates(self.today(), offset)?;
        self.week_offset = offset;
        self.renderer.refresh(Surface::WeekPlan);
        Ok(())
    }

    /// Opens the Slot modal for `date`.
    pub fn fill_day(&mut self, date: Date) {
        self.selected_slot = Some(date);
        self.open_modal(Modal::Slot);
    }

    fn slot(&self) -> Result<Date> {
        self.selected_slot
            .ok_or_else(|| GachaError::invalid_input("slot").with_reason("no day is being filled"))
    }

    /// Recipes offered in the Slot modal for a search term.
    pub fn slot_candidates(&self, term: &str) -> Result<Vec<Recipe>> {
        self.store.search(term)
    }

    /// Plans `recipe_id` on the selected slot and closes the Slot modal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no slot is selected and `RecipeNotFound`
    /// for an unknown recipe.
    pub fn pick_for_slot(&mut self, recipe_id: &str) -> Result<Date> {
        let date = self.slot()?;
        self.store.set(date, recipe_id)?;
        info!("Planned {recipe_id} for {date}");

        self.renderer.refresh(Surface::WeekPlan);
        if self.navigator.history_modal() == Some(Modal::Slot) {
            self.back();
        }
        Ok(date)
    }

    /// Leaves the Slot modal for the oracle, remembering the slot as the
    /// target date.
    pub fn ask_oracle_for_slot(&mut self) -> Result<Date> {
        let date = self.slot()?;
        self.oracle.target_date = Some(date);

        if self.navigator.history_modal() == Some(Modal::Slot) {
            self.back();
        }
        self.switch_view(View::Oracle);
        self.renderer.refresh(Surface::Oracle);
        Ok(date)
    }

    /// Removes the entry for `date`. Returns whether one existed.
    pub fn clear_day(&mut self, date: Date) -> Result<bool> {
        let cleared = self.store.clear(date)?;
        self.renderer.refresh(Surface::WeekPlan);
        Ok(cleared)
    }

    /// Removes every entry of the displayed week. Returns how many were
    /// removed.
    pub fn clear_week(&mut self) -> Result<usize> {
        let dates = Week::dates(self.today(), self.week_offset)?;
        let removed = self.store.clear_range(&dates)?;
        info!("Cleared {removed} entries from the displayed week");
        self.renderer.refresh(Surface::WeekPlan);
        Ok(removed)
    }
}
