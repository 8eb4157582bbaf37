//! Application controller.
//!
//! [`App`] is the single owner of session state: the store, the navigator,
//! the oracle session, the displayed week and the slot being filled. Every
//! operation runs to completion, persists before returning and then asks
//! the [`Renderer`] to refresh the affected surfaces.
//!
//! ```rust
//! use gacha_core::{
//!     app::{App, Surface},
//!     db::Database,
//!     navigator::{MemoryHistory, Modal, View},
//! };
//!
//! let db = Database::in_memory().unwrap();
//! let mut app = App::start(db, MemoryHistory::new(""), Vec::<Surface>::new());
//! assert_eq!(app.view(), View::Cookbook);
//!
//! app.open_new_recipe();
//! assert_eq!(app.modal(), Some(Modal::AddEditRecipe));
//! app.close_modal();
//! assert_eq!(app.modal(), None);
//! ```
//!
//! ## Submodules
//!
//! - [`recipes`]: add/edit form and deletion
//! - [`draws`]: spinning the oracle and accepting its result
//! - [`planning`]: week navigation and slot filling
//! - [`backups`]: export and import

pub mod backups;
pub mod draws;
pub mod planning;
pub mod recipes;

#[cfg(test)]
mod tests;

use jiff::civil::Date;
use log::debug;

use crate::{
    db::Store,
    error::Result,
    models::today,
    navigator::{HistoryMove, Modal, NavigationHistory, Navigator, Transition, Trigger, View},
    oracle::OracleSession,
};

pub use draws::{Acceptance, DayChoice};

/// Part of the interface that needs redrawing after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Recipe list
    Cookbook,
    /// Displayed week
    WeekPlan,
    /// Oracle result and accept label
    Oracle,
    /// Active view, open modal and address
    Navigation,
}

/// Presentation hook called by the controller after every relevant
/// mutation.
pub trait Renderer {
    fn refresh(&mut self, surface: Surface);
}

/// Records refresh requests in order, for callers that render lazily.
impl Renderer for Vec<Surface> {
    fn refresh(&mut self, surface: Surface) {
        self.push(surface);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn refresh(&mut self, surface: Surface) {
        (**self).refresh(surface);
    }
}

/// The application controller.
pub struct App<S: Store, H: NavigationHistory, R: Renderer> {
    store: S,
    navigator: Navigator<H>,
    renderer: R,
    oracle: OracleSession,
    editing: Option<String>,
    week_offset: i32,
    selected_slot: Option<Date>,
    pinned_today: Option<Date>,
}

impl<S: Store, H: NavigationHistory, R: Renderer> App<S, H, R> {
    /// Starts the app on the view named by the history's address fragment
    /// and draws every surface once.
    pub fn start(store: S, history: H, renderer: R) -> Self {
        let navigator = Navigator::start(history);
        let mut app = Self {
            store,
            navigator,
            renderer,
            oracle: OracleSession::default(),
            editing: None,
            week_offset: 0,
            selected_slot: None,
            pinned_today: None,
        };

        for surface in [
            Surface::Cookbook,
            Surface::WeekPlan,
            Surface::Oracle,
            Surface::Navigation,
        ] {
            app.renderer.refresh(surface);
        }
        app
    }

    /// Uses a fixed date as "today" instead of the system clock.
    pub fn with_today(mut self, date: Date) -> Self {
        self.pinned_today = Some(date);
        self
    }

    pub fn today(&self) -> Date {
        self.pinned_today.unwrap_or_else(today)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator<H> {
        &self.navigator
    }

    pub fn view(&self) -> View {
        self.navigator.view()
    }

    pub fn modal(&self) -> Option<Modal> {
        self.navigator.modal()
    }

    pub fn oracle(&self) -> &OracleSession {
        &self.oracle
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Id of the recipe open in the form, `None` in add mode.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn week_offset(&self) -> i32 {
        self.week_offset
    }

    /// Date the Slot modal is filling.
    pub fn selected_slot(&self) -> Option<Date> {
        self.selected_slot
    }

    /// Switches to `view` on user request.
    pub fn switch_view(&mut self, view: View) {
        let transition = self.navigator.switch_view(view, Trigger::User);
        self.apply(&transition);
    }

    /// Switches to the view named by `target` (an id, fragment or short
    /// name).
    ///
    /// # Errors
    ///
    /// Returns `UnknownNavigationTarget` for an unknown name; navigation is
    /// left untouched.
    pub fn navigate_to(&mut self, target: &str) -> Result<View> {
        let view: View = target.parse()?;
        self.switch_view(view);
        Ok(view)
    }

    pub fn open_modal(&mut self, modal: Modal) {
        let transition = self.navigator.open_modal(modal);
        self.apply(&transition);
    }

    /// Close control of the open modal.
    pub fn close_modal(&mut self) {
        let transition = self.navigator.close_modal();
        self.apply(&transition);
    }

    /// Backdrop click on `clicked`.
    pub fn dismiss(&mut self, clicked: Modal) {
        if let Some(transition) = self.navigator.dismiss(clicked) {
            self.apply(&transition);
        }
    }

    pub fn back(&mut self) -> HistoryMove {
        let moved = self.navigator.back();
        if let HistoryMove::Applied(transition) = &moved {
            self.apply(transition);
        }
        moved
    }

    pub fn forward(&mut self) -> HistoryMove {
        let moved = self.navigator.forward();
        if let HistoryMove::Applied(transition) = &moved {
            self.apply(transition);
        }
        moved
    }

    /// Closes `modal` after its action completed: through the history when
    /// the current entry recorded it, otherwise by hiding it directly.
    fn finish_modal(&mut self, modal: Modal) {
        if let Some(transition) = self.navigator.dismiss(modal) {
            self.apply(&transition);
        } else if self.navigator.modal() == Some(modal) {
            self.close_modal();
        }
    }

    /// Session side effects of a navigation change.
    fn apply(&mut self, transition: &Transition) {
        if transition.entered(View::Oracle) {
            self.oracle.reset_result();
            self.renderer.refresh(Surface::Oracle);
        }
        if transition.left(View::Oracle) {
            self.oracle.clear_target();
        }
        if transition.entered(View::WeekPlan) {
            self.renderer.refresh(Surface::WeekPlan);
        }
        if transition.entered(View::Cookbook) {
            self.renderer.refresh(Surface::Cookbook);
        }

        debug!("Now showing {}", transition.to);
        self.renderer.refresh(Surface::Navigation);
    }
}
