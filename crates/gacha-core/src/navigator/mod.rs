//! History-backed view and modal navigation.
//!
//! The navigator tracks which top-level [`View`] is visible and which
//! [`Modal`] (if any) is open, and mirrors every user-driven change into a
//! [`NavigationHistory`] so that "back" closes the open modal or returns to
//! the previous view, and the address fragment names the active view.
//!
//! ```text
//!   user action ──▶ Navigator ──push/replace──▶ NavigationHistory
//!                      ▲                              │
//!                      └──────── PopEvent ◀── back/forward
//! ```
//!
//! Closing a modal that has a history entry never hides it directly: the
//! navigator steps the history back and applies the resulting [`PopEvent`],
//! which keeps the history stack authoritative.
//!
//! ```rust
//! use gacha_core::navigator::{MemoryHistory, Modal, Navigator, View};
//!
//! let mut nav = Navigator::start(MemoryHistory::new("#view-weekplan"));
//! assert_eq!(nav.view(), View::WeekPlan);
//!
//! nav.open_modal(Modal::Slot);
//! nav.close_modal();
//! assert_eq!(nav.view(), View::WeekPlan);
//! assert_eq!(nav.modal(), None);
//! ```

pub mod history;


use std::{fmt, str::FromStr};

use log::debug;

use crate::error::GachaError;

pub use history::{MemoryHistory, NavigationHistory, PopEvent};

/// Top-level screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Cookbook,
    Oracle,
    WeekPlan,
}

impl View {
    pub const ALL: [View; 3] = [View::Cookbook, View::Oracle, View::WeekPlan];

    /// Element id of the view, also used as the address fragment.
    pub fn id(&self) -> &'static str {
        match self {
            View::Cookbook => "view-cookbook",
            View::Oracle => "view-oracle",
            View::WeekPlan => "view-weekplan",
        }
    }

    /// Address fragment including the leading `#`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.id())
    }

    /// Resolves an address fragment (with or without `#`). Unknown
    /// fragments resolve to `None`.
    pub fn from_fragment(fragment: &str) -> Option<View> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        View::ALL.into_iter().find(|v| v.id() == id)
    }
}

impl FromStr for View {
    type Err = GachaError;

    /// Accepts fragments (`#view-oracle`), element ids (`view-oracle`) and
    /// short names (`oracle`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(view) = View::from_fragment(s) {
            return Ok(view);
        }
        match s.to_lowercase().as_str() {
            "cookbook" => Ok(View::Cookbook),
            "oracle" => Ok(View::Oracle),
            "weekplan" | "week-plan" | "week" => Ok(View::WeekPlan),
            _ => Err(GachaError::UnknownNavigationTarget {
                kind: "view",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Cookbook => "Cookbook",
            View::Oracle => "Oracle",
            View::WeekPlan => "Week Plan",
        };
        write!(f, "{name}")
    }
}

/// Dialogs layered over a view. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    AddEditRecipe,
    DaySelection,
    Slot,
    DataBackup,
}

impl Modal {
    pub const ALL: [Modal; 4] = [
        Modal::AddEditRecipe,
        Modal::DaySelection,
        Modal::Slot,
        Modal::DataBackup,
    ];

    /// Element id of the modal.
    pub fn id(&self) -> &'static str {
        match self {
            Modal::AddEditRecipe => "addRecipeModal",
            Modal::DaySelection => "daySelectionModal",
            Modal::Slot => "slotModal",
            Modal::DataBackup => "dataModal",
        }
    }
}

impl FromStr for Modal {
    type Err = GachaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(modal) = Modal::ALL.into_iter().find(|m| m.id() == s) {
            return Ok(modal);
        }
        match s.to_lowercase().as_str() {
            "recipe" | "add-recipe" | "edit-recipe" => Ok(Modal::AddEditRecipe),
            "day" | "day-selection" => Ok(Modal::DaySelection),
            "slot" => Ok(Modal::Slot),
            "backup" | "data" => Ok(Modal::DataBackup),
            _ => Err(GachaError::UnknownNavigationTarget {
                kind: "modal",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modal::AddEditRecipe => "Recipe",
            Modal::DaySelection => "Pick a Day",
            Modal::Slot => "Plan Slot",
            Modal::DataBackup => "Backup",
        };
        write!(f, "{name}")
    }
}

/// One record of the navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub view: View,
    pub modal: Option<Modal>,
}

impl HistoryEntry {
    /// A view with no modal open.
    pub fn view(view: View) -> Self {
        Self { view, modal: None }
    }

    /// A view with `modal` open on top.
    pub fn modal(view: View, modal: Modal) -> Self {
        Self {
            view,
            modal: Some(modal),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modal {
            Some(modal) => write!(f, "{} › {}", self.view, modal),
            None => write!(f, "{}", self.view),
        }
    }
}

/// What caused a view switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The user picked a navigation target; a history entry is pushed
    User,
    /// A back/forward event; the state is applied without pushing
    History,
}

/// Displayed state before and after a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: HistoryEntry,
    pub to: HistoryEntry,
    pub trigger: Trigger,
}

impl Transition {
    /// Whether this step brought `view` on screen. A user switch to a view
    /// always counts, even when it was already showing.
    pub fn entered(&self, view: View) -> bool {
        self.to.view == view && (self.trigger == Trigger::User || self.from.view != view)
    }

    /// Whether this step took `view` off screen.
    pub fn left(&self, view: View) -> bool {
        self.from.view == view && self.to.view != view
    }
}

/// Outcome of a back or forward request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMove {
    /// The history moved and the entry's state was applied
    Applied(Transition),
    /// The history moved to an entry without app state; nothing changed
    NoState,
    /// There is no entry in that direction. Going back from here leaves
    /// the app.
    Edge,
}

/// View/modal state machine kept in sync with a [`NavigationHistory`].
#[derive(Debug)]
pub struct Navigator<H: NavigationHistory> {
    history: H,
    view: View,
    modal: Option<Modal>,
}

impl<H: NavigationHistory> Navigator<H> {
    /// Derives the initial view from the history's current fragment
    /// (falling back to the cookbook) and records it by replacing the
    /// current entry, so going back from the start leaves the app.
    pub fn start(mut history: H) -> Self {
        let view = View::from_fragment(&history.fragment()).unwrap_or(View::Cookbook);
        history.replace_state(HistoryEntry::view(view), &view.fragment());
        debug!("Navigator started on {}", view.id());
        Self {
            history,
            view,
            modal: None,
        }
    }

    /// The displayed state.
    pub fn current(&self) -> HistoryEntry {
        HistoryEntry {
            view: self.view,
            modal: self.modal,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Shows `view` and closes any open modal. A user-triggered switch
    /// pushes `{view, none}` with the view's fragment; a history-triggered
    /// one only applies the state.
    pub fn switch_view(&mut self, view: View, trigger: Trigger) -> Transition {
        let from = self.current();
        self.view = view;
        self.modal = None;

        if trigger == Trigger::User {
            self.history
                .push_state(HistoryEntry::view(view), Some(&view.fragment()));
        }
        debug!("Switched view {} -> {} ({trigger:?})", from.view.id(), view.id());

        Transition {
            from,
            to: self.current(),
            trigger,
        }
    }

    /// Shows `modal` over the current view and pushes a history entry for
    /// it. The address fragment is unchanged.
    pub fn open_modal(&mut self, modal: Modal) -> Transition {
        let from = self.current();
        self.modal = Some(modal);
        self.history
            .push_state(HistoryEntry::modal(self.view, modal), None);
        debug!("Opened modal {}", modal.id());

        Transition {
            from,
            to: self.current(),
            trigger: Trigger::User,
        }
    }

    /// Closes the open modal.
    ///
    /// If the current history entry carries a modal the history steps back
    /// and the popped state is applied. Otherwise all modals are hidden
    /// directly.
    pub fn close_modal(&mut self) -> Transition {
        if self.history_modal().is_some() {
            if let HistoryMove::Applied(transition) = self.back() {
                return transition;
            }
        }
        self.hide_modals()
    }

    /// Closes `clicked` after a click on its backdrop. Only the modal that
    /// the current history entry recorded reacts.
    pub fn dismiss(&mut self, clicked: Modal) -> Option<Transition> {
        if self.history_modal() != Some(clicked) {
            return None;
        }
        match self.back() {
            HistoryMove::Applied(transition) => Some(transition),
            HistoryMove::NoState | HistoryMove::Edge => None,
        }
    }

    /// Modal recorded in the current history entry.
    pub fn history_modal(&self) -> Option<Modal> {
        self.history.current_state().and_then(|entry| entry.modal)
    }

    /// Steps the history back and applies the resulting entry.
    pub fn back(&mut self) -> HistoryMove {
        match self.history.back() {
            Some(event) => self.handle_pop(event),
            None => HistoryMove::Edge,
        }
    }

    /// Steps the history forward and applies the resulting entry.
    pub fn forward(&mut self) -> HistoryMove {
        match self.history.forward() {
            Some(event) => self.handle_pop(event),
            None => HistoryMove::Edge,
        }
    }

    /// Applies a history event: the entry's view is shown without pushing
    /// and its modal is shown, or all modals are hidden. Entries without
    /// state are ignored.
    pub fn handle_pop(&mut self, event: PopEvent) -> HistoryMove {
        let Some(entry) = event.state else {
            debug!("Ignoring history entry without state");
            return HistoryMove::NoState;
        };

        let from = self.current();
        let mut transition = self.switch_view(entry.view, Trigger::History);
        self.modal = entry.modal;
        transition.from = from;
        transition.to = self.current();
        HistoryMove::Applied(transition)
    }

    fn hide_modals(&mut self) -> Transition {
        let from = self.current();
        self.modal = None;
        Transition {
            from,
            to: self.current(),
            trigger: Trigger::User,
        }
    }
}
