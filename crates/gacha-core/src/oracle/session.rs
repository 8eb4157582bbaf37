//! Transient oracle session state.

use jiff::civil::Date;

use super::Draw;

/// What the oracle currently shows. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OracleSession {
    /// The most recent draw, if any
    pub result: Option<Draw>,

    /// Plan slot the user is trying to fill, when the oracle was entered
    /// from one
    pub target_date: Option<Date>,
}

impl OracleSession {
    /// Clears the drawn result and keeps the target date.
    pub fn reset_result(&mut self) {
        self.result = None;
    }

    /// Clears the target date.
    pub fn clear_target(&mut self) {
        self.target_date = None;
    }

    /// Records a new draw, replacing any earlier one.
    pub fn record(&mut self, draw: Draw) {
        self.result = Some(draw);
    }

    /// Label for the accept action, naming the target day when one is set.
    pub fn accept_label(&self) -> String {
        match self.target_date {
            Some(date) => format!("Take it for {}", date.strftime("%d.%m.")),
            None => "Take it & plan".to_string(),
        }
    }
}
