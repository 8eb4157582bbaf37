//! Navigation history adapters.
//!
//! The navigator never owns the platform's history; it talks to it through
//! [`NavigationHistory`]. [`MemoryHistory`] implements browser semantics in
//! memory for targets without a native history.

use super::HistoryEntry;

/// Delivered after the history moved to another entry (back/forward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopEvent {
    /// State attached to the now-current entry. Entries created outside the
    /// app carry none.
    pub state: Option<HistoryEntry>,
}

/// Platform navigation stack.
pub trait NavigationHistory {
    /// State of the current entry.
    fn current_state(&self) -> Option<HistoryEntry>;

    /// Address fragment of the current entry, including the leading `#`.
    fn fragment(&self) -> String;

    /// Adds an entry after the current one, discarding any forward entries.
    /// `fragment` of `None` keeps the current address.
    fn push_state(&mut self, state: HistoryEntry, fragment: Option<&str>);

    /// Overwrites the current entry without creating a new one.
    fn replace_state(&mut self, state: HistoryEntry, fragment: &str);

    /// Moves one entry back. `None` when there is no earlier entry.
    fn back(&mut self) -> Option<PopEvent>;

    /// Moves one entry forward. `None` when there is no later entry.
    fn forward(&mut self) -> Option<PopEvent>;
}

#[derive(Debug, Clone, PartialEq)]
struct Record {
    state: Option<HistoryEntry>,
    fragment: String,
}

/// In-memory history with browser semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryHistory {
    records: Vec<Record>,
    index: usize,
}

impl MemoryHistory {
    /// A history holding a single stateless entry at `fragment`, as after a
    /// fresh page load.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            records: vec![Record {
                state: None,
                fragment: normalize_fragment(fragment.into()),
            }],
            index: 0,
        }
    }

    /// Number of entries, including forward entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }

    fn pop_event(&self) -> PopEvent {
        PopEvent {
            state: self.records[self.index].state,
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl NavigationHistory for MemoryHistory {
    fn current_state(&self) -> Option<HistoryEntry> {
        self.records[self.index].state
    }

    fn fragment(&self) -> String {
        self.records[self.index].fragment.clone()
    }

    fn push_state(&mut self, state: HistoryEntry, fragment: Option<&str>) {
        let fragment = match fragment {
            Some(f) => normalize_fragment(f.to_string()),
            None => self.fragment(),
        };
        self.records.truncate(self.index + 1);
        self.records.push(Record {
            state: Some(state),
            fragment,
        });
        self.index += 1;
    }

    fn replace_state(&mut self, state: HistoryEntry, fragment: &str) {
        self.records[self.index] = Record {
            state: Some(state),
            fragment: normalize_fragment(fragment.to_string()),
        };
    }

    fn back(&mut self) -> Option<PopEvent> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.pop_event())
    }

    fn forward(&mut self) -> Option<PopEvent> {
        if self.index + 1 >= self.records.len() {
            return None;
        }
        self.index += 1;
        Some(self.pop_event())
    }
}

fn normalize_fragment(fragment: String) -> String {
    if fragment.is_empty() || fragment.starts_with('#') {
        fragment
    } else {
        format!("#{fragment}")
    }
}
