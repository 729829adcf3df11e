//! Tab selection state

use crate::core::content::{self, SUMMARY_KEY};

/// Which tab is active. Starts on the summary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    keys: Vec<&'static str>,
    active: usize,
}

impl TabSelection {
    /// Create a selection over all roadmap tabs with summary active
    pub fn new() -> Self {
        let keys = content::tab_keys();
        let active = keys.iter().position(|k| *k == SUMMARY_KEY).unwrap_or(0);
        Self { keys, active }
    }

    /// Key of the active tab
    pub fn active_key(&self) -> &'static str {
        self.keys[self.active]
    }

    /// Position of the active tab in the strip
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// All tab keys in strip order
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// Whether the tree view is showing
    pub fn is_summary(&self) -> bool {
        self.active_key() == SUMMARY_KEY
    }

    /// Select a tab by key. Returns true if the active tab changed.
    ///
    /// Keys only ever come from the tab strip itself, so an unknown key is a
    /// bug in the caller.
    pub fn select(&mut self, key: &str) -> bool {
        let position = self.keys.iter().position(|k| *k == key);
        debug_assert!(position.is_some(), "unknown tab key '{}'", key);

        match position {
            Some(index) => self.select_index(index),
            None => {
                tracing::warn!("Ignoring unknown tab key '{}'", key);
                false
            }
        }
    }

    /// Select a tab by position. Out of range positions are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.keys.len() || index == self.active {
            return false;
        }
        tracing::debug!(
            "Tab changed: {} -> {}",
            self.keys[self.active],
            self.keys[index]
        );
        self.active = index;
        true
    }

    /// Move to the next tab, wrapping around
    pub fn next(&mut self) -> bool {
        let index = (self.active + 1) % self.keys.len();
        self.select_index(index)
    }

    /// Move to the previous tab, wrapping around
    pub fn previous(&mut self) -> bool {
        let index = self.active.checked_sub(1).unwrap_or(self.keys.len() - 1);
        self.select_index(index)
    }
}

impl Default for TabSelection {
    fn default() -> Self {
        Self::new()
    }
}
