//! Hazard class multi-select.

use crate::query::HazardTag;
use std::collections::{BTreeSet, HashSet};

/// Multi-select over [`HazardTag::ALL`].
#[derive(Debug)]
pub struct HazardSelectState {
    is_active: bool,
    cursor: usize,
    selected: HashSet<HazardTag>,
}

impl HazardSelectState {
    /// Create a selector with nothing selected.
    pub fn new() -> Self {
        Self {
            is_active: false,
            cursor: 0,
            selected: HashSet::new(),
        }
    }

    /// Create a selector with the given tags selected.
    pub fn with_selected(tags: impl IntoIterator<Item = HazardTag>) -> Self {
        Self {
            selected: tags.into_iter().collect(),
            ..Self::new()
        }
    }

    /// Check if the selector has focus.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Give the selector focus.
    pub fn focus(&mut self) {
        self.is_active = true;
    }

    /// Return focus to the results list.
    pub fn blur(&mut self) {
        self.is_active = false;
    }

    /// Move the cursor up one tag.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one tag.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < HazardTag::ALL.len() {
            self.cursor += 1;
        }
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Toggle the tag under the cursor. Returns the tag and its new state.
    pub fn toggle_current(&mut self) -> (HazardTag, bool) {
        let tag = HazardTag::ALL[self.cursor];
        let selected = if self.selected.remove(&tag) {
            false
        } else {
            self.selected.insert(tag);
            true
        };
        (tag, selected)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Check if a tag is selected.
    pub fn is_selected(&self, tag: HazardTag) -> bool {
        self.selected.contains(&tag)
    }

    /// Selected tags as filter strings.
    pub fn selected_labels(&self) -> BTreeSet<String> {
        self.selected.iter().map(|t| t.label().to_string()).collect()
    }

    /// Number of selected tags.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

impl Default for HazardSelectState {
    fn default() -> Self {
        Self::new()
    }
}
