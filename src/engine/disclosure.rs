// SPDX-License-Identifier: MPL-2.0
//! Expand/collapse state for disclosure items.
//!
//! Items are independent: toggling one never touches another, and any number
//! may be open at once. State is keyed by item id, so showcase cards and
//! skill tiles share one container without colliding (skill ids carry a
//! `skill-` prefix).

use std::collections::HashSet;

/// Set of currently expanded item ids. Everything absent is collapsed.
#[derive(Debug, Clone, Default)]
pub struct DisclosureState {
    expanded: HashSet<String>,
}

impl DisclosureState {
    /// Flips the item between expanded and collapsed.
    ///
    /// Returns `true` when the item just became expanded, which is the
    /// moment its tab state gets materialized.
    pub fn toggle(&mut self, item_id: &str) -> bool {
        if self.expanded.remove(item_id) {
            false
        } else {
            self.expanded.insert(item_id.to_string());
            true
        }
    }

    /// Whether the item is currently expanded. Unknown ids are collapsed.
    #[must_use]
    pub fn is_expanded(&self, item_id: &str) -> bool {
        self.expanded.contains(item_id)
    }

    /// Number of items currently expanded.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_default_to_collapsed() {
        let state = DisclosureState::default();
        assert!(!state.is_expanded("scissor-jack"));
        assert!(!state.is_expanded("never-seen"));
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut state = DisclosureState::default();

        assert!(state.toggle("scissor-jack"));
        assert!(state.is_expanded("scissor-jack"));

        assert!(!state.toggle("scissor-jack"));
        assert!(!state.is_expanded("scissor-jack"));
    }

    #[test]
    fn items_are_independent() {
        let mut state = DisclosureState::default();

        state.toggle("scissor-jack");
        state.toggle("skill-cad-design");
        assert_eq!(state.expanded_count(), 2);

        state.toggle("scissor-jack");
        assert!(!state.is_expanded("scissor-jack"));
        assert!(state.is_expanded("skill-cad-design"));
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut state = DisclosureState::default();
        state.toggle("a");
        state.toggle("b");

        state.toggle("a");
        state.toggle("a");
        assert!(state.is_expanded("a"));
        assert!(state.is_expanded("b"));
    }
}
