// SPDX-License-Identifier: MPL-2.0
//! Per-item media tab selection.
//!
//! Each expanded showcase item shows one of four fixed tabs. Selections are
//! kept per item and survive collapse, so re-expanding an item restores the
//! tab the visitor left it on. Switching tabs touches nothing but the
//! selection itself.

use crate::content::{ImageRef, MotionRef, ShowcaseItem};
use std::collections::HashMap;

/// The four media tabs of an expanded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaTab {
    PrimaryRender,
    ExplodedView,
    MotionStudy,
    TechnicalDrawings,
}

impl MediaTab {
    /// Display order of the tab strip.
    pub const ALL: [MediaTab; 4] = [
        MediaTab::PrimaryRender,
        MediaTab::ExplodedView,
        MediaTab::MotionStudy,
        MediaTab::TechnicalDrawings,
    ];

    /// Translation key for the tab label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MediaTab::PrimaryRender => "tab-primary-render",
            MediaTab::ExplodedView => "tab-exploded-view",
            MediaTab::MotionStudy => "tab-motion-study",
            MediaTab::TechnicalDrawings => "tab-technical-drawings",
        }
    }
}

impl Default for MediaTab {
    fn default() -> Self {
        MediaTab::PrimaryRender
    }
}

/// What a tab actually shows once resolved against an item's media.
///
/// Missing media is a defined presentation state here, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMedia<'a> {
    /// A single image, opened in the lightbox on click.
    Image(&'a ImageRef),
    /// A motion clip reference.
    Clip(&'a MotionRef),
    /// The item has no motion clip; a placeholder panel is shown.
    ClipUnavailable,
    /// Ordered drawing sheets shown as a gallery.
    Gallery(&'a [ImageRef]),
    /// The item has no drawings yet; a "coming soon" panel is shown.
    GalleryPending,
}

/// Resolves a tab against an item's media records.
///
/// The exploded-view tab falls back to the primary render when the item has
/// no dedicated exploded image.
#[must_use]
pub fn resolve_media(tab: MediaTab, item: &ShowcaseItem) -> TabMedia<'_> {
    match tab {
        MediaTab::PrimaryRender => TabMedia::Image(&item.primary),
        MediaTab::ExplodedView => TabMedia::Image(item.exploded_or_primary()),
        MediaTab::MotionStudy => match &item.motion {
            Some(clip) => TabMedia::Clip(clip),
            None => TabMedia::ClipUnavailable,
        },
        MediaTab::TechnicalDrawings => {
            if item.drawings.is_empty() {
                TabMedia::GalleryPending
            } else {
                TabMedia::Gallery(&item.drawings)
            }
        }
    }
}

/// Per-item tab selections, keyed by item id.
///
/// Entries are created lazily: an item gets one the first time it expands,
/// and `active_tab` answers the default for ids with no entry yet.
#[derive(Debug, Clone, Default)]
pub struct TabState {
    active: HashMap<String, MediaTab>,
}

impl TabState {
    /// Creates the item's entry at its default tab if it has none yet.
    /// Called on first expand; later expands find the entry in place.
    pub fn materialize(&mut self, item_id: &str) {
        if !self.active.contains_key(item_id) {
            self.active
                .insert(item_id.to_string(), MediaTab::default());
        }
    }

    /// Records the item's active tab.
    pub fn select(&mut self, item_id: &str, tab: MediaTab) {
        self.active.insert(item_id.to_string(), tab);
    }

    /// The item's active tab. Items never selected report the default.
    #[must_use]
    pub fn active_tab(&self, item_id: &str) -> MediaTab {
        self.active.get(item_id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    #[test]
    fn default_tab_is_primary_render() {
        let state = TabState::default();
        assert_eq!(state.active_tab("scissor-jack"), MediaTab::PrimaryRender);
    }

    #[test]
    fn selection_is_per_item() {
        let mut state = TabState::default();
        state.select("a", MediaTab::TechnicalDrawings);
        state.select("b", MediaTab::MotionStudy);

        assert_eq!(state.active_tab("a"), MediaTab::TechnicalDrawings);
        assert_eq!(state.active_tab("b"), MediaTab::MotionStudy);
        assert_eq!(state.active_tab("c"), MediaTab::PrimaryRender);
    }

    #[test]
    fn materialize_does_not_clobber_existing_selection() {
        let mut state = TabState::default();
        state.select("a", MediaTab::ExplodedView);
        state.materialize("a");
        assert_eq!(state.active_tab("a"), MediaTab::ExplodedView);
    }

    #[test]
    fn tab_strip_order_is_stable() {
        assert_eq!(MediaTab::ALL[0], MediaTab::PrimaryRender);
        assert_eq!(MediaTab::ALL[3], MediaTab::TechnicalDrawings);
    }

    #[test]
    fn exploded_view_falls_back_to_primary_render() {
        let catalog = Catalog::load().expect("builtin catalog");
        let placeholder = catalog.item("coming-soon-01").expect("placeholder item");
        assert!(placeholder.exploded.is_none());

        let media = resolve_media(MediaTab::ExplodedView, placeholder);
        assert_eq!(media, TabMedia::Image(&placeholder.primary));
    }

    #[test]
    fn missing_motion_clip_resolves_to_placeholder_panel() {
        let catalog = Catalog::load().expect("builtin catalog");
        let placeholder = catalog.item("coming-soon-01").expect("placeholder item");
        assert_eq!(
            resolve_media(MediaTab::MotionStudy, placeholder),
            TabMedia::ClipUnavailable
        );

        let flagship = catalog.item("scissor-jack").expect("flagship item");
        assert!(matches!(
            resolve_media(MediaTab::MotionStudy, flagship),
            TabMedia::Clip(_)
        ));
    }

    #[test]
    fn empty_drawings_resolve_to_pending_panel() {
        let catalog = Catalog::load().expect("builtin catalog");
        let placeholder = catalog.item("coming-soon-01").expect("placeholder item");
        assert_eq!(
            resolve_media(MediaTab::TechnicalDrawings, placeholder),
            TabMedia::GalleryPending
        );

        let flagship = catalog.item("scissor-jack").expect("flagship item");
        match resolve_media(MediaTab::TechnicalDrawings, flagship) {
            TabMedia::Gallery(sheets) => assert_eq!(sheets.len(), 9),
            other => panic!("expected gallery, got {other:?}"),
        }
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            MediaTab::ALL.iter().map(|t| t.i18n_key()).collect();
        assert_eq!(keys.len(), MediaTab::ALL.len());
    }
}
