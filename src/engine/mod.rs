// SPDX-License-Identifier: MPL-2.0
//! Interaction engine for the showcase page.
//!
//! Four state containers live here: disclosure (expand/collapse), media tab
//! selection, the lightbox session, and scroll-reveal flags. All mutation
//! goes through [`ShowcaseEngine::apply`]; rendering pulls read-only
//! snapshots through the accessor methods. No mutation happens during view
//! construction.

pub mod disclosure;
pub mod lightbox;
pub mod reveal;
pub mod tabs;

pub use disclosure::DisclosureState;
pub use lightbox::{LightboxState, LightboxView};
pub use reveal::{stagger_delay, stagger_schedule, RevealState, ThresholdFraction};
pub use tabs::{resolve_media, MediaTab, TabMedia, TabState};

use crate::content::ImageRef;

/// A state mutation request. The only way to change engine state.
#[derive(Debug, Clone)]
pub enum Command {
    /// Expand or collapse a disclosure item.
    ToggleItem(String),
    /// Set the active media tab of an item.
    SelectTab(String, MediaTab),
    /// Open the lightbox over an image sequence.
    OpenLightbox { images: Vec<ImageRef>, start: usize },
    /// Advance the lightbox one image forward.
    LightboxNext,
    /// Step the lightbox one image back.
    LightboxPrevious,
    /// Dismiss the lightbox.
    CloseLightbox,
    /// Start watching a region for its scroll reveal.
    Observe {
        region: String,
        threshold: ThresholdFraction,
    },
    /// Feed a visibility report for a watched region.
    ReportVisibility { region: String, fraction: f32 },
    /// Latch every reveal flag at once.
    RevealAll,
}

/// Owns all interactive state of the page.
#[derive(Debug, Clone, Default)]
pub struct ShowcaseEngine {
    disclosure: DisclosureState,
    tabs: TabState,
    lightbox: LightboxState,
    reveal: RevealState,
}

impl ShowcaseEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command. Commands never fail; degenerate input resolves
    /// to a defined state or a silent drop per container rules.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleItem(item_id) => {
                let expanded = self.disclosure.toggle(&item_id);
                // Tab state appears the first time an item opens and then
                // sticks around, so collapse and re-expand land on the tab
                // the visitor last chose.
                if expanded {
                    self.tabs.materialize(&item_id);
                }
            }
            Command::SelectTab(item_id, tab) => self.tabs.select(&item_id, tab),
            Command::OpenLightbox { images, start } => self.lightbox.open(images, start),
            Command::LightboxNext => self.lightbox.next(),
            Command::LightboxPrevious => self.lightbox.previous(),
            Command::CloseLightbox => self.lightbox.close(),
            Command::Observe { region, threshold } => self.reveal.observe(&region, threshold),
            Command::ReportVisibility { region, fraction } => {
                self.reveal.report_visibility(&region, fraction);
            }
            Command::RevealAll => self.reveal.reveal_all(),
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    #[must_use]
    pub fn is_expanded(&self, item_id: &str) -> bool {
        self.disclosure.is_expanded(item_id)
    }

    #[must_use]
    pub fn active_tab(&self, item_id: &str) -> MediaTab {
        self.tabs.active_tab(item_id)
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<LightboxView<'_>> {
        self.lightbox.view()
    }

    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn is_revealed(&self, region_id: &str) -> bool {
        self.reveal.is_revealed(region_id)
    }

    /// Whether a region still needs a visibility probe attached.
    #[must_use]
    pub fn is_watched(&self, region_id: &str) -> bool {
        self.reveal.is_watched(region_id)
    }

    /// Regions still awaiting their reveal.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.reveal.watched_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets(count: usize) -> Vec<ImageRef> {
        (1..=count)
            .map(|i| ImageRef::new(format!("assets/test/sheet-{i:02}.jpg")))
            .collect()
    }

    #[test]
    fn first_expand_materializes_default_tab() {
        let mut engine = ShowcaseEngine::new();

        engine.apply(Command::ToggleItem("scissor-jack".to_string()));
        assert!(engine.is_expanded("scissor-jack"));
        assert_eq!(engine.active_tab("scissor-jack"), MediaTab::PrimaryRender);
    }

    #[test]
    fn tab_selection_survives_collapse_and_reexpand() {
        let mut engine = ShowcaseEngine::new();

        engine.apply(Command::ToggleItem("scissor-jack".to_string()));
        engine.apply(Command::SelectTab(
            "scissor-jack".to_string(),
            MediaTab::TechnicalDrawings,
        ));

        engine.apply(Command::ToggleItem("scissor-jack".to_string()));
        assert!(!engine.is_expanded("scissor-jack"));

        engine.apply(Command::ToggleItem("scissor-jack".to_string()));
        assert_eq!(
            engine.active_tab("scissor-jack"),
            MediaTab::TechnicalDrawings
        );
    }

    #[test]
    fn tab_switch_leaves_other_containers_alone() {
        let mut engine = ShowcaseEngine::new();
        engine.apply(Command::ToggleItem("a".to_string()));
        engine.apply(Command::ToggleItem("b".to_string()));
        engine.apply(Command::Observe {
            region: "showcase".to_string(),
            threshold: ThresholdFraction::new(0.05),
        });
        engine.apply(Command::ReportVisibility {
            region: "showcase".to_string(),
            fraction: 1.0,
        });

        engine.apply(Command::SelectTab("a".to_string(), MediaTab::MotionStudy));

        assert!(engine.is_expanded("a"));
        assert!(engine.is_expanded("b"));
        assert_eq!(engine.active_tab("b"), MediaTab::PrimaryRender);
        assert!(engine.is_revealed("showcase"));
    }

    #[test]
    fn collapse_keeps_lightbox_session() {
        let mut engine = ShowcaseEngine::new();
        engine.apply(Command::ToggleItem("a".to_string()));
        engine.apply(Command::OpenLightbox {
            images: sheets(4),
            start: 0,
        });

        engine.apply(Command::ToggleItem("a".to_string()));
        assert!(engine.lightbox_open());
    }

    #[test]
    fn drawings_walkthrough_persists_tab_across_reexpand() {
        let mut engine = ShowcaseEngine::new();
        let item = "scissor-jack".to_string();

        engine.apply(Command::ToggleItem(item.clone()));
        assert_eq!(engine.active_tab(&item), MediaTab::PrimaryRender);

        engine.apply(Command::SelectTab(item.clone(), MediaTab::TechnicalDrawings));

        engine.apply(Command::OpenLightbox {
            images: sheets(9),
            start: 3,
        });
        engine.apply(Command::LightboxNext);
        engine.apply(Command::LightboxNext);
        engine.apply(Command::LightboxNext);
        assert_eq!(engine.lightbox().expect("open").index, 6);

        engine.apply(Command::CloseLightbox);
        engine.apply(Command::ToggleItem(item.clone()));
        engine.apply(Command::ToggleItem(item.clone()));

        assert!(engine.is_expanded(&item));
        assert_eq!(engine.active_tab(&item), MediaTab::TechnicalDrawings);
        assert!(!engine.lightbox_open());
    }

    #[test]
    fn stale_navigation_after_close_is_dropped() {
        let mut engine = ShowcaseEngine::new();
        engine.apply(Command::OpenLightbox {
            images: sheets(3),
            start: 2,
        });
        engine.apply(Command::CloseLightbox);

        engine.apply(Command::LightboxNext);
        engine.apply(Command::LightboxPrevious);
        engine.apply(Command::CloseLightbox);
        assert!(!engine.lightbox_open());
    }

    #[test]
    fn reveal_latch_is_monotonic_through_the_engine() {
        let mut engine = ShowcaseEngine::new();
        engine.apply(Command::Observe {
            region: "hero".to_string(),
            threshold: ThresholdFraction::new(0.3),
        });

        engine.apply(Command::ReportVisibility {
            region: "hero".to_string(),
            fraction: 0.5,
        });
        assert!(engine.is_revealed("hero"));
        assert!(!engine.is_watched("hero"));

        engine.apply(Command::ReportVisibility {
            region: "hero".to_string(),
            fraction: 0.0,
        });
        assert!(engine.is_revealed("hero"));
    }
}
