// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal flags.
//!
//! A region is observed with a visibility threshold. Once a visibility
//! report meets the threshold the region's flag latches and the region is
//! dropped from the watch set, so later reports cannot unlatch it. Entrance
//! delays for items inside a revealed region come from the pure stagger
//! schedule below.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Fraction of a region's area that must be visible to trigger its reveal.
///
/// Valid range is (0, 1]. Out-of-range and non-finite inputs are clamped so
/// a bad threshold can only ever make a region reveal sooner, not hide it
/// forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdFraction(f32);

impl ThresholdFraction {
    pub const MIN: f32 = 1e-3;

    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_finite() {
            Self(fraction.clamp(Self::MIN, 1.0))
        } else {
            Self(Self::MIN)
        }
    }

    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Watch registry plus the latched reveal flags.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    watched: HashMap<String, ThresholdFraction>,
    revealed: HashSet<String>,
}

impl RevealState {
    /// Registers a region for observation.
    ///
    /// Re-observing an already revealed region is a no-op; the flag stays
    /// latched. Re-observing a watched region updates its threshold.
    pub fn observe(&mut self, region_id: &str, threshold: ThresholdFraction) {
        if self.revealed.contains(region_id) {
            return;
        }
        self.watched.insert(region_id.to_string(), threshold);
    }

    /// Feeds a visibility report for a region.
    ///
    /// Latches the flag and detaches the watch when the visible fraction
    /// meets the region's threshold. Reports for unknown or already
    /// revealed regions are dropped.
    pub fn report_visibility(&mut self, region_id: &str, visible_fraction: f32) {
        let Some(threshold) = self.watched.get(region_id) else {
            return;
        };
        if visible_fraction >= threshold.get() {
            self.watched.remove(region_id);
            self.revealed.insert(region_id.to_string());
        }
    }

    /// Latches every region, watched or not yet observed.
    ///
    /// Fallback for when visibility reporting is unavailable or entrance
    /// motion is disabled; content must never stay hidden.
    pub fn reveal_all(&mut self) {
        let watched: Vec<String> = self.watched.drain().map(|(id, _)| id).collect();
        self.revealed.extend(watched);
    }

    /// Whether the region's reveal flag has latched.
    #[must_use]
    pub fn is_revealed(&self, region_id: &str) -> bool {
        self.revealed.contains(region_id)
    }

    /// Whether the region still needs visibility reports.
    #[must_use]
    pub fn is_watched(&self, region_id: &str) -> bool {
        self.watched.contains_key(region_id)
    }

    /// Number of regions still awaiting their reveal.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }
}

/// Entrance delay for the item at `index` in a stagger run.
///
/// Pure: `base + index * step`, saturating instead of overflowing.
#[must_use]
pub fn stagger_delay(index: usize, base: Duration, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}

/// Entrance delays for `count` items revealed together.
#[must_use]
pub fn stagger_schedule(count: usize, base: Duration, step: Duration) -> Vec<Duration> {
    (0..count).map(|i| stagger_delay(i, base, step)).collect()
}
