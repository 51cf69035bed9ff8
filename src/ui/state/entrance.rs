// SPDX-License-Identifier: MPL-2.0
//! Entrance animation timeline.
//!
//! When a region's reveal flag latches, the moment is recorded here and the
//! region's items fade in on a staggered schedule. The timeline only stores
//! instants; opacity is derived on demand, so rendering stays pull-only.

use crate::engine::stagger_delay;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Per-region reveal instants plus the end of the longest running fade.
#[derive(Debug, Clone, Default)]
pub struct EntranceTimeline {
    revealed_at: HashMap<String, Instant>,
    animating_until: Option<Instant>,
}

impl EntranceTimeline {
    /// Records that a region revealed at `now`.
    ///
    /// `span` is the delay of the region's last item plus the fade length;
    /// it extends the window during which ticks must keep flowing. Repeat
    /// calls for the same region keep the first instant, mirroring the
    /// one-shot reveal latch.
    pub fn mark_revealed(&mut self, region_id: &str, now: Instant, span: Duration) {
        if self.revealed_at.contains_key(region_id) {
            return;
        }
        self.revealed_at.insert(region_id.to_string(), now);

        let end = now + span;
        self.animating_until = Some(match self.animating_until {
            Some(current) if current > end => current,
            _ => end,
        });
    }

    /// Opacity of the item at `index` inside a region, in `[0, 1]`.
    ///
    /// Items in unrevealed regions are fully transparent. After the reveal,
    /// each item waits out its stagger delay and then ramps linearly over
    /// the fade length.
    #[must_use]
    pub fn opacity(
        &self,
        region_id: &str,
        index: usize,
        base: Duration,
        step: Duration,
        now: Instant,
    ) -> f32 {
        let Some(revealed_at) = self.revealed_at.get(region_id) else {
            return 0.0;
        };

        let delay = stagger_delay(index, base, step);
        let elapsed = now.saturating_duration_since(*revealed_at);
        let Some(fading) = elapsed.checked_sub(delay) else {
            return 0.0;
        };

        (fading.as_secs_f32() / ENTRANCE_FADE.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether any entrance fade is still running at `now`.
    #[must_use]
    pub fn animating(&self, now: Instant) -> bool {
        self.animating_until.is_some_and(|end| now < end)
    }
}

/// Length of the linear fade each item runs after its stagger delay.
pub const ENTRANCE_FADE: Duration =
    Duration::from_millis(crate::config::ENTRANCE_FADE_MS);

/// Animation span of a region holding `count` staggered items.
#[must_use]
pub fn region_span(count: usize, base: Duration, step: Duration) -> Duration {
    let last = count.saturating_sub(1);
    stagger_delay(last, base, step).saturating_add(ENTRANCE_FADE)
}
