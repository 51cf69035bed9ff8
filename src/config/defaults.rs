// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Reveal**: Entrance stagger timing for list sections
//! - **Window**: Initial window geometry

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default lead-in delay before the first staggered list item (in milliseconds).
pub const DEFAULT_REVEAL_BASE_DELAY_MS: u64 = 100;

/// Minimum allowed lead-in delay.
pub const MIN_REVEAL_BASE_DELAY_MS: u64 = 0;

/// Maximum allowed lead-in delay.
pub const MAX_REVEAL_BASE_DELAY_MS: u64 = 2000;

/// Default additional delay per staggered list item (in milliseconds).
pub const DEFAULT_REVEAL_STEP_DELAY_MS: u64 = 150;

/// Minimum allowed per-item delay.
pub const MIN_REVEAL_STEP_DELAY_MS: u64 = 0;

/// Maximum allowed per-item delay.
pub const MAX_REVEAL_STEP_DELAY_MS: u64 = 1000;

/// How long a single entrance fade runs (in milliseconds).
pub const ENTRANCE_FADE_MS: u64 = 600;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Minimum window width accepted from configuration.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Minimum window height accepted from configuration.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_defaults_are_within_bounds() {
        assert!(DEFAULT_REVEAL_BASE_DELAY_MS >= MIN_REVEAL_BASE_DELAY_MS);
        assert!(DEFAULT_REVEAL_BASE_DELAY_MS <= MAX_REVEAL_BASE_DELAY_MS);
        assert!(DEFAULT_REVEAL_STEP_DELAY_MS >= MIN_REVEAL_STEP_DELAY_MS);
        assert!(DEFAULT_REVEAL_STEP_DELAY_MS <= MAX_REVEAL_STEP_DELAY_MS);
    }

    #[test]
    fn window_defaults_exceed_minimums() {
        assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    }
}
