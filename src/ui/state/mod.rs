// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic that belongs to presentation rather than the interaction
//! engine: timing of entrance fades and similar derived-on-demand values.

pub mod entrance;

pub use entrance::{region_span, EntranceTimeline};
