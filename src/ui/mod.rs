// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`sections`] - The page sections in scroll order (hero, showcase,
//!   about, skills, contact)
//! - [`navbar`] - Fixed navigation bar with section jumps
//! - [`lightbox`] - Modal image viewer with cyclic navigation
//! - [`settings`] - Preferences sheet (theme, language, motion)
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Presentation state derived on demand (entrance fades)
//! - [`widgets`] - Custom Iced widgets (visibility probe)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod settings;
pub mod state;
pub mod styles;
pub mod theme;
pub mod widgets;
