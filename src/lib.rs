// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a single-page engineering showcase built with the Iced
//! GUI framework.
//!
//! It presents a catalog of design projects with expandable case panels,
//! tabbed media views, scroll-triggered entrance reveals, and a modal
//! lightbox, and demonstrates internationalization with Fluent, user
//! preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod paths;
pub mod ui;
