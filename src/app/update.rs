// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Page interactions translate one-to-one into engine commands; the settings
//! handlers mutate the config, persist it, and refresh whatever derives from
//! it. Handlers return the follow-up task for the runtime, `Task::none()`
//! when the effect is purely local.

use super::{App, Message};
use crate::config;
use crate::engine::Command;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::sections::{self, region, Section};
use crate::ui::state::region_span;
use crate::ui::theme::ThemeMode;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Routes a section interaction to the engine or the runtime.
pub fn handle_page_message(app: &mut App, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::ToggleItem(item_id) => {
            app.engine.apply(Command::ToggleItem(item_id));
            Task::none()
        }
        sections::Message::SelectTab(item_id, tab) => {
            app.engine.apply(Command::SelectTab(item_id, tab));
            Task::none()
        }
        sections::Message::OpenLightbox { images, start } => {
            app.engine.apply(Command::OpenLightbox { images, start });
            Task::none()
        }
        sections::Message::JumpTo(section) => jump_to(section),
        sections::Message::CopyContact(value) => {
            app.notifications
                .push(Notification::success("notification-contact-copied"));
            iced::clipboard::write(value.to_string())
        }
        sections::Message::RegionSighted { region, fraction } => {
            app.engine.apply(Command::ReportVisibility {
                region: region.to_string(),
                fraction,
            });
            if app.engine.is_revealed(region) {
                let (base, step) = super::motion_durations(&app.config);
                let items = sections::plan_of(region).map_or(1, |plan| plan.items);
                let now = Instant::now();
                app.now = now;
                app.entrance
                    .mark_revealed(region, now, region_span(items, base, step));
            }
            Task::none()
        }
    }
}

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::JumpTo(section) => jump_to(section),
        navbar::Message::OpenSettings => {
            app.settings_open = true;
            Task::none()
        }
    }
}

pub fn handle_lightbox_message(app: &mut App, message: lightbox::Message) -> Task<Message> {
    let command = match message {
        lightbox::Message::Close => Command::CloseLightbox,
        lightbox::Message::Next => Command::LightboxNext,
        lightbox::Message::Previous => Command::LightboxPrevious,
    };
    app.engine.apply(command);
    Task::none()
}

pub fn handle_theme_mode(app: &mut App, mode: ThemeMode) -> Task<Message> {
    app.config.general.theme_mode = mode;
    persist_config(app)
}

pub fn handle_language(app: &mut App, locale: LanguageIdentifier) -> Task<Message> {
    app.i18n.set_locale(locale.clone());
    app.config.general.language = Some(locale.to_string());
    persist_config(app)
}

/// Flips the entrance reveal master toggle.
///
/// Turning reveals off latches every watched region at once and backfills
/// the entrance timeline, so re-enabling later can never leave an
/// already-latched region stuck at zero opacity.
pub fn handle_reveal_toggled(app: &mut App, enabled: bool) -> Task<Message> {
    app.config.motion.reveal_enabled = Some(enabled);

    if !enabled {
        app.engine.apply(Command::RevealAll);

        let (base, step) = super::motion_durations(&app.config);
        let now = Instant::now();
        app.now = now;
        app.entrance.mark_revealed(
            region::HERO,
            now,
            region_span(sections::HERO_ITEMS, base, step),
        );
        for plan in sections::WATCHED_REGIONS {
            app.entrance
                .mark_revealed(plan.id, now, region_span(plan.items, base, step));
        }
    }

    persist_config(app)
}

pub fn handle_base_delay(app: &mut App, ms: f32) -> Task<Message> {
    app.config.motion.base_delay_ms = Some(ms as u64);
    persist_config(app)
}

pub fn handle_step_delay(app: &mut App, ms: f32) -> Task<Message> {
    app.config.motion.step_delay_ms = Some(ms as u64);
    persist_config(app)
}

/// Scrolls the page to a section anchor.
fn jump_to(section: Section) -> Task<Message> {
    operation::snap_to(Id::new(sections::PAGE_SCROLLABLE_ID), section.anchor())
}

/// Saves the config, surfacing failures as an error toast.
fn persist_config(app: &mut App) -> Task<Message> {
    if let Err(err) = config::save(&app.config) {
        eprintln!("Failed to save settings: {err:?}");
        app.notifications
            .push(Notification::error("notification-config-save-error"));
    }
    Task::none()
}
