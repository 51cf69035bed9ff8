// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and its overlays.
//!
//! The `App` struct wires together the interaction engine, localization, and
//! persisted preferences, and translates messages into side effects like
//! config persistence or scroll jumps. This file intentionally keeps policy
//! decisions (window geometry, reveal wiring, persistence timing) close to
//! the main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::Catalog;
use crate::engine::{Command, ShowcaseEngine, ThresholdFraction};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, region};
use crate::ui::state::{region_span, EntranceTimeline};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state that bridges the page, the interaction
/// engine, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    pub config: Config,
    catalog: Catalog,
    engine: ShowcaseEngine,
    /// Reveal instants backing the entrance fades.
    entrance: EntranceTimeline,
    /// Whether the settings sheet is open.
    settings_open: bool,
    /// Vertical scroll offset of the page, drives the navbar tint.
    page_offset_y: f32,
    /// Clock the entrance fades render against, advanced by ticks.
    now: Instant,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("settings_open", &self.settings_open)
            .field("lightbox_open", &self.engine.lightbox_open())
            .finish()
    }
}

/// Builds the window settings from persisted geometry.
pub fn window_settings(config: &Config) -> window::Settings {
    let icon = crate::icon::load_window_icon();
    let (width, height) = config.window.effective_size();

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    crate::paths::init_cli_overrides(flags.config_dir.clone());
    let window = window_settings(&config::load().0);

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            catalog: Catalog::default(),
            engine: ShowcaseEngine::new(),
            entrance: EntranceTimeline::default(),
            settings_open: false,
            page_offset_y: 0.0,
            now: Instant::now(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// Effective stagger delays as durations.
fn motion_durations(config: &Config) -> (Duration, Duration) {
    (
        Duration::from_millis(config.motion.effective_base_delay_ms()),
        Duration::from_millis(config.motion.effective_step_delay_ms()),
    )
}

impl App {
    /// Initializes application state: loads the config and catalog, arms the
    /// scroll watchers, and reveals the hero.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (catalog, catalog_error) = match Catalog::load() {
            Ok(catalog) => (catalog, None),
            Err(error) => {
                eprintln!("Showcase catalog failed validation: {error}");
                (Catalog::default(), Some(error))
            }
        };

        let mut app = App {
            i18n,
            config,
            catalog,
            ..Self::default()
        };

        for plan in sections::WATCHED_REGIONS {
            app.engine.apply(Command::Observe {
                region: plan.id.to_string(),
                threshold: ThresholdFraction::new(plan.threshold),
            });
        }

        // The hero never waits on a scroll sighting; it reveals on startup.
        let now = Instant::now();
        app.now = now;
        let (base, step) = motion_durations(&app.config);
        app.entrance.mark_revealed(
            region::HERO,
            now,
            region_span(sections::HERO_ITEMS, base, step),
        );

        if !app.config.motion.is_reveal_enabled() {
            app.engine.apply(Command::RevealAll);
        }

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(error) = catalog_error {
            app.notifications.push(Notification::error(error.i18n_key()));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.config.general.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.engine.lightbox_open());
        let tick_sub = subscription::create_tick_subscription(
            self.entrance.animating(self.now),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(page_message) => update::handle_page_message(self, page_message),
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(self, lightbox_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PageScrolled(offset) => {
                self.page_offset_y = offset.y;
                Task::none()
            }
            Message::OpenSettings => {
                self.settings_open = true;
                Task::none()
            }
            Message::CloseSettings => {
                self.settings_open = false;
                Task::none()
            }
            Message::ThemeModeSelected(mode) => update::handle_theme_mode(self, mode),
            Message::LanguageSelected(locale) => update::handle_language(self, locale),
            Message::RevealToggled(enabled) => update::handle_reveal_toggled(self, enabled),
            Message::BaseDelayChanged(ms) => update::handle_base_delay(self, ms),
            Message::StepDelayChanged(ms) => update::handle_step_delay(self, ms),
            Message::Tick(instant) => {
                self.now = instant;
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
