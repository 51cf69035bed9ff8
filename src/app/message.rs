// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use crate::ui::theme::ThemeMode;
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// An interaction inside one of the page sections.
    Page(sections::Message),
    /// An interaction on the navigation bar.
    Navbar(navbar::Message),
    /// A lightbox control was used (chrome click or keyboard).
    Lightbox(lightbox::Message),
    /// A toast notification control was used.
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    PageScrolled(AbsoluteOffset),
    /// Open the settings sheet.
    OpenSettings,
    /// Dismiss the settings sheet.
    CloseSettings,
    /// A theme mode was chosen in the settings sheet.
    ThemeModeSelected(ThemeMode),
    /// A display language was chosen in the settings sheet.
    LanguageSelected(LanguageIdentifier),
    /// The entrance reveal master toggle was flipped.
    RevealToggled(bool),
    /// The reveal lead-in delay slider moved (milliseconds).
    BaseDelayChanged(f32),
    /// The reveal per-item delay slider moved (milliseconds).
    StepDelayChanged(f32),
    /// Periodic tick driving entrance fades and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_VITRINE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
