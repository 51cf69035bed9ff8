//! This module defines the UI components for the application's settings
//! sheet: theme mode, display language, and the entrance-motion controls.
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitrine::app::{App, Message};
//! use iced_vitrine::ui::settings;
//! use iced::{Element, widget::Container};
//!
//! // Assume `app` is your main application state
//! # fn dummy_app() -> App {
//! #     App::default()
//! # }
//! #
//! let app = dummy_app();
//! let settings_element: Element<'_, Message> = settings::view_settings(&app);
//!
//! let content = Container::new(settings_element);
//! // ... add to your application's view
//! ```

use crate::app::{App, Message};
use crate::ui::styles;
use crate::ui::theme::ThemeMode;
use iced::{
    widget::{slider, toggler, Button, Column, Row, Text},
    Element, Length,
};

pub fn view_settings(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.tr("settings-title")).size(30);

    let mut theme_row = Row::new().spacing(10);
    for (mode, label_key) in [
        (ThemeMode::System, "settings-theme-system"),
        (ThemeMode::Light, "settings-theme-light"),
        (ThemeMode::Dark, "settings-theme-dark"),
    ] {
        let mode_button = Button::new(Text::new(app.i18n.tr(label_key)))
            .on_press(Message::ThemeModeSelected(mode))
            .style(styles::button::toggle(
                app.config.general.theme_mode == mode,
            ));

        theme_row = theme_row.push(mode_button);
    }
    let theme_column = Column::new()
        .push(Text::new(app.i18n.tr("settings-theme-label")))
        .push(theme_row)
        .spacing(10);

    let mut language_selection_column = Column::new()
        .push(Text::new(app.i18n.tr("select-language-label")))
        .spacing(10);

    for locale in &app.i18n.available_locales {
        let display_name = locale.to_string(); // Fallback to string representation

        // Check for specific translation for the language name, e.g., "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = app.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone() // Use raw locale if translation missing
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = app.i18n.current_locale() == locale;
        let button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()))
            .style(styles::button::toggle(is_current_locale));

        language_selection_column = language_selection_column.push(button);
    }

    let motion_column = motion_controls(app);

    let close_button = Button::new(Text::new(app.i18n.tr("settings-close")))
        .on_press(Message::CloseSettings)
        .style(styles::button::primary);

    Column::new()
        .push(title)
        .push(theme_column)
        .push(language_selection_column)
        .push(motion_column)
        .push(close_button)
        .spacing(20)
        .width(Length::Fill)
        .into()
}

/// Entrance-motion controls: the master toggle and the two stagger delays.
fn motion_controls(app: &App) -> Column<'_, Message> {
    let motion = &app.config.motion;

    let reveal_row = Row::new()
        .spacing(10)
        .push(Text::new(app.i18n.tr("settings-reveal-label")).width(Length::Fill))
        .push(
            toggler(motion.is_reveal_enabled())
                .on_toggle(Message::RevealToggled)
                .size(20.0),
        );

    let base_ms = motion.effective_base_delay_ms();
    let base_row = Column::new()
        .spacing(4)
        .push(Text::new(
            app.i18n
                .tr_with_args("settings-base-delay-label", &[("ms", base_ms.to_string())]),
        ))
        .push(
            slider(0.0..=2000.0, base_ms as f32, Message::BaseDelayChanged).step(50.0),
        );

    let step_ms = motion.effective_step_delay_ms();
    let step_row = Column::new()
        .spacing(4)
        .push(Text::new(
            app.i18n
                .tr_with_args("settings-step-delay-label", &[("ms", step_ms.to_string())]),
        ))
        .push(
            slider(0.0..=1000.0, step_ms as f32, Message::StepDelayChanged).step(25.0),
        );

    Column::new()
        .push(Text::new(app.i18n.tr("settings-motion-label")))
        .push(reveal_row)
        .push(base_row)
        .push(step_row)
        .spacing(10)
}
