// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole page lives inside a single vertical scrollable; the navigation
//! bar, the settings sheet, the lightbox, and the toasts stack above it in
//! that order.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::lightbox;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::sections::{self, PageContext, PAGE_SCROLLABLE_ID};
use crate::ui::settings;
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Container, Id, Scrollable, Space, Stack};
use iced::{alignment, Element, Length};

/// Renders the page plus whatever overlays are active.
pub fn view(app: &App) -> Element<'_, Message> {
    let scheme = styles::scheme_for(&app.theme());
    let (base_delay, step_delay) = super::motion_durations(&app.config);
    let ctx = PageContext {
        i18n: &app.i18n,
        catalog: &app.catalog,
        engine: &app.engine,
        entrance: &app.entrance,
        scheme,
        now: app.now,
        reveal_enabled: app.config.motion.is_reveal_enabled(),
        base_delay,
        step_delay,
    };

    let page = Scrollable::new(sections::view(&ctx).map(Message::Page))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset()));

    let page_layer = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let scrolled = app.page_offset_y > navbar::SCROLLED_AFTER;
    let navbar_layer = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        scheme,
        scrolled,
    })
    .map(Message::Navbar);

    let mut layers = Stack::new().push(page_layer).push(navbar_layer);

    if let Some(session) = app.engine.lightbox() {
        layers = layers.push(lightbox::view(&session, &app.i18n).map(Message::Lightbox));
    }

    if app.settings_open {
        layers = layers.push(settings_layer(app));
    }

    if app.notifications.has_notifications() {
        layers = layers
            .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));
    }

    layers.into()
}

/// The settings sheet over a dimmed, click-to-close backdrop.
fn settings_layer(app: &App) -> Element<'_, Message> {
    let backdrop = button(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::button::backdrop)
        .on_press(Message::CloseSettings);

    let dim = Container::new(backdrop)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::dim_layer);

    let sheet = Container::new(settings::view_settings(app))
        .width(Length::Fixed(sizing::SETTINGS_SHEET_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::settings_panel);

    let centered = Container::new(sheet)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new().push(dim).push(centered).into()
}
