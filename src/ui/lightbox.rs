// SPDX-License-Identifier: MPL-2.0
//! Modal image overlay with cyclic navigation.
//!
//! Renders above the whole page while a lightbox session is open. The
//! backdrop click and the close control both dismiss; the arrows and a
//! click on the image itself step through the sequence, wrapping at both
//! ends.

use crate::engine::LightboxView;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image::Handle, mouse_area, Column, Container, Image, Row, Space,
    Stack, Text};
use iced::{Color, Element, Length};

/// Messages emitted by the lightbox chrome.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Close,
    Next,
    Previous,
}

pub fn view<'a>(session: &LightboxView<'_>, i18n: &I18n) -> Element<'a, Message> {
    let backdrop = button(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::button::backdrop)
        .on_press(Message::Close);

    let close = button(Text::new(i18n.tr("lightbox-close")).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::ghost(
            Color {
                a: opacity::TEXT_SOFT,
                ..palette::WHITE
            },
            palette::WHITE,
        ))
        .on_press(Message::Close);

    let image = mouse_area(
        Image::new(Handle::from_path(session.image.to_path()))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LIGHTBOX_MAX_HEIGHT)),
    )
    .interaction(iced::mouse::Interaction::Pointer)
    .on_release(Message::Next);

    let nav_button = |label: String, message: Message| {
        button(Text::new(label).size(typography::BODY_SM))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::ghost(
                Color {
                    a: opacity::TEXT_MUTED,
                    ..palette::WHITE
                },
                palette::WHITE,
            ))
            .on_press(message)
    };

    let counter = Container::new(
        Text::new(session.counter_label())
            .size(typography::CAPTION)
            .color(Color {
                a: opacity::TEXT_MUTED,
                ..palette::WHITE
            }),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let controls = Row::new()
        .align_y(iced::alignment::Vertical::Center)
        .push(nav_button(i18n.tr("lightbox-previous"), Message::Previous))
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(nav_button(i18n.tr("lightbox-next"), Message::Next));

    let panel = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close),
        )
        .push(image)
        .push(controls);

    let centered = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(spacing::XL);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(backdrop)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .push(centered)
        .into()
}
