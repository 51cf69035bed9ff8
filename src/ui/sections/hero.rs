// SPDX-License-Identifier: MPL-2.0
//! Landing block: oversized title, intro copy, and the availability badge.
//!
//! The hero is revealed at startup rather than by a scroll probe, so its
//! items animate as soon as the window opens.

use super::{content_band, display_lines, faded, marquee_band, region, Message, PageContext, Section};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{Color, Element, Length};

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let lead = Text::new(ctx.i18n.tr("hero-lead"))
        .size(typography::TITLE_LG)
        .color(faded(
            Color {
                a: opacity::TEXT_SOFT,
                ..ctx.scheme.text_display
            },
            ctx.reveal(region::HERO, 0),
        ));

    let heading = display_lines(
        ctx,
        region::HERO,
        &[
            (ctx.i18n.tr("hero-title-1"), false),
            (ctx.i18n.tr("hero-title-2"), false),
            (ctx.i18n.tr("hero-title-3"), true),
        ],
        1,
    );

    let intro_reveal = ctx.reveal(region::HERO, 4);
    let intro = Column::new()
        .spacing(spacing::SM)
        .max_width(460.0)
        .push(
            Text::new(ctx.i18n.tr("hero-description-1"))
                .size(typography::BODY_LG)
                .color(faded(
                    Color {
                        a: opacity::TEXT_BRIGHT,
                        ..ctx.scheme.text_display
                    },
                    intro_reveal,
                )),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-description-2"))
                .size(typography::BODY)
                .color(faded(ctx.scheme.text_body, intro_reveal)),
        )
        .push(Space::new().height(spacing::MD))
        .push(
            button(
                Text::new(ctx.i18n.tr("hero-cta-contact")).size(typography::BODY),
            )
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::primary)
            .on_press(Message::JumpTo(Section::Contact)),
        );

    let today = chrono::Local::now().date_naive();
    let (day, month) = badge_parts(today);
    let badge_reveal = ctx.reveal(region::HERO, 5);
    let badge = Row::new()
        .spacing(spacing::MD)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            Text::new("\u{2726}")
                .size(typography::TITLE_MD)
                .color(faded(ctx.scheme.accent, badge_reveal)),
        )
        .push(
            Column::new()
                .push(
                    Text::new(day)
                        .size(typography::DISPLAY_SM)
                        .color(faded(ctx.scheme.text_display, badge_reveal)),
                )
                .push(
                    Text::new(month)
                        .size(typography::BODY)
                        .color(faded(ctx.scheme.text_body, badge_reveal)),
                ),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-availability"))
                .size(typography::CAPTION)
                .color(faded(ctx.scheme.text_faint, badge_reveal)),
        );

    let lower = Row::new()
        .align_y(iced::alignment::Vertical::Bottom)
        .push(intro)
        .push(Space::new().width(Length::Fill))
        .push(badge);

    let body = Column::new()
        .spacing(spacing::XL)
        .push(lead)
        .push(heading)
        .push(Space::new().height(spacing::XXL))
        .push(lower);

    Column::new()
        .width(Length::Fill)
        .push(
            content_band(body).padding(iced::Padding {
                top: spacing::SECTION + spacing::XL,
                bottom: spacing::SECTION,
                left: spacing::XXL,
                right: spacing::XXL,
            }),
        )
        .push(marquee_band(
            ctx,
            ctx.i18n.tr("hero-marquee"),
            typography::CAPTION,
            opacity::TEXT_MUTED,
        ))
        .into()
}

/// Zero-padded day and lowercase short month for the availability badge.
fn badge_parts(date: chrono::NaiveDate) -> (String, String) {
    (
        format!("{:02}", date.day()),
        date.format("%b").to_string().to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_parts_pad_and_lowercase() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(badge_parts(date), ("03".to_string(), "aug".to_string()));
    }
}
