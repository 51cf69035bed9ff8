// SPDX-License-Identifier: MPL-2.0
//! Competency tiles with expandable detail copy, plus the mindset quote.

use super::{content_band, display_lines, eyebrow, faded, marquee_band, probed, region, Message,
    PageContext};
use crate::content::SkillEntry;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{Color, Element, Length};

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let header_reveal = ctx.reveal(region::SKILLS, 0);
    let header = Column::new()
        .spacing(spacing::XL)
        .push(eyebrow(ctx, ctx.i18n.tr("skills-eyebrow"), header_reveal))
        .push(display_lines(
            ctx,
            region::SKILLS,
            &[
                (ctx.i18n.tr("skills-title-1"), false),
                (ctx.i18n.tr("skills-title-2"), true),
            ],
            1,
        ))
        .push(horizontal_rule(1).style(styles::container::accent_rule));

    let mut tiles = Column::new().width(Length::Fill);
    for (index, skill) in ctx.catalog.skills().iter().enumerate() {
        tiles = tiles.push(tile(ctx, skill, ctx.reveal(region::SKILLS, index + 3)));
    }

    let body = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(header)
        .push(tiles);

    let main: Element<'a, Message> = content_band(body)
        .padding([spacing::SECTION, spacing::XXL])
        .into();

    Column::new()
        .width(Length::Fill)
        .push(probed(ctx, region::SKILLS, main))
        .push(quote_band(ctx))
        .into()
}

/// One competency tile: copy on the left, still image on the right. The
/// whole tile is a disclosure button; a second click collapses it.
fn tile<'a>(ctx: &PageContext<'a>, skill: &'a SkillEntry, reveal: f32) -> Element<'a, Message> {
    let expanded = ctx.engine.is_expanded(&skill.id);

    // Title inherits the ghost button color so it brightens on hover.
    let copy = Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(1))
        .push(Text::new(skill.title.as_str()).size(typography::DISPLAY_SM))
        .push(
            Text::new(skill.subtitle.as_str())
                .size(typography::CAPTION)
                .color(faded(ctx.scheme.text_faint, reveal)),
        )
        .push(
            Container::new(Space::new())
                .width(Length::Fixed(80.0))
                .height(Length::Fixed(1.0))
                .style(styles::container::tab_indicator),
        )
        .push(
            Text::new(skill.description.as_str())
                .size(typography::BODY)
                .color(faded(ctx.scheme.text_body, reveal)),
        );

    let still = Container::new(
        Image::new(Handle::from_path(skill.image.to_path()))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT)),
    )
    .width(Length::FillPortion(1))
    .style(styles::container::image_frame);

    let mut body = Column::new().spacing(spacing::LG).push(
        Row::new()
            .spacing(spacing::XXL)
            .align_y(iced::alignment::Vertical::Center)
            .push(copy)
            .push(still),
    );

    if expanded {
        body = body.push(
            Text::new(ctx.i18n.tr_with_args(
                "skills-detail",
                &[("topic", skill.title.to_lowercase())],
            ))
            .size(typography::BODY_SM)
            .color(Color {
                a: 0.35,
                ..ctx.scheme.text_display
            }),
        );
    }

    Column::new()
        .push(
            button(body.padding([spacing::XL, 0.0]))
                .width(Length::Fill)
                .padding(0)
                .style(styles::button::ghost(
                    faded(ctx.scheme.text_display, reveal),
                    ctx.scheme.accent,
                ))
                .on_press(Message::ToggleItem(skill.id.clone())),
        )
        .push(horizontal_rule(1).style(styles::container::hairline))
        .into()
}

/// Mindset quote on a footer-dark band, then the ghosted marquee strip.
fn quote_band<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let quote_reveal = ctx.reveal(region::SKILLS_QUOTE, 0);
    let quote = Column::new()
        .spacing(spacing::LG)
        .push(
            Text::new("\u{2726}")
                .size(typography::TITLE_LG)
                .color(faded(
                    Color {
                        a: opacity::OVERLAY_STRONG,
                        ..ctx.scheme.accent
                    },
                    quote_reveal,
                )),
        )
        .push(
            Text::new(ctx.i18n.tr("skills-quote"))
                .size(typography::TITLE_LG)
                .color(faded(
                    Color {
                        a: opacity::TEXT_SOFT,
                        ..ctx.scheme.text_display
                    },
                    quote_reveal,
                )),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(iced::alignment::Vertical::Center)
                .push(
                    Container::new(Space::new())
                        .width(Length::Fixed(48.0))
                        .height(Length::Fixed(1.0))
                        .style(styles::container::tab_indicator),
                )
                .push(
                    Text::new(ctx.i18n.tr("skills-quote-attribution"))
                        .size(typography::CAPTION)
                        .color(faded(ctx.scheme.text_ghost, quote_reveal)),
                ),
        );

    let band: Element<'a, Message> = Column::new()
        .width(Length::Fill)
        .push(horizontal_rule(1).style(styles::container::hairline))
        .push(
            Container::new(
                content_band(quote).padding([spacing::SECTION, spacing::XXL]),
            )
            .width(Length::Fill)
            .style(styles::container::footer_band),
        )
        .push(marquee_band(
            ctx,
            ctx.i18n.tr("skills-marquee"),
            typography::TITLE_MD,
            faded_marquee_alpha(ctx.reveal(region::SKILLS_QUOTE, 1)),
        ))
        .into();

    probed(ctx, region::SKILLS_QUOTE, band)
}

/// Marquee text alpha, scaled by its reveal fraction.
fn faded_marquee_alpha(reveal: f32) -> f32 {
    opacity::HAIRLINE * reveal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_alpha_stays_ghosted() {
        assert!(faded_marquee_alpha(1.0) <= opacity::TEXT_GHOST);
        assert_eq!(faded_marquee_alpha(0.0), 0.0);
    }
}
