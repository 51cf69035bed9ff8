// SPDX-License-Identifier: MPL-2.0
//! About section: intro copy, ghost stats, skill bars, design philosophy.

use super::{
    content_band, display_lines, eyebrow, faded, probed, region, Message, PageContext,
    CONTACT_EMAIL,
};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};

/// Proficiency bars, label key and filled percentage.
const SKILL_BARS: [(&str, u16); 6] = [
    ("about-skill-solidworks", 88),
    ("about-skill-assembly", 85),
    ("about-skill-drawing", 82),
    ("about-skill-motion", 78),
    ("about-skill-gdt", 72),
    ("about-skill-fea", 65),
];

const INTEREST_KEYS: [&str; 6] = [
    "about-interest-cad",
    "about-interest-drawings",
    "about-interest-mechanisms",
    "about-interest-robotics",
    "about-interest-manufacturing",
    "about-interest-motion",
];

/// Ghost stat cells, value and label key. Laid out two per row.
const STATS: [(&str, &str); 4] = [
    ("01+", "about-stat-projects"),
    ("03+", "about-stat-software"),
    ("500+", "about-stat-hours"),
    ("12+", "about-stat-skills"),
];

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(intro(ctx))
        .push(skills_and_quote(ctx))
        .into()
}

fn intro<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let lead = Text::new(ctx.i18n.tr("about-lead"))
        .size(typography::TITLE_LG)
        .color(faded(ctx.scheme.text_body, ctx.reveal(region::ABOUT_INTRO, 0)));

    let heading = display_lines(
        ctx,
        region::ABOUT_INTRO,
        &[
            (ctx.i18n.tr("about-title-1"), false),
            (ctx.i18n.tr("about-title-2"), false),
            (ctx.i18n.tr("about-title-3"), true),
            (ctx.i18n.tr("about-title-4"), false),
        ],
        1,
    );

    let lower = Row::new()
        .spacing(spacing::XXL)
        .push(prose(ctx).width(Length::FillPortion(7)))
        .push(stats_grid(ctx).width(Length::FillPortion(5)));

    let body = Column::new()
        .spacing(spacing::XL)
        .push(lead)
        .push(heading)
        .push(horizontal_rule(1).style(styles::container::accent_rule))
        .push(lower);

    let section: Element<'a, Message> = content_band(body)
        .padding([spacing::SECTION, spacing::XXL])
        .into();

    probed(ctx, region::ABOUT_INTRO, section)
}

fn prose<'a>(ctx: &PageContext<'a>) -> Column<'a, Message> {
    let body_reveal = ctx.reveal(region::ABOUT_INTRO, 5);
    let note_reveal = ctx.reveal(region::ABOUT_INTRO, 6);
    let pill_reveal = ctx.reveal(region::ABOUT_INTRO, 7);

    let paragraph = |key: &str, alpha: f32, size: f32| {
        Text::new(ctx.i18n.tr(key)).size(size).color(faded(
            Color {
                a: alpha,
                ..ctx.scheme.text_display
            },
            body_reveal,
        ))
    };

    let note = Row::new()
        .spacing(spacing::MD)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            Text::new("\u{2726}")
                .size(typography::TITLE_MD)
                .color(faded(ctx.scheme.accent, note_reveal)),
        )
        .push(
            Text::new(ctx.i18n.tr("about-note"))
                .size(typography::BODY_SM)
                .color(faded(ctx.scheme.text_faint, note_reveal)),
        );

    let pill = button(
        Text::new(ctx.i18n.tr("about-hire-cta")).size(typography::BODY_SM),
    )
    .padding([spacing::MD, spacing::XL])
    .style(styles::button::pill)
    .on_press(Message::CopyContact(CONTACT_EMAIL));

    Column::new()
        .spacing(spacing::LG)
        .push(paragraph("about-body-1", opacity::TEXT_BRIGHT, typography::BODY_LG))
        .push(paragraph("about-body-2", opacity::TEXT_SOFT, typography::BODY))
        .push(paragraph("about-body-3", 0.8, typography::BODY_LG))
        .push(note)
        .push(if pill_reveal > 0.0 {
            Element::from(pill)
        } else {
            Element::from(Space::new())
        })
}

/// 2x2 grid of oversized ghost numerals with caption labels.
fn stats_grid<'a>(ctx: &PageContext<'a>) -> Column<'a, Message> {
    let mut grid = Column::new();
    for (row_index, pair) in STATS.chunks(2).enumerate() {
        let reveal = ctx.reveal(region::ABOUT_INTRO, 8 + row_index);
        let mut row = Row::new().spacing(spacing::XL);
        for (value, label_key) in pair {
            row = row.push(
                Column::new()
                    .width(Length::FillPortion(1))
                    .padding(spacing::LG)
                    .spacing(spacing::SM)
                    .push(
                        Text::new(*value)
                            .size(typography::DISPLAY_LG)
                            .color(faded(
                                Color {
                                    a: opacity::HAIRLINE,
                                    ..ctx.scheme.text_display
                                },
                                reveal,
                            )),
                    )
                    .push(
                        Text::new(ctx.i18n.tr(label_key))
                            .size(typography::CAPTION)
                            .color(faded(
                                Color {
                                    a: 0.3,
                                    ..ctx.scheme.text_display
                                },
                                reveal,
                            )),
                    ),
            );
        }
        grid = grid
            .push(horizontal_rule(1).style(styles::container::hairline))
            .push(row);
    }
    grid
}

/// Skill bars on a well-tinted band, followed by the philosophy quote.
fn skills_and_quote<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let header_reveal = ctx.reveal(region::ABOUT_SKILLS, 0);
    let mut interests = Column::new().spacing(spacing::SM);
    for key in INTEREST_KEYS {
        interests = interests.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center)
                .push(
                    Text::new("\u{25C6}")
                        .size(typography::MICRO)
                        .color(faded(
                            Color {
                                a: opacity::TEXT_MUTED,
                                ..ctx.scheme.accent
                            },
                            header_reveal,
                        )),
                )
                .push(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::CAPTION)
                        .color(faded(ctx.scheme.text_faint, header_reveal)),
                ),
        );
    }

    let left = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(4))
        .push(eyebrow(ctx, ctx.i18n.tr("about-skills-eyebrow"), header_reveal))
        .push(
            Column::new()
                .push(
                    Text::new(ctx.i18n.tr("about-skills-title-1"))
                        .size(typography::DISPLAY_SM)
                        .color(faded(ctx.scheme.text_display, header_reveal)),
                )
                .push(
                    Text::new(ctx.i18n.tr("about-skills-title-2"))
                        .size(typography::DISPLAY_SM)
                        .color(faded(
                            Color {
                                a: 0.18,
                                ..ctx.scheme.text_display
                            },
                            header_reveal,
                        )),
                ),
        )
        .push(interests);

    let mut bars = Column::new().width(Length::FillPortion(8));
    for (index, (label_key, pct)) in SKILL_BARS.iter().enumerate() {
        let reveal = ctx.reveal(region::ABOUT_SKILLS, index + 1);
        bars = bars
            .push(horizontal_rule(1).style(styles::container::hairline))
            .push(skill_bar(ctx, ctx.i18n.tr(label_key), *pct, reveal));
    }
    bars = bars.push(horizontal_rule(1).style(styles::container::hairline));

    let skills_band = Container::new(
        content_band(
            Row::new()
                .spacing(spacing::XXL)
                .push(left)
                .push(bars),
        )
        .padding([spacing::SECTION, spacing::XXL]),
    )
    .width(Length::Fill)
    .style(styles::container::media_well);

    let quote_reveal = ctx.reveal(region::ABOUT_SKILLS, 7);
    let quote = content_band(
        Column::new()
            .spacing(spacing::LG)
            .push(
                Text::new(ctx.i18n.tr("about-quote"))
                    .size(typography::TITLE_LG)
                    .color(faded(
                        Color {
                            a: opacity::OVERLAY_STRONG,
                            ..ctx.scheme.text_display
                        },
                        quote_reveal,
                    )),
            )
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .align_y(iced::alignment::Vertical::Center)
                    .push(
                        Container::new(Space::new())
                            .width(Length::Fixed(48.0))
                            .height(Length::Fixed(1.0))
                            .style(styles::container::tab_indicator),
                    )
                    .push(eyebrow(ctx, ctx.i18n.tr("about-quote-attribution"), quote_reveal)),
            ),
    )
    .padding([spacing::SECTION, spacing::XXL]);

    let block: Element<'a, Message> = Column::new()
        .width(Length::Fill)
        .push(skills_band)
        .push(horizontal_rule(1).style(styles::container::hairline))
        .push(quote)
        .into();

    probed(ctx, region::ABOUT_SKILLS, block)
}

/// One proficiency row: label, thin filled track, percentage readout.
fn skill_bar<'a>(
    ctx: &PageContext<'a>,
    label: String,
    pct: u16,
    reveal: f32,
) -> Element<'a, Message> {
    let filled = pct.min(100);
    let rest = 100 - filled;

    let track = Row::new()
        .width(Length::Fill)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fixed(2.0))
                .style(styles::container::tab_indicator),
        )
        .push(
            Container::new(horizontal_rule(1).style(styles::container::hairline))
                .width(Length::FillPortion(rest)),
        );

    Row::new()
        .spacing(spacing::LG)
        .padding([spacing::MD, 0.0])
        .align_y(iced::alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(label)
                    .size(typography::CAPTION)
                    .color(faded(ctx.scheme.text_body, reveal)),
            )
            .width(Length::Fixed(144.0)),
        )
        .push(track)
        .push(
            Container::new(
                Text::new(format!("{pct}")).size(typography::BODY_SM).color(
                    faded(
                        Color {
                            a: 0.2,
                            ..ctx.scheme.text_display
                        },
                        reveal,
                    ),
                ),
            )
            .width(Length::Fixed(40.0))
            .align_x(iced::alignment::Horizontal::Right),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bar_percentages_fit_the_track() {
        for (_, pct) in SKILL_BARS {
            assert!(pct > 0 && pct <= 100);
        }
    }

    #[test]
    fn stats_fill_a_two_by_two_grid() {
        assert_eq!(STATS.len() % 2, 0);
    }
}
