// SPDX-License-Identifier: MPL-2.0
//! Project showcase: disclosure cards, tabbed media views, gallery tiles.

use super::{content_band, eyebrow, faded, probed, region, Message, PageContext};
use crate::content::{ImageRef, ShowcaseItem};
use crate::engine::{resolve_media, MediaTab, TabMedia};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{Color, Element, Length};

/// Sheets per gallery row.
const GALLERY_COLUMNS: usize = 5;

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let header_reveal = ctx.reveal(region::SHOWCASE, 0);
    let header = Column::new()
        .spacing(spacing::SM)
        .push(eyebrow(ctx, ctx.i18n.tr("showcase-eyebrow"), header_reveal))
        .push(
            Row::new()
                .align_y(iced::alignment::Vertical::Bottom)
                .push(
                    Text::new(ctx.i18n.tr("showcase-heading"))
                        .size(typography::DISPLAY_LG)
                        .color(faded(ctx.scheme.text_display, header_reveal)),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(format!("{:02}", ctx.catalog.items().len()))
                        .size(typography::TITLE_LG)
                        .color(faded(ctx.scheme.text_ghost, header_reveal)),
                ),
        )
        .push(horizontal_rule(2).style(styles::container::accent_rule));

    let mut cards = Column::new().width(Length::Fill);
    for (index, item) in ctx.catalog.items().iter().enumerate() {
        let reveal = ctx.reveal(region::SHOWCASE, index + 1);
        cards = cards
            .push(horizontal_rule(1).style(styles::container::hairline))
            .push(card(ctx, item, index, reveal));
        if item.is_available() && ctx.engine.is_expanded(&item.id) {
            cards = cards.push(case_detail(ctx, item));
        }
    }
    cards = cards.push(horizontal_rule(1).style(styles::container::hairline));

    let body = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(header)
        .push(cards);

    let section: Element<'a, Message> = content_band(body)
        .padding([spacing::SECTION, spacing::XXL])
        .into();

    probed(ctx, region::SHOWCASE, section)
}

/// One catalog row. Available items render as a full-width disclosure
/// button; placeholder slots render inert with dimmed text.
fn card<'a>(
    ctx: &PageContext<'a>,
    item: &'a ShowcaseItem,
    index: usize,
    reveal: f32,
) -> Element<'a, Message> {
    let expanded = item.is_available() && ctx.engine.is_expanded(&item.id);
    let title_alpha = if item.is_available() {
        opacity::OPAQUE
    } else {
        opacity::TEXT_DISABLED
    };
    let meta_alpha = if item.is_available() {
        opacity::TEXT_MUTED
    } else {
        opacity::TEXT_DISABLED
    };

    let number = Text::new(format!("{:02}", index + 1))
        .size(typography::TITLE_LG)
        .color(faded(ctx.scheme.text_ghost, reveal));

    // The title carries no explicit color on available rows, so it inherits
    // the ghost button's status color and brightens on hover.
    let mut title = Text::new(item.title.as_str()).size(typography::DISPLAY_SM);
    if !item.is_available() {
        title = title.color(faded(
            Color {
                a: title_alpha,
                ..ctx.scheme.text_display
            },
            reveal,
        ));
    }

    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(
            Text::new(item.subtitle.as_str())
                .size(typography::CAPTION)
                .color(faded(
                    Color {
                        a: meta_alpha,
                        ..ctx.scheme.text_display
                    },
                    reveal,
                )),
        );

    let meta = Column::new()
        .align_x(iced::alignment::Horizontal::Right)
        .spacing(spacing::XXS)
        .push(
            Text::new(item.year.as_str())
                .size(typography::BODY_SM)
                .color(faded(
                    Color {
                        a: meta_alpha,
                        ..ctx.scheme.text_display
                    },
                    reveal,
                )),
        )
        .push(
            Text::new(item.category.as_str())
                .size(typography::CAPTION)
                .color(faded(ctx.scheme.text_faint, reveal)),
        );

    let mut row = Row::new()
        .spacing(spacing::XL)
        .align_y(iced::alignment::Vertical::Center)
        .push(number)
        .push(heading)
        .push(Space::new().width(Length::Fill))
        .push(meta);

    if item.is_available() {
        let glyph = if expanded { "\u{25B4}" } else { "\u{25BE}" };
        row = row.push(
            Text::new(glyph)
                .size(typography::TITLE_MD)
                .color(faded(ctx.scheme.accent, reveal)),
        );
        button(row.padding([spacing::LG, spacing::MD]))
            .width(Length::Fill)
            .padding(0)
            .style(styles::button::ghost(
                faded(ctx.scheme.text_display, reveal),
                ctx.scheme.accent,
            ))
            .on_press(Message::ToggleItem(item.id.clone()))
            .into()
    } else {
        Container::new(row.padding([spacing::LG, spacing::MD]))
            .width(Length::Fill)
            .into()
    }
}

/// Expanded case panel: tags, problem and solution copy, the media tab
/// strip, and the resolved media well.
fn case_detail<'a>(ctx: &PageContext<'a>, item: &'a ShowcaseItem) -> Element<'a, Message> {
    let mut tags = Row::new().spacing(spacing::XS);
    for tag in &item.tags {
        tags = tags.push(
            Container::new(
                Text::new(tag.as_str()).size(typography::CAPTION).color(Color {
                    a: opacity::TEXT_SOFT,
                    ..ctx.scheme.text_display
                }),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::tag),
        );
    }

    let brief = Row::new()
        .spacing(spacing::XXL)
        .push(brief_column(
            ctx,
            ctx.i18n.tr("showcase-problem-label"),
            item.problem.as_str(),
        ))
        .push(brief_column(
            ctx,
            ctx.i18n.tr("showcase-solution-label"),
            item.solution.as_str(),
        ));

    let detail = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(tags)
        .push(brief)
        .push(tab_strip(ctx, item))
        .push(
            Container::new(media_view(ctx, item))
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .padding(spacing::LG)
                .style(styles::container::media_well),
        )
        .push(specs_row(ctx, item));

    let panel = Container::new(detail)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .padding(iced::Padding::ZERO.bottom(spacing::LG))
        .into()
}

/// Label over copy, used for the problem and solution briefs.
fn brief_column<'a>(ctx: &PageContext<'a>, label: String, copy: &'a str) -> Column<'a, Message> {
    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(ctx.scheme.accent),
        )
        .push(Text::new(copy).size(typography::BODY).color(Color {
            a: opacity::TEXT_BRIGHT,
            ..ctx.scheme.text_display
        }))
}

fn tab_strip<'a>(ctx: &PageContext<'a>, item: &'a ShowcaseItem) -> Element<'a, Message> {
    let active = ctx.engine.active_tab(&item.id);
    let mut strip = Row::new().spacing(spacing::LG);
    for tab in MediaTab::ALL {
        let is_active = tab == active;
        let underline = if is_active {
            horizontal_rule(2).style(styles::container::accent_rule)
        } else {
            horizontal_rule(2).style(styles::container::hairline)
        };
        strip = strip.push(
            Column::new()
                .push(
                    button(Text::new(ctx.i18n.tr(tab.i18n_key())).size(typography::BODY_SM))
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::button::tab(is_active))
                        .on_press(Message::SelectTab(item.id.clone(), tab)),
                )
                .push(underline),
        );
    }
    strip.into()
}

/// Resolves the active tab into its media presentation.
fn media_view<'a>(ctx: &PageContext<'a>, item: &'a ShowcaseItem) -> Element<'a, Message> {
    match resolve_media(ctx.engine.active_tab(&item.id), item) {
        TabMedia::Image(image) => button(
            Image::new(Handle::from_path(image.to_path()))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MEDIA_IMAGE_MAX_HEIGHT)),
        )
        .padding(spacing::XXS)
        .style(styles::button::gallery_tile)
        .on_press(Message::OpenLightbox {
            images: vec![image.clone()],
            start: 0,
        })
        .into(),
        TabMedia::Clip(clip) => well_panel(
            Column::new()
                .align_x(iced::alignment::Horizontal::Center)
                .spacing(spacing::SM)
                .push(
                    Text::new("\u{25B6}")
                        .size(typography::DISPLAY_SM)
                        .color(ctx.scheme.accent),
                )
                .push(
                    Text::new(clip.caption())
                        .size(typography::BODY)
                        .color(ctx.scheme.text_display),
                )
                .push(
                    Text::new(ctx.i18n.tr("media-motion-hint"))
                        .size(typography::CAPTION)
                        .color(ctx.scheme.text_body),
                )
                .into(),
        ),
        TabMedia::ClipUnavailable => well_panel(
            Text::new(ctx.i18n.tr("media-motion-unavailable"))
                .size(typography::BODY)
                .color(ctx.scheme.text_body)
                .into(),
        ),
        TabMedia::Gallery(images) => gallery_grid(images),
        TabMedia::GalleryPending => well_panel(
            Text::new(ctx.i18n.tr("media-drawings-pending"))
                .size(typography::BODY)
                .color(ctx.scheme.text_body)
                .into(),
        ),
    }
}

/// Fixed-height centered well for non-image tab states.
fn well_panel(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MEDIA_WELL_MIN_HEIGHT))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

/// Drawing sheets laid out in fixed-width rows. Every tile opens the
/// lightbox over the full sequence, starting at the clicked sheet.
fn gallery_grid(images: &[ImageRef]) -> Element<'_, Message> {
    let mut grid = Column::new().spacing(spacing::SM);
    for (row_index, chunk) in images.chunks(GALLERY_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::SM);
        for (col_index, sheet) in chunk.iter().enumerate() {
            let index = row_index * GALLERY_COLUMNS + col_index;
            row = row.push(
                button(
                    Column::new()
                        .spacing(spacing::XXS)
                        .align_x(iced::alignment::Horizontal::Center)
                        .push(
                            Image::new(Handle::from_path(sheet.to_path()))
                                .width(Length::Fixed(sizing::GALLERY_TILE_WIDTH)),
                        )
                        .push(
                            Text::new(format!("{:02}", index + 1)).size(typography::CAPTION),
                        ),
                )
                .padding(spacing::XXS)
                .style(styles::button::gallery_tile)
                .on_press(Message::OpenLightbox {
                    images: images.to_vec(),
                    start: index,
                }),
            );
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn specs_row<'a>(ctx: &PageContext<'a>, item: &'a ShowcaseItem) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for spec in &item.specs {
        row = row.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(iced::alignment::Vertical::Center)
                .push(
                    Text::new("\u{25C6}")
                        .size(typography::MICRO)
                        .color(ctx.scheme.accent),
                )
                .push(Text::new(spec.as_str()).size(typography::CAPTION).color(
                    Color {
                        a: opacity::TEXT_SOFT,
                        ..ctx.scheme.text_display
                    },
                )),
        );
    }
    row.into()
}
