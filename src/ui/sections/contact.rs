// SPDX-License-Identifier: MPL-2.0
//! Closing section: contact rails, navigation links, and the bottom bar.
//!
//! External links cannot open a browser from here, so every contact
//! affordance copies its address to the clipboard instead.

use super::{
    content_band, display_lines, faded, marquee_band, probed, region, Message, PageContext,
    Section, CONTACT_EMAIL, SOCIAL_LINKS,
};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::image::Handle;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{Color, Element, Length};

const PORTRAIT_PATH: &str = "assets/content/portrait.jpg";

pub fn view<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(heading(ctx))
        .push(details(ctx))
        .push(marquee_band(
            ctx,
            ctx.i18n.tr("contact-marquee"),
            typography::TITLE_MD,
            opacity::HAIRLINE,
        ))
        .push(bottom_bar(ctx))
        .into()
}

fn heading<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let lead = Text::new(ctx.i18n.tr("contact-lead"))
        .size(typography::TITLE_LG)
        .color(faded(
            Color {
                a: 0.35,
                ..ctx.scheme.text_display
            },
            ctx.reveal(region::CONTACT, 0),
        ));

    let body = Column::new()
        .spacing(spacing::XL)
        .push(lead)
        .push(display_lines(
            ctx,
            region::CONTACT,
            &[
                (ctx.i18n.tr("contact-title-1"), false),
                (ctx.i18n.tr("contact-title-2"), false),
                (ctx.i18n.tr("contact-title-3"), true),
            ],
            1,
        ))
        .push(horizontal_rule(1).style(styles::container::accent_rule));

    let section: Element<'a, Message> = content_band(body)
        .padding(iced::Padding {
            top: spacing::SECTION,
            bottom: spacing::XXL,
            left: spacing::XXL,
            right: spacing::XXL,
        })
        .into();

    probed(ctx, region::CONTACT, section)
}

fn details<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let photo_reveal = ctx.reveal(region::CONTACT_DETAILS, 0);
    let portrait = Column::new()
        .width(Length::FillPortion(5))
        .spacing(spacing::SM)
        .push(
            Container::new(
                Image::new(Handle::from_path(PORTRAIT_PATH))
                    .width(Length::Fixed(420.0))
                    .height(Length::Fixed(540.0)),
            )
            .style(styles::container::image_frame),
        )
        .push(
            Text::new(ctx.i18n.tr("contact-photo-caption"))
                .size(typography::CAPTION)
                .color(faded(ctx.scheme.text_faint, photo_reveal)),
        );

    let rails = Column::new()
        .width(Length::FillPortion(7))
        .spacing(spacing::XXL)
        .push(email_rail(ctx))
        .push(social_rail(ctx))
        .push(nav_rail(ctx));

    let body = Row::new()
        .spacing(spacing::XXL)
        .align_y(iced::alignment::Vertical::Bottom)
        .push(portrait)
        .push(rails);

    let section: Element<'a, Message> = content_band(body)
        .padding(iced::Padding {
            top: 0.0,
            bottom: spacing::SECTION,
            left: spacing::XXL,
            right: spacing::XXL,
        })
        .into();

    probed(ctx, region::CONTACT_DETAILS, section)
}

fn rail_label<'a>(ctx: &PageContext<'a>, label: String, reveal: f32) -> Text<'a> {
    Text::new(label)
        .size(typography::CAPTION)
        .color(faded(ctx.scheme.text_faint, reveal))
}

fn email_rail<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let reveal = ctx.reveal(region::CONTACT_DETAILS, 1);
    Column::new()
        .spacing(spacing::SM)
        .push(rail_label(ctx, ctx.i18n.tr("contact-email-label"), reveal))
        .push(
            button(Text::new(CONTACT_EMAIL).size(typography::DISPLAY_SM))
                .padding(0)
                .style(styles::button::ghost(
                    faded(ctx.scheme.text_display, reveal),
                    ctx.scheme.accent,
                ))
                .on_press(Message::CopyContact(CONTACT_EMAIL)),
        )
        .push(
            Text::new(ctx.i18n.tr("contact-availability"))
                .size(typography::CAPTION)
                .color(faded(ctx.scheme.text_faint, reveal)),
        )
        .into()
}

fn social_rail<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let mut rail = Column::new()
        .spacing(spacing::SM)
        .push(rail_label(
            ctx,
            ctx.i18n.tr("contact-social-label"),
            ctx.reveal(region::CONTACT_DETAILS, 2),
        ));
    for (index, (label, url)) in SOCIAL_LINKS.iter().enumerate() {
        let reveal = ctx.reveal(region::CONTACT_DETAILS, 2 + index);
        let row = Row::new()
            .align_y(iced::alignment::Vertical::Center)
            .push(Text::new(*label).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                Text::new("\u{2197}")
                    .size(typography::BODY_LG)
                    .color(faded(ctx.scheme.text_ghost, reveal)),
            );
        rail = rail
            .push(horizontal_rule(1).style(styles::container::hairline))
            .push(
                button(row.padding([spacing::SM, 0.0]))
                    .width(Length::Fill)
                    .padding(0)
                    .style(styles::button::ghost(
                        faded(ctx.scheme.text_body, reveal),
                        ctx.scheme.text_display,
                    ))
                    .on_press(Message::CopyContact(url)),
            );
    }
    rail.push(horizontal_rule(1).style(styles::container::hairline))
        .into()
}

fn nav_rail<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let reveal = ctx.reveal(region::CONTACT_DETAILS, 5);
    let mut links = Row::new().spacing(spacing::LG);
    for section in [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Skills,
    ] {
        links = links.push(
            button(Text::new(ctx.i18n.tr(section.i18n_key())).size(typography::CAPTION))
                .padding(0)
                .style(styles::button::ghost(
                    faded(
                        Color {
                            a: 0.3,
                            ..ctx.scheme.text_display
                        },
                        reveal,
                    ),
                    ctx.scheme.text_display,
                ))
                .on_press(Message::JumpTo(section)),
        );
    }
    Column::new()
        .spacing(spacing::SM)
        .push(rail_label(ctx, ctx.i18n.tr("contact-nav-label"), reveal))
        .push(links)
        .into()
}

fn bottom_bar<'a>(ctx: &PageContext<'a>) -> Element<'a, Message> {
    let year = chrono::Local::now().year();
    let bar = Row::new()
        .align_y(iced::alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "footer-copyright",
                &[("year", year.to_string())],
            ))
            .size(typography::CAPTION)
            .color(Color {
                a: opacity::TEXT_GHOST * 2.0,
                ..ctx.scheme.text_display
            }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(ctx.i18n.tr("footer-stack"))
                .size(typography::CAPTION)
                .color(Color {
                    a: opacity::TEXT_DISABLED,
                    ..ctx.scheme.text_display
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("footer-back-to-top")).size(typography::CAPTION))
                .padding(0)
                .style(styles::button::ghost(
                    Color {
                        a: opacity::TEXT_GHOST * 2.0,
                        ..ctx.scheme.text_display
                    },
                    ctx.scheme.accent,
                ))
                .on_press(Message::JumpTo(Section::Home)),
        );

    Container::new(
        Column::new()
            .width(Length::Fill)
            .push(horizontal_rule(1).style(styles::container::hairline))
            .push(content_band(bar).padding([spacing::LG, spacing::XXL])),
    )
    .width(Length::Fill)
    .style(styles::container::footer_band)
    .into()
}
