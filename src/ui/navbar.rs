// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar overlaid on the page.
//!
//! Transparent while the page rests at the top, tinted once scrolled.
//! Links jump to section anchors; the gear opens the settings sheet.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::sections::Section;
use crate::ui::styles;
use crate::ui::theme::ColorScheme;
use iced::widget::{button, container, svg, Container, Row, Space, Text};
use iced::{Color, Element, Length, Theme};

/// Scroll offset in logical pixels past which the bar gets its tint.
pub const SCROLLED_AFTER: f32 = 50.0;

const GEAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33h.09a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82v.09a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/></svg>"##;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    /// Whether the page is scrolled past the top band.
    pub scrolled: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    JumpTo(Section),
    OpenSettings,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_SM))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::ghost(ctx.scheme.text_display, ctx.scheme.accent))
        .on_press(Message::JumpTo(Section::Home));

    let soft_link = Color {
        a: opacity::TEXT_SOFT,
        ..ctx.scheme.text_display
    };

    let mut links = Row::new()
        .spacing(spacing::LG)
        .align_y(iced::alignment::Vertical::Center);
    for section in [Section::Projects, Section::About, Section::Contact] {
        links = links.push(
            button(Text::new(ctx.i18n.tr(section.i18n_key())).size(typography::CAPTION))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::ghost(soft_link, ctx.scheme.text_display))
                .on_press(Message::JumpTo(section)),
        );
    }

    let gear = svg::Svg::new(svg::Handle::from_memory(GEAR_SVG.as_bytes()))
        .width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(sizing::ICON_SM))
        .style(styles::overlay::icon(soft_link));
    let settings = button(gear)
        .padding(spacing::XS)
        .style(styles::button::ghost(ctx.scheme.text_display, ctx.scheme.accent))
        .on_press(Message::OpenSettings);

    let bar = Row::new()
        .align_y(iced::alignment::Vertical::Center)
        .spacing(spacing::LG)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(settings);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(iced::alignment::Vertical::Center)
        .padding([0.0, spacing::XL])
        .style(bar_style(ctx.scrolled))
        .into()
}

/// Transparent at the top of the page, ink-tinted with a hairline once
/// scrolled.
fn bar_style(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        if scrolled {
            styles::container::navbar(theme)
        } else {
            container::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Background;

    #[test]
    fn resting_bar_is_transparent() {
        let style = bar_style(false)(&Theme::Dark);
        assert!(style.background.is_none());
    }

    #[test]
    fn scrolled_bar_is_tinted() {
        let style = bar_style(true)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a > 0.0),
            _ => panic!("expected a tinted background"),
        }
    }
}
