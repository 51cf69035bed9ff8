// SPDX-License-Identifier: MPL-2.0
//! Container and separator styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::styles::scheme_for;
use iced::widget::{container, rule};
use iced::{Background, Border, Color, Theme};

/// Page background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_page)),
        text_color: Some(scheme.text_display),
        ..Default::default()
    }
}

/// Expanded case-detail panel, one step lighter than the page.
pub fn panel(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_panel)),
        ..Default::default()
    }
}

/// Media well inside a case panel: framed area the tab content sits in.
pub fn media_well(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_well)),
        border: Border {
            color: scheme.hairline,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Darkest band of the page, used by the footer and philosophy panel.
pub fn footer_band(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_footer)),
        ..Default::default()
    }
}

/// Fixed navigation bar, slightly translucent over the page.
pub fn navbar(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..scheme.surface_page
        })),
        ..Default::default()
    }
}

/// Outlined tag chip in accent color. Non-interactive.
pub fn tag(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        text_color: Some(scheme.accent),
        border: Border {
            color: Color {
                a: 0.35,
                ..scheme.accent
            },
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Frame behind card and tab images while they load.
pub fn image_frame(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_well)),
        ..Default::default()
    }
}

/// Generic panel surface used for the settings overlay.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn settings_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hairline rule between cards and sections.
pub fn hairline(theme: &Theme) -> rule::Style {
    let scheme = scheme_for(theme);
    rule::Style {
        color: scheme.hairline,
        radius: radius::NONE.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Short accent rule under headings.
pub fn accent_rule(theme: &Theme) -> rule::Style {
    let scheme = scheme_for(theme);
    rule::Style {
        color: scheme.accent,
        radius: radius::NONE.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Underline marker for the active media tab.
pub fn tab_indicator(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.accent)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_near_black_ink_in_dark_theme() {
        let style = page(&Theme::Dark);
        if let Some(Background::Color(bg)) = style.background {
            assert!(bg.r < 0.05);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn tag_chip_has_accent_border() {
        let style = tag(&Theme::Dark);
        assert!(style.border.color.r > 0.9);
        assert!((style.border.color.a - 0.35).abs() < f32::EPSILON);
    }

    #[test]
    fn hairline_is_subtle() {
        let style = hairline(&Theme::Dark);
        assert!(style.color.a <= opacity::TEXT_GHOST);
    }

    #[test]
    fn navbar_is_translucent() {
        let style = navbar(&Theme::Dark);
        if let Some(Background::Color(bg)) = style.background {
            assert!(bg.a < 1.0);
            assert!(bg.a > 0.9);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn footer_band_is_darker_than_page() {
        let page_style = page(&Theme::Dark);
        let footer_style = footer_band(&Theme::Dark);
        let (Some(Background::Color(p)), Some(Background::Color(f))) =
            (page_style.background, footer_style.background)
        else {
            panic!("Expected background colors");
        };
        assert!(f.r < p.r);
    }

    #[test]
    fn settings_panel_derives_from_iced_palette() {
        let style = settings_panel(&Theme::Dark);
        assert!(style.background.is_some());
    }
}
