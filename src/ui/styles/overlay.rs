// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox, the settings sheet, and their chrome.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use crate::ui::styles::scheme_for;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

/// Near-opaque backdrop behind the lightbox. The page underneath must read
/// as dismissed, not dimmed.
pub fn backdrop(theme: &Theme) -> container::Style {
    let scheme = scheme_for(theme);
    container::Style {
        background: Some(Background::Color(scheme.overlay_backdrop)),
        text_color: Some(scheme.overlay_text),
        ..Default::default()
    }
}

/// Dimming layer behind the settings sheet, lighter than the lightbox
/// backdrop so the page stays recognizable.
pub fn dim_layer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Generic style for overlay indicators like the image position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Style for tinted SVG icons in overlays and the navbar.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_nearly_opaque() {
        let style = backdrop(&Theme::Dark);
        if let Some(Background::Color(bg)) = style.background {
            assert!(bg.a > 0.9);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn dim_layer_is_lighter_than_backdrop() {
        let dim = dim_layer(&Theme::Dark);
        let back = backdrop(&Theme::Dark);
        let (Some(Background::Color(d)), Some(Background::Color(b))) =
            (dim.background, back.background)
        else {
            panic!("Expected background colors");
        };
        assert!(d.a < b.a);
    }
}
