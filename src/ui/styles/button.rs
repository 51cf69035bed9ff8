// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::styles::scheme_for;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ACCENT_500)),
            text_color: palette::BLACK,
            border: Border {
                color: palette::ACCENT_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_400)),
            text_color: palette::BLACK,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Borderless text button, the showcase's default interactive surface.
///
/// Text sits at `rest` color and snaps to `hover` on pointer-over; the
/// background never changes. Used for nav links, card rows, and lightbox
/// navigation.
pub fn ghost(rest: Color, hover: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => rest,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Tab strip label: dimmed at rest, full strength when active or hovered.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = scheme_for(theme);
        let text_color = if active {
            scheme.text_display
        } else {
            match status {
                button::Status::Hovered => scheme.text_body,
                _ => scheme.text_faint,
            }
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Drawing gallery tile: white sheet with a hairline frame, brightened
/// border on hover. The sheets stay paper-white in both themes.
pub fn gallery_tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        _ => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
    };

    button::Style {
        background: Some(Background::Color(WHITE)),
        text_color: palette::GRAY_900,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// White capsule for the hire-me contact link, inverting to accent on hover.
pub fn pill(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BLACK,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible full-surface button used as the lightbox backdrop catcher.
pub fn backdrop(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Option in a toggle group (theme modes, languages): accent fill when
/// chosen, quiet gray otherwise.
pub fn toggle(chosen: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);

        if chosen {
            return button::Style {
                background: Some(Background::Color(palette::ACCENT_500)),
                text_color: palette::BLACK,
                border: Border {
                    color: palette::ACCENT_600,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            };
        }

        let hovered = matches!(status, button::Status::Hovered);
        let background = match (is_light, hovered) {
            (true, false) => palette::GRAY_100,
            (true, true) => palette::GRAY_200,
            (false, false) => palette::GRAY_700,
            (false, true) => palette::GRAY_600,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: if is_light { palette::GRAY_900 } else { WHITE },
            border: Border {
                color: if hovered {
                    palette::ACCENT_500
                } else {
                    palette::GRAY_400
                },
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
