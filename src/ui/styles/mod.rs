// SPDX-License-Identifier: MPL-2.0
//! Styles centralisés pour tous les composants UI.

pub mod button;
pub mod container;
pub mod overlay;

use crate::ui::theme::ColorScheme;
use iced::Theme;

/// Resolves the color scheme matching the active Iced theme.
///
/// Style functions only see the Iced `Theme`, so the scheme is rebuilt from
/// it; `ColorScheme` construction is a handful of const colors.
#[must_use]
pub fn scheme_for(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_follows_theme_variant() {
        let dark = scheme_for(&Theme::Dark);
        let light = scheme_for(&Theme::Light);
        assert!(dark.surface_page.r < light.surface_page.r);
    }
}
