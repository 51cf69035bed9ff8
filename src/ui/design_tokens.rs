// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_vitrine::ui::design_tokens::{palette, opacity};
use iced::Color;

// Faint body text over the page background
let faint = Color {
    a: opacity::TEXT_FAINT,
    ..palette::WHITE
};
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

//! Design tokens centralisés suivant le Design Tokens W3C standard.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_600: Color = Color::from_rgb(0.35, 0.35, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    // Ink scale - the page's near-black surfaces, darkest first
    pub const INK_FOOTER: Color = Color::from_rgb(0.008, 0.008, 0.008);
    pub const INK_PAGE: Color = Color::from_rgb(0.02, 0.02, 0.02);
    pub const INK_WELL: Color = Color::from_rgb(0.027, 0.027, 0.027);
    pub const INK_PANEL: Color = Color::from_rgb(0.04, 0.04, 0.04);

    // Brand colors (industrial amber scale)
    pub const ACCENT_300: Color = Color::from_rgb(0.992, 0.624, 0.282);
    pub const ACCENT_400: Color = Color::from_rgb(0.984, 0.541, 0.184);
    pub const ACCENT_500: Color = Color::from_rgb(0.976, 0.451, 0.086); // Primary amber
    pub const ACCENT_600: Color = Color::from_rgb(0.859, 0.365, 0.047);
    pub const ACCENT_700: Color = Color::from_rgb(0.702, 0.275, 0.031);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Hairline separators over dark surfaces
    pub const HAIRLINE: f32 = 0.08;
    /// Ghosted display text (oversized muted headings)
    pub const TEXT_GHOST: f32 = 0.10;
    /// Disabled and placeholder text
    pub const TEXT_DISABLED: f32 = 0.15;
    /// Faint labels, eyebrow captions
    pub const TEXT_FAINT: f32 = 0.25;
    /// Muted body copy at rest
    pub const TEXT_MUTED: f32 = 0.40;
    /// Soft body copy, quotes
    pub const TEXT_SOFT: f32 = 0.55;
    /// Body copy under hover emphasis
    pub const TEXT_BRIGHT: f32 = 0.65;

    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Lightbox backdrop; nearly opaque so the page reads as dismissed
    pub const OVERLAY_BACKDROP: f32 = 0.97;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    /// Section padding on the vertical axis
    pub const SECTION: f32 = 128.0; // 16 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const TAB_HEIGHT: f32 = 44.0;

    // Content bands
    pub const CONTENT_MAX_WIDTH: f32 = 1600.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 360.0;
    pub const MEDIA_WELL_MIN_HEIGHT: f32 = 400.0;
    pub const MEDIA_IMAGE_MAX_HEIGHT: f32 = 500.0;
    pub const GALLERY_TILE_WIDTH: f32 = 220.0;
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1152.0;
    pub const LIGHTBOX_MAX_HEIGHT: f32 = 740.0;

    // Overlays
    pub const SETTINGS_SHEET_WIDTH: f32 = 480.0;

    // Notifications
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the showcase's condensed-display hierarchy.
    //!
    //! Display sizes carry the oversized section headings; titles and body
    //! sizes follow Material Design 3 type scale principles.

    /// Hero and section display headings
    pub const DISPLAY_XL: f32 = 96.0;

    /// Card titles inside sections
    pub const DISPLAY_LG: f32 = 64.0;

    /// Oversized pull quotes
    pub const DISPLAY_SM: f32 = 34.0;

    /// Large title - Overlay headings (Settings, lightbox)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers inside panels
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Eyebrow labels, counters, tags
    pub const CAPTION: f32 = 12.0;

    /// Micro caption - Tracking labels under images
    pub const MICRO: f32 = 11.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Hairline separators, tag outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HAIRLINE < opacity::TEXT_GHOST);
    assert!(opacity::TEXT_FAINT < opacity::TEXT_MUTED);
    assert!(opacity::TEXT_MUTED < opacity::TEXT_SOFT);
    assert!(opacity::TEXT_SOFT < opacity::TEXT_BRIGHT);
    assert!(opacity::OVERLAY_BACKDROP > opacity::OVERLAY_STRONG);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Ink scale ordering: footer darkest, panel lightest
    assert!(palette::INK_FOOTER.r < palette::INK_PAGE.r);
    assert!(palette::INK_PAGE.r < palette::INK_WELL.r);
    assert!(palette::INK_WELL.r < palette::INK_PANEL.r);

    // Typography validation
    assert!(typography::DISPLAY_XL > typography::DISPLAY_LG);
    assert!(typography::DISPLAY_LG > typography::DISPLAY_SM);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(typography::CAPTION > typography::MICRO);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::ACCENT_500.r >= 0.0 && palette::ACCENT_500.r <= 1.0);
};
