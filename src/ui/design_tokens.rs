// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the single source of colors, spacing and sizes.
//!
//! ```
//! use pixflow::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD; // 16px
//! ```

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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Night background of the listing (#0b0f1a)
    pub const NIGHT: Color = Color::from_rgb(0.043, 0.059, 0.102);

    // Neon accents
    pub const CORAL: Color = Color::from_rgb(1.0, 0.420, 0.420); // #FF6B6B
    pub const PEACH: Color = Color::from_rgb(1.0, 0.835, 0.420); // #FFD56B
    pub const TURQUOISE: Color = Color::from_rgb(0.282, 0.812, 0.796); // #48CFCB
    pub const VIOLET: Color = Color::from_rgb(0.643, 0.420, 0.949); // #A46BF2

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const GLASS: f32 = 0.05;
    pub const GLASS_BORDER: f32 = 0.15;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const TEXT_MUTED: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const TEXT_SECONDARY: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SPINNER: f32 = 48.0;

    pub const HERO_HEIGHT: f32 = 320.0;
    pub const SEARCH_WIDTH: f32 = 720.0;
    pub const CONTENT_WIDTH: f32 = 1152.0;

    /// Cover image height inside an event card.
    pub const CARD_COVER_HEIGHT: f32 = 180.0;
    /// Photo tile image height inside the gallery.
    pub const TILE_IMAGE_HEIGHT: f32 = 224.0;
    pub const TILE_WIDTH: f32 = 240.0;

    pub const MODAL_MAX_WIDTH: f32 = 1152.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 56.0;
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const XXL: f32 = 24.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
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

    /// Violet glow behind the search button.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.5,
            ..palette::VIOLET
        },
        offset: Vector::ZERO,
        blur_radius: 20.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS < opacity::GLASS_BORDER);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::TILE_WIDTH > 0.0);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
