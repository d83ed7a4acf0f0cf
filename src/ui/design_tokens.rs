// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every portfolio view.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component and layout widths
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_600: Color = Color::from_rgb(0.29, 0.33, 0.39);

    /// About section fallback when no background image is configured.
    pub const PINK_900: Color = Color::from_rgb(0.51, 0.09, 0.30);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Lightbox backdrop.
    pub const OVERLAY_BACKDROP: f32 = 0.8;
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
    pub const SECTION: f32 = 112.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Below this window width galleries collapse to a single column.
    pub const NARROW_BREAKPOINT: f32 = 768.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    /// About section, sized to roughly one window.
    pub const HERO_HEIGHT: f32 = 640.0;

    /// Widest gallery group (three columns).
    pub const GALLERY_MAX_WIDTH: f32 = 1152.0;
    /// Second, centered group of a split gallery (two columns).
    pub const GALLERY_SPLIT_MAX_WIDTH: f32 = 896.0;
    /// Enlarged image panel.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 896.0;

    pub const LOGO_MAX_WIDTH: f32 = 448.0;
    pub const BIO_MAX_WIDTH: f32 = 576.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headings (greeting, projects heading).
    pub const DISPLAY: f32 = 72.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    pub const XL: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_BACKDROP > opacity::OVERLAY_MEDIUM);

    assert!(sizing::GALLERY_MAX_WIDTH > sizing::GALLERY_SPLIT_MAX_WIDTH);
    assert!(sizing::NARROW_BREAKPOINT < sizing::GALLERY_MAX_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
};
