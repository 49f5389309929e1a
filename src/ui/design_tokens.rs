// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! One flat constant set per concern: palette, opacity, spacing (8px
//! grid), sizing, typography, border widths, radii, and shadows. Style
//! functions compose these instead of hard-coding values, so a token
//! change propagates to every surface at once.

use iced::Color;

/// Base color palette: a gray ramp, a teal brand ramp, and the four
/// semantic accents used by notifications.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.31, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.42, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.74, 0.77, 0.79);
    pub const GRAY_100: Color = Color::from_rgb(0.86, 0.88, 0.9);

    // Teal brand ramp, lightest to darkest
    pub const PRIMARY_100: Color = Color::from_rgb(0.84, 0.97, 0.98);
    pub const PRIMARY_200: Color = Color::from_rgb(0.65, 0.92, 0.95);
    pub const PRIMARY_400: Color = Color::from_rgb(0.25, 0.78, 0.85);
    pub const PRIMARY_500: Color = Color::from_rgb(0.08, 0.65, 0.74);
    pub const PRIMARY_600: Color = Color::from_rgb(0.05, 0.54, 0.62);
    pub const PRIMARY_700: Color = Color::from_rgb(0.04, 0.43, 0.5);
    pub const PRIMARY_800: Color = Color::from_rgb(0.03, 0.33, 0.39);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.22, 0.21);
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.63, 0.13);
    pub const SUCCESS_500: Color = Color::from_rgb(0.25, 0.69, 0.42);
    pub const INFO_500: Color = Color::from_rgb(0.36, 0.57, 0.96);
}

/// Alpha levels for overlays and translucent surfaces.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Near-opaque panel surfaces, toasts included.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing scale on an 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

/// Fixed component dimensions.
pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Widest a section's content column grows before centering kicks in.
    pub const SECTION_MAX_WIDTH: f32 = 960.0;
    pub const AVATAR: f32 = 128.0;
    pub const PROJECT_CARD_WIDTH: f32 = 280.0;
    pub const PROJECT_CARD_IMAGE_HEIGHT: f32 = 150.0;
    pub const THUMBNAIL_HEIGHT: f32 = 170.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const LIGHTBOX_NAV_BUTTON: f32 = 48.0;
    pub const LIGHTBOX_IMAGE_MAX_HEIGHT: f32 = 620.0;
}

/// Font size ramp, titles down to captions.
pub mod typography {
    /// Hero name at the top of the page.
    pub const TITLE_XL: f32 = 40.0;
    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Card titles.
    pub const TITLE_MD: f32 = 20.0;
    /// Group headers inside cards.
    pub const TITLE_SM: f32 = 18.0;
    /// Form inputs and emphasized copy.
    pub const BODY_LG: f32 = 16.0;
    /// Default text size.
    pub const BODY: f32 = 14.0;
    /// Hints and secondary labels.
    pub const BODY_SM: f32 = 13.0;
    /// Badges and timestamps.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent stripe.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Large enough to render any box as a pill.
    pub const FULL: f32 = 9999.0;
}

/// Drop shadows at three elevations.
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

// The scales must stay ordered; catch regressions at compile time.
const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::SECTION_MAX_WIDTH > sizing::PROJECT_CARD_WIDTH);

    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
