// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for toasts and form panels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
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
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface for projects and gallery thumbnails.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Flat chip behind technology labels on project cards.
pub fn chip(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg, text) = if is_light {
        (palette::PRIMARY_100, palette::PRIMARY_700)
    } else {
        (palette::PRIMARY_800, palette::PRIMARY_200)
    };

    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind modal overlays.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder surface shown while a thumbnail asset is loading.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
