// SPDX-License-Identifier: MPL-2.0
//! Button styles for the page sections and the lightbox chrome.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Assemble a filled style with a one-pixel border.
fn filled(bg: Color, text_color: Color, border_color: Color, rad: f32, drop: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: rad.into(),
        },
        shadow: drop,
        snap: true,
    }
}

/// Grayed-out look shared by the filled variants while disabled.
fn disabled(theme: &Theme, rad: f32) -> button::Style {
    let bg = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };
    filled(bg, palette::GRAY_400, palette::GRAY_400, rad, shadow::NONE)
}

/// Primary call-to-action, filled with the brand color.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            radius::SM,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            radius::SM,
            shadow::MD,
        ),
        button::Status::Disabled => disabled(theme, radius::SM),
    }
}

/// Neutral companion to [`primary`], tinted by the active theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (bg, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(bg, text_color, palette::GRAY_400, radius::SM, shadow::NONE)
        }
        button::Status::Hovered => {
            let bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(bg, text_color, palette::PRIMARY_500, radius::SM, shadow::SM)
        }
        button::Status::Disabled => disabled(theme, radius::SM),
    }
}

/// Copyable pill for technology and skill chips. Hovering inverts the
/// tint to hint that the chip reacts to a click.
pub fn pill(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            radius::FULL,
            shadow::SM,
        ),
        _ => {
            let (bg, text_color) = if matches!(theme, Theme::Light) {
                (palette::PRIMARY_100, palette::PRIMARY_700)
            } else {
                (palette::PRIMARY_800, palette::PRIMARY_200)
            };
            filled(bg, text_color, palette::PRIMARY_500, radius::FULL, shadow::NONE)
        }
    }
}

/// Borderless text link for the footer and social rows.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ if matches!(theme, Theme::Light) => palette::GRAY_700,
        _ => palette::GRAY_200,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round floating button over the lightbox backdrop. The returned
/// closure varies the black backdrop alpha with the hover state and
/// fades the glyph while the button has no press handler.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (alpha_hover, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (opacity::OVERLAY_SUBTLE, palette::GRAY_400),
            button::Status::Active => (alpha_normal, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}
