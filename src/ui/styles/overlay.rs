// SPDX-License-Identifier: MPL-2.0
//! Translucent chrome drawn over the open lightbox image.

use crate::ui::design_tokens::opacity;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

const SCRIM: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: opacity::OVERLAY_STRONG,
};

const HAIRLINE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: opacity::OVERLAY_SUBTLE,
};

/// Dark pill for status text like the position counter, with the
/// radius chosen by the caller.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(SCRIM)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: HAIRLINE,
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Borderless dark strip under the open image for its caption.
#[must_use]
pub fn caption_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SCRIM)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}
