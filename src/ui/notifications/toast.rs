// SPDX-License-Identifier: MPL-2.0
//! Toast cards rendered in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Render every visible toast, stacked above the bottom-right corner.
/// Yields a zero-size element while nothing is visible.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|toast| view(toast, i18n))
        .collect();

    if cards.is_empty() {
        return Container::new(text("")).width(Length::Shrink).into();
    }

    let stack = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// One card: severity glyph, resolved message, dismiss button.
pub fn view<'a>(toast: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = toast.severity().color();

    let glyph = Text::new(severity_glyph(toast.severity()))
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message = Text::new(resolve_message(toast, i18n))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss = button(text("✕").size(typography::BODY_SM))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_style);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(Container::new(message).width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// The message travels as a Fluent key so it retranslates on a
/// language switch.
fn resolve_message(toast: &Notification, i18n: &I18n) -> String {
    if toast.message_args().is_empty() {
        i18n.tr(toast.message_key())
    } else {
        let args: Vec<(&str, &str)> = toast
            .message_args()
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(toast.message_key(), &args)
    }
}

fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Warning | Severity::Error => "⚠",
    }
}

/// Theme-colored card with an accent border in the severity color.
fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (
            Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }),
            base.text,
        ),
        button::Status::Pressed => (
            Some(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            }),
            base.text,
        ),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background: background.map(iced::Background::Color),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
