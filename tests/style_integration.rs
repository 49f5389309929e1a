// SPDX-License-Identifier: MPL-2.0
//! Cross-checks between the style functions and the design tokens.

use iced::widget::button::Status;
use iced::{Background, Theme};
use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
use iced_folio::ui::styles::{button, container, overlay};
use iced_folio::ui::theming::ThemeMode;

#[test]
fn button_styles_cover_both_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        for status in [
            Status::Active,
            Status::Hovered,
            Status::Pressed,
            Status::Disabled,
        ] {
            let _ = button::primary(&theme, status);
            let _ = button::secondary(&theme, status);
            let _ = button::pill(&theme, status);
            let _ = button::link(&theme, status);
            let _ = button::overlay(palette::WHITE, 0.5, 0.8)(&theme, status);
        }
    }
}

#[test]
fn container_styles_cover_both_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        let _ = container::panel(&theme);
        let _ = container::card(&theme);
        let _ = container::chip(&theme);
        let _ = container::backdrop(&theme);
        let _ = container::placeholder(&theme);
        let _ = overlay::indicator(8.0)(&theme);
        let _ = overlay::caption_bar(&theme);
    }
}

#[test]
fn backdrop_dims_without_fully_hiding_the_page() {
    let style = container::backdrop(&Theme::Dark);
    match style.background {
        Some(Background::Color(color)) => {
            assert!(color.a >= opacity::OVERLAY_MEDIUM);
            assert!(color.a < opacity::OPAQUE);
        }
        other => panic!("expected a color backdrop, got {other:?}"),
    }
}

#[test]
fn primary_button_differs_between_enabled_and_disabled() {
    let theme = Theme::Light;
    let active = button::primary(&theme, Status::Active);
    let disabled = button::primary(&theme, Status::Disabled);
    assert_ne!(active.background, disabled.background);
    assert_ne!(active.text_color, disabled.text_color);
}

#[test]
fn layout_tokens_fit_inside_the_section_column() {
    assert!(sizing::PROJECT_CARD_WIDTH * 3.0 < sizing::SECTION_MAX_WIDTH + spacing::XL * 2.0);
    assert!(sizing::TOAST_WIDTH < sizing::SECTION_MAX_WIDTH);
}

#[test]
fn explicit_theme_modes_resolve_without_the_desktop() {
    assert!(!ThemeMode::Light.is_dark());
    assert!(ThemeMode::Dark.is_dark());
}
