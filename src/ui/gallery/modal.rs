// SPDX-License-Identifier: MPL-2.0
//! Full screen overlay for the open gallery image.
//!
//! Layers a dimmed backdrop, the image surface, paging arrows, a close
//! button, and the caption and position chrome with a [`Stack`]. The
//! backdrop closes the viewer on click. Upper layers without a press
//! handler let clicks fall through to it, so clicking anywhere outside
//! the interactive chrome dismisses the overlay.

use super::component::{Gallery, Message, Slot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Space, Stack, Text};
use iced::{mouse, ContentFit, Element, Length};

/// Enlargement applied to the image surface while zoom is active.
const ZOOM_SCALE: f32 = 1.5;

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
}

/// Render the lightbox overlay for the currently open image.
///
/// Returns an empty element while no image is open so callers can push
/// the result unconditionally.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let lightbox = ctx.gallery.lightbox();
    let Some(selected) = lightbox.selected() else {
        return Space::new().into();
    };

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(build_image_surface(&ctx, selected));

    if lightbox.options().navigation {
        stack = stack.push(build_arrow_zone(ArrowSide::Previous, !lightbox.at_first()));
        stack = stack.push(build_arrow_zone(ArrowSide::Next, !lightbox.at_last()));
    }

    stack = stack.push(build_close_corner());
    stack = stack.push(build_bottom_chrome(&ctx, selected));

    stack.into()
}

/// Centered image layer. A press on the image toggles zoom when the
/// controller allows it; otherwise the layer is inert and clicks fall
/// through to the backdrop.
fn build_image_surface<'a>(ctx: &ViewContext<'a>, selected: usize) -> Element<'a, Message> {
    let lightbox = ctx.gallery.lightbox();
    let height = if lightbox.is_zoomed() {
        sizing::LIGHTBOX_IMAGE_MAX_HEIGHT * ZOOM_SCALE
    } else {
        sizing::LIGHTBOX_IMAGE_MAX_HEIGHT
    };

    let surface: Element<'a, Message> = match ctx.gallery.slot(selected) {
        Some(Slot::Ready(data)) => {
            let picture = iced::widget::image(data.handle.clone())
                .height(height)
                .content_fit(ContentFit::Contain);
            if lightbox.options().zoom {
                mouse_area(picture)
                    .on_press(Message::ImagePressed)
                    .interaction(mouse::Interaction::Pointer)
                    .into()
            } else {
                picture.into()
            }
        }
        Some(Slot::Broken(err)) => build_notice(ctx.i18n.tr(err.i18n_key())),
        Some(Slot::Loading) | None => build_notice(ctx.i18n.tr("gallery-loading")),
    };

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Status pill shown in place of the image while it loads or after the
/// load failed.
fn build_notice<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::overlay::indicator(radius::MD))
        .into()
}

enum ArrowSide {
    Previous,
    Next,
}

/// Paging arrow pinned to one edge of the overlay. Without a press
/// handler the button renders in its disabled style, which is how the
/// first and last image signal that the collection does not wrap.
fn build_arrow_zone<'a>(side: ArrowSide, enabled: bool) -> Element<'a, Message> {
    let (glyph, press, align) = match side {
        ArrowSide::Previous => ("‹", Message::PreviousPressed, Horizontal::Left),
        ArrowSide::Next => ("›", Message::NextPressed, Horizontal::Right),
    };

    let arrow = button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::LIGHTBOX_NAV_BUTTON)
    .height(sizing::LIGHTBOX_NAV_BUTTON)
    .padding(0.0)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ));
    let arrow = if enabled { arrow.on_press(press) } else { arrow };

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align)
        .align_y(Vertical::Center)
        .into()
}

/// Close button pinned to the top right corner.
fn build_close_corner<'a>() -> Element<'a, Message> {
    let close = button(
        Container::new(Text::new("✕").size(typography::TITLE_SM))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::LIGHTBOX_NAV_BUTTON)
    .height(sizing::LIGHTBOX_NAV_BUTTON)
    .padding(0.0)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(Message::ClosePressed);

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

/// Caption bar and position counter at the bottom center.
fn build_bottom_chrome<'a>(ctx: &ViewContext<'a>, selected: usize) -> Element<'a, Message> {
    let lightbox = ctx.gallery.lightbox();
    let mut chrome = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    if lightbox.options().captions {
        if let Some(caption) = ctx
            .gallery
            .entries()
            .get(selected)
            .and_then(|entry| entry.caption.as_deref())
        {
            chrome = chrome.push(
                Container::new(Text::new(caption).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::overlay::caption_bar),
            );
        }
    }

    if let Some((current, total)) = lightbox.position() {
        if total > 1 {
            chrome = chrome.push(
                Container::new(Text::new(format!("{current}/{total}")).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator(radius::FULL)),
            );
        }
    }

    Container::new(chrome)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}
