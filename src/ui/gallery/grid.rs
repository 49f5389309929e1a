// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the gallery section.

use super::component::{Gallery, Message, Slot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::sections::section_heading;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Border, ContentFit, Element, Length, Theme};

/// Thumbnails per row.
const COLUMNS: usize = 3;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
}

/// Render the gallery section with its thumbnail grid.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = section_heading(ctx.i18n.tr("section-gallery"));
    let intro = Text::new(ctx.i18n.tr("gallery-intro")).size(typography::BODY);

    let mut grid = Column::new().spacing(spacing::SM);
    let indices: Vec<usize> = (0..ctx.gallery.entries().len()).collect();

    for row_indices in indices.chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for index in row_indices {
            row = row.push(build_thumbnail(ctx.i18n, ctx.gallery, *index));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(intro)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .into()
}

/// One clickable thumbnail, or its loading/broken placeholder.
fn build_thumbnail<'a>(i18n: &'a I18n, gallery: &'a Gallery, index: usize) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match gallery.slot(index) {
        Some(Slot::Ready(image)) => iced::widget::image(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Slot::Broken(_)) => build_placeholder(i18n.tr("gallery-broken-image")),
        Some(Slot::Loading) | None => build_placeholder(i18n.tr("gallery-loading")),
    };

    button(inner)
        .width(Length::Fill)
        .padding(0)
        .style(thumbnail_style)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

fn build_placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY_SM)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}

/// Thumbnail button style: flat card that gains an accent border on hover.
fn thumbnail_style(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Active | button::Status::Disabled => extended.background.weak.color,
    };

    button::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        text_color: extended.background.base.text,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ImageEntry;
    use crate::lightbox::{Options, ScrollLock};

    #[test]
    fn grid_renders_with_pending_slots() {
        let i18n = I18n::default();
        let entries = vec![
            ImageEntry::new("a.png"),
            ImageEntry::new("b.png"),
            ImageEntry::new("c.png"),
            ImageEntry::new("d.png"),
        ];
        let gallery = Gallery::new(entries, Options::default(), ScrollLock::default());
        let ctx = ViewContext {
            i18n: &i18n,
            gallery: &gallery,
        };
        let _element = view(ctx);
    }

    #[test]
    fn thumbnail_border_highlights_on_hover() {
        let theme = Theme::Light;
        let active = thumbnail_style(&theme, button::Status::Active);
        let hovered = thumbnail_style(&theme, button::Status::Hovered);

        assert_ne!(active.border.color, hovered.border.color);
    }
}
