// SPDX-License-Identifier: MPL-2.0
//! Projects section: a card grid and the detail view shown in a modal.
//!
//! Clicking a card opens the project in a modal dialog. The modal itself
//! (backdrop, Escape handling, scroll locking) is owned by the shell; this
//! module only renders the content.

use super::section_heading;
use crate::content::Project;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Border, ContentFit, Element, Length, Theme};

/// Cards per row in the grid.
const CARDS_PER_ROW: usize = 3;

/// Contextual data needed to render the project grid.
///
/// `images` runs parallel to `projects`; an entry is `None` until the
/// project's illustration has been decoded.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub projects: &'a [Project],
    pub images: &'a [Option<ImageData>],
}

/// Contextual data needed to render the detail modal content.
pub struct DetailContext<'a> {
    pub i18n: &'a I18n,
    pub project: &'a Project,
    pub image: Option<&'a ImageData>,
}

/// Messages emitted by the projects section.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card was clicked.
    ShowDetails(usize),
    /// The close button inside the modal was clicked.
    CloseDetails,
    /// Open the repository or demo link.
    OpenLink(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ShowDetails(usize),
    CloseDetails,
    OpenUrl(String),
}

/// Process a projects message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ShowDetails(index) => Event::ShowDetails(index),
        Message::CloseDetails => Event::CloseDetails,
        Message::OpenLink(url) => Event::OpenUrl(url),
    }
}

/// Render the card grid.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = section_heading(ctx.i18n.tr("section-projects"));

    let mut grid = Column::new().spacing(spacing::MD);
    let indexed: Vec<(usize, &Project)> = ctx.projects.iter().enumerate().collect();

    for row_projects in indexed.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::MD);
        for (index, project) in row_projects {
            let image = ctx.images.get(*index).and_then(Option::as_ref);
            row = row.push(build_card(ctx.i18n, *index, project, image));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .into()
}

/// One clickable project card.
fn build_card<'a>(
    i18n: &'a I18n,
    index: usize,
    project: &'a Project,
    image: Option<&'a ImageData>,
) -> Element<'a, Message> {
    let illustration = build_illustration(
        i18n,
        image,
        Length::Fill,
        Length::Fixed(sizing::PROJECT_CARD_IMAGE_HEIGHT),
    );

    let title = Text::new(project.title.clone()).size(typography::TITLE_SM);
    let description = Text::new(project.description.clone()).size(typography::BODY_SM);

    let card = Column::new()
        .spacing(spacing::SM)
        .push(illustration)
        .push(title)
        .push(description)
        .push(build_technology_chips(&project.technologies));

    button(card)
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(card_style)
        .on_press(Message::ShowDetails(index))
        .into()
}

/// Render the modal content for a project.
pub fn view_details(ctx: DetailContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.project.title.clone()).size(typography::TITLE_MD);

    let illustration = build_illustration(
        ctx.i18n,
        ctx.image,
        Length::Fill,
        Length::Fixed(sizing::PROJECT_CARD_IMAGE_HEIGHT * 2.0),
    );

    let description = Text::new(ctx.project.description.clone()).size(typography::BODY);

    let mut links = Row::new().spacing(spacing::SM);
    if let Some(url) = &ctx.project.repository_url {
        links = links.push(
            button(Text::new(ctx.i18n.tr("projects-view-repository")).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::OpenLink(url.clone())),
        );
    }
    if let Some(url) = &ctx.project.demo_url {
        links = links.push(
            button(Text::new(ctx.i18n.tr("projects-view-demo")).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::OpenLink(url.clone())),
        );
    }

    let close = button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::CloseDetails);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(illustration)
        .push(description)
        .push(build_technology_chips(&ctx.project.technologies))
        .push(links)
        .push(
            Container::new(close)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::SECTION_MAX_WIDTH * 0.7))
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// Project image, or a placeholder while it loads.
fn build_illustration<'a>(
    i18n: &'a I18n,
    image: Option<&'a ImageData>,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    match image {
        Some(data) => iced::widget::image(data.handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(
            Text::new(i18n.tr("gallery-loading"))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        )
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into(),
    }
}

/// Static technology chips shown on cards and in the modal.
fn build_technology_chips<'a>(technologies: &'a [String]) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for tech in technologies {
        row = row.push(
            Container::new(Text::new(tech.clone()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::chip),
        );
    }
    row.into()
}

/// Card button style: a panel that highlights its border on hover.
fn card_style(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Active | button::Status::Disabled => extended.background.strong.color,
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
    use crate::content::Content;

    #[test]
    fn card_click_maps_to_show_details() {
        assert!(matches!(
            update(Message::ShowDetails(2)),
            Event::ShowDetails(2)
        ));
    }

    #[test]
    fn close_button_maps_to_close_details() {
        assert!(matches!(update(Message::CloseDetails), Event::CloseDetails));
    }

    #[test]
    fn link_click_maps_to_open_url() {
        let event = update(Message::OpenLink("https://example.org".into()));
        assert!(matches!(event, Event::OpenUrl(url) if url == "https://example.org"));
    }

    #[test]
    fn card_border_highlights_on_hover() {
        let theme = Theme::Light;
        let active = card_style(&theme, button::Status::Active);
        let hovered = card_style(&theme, button::Status::Hovered);

        assert_ne!(active.border.color, hovered.border.color);
        assert_eq!(hovered.border.color, palette::PRIMARY_400);
    }

    #[test]
    fn projects_view_renders_without_images() {
        let i18n = I18n::default();
        let content = Content::default();
        let images: Vec<Option<ImageData>> = content.projects.iter().map(|_| None).collect();
        let ctx = ViewContext {
            i18n: &i18n,
            projects: &content.projects,
            images: &images,
        };
        let _element = view(ctx);
    }

    #[test]
    fn detail_view_renders_without_image() {
        let i18n = I18n::default();
        let content = Content::default();
        let ctx = DetailContext {
            i18n: &i18n,
            project: &content.projects[0],
            image: None,
        };
        let _element = view_details(ctx);
    }
}
