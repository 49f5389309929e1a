// SPDX-License-Identifier: MPL-2.0
//! Hero section introducing the profile.
//!
//! Shows the name, title and summary next to a profile card, with call to
//! action buttons and a row of copyable core technology pills. Clicking a
//! pill copies the technology name to the clipboard.

use super::Section;
use crate::content::Profile;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Pills per row in the core technologies block.
const PILLS_PER_ROW: usize = 5;

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub avatar: Option<&'a ImageData>,
}

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    /// A call to action asked to scroll to another section.
    GoToSection(Section),
    /// Open an external link (the CV).
    OpenLink(String),
    /// Copy a technology name to the clipboard.
    CopyTechnology(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GoTo(Section),
    OpenUrl(String),
    Copy(String),
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::GoToSection(section) => Event::GoTo(section),
        Message::OpenLink(url) => Event::OpenUrl(url),
        Message::CopyTechnology(tech) => Event::Copy(tech),
    }
}

/// Render the hero section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let kicker = Text::new(ctx.i18n.tr("hero-kicker"))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let name = Text::new(ctx.profile.name.clone()).size(typography::TITLE_XL);
    let title = Text::new(ctx.profile.title.clone())
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let summary = Text::new(ctx.profile.summary.clone()).size(typography::BODY_LG);

    let intro = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .push(kicker)
        .push(name)
        .push(title)
        .push(Container::new(summary).padding([spacing::SM, 0.0]))
        .push(build_cta_row(&ctx))
        .push(build_technologies(&ctx));

    let layout = Row::new()
        .spacing(spacing::XL)
        .push(intro)
        .push(build_profile_card(&ctx));

    Container::new(layout)
        .width(Length::Fill)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .padding([spacing::XXL, spacing::MD])
        .into()
}

/// Build the row of call to action buttons.
fn build_cta_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let view_projects = button(
        Text::new(ctx.i18n.tr("hero-view-projects")).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::GoToSection(Section::Projects));

    let contact = button(Text::new(ctx.i18n.tr("hero-contact-me")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press(Message::GoToSection(Section::Contact));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(view_projects)
        .push(contact);

    if let Some(cv_url) = &ctx.profile.cv_url {
        row = row.push(
            button(Text::new(ctx.i18n.tr("hero-download-cv")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::link)
                .on_press(Message::OpenLink(cv_url.clone())),
        );
    }

    row.into()
}

/// Build the copyable core technology pills, chunked into rows.
fn build_technologies<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("hero-core-technologies"))
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let mut rows = Column::new().spacing(spacing::XS);
    for chunk in ctx.profile.core_technologies.chunks(PILLS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::XS);
        for tech in chunk {
            row = row.push(
                button(Text::new(tech.clone()).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::pill)
                    .on_press(Message::CopyTechnology(tech.clone())),
            );
        }
        rows = rows.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .padding([spacing::MD, 0.0])
        .push(heading)
        .push(rows)
        .into()
}

/// Build the profile card with the avatar, falling back to an initial
/// when the avatar has not loaded.
fn build_profile_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let avatar: Element<'a, Message> = match ctx.avatar {
        Some(image) => iced::widget::image(image.handle.clone())
            .width(sizing::AVATAR)
            .height(sizing::AVATAR)
            .into(),
        None => Container::new(
            Text::new(name_initial(&ctx.profile.name)).size(typography::TITLE_XL),
        )
        .width(sizing::AVATAR)
        .height(sizing::AVATAR)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                color: palette::PRIMARY_500,
                width: 2.0,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        })
        .into(),
    };

    let card = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(avatar)
        .push(Text::new(ctx.profile.name.clone()).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.profile.title.clone())
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_500),
                }),
        );

    Container::new(card)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// First character of the name, uppercased, for the avatar fallback.
fn name_initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_first_character_uppercased() {
        assert_eq!(name_initial("alex rivera"), "A");
        assert_eq!(name_initial("Zoe"), "Z");
    }

    #[test]
    fn initial_falls_back_for_empty_name() {
        assert_eq!(name_initial(""), "?");
    }

    #[test]
    fn cta_messages_map_to_events() {
        assert!(matches!(
            update(Message::GoToSection(Section::Projects)),
            Event::GoTo(Section::Projects)
        ));
        assert!(matches!(
            update(Message::OpenLink("https://example.org/cv.pdf".into())),
            Event::OpenUrl(url) if url == "https://example.org/cv.pdf"
        ));
    }

    #[test]
    fn copying_a_technology_maps_to_copy_event() {
        let event = update(Message::CopyTechnology("Rust".into()));
        assert!(matches!(event, Event::Copy(tech) if tech == "Rust"));
    }

    #[test]
    fn hero_view_renders_without_avatar() {
        let i18n = I18n::default();
        let profile = Profile::default();
        let ctx = ViewContext {
            i18n: &i18n,
            profile: &profile,
            avatar: None,
        };
        let _element = view(ctx);
    }
}
