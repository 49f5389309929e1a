// SPDX-License-Identifier: MPL-2.0
//! Footer: section shortcuts, newsletter signup, and the bottom bar.
//!
//! The newsletter keeps only an email field; a successful signup clears
//! it and shows an inline confirmation until the field is edited again.
//! The bottom bar carries the copyright line, social links and a back to
//! top shortcut.

use super::{looks_like_email, Section};
use crate::content::{Profile, SocialLink};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Local state: the newsletter signup.
#[derive(Debug, Default)]
pub struct State {
    email: String,
    subscribed: bool,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    /// The newsletter email field changed.
    EmailChanged(String),
    /// The subscribe button was clicked (or Enter pressed in the field).
    Subscribe,
    /// A section shortcut was clicked.
    GoToSection(Section),
    /// The back to top button was clicked.
    BackToTop,
    /// A social link was clicked.
    OpenSocial(String),
}

/// Effects the shell must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The signup was accepted.
    Subscribed,
    /// The entered address does not look like an email.
    InvalidEmail,
    GoTo(Section),
    ScrollToTop,
    OpenUrl(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current newsletter field content.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// True after a successful signup, until the field is edited again.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Process a message and return the effect for the shell.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                self.subscribed = false;
                Effect::None
            }
            Message::Subscribe => {
                if looks_like_email(self.email.trim()) {
                    self.subscribed = true;
                    self.email.clear();
                    Effect::Subscribed
                } else {
                    Effect::InvalidEmail
                }
            }
            Message::GoToSection(section) => Effect::GoTo(section),
            Message::BackToTop => Effect::ScrollToTop,
            Message::OpenSocial(url) => Effect::OpenUrl(url),
        }
    }
}

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub profile: &'a Profile,
    pub social_links: &'a [SocialLink],
}

/// Render the footer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .push(build_masthead(&ctx))
        .push(rule::horizontal(1))
        .push(build_newsletter(&ctx))
        .push(rule::horizontal(1))
        .push(build_bottom_bar(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .into()
}

/// Name, tagline and section shortcuts.
fn build_masthead<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.profile.name.to_uppercase())
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });
    let tagline = Text::new(ctx.profile.title.clone())
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let mut shortcuts = Row::new().spacing(spacing::SM);
    for section in Section::ALL {
        shortcuts = shortcuts.push(
            button(Text::new(ctx.i18n.tr(section.title_key())).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link)
                .on_press(Message::GoToSection(section)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(name)
        .push(tagline)
        .push(shortcuts)
        .into()
}

/// Newsletter signup block.
fn build_newsletter<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("footer-newsletter-heading"))
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });
    let intro = Text::new(ctx.i18n.tr("footer-newsletter-intro")).size(typography::BODY_SM);

    let field = text_input(
        &ctx.i18n.tr("footer-newsletter-placeholder"),
        ctx.state.email(),
    )
    .on_input(Message::EmailChanged)
    .on_submit(Message::Subscribe)
    .padding(spacing::XS)
    .width(Length::Fixed(260.0));

    let subscribe = button(Text::new(ctx.i18n.tr("footer-subscribe")).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Subscribe);

    let mut block = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(heading)
        .push(intro)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(field)
                .push(subscribe),
        );

    if ctx.state.is_subscribed() {
        block = block.push(
            Text::new(ctx.i18n.tr("footer-subscribed"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::SUCCESS_500),
                }),
        );
    }

    block.into()
}

/// Copyright line, social links and the back to top shortcut.
fn build_bottom_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let year = current_year().to_string();
    let rights = Text::new(ctx.i18n.tr_with_args(
        "footer-rights",
        &[("year", year.as_str()), ("name", ctx.profile.name.as_str())],
    ))
    .size(typography::CAPTION)
    .style(|_theme: &Theme| text::Style {
        color: Some(palette::GRAY_400),
    });

    let mut socials = Row::new().spacing(spacing::XS);
    for link in ctx.social_links {
        socials = socials.push(
            button(Text::new(link.label.clone()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link)
                .on_press(Message::OpenSocial(link.url.clone())),
        );
    }

    let back_to_top = button(
        Text::new(format!("↑ {}", ctx.i18n.tr("footer-back-to-top"))).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::secondary)
    .on_press(Message::BackToTop);

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(rights).width(Length::Fill))
        .push(socials)
        .push(back_to_top)
        .into()
}

/// Current calendar year for the copyright line.
fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
