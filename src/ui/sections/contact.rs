// SPDX-License-Identifier: MPL-2.0
//! Contact section: a validated form next to the contact details card.
//!
//! The form validates on submit (all fields required, email must look
//! like an address) and clears a field's error as soon as it is edited
//! again. Delivery is asynchronous; the shell runs [`deliver`] and feeds
//! the outcome back through [`Message::Delivered`].

use super::{looks_like_email, section_heading};
use crate::content::{ContactInfo, SocialLink};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;

/// Pause before acknowledging a submission when no endpoint is configured.
const LOCAL_ACK_DELAY: Duration = Duration::from_millis(600);

/// Which validation failed for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// The i18n key for the inline error message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::Required => "error-field-required",
            FieldError::InvalidEmail => "error-email-invalid",
        }
    }
}

/// Validation outcome for the three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    /// True when no field has a validation error.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// A validated form ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Local form state.
#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors,
    sending: bool,
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    BodyChanged(String),
    /// The send button was clicked.
    Submit,
    /// Delivery finished; `true` on success.
    Delivered(bool),
    /// Copy a contact detail (email or phone) to the clipboard.
    CopyDetail(String),
    /// Open a social profile link.
    OpenSocial(String),
}

/// Effects the shell must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run [`deliver`] with this submission.
    Deliver(Submission),
    /// Delivery succeeded; the form has been cleared.
    Sent,
    /// Delivery failed; the form keeps its content for a retry.
    SendFailed,
    Copy(String),
    OpenUrl(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a submission is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Current validation errors.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    /// Process a message and return the effect for the shell.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                self.errors.name = None;
                Effect::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                self.errors.email = None;
                Effect::None
            }
            Message::BodyChanged(value) => {
                self.message = value;
                self.errors.message = None;
                Effect::None
            }
            Message::Submit => self.submit(),
            Message::Delivered(success) => self.delivered(success),
            Message::CopyDetail(value) => Effect::Copy(value),
            Message::OpenSocial(url) => Effect::OpenUrl(url),
        }
    }

    fn submit(&mut self) -> Effect {
        if self.sending {
            return Effect::None;
        }

        self.errors = self.validate();
        if !self.errors.is_clean() {
            return Effect::None;
        }

        self.sending = true;
        Effect::Deliver(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    fn delivered(&mut self, success: bool) -> Effect {
        self.sending = false;
        if success {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            Effect::Sent
        } else {
            // Keep the content so the user can retry without retyping.
            Effect::SendFailed
        }
    }

    fn validate(&self) -> FieldErrors {
        let email = self.email.trim();
        FieldErrors {
            name: self
                .name
                .trim()
                .is_empty()
                .then_some(FieldError::Required),
            email: if email.is_empty() {
                Some(FieldError::Required)
            } else if looks_like_email(email) {
                None
            } else {
                Some(FieldError::InvalidEmail)
            },
            message: self
                .message
                .trim()
                .is_empty()
                .then_some(FieldError::Required),
        }
    }
}

/// Deliver a submission.
///
/// With a configured endpoint the form is posted there and the HTTP
/// status decides the outcome. Without one, the submission is
/// acknowledged after a short pause so the flow still completes.
pub async fn deliver(
    client: reqwest::Client,
    endpoint: Option<String>,
    submission: Submission,
) -> bool {
    match endpoint {
        Some(url) => match post_submission(&client, &url, &submission).await {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Contact form delivery to {url} failed: {e}");
                false
            }
        },
        None => {
            tokio::time::sleep(LOCAL_ACK_DELAY).await;
            true
        }
    }
}

async fn post_submission(
    client: &reqwest::Client,
    url: &str,
    submission: &Submission,
) -> Result<(), reqwest::Error> {
    client
        .post(url)
        .form(&[
            ("name", submission.name.as_str()),
            ("email", submission.email.as_str()),
            ("message", submission.message.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub info: &'a ContactInfo,
    pub social_links: &'a [SocialLink],
}

/// Render the contact section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = section_heading(ctx.i18n.tr("contact-heading"));
    let intro = Text::new(ctx.i18n.tr("contact-intro")).size(typography::BODY);

    let panels = Row::new()
        .spacing(spacing::LG)
        .push(build_form(&ctx))
        .push(build_details(&ctx));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(intro)
        .push(panels);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .into()
}

/// The form panel.
fn build_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let errors = ctx.state.errors();

    let name_field = build_field(
        ctx.i18n,
        "contact-name-label",
        "contact-name-placeholder",
        &ctx.state.name,
        errors.name,
        Message::NameChanged,
    );
    let email_field = build_field(
        ctx.i18n,
        "contact-email-label",
        "contact-email-placeholder",
        &ctx.state.email,
        errors.email,
        Message::EmailChanged,
    );
    let message_field = build_field(
        ctx.i18n,
        "contact-message-label",
        "contact-message-placeholder",
        &ctx.state.message,
        errors.message,
        Message::BodyChanged,
    );

    let send_label = if ctx.state.is_sending() {
        ctx.i18n.tr("contact-sending")
    } else {
        ctx.i18n.tr("contact-send")
    };
    let mut send = button(Text::new(send_label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    if !ctx.state.is_sending() {
        send = send.on_press(Message::Submit);
    }

    let form = Column::new()
        .spacing(spacing::MD)
        .push(name_field)
        .push(email_field)
        .push(message_field)
        .push(send);

    Container::new(form)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// A labelled input with its optional inline error.
fn build_field<'a>(
    i18n: &I18n,
    label_key: &str,
    placeholder_key: &str,
    value: &str,
    error: Option<FieldError>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(label_key)).size(typography::BODY_SM);

    let input = text_input(&i18n.tr(placeholder_key), value)
        .on_input(on_input)
        .padding(spacing::XS);

    let mut field = Column::new().spacing(spacing::XXS).push(label).push(input);

    if let Some(error) = error {
        field = field.push(
            Text::new(i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    field.into()
}

/// The details panel: copyable email and phone, location, social links.
fn build_details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("contact-details-heading"))
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let email = build_detail_row(
        ctx.i18n.tr("contact-email-label"),
        ctx.info.email.clone(),
        true,
    );
    let phone = build_detail_row(
        ctx.i18n.tr("contact-details-phone"),
        ctx.info.phone.clone(),
        true,
    );
    let location = build_detail_row(
        ctx.i18n.tr("contact-details-location"),
        ctx.info.location.clone(),
        false,
    );

    let connect = Text::new(ctx.i18n.tr("contact-connect")).size(typography::BODY_SM);
    let mut socials = Row::new().spacing(spacing::XS);
    for link in ctx.social_links {
        socials = socials.push(
            button(Text::new(link.label.clone()).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::link)
                .on_press(Message::OpenSocial(link.url.clone())),
        );
    }

    let details = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(email)
        .push(phone)
        .push(location)
        .push(Column::new().spacing(spacing::XS).push(connect).push(socials));

    Container::new(details)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}

/// One labelled detail line, optionally copyable.
fn build_detail_row<'a>(label: String, value: String, copyable: bool) -> Element<'a, Message> {
    let label = Text::new(label).size(typography::CAPTION).style(|_theme: &Theme| {
        text::Style {
            color: Some(palette::GRAY_400),
        }
    });

    let value_element: Element<'a, Message> = if copyable {
        button(Text::new(value.clone()).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::pill)
            .on_press(Message::CopyDetail(value))
            .into()
    } else {
        Text::new(value).size(typography::BODY).into()
    };

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Left)
        .push(label)
        .push(value_element)
        .into()
}
