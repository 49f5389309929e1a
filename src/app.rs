// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections and
//! the modal overlays.
//!
//! The `App` struct wires together the domains (content, localization,
//! gallery, notifications) and translates section effects into side effects
//! like clipboard writes, link opening, or asset loading. This file keeps
//! policy decisions (window sizing, scroll anchors, toast flash duration)
//! close to the main update loop so it is easy to audit user-facing behavior.

use crate::config;
use crate::content::{self, Content};
use crate::error::MediaError;
use crate::i18n::fluent::I18n;
use crate::lightbox::{KeyPress, Lightbox, Options, ScrollLock};
use crate::media::{self, AssetCache, ImageData, ImageEntry};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::gallery::{self, Gallery};
use crate::ui::notifications::{
    toast, Manager as NotificationManager, Notification, NotificationMessage,
};
use crate::ui::sections::{contact, footer, hero, projects, skills};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_gate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{mouse_area, operation, Column, Container, Id, Scrollable, Space, Stack};
use iced::{clipboard, event, keyboard, time, window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

/// Messages handled by the application root. Section messages are
/// wrapped so each component keeps its own message type.
#[derive(Debug, Clone)]
pub enum Message {
    Hero(hero::Message),
    Skills(skills::Message),
    Projects(projects::Message),
    Gallery(gallery::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    Notification(NotificationMessage),
    /// A key press routed to the open modal overlay.
    ModalKey(KeyPress),
    /// The profile avatar finished loading.
    AvatarLoaded(Result<ImageData, MediaError>),
    /// A project illustration finished loading.
    ProjectImageLoaded(usize, Result<ImageData, MediaError>),
    /// Clicks inside the project panel stop here instead of falling
    /// through to the backdrop.
    PanelPressed,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional TOML content file replacing the embedded portfolio.
    pub content_path: Option<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Widget id of the page scrollable targeted by section shortcuts.
const PAGE_SCROLL_ID: &str = "portfolio-page-scrollable";

/// How long the clipboard confirmation toast stays up.
const COPY_FLASH: Duration = Duration::from_secs(2);

/// Polling interval for toast auto-dismissal.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    content: Content,
    theme_mode: ThemeMode,
    scroll_lock: ScrollLock,
    gallery: Gallery,
    project_modal: Lightbox,
    skills: skills::State,
    contact: contact::State,
    footer: footer::State,
    notifications: NotificationManager,
    avatar: Option<ImageData>,
    project_images: Vec<Option<ImageData>>,
    cache: AssetCache,
    http: Option<reqwest::Client>,
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let content = Content::default();
        let scroll_lock = ScrollLock::default();
        let gallery = Gallery::new(
            content.gallery.clone(),
            config.gallery_options(),
            scroll_lock.clone(),
        );
        let project_modal = Lightbox::with_lock(
            content.projects.len(),
            Options::detail(),
            scroll_lock.clone(),
        );
        let project_images = vec![None; content.projects.len()];

        Self {
            i18n: I18n::default(),
            content,
            theme_mode: ThemeMode::System,
            scroll_lock,
            gallery,
            project_modal,
            skills: skills::State::new(),
            contact: contact::State::new(),
            footer: footer::State::new(),
            notifications: NotificationManager::new(),
            avatar: None,
            project_images,
            cache: AssetCache::with_defaults(),
            http: media::http_client().ok(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous image
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_notice) = match config::load() {
            Ok(config) => (config, None),
            Err(e) => {
                eprintln!("Failed to load settings: {e:?}");
                (
                    config::Config::default(),
                    Some(Notification::warning("error-config-load-failed")),
                )
            }
        };

        let i18n = I18n::new(flags.lang.clone(), &config);

        let content_path = flags
            .content_path
            .map(PathBuf::from)
            .or_else(|| config.content_path.clone());
        let (content, content_notice) = match content::load(content_path.as_deref()) {
            Ok(content) => (content, None),
            Err(e) => {
                eprintln!("Failed to load content: {e:?}");
                (
                    Content::default(),
                    Some(Notification::warning("error-content-load-failed")),
                )
            }
        };

        let scroll_lock = ScrollLock::default();
        let gallery = Gallery::new(
            content.gallery.clone(),
            config.gallery_options(),
            scroll_lock.clone(),
        );
        let project_modal = Lightbox::with_lock(
            content.projects.len(),
            Options::detail(),
            scroll_lock.clone(),
        );
        let project_images = vec![None; content.projects.len()];

        let mut app = App {
            i18n,
            content,
            theme_mode: config.theme.unwrap_or_default(),
            scroll_lock,
            gallery,
            project_modal,
            skills: skills::State::new(),
            contact: contact::State::new(),
            footer: footer::State::new(),
            notifications: NotificationManager::new(),
            avatar: None,
            project_images,
            cache: AssetCache::with_defaults(),
            http: match media::http_client() {
                Ok(client) => Some(client),
                Err(e) => {
                    eprintln!("Failed to build the HTTP client: {e}");
                    None
                }
            },
        };

        for notice in [config_notice, content_notice].into_iter().flatten() {
            app.notifications.push(notice);
        }

        let task = app.initial_loads();
        (app, task)
    }

    fn title(&self) -> String {
        format!(
            "{} | {}",
            self.content.profile.name,
            self.i18n.tr("window-portfolio")
        )
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Keyboard bindings exist only while a modal overlay is up; the
        // page itself has no shortcuts.
        let keyboard_subscription = if self.modal_open() {
            event::listen_with(|event, status, _window| {
                if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
                    match status {
                        event::Status::Ignored => modal_key(key).map(Message::ModalKey),
                        event::Status::Captured => None,
                    }
                } else {
                    None
                }
            })
        } else {
            Subscription::none()
        };

        let tick_subscription = if self.notifications.has_notifications() {
            time::every(NOTIFICATION_TICK).map(|_| Message::Notification(NotificationMessage::Tick))
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_subscription, tick_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Hero(message) => self.handle_hero_event(hero::update(message)),
            Message::Skills(message) => {
                let effect = self.skills.handle(message);
                self.handle_skills_effect(effect)
            }
            Message::Projects(message) => self.handle_projects_event(projects::update(message)),
            Message::Gallery(message) => self.handle_gallery_message(message),
            Message::Contact(message) => {
                let effect = self.contact.handle(message);
                self.handle_contact_effect(effect)
            }
            Message::Footer(message) => {
                let effect = self.footer.handle(message);
                self.handle_footer_effect(effect)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(message);
                Task::none()
            }
            Message::ModalKey(key) => {
                self.handle_modal_key(key);
                Task::none()
            }
            Message::AvatarLoaded(result) => {
                self.handle_avatar_loaded(result);
                Task::none()
            }
            Message::ProjectImageLoaded(index, result) => {
                self.handle_project_image_loaded(index, result);
                Task::none()
            }
            Message::PanelPressed => Task::none(),
        }
    }

    fn handle_hero_event(&mut self, event: hero::Event) -> Task<Message> {
        match event {
            hero::Event::GoTo(section) => scroll_to(section.scroll_anchor()),
            hero::Event::OpenUrl(url) => open_url(&url),
            hero::Event::Copy(text) => self.copy_with_feedback(text),
        }
    }

    fn handle_skills_effect(&mut self, effect: skills::Effect) -> Task<Message> {
        match effect {
            skills::Effect::None => Task::none(),
            skills::Effect::Copy(text) => self.copy_with_feedback(text),
        }
    }

    fn handle_projects_event(&mut self, event: projects::Event) -> Task<Message> {
        match event {
            projects::Event::ShowDetails(index) => {
                // Only one modal at a time; the gallery keeps priority.
                if !self.gallery.is_open() {
                    self.project_modal.open(index);
                }
                Task::none()
            }
            projects::Event::CloseDetails => {
                self.project_modal.close();
                Task::none()
            }
            projects::Event::OpenUrl(url) => open_url(&url),
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        if let gallery::Message::Loaded(index, Ok(data)) = &message {
            if let Some(entry) = self.gallery.entries().get(*index) {
                self.cache.insert(entry.source.clone(), data.clone());
            }
        }

        if matches!(message, gallery::Message::ThumbnailPressed(_)) && self.project_modal.is_open()
        {
            return Task::none();
        }

        self.gallery.handle_message(message);
        Task::none()
    }

    fn handle_contact_effect(&mut self, effect: contact::Effect) -> Task<Message> {
        match effect {
            contact::Effect::None => Task::none(),
            contact::Effect::Deliver(submission) => {
                let Some(client) = self.http.clone() else {
                    return Task::done(Message::Contact(contact::Message::Delivered(false)));
                };
                let endpoint = self.content.contact.form_endpoint.clone();
                Task::perform(contact::deliver(client, endpoint, submission), |delivered| {
                    Message::Contact(contact::Message::Delivered(delivered))
                })
            }
            contact::Effect::Sent => {
                self.notifications
                    .push(Notification::success("contact-send-success"));
                Task::none()
            }
            contact::Effect::SendFailed => {
                self.notifications
                    .push(Notification::error("contact-send-failure"));
                Task::none()
            }
            contact::Effect::Copy(text) => self.copy_with_feedback(text),
            contact::Effect::OpenUrl(url) => open_url(&url),
        }
    }

    fn handle_footer_effect(&mut self, effect: footer::Effect) -> Task<Message> {
        match effect {
            footer::Effect::None => Task::none(),
            footer::Effect::Subscribed => {
                self.notifications
                    .push(Notification::success("footer-subscribed"));
                Task::none()
            }
            footer::Effect::InvalidEmail => {
                self.notifications
                    .push(Notification::warning("error-email-invalid"));
                Task::none()
            }
            footer::Effect::GoTo(section) => scroll_to(section.scroll_anchor()),
            footer::Effect::ScrollToTop => scroll_to(0.0),
            footer::Effect::OpenUrl(url) => open_url(&url),
        }
    }

    fn handle_modal_key(&mut self, key: KeyPress) {
        if self.gallery.is_open() {
            let _ = self.gallery.handle_key(key);
        } else if self.project_modal.is_open() {
            let _ = self.project_modal.handle_key(key);
        }
    }

    fn handle_avatar_loaded(&mut self, result: Result<ImageData, MediaError>) {
        match result {
            Ok(data) => {
                if let Some(entry) = &self.content.profile.avatar {
                    self.cache.insert(entry.source.clone(), data.clone());
                }
                self.avatar = Some(data);
            }
            // The hero falls back to the name initial.
            Err(e) => eprintln!("Avatar failed to load: {e}"),
        }
    }

    fn handle_project_image_loaded(&mut self, index: usize, result: Result<ImageData, MediaError>) {
        match result {
            Ok(data) => {
                if let Some(entry) = self
                    .content
                    .projects
                    .get(index)
                    .and_then(|project| project.image.as_ref())
                {
                    self.cache.insert(entry.source.clone(), data.clone());
                }
                if let Some(slot) = self.project_images.get_mut(index) {
                    *slot = Some(data);
                }
            }
            Err(e) => eprintln!("Project image {index} failed to load: {e}"),
        }
    }

    /// Copy `text` to the clipboard and flash a short confirmation toast.
    fn copy_with_feedback(&mut self, text: String) -> Task<Message> {
        self.notifications.push(
            Notification::info("notification-copied")
                .with_arg("text", text.clone())
                .auto_dismiss(COPY_FLASH),
        );
        clipboard::write(text)
    }

    /// Kick off asynchronous loading for every image the page shows.
    fn initial_loads(&mut self) -> Task<Message> {
        let mut tasks: Vec<Task<Message>> = Vec::new();

        if let Some(avatar) = self.content.profile.avatar.clone() {
            tasks.push(self.spawn_load(&avatar, Message::AvatarLoaded));
        }

        let gallery_entries = self.gallery.entries().to_vec();
        for (index, entry) in gallery_entries.iter().enumerate() {
            tasks.push(self.spawn_load(entry, move |result| {
                Message::Gallery(gallery::Message::Loaded(index, result))
            }));
        }

        let project_entries: Vec<(usize, ImageEntry)> = self
            .content
            .projects
            .iter()
            .enumerate()
            .filter_map(|(index, project)| project.image.clone().map(|entry| (index, entry)))
            .collect();
        for (index, entry) in project_entries {
            tasks.push(self.spawn_load(&entry, move |result| {
                Message::ProjectImageLoaded(index, result)
            }));
        }

        Task::batch(tasks)
    }

    /// Resolve an asset from the cache or with an asynchronous load.
    fn spawn_load<F>(&mut self, entry: &ImageEntry, wrap: F) -> Task<Message>
    where
        F: Fn(Result<ImageData, MediaError>) -> Message + Send + 'static,
    {
        if let Some(cached) = self.cache.get(&entry.source) {
            return Task::done(wrap(Ok(cached)));
        }

        let Some(client) = self.http.clone() else {
            return Task::done(wrap(Err(MediaError::Network(
                "HTTP client unavailable".to_string(),
            ))));
        };

        Task::perform(media::load_asset(client, entry.asset_source()), wrap)
    }

    fn modal_open(&self) -> bool {
        self.gallery.is_open() || self.project_modal.is_open()
    }

    fn view(&self) -> Element<'_, Message> {
        let sections = Column::new()
            .spacing(spacing::XXL)
            .push(
                hero::view(hero::ViewContext {
                    i18n: &self.i18n,
                    profile: &self.content.profile,
                    avatar: self.avatar.as_ref(),
                })
                .map(Message::Hero),
            )
            .push(
                skills::view(skills::ViewContext {
                    i18n: &self.i18n,
                    groups: &self.content.skill_groups,
                    state: &self.skills,
                })
                .map(Message::Skills),
            )
            .push(
                projects::view(projects::ViewContext {
                    i18n: &self.i18n,
                    projects: &self.content.projects,
                    images: &self.project_images,
                })
                .map(Message::Projects),
            )
            .push(
                gallery::grid::view(gallery::grid::ViewContext {
                    i18n: &self.i18n,
                    gallery: &self.gallery,
                })
                .map(Message::Gallery),
            )
            .push(
                contact::view(contact::ViewContext {
                    i18n: &self.i18n,
                    state: &self.contact,
                    info: &self.content.contact,
                    social_links: &self.content.social_links,
                })
                .map(Message::Contact),
            )
            .push(
                footer::view(footer::ViewContext {
                    i18n: &self.i18n,
                    state: &self.footer,
                    profile: &self.content.profile,
                    social_links: &self.content.social_links,
                })
                .map(Message::Footer),
            );

        let page = Container::new(
            Container::new(sections)
                .max_width(sizing::SECTION_MAX_WIDTH)
                .padding([spacing::XL, spacing::LG]),
        )
        .width(Length::Fill)
        .align_x(Horizontal::Center);

        let scroll = Scrollable::new(page)
            .id(Id::new(PAGE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(scroll_gate(scroll, self.scroll_lock.clone()));

        if self.gallery.is_open() {
            layers = layers.push(
                gallery::modal::view(gallery::modal::ViewContext {
                    i18n: &self.i18n,
                    gallery: &self.gallery,
                })
                .map(Message::Gallery),
            );
        } else if let Some(index) = self.project_modal.selected() {
            layers = layers.push(self.project_panel(index));
        }

        if self.notifications.has_notifications() {
            layers = layers.push(
                toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification),
            );
        }

        layers.into()
    }

    /// Project detail dialog: dimmed backdrop plus a centered panel. The
    /// panel captures clicks so only the backdrop and the close button
    /// dismiss it.
    fn project_panel(&self, index: usize) -> Element<'_, Message> {
        let Some(project) = self.content.projects.get(index) else {
            return Space::new().into();
        };

        let backdrop = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Projects(projects::Message::CloseDetails));

        let panel = projects::view_details(projects::DetailContext {
            i18n: &self.i18n,
            project,
            image: self.project_images.get(index).and_then(Option::as_ref),
        })
        .map(Message::Projects);

        let centered = Container::new(mouse_area(panel).on_press(Message::PanelPressed))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(centered)
            .into()
    }
}

/// Snap the page scrollable to a fractional vertical offset.
fn scroll_to(anchor: f32) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLL_ID),
        RelativeOffset { x: 0.0, y: anchor },
    )
}

/// Hand a URL to the platform opener.
fn open_url(url: &str) -> Task<Message> {
    if let Err(e) = open::that(url) {
        eprintln!("Failed to open {url}: {e}");
    }
    Task::none()
}

/// The four keys the modal overlays react to. Everything else is left
/// for the focused widget.
fn modal_key(key: &keyboard::Key) -> Option<KeyPress> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(KeyPress::Escape),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(KeyPress::ArrowLeft),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(KeyPress::ArrowRight),
        keyboard::Key::Named(keyboard::key::Named::Space) => Some(KeyPress::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_the_open_gallery() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        assert!(app.gallery.is_open());

        let _ = app.update(Message::ModalKey(KeyPress::Escape));
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn project_card_opens_the_detail_modal() {
        let mut app = App::default();
        let _ = app.update(Message::Projects(projects::Message::ShowDetails(1)));
        assert!(app.project_modal.is_open());
        assert_eq!(app.project_modal.selected(), Some(1));

        let _ = app.update(Message::Projects(projects::Message::CloseDetails));
        assert!(!app.project_modal.is_open());
    }

    #[test]
    fn thumbnail_is_ignored_while_project_modal_is_open() {
        let mut app = App::default();
        let _ = app.update(Message::Projects(projects::Message::ShowDetails(0)));
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));

        assert!(!app.gallery.is_open());
        assert!(app.project_modal.is_open());
    }

    #[test]
    fn project_modal_ignores_navigation_keys() {
        let mut app = App::default();
        let _ = app.update(Message::Projects(projects::Message::ShowDetails(0)));

        let _ = app.update(Message::ModalKey(KeyPress::ArrowRight));
        assert_eq!(app.project_modal.selected(), Some(0));

        let _ = app.update(Message::ModalKey(KeyPress::Escape));
        assert!(!app.project_modal.is_open());
    }

    #[test]
    fn scroll_lock_follows_the_open_modal() {
        let mut app = App::default();
        assert!(!app.scroll_lock.is_engaged());

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        assert!(app.scroll_lock.is_engaged());

        let _ = app.update(Message::Gallery(gallery::Message::ClosePressed));
        assert!(!app.scroll_lock.is_engaged());
    }

    #[test]
    fn successful_gallery_load_lands_in_the_cache() {
        let mut app = App::default();
        let data = ImageData::from_rgba(2, 2, vec![0; 16]);
        let source = app.gallery.entries()[0].source.clone();

        let _ = app.update(Message::Gallery(gallery::Message::Loaded(0, Ok(data))));
        assert!(app.cache.contains(&source));
    }

    #[test]
    fn copy_effect_pushes_a_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Skills(skills::Message::CopySkill(
            "Rust".to_string(),
        )));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn newsletter_signup_flashes_a_success_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Footer(footer::Message::EmailChanged(
            "reader@example.org".to_string(),
        )));
        let _ = app.update(Message::Footer(footer::Message::Subscribe));

        assert!(app.footer.is_subscribed());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn failed_avatar_load_keeps_the_fallback() {
        let mut app = App::default();
        let _ = app.update(Message::AvatarLoaded(Err(MediaError::Network(
            "unreachable".to_string(),
        ))));
        assert!(app.avatar.is_none());
    }

    #[test]
    fn modal_keys_cover_exactly_the_four_bindings() {
        use iced::keyboard::key::Named;

        assert_eq!(
            modal_key(&keyboard::Key::Named(Named::Escape)),
            Some(KeyPress::Escape)
        );
        assert_eq!(
            modal_key(&keyboard::Key::Named(Named::ArrowLeft)),
            Some(KeyPress::ArrowLeft)
        );
        assert_eq!(
            modal_key(&keyboard::Key::Named(Named::ArrowRight)),
            Some(KeyPress::ArrowRight)
        );
        assert_eq!(
            modal_key(&keyboard::Key::Named(Named::Space)),
            Some(KeyPress::Space)
        );
        assert_eq!(modal_key(&keyboard::Key::Named(Named::Enter)), None);
        assert_eq!(modal_key(&keyboard::Key::Character("a".into())), None);
    }

    #[test]
    fn view_renders_the_whole_page() {
        let app = App::default();
        let _ = app.view();
    }

    #[test]
    fn view_renders_with_open_overlays() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        let _ = app.view();

        let _ = app.update(Message::ModalKey(KeyPress::Escape));
        let _ = app.update(Message::Projects(projects::Message::ShowDetails(0)));
        let _ = app.view();
    }
}
