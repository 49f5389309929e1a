// SPDX-License-Identifier: MPL-2.0
//! Page sections of the portfolio.
//!
//! Each submodule renders one vertical slice of the scrollable page and
//! follows the same shape: a `ViewContext` with borrowed data, a `Message`
//! enum for interactions, and a pure `update` (or `State::handle` where the
//! section keeps local state) that returns an effect for the shell to act on.

pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::ui::design_tokens::typography;
use iced::widget::{text, Text};

/// The vertical sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Gallery,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Gallery,
        Section::Contact,
    ];

    /// The i18n key for the section title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::About => "section-about",
            Section::Skills => "section-skills",
            Section::Projects => "section-projects",
            Section::Gallery => "section-gallery",
            Section::Contact => "section-contact",
        }
    }

    /// Approximate vertical position of the section within the page,
    /// as a fraction usable with `RelativeOffset`.
    #[must_use]
    pub fn scroll_anchor(self) -> f32 {
        match self {
            Section::About => 0.0,
            Section::Skills => 0.22,
            Section::Projects => 0.45,
            Section::Gallery => 0.68,
            Section::Contact => 1.0,
        }
    }
}

/// Heading shared by all sections below the hero.
pub fn section_heading(title: String) -> Text<'static> {
    text(title).size(typography::TITLE_LG)
}

/// Loose shape check for email addresses.
///
/// Accepts `local@host.tld` where every part is non-empty and the whole
/// string contains no whitespace. Deliberately permissive beyond that;
/// real validation happens when the address is actually used.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
