// SPDX-License-Identifier: MPL-2.0
//! Skills section with search filtering and copyable chips.
//!
//! Skills are grouped by category. A search field narrows the chips to
//! those whose name contains the query (case-insensitive); a query that
//! matches a category name keeps that whole group, and categories with
//! no remaining match disappear. Clicking a chip copies the skill name
//! to the clipboard.

use super::section_heading;
use crate::content::SkillGroup;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Group cards per row.
const GROUPS_PER_ROW: usize = 2;

/// Chips per row inside a group card.
const CHIPS_PER_ROW: usize = 4;

/// Local state: the current search query.
#[derive(Debug, Default)]
pub struct State {
    query: String,
}

/// Messages emitted by the skills section.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search query changed.
    QueryChanged(String),
    /// A skill chip was clicked.
    CopySkill(String),
}

/// Effects the shell must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Copy the given text to the clipboard.
    Copy(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Process a message, updating the query or requesting a copy.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Effect::None
            }
            Message::CopySkill(skill) => Effect::Copy(skill),
        }
    }
}

/// Narrow the groups to skills matching the query.
///
/// An empty or whitespace-only query keeps everything. A query matching
/// a category name keeps that group in full; otherwise a group survives
/// only while at least one of its skills matches.
#[must_use]
pub fn filter<'a>(groups: &'a [SkillGroup], query: &str) -> Vec<(&'a str, Vec<&'a str>)> {
    let needle = query.trim().to_lowercase();

    groups
        .iter()
        .filter_map(|group| {
            let category_matches =
                needle.is_empty() || group.category.to_lowercase().contains(&needle);

            let skills: Vec<&str> = group
                .skills
                .iter()
                .filter(|skill| category_matches || skill.to_lowercase().contains(&needle))
                .map(String::as_str)
                .collect();

            if skills.is_empty() {
                None
            } else {
                Some((group.category.as_str(), skills))
            }
        })
        .collect()
}

/// Contextual data needed to render the skills section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub groups: &'a [SkillGroup],
    pub state: &'a State,
}

/// Render the skills section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = section_heading(ctx.i18n.tr("section-skills"));
    let intro = Text::new(ctx.i18n.tr("skills-intro")).size(typography::BODY);

    let search = text_input(&ctx.i18n.tr("skills-search-placeholder"), ctx.state.query())
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(320.0));

    let filtered = filter(ctx.groups, ctx.state.query());

    let body: Element<'_, Message> = if filtered.is_empty() && !ctx.state.query().trim().is_empty()
    {
        Text::new(
            ctx.i18n
                .tr_with_args("skills-no-results", &[("query", ctx.state.query())]),
        )
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        })
        .into()
    } else {
        build_group_grid(&filtered)
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(intro)
        .push(search)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .into()
}

/// Lay out the filtered groups as rows of cards.
fn build_group_grid<'a>(filtered: &[(&'a str, Vec<&'a str>)]) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::MD);

    for row_groups in filtered.chunks(GROUPS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::MD);
        for (category, skills) in row_groups {
            row = row.push(build_group_card(category, skills));
        }
        grid = grid.push(row);
    }

    grid.into()
}

/// One category card: heading plus copyable chips.
fn build_group_card<'a>(category: &'a str, skills: &[&'a str]) -> Element<'a, Message> {
    let heading = Text::new(category)
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let mut chips = Column::new().spacing(spacing::XS);
    for chunk in skills.chunks(CHIPS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::XS);
        for skill in chunk {
            row = row.push(
                button(Text::new((*skill).to_string()).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::pill)
                    .on_press(Message::CopySkill((*skill).to_string())),
            );
        }
        chips = chips.push(row);
    }

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(chips),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
