// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.
//!
//! The page styles itself from the active iced [`iced::Theme`] plus the
//! design tokens, so all this module decides is which of the two built-in
//! themes to hand the runtime. `System` asks the desktop environment
//! through `dark-light` and falls back to dark when detection fails.

use serde::{Deserialize, Serialize};

/// User-selectable theme preference, persisted in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark, resolving `System` against
    /// the desktop environment.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}
