// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences.
//!
//! Settings live in `settings.toml` under the platform config
//! directory (`dirs::config_dir()/IcedFolio/`). Loading is forgiving:
//! a missing file yields the defaults and a malformed one is replaced
//! by them rather than failing startup, since the portfolio must come
//! up even with a corrupt preferences file. Content files are handled
//! differently, see [`crate::content`].

use crate::error::Result;
use crate::lightbox;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Locale in BCP-47 form, e.g. `fr` or `en-US`.
    pub language: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    /// Portfolio content file overriding the embedded defaults.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    #[serde(default)]
    pub gallery_navigation: Option<bool>,
    #[serde(default)]
    pub gallery_zoom: Option<bool>,
    #[serde(default)]
    pub gallery_captions: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme: Some(ThemeMode::System),
            content_path: None,
            gallery_navigation: Some(true),
            gallery_zoom: Some(true),
            gallery_captions: Some(true),
        }
    }
}

impl Config {
    /// Lightbox feature switches for the gallery, with absent fields
    /// falling back to enabled.
    #[must_use]
    pub fn gallery_options(&self) -> lightbox::Options {
        lightbox::Options {
            navigation: self.gallery_navigation.unwrap_or(true),
            zoom: self.gallery_zoom.unwrap_or(true),
            captions: self.gallery_captions.unwrap_or(true),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILE))
}

/// Load the settings from their default location. Missing file or
/// unknown config directory both yield the defaults.
pub fn load() -> Result<Config> {
    match default_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Persist the settings to their default location. A platform without
/// a config directory drops them silently.
pub fn save(config: &Config) -> Result<()> {
    match default_path() {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
