// SPDX-License-Identifier: MPL-2.0
//! Image asset handling for the portfolio: entry model, loading and
//! decoding, and a bounded in-memory cache.

pub mod cache;
pub mod image;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Re-export commonly used types
pub use cache::{AssetCache, CacheConfig};
pub use image::{http_client, load_asset, ImageData};

/// One image in a gallery or section, supplied by the content layer and
/// never mutated by the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Local path or http(s) URL of the asset.
    pub source: String,
    /// Short description used where the image itself cannot be shown.
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Caption displayed with the open image when captions are enabled.
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageEntry {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: None,
            caption: None,
        }
    }

    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Where the asset lives, decided by the source syntax.
    #[must_use]
    pub fn asset_source(&self) -> AssetSource {
        if self.source.starts_with("http://") || self.source.starts_with("https://") {
            AssetSource::Remote(self.source.clone())
        } else {
            AssetSource::Local(PathBuf::from(&self.source))
        }
    }
}

/// Resolved origin of an image asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Fetched over http(s).
    Remote(String),
    /// Read from the local filesystem.
    Local(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_source_resolves_to_remote() {
        let entry = ImageEntry::new("https://example.org/shot.png");
        assert_eq!(
            entry.asset_source(),
            AssetSource::Remote("https://example.org/shot.png".to_string())
        );
    }

    #[test]
    fn plain_path_resolves_to_local() {
        let entry = ImageEntry::new("assets/shots/first.png");
        assert_eq!(
            entry.asset_source(),
            AssetSource::Local(PathBuf::from("assets/shots/first.png"))
        );
    }

    #[test]
    fn builder_sets_optional_fields() {
        let entry = ImageEntry::new("a.png")
            .with_alt_text("First screenshot")
            .with_caption("Launch day");
        assert_eq!(entry.alt_text.as_deref(), Some("First screenshot"));
        assert_eq!(entry.caption.as_deref(), Some("Launch day"));
    }
}
