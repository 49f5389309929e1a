// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for local files and remote URLs.

use crate::error::MediaError;
use crate::media::AssetSource;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::Path;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Approximate display memory footprint, four bytes per pixel.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// HTTP client used for remote assets.
///
/// Redirects are followed up to a fixed limit so a misconfigured host
/// cannot loop the loader forever.
pub fn http_client() -> Result<reqwest::Client, MediaError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| MediaError::Network(e.to_string()))
}

/// Load and decode the asset behind `source`.
///
/// # Errors
///
/// Returns [`MediaError::Io`] when a local file cannot be read,
/// [`MediaError::HttpStatus`] or [`MediaError::Network`] when a remote
/// fetch fails, and [`MediaError::UnsupportedFormat`] or
/// [`MediaError::DecodeFailed`] when the bytes are not a usable image.
pub async fn load_asset(
    client: reqwest::Client,
    source: AssetSource,
) -> Result<ImageData, MediaError> {
    match source {
        AssetSource::Local(path) => load_local(&path).await,
        AssetSource::Remote(url) => load_remote(&client, &url).await,
    }
}

async fn load_local(path: &Path) -> Result<ImageData, MediaError> {
    let bytes = tokio::fs::read(path).await?;
    decode(&bytes)
}

async fn load_remote(client: &reqwest::Client, url: &str) -> Result<ImageData, MediaError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MediaError::HttpStatus(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Result<ImageData, MediaError> {
    let decoded = image_rs::load_from_memory(bytes).map_err(|e| match e {
        image_rs::ImageError::Unsupported(_) => MediaError::UnsupportedFormat,
        other => MediaError::DecodeFailed(other.to_string()),
    })?;

    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("failed to encode test png");
        bytes
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode(&png_bytes(4, 2)).expect("png should decode");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.size_bytes(), 4 * 2 * 4);
    }

    #[test]
    fn decode_garbage_reports_unsupported_format() {
        match decode(b"definitely not an image") {
            Err(MediaError::UnsupportedFormat) => {}
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_local_reads_and_decodes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");
        std::fs::write(&image_path, png_bytes(6, 3)).expect("failed to write temporary png");

        let data = load_local(&image_path)
            .await
            .expect("png should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[tokio::test]
    async fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_local(&missing_path).await {
            Err(MediaError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn http_client_builds() {
        assert!(http_client().is_ok());
    }
}
