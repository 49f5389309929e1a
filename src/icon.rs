// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Uses the project SVG and rasterizes it at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the SVG so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_folio.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
