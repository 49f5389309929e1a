// SPDX-License-Identifier: MPL-2.0
//! Image gallery: a thumbnail grid opening into a full screen viewer.
//!
//! The [`component`] owns the viewer state and the decoded images, the
//! [`grid`] renders the thumbnails and the [`modal`] renders the viewer
//! overlay. Keyboard handling and scroll locking are shared with the
//! project modal through [`crate::lightbox`].

pub mod component;
pub mod grid;
pub mod modal;

pub use component::{Gallery, Message, Slot};
