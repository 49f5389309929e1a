// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a desktop portfolio site built with the Iced GUI framework.
//!
//! It renders a single scrolling page (hero, skills, projects, gallery,
//! contact, footer) with a modal image lightbox, and demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod lightbox;
pub mod media;
pub mod ui;
