// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`sections`] - Hero, skills, projects, contact, and footer sections
//! - [`gallery`] - Thumbnail grid and the full screen lightbox overlay
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`widgets`] - Custom Iced widgets (modal-aware scroll gate)
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
