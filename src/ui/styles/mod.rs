// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles, grouped by widget kind.
//!
//! Sections reference these as `styles::button::primary` and friends so
//! every surface pulls its colors from the same token set.

pub mod button;
pub mod container;
pub mod overlay;
