// SPDX-License-Identifier: MPL-2.0
//! Localization via Fluent catalogs embedded in the binary.
//!
//! The startup locale comes from the CLI flag, the config file, or the
//! OS, in that order; `en-US` is the shipped fallback. Unresolved keys
//! render as a visible `MISSING:` marker rather than an empty string.

pub mod fluent;
