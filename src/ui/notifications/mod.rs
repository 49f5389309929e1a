// SPDX-License-Identifier: MPL-2.0
//! Toast feedback for clipboard copies, form sends, and load errors.
//!
//! Toasts carry Fluent keys rather than resolved strings, so messages
//! retranslate when the language changes while one is on screen. Up to
//! three show at once in the bottom-right corner; success and info
//! fade after three seconds, warnings after five, and errors wait for
//! a dismiss click.

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
