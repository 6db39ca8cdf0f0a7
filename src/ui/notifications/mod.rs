// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (conversion
//! done, save failed, ...) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` entry, `Kind`, actions and producer options
//! - [`manager`] - `Manager` owning the ordered stack and its expiry countdowns
//! - [`toast`] - Toast widget rendering the stack
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Options};
//!
//! let mut manager = Manager::<Message>::new();
//! manager.error("Save failed", "Disk full", Options::new());
//!
//! // In the view, layer the toasts over the page
//! let toasts = Toast::view_overlay(&manager, now).map(Message::Notification);
//! ```
//!
//! # Behavior
//!
//! - Default lifetime: 3s, 5s for errors, zero keeps the toast until dismissed
//! - Display order: insertion order, newest at the bottom
//! - Position: top-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Action, DefaultDurations, Kind, Notification, NotificationId, Options, DEFAULT_DURATION,
    DEFAULT_ERROR_DURATION,
};
pub use toast::Toast;
