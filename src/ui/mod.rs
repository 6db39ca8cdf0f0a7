// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`dashboard`] - Statistics and recent activity
//! - [`issues`] - Issue table with conversion and export
//! - [`documents`] - Generated documents grid
//! - [`settings`] - Preferences and the notification/overlay playgrounds
//! - [`dialogs`] - Contents of the overlays opened by the screens
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast stack with auto-expiry
//! - [`overlays`] - Modal overlay stack
//! - [`entry`] - Typed ids and countdowns shared by both stacks
//! - [`components`] - Reusable UI components (badge, empty state, page header)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation sidebar

pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod dialogs;
pub mod documents;
pub mod entry;
pub mod issues;
pub mod navbar;
pub mod notifications;
pub mod overlays;
pub mod settings;
pub mod styles;
pub mod theming;
