// SPDX-License-Identifier: MPL-2.0
//! `issue2md_console` is the desktop control console of Issue2MD, built with
//! the Iced GUI framework.
//!
//! Its core is a pair of UI stacks: transient toast notifications with
//! auto-expiry and modal overlays with their own backdrops. The dashboard,
//! issue, document and settings screens run on sample data and exist to drive
//! those stacks.

pub mod app;
pub mod error;
pub mod format;
pub mod logging;
pub mod mock;
pub mod ui;
