// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`badge`] - Tinted status and label chips
//! - [`empty_state`] - Placeholder for lists without results
//! - [`page_header`] - Screen title and subtitle row

pub mod badge;
pub mod empty_state;
pub mod page_header;
