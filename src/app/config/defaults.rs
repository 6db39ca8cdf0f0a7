// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetimes and the bounds offered in settings

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default lifetime of success, warning and info toasts (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Default lifetime of error toasts (milliseconds).
pub const DEFAULT_ERROR_DURATION_MS: u64 = 5000;

/// Shortest lifetime offered by the settings sliders (milliseconds).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 1000;

/// Longest lifetime offered by the settings sliders (milliseconds).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 15000;

/// Slider granularity (milliseconds).
pub const NOTIFICATION_DURATION_STEP_MS: u64 = 500;

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS <= DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_ERROR_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS % NOTIFICATION_DURATION_STEP_MS == 0);
};
