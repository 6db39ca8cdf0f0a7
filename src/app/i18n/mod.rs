// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Locales are resolved from
//! the CLI, then the config file, then the OS, falling back to `en-US`, and can
//! be switched at runtime from the settings screen.

pub mod fluent;
