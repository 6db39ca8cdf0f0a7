// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Issues,
    Documents,
    Settings,
}

impl Screen {
    /// Sidebar order.
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Issues,
        Screen::Documents,
        Screen::Settings,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Dashboard => "nav-dashboard",
            Screen::Issues => "nav-issues",
            Screen::Documents => "nav-documents",
            Screen::Settings => "nav-settings",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Screen::Dashboard => "▦",
            Screen::Issues => "◉",
            Screen::Documents => "▤",
            Screen::Settings => "⚙",
        }
    }
}
