// SPDX-License-Identifier: MPL-2.0
//! Overlay entries and their configuration.

use crate::ui::design_tokens::sizing;
use crate::ui::entry::EntryId;

/// Tag type for overlay identifiers.
#[derive(Debug)]
pub enum OverlayTag {}

/// Unique identifier for an open overlay.
pub type OverlayId = EntryId<OverlayTag>;

/// Width class of an overlay card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    /// Spans the window minus the outer margin.
    Full,
}

impl Size {
    /// Maximum card width in logical pixels, `None` for [`Size::Full`].
    #[must_use]
    pub fn max_width(self) -> Option<f32> {
        match self {
            Size::Small => Some(sizing::OVERLAY_SM),
            Size::Medium => Some(sizing::OVERLAY_MD),
            Size::Large => Some(sizing::OVERLAY_LG),
            Size::ExtraLarge => Some(sizing::OVERLAY_XL),
            Size::Full => None,
        }
    }
}

/// Parameters accepted by [`super::Manager::open`].
///
/// `V` describes the content; the stack stores it untouched and the host's
/// render function turns it into widgets. All dismissal flags default to `true`.
#[derive(Debug, Clone)]
pub struct OverlayConfig<V> {
    pub(super) view: Option<V>,
    pub(super) title: Option<String>,
    pub(super) size: Size,
    pub(super) closable: bool,
    pub(super) close_on_backdrop: bool,
    pub(super) close_on_escape: bool,
}

impl<V> OverlayConfig<V> {
    /// Creates a configuration rendering `view`.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            view: Some(view),
            ..Self::empty()
        }
    }

    /// Creates a configuration without content; the body renders empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            view: None,
            title: None,
            size: Size::default(),
            closable: true,
            close_on_backdrop: true,
            close_on_escape: true,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Shows or hides the header close button.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn close_on_backdrop(mut self, enabled: bool) -> Self {
        self.close_on_backdrop = enabled;
        self
    }

    #[must_use]
    pub fn close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = enabled;
        self
    }
}

impl<V> Default for OverlayConfig<V> {
    fn default() -> Self {
        Self::empty()
    }
}

/// An open overlay held by the manager.
#[derive(Debug, Clone)]
pub struct Overlay<V> {
    id: OverlayId,
    config: OverlayConfig<V>,
}

impl<V> Overlay<V> {
    pub(super) fn new(id: OverlayId, config: OverlayConfig<V>) -> Self {
        Self { id, config }
    }

    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.id
    }

    /// Content descriptor as supplied to `open`.
    #[must_use]
    pub fn view(&self) -> Option<&V> {
        self.config.view.as_ref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.config.size
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.config.closable
    }

    #[must_use]
    pub fn closes_on_backdrop(&self) -> bool {
        self.config.close_on_backdrop
    }

    #[must_use]
    pub fn closes_on_escape(&self) -> bool {
        self.config.close_on_escape
    }
}
