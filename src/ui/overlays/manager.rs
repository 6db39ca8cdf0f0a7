// SPDX-License-Identifier: MPL-2.0
//! Overlay stack management.
//!
//! Overlays are kept in opening order; the last one is drawn on top and is
//! the only one that reacts to the escape key.

use super::overlay::{Overlay, OverlayConfig, OverlayId, OverlayTag};
use crate::ui::entry::IdSource;

/// Messages emitted by the modal layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The translucent area around an overlay's card was pressed.
    BackdropPressed(OverlayId),
    /// The header close button was pressed.
    ClosePressed(OverlayId),
    /// The escape key was pressed while at least one overlay was open.
    EscapePressed,
}

/// Manages the overlay stack.
///
/// `V` is the host's content descriptor type.
#[derive(Debug)]
pub struct Manager<V> {
    entries: Vec<Overlay<V>>,
    ids: IdSource<OverlayTag>,
}

impl<V> Default for Manager<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ids: IdSource::new(),
        }
    }
}

impl<V> Manager<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new overlay on top of the stack and returns its ID.
    pub fn open(&mut self, config: OverlayConfig<V>) -> OverlayId {
        let id = self.ids.next_id();
        tracing::debug!(
            %id,
            size = ?config.size,
            depth = self.entries.len() + 1,
            "overlay opened"
        );
        self.entries.push(Overlay::new(id, config));
        id
    }

    /// Closes a specific overlay. Returns `false` if it was not open.
    pub fn close(&mut self, id: OverlayId) -> bool {
        match self.entries.iter().position(|o| o.id() == id) {
            Some(pos) => {
                self.entries.remove(pos);
                tracing::debug!(%id, depth = self.entries.len(), "overlay closed");
                true
            }
            None => false,
        }
    }

    /// Closes every overlay.
    pub fn close_all(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "all overlays closed");
        }
        self.entries.clear();
    }

    /// Backdrop press on `id`: closes it when backdrop dismissal is enabled.
    pub fn handle_backdrop(&mut self, id: OverlayId) -> bool {
        match self.get(id) {
            Some(overlay) if overlay.closes_on_backdrop() => self.close(id),
            _ => false,
        }
    }

    /// Close button press on `id`: closes it when it is closable.
    pub fn handle_close_button(&mut self, id: OverlayId) -> bool {
        match self.get(id) {
            Some(overlay) if overlay.is_closable() => self.close(id),
            _ => false,
        }
    }

    /// Escape press: closes the topmost overlay if it allows it.
    ///
    /// Overlays underneath are never affected, even when the topmost one
    /// ignores escape. Returns the closed overlay's ID.
    pub fn handle_escape(&mut self) -> Option<OverlayId> {
        let top = self.topmost()?;
        if !top.closes_on_escape() {
            return None;
        }
        let id = top.id();
        self.close(id);
        Some(id)
    }

    /// Applies a modal message. Returns whether an overlay was closed.
    pub fn handle_message(&mut self, message: Message) -> bool {
        match message {
            Message::BackdropPressed(id) => self.handle_backdrop(id),
            Message::ClosePressed(id) => self.handle_close_button(id),
            Message::EscapePressed => self.handle_escape().is_some(),
        }
    }

    /// Returns the open overlays from bottom to top.
    pub fn entries(&self) -> impl Iterator<Item = &Overlay<V>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn topmost(&self) -> Option<&Overlay<V>> {
        self.entries.last()
    }

    #[must_use]
    pub fn get(&self, id: OverlayId) -> Option<&Overlay<V>> {
        self.entries.iter().find(|o| o.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::overlays::Size;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum View {
        Detail(u32),
        Confirm,
    }

    fn views(manager: &Manager<View>) -> Vec<View> {
        manager.entries().filter_map(|o| o.view().cloned()).collect()
    }

    #[test]
    fn overlays_stack_in_opening_order() {
        let mut manager = Manager::new();
        manager.open(OverlayConfig::new(View::Detail(1)));
        manager.open(OverlayConfig::new(View::Confirm));

        assert_eq!(manager.len(), 2);
        assert_eq!(views(&manager), [View::Detail(1), View::Confirm]);
        assert_eq!(manager.topmost().and_then(Overlay::view), Some(&View::Confirm));
    }

    #[test]
    fn close_all_empties_the_stack() {
        let mut manager = Manager::new();
        manager.open(OverlayConfig::new(View::Detail(1)));
        manager.open(OverlayConfig::new(View::Detail(2)));
        manager.close_all();

        assert!(manager.is_empty());
    }

    #[test]
    fn close_removes_only_the_given_overlay() {
        let mut manager = Manager::new();
        let first = manager.open(OverlayConfig::new(View::Detail(1)));
        manager.open(OverlayConfig::new(View::Detail(2)));

        assert!(manager.close(first));
        assert!(!manager.close(first));
        assert_eq!(views(&manager), [View::Detail(2)]);
    }

    #[test]
    fn escape_closes_only_the_topmost() {
        let mut manager = Manager::new();
        let bottom = manager.open(OverlayConfig::new(View::Detail(1)));
        let top = manager.open(OverlayConfig::new(View::Detail(2)));

        assert_eq!(manager.handle_escape(), Some(top));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.topmost().map(Overlay::id), Some(bottom));
    }

    #[test]
    fn escape_is_consumed_when_topmost_opts_out() {
        let mut manager = Manager::new();
        manager.open(OverlayConfig::new(View::Detail(1)));
        manager.open(OverlayConfig::new(View::Confirm).close_on_escape(false));

        assert_eq!(manager.handle_escape(), None);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn escape_on_empty_stack_is_a_no_op() {
        let mut manager = Manager::<View>::new();
        assert_eq!(manager.handle_escape(), None);
    }

    #[test]
    fn backdrop_respects_flag() {
        let mut manager = Manager::new();
        let locked = manager.open(OverlayConfig::new(View::Confirm).close_on_backdrop(false));
        let open = manager.open(OverlayConfig::new(View::Detail(1)));

        assert!(!manager.handle_message(Message::BackdropPressed(locked)));
        assert!(manager.handle_message(Message::BackdropPressed(open)));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn close_button_respects_closable() {
        let mut manager = Manager::new();
        let id = manager.open(OverlayConfig::new(View::Confirm).closable(false));

        assert!(!manager.handle_close_button(id));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn missing_view_is_stored_as_absent() {
        let mut manager = Manager::<View>::new();
        let id = manager.open(OverlayConfig::empty().title("Empty").size(Size::Small));
        let overlay = manager.get(id);

        assert!(overlay.is_some_and(|o| o.view().is_none()));
        assert_eq!(overlay.map(Overlay::size), Some(Size::Small));
    }
}
