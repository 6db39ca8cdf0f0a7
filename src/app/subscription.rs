// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are conditional: the tick runs only while some toast is
//! counting down and the keyboard listener only while an overlay is open.

use super::Message;
use crate::ui::overlays::OverlayMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Resolution of the toast countdowns and progress bars.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes Escape presses to the overlay stack while overlays are open.
pub fn create_escape_subscription(has_overlays: bool) -> Subscription<Message> {
    if !has_overlays {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Overlay(OverlayMessage::EscapePressed)),
        _ => None,
    })
}
