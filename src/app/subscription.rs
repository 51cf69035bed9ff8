// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events only matter while the lightbox is open, and the periodic
//! tick only runs while something on screen still changes on its own. Both
//! subscriptions drop away entirely the rest of the time.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Keyboard navigation for the lightbox.
///
/// Arrow keys step through the sequence and Escape dismisses it. The
/// subscription only exists while the lightbox is open, so the page keeps
/// its default key handling the rest of the time.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match status {
        event::Status::Captured => None,
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::Next)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::Previous)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::Close)),
            _ => None,
        },
    })
}

/// Periodic tick for entrance fades and toast auto-dismiss.
pub fn create_tick_subscription(
    animating: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if animating || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
