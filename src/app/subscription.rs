// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, window, Subscription};

/// Forwards window resizes so the toast can stay right-aligned.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}
