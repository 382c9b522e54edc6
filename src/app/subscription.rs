// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the gallery.
//!
//! Window resizes keep every preview's viewport current; an Escape press that
//! no widget captured closes the open preview.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(&event, status))
}

fn route_event(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    }
}
