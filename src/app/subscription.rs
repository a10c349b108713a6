// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are translated into top-level
//! [`Message`]s here, so `update` never sees raw events.

use super::message::PageCommand;
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// How often toast timers are checked while any toast is showing.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Window and keyboard events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored && modifiers.is_empty() =>
        {
            page_command_for_key(&key).map(Message::Navigate)
        }
        _ => None,
    })
}

/// Drives toast auto-dismiss; idle when nothing is shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn page_command_for_key(key: &Key) -> Option<PageCommand> {
    match key {
        Key::Named(Named::ArrowLeft | Named::PageUp) => Some(PageCommand::Previous),
        Key::Named(Named::ArrowRight | Named::PageDown) => Some(PageCommand::Next),
        Key::Named(Named::Home) => Some(PageCommand::First),
        Key::Named(Named::End) => Some(PageCommand::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_keys_map_to_commands() {
        assert_eq!(
            page_command_for_key(&Key::Named(Named::ArrowLeft)),
            Some(PageCommand::Previous)
        );
        assert_eq!(
            page_command_for_key(&Key::Named(Named::PageUp)),
            Some(PageCommand::Previous)
        );
        assert_eq!(
            page_command_for_key(&Key::Named(Named::ArrowRight)),
            Some(PageCommand::Next)
        );
        assert_eq!(
            page_command_for_key(&Key::Named(Named::PageDown)),
            Some(PageCommand::Next)
        );
        assert_eq!(
            page_command_for_key(&Key::Named(Named::Home)),
            Some(PageCommand::First)
        );
        assert_eq!(
            page_command_for_key(&Key::Named(Named::End)),
            Some(PageCommand::Last)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(page_command_for_key(&Key::Named(Named::Enter)), None);
        assert_eq!(page_command_for_key(&Key::Character("n".into())), None);
    }
}
