use iced::Task;
use iced::keyboard::{self, Key, key};

use crate::app::{App, AppEvent};
use crate::widgets::reveal::{RevealEvent, RevealIntent};

/// Handle global keyboard shortcuts.
pub(crate) fn handle_key(
    app: &mut App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    let keyboard::Event::KeyPressed { key, .. } = event else {
        return Task::none();
    };

    if is_close_key(&key) && app.widgets.reveal.is_open() {
        return super::reveal::route(
            app,
            RevealEvent::Intent(RevealIntent::Close),
        );
    }

    Task::none()
}

fn is_close_key(key: &Key) -> bool {
    matches!(key, Key::Named(key::Named::Escape))
}
