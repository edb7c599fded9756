use std::time::Duration;

use iced::{Event, Subscription, event, mouse, window};

use super::{App, AppEvent};
use crate::widgets::reveal::{REVEAL_TICK_MS, RevealEvent, RevealIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);
    let pointer_subs = event::listen_with(pointer_event);

    let mut subs = vec![win_subs, key_subs, pointer_subs];

    // Settle animation tick, only while the offset is easing.
    if app.widgets.reveal.is_animating() {
        let tick = iced::time::every(Duration::from_millis(REVEAL_TICK_MS))
            .map(|now| {
                AppEvent::Reveal(RevealEvent::Intent(RevealIntent::Tick(now)))
            });
        subs.push(tick);
    }

    Subscription::batch(subs)
}

/// Feed window-level pointer samples to the reveal gesture tracker.
///
/// Positions come from the window, not from the sliding content, so the
/// drag translation stays stable while the content moves under the pointer.
/// Leaving the window ends the gesture like a release.
fn pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    let intent = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            RevealIntent::PointerMoved { position }
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft) => {
            RevealIntent::PointerReleased
        },
        _ => return None,
    };

    Some(AppEvent::Reveal(RevealEvent::Intent(intent)))
}
