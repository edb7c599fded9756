use iced::Task;

use super::{App, AppEvent};
use crate::guards::{DragGuard, drag_guard};
use crate::routers;

/// Thin dispatch: guard the event, then route it to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match drag_guard(&event, app.widgets.reveal.is_dragging()) {
        DragGuard::Allow => route(app, event),
        DragGuard::Ignore => Task::none(),
    }
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Reveal widget
        AppEvent::Reveal(event) => routers::reveal::route(app, event),
        // Panel widget
        AppEvent::Panel(event) => routers::panel::route(app, event),
        // Direct operations
        AppEvent::Keyboard(event) => routers::keyboard::handle_key(app, event),
        AppEvent::Window(event) => {
            match routers::window::window_size(&event) {
                Some(size) => routers::window::handle_resize(app, size),
                None => Task::none(),
            }
        },
    }
}
