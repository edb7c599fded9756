use crate::app::AppEvent;

/// Determines how the event loop treats an event while a reveal drag is in
/// flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event.
    Ignore,
}

/// Classify an incoming event against the active drag state.
///
/// Only one pointer interaction runs at a time, so panel taps are dropped
/// until the drag ends.
pub(crate) fn drag_guard(event: &AppEvent, is_dragging: bool) -> DragGuard {
    use DragGuard::*;

    if !is_dragging {
        return Allow;
    }

    match event {
        AppEvent::Panel(crate::widgets::panel::PanelEvent::Intent(_)) => {
            Ignore
        },
        AppEvent::Panel(crate::widgets::panel::PanelEvent::Effect(_))
        | AppEvent::Reveal(_)
        | AppEvent::Keyboard(_)
        | AppEvent::Window(_) => Allow,
    }
}
