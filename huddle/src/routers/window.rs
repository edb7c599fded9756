use iced::{Size, Task, window};

use crate::app::{App, AppEvent};
use crate::layout;
use crate::widgets::reveal::{RevealEvent, RevealIntent};

/// Handle window resize events and propagate the new panel width.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.set_window_size(size);
    let width = current_panel_width(app);
    super::reveal::route(
        app,
        RevealEvent::Intent(RevealIntent::PanelWidthChanged(width)),
    )
}

/// Window size carried by an opened or resized event.
pub(crate) fn window_size(event: &window::Event) -> Option<Size> {
    match event {
        window::Event::Opened { size, .. } => Some(*size),
        window::Event::Resized(size) => Some(*size),
        _ => None,
    }
}

/// Compute the panel width from settings and current window geometry.
pub(crate) fn current_panel_width(app: &App) -> f32 {
    layout::panel_width(
        app.settings.panel_mode(),
        app.state.window_size.width,
    )
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size, window};

    use super::window_size;

    #[test]
    fn given_opened_window_when_inspected_then_actual_size_is_reported() {
        let event = window::Event::Opened {
            position: Some(Point::ORIGIN),
            size: Size::new(1440.0, 900.0),
        };
        assert_eq!(window_size(&event), Some(Size::new(1440.0, 900.0)));
    }

    #[test]
    fn given_resized_window_when_inspected_then_new_size_is_reported() {
        let event = window::Event::Resized(Size::new(800.0, 600.0));
        assert_eq!(window_size(&event), Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn given_unrelated_window_event_when_inspected_then_nothing_is_reported()
    {
        assert_eq!(window_size(&window::Event::Focused), None);
        assert_eq!(window_size(&window::Event::CloseRequested), None);
    }
}
