use std::time::Instant;

use iced::Task;

use super::event::{RevealEffect, RevealEvent, RevealIntent};
use super::state::RevealState;

/// Read-only context for reveal reduction.
pub(crate) struct RevealCtx {
    pub(crate) now: Instant,
}

/// Reduce a reveal intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut RevealState,
    event: RevealIntent,
    ctx: &RevealCtx,
) -> Task<RevealEvent> {
    match event {
        RevealIntent::PointerMoved { position } => {
            if let Some(dx) = state.pointer_moved(position.x, position.y) {
                state.controller_mut().drag_update(dx);
            }
            Task::none()
        },
        RevealIntent::PointerPressed => {
            if !state.pointer_pressed() {
                log::debug!("reveal press ignored: gesture already active");
            }
            Task::none()
        },
        RevealIntent::PointerReleased => {
            let Some(dx) = state.pointer_released() else {
                return Task::none();
            };

            let controller = state.controller_mut();
            let commit = controller.drag_end(dx, ctx.now);
            Task::done(RevealEvent::Effect(RevealEffect::Committed {
                commit,
                is_open: controller.is_open(),
            }))
        },
        RevealIntent::Close => {
            state.cancel_gesture();
            state.controller_mut().close(ctx.now);
            Task::none()
        },
        RevealIntent::PanelWidthChanged(width) => {
            state.controller_mut().set_panel_width(width, ctx.now);
            Task::none()
        },
        RevealIntent::Tick(now) => {
            state.controller_mut().tick(now);
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use huddle_ui_reveal::RevealConfig;
    use iced::Point;

    use super::RevealCtx;
    use crate::widgets::reveal::{RevealIntent, RevealWidget};

    const PANEL_WIDTH: f32 = 220.0;

    fn widget() -> RevealWidget {
        RevealWidget::new(PANEL_WIDTH, RevealConfig::default(), 10.0)
    }

    fn drag(widget: &mut RevealWidget, from_x: f32, to_x: f32, now: Instant) {
        let ctx = RevealCtx { now };
        let _ = widget.reduce(
            RevealIntent::PointerMoved {
                position: Point::new(from_x, 200.0),
            },
            &ctx,
        );
        let _ = widget.reduce(RevealIntent::PointerPressed, &ctx);
        let _ = widget.reduce(
            RevealIntent::PointerMoved {
                position: Point::new(to_x, 200.0),
            },
            &ctx,
        );
    }

    #[test]
    fn given_press_and_move_when_reduced_then_offset_follows_pointer() {
        let mut widget = widget();
        drag(&mut widget, 10.0, 90.0, Instant::now());

        let vm = widget.vm();
        assert_eq!(vm.rendered_offset, 80.0);
        assert!(vm.is_dragging);
        assert!(widget.is_dragging());
        assert!(!widget.is_open());
    }

    #[test]
    fn given_long_drag_when_released_then_panel_opens_and_settles() {
        let start = Instant::now();
        let mut widget = widget();
        drag(&mut widget, 10.0, 170.0, start);

        let _ = widget
            .reduce(RevealIntent::PointerReleased, &RevealCtx { now: start });
        assert!(widget.is_open());
        assert!(widget.is_animating());
        assert!(!widget.is_dragging());

        let settled = start + Duration::from_secs(1);
        let _ = widget.reduce(
            RevealIntent::Tick(settled),
            &RevealCtx { now: settled },
        );
        assert!(!widget.is_animating());
        assert_eq!(widget.vm().rendered_offset, PANEL_WIDTH);
    }

    #[test]
    fn given_tap_when_released_then_nothing_changes() {
        let now = Instant::now();
        let mut widget = widget();
        drag(&mut widget, 10.0, 14.0, now);

        let _ =
            widget.reduce(RevealIntent::PointerReleased, &RevealCtx { now });
        assert!(!widget.is_open());
        assert!(!widget.is_animating());
        assert_eq!(widget.vm().rendered_offset, 0.0);
    }

    #[test]
    fn given_drag_in_flight_when_closed_then_gesture_is_dropped() {
        let now = Instant::now();
        let mut widget = widget();
        drag(&mut widget, 10.0, 150.0, now);

        let _ = widget.reduce(RevealIntent::Close, &RevealCtx { now });
        assert!(!widget.is_dragging());
        assert!(!widget.is_open());

        let _ =
            widget.reduce(RevealIntent::PointerReleased, &RevealCtx { now });
        assert!(!widget.is_open());
    }

    #[test]
    fn given_width_change_when_closed_then_view_model_reports_new_width() {
        let now = Instant::now();
        let mut widget = widget();
        let _ = widget
            .reduce(RevealIntent::PanelWidthChanged(70.0), &RevealCtx { now });

        assert_eq!(widget.vm().panel_width, 70.0);
        assert_eq!(widget.vm().rendered_offset, 0.0);
    }
}
