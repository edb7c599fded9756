mod event;
mod model;
mod reducer;
mod state;

pub(crate) use event::{RevealEffect, RevealEvent, RevealIntent};
use huddle_ui_reveal::RevealConfig;
use iced::Task;
pub(crate) use model::{REVEAL_TICK_MS, RevealViewModel};
pub(crate) use reducer::RevealCtx;
use state::RevealState;

/// Reveal widget owning the drag controller and gesture tracker.
pub(crate) struct RevealWidget {
    state: RevealState,
}

impl RevealWidget {
    /// Construct a closed reveal widget.
    pub(crate) fn new(
        panel_width: f32,
        config: RevealConfig,
        min_distance: f32,
    ) -> Self {
        Self {
            state: RevealState::new(panel_width, config, min_distance),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: RevealIntent,
        ctx: &RevealCtx,
    ) -> Task<RevealEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> RevealViewModel {
        let controller = self.state.controller();
        RevealViewModel {
            rendered_offset: controller.rendered_offset(),
            panel_width: controller.panel_width(),
            is_dragging: controller.is_dragging(),
        }
    }

    /// Return whether the panel is committed open.
    pub(crate) fn is_open(&self) -> bool {
        self.state.controller().is_open()
    }

    /// Return whether a recognized drag is in flight.
    pub(crate) fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Return whether the settle animation needs ticks.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.controller().is_animating()
    }
}
