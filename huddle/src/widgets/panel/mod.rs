mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{PanelEffect, PanelEvent, PanelIntent};
use iced::Task;
pub(crate) use model::{PanelViewModel, room_title};
use state::PanelState;

/// Panel widget owning the spaces rail and rooms list selection.
pub(crate) struct PanelWidget {
    state: PanelState,
}

impl PanelWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PanelState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: PanelIntent) -> Task<PanelEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PanelViewModel {
        PanelViewModel {
            active_space: self.state.active_space(),
            selected_room: self.state.selected_room(),
        }
    }
}
