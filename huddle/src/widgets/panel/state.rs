use super::model::{ROOMS_COUNT, SPACES_COUNT};

/// Internal placeholder selection state.
#[derive(Debug, Default)]
pub(super) struct PanelState {
    active_space: usize,
    selected_room: Option<usize>,
}

impl PanelState {
    pub(super) fn active_space(&self) -> usize {
        self.active_space
    }

    pub(super) fn selected_room(&self) -> Option<usize> {
        self.selected_room
    }

    /// Activate a space. Returns `false` for out-of-range indices.
    pub(super) fn select_space(&mut self, index: usize) -> bool {
        if index >= SPACES_COUNT {
            return false;
        }
        self.active_space = index;
        true
    }

    /// Select a room. Returns `false` for out-of-range indices.
    pub(super) fn select_room(&mut self, index: usize) -> bool {
        if index >= ROOMS_COUNT {
            return false;
        }
        self.selected_room = Some(index);
        true
    }
}
