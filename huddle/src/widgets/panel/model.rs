/// Number of placeholder spaces on the rail.
pub(crate) const SPACES_COUNT: usize = 20;
/// Number of placeholder rooms in the list.
pub(crate) const ROOMS_COUNT: usize = 30;
/// Preview line shown under every placeholder room.
pub(crate) const ROOM_PREVIEW: &str = "Last message preview...";

/// Read-only view model for the spaces rail and rooms list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PanelViewModel {
    pub(crate) active_space: usize,
    pub(crate) selected_room: Option<usize>,
}

/// Display title of the placeholder room at `index`.
pub(crate) fn room_title(index: usize) -> String {
    format!("Room {}", index + 1)
}

/// Display label of the placeholder space at `index`.
pub(crate) fn space_label(index: usize) -> String {
    (index + 1).to_string()
}
