use iced::{Rectangle, Vector};

use crate::settings::PanelMode;

/// Width of the spaces rail.
pub(crate) const RAIL_WIDTH: f32 = 70.0;
/// Width of the rooms list in menu mode.
pub(crate) const ROOMS_LIST_WIDTH: f32 = 150.0;
/// Panel width in menu mode: rail plus rooms list.
pub(crate) const MENU_PANEL_WIDTH: f32 = RAIL_WIDTH + ROOMS_LIST_WIDTH;

/// Resolve the revealed panel width for a mode and container width.
pub(crate) fn panel_width(mode: PanelMode, container_width: f32) -> f32 {
    match mode {
        PanelMode::Rail => RAIL_WIDTH,
        PanelMode::Menu => MENU_PANEL_WIDTH,
        PanelMode::FullWidth => {
            let container_width = if container_width.is_finite() {
                container_width
            } else {
                0.0
            };
            (container_width - RAIL_WIDTH).max(0.0)
        },
    }
}

/// Width left for the rooms list once the rail is placed.
pub(crate) fn rooms_list_width(panel_width: f32) -> f32 {
    (panel_width - RAIL_WIDTH).max(0.0)
}

/// Bounds of the content surface slid right by `offset`.
///
/// The surface keeps the full size of `bounds`. Whatever is pushed past the
/// trailing edge of the window is simply not drawn.
pub(crate) fn slide_bounds(bounds: Rectangle, offset: f32) -> Rectangle {
    let offset = if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    };

    bounds + Vector::new(offset, 0.0)
}

/// Translation that moves `bounds` onto its slid position.
pub(crate) fn slide_translation(bounds: Rectangle, offset: f32) -> Vector {
    let slid = slide_bounds(bounds, offset);
    Vector::new(slid.x - bounds.x, 0.0)
}
