/// Interval of the settle animation tick.
pub(crate) const REVEAL_TICK_MS: u64 = 16;

/// Read-only view model for drawing the reveal stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RevealViewModel {
    pub(crate) rendered_offset: f32,
    pub(crate) panel_width: f32,
    pub(crate) is_dragging: bool,
}
