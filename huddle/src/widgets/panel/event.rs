/// Intent events handled by the panel widget.
#[derive(Debug, Clone)]
pub(crate) enum PanelIntent {
    SpacePressed(usize),
    RoomPressed(usize),
}

/// Effect events produced by the panel reducer.
#[derive(Debug, Clone)]
pub(crate) enum PanelEffect {
    ClosePanel,
}

/// Panel event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PanelEvent {
    /// Intent event reduced by the panel widget.
    Intent(PanelIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PanelEffect),
}
