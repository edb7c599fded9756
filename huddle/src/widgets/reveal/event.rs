use std::time::Instant;

use huddle_ui_reveal::RevealCommit;

/// Intent events handled by the reveal widget.
#[derive(Debug, Clone)]
pub(crate) enum RevealIntent {
    /// Pointer moved, in window coordinates.
    PointerMoved { position: iced::Point },
    /// Primary button pressed over the content surface.
    PointerPressed,
    /// Primary button released, or the pointer left the window.
    PointerReleased,
    Close,
    PanelWidthChanged(f32),
    Tick(Instant),
}

/// Effect events produced by the reveal reducer.
#[derive(Debug, Clone)]
pub(crate) enum RevealEffect {
    Committed { commit: RevealCommit, is_open: bool },
}

/// Reveal event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RevealEvent {
    /// Intent event reduced by the reveal widget.
    Intent(RevealIntent),
    /// External effect orchestrated by app-level routing.
    Effect(RevealEffect),
}
