//! Drag-to-reveal state machine for a horizontally sliding side panel.
//!
//! The crate is UI-agnostic and split into three small layers:
//! - [`GestureTracker`] turns raw pointer samples into abstract drag signals;
//! - [`PanelRevealController`] turns drag signals into a clamped offset and a
//!   committed open/closed [`RevealState`];
//! - [`SettleAnimation`] eases the rendered offset toward the committed one.
//!
//! Time is always injected by the caller, so every transition is
//! deterministic and can be driven from any event loop tick.
//!
//! # Quick Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use huddle_ui_reveal::{
//!     DragSignal, GestureTracker, PanelRevealController, RevealCommit,
//!     RevealConfig,
//! };
//!
//! let mut tracker = GestureTracker::default();
//! let mut controller =
//!     PanelRevealController::new(220.0, RevealConfig::default());
//! let start = Instant::now();
//!
//! tracker.pointer_moved(10.0, 300.0);
//! assert!(tracker.pointer_pressed());
//!
//! if let Some(DragSignal::Update { dx }) = tracker.pointer_moved(160.0, 300.0)
//! {
//!     controller.drag_update(dx);
//! }
//! assert_eq!(controller.offset(), 150.0);
//!
//! let Some(DragSignal::End { dx }) = tracker.pointer_released() else {
//!     unreachable!("a recognized drag always ends with a signal");
//! };
//! assert_eq!(controller.drag_end(dx, start), RevealCommit::Opened);
//! assert!(controller.is_open());
//!
//! controller.tick(start + Duration::from_secs(1));
//! assert_eq!(controller.rendered_offset(), 220.0);
//! ```

mod animation;
mod controller;
mod gesture;

pub use animation::{SettleAnimation, ease_out};
pub use controller::{
    DEFAULT_CLOSE_THRESHOLD, DEFAULT_OPEN_THRESHOLD, DEFAULT_SETTLE_DURATION,
    PanelRevealController, RevealCommit, RevealConfig, RevealState,
};
pub use gesture::{DEFAULT_MIN_DISTANCE, DragSignal, GestureTracker};
