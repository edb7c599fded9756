use std::time::{Duration, Instant};

use crate::animation::SettleAnimation;

/// Drag distance that must be exceeded to commit to the open state.
pub const DEFAULT_OPEN_THRESHOLD: f32 = 100.0;
/// Leftward drag distance that must be exceeded to commit to closed.
pub const DEFAULT_CLOSE_THRESHOLD: f32 = 100.0;
/// Duration of the ease-out transition to a settled offset.
pub const DEFAULT_SETTLE_DURATION: Duration = Duration::from_millis(350);

/// Tunables for [`PanelRevealController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// A release with `dx` strictly greater than this opens the panel.
    pub open_threshold: f32,
    /// A release with `dx` strictly less than the negation closes it.
    pub close_threshold: f32,
    /// Length of the settle animation. Zero snaps immediately.
    pub settle_duration: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            open_threshold: DEFAULT_OPEN_THRESHOLD,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            settle_duration: DEFAULT_SETTLE_DURATION,
        }
    }
}

/// Logical reveal state.
///
/// `offset` always lies in `[0, panel_width]`; `is_open` only flips when a
/// gesture ends or the panel is closed programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealState {
    pub offset: f32,
    pub is_open: bool,
}

/// Decision taken when a drag gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCommit {
    /// Release passed the open threshold.
    Opened,
    /// Release passed the close threshold.
    Closed,
    /// Release stayed within both thresholds; the prior state is restored.
    SnapBack,
}

/// Converts drag signals into a clamped reveal offset and a committed state.
///
/// The panel width is latched while a drag is in flight. Width changes that
/// arrive mid-drag are deferred until the gesture ends so the offset never
/// jumps under the pointer.
#[derive(Debug, Clone)]
pub struct PanelRevealController {
    config: RevealConfig,
    state: RevealState,
    panel_width: f32,
    pending_width: Option<f32>,
    dragging: bool,
    rendered_offset: f32,
    settle: Option<SettleAnimation>,
}

impl PanelRevealController {
    /// Create a closed controller for a panel of `panel_width`.
    pub fn new(panel_width: f32, config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::default(),
            panel_width: sanitize_width(panel_width),
            pending_width: None,
            dragging: false,
            rendered_offset: 0.0,
            settle: None,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Snapshot of the logical state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Logical offset the panel is at or settling toward.
    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Width currently used for clamping.
    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    /// Offset to draw right now, including any running settle animation.
    pub fn rendered_offset(&self) -> f32 {
        self.rendered_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    /// Apply a live drag translation and return the new offset.
    ///
    /// While closed the translation is read from the closed position, while
    /// open from the fully revealed one. The result is clamped to
    /// `[0, panel_width]` and any running settle animation is dropped.
    pub fn drag_update(&mut self, dx: f32) -> f32 {
        self.dragging = true;
        self.settle = None;

        let dx = finite_or_zero(dx);
        let candidate = if self.state.is_open {
            self.panel_width + dx
        } else {
            dx
        };

        self.state.offset = clamp_offset(candidate, self.panel_width);
        self.rendered_offset = self.state.offset;
        self.state.offset
    }

    /// Commit the gesture using the final translation and start settling.
    pub fn drag_end(&mut self, dx: f32, now: Instant) -> RevealCommit {
        let dx = finite_or_zero(dx);
        self.dragging = false;

        let commit = if dx > self.config.open_threshold {
            self.state.is_open = true;
            RevealCommit::Opened
        } else if dx < -self.config.close_threshold {
            self.state.is_open = false;
            RevealCommit::Closed
        } else {
            RevealCommit::SnapBack
        };

        self.apply_pending_width();
        self.state.offset = self.settled_offset();
        self.start_settle(now);

        log::debug!(
            "reveal drag ended: dx={dx}, commit={commit:?}, open={}",
            self.state.is_open
        );
        commit
    }

    /// Close the panel programmatically, animating back to zero.
    pub fn close(&mut self, now: Instant) {
        self.dragging = false;
        self.state.is_open = false;
        self.apply_pending_width();
        self.state.offset = 0.0;
        self.start_settle(now);
    }

    /// Update the width used for clamping.
    ///
    /// Between gestures the settled offset follows the new width at once;
    /// during a drag the change waits for the gesture to end.
    pub fn set_panel_width(&mut self, width: f32, now: Instant) {
        let width = sanitize_width(width);
        if self.dragging {
            self.pending_width = Some(width);
            return;
        }

        self.panel_width = width;
        self.state.offset = self.settled_offset();
        match self.settle.as_mut() {
            Some(settle) => {
                settle.retarget(self.state.offset, now);
                self.rendered_offset = settle.from();
            },
            None => self.rendered_offset = self.state.offset,
        }
    }

    /// Advance the settle animation. Returns `true` while still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(settle) = self.settle else {
            return false;
        };

        if settle.is_finished(now) {
            self.settle = None;
            self.rendered_offset = self.state.offset;
            return false;
        }

        self.rendered_offset = settle.sample(now);
        true
    }

    fn settled_offset(&self) -> f32 {
        if self.state.is_open {
            self.panel_width
        } else {
            0.0
        }
    }

    fn apply_pending_width(&mut self) {
        if let Some(width) = self.pending_width.take() {
            self.panel_width = width;
            self.rendered_offset =
                clamp_offset(self.rendered_offset, self.panel_width);
        }
    }

    fn start_settle(&mut self, now: Instant) {
        let target = self.state.offset;
        if self.config.settle_duration.is_zero()
            || (self.rendered_offset - target).abs() <= f32::EPSILON
        {
            self.settle = None;
            self.rendered_offset = target;
            return;
        }

        self.settle = Some(SettleAnimation::new(
            self.rendered_offset,
            target,
            now,
            self.config.settle_duration,
        ));
    }
}

fn clamp_offset(candidate: f32, panel_width: f32) -> f32 {
    candidate.clamp(0.0, panel_width)
}

fn finite_or_zero(dx: f32) -> f32 {
    if dx.is_nan() { 0.0 } else { dx }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL_WIDTH: f32 = 220.0;

    fn controller() -> PanelRevealController {
        PanelRevealController::new(PANEL_WIDTH, RevealConfig::default())
    }

    fn opened(start: Instant) -> PanelRevealController {
        let mut controller = controller();
        controller.drag_update(150.0);
        controller.drag_end(150.0, start);
        controller.tick(start + DEFAULT_SETTLE_DURATION);
        controller
    }

    #[test]
    fn given_new_controller_when_created_then_panel_is_closed_at_zero() {
        let controller = controller();
        assert_eq!(controller.state(), RevealState::default());
        assert_eq!(controller.rendered_offset(), 0.0);
        assert!(!controller.is_dragging());
        assert!(!controller.is_animating());
    }

    #[test]
    fn given_closed_panel_when_dragged_anywhere_then_offset_stays_in_bounds()
    {
        for dx in [-1e9, -500.0, -0.5, 0.0, 12.5, 219.9, 220.0, 221.0, 1e9] {
            let mut controller = controller();
            let offset = controller.drag_update(dx);
            assert!(
                (0.0..=PANEL_WIDTH).contains(&offset),
                "dx={dx} gave {offset}"
            );
        }
    }

    #[test]
    fn given_open_panel_when_dragged_anywhere_then_offset_stays_in_bounds() {
        let start = Instant::now();
        for dx in [-1e9, -500.0, -120.0, 0.0, 35.0, 500.0, f32::INFINITY] {
            let mut controller = opened(start);
            let offset = controller.drag_update(dx);
            assert!(
                (0.0..=PANEL_WIDTH).contains(&offset),
                "dx={dx} gave {offset}"
            );
        }
    }

    #[test]
    fn given_open_panel_when_dragged_left_then_offset_is_relative_to_open() {
        let mut controller = opened(Instant::now());
        assert_eq!(controller.drag_update(-20.0), 200.0);
        assert!(controller.is_open());
    }

    #[test]
    fn given_closed_panel_when_dragged_left_then_offset_does_not_move() {
        let mut controller = controller();
        assert_eq!(controller.drag_update(-40.0), 0.0);
    }

    #[test]
    fn given_drag_back_past_origin_when_closed_then_offset_returns_to_zero() {
        let mut controller = controller();
        controller.drag_update(5.0);
        assert_eq!(controller.drag_update(-3.0), 0.0);
    }

    #[test]
    fn given_repeated_updates_when_same_dx_then_offset_is_identical() {
        let mut controller = controller();
        let first = controller.drag_update(64.0);
        let second = controller.drag_update(64.0);
        assert_eq!(first, second);
        assert_eq!(controller.offset(), 64.0);
    }

    #[test]
    fn given_drag_in_flight_when_updated_then_committed_state_is_unchanged() {
        let mut controller = controller();
        controller.drag_update(200.0);
        assert!(!controller.is_open());
        assert!(controller.is_dragging());
    }

    #[test]
    fn given_closed_panel_when_released_past_threshold_then_panel_opens() {
        let mut controller = controller();
        controller.drag_update(150.0);
        let commit = controller.drag_end(150.0, Instant::now());

        assert_eq!(commit, RevealCommit::Opened);
        assert!(controller.is_open());
        assert_eq!(controller.offset(), PANEL_WIDTH);
    }

    #[test]
    fn given_open_panel_when_released_past_close_threshold_then_panel_closes()
    {
        let start = Instant::now();
        let mut controller = opened(start);
        controller.drag_update(-150.0);
        let commit = controller.drag_end(-150.0, start);

        assert_eq!(commit, RevealCommit::Closed);
        assert!(!controller.is_open());
        assert_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn given_short_drag_when_released_then_panel_snaps_back_closed() {
        let mut controller = controller();
        controller.drag_update(50.0);
        let commit = controller.drag_end(50.0, Instant::now());

        assert_eq!(commit, RevealCommit::SnapBack);
        assert!(!controller.is_open());
        assert_eq!(controller.offset(), 0.0);
    }

    #[test]
    fn given_short_drag_on_open_panel_when_released_then_panel_stays_open() {
        let start = Instant::now();
        let mut controller = opened(start);
        controller.drag_update(-60.0);
        let commit = controller.drag_end(-60.0, start);

        assert_eq!(commit, RevealCommit::SnapBack);
        assert!(controller.is_open());
        assert_eq!(controller.offset(), PANEL_WIDTH);
    }

    #[test]
    fn given_exact_threshold_when_released_then_prior_state_is_kept() {
        let start = Instant::now();

        let mut closed = controller();
        closed.drag_update(100.0);
        assert_eq!(closed.drag_end(100.0, start), RevealCommit::SnapBack);
        assert!(!closed.is_open());
        assert_eq!(closed.offset(), 0.0);

        let mut open = opened(start);
        open.drag_update(-100.0);
        assert_eq!(open.drag_end(-100.0, start), RevealCommit::SnapBack);
        assert!(open.is_open());
        assert_eq!(open.offset(), PANEL_WIDTH);
    }

    #[test]
    fn given_open_panel_when_closed_explicitly_then_offset_returns_to_zero() {
        let start = Instant::now();
        let mut controller = opened(start);
        assert_eq!(controller.offset(), PANEL_WIDTH);

        controller.close(start);
        assert!(!controller.is_open());
        assert_eq!(controller.offset(), 0.0);
        assert!(controller.is_animating());

        controller.tick(start + DEFAULT_SETTLE_DURATION);
        assert_eq!(controller.rendered_offset(), 0.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn given_release_when_ticked_then_rendered_offset_eases_to_target() {
        let start = Instant::now();
        let mut controller = controller();
        controller.drag_update(150.0);
        controller.drag_end(150.0, start);

        assert_eq!(controller.rendered_offset(), 150.0);
        assert!(controller.tick(start + Duration::from_millis(100)));
        let midway = controller.rendered_offset();
        assert!(midway > 150.0 && midway < PANEL_WIDTH);

        assert!(!controller.tick(start + DEFAULT_SETTLE_DURATION));
        assert_eq!(controller.rendered_offset(), PANEL_WIDTH);
    }

    #[test]
    fn given_running_settle_when_new_drag_starts_then_animation_is_dropped() {
        let start = Instant::now();
        let mut controller = controller();
        controller.drag_update(150.0);
        controller.drag_end(150.0, start);
        assert!(controller.is_animating());

        controller.drag_update(-30.0);
        assert!(!controller.is_animating());
        assert_eq!(controller.rendered_offset(), 190.0);
        assert!(!controller.tick(start + Duration::from_millis(50)));
        assert_eq!(controller.rendered_offset(), 190.0);
    }

    #[test]
    fn given_zero_settle_duration_when_released_then_offset_snaps() {
        let config = RevealConfig {
            settle_duration: Duration::ZERO,
            ..RevealConfig::default()
        };
        let mut controller = PanelRevealController::new(PANEL_WIDTH, config);
        controller.drag_update(130.0);
        controller.drag_end(130.0, Instant::now());

        assert!(!controller.is_animating());
        assert_eq!(controller.rendered_offset(), PANEL_WIDTH);
    }

    #[test]
    fn given_width_change_mid_drag_when_updating_then_latched_width_is_used()
    {
        let mut controller = controller();
        controller.drag_update(80.0);
        controller.set_panel_width(90.0, Instant::now());

        assert_eq!(controller.panel_width(), PANEL_WIDTH);
        assert_eq!(controller.drag_update(200.0), 200.0);

        controller.drag_end(200.0, Instant::now());
        assert_eq!(controller.panel_width(), 90.0);
        assert_eq!(controller.offset(), 90.0);
        assert!(controller.rendered_offset() <= 90.0);
    }

    #[test]
    fn given_open_panel_when_width_changes_between_gestures_then_offset_follows()
     {
        let now = Instant::now();
        let mut controller = opened(now);
        controller.set_panel_width(330.0, now + DEFAULT_SETTLE_DURATION);

        assert_eq!(controller.offset(), 330.0);
        assert_eq!(controller.rendered_offset(), 330.0);
    }

    #[test]
    fn given_running_settle_when_width_changes_then_animation_is_retargeted()
    {
        let start = Instant::now();
        let mut controller = controller();
        controller.drag_update(150.0);
        controller.drag_end(150.0, start);
        controller.set_panel_width(300.0, start);

        assert!(controller.is_animating());
        controller.tick(start + DEFAULT_SETTLE_DURATION);
        assert_eq!(controller.rendered_offset(), 300.0);
    }

    #[test]
    fn given_settle_halfway_when_width_changes_then_rendered_offset_is_kept()
    {
        let start = Instant::now();
        let halfway = start + DEFAULT_SETTLE_DURATION / 2;
        let mut controller = controller();
        controller.drag_update(150.0);
        controller.drag_end(150.0, start);
        controller.tick(halfway);
        let drawn = controller.rendered_offset();

        controller.set_panel_width(300.0, halfway);
        assert_eq!(controller.rendered_offset(), drawn);

        controller.tick(halfway + Duration::from_millis(16));
        let next = controller.rendered_offset();
        assert!(next >= drawn);
        assert!(next - drawn < 30.0, "jumped from {drawn} to {next}");
    }

    #[test]
    fn given_invalid_width_when_set_then_width_floors_at_zero() {
        let mut controller = controller();
        controller.set_panel_width(-40.0, Instant::now());
        assert_eq!(controller.panel_width(), 0.0);

        controller.set_panel_width(f32::NAN, Instant::now());
        assert_eq!(controller.panel_width(), 0.0);
        assert_eq!(controller.drag_update(50.0), 0.0);
    }

    #[test]
    fn given_nan_translation_when_applied_then_it_counts_as_no_movement() {
        let mut controller = controller();
        assert_eq!(controller.drag_update(f32::NAN), 0.0);
        assert_eq!(
            controller.drag_end(f32::NAN, Instant::now()),
            RevealCommit::SnapBack
        );
    }
}
