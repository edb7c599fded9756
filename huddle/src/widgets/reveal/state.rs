use huddle_ui_reveal::{
    DragSignal, GestureTracker, PanelRevealController, RevealConfig,
};

/// Internal runtime state: the reveal controller and its gesture source.
#[derive(Debug)]
pub(super) struct RevealState {
    controller: PanelRevealController,
    tracker: GestureTracker,
}

impl RevealState {
    pub(super) fn new(
        panel_width: f32,
        config: RevealConfig,
        min_distance: f32,
    ) -> Self {
        Self {
            controller: PanelRevealController::new(panel_width, config),
            tracker: GestureTracker::new(min_distance),
        }
    }

    pub(super) fn controller(&self) -> &PanelRevealController {
        &self.controller
    }

    pub(super) fn controller_mut(&mut self) -> &mut PanelRevealController {
        &mut self.controller
    }

    pub(super) fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub(super) fn pointer_moved(&mut self, x: f32, y: f32) -> Option<f32> {
        match self.tracker.pointer_moved(x, y)? {
            DragSignal::Update { dx } => Some(dx),
            DragSignal::End { .. } => None,
        }
    }

    pub(super) fn pointer_pressed(&mut self) -> bool {
        self.tracker.pointer_pressed()
    }

    pub(super) fn pointer_released(&mut self) -> Option<f32> {
        match self.tracker.pointer_released()? {
            DragSignal::End { dx } => Some(dx),
            DragSignal::Update { .. } => None,
        }
    }

    pub(super) fn cancel_gesture(&mut self) {
        self.tracker.cancel();
    }
}
