/// Pointer travel required before a press is recognized as a drag.
pub const DEFAULT_MIN_DISTANCE: f32 = 10.0;

/// Abstract drag signal consumed by the reveal controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragSignal {
    /// Cumulative horizontal translation since the press.
    Update { dx: f32 },
    /// Final horizontal translation at release.
    End { dx: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pointer {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    origin: Pointer,
    recognized: bool,
    last_dx: f32,
}

/// Single-pointer drag recognizer fed with raw pointer samples.
///
/// Positions must be reported in one stable coordinate space (for example
/// window coordinates), independent of any content the drag moves.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    min_distance: f32,
    cursor: Option<Pointer>,
    active: Option<ActiveGesture>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISTANCE)
    }
}

impl GestureTracker {
    pub fn new(min_distance: f32) -> Self {
        let min_distance = if min_distance.is_finite() {
            min_distance.max(0.0)
        } else {
            DEFAULT_MIN_DISTANCE
        };

        Self {
            min_distance,
            cursor: None,
            active: None,
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Whether a press is being tracked, recognized as a drag or not.
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the tracked press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|active| active.recognized)
    }

    /// Record a pointer position, emitting an update for recognized drags.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Option<DragSignal> {
        self.cursor = Some(Pointer { x, y });

        let active = self.active.as_mut()?;
        let dx = x - active.origin.x;
        let dy = y - active.origin.y;

        if !active.recognized {
            if dx.hypot(dy) < self.min_distance {
                return None;
            }
            active.recognized = true;
        }

        active.last_dx = dx;
        Some(DragSignal::Update { dx })
    }

    /// Begin tracking at the last known pointer position.
    ///
    /// Returns `false` when a gesture is already in flight or no position
    /// has been reported yet.
    pub fn pointer_pressed(&mut self) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(origin) = self.cursor else {
            return false;
        };

        self.active = Some(ActiveGesture {
            origin,
            recognized: false,
            last_dx: 0.0,
        });
        true
    }

    /// Stop tracking. Emits an end signal only for recognized drags.
    pub fn pointer_released(&mut self) -> Option<DragSignal> {
        let active = self.active.take()?;
        active
            .recognized
            .then_some(DragSignal::End { dx: active.last_dx })
    }

    /// Drop the tracked gesture without emitting anything.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
