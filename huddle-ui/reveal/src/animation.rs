use std::time::{Duration, Instant};

/// Cubic ease-out curve mapping `t` in `[0, 1]` onto `[0, 1]`.
///
/// Input outside the unit range is clamped first.
pub fn ease_out(t: f32) -> f32 {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

/// Time-based tween from one offset to another.
///
/// The animation holds no clock of its own. Callers pass `now` on every
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl SettleAnimation {
    /// Start a new animation at `started_at`.
    pub fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Offset the animation started from.
    pub fn from(&self) -> f32 {
        self.from
    }

    /// Offset the animation lands on.
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Head for a new landing offset from wherever the tween is at `now`.
    ///
    /// The duration is kept and restarts at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant) {
        self.from = self.sample(now);
        self.started_at = now;
        self.to = to;
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased offset at `now`.
    pub fn sample(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }

        self.from + (self.to - self.from) * ease_out(progress)
    }

    /// Whether the animation has reached its landing offset at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
