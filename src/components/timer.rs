//! Countdown timers and the button press animation built on them.

/// Counts elapsed seconds up to a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance by `dt`. Returns `true` once the duration has been reached.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.finished()
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Seconds a pressed button stays darkened.
pub const PRESS_ANIMATION_SECONDS: f32 = 0.25;

/// Short-lived press feedback for one button at a time.
///
/// `B` identifies the button. While a press is animating, further presses are
/// rejected; the animation clears itself once its timer elapses.
#[derive(Clone, Debug)]
pub struct PressAnimation<B: Copy + PartialEq> {
    timer: Timer,
    target: Option<B>,
}

impl<B: Copy + PartialEq> Default for PressAnimation<B> {
    fn default() -> Self {
        Self::new(PRESS_ANIMATION_SECONDS)
    }
}

impl<B: Copy + PartialEq> PressAnimation<B> {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::new(duration),
            target: None,
        }
    }

    /// Start animating `button`. Ignored (returns `false`) while another
    /// press is still running.
    pub fn start(&mut self, button: B) -> bool {
        if self.is_active() {
            return false;
        }
        self.timer.reset();
        self.target = Some(button);
        true
    }

    /// Advance the timer; deactivates once the duration has elapsed.
    pub fn advance(&mut self, dt: f32) {
        if self.target.is_some() && self.timer.tick(dt) {
            self.target = None;
            self.timer.reset();
        }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Whether `button` is the one currently animating.
    pub fn is_pressed(&self, button: B) -> bool {
        self.target == Some(button)
    }

}
