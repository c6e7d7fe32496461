//! Auto-repeat timing

/// Timing rule for held inputs: an initial delay, then a steady interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatPolicy {
    initial_delay: f32,
    repeat_interval: f32,
}

impl RepeatPolicy {
    pub const DEFAULT_INITIAL_DELAY: f32 = 0.5;
    pub const DEFAULT_REPEAT_INTERVAL: f32 = 0.1;

    /// Creates a policy; negative durations are clamped to zero
    pub fn new(initial_delay: f32, repeat_interval: f32) -> Self {
        let mut policy = Self::default();
        policy.set_initial_delay(initial_delay);
        policy.set_repeat_interval(repeat_interval);
        policy
    }

    /// Seconds an input must be held before it starts repeating
    pub fn initial_delay(&self) -> f32 {
        self.initial_delay
    }

    /// Seconds between repeats once repeating
    pub fn repeat_interval(&self) -> f32 {
        self.repeat_interval
    }

    pub fn set_initial_delay(&mut self, seconds: f32) {
        self.initial_delay = non_negative(seconds);
    }

    pub fn set_repeat_interval(&mut self, seconds: f32) {
        self.repeat_interval = non_negative(seconds);
    }
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            repeat_interval: Self::DEFAULT_REPEAT_INTERVAL,
        }
    }
}

// NaN is treated as zero as well.
fn non_negative(seconds: f32) -> f32 {
    if seconds > 0.0 { seconds } else { 0.0 }
}

/// Time-since-press and time-since-last-repeat accumulators for one input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RepeatTimer {
    since_press: f32,
    since_repeat: f32,
}

impl RepeatTimer {
    /// Advances the timer while the input is held
    ///
    /// Returns true when a repeat is due this frame. At most one repeat fires per frame.
    pub fn tick(&mut self, delta_time: f32, policy: &RepeatPolicy) -> bool {
        let before = self.since_press;
        self.since_press += delta_time;

        let delay = policy.initial_delay();
        if self.since_press <= delay {
            return false;
        }

        // Only the part of this frame past the initial delay counts toward the first repeat
        self.since_repeat += self.since_press - before.max(delay);

        let interval = policy.repeat_interval();
        if self.since_repeat > interval {
            // Carry the remainder so the cadence does not drift with the frame rate
            self.since_repeat = (self.since_repeat - interval).min(interval);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn since_press(&self) -> f32 {
        self.since_press
    }

    pub fn since_repeat(&self) -> f32 {
        self.since_repeat
    }
}
