//! Timeline primitive
//!
//! A [`TimelineSpec`] describes one timed transition: where to go, how long
//! to take, which easing to use, how often to repeat and whether to
//! ping-pong. A [`TimelineRun`] is the running instance, created from the
//! value's current position when the spec is started.

use crate::animated::{Driver, Step};
use crate::easing::Easing;
use crate::values::Interpolate;

/// How many times a run plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Play this many cycles; `Count(0)` plays once
    Count(u32),
    /// Play until cancelled
    Infinite,
}

impl Repeat {
    /// Has a run with `cycles` finished cycles played out?
    pub(crate) fn exhausted(&self, cycles: u32) -> bool {
        match *self {
            Repeat::Count(n) => cycles >= n.max(1),
            Repeat::Infinite => false,
        }
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(1)
    }
}

/// Description of one animation run
///
/// Builder methods mirror the usual keyframe options:
///
/// ```rust
/// use surftrak_animation::{Easing, Repeat, TimelineSpec};
///
/// // Ripple: 1.0 -> 1.2 and back, forever
/// let ripple = TimelineSpec::new(1.2_f32, 2000.0)
///     .easing(Easing::STANDARD)
///     .loop_infinite()
///     .ping_pong(true);
/// assert_eq!(ripple.repeat, Repeat::Infinite);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimelineSpec<T: Interpolate> {
    pub target: T,
    pub duration_ms: f32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Reverse direction on every other cycle
    pub auto_reverse: bool,
    /// Hold at the start value this long before moving
    pub delay_ms: f32,
}

impl<T: Interpolate> TimelineSpec<T> {
    /// Linear, single-cycle transition to `target`
    pub fn new(target: T, duration_ms: f32) -> Self {
        Self {
            target,
            duration_ms,
            easing: Easing::Linear,
            repeat: Repeat::default(),
            auto_reverse: false,
            delay_ms: 0.0,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Play `count` cycles
    pub fn iterations(self, count: u32) -> Self {
        self.repeat(Repeat::Count(count))
    }

    pub fn loop_infinite(self) -> Self {
        self.repeat(Repeat::Infinite)
    }

    pub fn auto_reverse(mut self, enabled: bool) -> Self {
        self.auto_reverse = enabled;
        self
    }

    /// Alias of [`auto_reverse`](Self::auto_reverse)
    pub fn ping_pong(self, enabled: bool) -> Self {
        self.auto_reverse(enabled)
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }
}

/// A started timeline
#[derive(Clone, Debug)]
pub struct TimelineRun<T: Interpolate> {
    from: T,
    to: T,
    duration_ms: f32,
    easing: Easing,
    repeat: Repeat,
    auto_reverse: bool,
    delay_remaining: f32,
    /// Time into the current cycle
    elapsed: f32,
    cycles: u32,
    reversed: bool,
}

impl<T: Interpolate> TimelineRun<T> {
    pub fn new(from: T, spec: TimelineSpec<T>) -> Self {
        Self {
            from,
            to: spec.target,
            duration_ms: spec.duration_ms,
            easing: spec.easing,
            repeat: spec.repeat,
            auto_reverse: spec.auto_reverse,
            delay_remaining: spec.delay_ms.max(0.0),
            elapsed: 0.0,
            cycles: 0,
            reversed: false,
        }
    }

    /// Finished cycles so far
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Value at the current position
    pub fn sample(&self) -> T {
        let t = if self.duration_ms > 0.0 {
            self.elapsed / self.duration_ms
        } else {
            1.0
        };
        let p = self.easing.apply(t);
        if self.reversed {
            self.to.lerp(&self.from, p)
        } else {
            self.from.lerp(&self.to, p)
        }
    }
}

impl<T: Interpolate> Driver<T> for TimelineRun<T> {
    fn advance(&mut self, dt_ms: f32) -> Step<T> {
        let mut dt = dt_ms.max(0.0);

        if self.delay_remaining > 0.0 {
            if dt < self.delay_remaining {
                self.delay_remaining -= dt;
                return Step::Running(self.from);
            }
            dt -= self.delay_remaining;
            self.delay_remaining = 0.0;
        }

        // Non-positive durations collapse to a jump, whatever the repeat
        if self.duration_ms <= 0.0 {
            self.cycles += 1;
            return Step::Finished {
                value: self.to,
                leftover_ms: dt,
            };
        }

        self.elapsed += dt;
        while self.elapsed >= self.duration_ms {
            self.cycles += 1;
            if self.repeat.exhausted(self.cycles) {
                // Settle at the target even when the last cycle ran backwards
                let leftover_ms = self.elapsed - self.duration_ms;
                self.elapsed = self.duration_ms;
                self.reversed = false;
                return Step::Finished {
                    value: self.to,
                    leftover_ms,
                };
            }
            self.elapsed -= self.duration_ms;
            if self.auto_reverse {
                self.reversed = !self.reversed;
            }
        }

        Step::Running(self.sample())
    }

    fn target(&self) -> T {
        self.to
    }
}
