//! Composite scheduling: sequences of timelines
//!
//! A [`SequenceSpec`] chains timeline steps back to back. Each step begins
//! only once its predecessor has played every one of its own cycles, and
//! starts from wherever the predecessor left the value. The sequence as a
//! whole can repeat; with `auto_reverse` every other pass walks the steps
//! backwards, returning to the value each step started from.
//!
//! ```rust
//! use surftrak_animation::{AnimatedValue, SequenceSpec, TimelineSpec};
//!
//! let mut v = AnimatedValue::new(0.0_f32);
//! v.start_sequence(
//!     SequenceSpec::new(vec![
//!         TimelineSpec::new(1.0, 500.0),
//!         TimelineSpec::new(0.0, 500.0),
//!     ])
//!     .loop_infinite(),
//! );
//! v.advance(500.0);
//! assert!((v.get() - 1.0).abs() < 1e-4);
//! v.advance(500.0);
//! assert!(v.get().abs() < 1e-4);
//! ```

use crate::animated::{Driver, Step};
use crate::timeline::{Repeat, TimelineRun, TimelineSpec};
use crate::values::Interpolate;

/// An ordered list of steps with its own repeat policy
#[derive(Clone, Debug)]
pub struct SequenceSpec<T: Interpolate> {
    pub steps: Vec<TimelineSpec<T>>,
    pub repeat: Repeat,
    pub auto_reverse: bool,
}

impl<T: Interpolate> SequenceSpec<T> {
    pub fn new(steps: Vec<TimelineSpec<T>>) -> Self {
        Self {
            steps,
            repeat: Repeat::default(),
            auto_reverse: false,
        }
    }

    /// Append a step
    pub fn then(mut self, step: TimelineSpec<T>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

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

    pub fn ping_pong(self, enabled: bool) -> Self {
        self.auto_reverse(enabled)
    }
}

/// A started sequence
pub struct SequenceRun<T: Interpolate> {
    spec: SequenceSpec<T>,
    active: Option<TimelineRun<T>>,
    index: usize,
    reversed: bool,
    cycles: u32,
    /// Value each step started from on the latest forward pass
    starts: Vec<T>,
    current: T,
}

impl<T: Interpolate> SequenceRun<T> {
    pub fn new(from: T, spec: SequenceSpec<T>) -> Self {
        let mut run = Self {
            starts: vec![from; spec.steps.len()],
            spec,
            active: None,
            index: 0,
            reversed: false,
            cycles: 0,
            current: from,
        };
        if !run.spec.steps.is_empty() {
            run.begin_step(0);
        }
        run
    }

    /// Finished passes so far
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    fn begin_step(&mut self, index: usize) {
        self.index = index;
        let step = self.spec.steps[index];
        let run = if self.reversed {
            // Walk back to where this step started, once
            let back = TimelineSpec {
                target: self.starts[index],
                repeat: Repeat::Count(1),
                auto_reverse: false,
                ..step
            };
            TimelineRun::new(self.current, back)
        } else {
            self.starts[index] = self.current;
            TimelineRun::new(self.current, step)
        };
        self.active = Some(run);
    }

    /// Move to the next step; `false` once the sequence has played out
    fn begin_next(&mut self) -> bool {
        let last = self.spec.steps.len() - 1;
        match (self.reversed, self.index) {
            (false, i) if i < last => self.begin_step(i + 1),
            (true, i) if i > 0 => self.begin_step(i - 1),
            _ => {
                self.cycles += 1;
                if self.spec.repeat.exhausted(self.cycles) {
                    self.active = None;
                    return false;
                }
                if self.spec.auto_reverse {
                    self.reversed = !self.reversed;
                }
                let first = if self.reversed { last } else { 0 };
                self.begin_step(first);
            }
        }
        true
    }
}

impl<T: Interpolate> Driver<T> for SequenceRun<T> {
    fn advance(&mut self, dt_ms: f32) -> Step<T> {
        let mut remaining = dt_ms.max(0.0);
        // Remaining time when the last pass wrapped, to catch zero-length loops
        let mut wrapped_at: Option<f32> = None;

        loop {
            let Some(run) = self.active.as_mut() else {
                return Step::Finished {
                    value: self.current,
                    leftover_ms: remaining,
                };
            };

            match run.advance(remaining) {
                Step::Running(value) => {
                    self.current = value;
                    return Step::Running(value);
                }
                Step::Finished { value, leftover_ms } => {
                    self.current = value;
                    remaining = leftover_ms;

                    let cycles_before = self.cycles;
                    if !self.begin_next() {
                        return Step::Finished {
                            value,
                            leftover_ms: remaining,
                        };
                    }
                    if self.cycles != cycles_before {
                        if wrapped_at.is_some_and(|w| remaining >= w) {
                            // A whole pass took no time; resume next frame
                            return Step::Running(self.current);
                        }
                        wrapped_at = Some(remaining);
                    }
                }
            }
        }
    }

    fn target(&self) -> T {
        self.spec
            .steps
            .last()
            .map(|s| s.target)
            .unwrap_or(self.current)
    }
}
