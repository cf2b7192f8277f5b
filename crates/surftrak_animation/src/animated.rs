//! Owned animated values
//!
//! An [`AnimatedValue`] holds the current and target value of one animated
//! property plus at most one active [`Driver`] (a timeline, a sequence or a
//! spring). The value only moves when [`AnimatedValue::advance`] is called,
//! so whoever owns it owns the clock.
//!
//! ```rust
//! use surftrak_animation::{AnimatedValue, Easing, TimelineSpec};
//!
//! let mut width = AnimatedValue::new(0.0_f32);
//! width.start_timeline(TimelineSpec::new(1.0, 1000.0).easing(Easing::Linear));
//! width.advance(500.0);
//! assert!((width.get() - 0.5).abs() < 1e-4);
//! ```

use crate::sequence::{SequenceRun, SequenceSpec};
use crate::spring::{Spring, SpringConfig};
use crate::timeline::{TimelineRun, TimelineSpec};
use crate::values::Interpolate;

/// Epsilon used to decide whether a frame moved a value
pub(crate) const CHANGE_EPSILON: f32 = 1e-6;

/// Outcome of advancing a driver by one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step<T> {
    /// Still moving; the value for this frame
    Running(T),
    /// Done; the settled value and frame time not consumed by the run
    Finished { value: T, leftover_ms: f32 },
}

/// Something that moves a value over time
pub trait Driver<T>: Send {
    /// Advance by `dt_ms` milliseconds
    fn advance(&mut self, dt_ms: f32) -> Step<T>;

    /// Where the driver is heading
    fn target(&self) -> T;
}

/// What a call to [`AnimatedValue::advance`] did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Advance {
    /// `current` moved this frame
    pub changed: bool,
    /// The active run finished this frame
    pub completed: bool,
}

/// A value animated toward a target by an owned driver
pub struct AnimatedValue<T: Interpolate> {
    current: T,
    target: T,
    driver: Option<Box<dyn Driver<T>>>,
    /// Set when a run finishes; cleared by `take_completed`
    completed: bool,
}

impl<T: Interpolate> AnimatedValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            target: initial,
            driver: None,
            completed: false,
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.current
    }

    /// Value the active run is heading to (or the resting value)
    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Run a single timeline from the current value
    ///
    /// Any run in flight is cancelled first; the new run starts from wherever
    /// the value is now, not from the old target.
    pub fn start_timeline(&mut self, spec: TimelineSpec<T>) {
        self.start(Box::new(TimelineRun::new(self.current, spec)));
    }

    /// Run a sequence of timelines from the current value
    pub fn start_sequence(&mut self, spec: SequenceSpec<T>) {
        self.start(Box::new(SequenceRun::new(self.current, spec)));
    }

    /// Drive the value with any custom driver
    pub fn start(&mut self, driver: Box<dyn Driver<T>>) {
        self.target = driver.target();
        self.driver = Some(driver);
        self.completed = false;
    }

    /// Stop the active run where it is
    pub fn cancel(&mut self) {
        if self.driver.take().is_some() {
            self.target = self.current;
        }
    }

    /// Jump to `value` without animating
    pub fn set_immediate(&mut self, value: T) {
        self.driver = None;
        self.current = value;
        self.target = value;
    }

    /// Returns `true` once after each finished run
    pub fn take_completed(&mut self) -> bool {
        std::mem::take(&mut self.completed)
    }

    /// Advance the active run by `dt_ms` milliseconds
    pub fn advance(&mut self, dt_ms: f32) -> Advance {
        let Some(driver) = self.driver.as_mut() else {
            return Advance::default();
        };

        let previous = self.current;
        let mut completed = false;
        match driver.advance(dt_ms) {
            Step::Running(value) => self.current = value,
            Step::Finished { value, .. } => {
                self.current = value;
                self.target = value;
                self.driver = None;
                self.completed = true;
                completed = true;
            }
        }

        Advance {
            changed: !previous.approx_eq(&self.current, CHANGE_EPSILON),
            completed,
        }
    }
}

impl AnimatedValue<f32> {
    /// Spring toward `target`, starting from the current value at rest
    pub fn start_spring(&mut self, target: f32, config: SpringConfig) {
        let mut spring = Spring::new(config, self.current);
        spring.set_target(target);
        self.start(Box::new(spring));
    }
}

impl<T: Interpolate + std::fmt::Debug> std::fmt::Debug for AnimatedValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("current", &self.current)
            .field("target", &self.target)
            .field("animating", &self.is_animating())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::timeline::Repeat;

    const FRAME_MS: f32 = 1000.0 / 60.0;

    #[test]
    fn test_linear_midpoint() {
        let mut value = AnimatedValue::new(0.0_f32);
        value.start_timeline(TimelineSpec::new(1.0, 1000.0));
        assert_eq!(value.target(), 1.0);

        value.advance(500.0);
        assert!((value.get() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_endpoints_for_any_easing() {
        for easing in [Easing::Linear, Easing::STANDARD, Easing::EaseInCubic] {
            let mut value = AnimatedValue::new(2.0_f32);
            value.start_timeline(TimelineSpec::new(7.0, 300.0).easing(easing));

            value.advance(0.0);
            assert!((value.get() - 2.0).abs() < 1e-4);

            let step = value.advance(300.0);
            assert!((value.get() - 7.0).abs() < 1e-4);
            assert!(step.completed);
            assert!(!value.is_animating());
        }
    }

    #[test]
    fn test_restart_mid_flight_is_continuous() {
        let mut value = AnimatedValue::new(0.0_f32);
        value.start_timeline(TimelineSpec::new(1.0, 1000.0));

        let mut last = value.get();
        for frame in 0..60 {
            if frame == 20 {
                // Retarget while in flight
                value.start_timeline(TimelineSpec::new(-1.0, 1000.0));
                assert_eq!(value.get(), last);
            }
            value.advance(FRAME_MS);
            let delta = (value.get() - last).abs();
            // Linear over 1000ms spanning at most 2 units
            assert!(delta <= 2.0 * FRAME_MS / 1000.0 + 1e-4, "jump {delta}");
            last = value.get();
        }
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut value = AnimatedValue::new(0.0_f32);
        value.start_timeline(TimelineSpec::new(5.0, 0.0));
        let step = value.advance(FRAME_MS);
        assert_eq!(value.get(), 5.0);
        assert!(step.completed);

        value.start_timeline(TimelineSpec::new(3.0, -10.0).repeat(Repeat::Infinite));
        value.advance(FRAME_MS);
        assert_eq!(value.get(), 3.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_cancel_freezes_value() {
        let mut value = AnimatedValue::new(0.0_f32);
        value.start_timeline(
            TimelineSpec::new(1.0, 200.0)
                .repeat(Repeat::Infinite)
                .auto_reverse(true),
        );
        for _ in 0..37 {
            value.advance(FRAME_MS);
        }
        value.cancel();
        let frozen = value.get();
        assert_eq!(value.target(), frozen);

        for _ in 0..30 {
            let step = value.advance(FRAME_MS);
            assert!(!step.changed);
        }
        assert_eq!(value.get(), frozen);
    }

    #[test]
    fn test_finite_repeat_settles_at_target() {
        for count in 1..=4 {
            let mut value = AnimatedValue::new(0.0_f32);
            value.start_timeline(TimelineSpec::new(1.0, 100.0).iterations(count).auto_reverse(true));

            let mut frames = 0;
            while !value.advance(10.0).completed {
                assert_eq!(value.target(), 1.0);
                frames += 1;
                assert!(frames < 1000, "count {count} never completed");
            }
            // Exactly `count` cycles of 10 frames
            assert_eq!(frames + 1, count * 10);
            assert_eq!(value.get(), 1.0, "count {count}");
            assert_eq!(value.target(), 1.0);
        }
    }

    #[test]
    fn test_completion_flag_taken_once() {
        let mut value = AnimatedValue::new(0.0_f32);
        value.start_timeline(TimelineSpec::new(1.0, 10.0));
        value.advance(20.0);
        assert!(value.take_completed());
        assert!(!value.take_completed());
    }

    #[test]
    fn test_spring_value() {
        let mut scale = AnimatedValue::new(0.95_f32);
        scale.start_spring(1.0, SpringConfig::default());
        assert_eq!(scale.target(), 1.0);

        for _ in 0..600 {
            scale.advance(FRAME_MS);
        }
        assert!(!scale.is_animating());
        assert_eq!(scale.get(), 1.0);
    }

    #[test]
    fn test_set_immediate() {
        let mut value = AnimatedValue::new(0.0_f32);
        value.start_timeline(TimelineSpec::new(1.0, 1000.0));
        value.set_immediate(0.25);
        assert_eq!(value.get(), 0.25);
        assert!(!value.is_animating());
        assert_eq!(value.advance(FRAME_MS), Advance::default());
    }
}
