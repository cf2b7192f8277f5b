//! Spring physics animation
//!
//! RK4-integrated damped spring. Used where motion should settle naturally
//! instead of running for a fixed duration (stat cards popping in).

use crate::animated::{Driver, Step};

/// Largest integration step, in seconds
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed (units per second) below which the spring may come to rest
    pub rest_speed: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::default()
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.002,
        }
    }
}

/// A spring-based animator over `f32`
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without resetting velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance by `dt` seconds, sub-stepping to keep RK4 stable
    pub fn step(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
                return;
            }
            let h = remaining.min(MAX_STEP_SECS);
            self.integrate(h);
            remaining -= h;
        }
    }

    fn integrate(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let (dx1, dv1) = (v, self.acceleration(x, v));
        let (dx2, dv2) = {
            let (x2, v2) = (x + dx1 * h * 0.5, v + dv1 * h * 0.5);
            (v2, self.acceleration(x2, v2))
        };
        let (dx3, dv3) = {
            let (x3, v3) = (x + dx2 * h * 0.5, v + dv2 * h * 0.5);
            (v3, self.acceleration(x3, v3))
        };
        let (dx4, dv4) = {
            let (x4, v4) = (x + dx3 * h, v + dv3 * h);
            (v4, self.acceleration(x4, v4))
        };

        self.value += (dx1 + 2.0 * dx2 + 2.0 * dx3 + dx4) * h / 6.0;
        self.velocity += (dv1 + 2.0 * dv2 + 2.0 * dv3 + dv4) * h / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

impl Driver<f32> for Spring {
    fn advance(&mut self, dt_ms: f32) -> Step<f32> {
        self.step(dt_ms / 1000.0);
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            Step::Finished {
                value: self.target,
                leftover_ms: 0.0,
            }
        } else {
            Step::Running(self.value)
        }
    }

    fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stiff() -> SpringConfig {
        SpringConfig::new(400.0, 30.0, 1.0)
    }

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(stiff(), 0.95);
        spring.set_target(1.0);

        // Two seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_default_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let mut peak: f32 = 0.0;
        for _ in 0..60 {
            spring.step(1.0 / 60.0);
            peak = peak.max(spring.value());
        }
        assert!(peak > 1.0, "peak {peak}");
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::new(120.0, 14.0, 1.0), 0.0);
        spring.set_target(100.0);
        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);
        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_large_frame_is_stable() {
        let mut spring = Spring::new(stiff(), 0.0);
        spring.set_target(1000.0);
        for _ in 0..20 {
            spring.step(0.25);
            assert!(spring.value().is_finite());
            assert!(spring.value() < 2000.0);
        }
        assert!((spring.value() - 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_driver_reports_finish() {
        let mut spring = Spring::new(stiff(), 0.95);
        spring.set_target(1.0);

        let mut finished = None;
        for _ in 0..240 {
            if let Step::Finished { value, .. } = spring.advance(1000.0 / 60.0) {
                finished = Some(value);
                break;
            }
        }
        assert_eq!(finished, Some(1.0));
    }
}
