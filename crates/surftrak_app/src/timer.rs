//! Fixed-period timer driven by the frame clock
//!
//! Used for UI-local state that cycles independently of any animation,
//! such as the goal card's rotating message.

/// Fires once every `period_ms` of accumulated frame time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    period_ms: f32,
    elapsed_ms: f32,
}

impl Interval {
    pub fn new(period_ms: f32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Add frame time; returns how many periods completed
    ///
    /// A non-positive period never fires.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if self.period_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        let fired = (self.elapsed_ms / self.period_ms).floor();
        self.elapsed_ms -= fired * self.period_ms;
        fired as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_each_period() {
        let mut timer = Interval::new(5000.0);
        assert_eq!(timer.advance(4999.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.advance(2500.0), 0);
        assert_eq!(timer.advance(2500.0), 1);
    }

    #[test]
    fn test_long_frame_fires_several() {
        let mut timer = Interval::new(100.0);
        assert_eq!(timer.advance(350.0), 3);
        assert_eq!(timer.advance(50.0), 1);
    }

    #[test]
    fn test_disabled_never_fires() {
        let mut off = Interval::new(0.0);
        assert_eq!(off.advance(1_000_000.0), 0);
    }
}
