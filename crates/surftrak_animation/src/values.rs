//! Animatable value types
//!
//! Provides the [`Interpolate`] trait for values that can be animated and a
//! piecewise-linear [`Ramp`] for mapping a scalar onto a series of stops.

use smallvec::SmallVec;
use surftrak_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Copy + Send + 'static {
    /// Linearly interpolate between self and other by factor t
    ///
    /// `t` is not clamped, so easings that overshoot carry through.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for change detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        // Channels are clamped so an overshooting easing can't leave gamut
        Color::rgba(
            (self.r + (other.r - self.r) * t).clamp(0.0, 1.0),
            (self.g + (other.g - self.g) * t).clamp(0.0, 1.0),
            (self.b + (other.b - self.b) * t).clamp(0.0, 1.0),
            (self.a + (other.a - self.a) * t).clamp(0.0, 1.0),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

// ============================================================================
// Ramp
// ============================================================================

/// A stop on a [`Ramp`]
#[derive(Clone, Copy, Debug)]
pub struct RampStop<T: Interpolate> {
    /// Input position
    pub at: f32,
    /// Output value at this position
    pub value: T,
}

/// Piecewise-linear mapping from a scalar input to `T`
///
/// Inputs outside the first/last stop clamp to the end values.
///
/// ```rust
/// use surftrak_animation::Ramp;
///
/// let ramp = Ramp::new(&[0.0, 0.5, 1.0], &[0.0_f32, 10.0, 0.0]);
/// assert_eq!(ramp.sample(0.25), 5.0);
/// assert_eq!(ramp.sample(2.0), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Ramp<T: Interpolate> {
    stops: SmallVec<[RampStop<T>; 4]>,
}

impl<T: Interpolate> Ramp<T> {
    /// Pair up input positions with output values
    ///
    /// Extra entries in the longer slice are ignored. Stops are sorted by
    /// position.
    pub fn new(input: &[f32], output: &[T]) -> Self {
        let mut stops: SmallVec<[RampStop<T>; 4]> = input
            .iter()
            .zip(output)
            .map(|(&at, &value)| RampStop { at, value })
            .collect();
        stops.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { stops }
    }

    pub fn stops(&self) -> &[RampStop<T>] {
        &self.stops
    }

    /// Sample the ramp; `None` when it has no stops
    pub fn try_sample(&self, x: f32) -> Option<T> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if x <= first.at {
            return Some(first.value);
        }
        if x >= last.at {
            return Some(last.value);
        }

        let upper = self.stops.iter().position(|s| s.at >= x)?;
        let (a, b) = (&self.stops[upper - 1], &self.stops[upper]);
        let span = b.at - a.at;
        if span.abs() < f32::EPSILON {
            return Some(b.value);
        }
        Some(a.value.lerp(&b.value, (x - a.at) / span))
    }
}

impl<T: Interpolate + Default> Ramp<T> {
    /// Sample the ramp, falling back to `T::default()` when empty
    pub fn sample(&self, x: f32) -> T {
        self.try_sample(x).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
        // Overshoot is preserved for scalars
        assert!((0.0_f32.lerp(&1.0, 1.2) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_color_interpolation_clamps() {
        let c = Color::BLACK.lerp(&Color::WHITE, 1.5);
        assert_eq!(c, Color::WHITE);

        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!(mid.approx_eq(&Color::rgb(0.5, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn test_ramp_three_stops() {
        let a = Color::from_hex(0x1A73E8);
        let b = Color::from_hex(0x0056B3);
        let c = Color::from_hex(0x004494);
        let ramp = Ramp::new(&[0.0, 0.5, 1.0], &[a, b, c]);

        assert!(ramp.sample(0.0).approx_eq(&a, 1e-6));
        assert!(ramp.sample(0.5).approx_eq(&b, 1e-6));
        assert!(ramp.sample(1.0).approx_eq(&c, 1e-6));
        assert!(ramp.sample(0.75).approx_eq(&b.lerp(&c, 0.5), 1e-6));
    }

    #[test]
    fn test_ramp_unsorted_input() {
        let ramp = Ramp::new(&[1.0, 0.0], &[10.0_f32, 0.0]);
        assert_eq!(ramp.sample(0.5), 5.0);
    }

    #[test]
    fn test_empty_ramp() {
        let ramp: Ramp<f32> = Ramp::new(&[], &[]);
        assert_eq!(ramp.try_sample(0.5), None);
        assert_eq!(ramp.sample(0.5), 0.0);
    }
}
