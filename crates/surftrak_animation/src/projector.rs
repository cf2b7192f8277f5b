//! Derived style projection
//!
//! Projectors are pure functions from the current animated values to a
//! [`StyleProps`] bag that a renderer applies each frame. The scheduler
//! recomputes a projection only on frames where one of its inputs moved.

use crate::values::Ramp;
use serde::Serialize;
use smallvec::SmallVec;
use surftrak_core::Color;

/// Visual properties produced by a projector
///
/// Every field is optional; `None` means "leave the static style alone".
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    /// Width as a fraction of the parent's width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_fraction: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<SmallVec<[Color; 3]>>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn width_fraction(mut self, fraction: f32) -> Self {
        self.width_fraction = Some(fraction);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn gradient(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.gradient = Some(colors.into_iter().collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.scale.is_none()
            && self.width_fraction.is_none()
            && self.background.is_none()
            && self.gradient.is_none()
    }
}

/// Map `x` through a piecewise-linear scalar ramp, clamping at the ends
pub fn interpolate(x: f32, input: &[f32], output: &[f32]) -> f32 {
    Ramp::new(input, output).sample(x)
}

/// Map a progress value onto a color ramp, clamping at the ends
///
/// ```rust
/// use surftrak_animation::interpolate_color;
/// use surftrak_core::Color;
///
/// let stops = [Color::from_hex(0x1A73E8), Color::from_hex(0x0056B3), Color::from_hex(0x004494)];
/// assert_eq!(interpolate_color(0.5, &[0.0, 0.5, 1.0], &stops), stops[1]);
/// ```
pub fn interpolate_color(x: f32, input: &[f32], colors: &[Color]) -> Color {
    Ramp::new(input, colors).sample(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_empty() {
        assert!(StyleProps::new().is_empty());
        let style = StyleProps::new().opacity(0.5).scale(1.1);
        assert!(!style.is_empty());
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.scale, Some(1.1));
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_interpolate_scalar() {
        assert!((interpolate(0.25, &[0.0, 1.0], &[0.7, 0.1]) - 0.55).abs() < 1e-6);
        assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[0.7, 0.1]), 0.7);
        assert_eq!(interpolate(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn test_interpolate_color_clamps() {
        let from = Color::from_hex(0x1A73E8);
        let to = Color::from_hex(0x4AB1FF);
        assert_eq!(interpolate_color(-0.5, &[0.0, 1.0], &[from, to]), from);
        assert_eq!(interpolate_color(3.0, &[0.0, 1.0], &[from, to]), to);
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&StyleProps::new().scale(1.2)).unwrap();
        assert_eq!(json, r#"{"scale":1.2}"#);
    }
}
