//! Easing curves
//!
//! An easing maps normalized elapsed time `t` in `[0, 1]` to normalized
//! progress. Every built-in curve satisfies `apply(0) == 0` and
//! `apply(1) == 1`; curves with control points outside `[0, 1]` may overshoot
//! in between.

/// Easing function applied to a timeline's elapsed fraction
#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInCubic,
    EaseOutCubic,
    /// CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`
    CubicBezier(f32, f32, f32, f32),
    /// Caller-supplied curve; must map 0 to 0 and 1 to 1
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// `bezier(0.25, 0.1, 0.25, 1)`, the CSS `ease` curve used across the app
    pub const STANDARD: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

    pub const fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Easing::CubicBezier(x1, y1, x2, y2)
    }

    /// Map elapsed fraction `t` to progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
            Easing::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

/// Solve the bezier for `x == t` and return the matching `y`
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Polynomial coefficients for one axis: B(s) = ((a*s + b)*s + c)*s
    let coeffs = |p1: f32, p2: f32| {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    };
    let (ax, bx, cx) = coeffs(x1, x2);
    let (ay, by, cy) = coeffs(y1, y2);

    let sample_x = |s: f32| ((ax * s + bx) * s + cx) * s;
    let slope_x = |s: f32| (3.0 * ax * s + 2.0 * bx) * s + cx;

    // Newton-Raphson first; fall back to bisection on flat slopes
    let mut s = t;
    let mut solved = false;
    for _ in 0..8 {
        let err = sample_x(s) - t;
        if err.abs() < 1e-6 {
            solved = true;
            break;
        }
        let d = slope_x(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    if !solved {
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = t;
        for _ in 0..32 {
            let x = sample_x(s);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
    }

    ((ay * s + by) * s + cy) * s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::STANDARD,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-5, "{easing:?} decreased at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = Easing::bezier(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_standard_curve_shape() {
        // The CSS `ease` curve front-loads progress
        let mid = Easing::STANDARD.apply(0.5);
        assert!(mid > 0.75 && mid < 0.85, "ease(0.5) = {mid}");
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Easing::EaseInQuad.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseInQuad.apply(2.0), 1.0);
    }

    #[test]
    fn test_custom() {
        fn step(t: f32) -> f32 {
            if t < 1.0 {
                0.0
            } else {
                1.0
            }
        }
        let easing = Easing::Custom(step);
        assert_eq!(easing.apply(0.99), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }
}
