//! Timing functions (easing curves) for animations.
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseInOut`] - `cubic-bezier(0.42, 0, 0.58, 1)`, the
//!   standard ease-in-out control points

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0).
    /// Input is clamped; the endpoints always map to exactly 0.0 and 1.0.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
        }
    }
}

/// Cubic bezier curve evaluation.
/// Assumes x1, x2 are in [0, 1] so x(t) is monotonic.
fn cubic_bezier(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson to find the curve parameter whose x matches the input
    let mut t = x;
    for _ in 0..8 {
        let err = cubic_bezier_x(t, x1, x2) - x;
        if err.abs() < 1e-6 {
            break;
        }
        let slope = cubic_bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }
    cubic_bezier_y(t, y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_endpoints_are_exact() {
        for timing in [TimingFunction::Linear, TimingFunction::EaseInOut] {
            assert_eq!(timing.evaluate(0.0), 0.0);
            assert_eq!(timing.evaluate(1.0), 1.0);
            assert_eq!(timing.evaluate(1.7), 1.0);
            assert_eq!(timing.evaluate(-0.3), 0.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let timing = TimingFunction::EaseInOut;
        assert!((timing.evaluate(0.5) - 0.5).abs() < 1e-3);
        assert!(timing.evaluate(0.2) < 0.2);
        assert!(timing.evaluate(0.8) > 0.8);
        let a = timing.evaluate(0.25);
        let b = timing.evaluate(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
    }
}
