use crate::style::ResolvedVisual;

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    /// t can exceed [0, 1] range for overshoot effects
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for (f32, f32) {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        (f32::lerp(&from.0, &to.0, t), f32::lerp(&from.1, &to.1, t))
    }
}

impl Animatable for ResolvedVisual {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        ResolvedVisual {
            scale: Animatable::lerp(&from.scale, &to.scale, t),
            offset: Animatable::lerp(&from.offset, &to.offset, t),
            opacity: f32::lerp(&from.opacity, &to.opacity, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(f32::lerp(&0.0, &10.0, 0.0), 0.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 0.5), 5.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 1.0), 10.0);
        // Overshoot
        assert_eq!(f32::lerp(&0.0, &10.0, 1.5), 15.0);
    }

    #[test]
    fn test_pair_lerp() {
        let mid = <(f32, f32)>::lerp(&(0.0, 10.0), &(20.0, 0.0), 0.25);
        assert_eq!(mid, (5.0, 7.5));
    }

    #[test]
    fn test_visual_lerp() {
        let hidden = ResolvedVisual {
            scale: (0.0, 0.0),
            offset: (10.5, 0.0),
            opacity: 0.0,
        };
        let shown = ResolvedVisual::IDENTITY;
        let mid = ResolvedVisual::lerp(&hidden, &shown, 0.5);
        assert_eq!(mid.scale, (0.5, 0.5));
        assert_eq!(mid.offset, (5.25, 0.0));
        assert_eq!(mid.opacity, 0.5);
    }
}
