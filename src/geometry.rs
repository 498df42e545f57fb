#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// The platform accent blue used as the button tint.
    pub const SYSTEM_BLUE: Color = Color::from_hex(0x007AFF);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: (f32, f32), size: Size) -> Self {
        Self::new(origin.0, origin.1, size.width, size.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A 2D affine transform stored row-major as `[a, b, tx, c, d, ty]`.
///
/// Maps `(x, y)` to `(a*x + b*y + tx, c*x + d*y + ty)`. Only scale and
/// translation are ever produced by this crate, so `b` and `c` stay zero,
/// but composition is written for the general case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub data: [f32; 6],
}

impl Affine {
    pub const IDENTITY: Self = Self {
        data: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            data: [1.0, 0.0, x, 0.0, 1.0, y],
        }
    }

    /// Scale around a pivot point instead of the coordinate origin.
    pub fn scale_about(sx: f32, sy: f32, pivot: (f32, f32)) -> Self {
        let (px, py) = pivot;
        Self {
            data: [sx, 0.0, px - sx * px, 0.0, sy, py - sy * py],
        }
    }

    /// Compose this transform with another: `self * other`.
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Affine) -> Affine {
        let [a0, b0, x0, c0, d0, y0] = self.data;
        let [a1, b1, x1, c1, d1, y1] = other.data;
        Affine {
            data: [
                a0 * a1 + b0 * c1,
                a0 * b1 + b0 * d1,
                a0 * x1 + b0 * y1 + x0,
                c0 * a1 + d0 * c1,
                c0 * b1 + d0 * d1,
                c0 * x1 + d0 * y1 + y0,
            ],
        }
    }

    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.data;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    /// Map a rect's corners; exact for the axis-aligned transforms built here.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let (x0, y0) = self.transform_point(rect.x, rect.y);
        let (x1, y1) = self.transform_point(rect.x + rect.width, rect.y + rect.height);
        Rect::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs())
    }

}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_rect_contains_and_center() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(10.0, 10.0));
        assert!(!r.contains(30.0, 15.0));
        assert_eq!(r.center(), (20.0, 15.0));
    }

    #[test]
    fn test_translate() {
        let t = Affine::translate(10.0, 20.0);
        assert_eq!(t.transform_point(5.0, 5.0), (15.0, 25.0));
    }

    #[test]
    fn test_scale_about_keeps_pivot_fixed() {
        let t = Affine::scale_about(2.0, 2.0, (50.0, 50.0));
        let (px, py) = t.transform_point(50.0, 50.0);
        assert!(approx_eq(px, 50.0));
        assert!(approx_eq(py, 50.0));

        // 40 units left of the pivot becomes 80 units left of it
        let (x, y) = t.transform_point(10.0, 50.0);
        assert!(approx_eq(x, -30.0));
        assert!(approx_eq(y, 50.0));
    }

    #[test]
    fn test_compose_applies_other_first() {
        let translate = Affine::translate(10.0, 0.0);
        let scale = Affine::scale_about(2.0, 2.0, (0.0, 0.0));

        // translate first, then scale: (0,0) -> (10,0) -> (20,0)
        let composed = scale.then(&translate);
        let (x, y) = composed.transform_point(0.0, 0.0);
        assert!(approx_eq(x, 20.0));
        assert!(approx_eq(y, 0.0));

        // scale first, then translate: (0,0) -> (0,0) -> (10,0)
        let composed = translate.then(&scale);
        let (x, _) = composed.transform_point(0.0, 0.0);
        assert!(approx_eq(x, 10.0));
    }

    #[test]
    fn test_zero_scale_collapses_rect_to_pivot() {
        let rect = Rect::new(0.0, 0.0, 28.0, 28.0);
        let t = Affine::scale_about(0.0, 0.0, rect.center());
        let mapped = t.transform_rect(&rect);
        assert!(approx_eq(mapped.x, 14.0));
        assert!(approx_eq(mapped.width, 0.0));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Affine::default(), Affine::IDENTITY);
        assert_eq!(Affine::scale_about(1.0, 1.0, (3.0, 4.0)), Affine::IDENTITY);
    }
}
