//! Geometric primitives shared by the layout pipeline.
//!
//! [`Matrix`] follows the PDF convention of row vectors: a point `(x, y)` maps
//! to `(a*x + c*y + e, b*x + d*y + f)`, and `m1.concat(&m2)` yields the
//! transform that applies `m1` first and `m2` second.

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in PDF (bottom-left origin) coordinates, as stored in
/// `/MediaBox`, `/CropBox`, `/FontBBox` or a Type3 `d1` operator.
///
/// Corners are kept as given; [`Rect::normalized`] sorts them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl Rect {
    pub fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// Rectangle with its lower-left corner at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Return a copy whose lower-left corner really is the minimum corner.
    pub fn normalized(&self) -> Self {
        Self {
            llx: self.llx.min(self.urx),
            lly: self.lly.min(self.ury),
            urx: self.llx.max(self.urx),
            ury: self.lly.max(self.ury),
        }
    }

    pub fn width(&self) -> f64 {
        self.urx - self.llx
    }

    pub fn height(&self) -> f64 {
        self.ury - self.lly
    }

    /// Clip `self` against `bounds`: max of the lower-left corners, min of
    /// the upper-right corners.
    pub fn clip_to(&self, bounds: &Rect) -> Rect {
        Rect {
            llx: self.llx.max(bounds.llx),
            lly: self.lly.max(bounds.lly),
            urx: self.urx.min(bounds.urx),
            ury: self.ury.min(bounds.ury),
        }
    }

    /// Intersection of two normalized rectangles, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = self.clip_to(other);
        if r.urx >= r.llx && r.ury >= r.lly {
            Some(r)
        } else {
            None
        }
    }

    /// The four corners, counter-clockwise from the lower-left one.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.llx, self.lly),
            Point::new(self.urx, self.lly),
            Point::new(self.urx, self.ury),
            Point::new(self.llx, self.ury),
        ]
    }
}

/// Bounding box with top-left origin coordinate system.
///
/// Coordinates follow the page-space convention used in layout records:
/// - `x0`: left edge
/// - `top`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `bottom`: bottom edge (distance from top of page)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Smallest box containing every point.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BBox::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bbox.x0 = bbox.x0.min(p.x);
            bbox.top = bbox.top.min(p.y);
            bbox.x1 = bbox.x1.max(p.x);
            bbox.bottom = bbox.bottom.max(p.y);
        }
        Some(bbox)
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            top: self.top.min(other.top),
            x1: self.x1.max(other.x1),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Affine transformation matrix `[a b c d e f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Counter-clockwise rotation by `degrees` (in a y-up frame).
    ///
    /// Quarter turns are built from exact sine/cosine values so that a
    /// 90 degree rotation does not leave `6e-17` residue in the matrix.
    pub fn rotate_degrees(degrees: f64) -> Self {
        let quarter = degrees / 90.0;
        let (sin, cos) = if quarter.fract() == 0.0 {
            match (quarter as i64).rem_euclid(4) {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            }
        } else {
            degrees.to_radians().sin_cos()
        };
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn from_array(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Concatenate: the result applies `self` first, then `other`.
    pub fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Transform the four corners of `rect` and return their axis-aligned bounds.
    pub fn transform_rect(&self, rect: &Rect) -> BBox {
        let corners = rect.corners().map(|p| self.transform_point(p));
        // Four corners are always present.
        BBox::from_points(&corners).unwrap_or(BBox::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Length of the transformed unit x vector.
    pub fn scaling_factor_x(&self) -> f64 {
        if self.b != 0.0 {
            (self.a * self.a + self.b * self.b).sqrt()
        } else {
            self.a
        }
    }

    /// Length of the transformed unit y vector.
    pub fn scaling_factor_y(&self) -> f64 {
        if self.c != 0.0 {
            (self.c * self.c + self.d * self.d).sqrt()
        } else {
            self.d
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, msg: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{msg}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BBox::new(10.0, 20.0, 50.0, 60.0);
        assert_eq!(bbox.width(), 40.0);
        assert_eq!(bbox.height(), 40.0);
    }

    #[test]
    fn test_bbox_union() {
        let a = BBox::new(10.0, 20.0, 30.0, 40.0);
        let b = BBox::new(5.0, 25.0, 35.0, 45.0);
        assert_eq!(a.union(&b), BBox::new(5.0, 20.0, 35.0, 45.0));
    }

    #[test]
    fn bbox_from_points_empty_is_none() {
        assert!(BBox::from_points(&[]).is_none());
    }

    #[test]
    fn rect_clip_takes_inner_corners() {
        let glyph = Rect::new(-50.0, -300.0, 700.0, 900.0);
        let font = Rect::new(0.0, -200.0, 1000.0, 800.0);
        assert_eq!(glyph.clip_to(&font), Rect::new(0.0, -200.0, 700.0, 800.0));
    }

    #[test]
    fn rect_intersect_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(a.intersect(&b).is_none());
        assert_eq!(
            a.intersect(&Rect::new(5.0, 5.0, 30.0, 30.0)),
            Some(Rect::new(5.0, 5.0, 10.0, 10.0))
        );
    }

    #[test]
    fn rect_normalized_swaps_corners() {
        let r = Rect::new(100.0, 50.0, 0.0, 0.0).normalized();
        assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn concat_applies_left_operand_first() {
        let scale = Matrix::scale(2.0, 2.0);
        let shift = Matrix::translate(10.0, 0.0);
        let p = scale.concat(&shift).transform_point(Point::new(1.0, 1.0));
        assert_eq!(p, Point::new(12.0, 2.0));
        let q = shift.concat(&scale).transform_point(Point::new(1.0, 1.0));
        assert_eq!(q, Point::new(22.0, 2.0));
    }

    #[test]
    fn rotate_quarter_turn_is_exact() {
        let m = Matrix::rotate_degrees(90.0);
        assert_eq!(m, Matrix::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0));
        let p = m.transform_point(Point::new(1.0, 0.0));
        assert_eq!(p, Point::new(0.0, 1.0));
    }

    #[test]
    fn rotate_arbitrary_angle() {
        let m = Matrix::rotate_degrees(45.0);
        let p = m.transform_point(Point::new(1.0, 0.0));
        assert_approx(p.x, std::f64::consts::FRAC_1_SQRT_2, "x");
        assert_approx(p.y, std::f64::consts::FRAC_1_SQRT_2, "y");
    }

    #[test]
    fn transform_rect_bounds_rotated_corners() {
        let m = Matrix::rotate_degrees(90.0);
        let b = m.transform_rect(&Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(b, BBox::new(-5.0, 0.0, 0.0, 10.0));
    }

    #[test]
    fn scaling_factors_with_shear() {
        let m = Matrix::new(3.0, 4.0, 0.0, 2.0, 0.0, 0.0);
        assert_approx(m.scaling_factor_x(), 5.0, "sx");
        assert_approx(m.scaling_factor_y(), 2.0, "sy");
        let n = Matrix::new(-2.0, 0.0, 0.0, -3.0, 0.0, 0.0);
        assert_approx(n.scaling_factor_x(), -2.0, "sx keeps sign");
        assert_approx(n.scaling_factor_y(), -3.0, "sy keeps sign");
    }
}
