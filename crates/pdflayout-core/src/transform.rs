//! Per-page coordinate transforms.
//!
//! Device space (PDF user space after the CTM, bottom-left origin) is mapped
//! to top-down page space by a fixed chain:
//!
//! 1. `flip`: `y -> crop_height - y`
//! 2. `rotate`: translate-then-rotate for `/Rotate` 90, 180 and 270
//! 3. `crop_translate`: `(-crop.llx, +crop.lly)`, applied to outline boxes only
//!
//! Advance boxes take the optional `page_origin` shift inside the text
//! rendering matrix instead of `crop_translate`.

use crate::geometry::{BBox, Matrix, Point, Rect};

/// Page boxes and rotation as reported by the document model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGeometry {
    /// `/Rotate`, normalized to 0, 90, 180 or 270.
    pub rotation: i32,
    pub media_box: Rect,
    pub crop_box: Rect,
}

impl PageGeometry {
    /// Create page geometry; a missing crop box falls back to the media box.
    pub fn new(media_box: Rect, crop_box: Option<Rect>, rotation: i32) -> Self {
        Self {
            rotation: normalize_rotation(rotation),
            media_box: media_box.normalized(),
            crop_box: crop_box.unwrap_or(media_box).normalized(),
        }
    }

    /// Height of the visible (crop) area in unrotated page units.
    pub fn height(&self) -> f64 {
        self.crop_box.height()
    }
}

/// Snap a `/Rotate` value to a multiple of 90 in `0..360`.
///
/// Values that are not multiples of 90 are invalid per ISO 32000 and are
/// treated as 0.
pub fn normalize_rotation(rotation: i32) -> i32 {
    let r = rotation.rem_euclid(360);
    if r % 90 == 0 { r } else { 0 }
}

/// The composed page transforms.
///
/// Built once per page and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformChain {
    pub flip: Matrix,
    pub rotate: Matrix,
    pub crop_translate: Matrix,
    /// Shift by the negated crop-box origin; `None` when the crop box starts at `(0, 0)`.
    pub page_origin: Option<Matrix>,
}

impl TransformChain {
    pub fn build(rotation: i32, media_box: &Rect, crop_box: &Rect) -> Self {
        let flip = Matrix::scale(1.0, -1.0).concat(&Matrix::translate(0.0, crop_box.height()));

        let rotate = match normalize_rotation(rotation) {
            0 => Matrix::identity(),
            r => {
                let (tx, ty) = match r {
                    90 => (media_box.height(), 0.0),
                    270 => (0.0, media_box.width()),
                    _ => (media_box.width(), media_box.height()),
                };
                Matrix::rotate_degrees(f64::from(r)).concat(&Matrix::translate(tx, ty))
            }
        };

        let crop_translate = Matrix::translate(-crop_box.llx, crop_box.lly);

        let page_origin = if crop_box.llx == 0.0 && crop_box.lly == 0.0 {
            None
        } else {
            Some(Matrix::translate(-crop_box.llx, -crop_box.lly))
        };

        Self {
            flip,
            rotate,
            crop_translate,
            page_origin,
        }
    }

    /// `flip` followed by `rotate`; the tail used for advance boxes.
    pub fn flip_rotate(&self) -> Matrix {
        self.flip.concat(&self.rotate)
    }

    /// `flip`, `rotate` and `crop_translate`; the tail used for outline boxes.
    pub fn flip_rotate_crop(&self) -> Matrix {
        self.flip_rotate().concat(&self.crop_translate)
    }

    /// Append the page-origin shift (if any) after a text rendering matrix.
    pub fn with_page_origin(&self, trm: &Matrix) -> Matrix {
        match &self.page_origin {
            Some(origin) => trm.concat(origin),
            None => *trm,
        }
    }

    /// Map a device-space point through `flip` only.
    pub fn flip_point(&self, p: Point) -> Point {
        self.flip.transform_point(p)
    }

    /// Map a glyph-space rectangle to an outline box: `glyph_to_device`, then
    /// the full tail.
    pub fn outline_box(&self, glyph_to_device: &Matrix, rect: &Rect) -> BBox {
        glyph_to_device
            .concat(&self.flip_rotate_crop())
            .transform_rect(rect)
    }

    /// Map a glyph-space rectangle to an advance box: `glyph_to_device`, then
    /// `flip` and `rotate`.
    pub fn advance_box(&self, glyph_to_device: &Matrix, rect: &Rect) -> BBox {
        glyph_to_device
            .concat(&self.flip_rotate())
            .transform_rect(rect)
    }
}

/// Per-page immutable state shared by both replay passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageContext {
    /// 1-based page number used in output records.
    pub page_number: usize,
    pub geometry: PageGeometry,
    pub transforms: TransformChain,
}

impl PageContext {
    pub fn new(page_number: usize, geometry: PageGeometry) -> Self {
        let transforms =
            TransformChain::build(geometry.rotation, &geometry.media_box, &geometry.crop_box);
        Self {
            page_number,
            geometry,
            transforms,
        }
    }

    pub fn page_height(&self) -> f64 {
        self.geometry.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER_W: f64 = 612.0;
    const LETTER_H: f64 = 792.0;

    fn letter() -> Rect {
        Rect::new(0.0, 0.0, LETTER_W, LETTER_H)
    }

    fn assert_approx(actual: f64, expected: f64, msg: &str) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{msg}: expected {expected}, got {actual}"
        );
    }

    fn assert_point(actual: Point, expected: (f64, f64), msg: &str) {
        assert_approx(actual.x, expected.0, &format!("{msg} x"));
        assert_approx(actual.y, expected.1, &format!("{msg} y"));
    }

    #[test]
    fn flip_inverts_y_by_page_height() {
        let chain = TransformChain::build(0, &letter(), &letter());
        assert_point(chain.flip_point(Point::new(72.0, 720.0)), (72.0, 72.0), "flip");
        assert_point(chain.flip_point(Point::new(0.0, 0.0)), (0.0, LETTER_H), "origin");
    }

    #[test]
    fn flip_uses_crop_height() {
        let crop = Rect::new(36.0, 36.0, 576.0, 756.0);
        let chain = TransformChain::build(0, &letter(), &crop);
        assert_point(chain.flip_point(Point::new(10.0, 20.0)), (10.0, 700.0), "flip");
    }

    #[test]
    fn rotation_zero_is_identity() {
        let chain = TransformChain::build(0, &letter(), &letter());
        assert_eq!(chain.rotate, Matrix::identity());
    }

    #[test]
    fn rotation_90_translates_by_media_height() {
        let chain = TransformChain::build(90, &letter(), &letter());
        let expected = Matrix::rotate_degrees(90.0).concat(&Matrix::translate(LETTER_H, 0.0));
        assert_eq!(chain.rotate, expected);
        // (x, y) -> (H - y, x)
        let p = chain.rotate.transform_point(Point::new(10.0, 20.0));
        assert_point(p, (LETTER_H - 20.0, 10.0), "rot90");
    }

    #[test]
    fn rotation_180_translates_by_width_and_height() {
        let chain = TransformChain::build(180, &letter(), &letter());
        let p = chain.rotate.transform_point(Point::new(10.0, 20.0));
        assert_point(p, (LETTER_W - 10.0, LETTER_H - 20.0), "rot180");
    }

    #[test]
    fn rotation_270_translates_by_media_width() {
        let chain = TransformChain::build(270, &letter(), &letter());
        let p = chain.rotate.transform_point(Point::new(10.0, 20.0));
        assert_point(p, (20.0, LETTER_W - 10.0), "rot270");
    }

    #[test]
    fn negative_rotation_is_normalized() {
        assert_eq!(normalize_rotation(-90), 270);
        assert_eq!(normalize_rotation(450), 90);
        assert_eq!(normalize_rotation(45), 0);
    }

    #[test]
    fn crop_translate_is_asymmetric() {
        let crop = Rect::new(36.0, 48.0, 576.0, 756.0);
        let chain = TransformChain::build(0, &letter(), &crop);
        assert_eq!(chain.crop_translate, Matrix::translate(-36.0, 48.0));
        assert_eq!(chain.page_origin, Some(Matrix::translate(-36.0, -48.0)));
    }

    #[test]
    fn page_origin_absent_at_zero_crop() {
        let chain = TransformChain::build(0, &letter(), &letter());
        assert!(chain.page_origin.is_none());
        let trm = Matrix::new(12.0, 0.0, 0.0, 12.0, 72.0, 720.0);
        assert_eq!(chain.with_page_origin(&trm), trm);
    }

    #[test]
    fn outline_and_advance_boxes_agree_with_offset_crop() {
        // Both routes must land on the same page-space position even though
        // they apply the crop shift at different points in the chain.
        let crop = Rect::new(50.0, 100.0, 550.0, 700.0);
        let chain = TransformChain::build(0, &letter(), &crop);
        let trm = Matrix::new(10.0, 0.0, 0.0, 10.0, 150.0, 400.0);
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);

        let outline = chain.outline_box(&trm, &unit);
        let advance = chain.advance_box(&chain.with_page_origin(&trm), &unit);
        assert_approx(outline.x0, 100.0, "outline x0");
        assert_approx(outline.top, 290.0, "outline top");
        assert_approx(advance.x0, outline.x0, "x0");
        assert_approx(advance.top, outline.top, "top");
        assert_approx(advance.bottom, outline.bottom, "bottom");
    }

    #[test]
    fn page_context_height_is_crop_height() {
        let geo = PageGeometry::new(letter(), Some(Rect::new(0.0, 0.0, 300.0, 400.0)), 0);
        let ctx = PageContext::new(1, geo);
        assert_approx(ctx.page_height(), 400.0, "height");
    }

    #[test]
    fn page_geometry_defaults_crop_to_media() {
        let geo = PageGeometry::new(letter(), None, 360);
        assert_eq!(geo.crop_box, letter());
        assert_eq!(geo.rotation, 0);
    }
}
