//! Per-glyph box computation.
//!
//! Every shown glyph gets two rectangles in top-down page space:
//!
//! - the *advance box*: advance width by cap height (or half the font box),
//!   starting at the font box's lower y, mapped through the text rendering matrix,
//!   `flip` and `rotate`;
//! - the *outline box*: the bounds of the real glyph outline, mapped through
//!   the font matrix, the text rendering matrix, `flip`, `rotate` and
//!   `crop_translate`.

use tracing::debug;

use crate::encoding::{GlyphList, NO_UNICODE};
use crate::font::{FontQuery, GlyphProgram};
use crate::geometry::{BBox, Matrix, Rect};
use crate::transform::TransformChain;

/// Space width used when the font offers no usable metric at all.
const FALLBACK_SPACE_WIDTH: f64 = 1.0;

/// Share of the average glyph width used as a space estimate.
const AVERAGE_WIDTH_SPACE_RATIO: f64 = 0.8;

/// Why a glyph has no outline box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineMiss {
    /// The font variant offers no outlines.
    UnsupportedFont,
    /// The font has no procedure or outline for this code.
    MissingGlyph,
}

/// Computes glyph boxes, space widths and Unicode text for one page.
#[derive(Debug, Clone, Copy)]
pub struct GlyphMetricsResolver<'a> {
    transforms: &'a TransformChain,
    glyph_list: GlyphList,
}

impl<'a> GlyphMetricsResolver<'a> {
    pub fn new(transforms: &'a TransformChain) -> Self {
        Self {
            transforms,
            glyph_list: GlyphList::new(),
        }
    }

    /// Advance box of `code` rendered with text rendering matrix `trm`.
    pub fn advance_box(&self, font: &dyn FontQuery, code: u32, trm: &Matrix) -> BBox {
        let width = font.advance_width(code);
        let (lly, height) = advance_extent(font);
        let rect = Rect::new(0.0, lly, width, lly + height);

        let glyph_to_text = if font.glyph_program().is_procedural() {
            font.font_matrix()
        } else {
            Matrix::scale(0.001, 0.001)
        };
        let glyph_to_device = glyph_to_text.concat(&self.transforms.with_page_origin(trm));
        self.transforms.advance_box(&glyph_to_device, &rect)
    }

    /// Outline box of `code` rendered with text rendering matrix `trm`.
    ///
    /// # Errors
    ///
    /// Returns the reason when no outline can be resolved. This is never
    /// fatal: the record is simply emitted without a glyph box.
    pub fn outline_box(
        &self,
        font: &dyn FontQuery,
        code: u32,
        trm: &Matrix,
    ) -> Result<BBox, OutlineMiss> {
        let mut glyph_to_device = font.font_matrix().concat(trm);

        let rect = match font.glyph_program() {
            GlyphProgram::Procedural(procs) => procs
                .glyph_bbox(code)
                .map(|glyph| glyph.clip_to(&font.bounding_box())),
            GlyphProgram::Scalable(outlines) => {
                let bounds = outlines.outline_bounds(code);
                if let Some(upem) = outlines.units_per_em() {
                    if upem > 0.0 && upem != 1000.0 {
                        let k = 1000.0 / upem;
                        glyph_to_device = Matrix::scale(k, k).concat(&glyph_to_device);
                    }
                }
                bounds
            }
            GlyphProgram::Encoded(outlines) => outlines
                .glyph_name(code)
                .and_then(|name| outlines.outline_bounds_by_name(&name)),
            GlyphProgram::Unsupported => {
                debug!(font = font.name(), code, "no outline support for font variant");
                return Err(OutlineMiss::UnsupportedFont);
            }
        };

        match rect {
            Some(rect) => Ok(self.transforms.outline_box(&glyph_to_device, &rect)),
            None => {
                debug!(font = font.name(), code, "glyph outline not found");
                Err(OutlineMiss::MissingGlyph)
            }
        }
    }

    /// Width of a space in text space, with the fallback chain applied.
    ///
    /// The result is never zero.
    pub fn space_width(&self, font: &dyn FontQuery) -> f64 {
        let factor = if font.glyph_program().is_procedural() {
            font.font_matrix().a
        } else {
            0.001
        };

        let mut width = match font.space_width() {
            Ok(w) => w * factor,
            Err(err) => {
                debug!(font = font.name(), %err, "space width unavailable");
                0.0
            }
        };
        if width == 0.0 {
            width = font.average_width() * factor * AVERAGE_WIDTH_SPACE_RATIO;
        }
        if width == 0.0 || !width.is_finite() {
            width = FALLBACK_SPACE_WIDTH;
        }
        width
    }

    /// Unicode text for `code`, or the no-mapping sentinel.
    pub fn unicode(&self, font: &dyn FontQuery, code: u32) -> (String, bool) {
        match font.to_unicode(code, &self.glyph_list) {
            Some(text) => (text, true),
            None => (NO_UNICODE.to_string(), false),
        }
    }
}

/// Lower edge and height of the advance box in glyph space.
///
/// The box starts at the font box's lower y. Its height is half the font box
/// height, replaced by the cap height when that is nonzero and either
/// smaller or the only metric available.
fn advance_extent(font: &dyn FontQuery) -> (f64, f64) {
    let mut bbox = font.bounding_box();
    // Some producers write a negative 16-bit value as unsigned.
    if bbox.lly < -32768.0 {
        bbox.lly = -(bbox.lly + 65536.0);
    }
    let mut height = bbox.height() / 2.0;
    let cap = font.cap_height();
    if cap != 0.0 && (cap < height || height == 0.0) {
        height = cap;
    }
    (bbox.lly, height)
}
