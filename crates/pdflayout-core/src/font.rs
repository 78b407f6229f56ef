//! Font capability interface consumed by the glyph metrics resolver.
//!
//! The document model resolves a font resource into something implementing
//! [`FontQuery`]. Outline access is split by font variant through
//! [`GlyphProgram`], so the resolver dispatches on a value instead of probing
//! concrete font types.

use crate::encoding::GlyphList;
use crate::error::LayoutError;
use crate::geometry::{Matrix, Rect};

/// Glyph-space to text-space matrix of every font except Type3.
pub const DEFAULT_FONT_MATRIX: Matrix = Matrix {
    a: 0.001,
    b: 0.0,
    c: 0.0,
    d: 0.001,
    e: 0.0,
    f: 0.0,
};

/// Metric and mapping queries answered by a resolved font.
///
/// Widths and boxes are in glyph space: thousandths of an em for ordinary
/// fonts, the font's own units for Type3 fonts (scaled by
/// [`font_matrix`](FontQuery::font_matrix)).
pub trait FontQuery {
    /// Font name used in output (`/BaseFont`, or the resource name).
    fn name(&self) -> &str;

    /// Advance width of `code` in glyph space.
    fn advance_width(&self, code: u32) -> f64;

    /// The font-level bounding box (`/FontBBox`).
    fn bounding_box(&self) -> Rect;

    /// `/CapHeight` from the font descriptor, `0.0` when absent.
    fn cap_height(&self) -> f64;

    /// Glyph-space to text-space matrix.
    fn font_matrix(&self) -> Matrix {
        DEFAULT_FONT_MATRIX
    }

    /// Width of the space glyph in glyph space.
    ///
    /// # Errors
    ///
    /// Returns an error when the font has no usable space metric. Callers
    /// treat this as "unknown" and fall back to other estimates.
    fn space_width(&self) -> Result<f64, LayoutError>;

    /// Average glyph width (`/AvgWidth`, or the mean of the width table).
    fn average_width(&self) -> f64;

    /// Unicode text for `code`, consulting `glyph_list` for named glyphs.
    fn to_unicode(&self, code: u32, glyph_list: &GlyphList) -> Option<String>;

    /// How outlines for this font are obtained.
    fn glyph_program(&self) -> GlyphProgram<'_>;
}

/// Outline capability of a font, one variant per font family.
#[derive(Clone, Copy)]
pub enum GlyphProgram<'a> {
    /// Each glyph is a content stream (Type3).
    Procedural(&'a dyn ProceduralGlyphs),
    /// Outlines addressed directly by code (TrueType, CIDFontType2, OpenType).
    Scalable(&'a dyn ScalableOutlines),
    /// Outlines addressed by glyph name through the font's encoding.
    Encoded(&'a dyn EncodedOutlines),
    /// No outline data is available.
    Unsupported,
}

impl GlyphProgram<'_> {
    pub fn is_procedural(&self) -> bool {
        matches!(self, GlyphProgram::Procedural(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GlyphProgram::Procedural(_) => "procedural",
            GlyphProgram::Scalable(_) => "scalable",
            GlyphProgram::Encoded(_) => "encoded",
            GlyphProgram::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Debug for GlyphProgram<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

/// Type3 glyph procedures.
pub trait ProceduralGlyphs {
    /// The `d1` bounding box of the procedure for `code`.
    ///
    /// `None` when the font has no procedure for the code or the procedure
    /// declares no bounding box.
    fn glyph_bbox(&self, code: u32) -> Option<Rect>;
}

/// Fonts whose outlines are looked up by character code.
pub trait ScalableOutlines {
    /// Bounds of the outline for `code`, in font design units.
    fn outline_bounds(&self, code: u32) -> Option<Rect>;

    /// Design units per em, when they are not already 1000.
    fn units_per_em(&self) -> Option<f64>;
}

/// Fonts whose outlines are looked up by glyph name.
pub trait EncodedOutlines {
    /// Glyph name the font's encoding assigns to `code`.
    fn glyph_name(&self, code: u32) -> Option<String>;

    /// Bounds of the named outline in thousandths of an em.
    fn outline_bounds_by_name(&self, name: &str) -> Option<Rect>;
}
