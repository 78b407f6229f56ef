//! In-memory fonts and document models for unit tests.

use crate::consumer::{ContentConsumer, GlyphEvent, ImageDraw, ReplayMode};
use crate::document::DocumentModel;
use crate::encoding::{GlyphList, StandardEncoding};
use crate::error::LayoutError;
use crate::font::{
    DEFAULT_FONT_MATRIX, EncodedOutlines, FontQuery, GlyphProgram, ProceduralGlyphs,
    ScalableOutlines,
};
use crate::geometry::{Matrix, Point, Rect};
use crate::transform::PageGeometry;

pub(crate) enum FakeOutlines {
    Scalable { bounds: Rect, upem: f64 },
    Encoded { name: String, bounds: Rect },
    Procedural { glyphs: Vec<(u32, Rect)> },
    None,
}

impl ScalableOutlines for FakeOutlines {
    fn outline_bounds(&self, _code: u32) -> Option<Rect> {
        match self {
            FakeOutlines::Scalable { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    fn units_per_em(&self) -> Option<f64> {
        match self {
            FakeOutlines::Scalable { upem, .. } => Some(*upem),
            _ => None,
        }
    }
}

impl EncodedOutlines for FakeOutlines {
    fn glyph_name(&self, code: u32) -> Option<String> {
        let byte = u8::try_from(code).ok()?;
        StandardEncoding::Standard.glyph_name(byte).map(str::to_string)
    }

    fn outline_bounds_by_name(&self, wanted: &str) -> Option<Rect> {
        match self {
            FakeOutlines::Encoded { name, bounds } if name == wanted => Some(*bounds),
            _ => None,
        }
    }
}

impl ProceduralGlyphs for FakeOutlines {
    fn glyph_bbox(&self, code: u32) -> Option<Rect> {
        match self {
            FakeOutlines::Procedural { glyphs } => {
                glyphs.iter().find(|(c, _)| *c == code).map(|(_, r)| *r)
            }
            _ => None,
        }
    }
}

pub(crate) struct FakeFont {
    pub name: String,
    pub width: f64,
    pub bbox: Rect,
    pub cap_height: f64,
    pub matrix: Matrix,
    pub space: Option<f64>,
    pub average: f64,
    pub outlines: FakeOutlines,
}

impl FakeFont {
    pub fn helvetica_like() -> Self {
        Self {
            name: "Helvetica".to_string(),
            width: 667.0,
            bbox: Rect::new(0.0, -200.0, 1000.0, 800.0),
            cap_height: 450.0,
            matrix: DEFAULT_FONT_MATRIX,
            space: Some(278.0),
            average: 500.0,
            outlines: FakeOutlines::Encoded {
                name: "A".to_string(),
                bounds: Rect::new(0.0, 0.0, 667.0, 718.0),
            },
        }
    }

    pub fn type3() -> Self {
        Self {
            name: "T3".to_string(),
            width: 50.0,
            bbox: Rect::new(0.0, 0.0, 50.0, 100.0),
            cap_height: 0.0,
            matrix: Matrix::scale(0.01, 0.01),
            space: Some(40.0),
            average: 0.0,
            outlines: FakeOutlines::Procedural {
                glyphs: vec![(1, Rect::new(-10.0, -10.0, 60.0, 120.0))],
            },
        }
    }
}

impl FontQuery for FakeFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn advance_width(&self, _code: u32) -> f64 {
        self.width
    }

    fn bounding_box(&self) -> Rect {
        self.bbox
    }

    fn cap_height(&self) -> f64 {
        self.cap_height
    }

    fn font_matrix(&self) -> Matrix {
        self.matrix
    }

    fn space_width(&self) -> Result<f64, LayoutError> {
        self.space
            .ok_or_else(|| LayoutError::FontError("no space glyph".to_string()))
    }

    fn average_width(&self) -> f64 {
        self.average
    }

    fn to_unicode(&self, code: u32, glyph_list: &GlyphList) -> Option<String> {
        let byte = u8::try_from(code).ok()?;
        let name = StandardEncoding::Standard.glyph_name(byte)?;
        glyph_list.to_unicode(name)
    }

    fn glyph_program(&self) -> GlyphProgram<'_> {
        match self.outlines {
            FakeOutlines::Scalable { .. } => GlyphProgram::Scalable(&self.outlines),
            FakeOutlines::Encoded { .. } => GlyphProgram::Encoded(&self.outlines),
            FakeOutlines::Procedural { .. } => GlyphProgram::Procedural(&self.outlines),
            FakeOutlines::None => GlyphProgram::Unsupported,
        }
    }
}

/// One scripted content event.
pub(crate) enum Script {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    Stroke,
    Fill,
    Clip,
    Shading,
    /// Glyph code shown with a text rendering matrix.
    Glyph(u32, Matrix),
    /// Image with operator id and CTM; `main: false` marks a draw only the
    /// pre-pass sees, as a diverging backend would.
    Image { id: usize, ctm: Matrix, main: bool },
}

/// A one-font document whose pages replay fixed scripts.
pub(crate) struct ScriptedDocument {
    pub font: FakeFont,
    pub pages: Vec<(PageGeometry, Vec<Script>)>,
}

impl ScriptedDocument {
    pub fn single_page(script: Vec<Script>) -> Self {
        let page = Rect::new(0.0, 0.0, 612.0, 792.0);
        Self {
            font: FakeFont::helvetica_like(),
            pages: vec![(PageGeometry::new(page, None, 0), script)],
        }
    }
}

impl DocumentModel for ScriptedDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_geometry(&self, index: usize) -> Result<PageGeometry, LayoutError> {
        self.pages
            .get(index)
            .map(|(geo, _)| *geo)
            .ok_or(LayoutError::PageOutOfRange {
                index,
                count: self.pages.len(),
            })
    }

    fn replay(
        &self,
        index: usize,
        mode: ReplayMode,
        consumer: &mut dyn ContentConsumer,
    ) -> Result<(), LayoutError> {
        let (_, script) = self.pages.get(index).ok_or(LayoutError::PageOutOfRange {
            index,
            count: self.pages.len(),
        })?;
        for step in script {
            match (step, mode) {
                (Script::Image { id, ctm, main }, _) => {
                    if mode == ReplayMode::ImagesOnly || *main {
                        consumer.show_image(&ImageDraw {
                            id: *id,
                            ctm: *ctm,
                            name: None,
                        });
                    }
                }
                (_, ReplayMode::ImagesOnly) => {}
                (Script::MoveTo(x, y), _) => consumer.move_to(Point::new(*x, *y)),
                (Script::LineTo(x, y), _) => consumer.line_to(Point::new(*x, *y)),
                (Script::Rect(x, y, w, h), _) => consumer.append_rectangle([
                    Point::new(*x, *y),
                    Point::new(x + w, *y),
                    Point::new(x + w, y + h),
                    Point::new(*x, y + h),
                ]),
                (Script::Stroke, _) => consumer.stroke_path(),
                (Script::Fill, _) => consumer.fill_path(),
                (Script::Clip, _) => consumer.clip(),
                (Script::Shading, _) => consumer.shading_fill("Sh0"),
                (Script::Glyph(code, trm), _) => consumer.show_glyph(&GlyphEvent {
                    font: &self.font,
                    code: *code,
                    trm: *trm,
                }),
            }
        }
        Ok(())
    }
}
