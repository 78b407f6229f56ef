//! Turns replayed rendering events into layout records.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::ExtractConfig;
use crate::consumer::{ContentConsumer, GlyphEvent, ImageDraw};
use crate::error::{ExtractWarning, ExtractWarningCode, LayoutError};
use crate::geometry::Point;
use crate::glyph_metrics::{GlyphMetricsResolver, OutlineMiss};
use crate::images::{ImagePlacementIndex, PlacementMismatch};
use crate::records::{
    DrawOp, DrawRecord, ImageRecord, Record, RecordBox, RecordBuffer, TextRecord,
};
use crate::transform::PageContext;

/// Records and diagnostics of one finished page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecords {
    /// 1-based page number.
    pub page_number: usize,
    pub buffer: RecordBuffer,
    pub warnings: Vec<ExtractWarning>,
}

/// [`ContentConsumer`] that fills a [`RecordBuffer`] during the main replay.
///
/// Record kinds disabled in the configuration are never built. The first
/// image placement mismatch is kept and turned into an error by
/// [`finish`](RecordBuilder::finish).
pub struct RecordBuilder<'a> {
    ctx: &'a PageContext,
    config: &'a ExtractConfig,
    resolver: GlyphMetricsResolver<'a>,
    placements: ImagePlacementIndex,
    buffer: RecordBuffer,
    warnings: Vec<ExtractWarning>,
    violation: Option<PlacementMismatch>,
    /// `(font, warning tag)` pairs already reported.
    reported: HashSet<(String, &'static str)>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(
        ctx: &'a PageContext,
        config: &'a ExtractConfig,
        placements: ImagePlacementIndex,
    ) -> Self {
        Self {
            ctx,
            config,
            resolver: GlyphMetricsResolver::new(&ctx.transforms),
            placements,
            buffer: RecordBuffer::new(),
            warnings: Vec::new(),
            violation: None,
            reported: HashSet::new(),
        }
    }

    /// Records built so far.
    pub fn buffer(&self) -> &RecordBuffer {
        &self.buffer
    }

    /// Close the page.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ImagePlacement`] when an image draw found no
    /// matching placement or placements were left unconsumed.
    pub fn finish(self) -> Result<PageRecords, LayoutError> {
        let page = self.ctx.page_number;
        let mismatch = match self.violation {
            Some(m) => Some(m),
            None if self.config.kinds.image => self.placements.finish().err(),
            None => None,
        };
        if let Some(m) = mismatch {
            return Err(LayoutError::ImagePlacement {
                page,
                detail: m.to_string(),
            });
        }
        Ok(PageRecords {
            page_number: page,
            buffer: self.buffer,
            warnings: self.warnings,
        })
    }

    fn add_draw(&mut self, op: DrawOp, points: &[Point]) {
        if !self.config.kinds.draw {
            return;
        }
        let h = self.ctx.page_height() as f32;
        let values = points
            .iter()
            .flat_map(|p| [p.x as f32, h - p.y as f32])
            .collect();
        self.buffer.push(Record::Draw(DrawRecord::new(op, values)));
    }

    /// Record a warning once per font and kind.
    fn warn_once(&mut self, code: ExtractWarningCode, font: &str, description: String) {
        let key = (font.to_string(), code.as_str());
        if !self.reported.insert(key) {
            return;
        }
        debug!(page = self.ctx.page_number, font, %description, "degraded glyph record");
        self.warnings.push(
            ExtractWarning::with_code(code, description)
                .on_page(self.ctx.page_number)
                .for_font(font),
        );
    }
}

impl ContentConsumer for RecordBuilder<'_> {
    fn move_to(&mut self, p: Point) {
        self.add_draw(DrawOp::MoveTo, &[p]);
    }

    fn line_to(&mut self, p: Point) {
        self.add_draw(DrawOp::LineTo, &[p]);
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) {
        self.add_draw(DrawOp::CurveTo, &[p1, p2, p3]);
    }

    fn append_rectangle(&mut self, corners: [Point; 4]) {
        self.add_draw(DrawOp::Rectangle, &corners);
    }

    fn stroke_path(&mut self) {
        self.add_draw(DrawOp::StrokePath, &[]);
    }

    fn fill_path(&mut self) {
        self.add_draw(DrawOp::FillPath, &[]);
    }

    fn fill_and_stroke_path(&mut self) {
        self.add_draw(DrawOp::FillStrokePath, &[]);
    }

    fn show_glyph(&mut self, glyph: &GlyphEvent<'_>) {
        if !self.config.kinds.text {
            return;
        }
        let font = glyph.font;
        let advance = self.resolver.advance_box(font, glyph.code, &glyph.trm);

        let outline = match self.resolver.outline_box(font, glyph.code, &glyph.trm) {
            Ok(b) => Some(RecordBox::from_bbox(&b)),
            Err(OutlineMiss::UnsupportedFont) => {
                self.warn_once(
                    ExtractWarningCode::UnsupportedFont,
                    font.name(),
                    format!("no glyph outlines for {} font", font.glyph_program().kind()),
                );
                None
            }
            Err(OutlineMiss::MissingGlyph) => {
                self.warn_once(
                    ExtractWarningCode::MissingGlyph,
                    font.name(),
                    format!("no outline for code {}", glyph.code),
                );
                None
            }
        };

        let (unicode, mapped) = self.resolver.unicode(font, glyph.code);
        if !mapped {
            self.warn_once(
                ExtractWarningCode::EncodingFallback,
                font.name(),
                format!("no Unicode mapping for code {}", glyph.code),
            );
        }

        let space_width = self.resolver.space_width(font) * glyph.trm.scaling_factor_x();

        self.buffer.push(Record::Text(TextRecord {
            unicode,
            font_name: font.name().to_string(),
            code: glyph.code,
            advance: RecordBox::from_bbox(&advance),
            glyph: outline,
            space_width: space_width.abs() as f32,
        }));
    }

    fn show_image(&mut self, image: &ImageDraw) {
        if !self.config.kinds.image {
            return;
        }
        match self.placements.take(image.id) {
            Ok(placement) => self.buffer.push(Record::Image(ImageRecord {
                id: placement.id,
                rect: placement.rect,
            })),
            Err(mismatch) => {
                warn!(page = self.ctx.page_number, %mismatch, "image placement mismatch");
                if self.violation.is_none() {
                    self.violation = Some(mismatch);
                }
            }
        }
    }

    fn on_warning(&mut self, warning: ExtractWarning) {
        debug!(page = self.ctx.page_number, %warning, "document model warning");
        self.warnings.push(warning.on_page(self.ctx.page_number));
    }
}
