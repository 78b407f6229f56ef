//! Rendering-event callbacks driven by a document model.
//!
//! The document model replays a page's content stream and calls into a
//! [`ContentConsumer`] with fully resolved graphics state. All coordinates
//! passed to path callbacks are in device space: PDF user space after the
//! current transformation matrix, bottom-left origin.
//!
//! Every method has a default no-op implementation so consumers subscribe
//! only to what they need.

use crate::error::ExtractWarning;
use crate::font::FontQuery;
use crate::geometry::{Matrix, Point};

/// Which operators a replay reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayMode {
    /// Every callback.
    Full,
    /// Only [`show_image`](ContentConsumer::show_image). Forms are still
    /// expanded so nested image draws are reached.
    ImagesOnly,
}

/// A single glyph being shown.
#[derive(Clone, Copy)]
pub struct GlyphEvent<'a> {
    /// The font in effect.
    pub font: &'a dyn FontQuery,
    /// Character code as read from the string operand.
    pub code: u32,
    /// Text rendering matrix at the glyph origin:
    /// `[Tfs*Th 0 0 Tfs 0 Trise] x Tm x CTM`.
    pub trm: Matrix,
}

impl std::fmt::Debug for GlyphEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphEvent")
            .field("font", &self.font.name())
            .field("code", &self.code)
            .field("trm", &self.trm)
            .finish()
    }
}

/// An image draw (XObject `Do` or inline image).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraw {
    /// Stable per-page identifier of the drawing operator.
    ///
    /// Identical in both replay modes for the same draw.
    pub id: usize,
    /// CTM at the time of the draw; maps the unit square to device space.
    pub ctm: Matrix,
    /// XObject resource name, `None` for inline images.
    pub name: Option<String>,
}

/// Callback set for content stream replay.
pub trait ContentConsumer {
    /// `m`: begin a new subpath.
    fn move_to(&mut self, _p: Point) {}

    /// `l`: straight segment to `p`.
    fn line_to(&mut self, _p: Point) {}

    /// `c`, `v`, `y`: cubic Bezier segment.
    fn curve_to(&mut self, _p1: Point, _p2: Point, _p3: Point) {}

    /// `re`: rectangle, given as its four corners in drawing order.
    fn append_rectangle(&mut self, _corners: [Point; 4]) {}

    /// `h` (and the implicit close of `s`, `b`, `b*`).
    fn close_path(&mut self) {}

    /// `n`: end the path without painting.
    fn end_path(&mut self) {}

    /// `S`, `s`.
    fn stroke_path(&mut self) {}

    /// `f`, `F`, `f*`.
    fn fill_path(&mut self) {}

    /// `B`, `B*`, `b`, `b*`.
    fn fill_and_stroke_path(&mut self) {}

    /// `W`, `W*`.
    fn clip(&mut self) {}

    /// `sh` with the shading resource name.
    fn shading_fill(&mut self, _name: &str) {}

    /// One glyph of a text-showing operator.
    fn show_glyph(&mut self, _glyph: &GlyphEvent<'_>) {}

    /// An image draw.
    fn show_image(&mut self, _image: &ImageDraw) {}

    /// A non-fatal problem found by the document model.
    fn on_warning(&mut self, _warning: ExtractWarning) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractWarningCode;
    use crate::test_support::FakeFont;

    #[derive(Default)]
    struct CollectingConsumer {
        events: Vec<String>,
        warnings: Vec<ExtractWarning>,
    }

    impl ContentConsumer for CollectingConsumer {
        fn move_to(&mut self, p: Point) {
            self.events.push(format!("m {} {}", p.x, p.y));
        }

        fn show_glyph(&mut self, glyph: &GlyphEvent<'_>) {
            self.events
                .push(format!("glyph {} {}", glyph.font.name(), glyph.code));
        }

        fn show_image(&mut self, image: &ImageDraw) {
            self.events.push(format!("image {}", image.id));
        }

        fn on_warning(&mut self, warning: ExtractWarning) {
            self.warnings.push(warning);
        }
    }

    struct NoopConsumer;
    impl ContentConsumer for NoopConsumer {}

    #[test]
    fn noop_consumer_accepts_every_event() {
        let font = FakeFont::helvetica_like();
        let mut c = NoopConsumer;
        c.move_to(Point::new(0.0, 0.0));
        c.line_to(Point::new(1.0, 1.0));
        c.curve_to(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        c.append_rectangle([Point::new(0.0, 0.0); 4]);
        c.close_path();
        c.end_path();
        c.stroke_path();
        c.fill_path();
        c.fill_and_stroke_path();
        c.clip();
        c.shading_fill("Sh1");
        c.show_glyph(&GlyphEvent {
            font: &font,
            code: 65,
            trm: Matrix::identity(),
        });
        c.show_image(&ImageDraw {
            id: 0,
            ctm: Matrix::identity(),
            name: Some("Im0".to_string()),
        });
        c.on_warning(ExtractWarning::with_code(ExtractWarningCode::MissingFont, "F9"));
    }

    #[test]
    fn collecting_consumer_sees_events_in_order() {
        let font = FakeFont::helvetica_like();
        let mut c = CollectingConsumer::default();
        c.move_to(Point::new(1.0, 2.0));
        c.show_glyph(&GlyphEvent {
            font: &font,
            code: 66,
            trm: Matrix::identity(),
        });
        c.show_image(&ImageDraw {
            id: 7,
            ctm: Matrix::identity(),
            name: None,
        });
        c.on_warning(ExtractWarning::with_code(ExtractWarningCode::MissingFont, "F9"));
        assert_eq!(c.events, vec!["m 1 2", "glyph Helvetica 66", "image 7"]);
        assert_eq!(c.warnings.len(), 1);
    }

    #[test]
    fn glyph_event_debug_shows_font_name() {
        let font = FakeFont::helvetica_like();
        let event = GlyphEvent {
            font: &font,
            code: 65,
            trm: Matrix::identity(),
        };
        assert!(format!("{event:?}").contains("Helvetica"));
    }
}
