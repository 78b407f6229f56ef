//! Typed layout records and the per-page record buffer.
//!
//! Record coordinates are stored as `f32`. Run grouping compares them for
//! exact equality, so the precision is part of the behaviour.

use crate::geometry::BBox;

/// A page-space rectangle `(x, y, w, h)` with top-down `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RecordBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_bbox(b: &BBox) -> Self {
        Self {
            x: b.x0 as f32,
            y: b.top as f32,
            w: b.width() as f32,
            h: b.height() as f32,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.w
    }
}

/// One shown glyph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRecord {
    /// Decoded text, or the no-mapping sentinel.
    pub unicode: String,
    /// Font name as reported by the font.
    pub font_name: String,
    /// Character code shown.
    pub code: u32,
    /// Advance box `(bx, by, bw, bh)`.
    pub advance: RecordBox,
    /// Outline box `(gx, gy, gw, gh)`, absent when no outline was found.
    pub glyph: Option<RecordBox>,
    /// Width of a space in page units at this glyph's size.
    pub space_width: f32,
}

/// Path operators that produce records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOp {
    MoveTo,
    LineTo,
    CurveTo,
    Rectangle,
    StrokePath,
    FillPath,
    FillStrokePath,
}

impl DrawOp {
    /// Name written to the output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawOp::MoveTo => "MOVE_TO",
            DrawOp::LineTo => "LINE_TO",
            DrawOp::CurveTo => "CURVE_TO",
            DrawOp::Rectangle => "RECTANGLE",
            DrawOp::StrokePath => "STROKE_PATH",
            DrawOp::FillPath => "FILL_PATH",
            DrawOp::FillStrokePath => "FILL_STROKE_PATH",
        }
    }

    /// Paint operators terminate a path group.
    pub fn is_paint(&self) -> bool {
        self.as_str().ends_with("_PATH")
    }
}

impl std::fmt::Display for DrawOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path construction or paint operator with flat page-space coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawRecord {
    pub op: DrawOp,
    pub values: Vec<f32>,
}

impl DrawRecord {
    pub fn new(op: DrawOp, values: Vec<f32>) -> Self {
        Self { op, values }
    }
}

/// A placed image.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRecord {
    /// Identifier of the drawing operator.
    pub id: usize,
    pub rect: RecordBox,
}

/// Any layout record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Record {
    Text(TextRecord),
    Draw(DrawRecord),
    Image(ImageRecord),
}

/// Ordered, append-only record sequence of one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBuffer {
    records: Vec<Record>,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordBuffer {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordBuffer {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
