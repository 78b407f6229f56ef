//! pdflayout-core: Backend-independent layout reconstruction.
//!
//! This crate turns replayed page content into ordered layout records
//! (glyph boxes, path operators, image placements), groups them into text
//! runs and path groups, and serializes the result. It knows nothing about
//! PDF syntax: a [`DocumentModel`] implementation drives it through the
//! [`ContentConsumer`] callbacks.

pub mod builder;
pub mod config;
pub mod consumer;
pub mod document;
pub mod encoding;
pub mod error;
pub mod font;
pub mod geometry;
pub mod glyph_metrics;
pub mod images;
pub mod layout;
pub mod page;
pub mod records;
pub mod serializer;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use builder::{PageRecords, RecordBuilder};
pub use config::{
    DEFAULT_MAX_FORM_DEPTH, ExtractConfig, FieldSelection, OutputFormat, RecordKinds,
};
pub use consumer::{ContentConsumer, GlyphEvent, ImageDraw, ReplayMode};
pub use document::DocumentModel;
pub use encoding::{FontEncoding, GlyphList, NO_UNICODE, StandardEncoding};
pub use error::{ExtractWarning, ExtractWarningCode, LayoutError};
pub use font::{
    DEFAULT_FONT_MATRIX, EncodedOutlines, FontQuery, GlyphProgram, ProceduralGlyphs,
    ScalableOutlines,
};
pub use geometry::{BBox, Matrix, Point, Rect};
pub use glyph_metrics::{GlyphMetricsResolver, OutlineMiss};
pub use images::{ImagePlacementIndex, Placement, PlacementMismatch};
pub use layout::{LayoutGroup, TextRun, group_records};
pub use page::{DocumentSummary, build_page, extract_document, extract_page};
pub use records::{DrawOp, DrawRecord, ImageRecord, Record, RecordBox, RecordBuffer, TextRecord};
pub use serializer::{Serializer, format_number, write_tsv};
pub use transform::{PageContext, PageGeometry, TransformChain};
