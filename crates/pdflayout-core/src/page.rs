//! Page and document orchestration.
//!
//! A page is processed in two replays: an image-only pre-pass that collects
//! placements (skipped when image records are disabled), then the full
//! replay that builds records. The finished page is grouped and written to
//! the sink before the next page starts.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::builder::{PageRecords, RecordBuilder};
use crate::config::ExtractConfig;
use crate::consumer::ReplayMode;
use crate::document::DocumentModel;
use crate::error::{ExtractWarning, LayoutError};
use crate::images::ImagePlacementIndex;
use crate::serializer::Serializer;
use crate::transform::PageContext;

/// Run both replays of page `index` (0-based) and return its records.
///
/// # Errors
///
/// Propagates document model failures, and returns
/// [`LayoutError::ImagePlacement`] when the two replays disagree about
/// image draws.
pub fn build_page(
    doc: &dyn DocumentModel,
    index: usize,
    config: &ExtractConfig,
) -> Result<PageRecords, LayoutError> {
    let count = doc.page_count();
    if index >= count {
        return Err(LayoutError::PageOutOfRange { index, count });
    }

    let geometry = doc.page_geometry(index)?;
    let ctx = PageContext::new(index + 1, geometry);

    let placements = if config.kinds.image {
        ImagePlacementIndex::build(doc, index, ctx.page_height())?
    } else {
        ImagePlacementIndex::new(ctx.page_height())
    };
    debug!(
        page = ctx.page_number,
        rotation = geometry.rotation,
        placements = placements.len(),
        "replaying page"
    );

    let mut builder = RecordBuilder::new(&ctx, config, placements);
    doc.replay(index, ReplayMode::Full, &mut builder)?;
    builder.finish()
}

/// Build page `index` and write it to `sink` in the configured format.
///
/// # Errors
///
/// See [`build_page`]. Sink failures are returned as
/// [`LayoutError::IoError`].
pub fn extract_page(
    doc: &dyn DocumentModel,
    index: usize,
    config: &ExtractConfig,
    sink: &mut dyn Write,
) -> Result<PageRecords, LayoutError> {
    let page = build_page(doc, index, config)?;
    Serializer::new(config).write_page(&page, sink)?;
    Ok(page)
}

/// Totals for one processed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSummary {
    pub pages: usize,
    pub records: usize,
    pub warnings: Vec<ExtractWarning>,
}

/// Process every page in order, writing each to `sink`.
///
/// Stops at the first failing page.
///
/// # Errors
///
/// Returns the first page error.
pub fn extract_document(
    doc: &dyn DocumentModel,
    config: &ExtractConfig,
    sink: &mut dyn Write,
) -> Result<DocumentSummary, LayoutError> {
    let mut summary = DocumentSummary::default();
    for index in 0..doc.page_count() {
        let page = extract_page(doc, index, config, sink).inspect_err(|e| {
            warn!(page = index + 1, error = %e, "page failed");
        })?;
        summary.pages += 1;
        summary.records += page.buffer.len();
        summary.warnings.extend(page.warnings);
    }
    sink.flush()?;
    info!(
        pages = summary.pages,
        records = summary.records,
        warnings = summary.warnings.len(),
        "document extracted"
    );
    Ok(summary)
}
