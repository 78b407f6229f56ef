//! The document model interface.
//!
//! A document model owns parsing and content-stream decoding. The layout
//! pipeline only asks it for page geometry and for replays of a page.

use crate::consumer::{ContentConsumer, ReplayMode};
use crate::error::LayoutError;
use crate::transform::PageGeometry;

/// Narrow view of a parsed document.
///
/// # Usage
///
/// ```ignore
/// let count = doc.page_count();
/// let geometry = doc.page_geometry(0)?;
/// doc.replay(0, ReplayMode::Full, &mut consumer)?;
/// ```
pub trait DocumentModel {
    /// Number of pages in document order.
    fn page_count(&self) -> usize;

    /// Rotation, media box and crop box of a page (0-based index).
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page tree is
    /// malformed.
    fn page_geometry(&self, index: usize) -> Result<PageGeometry, LayoutError>;

    /// Replay a page's content stream into `consumer`.
    ///
    /// Form XObjects are expanded recursively under the invoking graphics
    /// state. Image draws carry identifiers that are identical across
    /// [`ReplayMode`]s.
    ///
    /// # Errors
    ///
    /// Returns an error if the content stream cannot be decoded or
    /// interpreted.
    fn replay(
        &self,
        index: usize,
        mode: ReplayMode,
        consumer: &mut dyn ContentConsumer,
    ) -> Result<(), LayoutError>;
}
