//! lopdf-based document model.
//!
//! [`LopdfDocument`] implements the core [`DocumentModel`]: page lookup in
//! page-tree order, inherited page boxes and rotation, and content stream
//! replay through the [`ContentInterpreter`].

use std::path::Path;
use std::sync::LazyLock;

use lopdf::{Dictionary, Object, ObjectId};
use pdflayout_core::{
    ContentConsumer, DEFAULT_MAX_FORM_DEPTH, DocumentModel, LayoutError, Matrix, PageGeometry,
    Rect, ReplayMode,
};
use tracing::{debug, warn};

use crate::error::BackendError;
use crate::interpreter::ContentInterpreter;
use crate::objects::{decode_stream, object_to_f64, rect_from_object, resolve};

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    inner: lopdf::Document,
    /// Page object ids in page-tree order.
    page_ids: Vec<ObjectId>,
    max_form_depth: usize,
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_ids.len())
            .field("max_form_depth", &self.max_form_depth)
            .finish_non_exhaustive()
    }
}

impl LopdfDocument {
    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Io`] if the file cannot be read and
    /// [`BackendError::Parse`] if it is not a readable PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Parse a document held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Parse`] if the bytes are not a readable PDF.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BackendError> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;
        let page_ids: Vec<ObjectId> = inner.get_pages().values().copied().collect();
        debug!(pages = page_ids.len(), "document loaded");
        Ok(Self {
            inner,
            page_ids,
            max_form_depth: DEFAULT_MAX_FORM_DEPTH,
        })
    }

    /// Set the nesting limit for form XObjects.
    pub fn with_max_form_depth(mut self, depth: usize) -> Self {
        self.max_form_depth = depth;
        self
    }

    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &lopdf::Document {
        &self.inner
    }

    fn page_id(&self, index: usize) -> Result<ObjectId, LayoutError> {
        self.page_ids
            .get(index)
            .copied()
            .ok_or(LayoutError::PageOutOfRange {
                index,
                count: self.page_ids.len(),
            })
    }

    fn page_dict(&self, page_id: ObjectId) -> Result<&Dictionary, BackendError> {
        self.inner
            .get_object(page_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| BackendError::Parse(format!("failed to get page dictionary: {e}")))
    }

    /// Look up `key` on the page, walking up through `/Parent` nodes.
    fn inherited(&self, page_id: ObjectId, key: &[u8]) -> Result<Option<&Object>, BackendError> {
        let mut dict = self.page_dict(page_id)?;
        // page trees are shallow; the bound only stops reference cycles
        for _ in 0..64 {
            if let Ok(value) = dict.get(key) {
                return Ok(Some(resolve(&self.inner, value)));
            }
            match dict.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent) => dict = self.page_dict(parent)?,
                Err(_) => return Ok(None),
            }
        }
        Ok(None)
    }

    fn inherited_rect(&self, page_id: ObjectId, key: &[u8]) -> Result<Option<Rect>, BackendError> {
        match self.inherited(page_id, key)? {
            Some(obj) => rect_from_object(&self.inner, obj).map(Some).ok_or_else(|| {
                BackendError::Parse(format!(
                    "/{} is not a four-number array",
                    String::from_utf8_lossy(key)
                ))
            }),
            None => Ok(None),
        }
    }

    fn resources(&self, page_id: ObjectId) -> Result<&Dictionary, BackendError> {
        static EMPTY: LazyLock<Dictionary> = LazyLock::new(Dictionary::new);
        match self.inherited(page_id, b"Resources")? {
            Some(obj) => obj
                .as_dict()
                .map_err(|_| BackendError::Parse("/Resources is not a dictionary".to_string())),
            None => Ok(&EMPTY),
        }
    }

    /// The page's content streams, decoded and joined with a space.
    fn content(&self, page_id: ObjectId) -> Result<Vec<u8>, BackendError> {
        let page = self.page_dict(page_id)?;
        let Ok(contents) = page.get(b"Contents") else {
            return Ok(Vec::new());
        };
        let streams: Vec<&Object> = match resolve(&self.inner, contents) {
            Object::Array(items) => items.iter().map(|item| resolve(&self.inner, item)).collect(),
            other => vec![other],
        };
        let mut content = Vec::new();
        for obj in streams {
            let stream = obj
                .as_stream()
                .map_err(|e| BackendError::Parse(format!("/Contents is not a stream: {e}")))?;
            if !content.is_empty() {
                content.push(b' ');
            }
            content.extend_from_slice(&decode_stream(stream)?);
        }
        Ok(content)
    }
}

impl DocumentModel for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_geometry(&self, index: usize) -> Result<PageGeometry, LayoutError> {
        let page_id = self.page_id(index)?;
        let media_box = match self.inherited_rect(page_id, b"MediaBox")? {
            Some(rect) => rect.normalized(),
            None => {
                warn!(page = index + 1, "no MediaBox on page or ancestors, assuming US Letter");
                Rect::new(0.0, 0.0, 612.0, 792.0)
            }
        };
        let crop_box = self
            .inherited_rect(page_id, b"CropBox")?
            .and_then(|crop| crop.normalized().intersect(&media_box));
        let rotation = match self.inherited(page_id, b"Rotate")? {
            Some(obj) => object_to_f64(obj)? as i32,
            None => 0,
        };
        Ok(PageGeometry::new(media_box, crop_box, rotation))
    }

    fn replay(
        &self,
        index: usize,
        mode: ReplayMode,
        consumer: &mut dyn ContentConsumer,
    ) -> Result<(), LayoutError> {
        let page_id = self.page_id(index)?;
        let content = self.content(page_id)?;
        let resources = self.resources(page_id)?;
        let mut interpreter =
            ContentInterpreter::new(&self.inner, mode, self.max_form_depth, Matrix::identity());
        interpreter.run(&content, resources, consumer, 0)?;
        debug!(
            page = index + 1,
            ?mode,
            images = interpreter.image_count(),
            "content replayed"
        );
        Ok(())
    }
}
