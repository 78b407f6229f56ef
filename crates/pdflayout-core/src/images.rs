//! Image placement pre-pass.
//!
//! An `ImagesOnly` replay records the page-space rectangle of every image
//! draw in encounter order. The main replay then consumes one placement per
//! image draw. Each placement carries the drawing operator's identifier, and
//! a draw that finds no placement, a different identifier, or placements
//! left over at the end of the page is reported as a [`PlacementMismatch`].

use std::collections::VecDeque;
use std::fmt;

use crate::consumer::{ContentConsumer, ImageDraw, ReplayMode};
use crate::document::DocumentModel;
use crate::error::LayoutError;
use crate::geometry::Matrix;
use crate::records::RecordBox;

/// Page-space rectangle of one image draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub id: usize,
    pub rect: RecordBox,
}

/// Disagreement between the pre-pass and the main replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementMismatch {
    /// An image draw arrived after every placement was consumed.
    Exhausted { id: usize },
    /// The next placement belongs to a different operator.
    IdMismatch { expected: usize, found: usize },
    /// The main replay drew fewer images than the pre-pass saw.
    Leftover { count: usize },
}

impl fmt::Display for PlacementMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementMismatch::Exhausted { id } => {
                write!(f, "no precomputed placement left for image draw #{id}")
            }
            PlacementMismatch::IdMismatch { expected, found } => write!(
                f,
                "image draw #{found} does not match next placement #{expected}"
            ),
            PlacementMismatch::Leftover { count } => {
                write!(f, "{count} precomputed placement(s) never drawn")
            }
        }
    }
}

/// Rectangle covered by the unit square under `ctm`.
///
/// Width and height are the matrix scale factors, `x` the horizontal
/// translation, and `y` measured down from the top of a page of height
/// `page_height`.
pub fn placement_rect(ctm: &Matrix, page_height: f64) -> RecordBox {
    let w = ctm.scaling_factor_x();
    let h = ctm.scaling_factor_y();
    let x = ctm.e;
    let y = page_height - ctm.f - h;
    RecordBox::new(x as f32, y as f32, w as f32, h as f32)
}

/// Ordered queue of image placements for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePlacementIndex {
    page_height: f64,
    queue: VecDeque<Placement>,
}

impl ImagePlacementIndex {
    pub fn new(page_height: f64) -> Self {
        Self {
            page_height,
            queue: VecDeque::new(),
        }
    }

    /// Run the image-only replay of page `index` and collect its placements.
    ///
    /// # Errors
    ///
    /// Propagates replay failures from the document model.
    pub fn build(
        doc: &dyn DocumentModel,
        index: usize,
        page_height: f64,
    ) -> Result<Self, LayoutError> {
        let mut placements = Self::new(page_height);
        doc.replay(index, ReplayMode::ImagesOnly, &mut placements)?;
        Ok(placements)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Append a placement computed from an image draw.
    pub fn register(&mut self, draw: &ImageDraw) {
        self.queue.push_back(Placement {
            id: draw.id,
            rect: placement_rect(&draw.ctm, self.page_height),
        });
    }

    /// Dequeue the placement for the image draw `id`.
    ///
    /// # Errors
    ///
    /// Fails when the queue is empty or its head belongs to another draw.
    /// The head is left in place on a mismatch.
    pub fn take(&mut self, id: usize) -> Result<Placement, PlacementMismatch> {
        match self.queue.front() {
            None => Err(PlacementMismatch::Exhausted { id }),
            Some(next) if next.id != id => Err(PlacementMismatch::IdMismatch {
                expected: next.id,
                found: id,
            }),
            Some(_) => self
                .queue
                .pop_front()
                .ok_or(PlacementMismatch::Exhausted { id }),
        }
    }

    /// Check that every placement was consumed.
    ///
    /// # Errors
    ///
    /// Reports how many placements remain.
    pub fn finish(&self) -> Result<(), PlacementMismatch> {
        if self.queue.is_empty() {
            Ok(())
        } else {
            Err(PlacementMismatch::Leftover {
                count: self.queue.len(),
            })
        }
    }
}

impl ContentConsumer for ImagePlacementIndex {
    fn show_image(&mut self, image: &ImageDraw) {
        self.register(image);
    }
}
