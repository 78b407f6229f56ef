//! Grouping of a page's records into text runs, path groups and images.
//!
//! The buffer is walked once in order; nothing is sorted.
//!
//! - A text run is a maximal stretch of text records whose advance boxes
//!   share the first record's `y` and `h` exactly.
//! - A path group collects draw records up to and including the first paint
//!   operator. A group cut short by a non-draw record or by the end of the
//!   buffer is discarded.
//! - Each image record stands alone.

use crate::records::{DrawRecord, ImageRecord, Record, RecordBuffer, TextRecord};

/// Horizontal gap, as a share of the run's mean advance width, beyond which
/// a break is inserted between two glyphs of the same run.
pub const RUN_BREAK_GAP_RATIO: f32 = 0.3;

/// A run of text records on the same line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun<'a> {
    pub records: Vec<&'a TextRecord>,
    /// `breaks[i]` is true when a break precedes `records[i]`.
    pub breaks: Vec<bool>,
    pub mean_advance: f32,
}

impl<'a> TextRun<'a> {
    /// Compute break positions for `records` (must be non-empty to have any).
    pub fn new(records: Vec<&'a TextRecord>) -> Self {
        let mean_advance = mean_advance_width(&records);
        let mut breaks = Vec::with_capacity(records.len());
        if let Some(first) = records.first() {
            let mut prev = *first;
            for curr in &records {
                let expected_x = prev.advance.x + prev.advance.w + mean_advance * RUN_BREAK_GAP_RATIO;
                breaks.push(curr.advance.x > expected_x);
                prev = curr;
            }
        }
        Self {
            records,
            breaks,
            mean_advance,
        }
    }

    /// Split the run at its breaks.
    pub fn segments(&self) -> Vec<&[&'a TextRecord]> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, brk) in self.breaks.iter().enumerate() {
            if *brk && i > start {
                out.push(&self.records[start..i]);
                start = i;
            }
        }
        if start < self.records.len() {
            out.push(&self.records[start..]);
        }
        out
    }
}

fn mean_advance_width(records: &[&TextRecord]) -> f32 {
    if records.is_empty() {
        return 0.0;
    }
    let mut total = 0.0f32;
    for r in records {
        total += r.advance.w;
    }
    total / records.len() as f32
}

/// One output block.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutGroup<'a> {
    Text(TextRun<'a>),
    Path(Vec<&'a DrawRecord>),
    Image(&'a ImageRecord),
}

/// Partition `buffer` into groups, preserving record order.
pub fn group_records(buffer: &RecordBuffer) -> Vec<LayoutGroup<'_>> {
    let records = buffer.records();
    let mut groups = Vec::new();
    let mut i = 0;

    while i < records.len() {
        match &records[i] {
            Record::Text(first) => {
                let mut run = Vec::new();
                while let Some(Record::Text(t)) = records.get(i) {
                    if t.advance.y != first.advance.y || t.advance.h != first.advance.h {
                        break;
                    }
                    run.push(t);
                    i += 1;
                }
                groups.push(LayoutGroup::Text(TextRun::new(run)));
            }
            Record::Draw(_) => {
                let mut path = Vec::new();
                while let Some(Record::Draw(d)) = records.get(i) {
                    path.push(d);
                    i += 1;
                    if d.op.is_paint() {
                        groups.push(LayoutGroup::Path(std::mem::take(&mut path)));
                        break;
                    }
                }
            }
            Record::Image(image) => {
                groups.push(LayoutGroup::Image(image));
                i += 1;
            }
        }
    }

    groups
}
