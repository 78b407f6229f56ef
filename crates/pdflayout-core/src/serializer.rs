//! Output writers for grouped page records.
//!
//! The tab-separated format writes one record per line and a blank line
//! after each text run, each path group, and at every run break:
//!
//! ```text
//! <page>\tTEXT\t<unicode>[\t<bx>\t<by>\t<bw>\t<bh>][\t<gx>\t<gy>\t<gw>\t<gh>][\t<fontName>]
//! <page>\tDRAW\t<op>[\t<v>...]
//! <page>\t<x>\t<y>\t<w>\t<h>
//! ```
//!
//! With the `serde` feature a page can also be written as a single JSON
//! object per line, grouped the same way.

use std::io::Write;

use crate::builder::PageRecords;
use crate::config::{ExtractConfig, FieldSelection, OutputFormat};
use crate::error::LayoutError;
use crate::layout::{LayoutGroup, TextRun, group_records};
use crate::records::{DrawRecord, ImageRecord, RecordBox, TextRecord};

/// Format a record coordinate.
///
/// Values with magnitude in `[1e-3, 1e7)` and zero use the shortest decimal
/// that round-trips through `f32`, always with a fractional part (`72.0`).
/// Other magnitudes use scientific notation with an upper-case exponent
/// marker (`1.5E-5`, `1.0E7`).
pub fn format_number(v: f32) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mag = v.abs();
    if v == 0.0 || (1e-3..1e7).contains(&mag) {
        return format!("{v:?}");
    }
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => sci,
    }
}

/// Writes finished pages in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    config: &'a ExtractConfig,
}

impl<'a> Serializer<'a> {
    pub fn new(config: &'a ExtractConfig) -> Self {
        Self { config }
    }

    /// Group and write one page.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::IoError`] when the sink fails, or
    /// [`LayoutError::Other`] when JSON output is requested without the
    /// `serde` feature.
    pub fn write_page(&self, page: &PageRecords, out: &mut dyn Write) -> Result<(), LayoutError> {
        match self.config.format {
            OutputFormat::Tsv => {
                write_tsv(page, &self.config.fields, out)?;
                Ok(())
            }
            OutputFormat::Json => self.write_json(page, out),
        }
    }

    #[cfg(feature = "serde")]
    fn write_json(&self, page: &PageRecords, out: &mut dyn Write) -> Result<(), LayoutError> {
        let value = json::page_value(page, &self.config.fields);
        let line = serde_json::to_string(&value)
            .map_err(|e| LayoutError::Other(format!("JSON encoding failed: {e}")))?;
        writeln!(out, "{line}")?;
        Ok(())
    }

    #[cfg(not(feature = "serde"))]
    fn write_json(&self, _page: &PageRecords, _out: &mut dyn Write) -> Result<(), LayoutError> {
        Err(LayoutError::Other(
            "JSON output requires the `serde` feature".to_string(),
        ))
    }
}

/// Write one page in the tab-separated format.
pub fn write_tsv(
    page: &PageRecords,
    fields: &FieldSelection,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let n = page.page_number;
    for group in group_records(&page.buffer) {
        match group {
            LayoutGroup::Text(run) => write_run(n, &run, fields, out)?,
            LayoutGroup::Path(path) => {
                for draw in path {
                    write_draw(n, draw, out)?;
                }
                writeln!(out)?;
            }
            LayoutGroup::Image(image) => write_image(n, image, out)?,
        }
    }
    Ok(())
}

fn write_run(
    page: usize,
    run: &TextRun<'_>,
    fields: &FieldSelection,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    for (record, brk) in run.records.iter().zip(&run.breaks) {
        if *brk {
            writeln!(out)?;
        }
        write_text(page, record, fields, out)?;
    }
    writeln!(out)
}

fn write_text(
    page: usize,
    record: &TextRecord,
    fields: &FieldSelection,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    write!(out, "{page}\tTEXT\t{}", record.unicode)?;
    if fields.bounding {
        write_box(&record.advance, out)?;
    }
    if fields.glyph {
        match &record.glyph {
            Some(b) => write_box(b, out)?,
            // keep the column count fixed
            None => out.write_all(b"\t\t\t\t")?,
        }
    }
    if fields.font_name {
        write!(out, "\t{}", record.font_name)?;
    }
    writeln!(out)
}

fn write_box(b: &RecordBox, out: &mut dyn Write) -> std::io::Result<()> {
    write!(
        out,
        "\t{}\t{}\t{}\t{}",
        format_number(b.x),
        format_number(b.y),
        format_number(b.w),
        format_number(b.h)
    )
}

fn write_draw(page: usize, draw: &DrawRecord, out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "{page}\tDRAW\t{}", draw.op)?;
    for v in &draw.values {
        write!(out, "\t{}", format_number(*v))?;
    }
    writeln!(out)
}

fn write_image(page: usize, image: &ImageRecord, out: &mut dyn Write) -> std::io::Result<()> {
    let r = &image.rect;
    writeln!(
        out,
        "{page}\t{}\t{}\t{}\t{}",
        format_number(r.x),
        format_number(r.y),
        format_number(r.w),
        format_number(r.h)
    )
}

#[cfg(feature = "serde")]
mod json {
    use serde_json::{Value, json};

    use super::format_number;
    use crate::builder::PageRecords;
    use crate::config::FieldSelection;
    use crate::layout::{LayoutGroup, group_records};
    use crate::records::{RecordBox, TextRecord};

    // Go through the decimal form so 0.1f32 is written as 0.1.
    fn number(v: f32) -> Value {
        format_number(v)
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }

    fn rect(b: &RecordBox) -> Value {
        json!([number(b.x), number(b.y), number(b.w), number(b.h)])
    }

    fn text(record: &TextRecord, fields: &FieldSelection) -> Value {
        let mut obj = json!({
            "unicode": record.unicode,
            "code": record.code,
            "space_width": number(record.space_width),
        });
        if fields.bounding {
            obj["advance"] = rect(&record.advance);
        }
        if fields.glyph {
            obj["glyph"] = record.glyph.as_ref().map_or(Value::Null, rect);
        }
        if fields.font_name {
            obj["font_name"] = json!(record.font_name);
        }
        obj
    }

    pub(super) fn page_value(page: &PageRecords, fields: &FieldSelection) -> Value {
        let groups: Vec<Value> = group_records(&page.buffer)
            .into_iter()
            .map(|group| match group {
                LayoutGroup::Text(run) => {
                    let segments: Vec<Value> = run
                        .segments()
                        .into_iter()
                        .map(|seg| Value::Array(seg.iter().map(|r| text(r, fields)).collect()))
                        .collect();
                    json!({ "type": "text", "segments": segments })
                }
                LayoutGroup::Path(path) => {
                    let ops: Vec<Value> = path
                        .iter()
                        .map(|d| {
                            json!({
                                "op": d.op.as_str(),
                                "values": d.values.iter().map(|v| number(*v)).collect::<Vec<_>>(),
                            })
                        })
                        .collect();
                    json!({ "type": "path", "ops": ops })
                }
                LayoutGroup::Image(image) => json!({
                    "type": "image",
                    "id": image.id,
                    "rect": rect(&image.rect),
                }),
            })
            .collect();

        let warnings: Vec<String> = page.warnings.iter().map(|w| w.to_string()).collect();
        json!({
            "page": page.page_number,
            "groups": groups,
            "warnings": warnings,
        })
    }
}
