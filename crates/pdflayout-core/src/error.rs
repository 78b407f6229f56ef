//! Error and warning types for pdflayout-rs.
//!
//! Provides [`LayoutError`] for failures that abort a page or document and
//! [`ExtractWarning`] for non-fatal issues that degrade a single record.

use std::fmt;

/// Fatal error types for layout extraction.
///
/// A `LayoutError` aborts the page (and with it the document) being
/// processed. Batch callers report it per document and move on.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading a document or writing records.
    IoError(String),
    /// Error resolving font information.
    FontError(String),
    /// Error during content stream interpretation.
    InterpreterError(String),
    /// The image pre-pass and the main replay disagreed about image draws.
    ImagePlacement {
        /// 1-based page number.
        page: usize,
        /// What went wrong.
        detail: String,
    },
    /// The requested page does not exist.
    PageOutOfRange {
        /// 0-based index that was requested.
        index: usize,
        /// Number of pages in the document.
        count: usize,
    },
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ParseError(msg) => write!(f, "parse error: {msg}"),
            LayoutError::IoError(msg) => write!(f, "I/O error: {msg}"),
            LayoutError::FontError(msg) => write!(f, "font error: {msg}"),
            LayoutError::InterpreterError(msg) => write!(f, "interpreter error: {msg}"),
            LayoutError::ImagePlacement { page, detail } => {
                write!(f, "image placement mismatch on page {page}: {detail}")
            }
            LayoutError::PageOutOfRange { index, count } => {
                write!(f, "page index {index} out of range (document has {count} pages)")
            }
            LayoutError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        LayoutError::IoError(err.to_string())
    }
}

/// Machine-readable warning code for categorizing extraction issues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// A referenced font was not found in page resources.
    MissingFont,
    /// A code had no Unicode mapping; the sentinel was substituted.
    EncodingFallback,
    /// The font variant cannot supply glyph outlines.
    UnsupportedFont,
    /// The font has no outline or procedure for a code.
    MissingGlyph,
    /// A PDF object is malformed or has unexpected structure.
    MalformedObject,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractWarningCode::MissingFont => "MISSING_FONT",
            ExtractWarningCode::EncodingFallback => "ENCODING_FALLBACK",
            ExtractWarningCode::UnsupportedFont => "UNSUPPORTED_FONT",
            ExtractWarningCode::MissingGlyph => "MISSING_GLYPH",
            ExtractWarningCode::MalformedObject => "MALFORMED_OBJECT",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal warning encountered during extraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// 1-based page number where the warning occurred, if known.
    pub page: Option<usize>,
    /// Font name associated with the warning, if applicable.
    pub font_name: Option<String>,
}

impl ExtractWarning {
    /// Create a warning with a specific code and description.
    pub fn with_code(code: ExtractWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            font_name: None,
        }
    }

    /// Attach a page number.
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Attach a font name.
    pub fn for_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref font) = self.font_name {
            write!(f, " (font {font})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_error_display() {
        assert_eq!(
            LayoutError::ParseError("bad xref".to_string()).to_string(),
            "parse error: bad xref"
        );
        assert_eq!(
            LayoutError::ImagePlacement {
                page: 3,
                detail: "index exhausted".to_string()
            }
            .to_string(),
            "image placement mismatch on page 3: index exhausted"
        );
        assert_eq!(
            LayoutError::PageOutOfRange { index: 5, count: 2 }.to_string(),
            "page index 5 out of range (document has 2 pages)"
        );
    }

    #[test]
    fn layout_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LayoutError = io.into();
        assert!(matches!(err, LayoutError::IoError(ref m) if m.contains("gone")));
    }

    #[test]
    fn layout_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(LayoutError::Other("x".to_string()));
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn warning_builder_and_display() {
        let w = ExtractWarning::with_code(ExtractWarningCode::UnsupportedFont, "no outlines")
            .on_page(2)
            .for_font("F1");
        assert_eq!(w.page, Some(2));
        assert_eq!(w.font_name.as_deref(), Some("F1"));
        assert_eq!(w.to_string(), "[UNSUPPORTED_FONT] no outlines (page 2) (font F1)");
    }

    #[test]
    fn warning_code_tags() {
        assert_eq!(ExtractWarningCode::MissingFont.as_str(), "MISSING_FONT");
        assert_eq!(ExtractWarningCode::MissingGlyph.as_str(), "MISSING_GLYPH");
        assert_eq!(ExtractWarningCode::Other("x".into()).as_str(), "OTHER");
    }
}
