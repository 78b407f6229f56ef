//! Extraction configuration.
//!
//! Built once from command-line flags and passed by reference to the record
//! builder and the serializer. Nothing mutates it afterwards.

/// Default limit on nested form XObjects.
pub const DEFAULT_MAX_FORM_DEPTH: usize = 16;

/// Which record kinds are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordKinds {
    pub text: bool,
    pub draw: bool,
    pub image: bool,
}

impl RecordKinds {
    /// Every kind enabled.
    pub fn all() -> Self {
        Self {
            text: true,
            draw: true,
            image: true,
        }
    }

    /// Enable the requested kinds, or all of them when none is requested.
    pub fn selected(text: bool, draw: bool, image: bool) -> Self {
        if !text && !draw && !image {
            Self::all()
        } else {
            Self { text, draw, image }
        }
    }
}

impl Default for RecordKinds {
    fn default() -> Self {
        Self::all()
    }
}

/// Optional fields of text records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSelection {
    pub font_name: bool,
    /// Advance box `(bx, by, bw, bh)`.
    pub bounding: bool,
    /// Outline box `(gx, gy, gw, gh)`.
    pub glyph: bool,
}

/// Serialized output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated lines, blank line after each group.
    #[default]
    Tsv,
    /// One JSON object per page.
    Json,
}

/// Immutable settings for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    pub kinds: RecordKinds,
    pub fields: FieldSelection,
    pub format: OutputFormat,
    pub max_form_depth: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            kinds: RecordKinds::all(),
            fields: FieldSelection::default(),
            format: OutputFormat::Tsv,
            max_form_depth: DEFAULT_MAX_FORM_DEPTH,
        }
    }
}

impl ExtractConfig {
    pub fn with_kinds(mut self, kinds: RecordKinds) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_fields(mut self, fields: FieldSelection) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
