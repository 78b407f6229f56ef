//! pdflayout-parse: lopdf-backed document model for pdflayout-rs.
//!
//! This crate owns everything PDF-specific: loading documents with lopdf,
//! resolving inherited page attributes, loading fonts (simple, Type3 and
//! composite, with embedded TrueType/OpenType outlines via ttf-parser) and
//! interpreting content streams. It feeds the backend-independent pipeline
//! in pdflayout-core through the [`DocumentModel`](pdflayout_core::DocumentModel)
//! trait.
//!
//! ```ignore
//! use pdflayout_core::{ExtractConfig, extract_document};
//! use pdflayout_parse::LopdfDocument;
//!
//! let doc = LopdfDocument::open("input.pdf")?;
//! let summary = extract_document(&doc, &ExtractConfig::default(), &mut std::io::stdout())?;
//! ```

pub mod cmap;
pub mod document;
pub mod error;
pub mod fonts;
pub mod interpreter;
pub(crate) mod objects;
pub mod standard_fonts;
pub mod text_state;
pub mod tokenizer;

#[cfg(test)]
mod test_support;

pub use cmap::ToUnicodeCMap;
pub use document::LopdfDocument;
pub use error::BackendError;
pub use fonts::{FontKind, LopdfFont};
pub use interpreter::ContentInterpreter;
pub use pdflayout_core;
pub use tokenizer::{Operand, Operation, tokenize};
