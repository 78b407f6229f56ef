//! ToUnicode CMap reader.
//!
//! The CMap program is lexed with the content stream tokenizer; each
//! `endbfchar` and `endbfrange` operation then carries its whole section as
//! operands. Destination strings are UTF-16BE.

use std::collections::HashMap;

use crate::error::BackendError;
use crate::tokenizer::{Operand, tokenize};

/// Character code to Unicode mapping from a `/ToUnicode` stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToUnicodeCMap {
    mappings: HashMap<u32, String>,
}

impl ToUnicodeCMap {
    /// Parse a decoded CMap stream.
    ///
    /// Malformed entries are skipped; only a stream the lexer cannot read
    /// is an error.
    pub fn parse(data: &[u8]) -> Result<Self, BackendError> {
        let mut mappings = HashMap::new();
        for op in tokenize(data)? {
            match op.operator.as_str() {
                "endbfchar" => {
                    for pair in op.operands.chunks_exact(2) {
                        if let (Some(src), Some(dst)) = (pair[0].as_bytes(), pair[1].as_bytes()) {
                            mappings.insert(code_value(src), decode_utf16be(dst));
                        }
                    }
                }
                "endbfrange" => {
                    for triple in op.operands.chunks_exact(3) {
                        insert_range(&mut mappings, &triple[0], &triple[1], &triple[2]);
                    }
                }
                _ => {}
            }
        }
        Ok(Self { mappings })
    }

    pub fn lookup(&self, code: u32) -> Option<&str> {
        self.mappings.get(&code).map(String::as_str)
    }

    /// A code that maps to exactly `text`, if any.
    pub fn code_for(&self, text: &str) -> Option<u32> {
        self.mappings
            .iter()
            .filter(|(_, v)| v.as_str() == text)
            .map(|(k, _)| *k)
            .min()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

fn code_value(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b))
}

fn decode_utf16be(bytes: &[u8]) -> String {
    if bytes.len() == 1 {
        return char::from(bytes[0]).to_string();
    }
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|c| u16::from_be_bytes([c[0], c.get(1).copied().unwrap_or(0)]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn insert_range(mappings: &mut HashMap<u32, String>, lo: &Operand, hi: &Operand, dst: &Operand) {
    let (Some(lo), Some(hi)) = (lo.as_bytes(), hi.as_bytes()) else {
        return;
    };
    let (lo, hi) = (code_value(lo), code_value(hi));
    if hi < lo || hi - lo > 0xFFFF {
        return;
    }
    match dst {
        Operand::String(start) => {
            // increment the last UTF-16 unit across the range
            let mut units: Vec<u16> = start
                .chunks(2)
                .map(|c| u16::from_be_bytes([c[0], c.get(1).copied().unwrap_or(0)]))
                .collect();
            if units.is_empty() {
                return;
            }
            for code in lo..=hi {
                mappings.insert(code, String::from_utf16_lossy(&units));
                if let Some(last) = units.last_mut() {
                    *last = last.wrapping_add(1);
                }
            }
        }
        Operand::Array(items) => {
            for (code, item) in (lo..=hi).zip(items) {
                if let Some(bytes) = item.as_bytes() {
                    mappings.insert(code, decode_utf16be(bytes));
                }
            }
        }
        _ => {}
    }
}
