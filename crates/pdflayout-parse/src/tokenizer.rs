//! Content stream lexer.
//!
//! Splits decoded content bytes into [`Operation`]s: an operator keyword and
//! the operands that preceded it. The same lexer reads ToUnicode CMaps,
//! whose `begin…`/`end…` sections are ordinary keywords in this model.
//!
//! Inline images are folded into a single `BI` operation whose only operand
//! is the image dictionary; the sample data between `ID` and `EI` is skipped.

use crate::error::BackendError;

/// An operand value.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Integer(i64),
    Real(f64),
    /// Name without the leading `/`.
    Name(String),
    /// Literal or hexadecimal string, as raw bytes.
    String(Vec<u8>),
    Array(Vec<Operand>),
    Dictionary(Vec<(String, Operand)>),
    Boolean(bool),
    Null,
}

impl Operand {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Integer(i) => Some(*i as f64),
            Operand::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Operand::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Operand::String(s) => Some(s),
            _ => None,
        }
    }
}

/// One operator with its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: String,
    pub operands: Vec<Operand>,
}

impl Operation {
    /// Numeric operand `i`, if present and numeric.
    pub fn number(&self, i: usize) -> Option<f64> {
        self.operands.get(i).and_then(Operand::as_f64)
    }

    /// The first `N` operands as numbers, or `None` if any is missing.
    pub fn numbers<const N: usize>(&self) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.number(i)?;
        }
        Some(out)
    }
}

/// Lex a whole content stream.
///
/// # Errors
///
/// Returns [`BackendError::Interpreter`] for unterminated strings, arrays,
/// dictionaries or inline images.
pub fn tokenize(input: &[u8]) -> Result<Vec<Operation>, BackendError> {
    Lexer::new(input).run()
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0C | 0x00)
}

fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

fn is_regular(b: u8) -> bool {
    !is_whitespace(b) && !is_delimiter(b)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn err(msg: impl Into<String>) -> BackendError {
    BackendError::Interpreter(msg.into())
}

/// What the lexer found at the current position.
enum Token {
    Value(Operand),
    Keyword(String),
    ArrayEnd,
    DictEnd,
}

struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn run(mut self) -> Result<Vec<Operation>, BackendError> {
        let mut ops = Vec::new();
        let mut stack = Vec::new();
        while let Some(token) = self.next_token()? {
            match token {
                Token::Value(v) => stack.push(v),
                Token::Keyword(k) if k == "BI" => {
                    let dict = self.inline_image()?;
                    stack.clear();
                    ops.push(Operation {
                        operator: k,
                        operands: vec![Operand::Dictionary(dict)],
                    });
                }
                Token::Keyword(k) => ops.push(Operation {
                    operator: k,
                    operands: std::mem::take(&mut stack),
                }),
                // stray closers are ignored at top level
                Token::ArrayEnd | Token::DictEnd => {}
            }
        }
        Ok(ops)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                self.pos += 1;
            } else if b == b'%' {
                while let Some(c) = self.peek() {
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, BackendError> {
        loop {
            self.skip_whitespace_and_comments();
            let Some(b) = self.peek() else {
                return Ok(None);
            };
            let token = match b {
                b'(' => Token::Value(Operand::String(self.literal_string()?)),
                b'<' if self.peek_at(1) == Some(b'<') => {
                    self.pos += 2;
                    Token::Value(Operand::Dictionary(self.dictionary()?))
                }
                b'<' => Token::Value(Operand::String(self.hex_string()?)),
                b'>' if self.peek_at(1) == Some(b'>') => {
                    self.pos += 2;
                    Token::DictEnd
                }
                b'[' => {
                    self.pos += 1;
                    Token::Value(Operand::Array(self.array()?))
                }
                b']' => {
                    self.pos += 1;
                    Token::ArrayEnd
                }
                b'/' => Token::Value(Operand::Name(self.name())),
                b'0'..=b'9' | b'+' | b'-' | b'.' => Token::Value(self.number()),
                _ if is_regular(b) => {
                    let word = self.regular_run();
                    match word.as_str() {
                        "true" => Token::Value(Operand::Boolean(true)),
                        "false" => Token::Value(Operand::Boolean(false)),
                        "null" => Token::Value(Operand::Null),
                        _ => Token::Keyword(word),
                    }
                }
                _ => {
                    // `{`, `}`, lone `)` or `>`
                    self.pos += 1;
                    continue;
                }
            };
            return Ok(Some(token));
        }
    }

    fn regular_run(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_regular) {
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn number(&mut self) -> Operand {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let mut seen_dot = false;
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => self.pos += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let text = String::from_utf8_lossy(&self.input[start..self.pos]);
        if !seen_dot {
            if let Ok(i) = text.parse::<i64>() {
                return Operand::Integer(i);
            }
        }
        // "-", "." and "-." read as zero, as most viewers do
        Operand::Real(text.parse::<f64>().unwrap_or(0.0))
    }

    fn name(&mut self) -> String {
        self.pos += 1;
        let start = self.pos;
        while self.peek().is_some_and(is_regular) {
            self.pos += 1;
        }
        let raw = &self.input[start..self.pos];
        let mut out = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'#' && i + 2 < raw.len() {
                if let (Some(hi), Some(lo)) = (hex_value(raw[i + 1]), hex_value(raw[i + 2])) {
                    out.push((hi << 4) | lo);
                    i += 3;
                    continue;
                }
            }
            out.push(raw[i]);
            i += 1;
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn literal_string(&mut self) -> Result<Vec<u8>, BackendError> {
        self.pos += 1;
        let mut out = Vec::new();
        let mut depth = 1u32;
        while let Some(b) = self.peek() {
            self.pos += 1;
            match b {
                b'(' => {
                    depth += 1;
                    out.push(b);
                }
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(out);
                    }
                    out.push(b);
                }
                b'\\' => self.escape(&mut out),
                _ => out.push(b),
            }
        }
        Err(err("unterminated literal string"))
    }

    fn escape(&mut self, out: &mut Vec<u8>) {
        let Some(b) = self.peek() else {
            return;
        };
        self.pos += 1;
        match b {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'\r' => {
                if self.peek() == Some(b'\n') {
                    self.pos += 1;
                }
            }
            b'\n' => {}
            b'0'..=b'7' => {
                let mut value = u32::from(b - b'0');
                for _ in 0..2 {
                    match self.peek() {
                        Some(d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            self.pos += 1;
                        }
                        _ => break,
                    }
                }
                out.push((value & 0xFF) as u8);
            }
            other => out.push(other),
        }
    }

    fn hex_string(&mut self) -> Result<Vec<u8>, BackendError> {
        self.pos += 1;
        let mut out = Vec::new();
        let mut high: Option<u8> = None;
        while let Some(b) = self.peek() {
            self.pos += 1;
            if b == b'>' {
                if let Some(h) = high {
                    out.push(h << 4);
                }
                return Ok(out);
            }
            let Some(v) = hex_value(b) else {
                continue;
            };
            match high.take() {
                Some(h) => out.push((h << 4) | v),
                None => high = Some(v),
            }
        }
        Err(err("unterminated hex string"))
    }

    fn array(&mut self) -> Result<Vec<Operand>, BackendError> {
        let mut items = Vec::new();
        loop {
            match self.next_token()? {
                None => return Err(err("unterminated array")),
                Some(Token::ArrayEnd) => return Ok(items),
                Some(Token::Value(v)) => items.push(v),
                // bare words inside arrays are kept as names
                Some(Token::Keyword(k)) => items.push(Operand::Name(k)),
                Some(Token::DictEnd) => return Err(err("unexpected '>>' in array")),
            }
        }
    }

    fn dictionary(&mut self) -> Result<Vec<(String, Operand)>, BackendError> {
        let mut entries = Vec::new();
        let mut key: Option<String> = None;
        loop {
            let value = match self.next_token()? {
                None => return Err(err("unterminated dictionary")),
                Some(Token::DictEnd) => return Ok(entries),
                Some(Token::Value(v)) => v,
                Some(Token::Keyword(k)) => Operand::Name(k),
                Some(Token::ArrayEnd) => return Err(err("unexpected ']' in dictionary")),
            };
            match key.take() {
                Some(k) => entries.push((k, value)),
                None => match value {
                    Operand::Name(n) => key = Some(n),
                    _ => return Err(err("dictionary key is not a name")),
                },
            }
        }
    }

    /// Read `<key value>… ID <data> EI` after a `BI` keyword.
    fn inline_image(&mut self) -> Result<Vec<(String, Operand)>, BackendError> {
        let mut entries = Vec::new();
        let mut key: Option<String> = None;
        loop {
            let value = match self.next_token()? {
                None => return Err(err("inline image without ID")),
                Some(Token::Keyword(k)) if k == "ID" => break,
                Some(Token::Keyword(k)) => Operand::Name(k),
                Some(Token::Value(v)) => v,
                Some(_) => return Err(err("malformed inline image dictionary")),
            };
            match key.take() {
                Some(k) => entries.push((k, value)),
                None => match value {
                    Operand::Name(n) => key = Some(n),
                    _ => return Err(err("inline image key is not a name")),
                },
            }
        }
        // one whitespace byte separates ID from the data
        if self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        self.skip_inline_data()?;
        Ok(entries)
    }

    /// Advance past `EI`, which must follow whitespace and end a token.
    fn skip_inline_data(&mut self) -> Result<(), BackendError> {
        let data_start = self.pos;
        while self.pos + 1 < self.input.len() {
            let at_ei = self.input[self.pos] == b'E' && self.input[self.pos + 1] == b'I';
            let after_ws = self.pos == data_start || is_whitespace(self.input[self.pos - 1]);
            let ends = self
                .input
                .get(self.pos + 2)
                .is_none_or(|b| is_whitespace(*b) || is_delimiter(*b));
            if at_ei && after_ws && ends {
                self.pos += 2;
                return Ok(());
            }
            self.pos += 1;
        }
        Err(err("inline image without EI"))
    }
}
