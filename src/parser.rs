//! The recursive-descent JSON parser.
//!
//! One-shot: the entire document must be in memory, and exactly one root
//! value is accepted. The parser walks the input byte by byte, dispatching on
//! the first non-whitespace character of each value, and reports the first
//! error it encounters as a [`ParseError`] classification.
//!
//! # Examples
//!
//! ```
//! use jsondom::{parse, Value};
//!
//! let doc = parse(r#"[null, false, true, 123, "abc"]"#).unwrap();
//! assert_eq!(doc.as_array().unwrap().len(), 5);
//! ```

use alloc::string::String;

use crate::{
    error::ParseError,
    map::Map,
    options::ParserOptions,
    value::{Array, Value},
};

/// Parses a complete JSON document with default [`ParserOptions`].
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses a complete JSON document.
///
/// Whitespace (space, tab, CR, LF) is accepted around the root value and at
/// the structural positions RFC 7159 defines. Anything left over after the
/// root value is [`ParseError::RootNotSingular`].
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, ParseError> {
    let mut parser = Parser::new(text, options);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos != text.len() {
        return Err(ParseError::RootNotSingular);
    }
    debug_assert!(parser.scratch.is_empty(), "scratch not rewound");
    Ok(value)
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    /// Container levels left before [`ParserOptions::max_depth`] trips.
    remaining_depth: usize,
    /// Decoded string bytes accumulate here across nested calls; every
    /// string decode snapshots its own tail and truncates back.
    scratch: String,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, options: ParserOptions) -> Self {
        Self {
            text,
            pos: 0,
            remaining_depth: options.max_depth,
            scratch: String::new(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal("false", Value::Boolean(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value, ParseError> {
        if self.text.as_bytes()[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    /// Validates the number grammar
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`, then converts the
    /// validated span in one shot.
    ///
    /// A leading-zero integer like `0123` is not a grammar error here: the
    /// span `0` parses fine and the caller trips over the trailing `123`.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => return Err(ParseError::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            if self.eat_digits() == 0 {
                return Err(ParseError::InvalidValue);
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            if self.eat_digits() == 0 {
                return Err(ParseError::InvalidValue);
            }
        }
        let number: f64 = self.text[start..self.pos]
            .parse()
            .map_err(|_| ParseError::InvalidValue)?;
        if number.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        Ok(Value::Number(number))
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Decodes a quoted string starting at the current `"` into a fresh
    /// right-sized allocation. The scratch buffer is rewound on both success
    /// and failure, so partial output never leaks into an enclosing decode.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let mark = self.scratch.len();
        match self.decode_string_body() {
            Ok(()) => {
                let decoded = String::from(&self.scratch[mark..]);
                self.scratch.truncate(mark);
                Ok(decoded)
            }
            Err(err) => {
                self.scratch.truncate(mark);
                Err(err)
            }
        }
    }

    fn decode_string_body(&mut self) -> Result<(), ParseError> {
        self.bump(); // opening '"'
        loop {
            // Bulk-copy the run up to the next quote, escape, or control
            // byte. Those are all ASCII, so the run boundaries are char
            // boundaries and the slice below is valid UTF-8.
            let run_start = self.pos;
            while matches!(self.peek(), Some(b) if b >= 0x20 && b != b'"' && b != b'\\') {
                self.pos += 1;
            }
            if run_start < self.pos {
                self.scratch.push_str(&self.text[run_start..self.pos]);
            }
            match self.peek() {
                None | Some(b'\0') => return Err(ParseError::MissQuotationMark),
                Some(b'"') => {
                    self.bump();
                    return Ok(());
                }
                Some(b'\\') => {
                    self.bump();
                    self.decode_escape()?;
                }
                Some(_) => return Err(ParseError::InvalidStringChar),
            }
        }
    }

    /// The backslash has been consumed; decodes one escape sequence onto the
    /// scratch buffer.
    fn decode_escape(&mut self) -> Result<(), ParseError> {
        let Some(escape) = self.peek() else {
            return Err(ParseError::InvalidStringEscape);
        };
        self.bump();
        match escape {
            b'"' => self.scratch.push('"'),
            b'\\' => self.scratch.push('\\'),
            b'/' => self.scratch.push('/'),
            b'b' => self.scratch.push('\u{0008}'),
            b'f' => self.scratch.push('\u{000C}'),
            b'n' => self.scratch.push('\n'),
            b'r' => self.scratch.push('\r'),
            b't' => self.scratch.push('\t'),
            b'u' => {
                let ch = self.decode_unicode_escape()?;
                self.scratch.push(ch);
            }
            _ => return Err(ParseError::InvalidStringEscape),
        }
        Ok(())
    }

    /// `\u` has been consumed. Reads `XXXX`, and for a high surrogate the
    /// mandatory `\uYYYY` low half, combining the pair into a supplementary
    /// codepoint.
    fn decode_unicode_escape(&mut self) -> Result<char, ParseError> {
        let unit = self.parse_hex4()?;
        let code = match unit {
            0xD800..=0xDBFF => {
                if self.peek() != Some(b'\\') {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                self.bump();
                if self.peek() != Some(b'u') {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                self.bump();
                let low = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ParseError::InvalidUnicodeSurrogate);
                }
                0x10000 + (((unit - 0xD800) << 10) | (low - 0xDC00))
            }
            0xDC00..=0xDFFF => return Err(ParseError::InvalidUnicodeSurrogate),
            _ => unit,
        };
        // Surrogates are excluded above and a pair tops out at U+10FFFF, so
        // the conversion cannot fail.
        char::from_u32(code).ok_or(ParseError::InvalidUnicodeSurrogate)
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(b @ b'0'..=b'9') => u32::from(b - b'0'),
                Some(b @ b'A'..=b'F') => u32::from(b - b'A' + 10),
                Some(b @ b'a'..=b'f') => u32::from(b - b'a' + 10),
                _ => return Err(ParseError::InvalidUnicodeHex),
            };
            self.bump();
            code = code << 4 | digit;
        }
        Ok(code)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.bump(); // '['
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.bump();
            self.ascend();
            return Ok(Value::Array(Array::new()));
        }
        let mut elements = Array::new();
        loop {
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.bump();
                    self.ascend();
                    return Ok(Value::Array(elements));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.bump(); // '{'
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.bump();
            self.ascend();
            return Ok(Value::Object(Map::new()));
        }
        let mut members = Map::new();
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissColon);
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.push(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.bump();
                    self.ascend();
                    return Ok(Value::Object(members));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.remaining_depth == 0 {
            return Err(ParseError::RecursionLimitExceeded);
        }
        self.remaining_depth -= 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.remaining_depth += 1;
    }
}
