//! Canonical JSON emission.
//!
//! One generic writer serves both [`Value::to_json`] and the [`Display`]
//! impl: all recursive calls share the caller's single output buffer, so
//! serialization performs no per-node allocation.
//!
//! Canonical form: no interstitial whitespace, members in stored order,
//! numbers in their shortest round-trip decimal form, control characters
//! escaped (`\u00XX` with uppercase hex where no short escape exists).
//! `/` and all bytes at or above U+0020 pass through verbatim.
//!
//! [`Display`]: core::fmt::Display

use alloc::string::String;
use core::fmt::{self, Write};

use crate::value::Value;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl Value {
    /// Serializes the value to its canonical JSON form.
    ///
    /// Re-parsing the output reproduces a structurally equal tree, and
    /// serializing that tree again reproduces the same bytes.
    ///
    /// Non-finite numbers cannot come out of the parser; a hand-built
    /// NaN or infinity serializes to core's non-JSON notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::parse;
    ///
    /// let doc = parse("{ \"n\" : null , \"a\" : [ 1, 2, 3 ] }").unwrap();
    /// assert_eq!(doc.to_json(), r#"{"n":null,"a":[1,2,3]}"#);
    /// ```
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut out = String::with_capacity(256);
        write_value(&mut out, self).expect("writing to a String cannot fail");
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}

fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Boolean(true) => out.write_str("true"),
        Value::Boolean(false) => out.write_str("false"),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => {
            out.write_char('[')?;
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_value(out, element)?;
            }
            out.write_char(']')
        }
        Value::Object(members) => {
            out.write_char('{')?;
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_string(out, &member.key)?;
                out.write_char(':')?;
                write_value(out, &member.value)?;
            }
            out.write_char('}')
        }
    }
}

/// Writes `s` as a quoted JSON string.
///
/// Escapable characters are all ASCII, so the text between them is emitted
/// in whole runs rather than char by char.
fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let mut run_start = 0;
    for (i, b) in s.bytes().enumerate() {
        let short_escape = match b {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            0x08 => Some("\\b"),
            0x0C => Some("\\f"),
            b'\n' => Some("\\n"),
            b'\r' => Some("\\r"),
            b'\t' => Some("\\t"),
            _ => None,
        };
        if let Some(escape) = short_escape {
            out.write_str(&s[run_start..i])?;
            out.write_str(escape)?;
            run_start = i + 1;
        } else if b < 0x20 {
            out.write_str(&s[run_start..i])?;
            out.write_str("\\u00")?;
            out.write_char(char::from(HEX_DIGITS[usize::from(b >> 4)]))?;
            out.write_char(char::from(HEX_DIGITS[usize::from(b & 0x0F)]))?;
            run_start = i + 1;
        }
    }
    out.write_str(&s[run_start..])?;
    out.write_char('"')
}
