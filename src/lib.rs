//! In-memory JSON documents per [RFC 7159]: a one-shot parser, a mutable
//! value tree, and a canonical serializer.
//!
//! The crate is deliberately small: no I/O, no streaming, no schema layer.
//! [`parse`] turns a complete UTF-8 string into a [`Value`], the tree can be
//! inspected and rewritten in place, and [`Value::to_json`] emits the
//! canonical textual form (no interstitial whitespace, shortest round-trip
//! numbers, control characters escaped).
//!
//! ```
//! use jsondom::{parse, Value};
//!
//! let mut doc = parse(r#"{"n":null,"a":[1,2,3]}"#).unwrap();
//! let a = doc.as_object_mut().unwrap().slot("a");
//! a.as_array_mut().unwrap().push(Value::Boolean(true));
//! assert_eq!(doc.to_json(), r#"{"n":null,"a":[1,2,3,true]}"#);
//! ```
//!
//! Object members keep insertion order and duplicate keys are preserved
//! verbatim; lookup returns the first match.
//!
//! [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod map;
mod options;
mod parser;
mod serializer;
mod value;

pub use error::ParseError;
pub use map::{Map, Member};
pub use options::ParserOptions;
pub use parser::{parse, parse_with_options};
pub use value::{Array, Value};

#[cfg(test)]
mod tests;
