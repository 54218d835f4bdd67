//! The JSON value tree.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value as an owned, mutable tree.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::map::Map;

/// Owned storage of a JSON array.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 7159].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number (always an IEEE-754 `f64`)
/// - String
/// - Array
/// - Object
///
/// Each variant exclusively owns its payload; dropping a value releases the
/// whole subtree, and reassigning a variant releases the old payload first.
/// Equality is structural and order-sensitive: two objects holding the same
/// members in a different order compare unequal, and `Number` follows IEEE
/// semantics (`NaN != NaN`; the parser never produces non-finite numbers).
///
/// # Examples
///
/// ```
/// use jsondom::{Map, Value};
///
/// let mut map = Map::new();
/// map.push("key", Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_json(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the payload if the value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Returns the payload if the value is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if let Self::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Borrows the payload if the value is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let v = Value::String("abc".into());
    /// assert_eq!(v.as_str(), Some("abc"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Borrows the payload if the value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// Mutably borrows the payload if the value is an array.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        if let Self::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    /// Borrows the payload if the value is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }

    /// Mutably borrows the payload if the value is an object.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        if let Self::Object(o) = self {
            Some(o)
        } else {
            None
        }
    }

    /// Moves the value out, leaving [`Null`] behind.
    ///
    /// This is the ownership-transfer primitive: the subtree is handed to the
    /// caller without a deep copy and the source slot resets to its initial
    /// state.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let mut v = Value::Number(1.0);
    /// assert_eq!(v.take(), Value::Number(1.0));
    /// assert_eq!(v, Value::Null);
    /// ```
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }
}
