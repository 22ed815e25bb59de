//! The value model handed to the token serializer.
//!
//! [`Value`] is a closed tree of null, booleans, numbers, strings, ordered
//! lists and ordered maps. Maps are sequences of pairs, so output order is
//! always the order the caller built.
//!
//! ## Creating Values
//!
//! ```rust
//! use hcl_tokens::{hcl, Number, Value, ValueMap};
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let name = Value::from("FOO");
//!
//! let mut env = ValueMap::new();
//! env.push("name", "FOO");
//! env.push("value", "bar");
//! let list = Value::List(vec![Value::Map(env)]);
//!
//! // The same structure with the hcl! macro
//! let same = hcl!([{ "name" => "FOO", "value" => "bar" }]);
//! assert_eq!(list, same);
//! ```
//!
//! ## Numbers
//!
//! A [`Number`] stores validated decimal text. Floats convert to their
//! shortest round-trip form, never in exponent notation:
//!
//! ```rust
//! use hcl_tokens::Number;
//!
//! assert_eq!(Number::from_f64(0.1).unwrap().as_str(), "0.1");
//! assert_eq!(Number::from_f64(1e21).unwrap().as_str(), "1000000000000000000000");
//! assert!(Number::from_f64(f64::NAN).is_none());
//! assert!(Number::parse("1.5e3").is_ok());
//! assert!(Number::parse("0x10").is_err());
//! ```

use crate::{Error, Result, ValueMap};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed tree of data to render as HCL.
///
/// `Unknown` models an unresolved placeholder. It may appear while a caller is
/// still assembling a tree, but the serializer refuses it.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Value>),
    Map(ValueMap),
    Unknown,
}

/// Decimal text of a number, exactly as it will be rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Validates `text` as a decimal literal: `-?digits(.digits)?([eE][+-]?digits)?`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`] for anything else, including `NaN`,
    /// `Infinity`, hex and empty text.
    pub fn parse(text: &str) -> Result<Self> {
        if is_decimal_literal(text) {
            Ok(Number(text.to_string()))
        } else {
            Err(Error::InvalidNumber(text.to_string()))
        }
    }

    /// Shortest round-trip decimal text of `value`, or `None` if it is not finite.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Number("0".to_string()));
        }
        // Display for f64 is shortest round-trip and never uses an exponent.
        Some(Number(value.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the text has no fraction or exponent.
    #[inline]
    #[must_use]
    pub fn is_integer(&self) -> bool {
        !self.0.contains(['.', 'e', 'E'])
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i > start
    };

    if !digits(&mut i) {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        if !digits(&mut i) {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        if !digits(&mut i) {
            return false;
        }
    }
    i == bytes.len()
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number(value.to_string())
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number(value.to_string())
    }
}

impl From<&BigInt> for Number {
    fn from(value: &BigInt) -> Self {
        Number(value.to_string())
    }
}

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .ok_or_else(|| Error::unrepresentable(&format!("non-finite number {}", value), ""))
    }
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Unknown => "unknown value",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` for the unresolved placeholder.
    #[inline]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Returns `true` if this value or anything nested in it is [`Value::Unknown`].
    ///
    /// Walks the tree with an explicit work list, so arbitrarily deep values
    /// do not grow the call stack.
    #[must_use]
    pub fn contains_unknown(&self) -> bool {
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Value::Unknown => return true,
                Value::List(items) => pending.extend(items.iter()),
                Value::Map(map) => {
                    for (k, v) in map.iter() {
                        pending.push(k);
                        pending.push(v);
                    }
                }
                _ => {}
            }
        }
        false
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Ok(i) = self.0.parse::<i64>() {
            serializer.serialize_i64(i)
        } else if let Ok(u) = self.0.parse::<u64>() {
            serializer.serialize_u64(u)
        } else if let Ok(i) = self.0.parse::<i128>() {
            serializer.serialize_i128(i)
        } else if let Ok(u) = self.0.parse::<u128>() {
            serializer.serialize_u128(u)
        } else {
            match self.0.parse::<f64>() {
                Ok(f) if f.is_finite() => serializer.serialize_f64(f),
                _ => serializer.serialize_str(&self.0),
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{Error as _, SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Unknown => Err(S::Error::custom("cannot serialize unknown value")),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::custom(format!(
                "expected bool, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::custom(format!(
                "expected string, found {}",
                other.type_name()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
