//! Token serialization.
//!
//! This module provides the [`Serializer`] that turns a [`Value`] tree into an
//! HCL token stream, and [`ValueSerializer`], a serde serializer that turns
//! any `T: Serialize` into a [`Value`].
//!
//! ## Token rules
//!
//! - `null`, `true`, `false` are identifier tokens
//! - numbers are a single number literal token carrying the decimal text
//! - strings are an open quote, an escaped literal (omitted when empty) and a close quote
//! - lists are `[`, items separated by `,` newline, `]`
//! - maps are `{` newline, pairs separated by `,` newline, newline `}`; keys
//!   accepted by the identifier predicate become bare identifiers, every
//!   other key is serialized like any other value
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use hcl_tokens::{hcl, Serializer, SerializerOptions};
//!
//! let mut serializer = Serializer::new(SerializerOptions::new());
//! serializer.serialize(&hcl!([1, 2])).unwrap();
//!
//! let tokens = serializer.into_inner();
//! assert_eq!(tokens.to_string(), "[1,\n2]");
//! ```

use crate::escape::escape;
use crate::{Error, Number, Result, SerializerOptions, Token, TokenKind, Tokens, Value, ValueMap};
use serde::{ser, Serialize};
use tracing::trace;

/// Converts [`Value`] trees into [`Tokens`].
///
/// Each call to [`serialize`](Serializer::serialize) either appends the full
/// token stream for its value or appends nothing and returns an error.
pub struct Serializer {
    output: Tokens,
    options: SerializerOptions,
}

/// Where a traversal failure happened, collected while unwinding.
struct Fault<'a> {
    kind: FaultKind,
    path: Vec<Segment<'a>>,
}

enum FaultKind {
    Unrepresentable(&'static str),
    TooDeep,
}

enum Segment<'a> {
    Index(usize),
    Attr(&'a str),
    Key(&'a str),
    KeyOf(usize),
    ValueOf(usize),
}

type Step<'a> = std::result::Result<(), Fault<'a>>;

impl<'a> Fault<'a> {
    fn new(kind: FaultKind) -> Self {
        Fault {
            kind,
            path: Vec::new(),
        }
    }

    fn at(mut self, segment: Segment<'a>) -> Self {
        self.path.push(segment);
        self
    }

    fn into_error(self, limit: usize) -> Error {
        match self.kind {
            FaultKind::TooDeep => Error::MaxDepthExceeded { limit },
            FaultKind::Unrepresentable(what) => {
                let mut path = String::new();
                for segment in self.path.iter().rev() {
                    match segment {
                        Segment::Index(i) => path.push_str(&format!("[{}]", i)),
                        Segment::Attr(name) => {
                            if !path.is_empty() {
                                path.push('.');
                            }
                            path.push_str(name);
                        }
                        Segment::Key(key) => path.push_str(&format!("[{:?}]", key)),
                        Segment::KeyOf(i) => path.push_str(&format!("<key {}>", i)),
                        Segment::ValueOf(i) => path.push_str(&format!("<value {}>", i)),
                    }
                }
                Error::unrepresentable(what, &path)
            }
        }
    }
}

impl Serializer {
    pub fn new(options: SerializerOptions) -> Self {
        Serializer {
            output: Tokens::new(),
            options,
        }
    }

    /// Appends the tokens for `value`.
    ///
    /// # Errors
    ///
    /// [`Error::UnrepresentableValue`] if the tree contains [`Value::Unknown`],
    /// [`Error::MaxDepthExceeded`] if it nests deeper than `max_depth`. On
    /// error nothing is appended.
    pub fn serialize(&mut self, value: &Value) -> Result<()> {
        let mut scratch = Tokens::new();
        self.write_value(&mut scratch, value, 0)
            .map_err(|fault| fault.into_error(self.options.max_depth))?;
        trace!(tokens = scratch.len(), kind = value.type_name(), "serialized value");
        self.output.extend(scratch);
        Ok(())
    }

    pub fn into_inner(self) -> Tokens {
        self.output
    }

    fn write_value<'a>(&self, toks: &mut Tokens, value: &'a Value, depth: usize) -> Step<'a> {
        match value {
            Value::Unknown => Err(Fault::new(FaultKind::Unrepresentable("unknown value"))),
            Value::Null => {
                toks.push(Token::ident("null"));
                Ok(())
            }
            Value::Bool(b) => {
                toks.push(Token::ident(if *b { "true" } else { "false" }));
                Ok(())
            }
            Value::Number(n) => {
                toks.push(Token::new(TokenKind::NumberLiteral, n.as_str()));
                Ok(())
            }
            Value::String(s) => {
                write_string(toks, s);
                Ok(())
            }
            Value::List(items) => {
                self.enter(depth)?;
                self.write_list(toks, items, depth + 1)
            }
            Value::Map(map) => {
                self.enter(depth)?;
                self.write_map(toks, map, depth + 1)
            }
        }
    }

    fn enter<'a>(&self, depth: usize) -> Step<'a> {
        if depth >= self.options.max_depth {
            return Err(Fault::new(FaultKind::TooDeep));
        }
        Ok(())
    }

    fn write_list<'a>(&self, toks: &mut Tokens, items: &'a [Value], depth: usize) -> Step<'a> {
        toks.push_kind(TokenKind::BracketOpen);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                toks.push_kind(TokenKind::Comma);
                toks.push_kind(TokenKind::Newline);
            }
            self.write_value(toks, item, depth)
                .map_err(|f| f.at(Segment::Index(i)))?;
        }
        toks.push_kind(TokenKind::BracketClose);
        Ok(())
    }

    fn write_map<'a>(&self, toks: &mut Tokens, map: &'a ValueMap, depth: usize) -> Step<'a> {
        toks.push_kind(TokenKind::BraceOpen);
        toks.push_kind(TokenKind::Newline);

        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                toks.push_kind(TokenKind::Comma);
                toks.push_kind(TokenKind::Newline);
            }

            let segment = match key {
                Value::String(name) if (self.options.identifier)(name) => {
                    toks.push(Token::ident(name));
                    Segment::Attr(name)
                }
                _ => {
                    self.write_value(toks, key, depth)
                        .map_err(|f| f.at(Segment::KeyOf(i)))?;
                    match key {
                        Value::String(s) => Segment::Key(s),
                        _ => Segment::ValueOf(i),
                    }
                }
            };

            toks.push_kind(TokenKind::Equal);
            self.write_value(toks, value, depth)
                .map_err(|f| f.at(segment))?;
        }

        toks.push_kind(TokenKind::Newline);
        toks.push_kind(TokenKind::BraceClose);
        Ok(())
    }
}

fn write_string(toks: &mut Tokens, s: &str) {
    toks.push_kind(TokenKind::QuoteOpen);
    if !s.is_empty() {
        toks.push(Token::new(TokenKind::QuotedLiteral, escape(s)));
    }
    toks.push_kind(TokenKind::QuoteClose);
}

/// A serde serializer that builds a [`Value`] from any `T: Serialize`.
///
/// Struct fields keep declaration order, map entries keep iteration order,
/// and enum variants carrying data become single-pair maps keyed by the
/// variant name.
pub struct ValueSerializer;

pub struct SerializeList {
    items: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: ValueMap,
    current_key: Option<Value>,
    variant: Option<&'static str>,
}

fn wrap_variant(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => {
            let mut map = ValueMap::with_capacity(1);
            map.push(name, value);
            Value::Map(map)
        }
        None => value,
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = SerializeList;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        // f32 Display gives the shortest text for the f32, not the widened f64
        if !v.is_finite() {
            return Err(Error::unrepresentable(&format!("non-finite number {}", v), ""));
        }
        if v == 0.0 {
            return Ok(Value::from(0));
        }
        Ok(Value::Number(Number::parse(&v.to_string())?))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::try_from(v)?))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(ValueSerializer)?;
        Ok(wrap_variant(Some(variant), inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList> {
        Ok(SerializeList::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeList> {
        Ok(SerializeList::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeList> {
        Ok(SerializeList::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeList> {
        Ok(SerializeList::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeList {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeList {
            items: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        wrap_variant(self.variant, Value::List(self.items))
    }
}

impl SerializeMap {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: ValueMap::with_capacity(capacity),
            current_key: None,
            variant,
        }
    }

    fn field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.push(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        wrap_variant(self.variant, Value::Map(self.map))
    }
}

impl ser::SerializeSeq for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        self.map.push(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}
