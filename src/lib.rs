//! # hcl_tokens
//!
//! Turn structured values into HCL token streams and canonical HCL text.
//!
//! ## What it does
//!
//! A [`Value`] (null, bool, number, string, ordered list, ordered map) is
//! serialized into [`Tokens`]: identifiers, quoted literals, numbers and
//! punctuation in exactly the order they appear in HCL source. A formatter
//! then lays those tokens out as text with canonical spacing, indentation
//! and `=` alignment.
//!
//! - **Deterministic**: maps are ordered pair sequences, never hash maps
//! - **Safe quoting**: string literals escape quotes, backslashes, control
//!   characters and template introducers (`${`, `%{`)
//! - **Bare keys when possible**: map keys that are valid identifiers are
//!   written unquoted, everything else is quoted
//! - **Fails loudly**: unresolved placeholders and runaway nesting are
//!   errors, never partial output
//!
//! ## Quick Start
//!
//! ```rust
//! use hcl_tokens::{hcl, to_string, to_tokens, TokenKind};
//!
//! let env = hcl!([{ "name" => "FOO", "value" => "bar" }]);
//!
//! let tokens = to_tokens(&env).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::BracketOpen);
//!
//! let text = to_string(&env).unwrap();
//! assert_eq!(text, "[{\n  name  = \"FOO\",\n  value = \"bar\"\n}]\n");
//! ```
//!
//! ### From Rust types
//!
//! ```rust
//! use hcl_tokens::{to_value, ValueMap};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Port { container_port: u16, protocol: &'static str }
//!
//! let value = to_value(&Port { container_port: 8080, protocol: "tcp" }).unwrap();
//! let map: &ValueMap = value.as_map().unwrap();
//! assert_eq!(map.get("container_port").map(|v| v.is_number()), Some(true));
//! ```
//!
//! ## Task definitions
//!
//! The [`taskdef`] module and the `taskdef-hcl` binary convert an ECS task
//! definition into a Terraform `locals` block listing the container's
//! environment variables and secrets.

pub mod body;
pub mod error;
pub mod escape;
pub mod format;
pub mod ident;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod taskdef;
pub mod token;
pub mod value;

pub use body::{Block, Body};
pub use error::{Error, Result};
pub use escape::escape;
pub use map::ValueMap;
pub use options::{FormatOptions, SerializerOptions};
pub use ser::{Serializer, ValueSerializer};
pub use token::{Token, TokenKind, Tokens};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Serialize a [`Value`] into its token stream with default options.
///
/// # Examples
///
/// ```rust
/// use hcl_tokens::{to_tokens, TokenKind, Value};
///
/// let tokens = to_tokens(&Value::from("")).unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[1].kind, TokenKind::QuoteClose);
/// ```
///
/// # Errors
///
/// [`Error::UnrepresentableValue`] for [`Value::Unknown`] anywhere in the tree,
/// [`Error::MaxDepthExceeded`] past the default nesting limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_tokens(value: &Value) -> Result<Tokens> {
    to_tokens_with_options(value, &SerializerOptions::default())
}

/// Serialize a [`Value`] into its token stream with custom options.
///
/// # Errors
///
/// Same as [`to_tokens`], with the limits taken from `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_tokens_with_options(value: &Value, options: &SerializerOptions) -> Result<Tokens> {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize(value)?;
    Ok(serializer.into_inner())
}

/// Serialize and format a [`Value`] as HCL expression text.
///
/// # Errors
///
/// Any serializer error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, &SerializerOptions::default())
}

/// Serialize and format a [`Value`] with custom options.
///
/// # Examples
///
/// ```rust
/// use hcl_tokens::{hcl, to_string_with_options, FormatOptions, SerializerOptions};
///
/// let options = SerializerOptions::new().with_format(FormatOptions::new().with_indent(4));
/// let text = to_string_with_options(&hcl!({ "a" => 1 }), &options).unwrap();
/// assert_eq!(text, "{\n    a = 1\n}\n");
/// ```
///
/// # Errors
///
/// Any serializer error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: &SerializerOptions) -> Result<String> {
    let tokens = to_tokens_with_options(value, options)?;
    Ok(format::format(&tokens, &options.format))
}

/// Write the formatted HCL text of `value` to `writer`.
///
/// # Errors
///
/// Serializer errors, or [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, value: &Value, options: &SerializerOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Convert any `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use hcl_tokens::{to_value, Value};
///
/// let value = to_value(&vec!["a", "b"]).unwrap();
/// assert_eq!(value, Value::List(vec![Value::from("a"), Value::from("b")]));
/// ```
///
/// # Errors
///
/// [`Error::UnrepresentableValue`] for NaN or infinite floats, or any error
/// raised by the type's `Serialize` impl.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
