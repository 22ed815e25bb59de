//! Identifier grammars for bare map keys.
//!
//! Map keys that satisfy the active grammar are written as bare identifiers
//! (`name = ...`); everything else is written as a quoted string key. The
//! grammar is a plain `fn(&str) -> bool` so callers can swap it through
//! [`SerializerOptions::with_identifier`](crate::SerializerOptions::with_identifier).
//!
//! ```rust
//! use hcl_tokens::ident::is_identifier;
//!
//! assert!(is_identifier("valid_name"));
//! assert!(is_identifier("kebab-case"));
//! assert!(!is_identifier("9lives"));
//! assert!(!is_identifier("not-an-ident!"));
//! ```

/// Signature of a pluggable identifier predicate.
pub type IdentifierRule = fn(&str) -> bool;

/// The ASCII HCL identifier grammar: `[A-Za-z_][A-Za-z0-9_-]*`.
///
/// Keywords such as `null` or `true` are accepted; only the grammar is checked.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A Unicode-aware variant: alphabetic or `_` start, then alphanumerics, `_` or `-`.
///
/// Closer to what HCL's scanner accepts for non-ASCII names.
#[must_use]
pub fn is_unicode_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}
