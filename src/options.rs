//! Configuration for token generation and text formatting.
//!
//! - [`SerializerOptions`]: depth limit and identifier grammar for the serializer
//! - [`FormatOptions`]: indentation and `=` alignment for the formatter
//!
//! ## Examples
//!
//! ```rust
//! use hcl_tokens::{ident, FormatOptions, SerializerOptions};
//!
//! let options = SerializerOptions::new()
//!     .with_max_depth(16)
//!     .with_identifier(ident::is_unicode_identifier)
//!     .with_format(FormatOptions::new().with_indent(4));
//! assert_eq!(options.max_depth, 16);
//! assert_eq!(options.format.indent, 4);
//! ```

use crate::ident::{self, IdentifierRule};
use std::fmt;

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options that control how values become tokens.
#[derive(Clone)]
pub struct SerializerOptions {
    /// Maximum number of nested lists/maps on any path from the root.
    pub max_depth: usize,
    /// Decides which string map keys are written as bare identifiers.
    pub identifier: IdentifierRule,
    pub format: FormatOptions,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        SerializerOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            identifier: ident::is_identifier,
            format: FormatOptions::default(),
        }
    }
}

impl fmt::Debug for SerializerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerOptions")
            .field("max_depth", &self.max_depth)
            .field("identifier", &(self.identifier as *const ()))
            .field("format", &self.format)
            .finish()
    }
}

impl SerializerOptions {
    /// Creates default options (depth 128, ASCII identifier grammar).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hcl_tokens::SerializerOptions;
    ///
    /// let options = SerializerOptions::new();
    /// assert_eq!(options.max_depth, 128);
    /// assert!((options.identifier)("name"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replaces the identifier predicate used for map keys.
    #[must_use]
    pub fn with_identifier(mut self, rule: IdentifierRule) -> Self {
        self.identifier = rule;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

/// Layout options for [`crate::format`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Align `=` across consecutive attribute lines.
    pub align_equals: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent: 2,
            align_equals: true,
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_align_equals(mut self, align: bool) -> Self {
        self.align_equals = align;
        self
    }
}
