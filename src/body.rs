//! HCL document bodies: attributes and nested blocks.
//!
//! A [`Body`] is an ordered list of attributes (`name = <expression>`) and
//! blocks (`type "label" { ... }`). Attribute expressions are token streams,
//! usually produced from a [`Value`] by [`Body::set_attribute_value`].
//!
//! ```rust
//! use hcl_tokens::{hcl, Body, FormatOptions, SerializerOptions};
//!
//! let mut file = Body::new();
//! let locals = file.append_block("locals", &[]).unwrap();
//! locals
//!     .set_attribute_value("region", &hcl!("eu-west-1"), &SerializerOptions::new())
//!     .unwrap();
//!
//! assert_eq!(
//!     file.render(&FormatOptions::default()),
//!     "locals {\n  region = \"eu-west-1\"\n}\n"
//! );
//! ```

use crate::escape::escape;
use crate::format::format;
use crate::ident::is_identifier;
use crate::{
    Error, FormatOptions, Result, Serializer, SerializerOptions, Token, TokenKind, Tokens, Value,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Body {
    items: Vec<Item>,
}

#[derive(Clone, Debug, PartialEq)]
enum Item {
    Attribute { name: String, expr: Tokens },
    Block(Block),
}

/// A nested block with a type name and zero or more quoted labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    name: String,
    labels: Vec<String>,
    body: Body,
}

impl Block {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }
}

impl Body {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block and returns its body for filling in.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIdentifier`] if `name` is not an identifier.
    pub fn append_block(&mut self, name: &str, labels: &[&str]) -> Result<&mut Body> {
        check_name(name)?;
        self.items.push(Item::Block(Block {
            name: name.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            body: Body::new(),
        }));
        match self.items.last_mut() {
            Some(Item::Block(block)) => Ok(&mut block.body),
            _ => unreachable!("a block was just pushed"),
        }
    }

    /// Sets `name` to a raw expression. An existing attribute keeps its position.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIdentifier`] if `name` is not an identifier.
    pub fn set_attribute_raw(&mut self, name: &str, expr: Tokens) -> Result<()> {
        check_name(name)?;
        for item in &mut self.items {
            if let Item::Attribute { name: existing, expr: slot } = item {
                if existing == name {
                    *slot = expr;
                    return Ok(());
                }
            }
        }
        self.items.push(Item::Attribute {
            name: name.to_string(),
            expr,
        });
        Ok(())
    }

    /// Serializes `value` and sets it as the expression of `name`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIdentifier`] for a bad name, or any serializer error.
    /// The body is left unchanged on failure.
    pub fn set_attribute_value(
        &mut self,
        name: &str,
        value: &Value,
        options: &SerializerOptions,
    ) -> Result<()> {
        check_name(name)?;
        let mut serializer = Serializer::new(options.clone());
        serializer.serialize(value)?;
        self.set_attribute_raw(name, serializer.into_inner())
    }

    /// The expression tokens of attribute `name`, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Tokens> {
        self.items.iter().find_map(|item| match item {
            Item::Attribute { name: n, expr } if n == name => Some(expr),
            _ => None,
        })
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.items.iter().filter_map(|item| match item {
            Item::Block(block) => Some(block),
            Item::Attribute { .. } => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The full token stream of this body, one item per line.
    #[must_use]
    pub fn to_tokens(&self) -> Tokens {
        let mut toks = Tokens::new();
        self.append_tokens(&mut toks);
        toks
    }

    fn append_tokens(&self, toks: &mut Tokens) {
        for item in &self.items {
            match item {
                Item::Attribute { name, expr } => {
                    toks.push(Token::ident(name));
                    toks.push_kind(TokenKind::Equal);
                    toks.extend(expr.clone());
                    toks.push_kind(TokenKind::Newline);
                }
                Item::Block(block) => {
                    toks.push(Token::ident(&block.name));
                    for label in &block.labels {
                        toks.push_kind(TokenKind::QuoteOpen);
                        if !label.is_empty() {
                            toks.push(Token::new(TokenKind::QuotedLiteral, escape(label)));
                        }
                        toks.push_kind(TokenKind::QuoteClose);
                    }
                    toks.push_kind(TokenKind::BraceOpen);
                    toks.push_kind(TokenKind::Newline);
                    block.body.append_tokens(toks);
                    toks.push_kind(TokenKind::BraceClose);
                    toks.push_kind(TokenKind::Newline);
                }
            }
        }
    }

    /// Formats the body as canonical text.
    #[must_use]
    pub fn render(&self, options: &FormatOptions) -> String {
        format(&self.to_tokens(), options)
    }
}

fn check_name(name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(name.to_string()))
    }
}
