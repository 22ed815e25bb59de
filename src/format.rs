//! Canonical text layout for token streams.
//!
//! [`format`] decides everything the tokens leave open: spaces between
//! tokens, indentation, and alignment of `=` in runs of attributes.
//!
//! - Lines break exactly at newline tokens.
//! - Brackets opened on the same line share one indentation level, so
//!   `[{` indents its contents once.
//! - A line that starts by closing brackets is dedented; `},` followed by
//!   `{` on the next line keeps both at the outer level.
//! - Consecutive lines at the same indentation that each have an `=` outside
//!   any bracket on that line are padded so their `=` signs line up.
//!
//! ```rust
//! use hcl_tokens::{format, hcl, to_tokens, FormatOptions};
//!
//! let tokens = to_tokens(&hcl!({ "name" => "FOO", "value" => "bar" })).unwrap();
//! let text = format::format(&tokens, &FormatOptions::default());
//! assert_eq!(text, "{\n  name  = \"FOO\",\n  value = \"bar\"\n}\n");
//! ```

use crate::{FormatOptions, Token, TokenKind, Tokens};

/// Brackets opened on one line, of which `closed` have been closed since.
struct Level {
    open: usize,
    closed: usize,
}

struct Line {
    indent: usize,
    text: String,
    /// Byte offset in `text` where ` =` starts, for top-level `=` only.
    equals_at: Option<usize>,
}

/// Renders `tokens` as text. Non-empty output ends with a single newline.
#[must_use]
pub fn format(tokens: &Tokens, options: &FormatOptions) -> String {
    let mut levels: Vec<Level> = Vec::new();
    let mut lines: Vec<Line> = tokens
        .split(|t| t.kind == TokenKind::Newline)
        .map(|line| layout_line(line, &mut levels))
        .collect();

    while lines.last().map_or(false, |l| l.text.is_empty()) {
        lines.pop();
    }

    if options.align_equals {
        align_equals(&mut lines);
    }

    let mut out = String::new();
    for line in &lines {
        if !line.text.is_empty() {
            out.push_str(&" ".repeat(line.indent * options.indent));
            out.push_str(&line.text);
        }
        out.push('\n');
    }
    out
}

fn close_one(levels: &mut Vec<Level>) {
    if let Some(top) = levels.last_mut() {
        top.closed += 1;
        if top.closed >= top.open {
            levels.pop();
        }
    }
}

fn layout_line(line: &[Token], levels: &mut Vec<Level>) -> Line {
    let leading = line.iter().take_while(|t| t.kind.is_close()).count();
    for _ in 0..leading {
        close_one(levels);
    }

    let partial = levels.last().map_or(false, |l| l.closed > 0);
    let indent = levels.len() - usize::from(partial);

    let mut pending = 0usize;
    let mut depth = 0i64;
    let mut text = String::new();
    let mut equals_at = None;
    let mut prev: Option<&Token> = None;

    for (i, token) in line.iter().enumerate() {
        if let Some(p) = prev {
            if needs_space(p, token) {
                if token.kind == TokenKind::Equal && depth == 0 && equals_at.is_none() {
                    equals_at = Some(text.len());
                }
                text.push(' ');
            }
        }
        text.push_str(&token.text());
        prev = Some(token);

        if i < leading {
            continue;
        }
        if token.kind.is_open() {
            pending += 1;
            depth += 1;
        } else if token.kind.is_close() {
            depth -= 1;
            if pending > 0 {
                pending -= 1;
            } else {
                close_one(levels);
            }
        }
    }

    if pending > 0 {
        match levels.last_mut() {
            Some(top) if top.closed > 0 => {
                let reopened = pending.min(top.closed);
                top.closed -= reopened;
                if pending > reopened {
                    levels.push(Level {
                        open: pending - reopened,
                        closed: 0,
                    });
                }
            }
            _ => levels.push(Level {
                open: pending,
                closed: 0,
            }),
        }
    }

    Line {
        indent,
        text,
        equals_at,
    }
}

fn needs_space(prev: &Token, next: &Token) -> bool {
    use TokenKind::*;

    match (prev.kind, next.kind) {
        (_, Comma) | (_, BracketClose) | (_, QuoteClose) => false,
        (BracketOpen, _) | (QuoteOpen, _) | (QuotedLiteral, _) => false,
        (p, BraceClose) => !p.is_close(),
        (p, BraceOpen) => !p.is_open(),
        _ => true,
    }
}

fn align_equals(lines: &mut [Line]) {
    let mut start = 0;
    while start < lines.len() {
        let mut end = start;
        while end < lines.len()
            && lines[end].equals_at.is_some()
            && lines[end].indent == lines[start].indent
        {
            end += 1;
        }

        if end > start + 1 {
            let width = |line: &Line| line.equals_at.map_or(0, |at| line.text[..at].chars().count());
            let max = lines[start..end].iter().map(width).max().unwrap_or(0);
            for line in &mut lines[start..end] {
                let pad = max - width(line);
                if let Some(at) = line.equals_at {
                    line.text.insert_str(at, &" ".repeat(pad));
                }
            }
        }

        start = end.max(start + 1);
    }
}
