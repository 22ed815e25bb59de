//! Escaping of quoted string literal bodies.
//!
//! [`escape`] turns arbitrary text into the bytes that sit between the opening
//! and closing quote tokens. The rules, applied per scalar value:
//!
//! | input | output |
//! |---|---|
//! | newline, CR, tab | `\n`, `\r`, `\t` |
//! | `"` and `\` | `\"` and `\\` |
//! | `$` or `%` directly before `{` | doubled (`$${`, `%%{`) so no template starts |
//! | other non-printable | `\uXXXX` or `\UXXXXXXXX`, lowercase hex |
//! | anything else | unchanged UTF-8 |
//!
//! ```rust
//! use hcl_tokens::escape;
//!
//! assert_eq!(escape("a${b}"), b"a$${b}");
//! assert_eq!(escape("100%{x}"), b"100%%{x}");
//! assert_eq!(escape("say \"hi\"\n"), b"say \\\"hi\\\"\\n");
//! ```

use unicode_general_category::{get_general_category, GeneralCategory};

/// Escapes `s` for use inside a quoted literal. Empty input gives empty output.
#[must_use]
pub fn escape(s: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '$' | '%' => {
                buf.push(ch as u8);
                if chars.peek() == Some(&'{') {
                    // doubled introducer escapes the template sequence
                    buf.push(ch as u8);
                }
            }
            _ if !is_printable(ch) => {
                let code = ch as u32;
                let escaped = if code < 0x1_0000 {
                    format!("\\u{:04x}", code)
                } else {
                    format!("\\U{:08x}", code)
                };
                buf.extend_from_slice(escaped.as_bytes());
            }
            _ => {
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }

    buf
}

/// Escapes `s` and returns the result as a `String`.
#[must_use]
pub fn escape_to_string(s: &str) -> String {
    // escape() only ever emits ASCII escapes and whole UTF-8 sequences
    String::from_utf8_lossy(&escape(s)).into_owned()
}

/// Whether `ch` has a visible glyph or is the ASCII space.
///
/// Letters, marks, numbers, punctuation and symbols are printable. Every
/// other general category (controls, format characters, separators other
/// than U+0020, private use, surrogates and unassigned code points,
/// noncharacters included) is not.
#[must_use]
pub fn is_printable(ch: char) -> bool {
    use GeneralCategory::*;

    if ch == ' ' {
        return true;
    }
    matches!(
        get_general_category(ch),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
            | DecimalNumber
            | LetterNumber
            | OtherNumber
            | ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}
