//! Escaping of text for string literals and identifiers.
//!
//! Both operations work on UTF-16 code units, the string model of the target language:
//! a character outside the Basic Multilingual Plane is escaped as its surrogate pair.

use std::fmt::Write;

/// The characters that have a dedicated two-character escape, with their escape text
pub const ESCAPE_TABLE: [(char, &str); 11] = [
    ('\'', "\\'"),
    ('"', "\\\""),
    ('\\', "\\\\"),
    ('\0', "\\0"),
    ('\u{07}', "\\a"),
    ('\u{08}', "\\b"),
    ('\u{0C}', "\\f"),
    ('\n', "\\n"),
    ('\r', "\\r"),
    ('\t', "\\t"),
    ('\u{0B}', "\\v"),
];

/// The dedicated escape of `c`, if it has one
#[must_use]
pub fn canonical_escape(c: char) -> Option<&'static str> {
    ESCAPE_TABLE
        .iter()
        .find(|(raw, _)| *raw == c)
        .map(|(_, escaped)| *escaped)
}

/// Whether `c` is in the printable ASCII range
#[must_use]
pub fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

fn push_code_units(out: &mut String, c: char, prefix: &str) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        // writing into a String cannot fail
        let _ = write!(out, "{prefix}{unit:04X}");
    }
}

/// Escape `text` for embedding between double quotes.
///
/// Characters with a dedicated escape use it; other characters outside printable ASCII that
/// are not in `allowed` become `\uXXXX`.
///
/// # Examples
///
/// ```rust
/// use attrscope::render::escape_string;
///
/// assert_eq!(escape_string("a\tb", ""), "a\\tb");
/// assert_eq!(escape_string("é", ""), "\\u00E9");
/// assert_eq!(escape_string("é", "é"), "é");
/// ```
#[must_use]
pub fn escape_string(text: &str, allowed: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(escaped) = canonical_escape(c) {
            out.push_str(escaped);
        } else if !is_printable_ascii(c) && !allowed.contains(c) {
            push_code_units(&mut out, c, "\\u");
        } else {
            out.push(c);
        }
    }
    out
}

/// Turn an arbitrary label into a valid identifier.
///
/// `*` becomes `Ptr`, characters outside printable ASCII become `uXXXX` and any other
/// character that is not a letter, digit or allow-listed becomes `_`. With
/// `allow_scope_qualifiers`, `.` and `:` are kept. The result never starts with a digit and
/// is never empty.
///
/// # Examples
///
/// ```rust
/// use attrscope::render::to_identifier;
///
/// assert_eq!(to_identifier("int*", false, ""), "intPtr");
/// assert_eq!(to_identifier("<Main>b__0", false, ""), "_Main_b__0");
/// assert_eq!(to_identifier("9lives", false, ""), "_9lives");
/// assert_eq!(to_identifier("System.Object", true, ""), "System.Object");
/// ```
#[must_use]
pub fn to_identifier(label: &str, allow_scope_qualifiers: bool, allowed: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if c == '*' {
            out.push_str("Ptr");
        } else if allowed.contains(c) {
            out.push(c);
        } else if !is_printable_ascii(c) {
            push_code_units(&mut out, c, "u");
        } else if c.is_ascii_alphanumeric()
            || c == '_'
            || (allow_scope_qualifiers && (c == '.' || c == ':'))
        {
            out.push(c);
        } else {
            out.push('_');
        }
    }

    let starts_valid = out
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || allowed.contains(c));
    if !starts_valid {
        out.insert(0, '_');
    }
    out
}
