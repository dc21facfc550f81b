//! Escaping for single-line storage.
//!
//! Keys and scalar values are stored one entry per line as `key=value`, so
//! any text placed on a line must not contain a raw `=` or a line
//! terminator, and must not be mistaken for the structural `[` token. This
//! module provides the reversible transformation that makes arbitrary text
//! line-safe.
//!
//! The escape marker is `\`:
//!
//! | original | encoded |
//! |---|---|
//! | `\` | `\\` |
//! | line terminator | `\n` |
//! | `=` | `\-` |
//! | the one-character string `[` | `\[` |
//!
//! ```rust
//! use mapfile::escape::{escape, unescape};
//!
//! let encoded = escape("key=value");
//! assert_eq!(encoded, "key\\-value");
//! assert_eq!(unescape(&encoded), "key=value");
//! ```

/// The reserved escape character.
pub const MARKER: char = '\\';

/// Escapes `text` so it can occupy (part of) a single line.
///
/// `\r\n`, `\n`, and a bare `\r` are all treated as one logical newline and
/// encoded as `\n`; the distinction between them is not preserved.
#[must_use]
pub fn escape(text: &str) -> String {
    // A bare "[" would read back as a block opener, so it alone gets the
    // marker prefix. Longer text starting with '[' is unambiguous.
    if text == "[" {
        return "\\[".to_string();
    }

    text.replace(MARKER, "\\\\")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\n")
        .replace('=', "\\-")
}

/// Reverses [`escape`].
///
/// The input is scanned once, left to right. A marker followed by `n`
/// becomes a newline and a marker followed by `-` becomes `=`. A marker
/// followed by any other character yields that character alone, which both
/// collapses a doubled marker back to one marker and drops a stray marker
/// in hand-edited input. A trailing lone marker is dropped. Because the
/// scan never revisits produced output, expansions cannot be re-escaped.
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != MARKER {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('-') => out.push('='),
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(text: &str) {
        assert_eq!(unescape(&escape(text)), text, "for input {text:?}");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape("plain text"), "plain text");
        assert_eq!(unescape("plain text"), "plain text");
    }

    #[test]
    fn equals_sign_is_encoded() {
        assert_eq!(escape("a=b"), "a\\-b");
        roundtrip("a=b");
        roundtrip("==");
    }

    #[test]
    fn newlines_are_encoded() {
        assert_eq!(escape("two\nlines"), "two\\nlines");
        roundtrip("two\nlines");
        roundtrip("\n");
    }

    #[test]
    fn crlf_collapses_to_one_logical_newline() {
        assert_eq!(escape("two\r\nlines"), "two\\nlines");
        assert_eq!(unescape("two\\nlines"), "two\nlines");
    }

    #[test]
    fn marker_is_doubled() {
        assert_eq!(escape("C:\\temp"), "C:\\\\temp");
        roundtrip("C:\\temp");
        roundtrip("\\");
        roundtrip("\\\\");
    }

    #[test]
    fn marker_before_n_survives() {
        // "\n" as two literal characters must not come back as a newline.
        roundtrip("\\n");
        roundtrip("\\-");
    }

    #[test]
    fn lone_open_bracket_is_escaped() {
        assert_eq!(escape("["), "\\[");
        assert_eq!(unescape("\\["), "[");
    }

    #[test]
    fn longer_bracket_text_is_not_escaped() {
        assert_eq!(escape("[x]"), "[x]");
        assert_eq!(escape("]"), "]");
    }

    #[test]
    fn stray_marker_is_dropped() {
        assert_eq!(unescape("a\\xb"), "axb");
        assert_eq!(unescape("dangling\\"), "dangling");
    }

    #[test]
    fn mixed_specials() {
        roundtrip("a=b\nc\\d");
        roundtrip("=\\n=");
    }

    #[test]
    fn empty_string() {
        roundtrip("");
    }
}
