//! Line parsing.
//!
//! The parser rebuilds a [`Document`] from the flat line stream the writer
//! produces. It is deliberately total: these files get edited by hand, so
//! a line that doesn't parse is skipped rather than fatal, and a block
//! whose terminator never arrives simply ends with the input.
//!
//! Per line:
//!
//! - a trimmed `]` closes the innermost open block; exactly one level,
//!   with nesting resolved by the recursion's call/return discipline, not
//!   by counting brackets;
//! - a line with no `=` is inert and skipped;
//! - otherwise the line splits at the first `=`; a trimmed `[` remainder
//!   opens a nested block, anything else is an unescaped string leaf.
//!
//! ```rust
//! use mapfile::parser::parse_str;
//!
//! let doc = parse_str("name=Avery\npos=[\nx=12\n]");
//! assert_eq!(doc.get_string("name").unwrap(), "Avery");
//! assert_eq!(doc.get_document("pos").unwrap().get_integer("x").unwrap(), 12);
//! ```

use crate::escape::unescape;
use crate::value::Value;
use crate::Document;

/// Parses a complete text into a document.
///
/// Lines may be `\n`- or `\r\n`-terminated. The result contains only
/// string leaves and nested documents.
#[must_use]
pub fn parse_str(text: &str) -> Document {
    parse_lines(text.lines())
}

/// Parses an already-split sequence of lines into a document.
#[must_use]
pub fn parse_lines<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    parse_block(&mut lines)
}

/// Consumes lines until the block's terminator or the end of input.
///
/// The iterator is shared down the recursion so a nested call leaves the
/// cursor just past its own terminator.
fn parse_block<I, S>(lines: &mut I) -> Document
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = Document::new();

    while let Some(line) = lines.next() {
        let line = line.as_ref();

        if line.trim() == "]" {
            break;
        }

        let Some(split) = line.find('=') else {
            continue;
        };

        let key = unescape(&line[..split]);
        let rest = &line[split + 1..];

        if rest.trim() == "[" {
            let nested = parse_block(lines);
            document.insert(key, nested);
        } else {
            document.insert(key, Value::String(unescape(rest)));
        }
    }

    document
}
