//! # mapfile
//!
//! A line-oriented, hand-editable text format for nested string maps, and
//! the typed access layer for getting real data back out of it.
//!
//! ## The format
//!
//! One entry per line, `key=value`; a nested map opens with `key=[` and
//! closes with a bare `]`. Depth is implicit in line order, so there is no
//! indentation to keep in sync, which is what makes the files safe to edit
//! by hand:
//!
//! ```text
//! name=Avery
//! scores=[
//! 0=10
//! 1=20
//! 2=30
//! ]
//! ```
//!
//! Keys are written in ascending order, so the same logical document always
//! produces byte-identical text and diffs stay small. Ordered sequences and
//! sets are stored as maps keyed by decimal indices; `=`, newlines, and the
//! escape character itself are escaped so any string survives a round trip.
//!
//! ## Key Properties
//!
//! - **Tolerant of hand edits**: parsing is total; malformed lines are
//!   skipped and a truncated file yields the entries it still has
//! - **Self-describing**: a file is readable without its schema; every leaf
//!   is a string until an accessor says otherwise
//! - **Deterministic**: sorted keys, fixed escaping, stable output
//! - **Typed on the way out**: integers, lists, sets, maps, and
//!   user-defined record types are recovered through explicit accessors
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use mapfile::{from_str, to_string, Document, Value};
//!
//! let mut doc = Document::new();
//! doc.insert("name", "Avery");
//! doc.insert("scores", Value::List(vec![Value::from(10), Value::from(20)]));
//!
//! let text = to_string(&doc).unwrap();
//! assert_eq!(text, "name=Avery\nscores=[\n0=10\n1=20\n]");
//!
//! let back = from_str(&text);
//! assert_eq!(back.get_string("name").unwrap(), "Avery");
//! assert_eq!(back.get_list_of::<i64>("scores").unwrap(), vec![10, 20]);
//! ```
//!
//! ## Storing your own types
//!
//! A user type participates by implementing [`Storable`] (reduce to a plain
//! [`Document`]) and [`FromValue`] (rebuild from a stored [`Value`]); see
//! the [`storable`] module docs for a worked example. The stored file never
//! records the type; readers name it at the access site via
//! [`Document::get_value`], [`Document::get_list_of`],
//! [`Document::get_set_of`], or [`Document::copy_into`].
//!
//! ## Reading and writing files
//!
//! The codec itself is pure: lines in, lines out. [`read_file`] and
//! [`write_file`] cover the common case and wrap any I/O failure as
//! [`Error::Io`]; [`from_reader`] and [`to_writer`] do the same for
//! arbitrary streams.

pub mod document;
pub mod error;
pub mod escape;
pub mod macros;
pub mod options;
pub mod parser;
pub mod storable;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use options::LineEnding;
pub use storable::{FromValue, Storable};
pub use value::Value;

use std::fs;
use std::io;
use std::path::Path;

/// Converts a document into its lines, in ascending key order.
///
/// # Errors
///
/// Fails only if the document tree contains a value with no line encoding
/// (an absent list slot).
pub fn to_lines(document: &Document) -> Result<Vec<String>> {
    writer::lines_from_document(document)
}

/// Renders a document as a single string with `\n` line terminators.
///
/// The output carries no trailing newline.
///
/// # Examples
///
/// ```rust
/// use mapfile::{to_string, Document};
///
/// let mut doc = Document::new();
/// doc.insert("b", "2");
/// doc.insert("a", "1");
/// assert_eq!(to_string(&doc).unwrap(), "a=1\nb=2");
/// ```
///
/// # Errors
///
/// See [`to_lines`].
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with(document, LineEnding::default())
}

/// Renders a document as a single string with the given line terminator.
///
/// # Errors
///
/// See [`to_lines`].
pub fn to_string_with(document: &Document, ending: LineEnding) -> Result<String> {
    Ok(to_lines(document)?.join(ending.as_str()))
}

/// Parses text into a document.
///
/// Parsing never fails: unrecognizable lines are skipped and an
/// unterminated nested block ends with the input. The result contains only
/// string leaves and nested documents.
#[must_use]
pub fn from_str(text: &str) -> Document {
    parser::parse_str(text)
}

/// Parses a sequence of lines into a document.
#[must_use]
pub fn from_lines<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parser::parse_lines(lines)
}

/// Writes a document to `writer` as text.
///
/// # Errors
///
/// Fails if the document cannot be encoded or the writer reports an I/O
/// failure; the latter is wrapped as [`Error::Io`].
pub fn to_writer<W: io::Write>(writer: W, document: &Document) -> Result<()> {
    to_writer_with(writer, document, LineEnding::default())
}

/// Writes a document to `writer` with the given line terminator.
///
/// # Errors
///
/// See [`to_writer`].
pub fn to_writer_with<W: io::Write>(
    mut writer: W,
    document: &Document,
    ending: LineEnding,
) -> Result<()> {
    let text = to_string_with(document, ending)?;
    writer.write_all(text.as_bytes()).map_err(Error::io)
}

/// Reads a document from `reader`.
///
/// # Examples
///
/// ```rust
/// use mapfile::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"name=Avery")).unwrap();
/// assert_eq!(doc.get_string("name").unwrap(), "Avery");
/// ```
///
/// # Errors
///
/// Fails only on an I/O failure or invalid UTF-8, wrapped as
/// [`Error::Io`]; the parse itself is total.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(Error::io)?;
    Ok(from_str(&text))
}

/// Reads a document from a UTF-8 text file.
///
/// The previous in-memory content plays no part: the result is exactly
/// what the file holds.
///
/// # Errors
///
/// Fails only on an I/O failure, wrapped as [`Error::Io`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(Error::io)?;
    Ok(from_str(&text))
}

/// Writes a document to a UTF-8 text file, replacing its content.
///
/// Uses the platform-native line ending, since these files are meant to be
/// opened in an editor.
///
/// # Errors
///
/// Fails if the document cannot be encoded or on an I/O failure, wrapped
/// as [`Error::Io`].
pub fn write_file<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    let text = to_string_with(document, LineEnding::native())?;
    fs::write(path, text).map_err(Error::io)
}
