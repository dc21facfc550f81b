//! Line emission.
//!
//! The writer turns a [`Document`] into the ordered list of lines that make
//! up the text form. Entries are emitted in ascending key order, one scalar
//! per line; a nested map, list, or set becomes an opening `key=[` line,
//! the nested value's own lines, and a closing `]` line. Depth is implicit
//! in line order; the structural lines carry no indentation or escaping.
//!
//! ```rust
//! use mapfile::{writer::lines_from_document, Document, Value};
//!
//! let mut doc = Document::new();
//! doc.insert("name", "Avery");
//! doc.insert("scores", Value::List(vec![Value::from(10), Value::from(20)]));
//!
//! let lines = lines_from_document(&doc).unwrap();
//! assert_eq!(lines, ["name=Avery", "scores=[", "0=10", "1=20", "]"]);
//! ```

use crate::error::{Error, Result};
use crate::escape::escape;
use crate::value::Value;
use crate::Document;

/// Converts a document into lines, one entry per key in ascending order.
///
/// The same logical document always yields the same lines, regardless of
/// the order it was built in.
pub fn lines_from_document(document: &Document) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(document.len());
    for (key, value) in document.iter() {
        push_entry(&mut lines, key, value)?;
    }
    Ok(lines)
}

/// Converts a sequence of elements into lines, keyed by their decimal
/// indices from 0.
///
/// The output reads back as a map; decode it with
/// [`Document::get_list`](crate::Document::get_list) or
/// [`Document::get_set`](crate::Document::get_set).
pub fn lines_from_sequence<'a, I>(elements: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut lines = Vec::new();
    for (index, element) in elements.into_iter().enumerate() {
        push_entry(&mut lines, &index.to_string(), element)?;
    }
    Ok(lines)
}

/// Emits one entry. Scalars take a single line; containers recurse between
/// their `key=[` and `]` delimiter lines.
fn push_entry(lines: &mut Vec<String>, key: &str, value: &Value) -> Result<()> {
    match value {
        Value::String(text) => {
            lines.push(format!("{}={}", escape(key), escape(text)));
        }
        Value::Map(document) => {
            lines.push(format!("{}=[", escape(key)));
            lines.extend(lines_from_document(document)?);
            lines.push("]".to_string());
        }
        Value::List(elements) => {
            lines.push(format!("{}=[", escape(key)));
            lines.extend(lines_from_sequence(elements)?);
            lines.push("]".to_string());
        }
        Value::Set(elements) => {
            lines.push(format!("{}=[", escape(key)));
            lines.extend(lines_from_sequence(elements)?);
            lines.push("]".to_string());
        }
        Value::Absent => return Err(Error::Unencodable("an absent list slot")),
    }
    Ok(())
}
