//! The nested map container and its typed accessors.
//!
//! A [`Document`] is a string-keyed map whose values are [`Value`]s. It is
//! the unit of both the serialized text and the in-memory structure: the
//! parser produces one, the writer consumes one, and everything a file
//! stores lives in one.
//!
//! Keys iterate in ascending order, which is exactly the order the writer
//! emits, so the same logical document always serializes to the same bytes.
//!
//! ## Typed access
//!
//! After parsing, every leaf is a string and every nested block is a map.
//! The `get_*` accessors reinterpret that loosely-typed data on the way
//! out:
//!
//! ```rust
//! use mapfile::from_str;
//!
//! let doc = from_str("name=Avery\nscores=[\n0=10\n1=20\n2=30\n]");
//!
//! assert_eq!(doc.get_string("name").unwrap(), "Avery");
//! assert_eq!(doc.get_list_of::<i64>("scores").unwrap(), vec![10, 20, 30]);
//! ```

use crate::error::{Error, Result};
use crate::storable::FromValue;
use crate::value::Value;
use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;

/// A string-keyed map of [`Value`]s, saved to and loaded from text.
///
/// Insertion order is irrelevant; iteration and serialization always use
/// ascending key order. Absence of data is absence of the key; a document
/// never stores [`Value::Absent`].
///
/// # Examples
///
/// ```rust
/// use mapfile::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.insert("name", "Avery");
/// doc.insert("level", 3);
///
/// assert_eq!(doc.get_string("name").unwrap(), "Avery");
/// assert_eq!(doc.get_integer("level").unwrap(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Document(BTreeMap<String, Value>);

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document(BTreeMap::new())
    }

    /// Inserts a key-value pair, returning the previous value for the key
    /// if there was one.
    ///
    /// Anything convertible into a [`Value`] is accepted; integers and
    /// booleans are stored as their decimal/text string form.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the document contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Iterates over the values in ascending key order.
    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    fn require(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns the value for `key` in its generic string form.
    ///
    /// A nested map still comes back as its diagnostic text form; this
    /// accessor never traverses into the value.
    pub fn get_string(&self, key: &str) -> Result<String> {
        Ok(self.require(key)?.to_string())
    }

    /// Returns the value for `key` parsed as a base-10 integer.
    pub fn get_integer(&self, key: &str) -> Result<i64> {
        let text = self.require(key)?.to_string();
        text.parse::<i64>()
            .map_err(|_| Error::format(&text, "an integer"))
    }

    /// Returns the value for `key` as a nested document.
    pub fn get_document(&self, key: &str) -> Result<&Document> {
        match self.require(key)? {
            Value::Map(doc) => Ok(doc),
            _ => Err(Error::type_mismatch(key, "a map")),
        }
    }

    /// Returns the value for `key` as an ordered sequence.
    ///
    /// A stored list is copied out as-is. A map is decoded by treating its
    /// keys as decimal indices: the result is as long as the largest index
    /// plus one, gaps are filled with [`Value::Absent`], and if two keys
    /// normalize to the same index the one later in key order wins. A set
    /// is copied in its iteration order. A key whose text does not parse
    /// as an index is an [`Error::Format`].
    pub fn get_list(&self, key: &str) -> Result<Vec<Value>> {
        match self.require(key)? {
            Value::List(elements) => Ok(elements.clone()),
            Value::Map(doc) => doc.decode_sequence(),
            Value::Set(elements) => Ok(elements.iter().cloned().collect()),
            _ => Err(Error::type_mismatch(key, "a list")),
        }
    }

    /// Returns the value for `key` as a set.
    ///
    /// A stored set is copied out as-is. A map is decoded by collecting
    /// only its values; the keys are discarded entirely. A list is copied
    /// with duplicates collapsing per set semantics.
    pub fn get_set(&self, key: &str) -> Result<BTreeSet<Value>> {
        match self.require(key)? {
            Value::Set(elements) => Ok(elements.clone()),
            Value::Map(doc) => Ok(doc.values().cloned().collect()),
            Value::List(elements) => Ok(elements.iter().cloned().collect()),
            _ => Err(Error::type_mismatch(key, "a set")),
        }
    }

    /// Returns the value for `key` converted to `T` through its
    /// [`FromValue`] implementation.
    ///
    /// Any failure raised by the conversion propagates unchanged.
    pub fn get_value<T: FromValue>(&self, key: &str) -> Result<T> {
        T::from_value(self.require(key)?)
    }

    /// Returns the value for `key` as a freshly built `Vec<T>`, every
    /// element converted through [`FromValue`].
    pub fn get_list_of<T: FromValue>(&self, key: &str) -> Result<Vec<T>> {
        self.get_list(key)?.iter().map(T::from_value).collect()
    }

    /// Returns the value for `key` as a freshly built `BTreeSet<T>`, every
    /// element converted through [`FromValue`].
    pub fn get_set_of<T: FromValue + Ord>(&self, key: &str) -> Result<BTreeSet<T>> {
        self.get_set(key)?.iter().map(T::from_value).collect()
    }

    /// Converts every entry to `T` and feeds the `(key, T)` pairs into
    /// `destination`.
    ///
    /// Stops at the first entry that fails to convert; pairs already fed
    /// in stay in the destination.
    pub fn copy_into<T, M>(&self, destination: &mut M) -> Result<()>
    where
        T: FromValue,
        M: Extend<(String, T)>,
    {
        for (key, value) in self.iter() {
            let item = T::from_value(value)?;
            destination.extend(std::iter::once((key.clone(), item)));
        }
        Ok(())
    }

    /// Decodes this document as an ordered sequence, treating keys as
    /// decimal indices.
    fn decode_sequence(&self) -> Result<Vec<Value>> {
        let mut elements = Vec::with_capacity(self.len());

        for (key, value) in self.iter() {
            let index: usize = key
                .trim()
                .parse()
                .map_err(|_| Error::format(key, "a list index"))?;
            if index >= elements.len() {
                elements.resize(index + 1, Value::Absent);
            }
            elements[index] = value.clone();
        }

        Ok(elements)
    }
}

/// Renders the diagnostic brace form, e.g. `{name=Avery, scores=[10, 20]}`.
///
/// This is not the serialized file form; use
/// [`to_string`](crate::to_string) for that.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

/// Builds a document from any iterator of key-value pairs, converting keys
/// to strings and values through `Into<Value>`.
///
/// ```rust
/// use mapfile::Document;
///
/// let doc: Document = [("x", 12), ("z", -3)].into_iter().collect();
/// assert_eq!(doc.get_integer("x").unwrap(), 12);
/// ```
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Document(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Document {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.insert("name", "Avery");
        doc.insert("level", 3);
        doc.insert(
            "scores",
            Value::List(vec![Value::from(10), Value::from(20), Value::from(30)]),
        );
        doc
    }

    #[test]
    fn keys_iterate_sorted() {
        let doc = sample();
        let keys: Vec<_> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["level", "name", "scores"]);
    }

    #[test]
    fn get_string_never_traverses() {
        let mut doc = Document::new();
        let mut inner = Document::new();
        inner.insert("x", 1);
        doc.insert("inner", inner);

        assert_eq!(doc.get_string("inner").unwrap(), "{x=1}");
    }

    #[test]
    fn get_integer_parses_leaves() {
        let doc = sample();
        assert_eq!(doc.get_integer("level").unwrap(), 3);
        assert!(matches!(
            doc.get_integer("name"),
            Err(Error::Format { .. })
        ));
        assert!(matches!(
            doc.get_integer("missing"),
            Err(Error::KeyNotFound(_))
        ));
    }

    #[test]
    fn get_document_rejects_leaves() {
        let doc = sample();
        assert!(matches!(
            doc.get_document("name"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn list_from_index_keyed_map() {
        let mut encoded = Document::new();
        encoded.insert("0", "a");
        encoded.insert("1", "b");
        encoded.insert("2", "c");

        let mut doc = Document::new();
        doc.insert("items", encoded);

        let items = doc.get_list("items").unwrap();
        assert_eq!(
            items,
            vec![Value::from("a"), Value::from("b"), Value::from("c")]
        );
    }

    #[test]
    fn sparse_list_pads_with_absent() {
        let mut encoded = Document::new();
        encoded.insert("0", "a");
        encoded.insert("2", "c");

        let mut doc = Document::new();
        doc.insert("items", encoded);

        let items = doc.get_list("items").unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Value::from("a"));
        assert!(items[1].is_absent());
        assert_eq!(items[2], Value::from("c"));
    }

    #[test]
    fn list_indices_past_nine_decode_numerically() {
        // Key order is lexicographic ("10" < "2") but decoding goes by the
        // parsed index, so long lists come back in sequence order.
        let mut encoded = Document::new();
        for i in 0..12 {
            encoded.insert(i.to_string(), i.to_string());
        }
        let mut doc = Document::new();
        doc.insert("items", encoded);

        let items = doc.get_list_of::<i64>("items").unwrap();
        assert_eq!(items, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn non_numeric_index_is_a_format_error() {
        let mut encoded = Document::new();
        encoded.insert("first", "a");
        let mut doc = Document::new();
        doc.insert("items", encoded);

        assert!(matches!(doc.get_list("items"), Err(Error::Format { .. })));
    }

    #[test]
    fn list_from_scalar_is_a_type_mismatch() {
        let doc = sample();
        assert!(matches!(
            doc.get_list("name"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn set_from_index_keyed_map_discards_keys() {
        let mut encoded = Document::new();
        encoded.insert("7", "a");
        encoded.insert("9", "b");
        encoded.insert("12", "a");

        let mut doc = Document::new();
        doc.insert("tags", encoded);

        let tags = doc.get_set("tags").unwrap();
        let expected: BTreeSet<Value> = [Value::from("a"), Value::from("b")].into_iter().collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn copy_into_populates_a_map() {
        let mut doc = Document::new();
        doc.insert("a", 1);
        doc.insert("b", 2);

        let mut destination = std::collections::HashMap::new();
        doc.copy_into::<i64, _>(&mut destination).unwrap();
        assert_eq!(destination["a"], 1);
        assert_eq!(destination["b"], 2);
    }

    #[test]
    fn copy_into_stops_on_first_failure() {
        let mut doc = Document::new();
        doc.insert("a", 1);
        doc.insert("b", "not a number");

        let mut destination = std::collections::HashMap::new();
        assert!(doc.copy_into::<i64, _>(&mut destination).is_err());
        // "a" converted before "b" failed and stays in place.
        assert_eq!(destination.get("a"), Some(&1));
    }

    #[test]
    fn from_iterator_converts_keys_and_values() {
        let doc: Document = [(1, "one"), (2, "two")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(doc.get_string("1").unwrap(), "one");
    }
}
