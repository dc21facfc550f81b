//! The contract user-defined types implement to live in a map file.
//!
//! The format stores nothing but strings and nested maps, so a richer type
//! participates by reducing itself to a plain [`Document`] on the way out
//! ([`Storable`]) and rebuilding itself from a stored [`Value`] on the way
//! back ([`FromValue`]). The type of the stored object is not recorded;
//! the caller names the expected type when reading, via
//! [`Document::get_value`](crate::Document::get_value) and the typed
//! collection accessors.
//!
//! ```rust
//! use mapfile::{Document, Error, FromValue, Result, Storable, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct Waypoint {
//!     x: i64,
//!     z: i64,
//! }
//!
//! impl Storable for Waypoint {
//!     fn to_document(&self) -> Document {
//!         let mut doc = Document::new();
//!         doc.insert("x", self.x);
//!         doc.insert("z", self.z);
//!         doc
//!     }
//! }
//!
//! impl FromValue for Waypoint {
//!     fn from_value(value: &Value) -> Result<Self> {
//!         let doc = value
//!             .as_map()
//!             .ok_or_else(|| Error::construction::<Waypoint>("expected a map"))?;
//!         Ok(Waypoint {
//!             x: doc.get_integer("x")?,
//!             z: doc.get_integer("z")?,
//!         })
//!     }
//! }
//!
//! let point = Waypoint { x: 12, z: -3 };
//! let mut doc = Document::new();
//! doc.insert("home", point.to_value());
//!
//! let restored: Waypoint = doc.get_value("home").unwrap();
//! assert_eq!(restored, point);
//! ```

use crate::error::{Error, Result};
use crate::value::Value;
use crate::Document;

/// Reduction to the plain nested-map storage form.
///
/// Implementations only describe their own fields; nesting falls out
/// naturally when a field's value is itself built with `to_document` or
/// `to_value`.
pub trait Storable {
    /// Returns a plain document describing this value. The document is
    /// written out, not retained.
    fn to_document(&self) -> Document;

    /// Wraps [`to_document`](Storable::to_document) as a [`Value`] for
    /// insertion into a document or a collection.
    fn to_value(&self) -> Value {
        Value::Map(self.to_document())
    }
}

/// Construction from a stored value, a map or a string, as the
/// implementation chooses.
///
/// Failures raised here are propagated unchanged by the typed accessors;
/// [`Error::construction`] is the conventional way to reject a value of
/// the wrong shape.
pub trait FromValue: Sized {
    /// Builds `Self` from the stored value.
    fn from_value(value: &Value) -> Result<Self>;
}

/// The generic string form of any value, matching
/// [`Document::get_string`](crate::Document::get_string).
impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.to_string())
    }
}

/// Base-10 parse of the value's string form, matching
/// [`Document::get_integer`](crate::Document::get_integer).
impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        let text = value.to_string();
        text.parse::<i64>()
            .map_err(|_| Error::format(&text, "an integer"))
    }
}

impl FromValue for Document {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_map()
            .cloned()
            .ok_or_else(|| Error::construction::<Document>("expected a map"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label(String);

    impl Storable for Label {
        fn to_document(&self) -> Document {
            let mut doc = Document::new();
            doc.insert("text", self.0.as_str());
            doc
        }
    }

    impl FromValue for Label {
        fn from_value(value: &Value) -> Result<Self> {
            let doc = value
                .as_map()
                .ok_or_else(|| Error::construction::<Label>("expected a map"))?;
            Ok(Label(doc.get_string("text")?))
        }
    }

    #[test]
    fn to_value_wraps_the_document() {
        let label = Label("hi".to_string());
        assert_eq!(label.to_value().as_map(), Some(&label.to_document()));
    }

    #[test]
    fn string_from_value_uses_the_generic_form() {
        assert_eq!(String::from_value(&Value::from("x")).unwrap(), "x");
        let mut doc = Document::new();
        doc.insert("a", "1");
        assert_eq!(String::from_value(&Value::Map(doc)).unwrap(), "{a=1}");
    }

    #[test]
    fn integer_from_value_parses_or_fails() {
        assert_eq!(i64::from_value(&Value::from("-42")).unwrap(), -42);
        assert!(matches!(
            i64::from_value(&Value::from("nope")),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn document_from_value_requires_a_map() {
        assert!(matches!(
            Document::from_value(&Value::from("leaf")),
            Err(Error::Construction { .. })
        ));
    }

    #[test]
    fn label_round_trips_through_get_value() {
        let mut doc = Document::new();
        doc.insert("tag", Label("alpha".to_string()).to_value());
        let back: Label = doc.get_value("tag").unwrap();
        assert_eq!(back.0, "alpha");
    }
}
