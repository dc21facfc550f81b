//! Property-based tests for the round-trip guarantees, across generated
//! keys, values, and document shapes.

use mapfile::escape::{escape, unescape};
use mapfile::{from_str, to_string, Document, Value};
use proptest::prelude::*;

/// Text without a bare carriage return (`\r` flavors of line breaks are
/// normalized to one logical newline) and not trimming to a lone `[`
/// (only the exact one-character string is escaped, so whitespace around
/// a bare bracket reads back as a block opener). Both sit outside the
/// strict round-trip domain.
fn text() -> impl Strategy<Value = String> {
    "[^\r]*".prop_filter("outside the round-trip domain", |s| s.trim() != "[")
}

fn document(depth: u32) -> impl Strategy<Value = Document> {
    let leaf = prop::collection::btree_map(text(), text(), 0..6)
        .prop_map(|entries| entries.into_iter().collect::<Document>());

    leaf.prop_recursive(depth, 24, 6, |inner| {
        prop::collection::btree_map(
            text(),
            prop_oneof![
                text().prop_map(Value::from),
                inner.prop_map(Value::Map),
            ],
            0..6,
        )
        .prop_map(|entries| entries.into_iter().collect::<Document>())
    })
}

proptest! {
    #[test]
    fn escape_round_trips(s in text()) {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn escaped_text_is_line_safe(s in text()) {
        let encoded = escape(&s);
        prop_assert!(!encoded.contains('\n'));
        prop_assert!(!encoded.contains('='));
    }

    #[test]
    fn escaping_is_injective(a in text(), b in text()) {
        if a != b {
            prop_assert_ne!(escape(&a), escape(&b));
        }
    }

    #[test]
    fn document_round_trips(doc in document(3)) {
        let rendered = to_string(&doc).unwrap();
        prop_assert_eq!(from_str(&rendered), doc);
    }

    #[test]
    fn output_is_deterministic(doc in document(2)) {
        prop_assert_eq!(to_string(&doc).unwrap(), to_string(&doc.clone()).unwrap());
    }

    #[test]
    fn list_round_trips(items in prop::collection::vec(text(), 0..12)) {
        let mut doc = Document::new();
        let list: Value = items.iter().map(|s| Value::from(s.as_str())).collect();
        doc.insert("items", list);

        let back = from_str(&to_string(&doc).unwrap());
        let decoded = back.get_list_of::<String>("items").unwrap();
        prop_assert_eq!(decoded, items);
    }

    #[test]
    fn integer_list_round_trips(numbers in prop::collection::vec(any::<i64>(), 0..12)) {
        let mut doc = Document::new();
        let list: Value = numbers.iter().copied().map(Value::from).collect();
        doc.insert("numbers", list);

        let back = from_str(&to_string(&doc).unwrap());
        prop_assert_eq!(back.get_list_of::<i64>("numbers").unwrap(), numbers);
    }

    #[test]
    fn set_round_trips(items in prop::collection::btree_set(text(), 0..12)) {
        let set: std::collections::BTreeSet<Value> =
            items.iter().map(|s| Value::from(s.as_str())).collect();
        let mut doc = Document::new();
        doc.insert("items", set);

        let back = from_str(&to_string(&doc).unwrap());
        let decoded = back.get_set_of::<String>("items").unwrap();
        prop_assert_eq!(decoded, items);
    }
}
