//! Persist user-defined record types through the storable contract.
//!
//! Run with: `cargo run --example typed_records`

use mapfile::{from_str, to_string, Document, Error, FromValue, Result, Storable, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
struct Waypoint {
    x: i64,
    z: i64,
    region: String,
}

impl Storable for Waypoint {
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("x", self.x);
        doc.insert("z", self.z);
        doc.insert("region", self.region.as_str());
        doc
    }
}

impl FromValue for Waypoint {
    fn from_value(value: &Value) -> Result<Self> {
        let doc = value
            .as_map()
            .ok_or_else(|| Error::construction::<Waypoint>("expected a map"))?;
        Ok(Waypoint {
            x: doc.get_integer("x")?,
            z: doc.get_integer("z")?,
            region: doc.get_string("region")?,
        })
    }
}

fn main() {
    // Save a registry of named waypoints.
    let mut saved = Document::new();
    saved.insert(
        "avery",
        Waypoint {
            x: 12,
            z: -3,
            region: "meadow".to_string(),
        }
        .to_value(),
    );
    saved.insert(
        "blake",
        Waypoint {
            x: -40,
            z: 9,
            region: "ridge".to_string(),
        }
        .to_value(),
    );

    let text = to_string(&saved).expect("plain documents always encode");
    println!("--- stored form ---\n{text}\n");

    // Load it back into a typed map; the file never records the type, the
    // reader names it here.
    let mut registry: HashMap<String, Waypoint> = HashMap::new();
    from_str(&text)
        .copy_into(&mut registry)
        .expect("every entry is a waypoint");

    for (name, waypoint) in &registry {
        println!("{name}: {waypoint:?}");
    }
}
