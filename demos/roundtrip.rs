//! Build a document, render it, and read it back.
//!
//! Run with: `cargo run --example roundtrip`

use mapfile::{from_str, mapfile, to_string};

fn main() {
    let doc = mapfile!({
        "name": "Avery",
        "level": 3,
        "scores": [10, 20, 30]
    })
    .into_map()
    .expect("the literal is a map");

    let text = to_string(&doc).expect("plain documents always encode");
    println!("--- rendered ---\n{text}\n");

    let back = from_str(&text);
    println!("name   = {}", back.get_string("name").unwrap());
    println!("level  = {}", back.get_integer("level").unwrap());
    println!("scores = {:?}", back.get_list_of::<i64>("scores").unwrap());
}
