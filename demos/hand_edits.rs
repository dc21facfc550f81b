//! What the parser does with files people have edited by hand: stray
//! lines, shuffled list indices, and a truncated block.
//!
//! Run with: `cargo run --example hand_edits`

use mapfile::from_str;

fn main() {
    let edited = "\
# a note someone left; no key separator, so the line is skipped
name=Avery

scores=[
2=30
0=10
1=20
]
settings=[
volume=7";

    let doc = from_str(edited);

    // The comment and the blank line were inert.
    println!("name   = {}", doc.get_string("name").unwrap());

    // Index keys were shuffled; the decoder goes by the parsed index.
    println!("scores = {:?}", doc.get_list_of::<i64>("scores").unwrap());

    // The settings block was never closed; it ends with the input.
    let settings = doc.get_document("settings").unwrap();
    println!("volume = {}", settings.get_integer("volume").unwrap());
}
