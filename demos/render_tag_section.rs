//! Tag section rendering example.
//!
//! Demonstrates the collaborator's view of the library: build a registry
//! covering the Seven Tag Roster plus a few informal tags, feed it the raw
//! values a PGN parser would hand over, and render the resulting tag
//! section.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pgn-tags-demos --example render_tag_section
//! ```

use pgn_tags_core::{CreatorRegistry, PgnTag, RawTagCreator, SEVEN_TAG_ROSTER};

fn main() {
    // The seven required tags, plus informal tags this collection uses.
    let registry = CreatorRegistry::with_default_creators(SEVEN_TAG_ROSTER, true).unwrap();
    registry
        .add_default_creators(["ECO", "WhiteElo", "BlackElo", "Annotator"], false)
        .unwrap();

    println!("Registry knows {} tags", registry.known_names().len());
    println!();

    // Raw name/value pairs as a PGN parser would produce them.
    let raw_tags = [
        ("Event", "F/S Return Match"),
        ("Site", "Belgrade, Serbia JUG"),
        ("Date", "1992.11.04"),
        ("Round", "29"),
        ("White", "Fischer, Robert J."),
        ("Black", "Spassky, Boris V."),
        ("Result", "1/2-1/2"),
        ("ECO", "D59"),
    ];

    for (name, value) in raw_tags {
        // Lookup is case-insensitive; creation validates before converting.
        let creator = registry.lookup(name).expect("tag name not registered");
        match creator.create_raw(Some(value)) {
            Ok(tag) => println!("{}", tag.render()),
            Err(err) => eprintln!("skipping '{name}': {err}"),
        }
    }

    println!();

    // Malformed input is rejected with a diagnostic, not silently stored.
    let creator = registry.lookup("Event").unwrap();
    let err = creator.create_raw(Some("   ")).unwrap_err();
    println!("Blank event value rejected: {err}");
}
