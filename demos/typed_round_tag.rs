//! Typed creator replacement example.
//!
//! A registry usually starts life full of generic string creators. Once a
//! tag's real payload type is known, `replace` swaps in a typed creator,
//! and `TypedTagCreator` recovers the strongly-typed value after lookup.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pgn-tags-demos --example typed_round_tag
//! ```

use std::sync::Arc;

use pgn_tags_core::{CreatorRegistry, PgnTag, RawTagCreator, SEVEN_TAG_ROSTER, TypedTagCreator, creators};

fn main() {
    let registry = CreatorRegistry::with_default_creators(SEVEN_TAG_ROSTER, true).unwrap();

    // As a string tag, "33rd" is a perfectly fine round.
    let creator = registry.lookup("Round").unwrap();
    let tag = creator.create_raw(Some("33rd")).unwrap();
    println!("generic creator:  {}", tag.render());

    // Swap in the integer creator; register would refuse, replace is the
    // intentional-override path.
    let round = creators::integer_value("Round", false, true).unwrap();
    assert!(registry.replace(Arc::new(round)));

    // Same input is now rejected.
    let creator = registry.lookup("Round").unwrap();
    match creator.create_raw(Some("33rd")) {
        Ok(_) => unreachable!(),
        Err(err) => println!("typed creator:    {err}"),
    }

    // The typed wrapper restores an i64 surface after lookup.
    let typed = TypedTagCreator::<i64>::new(registry.lookup("Round").unwrap());
    let tag = typed.create_tag(Some("29")).unwrap();
    println!("typed value:      {:?}", tag.value());
    println!("rendered:         {}", tag.render());

    // Asking for the wrong type fails cleanly instead of miscasting.
    let wrong = TypedTagCreator::<String>::new(registry.lookup("Round").unwrap());
    match wrong.create_tag(Some("29")) {
        Ok(_) => unreachable!(),
        Err(err) => println!("wrong type:       {err}"),
    }
}
