//! Tag creation, validation, and rendering for PGN chess metadata.
//!
//! This crate models the tag pairs heading a Portable Game Notation (PGN)
//! game record (`[Event "..."]`, `[Date "..."]`, ...) as typed, immutable
//! values produced through a validation/conversion pipeline:
//!
//! - [`Tag`] — an immutable name/value/required triple with PGN
//!   bracket-notation rendering; [`PgnTag`] is its type-erased view.
//! - [`TagValueConversion`] — a shareable validator/converter pair mapping
//!   raw input into typed values.
//! - [`TagCreator`] — a factory bound to one tag name, enforcing validation
//!   before conversion; [`RawTagCreator`] is the object-safe form a registry
//!   stores, and [`TypedTagCreator`] restores a typed surface after lookup.
//! - [`CreatorRegistry`] — a thread-safe, case-insensitive store of creators
//!   with conflict-checked registration and explicit replacement.
//! - [`creators`] — specialized string/integer creators with an allow-empty
//!   policy.
//!
//! Parsing PGN documents, movetext, and file handling are deliberately out
//! of scope; collaborators feed raw tag values in and serialize the rendered
//! tags out.
//!
//! # Example
//!
//! ```
//! use pgn_tags_core::{creators, CreatorRegistry, PgnTag, RawTagCreator, SEVEN_TAG_ROSTER};
//! use std::sync::Arc;
//!
//! // Start from the seven tags every PGN game record must carry.
//! let registry = CreatorRegistry::with_default_creators(SEVEN_TAG_ROSTER, true).unwrap();
//!
//! // `Round` is really a number; swap in a typed creator.
//! let round = creators::integer_value("Round", false, true).unwrap();
//! assert!(registry.replace(Arc::new(round)));
//!
//! let creator = registry.lookup("round").unwrap();
//! let tag = creator.create_raw(Some("29")).unwrap();
//! assert_eq!(tag.render(), "[Round \"29\"]");
//! ```

mod conversion;
mod creator;
pub mod creators;
mod error;
mod registry;
mod tag;

pub use conversion::{TagValueConversion, TagValueConverter, TagValueValidator};
pub use creator::{RawTagCreator, TagCreator, TypedTagCreator};
pub use error::{Result, TagError};
pub use registry::{CreatorRegistry, SEVEN_TAG_ROSTER};
pub use tag::{PgnTag, Tag};
