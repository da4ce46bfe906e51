//! Specialized creators for common PGN tag payloads.
//!
//! The default creator treats every value as mandatory free text. Real game
//! collections need more: `Round`, `PlyCount`, and the Elo tags carry
//! integers, and several tags legitimately appear with an empty value. The
//! constructors here cover both, with an "allow empty" policy under which
//! blank or absent input produces a tag with an absent value instead of
//! failing.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::warn;

use crate::conversion::TagValueConversion;
use crate::creator::TagCreator;
use crate::error::{Result, TagError};

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("static regex must compile"));

fn is_blank(input: Option<&str>) -> bool {
    match input {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

/// Creates a tag creator for integer-valued tags such as `Round`,
/// `PlyCount`, or `WhiteElo`.
///
/// The validator accepts an optional leading sign followed by one or more
/// digits. With `allow_empty`, blank or absent input is also accepted and
/// converts to an absent value, emitting a `warn`-level diagnostic.
///
/// # Errors
///
/// Returns [`TagError::EmptyTagName`] if `name` is empty or white-space
/// only.
///
/// # Examples
///
/// ```
/// use pgn_tags_core::creators;
///
/// let creator = creators::integer_value("PlyCount", false, false).unwrap();
///
/// let tag = creator.create_tag(Some("73")).unwrap();
/// assert_eq!(tag.value(), Some(&73));
///
/// assert!(creator.create_tag(Some("not-a-number")).is_err());
/// assert!(creator.create_tag(None).is_err());
/// ```
pub fn integer_value(
    name: impl Into<String>,
    allow_empty: bool,
    required: bool,
) -> Result<TagCreator<str, i64>> {
    let name = name.into();
    let tag_name = name.clone();
    let conversion = TagValueConversion::new(
        move |input: Option<&str>| {
            if allow_empty && is_blank(input) {
                return true;
            }
            input.is_some_and(|s| INTEGER_RE.is_match(s))
        },
        move |input: Option<&str>| match input {
            Some(s) if !s.trim().is_empty() => {
                s.parse::<i64>().map(Some).map_err(|_| TagError::OutOfRange {
                    tag: tag_name.clone(),
                    value: s.to_string(),
                })
            }
            _ => {
                warn!("No value specified for tag {tag_name}; returned <null>");
                Ok(None)
            }
        },
    );
    TagCreator::new(name, Arc::new(conversion), required)
}

/// Creates a tag creator for free-text tags that may appear empty.
///
/// Without `allow_empty` this validates like the default creator: input
/// must be present and not blank. With `allow_empty`, blank or absent input
/// converts to an absent value, emitting a `warn`-level diagnostic.
///
/// # Errors
///
/// Returns [`TagError::EmptyTagName`] if `name` is empty or white-space
/// only.
pub fn string_value(
    name: impl Into<String>,
    allow_empty: bool,
    required: bool,
) -> Result<TagCreator<str, String>> {
    let name = name.into();
    let tag_name = name.clone();
    let conversion = TagValueConversion::new(
        move |input: Option<&str>| {
            if allow_empty && is_blank(input) {
                return true;
            }
            input.is_some_and(|s| !s.trim().is_empty())
        },
        move |input: Option<&str>| match input {
            Some(s) if !s.trim().is_empty() => Ok(Some(s.to_string())),
            _ => {
                warn!("No value specified for tag {tag_name}; returned <null>");
                Ok(None)
            }
        },
    );
    TagCreator::new(name, Arc::new(conversion), required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_parses_signed_values() {
        let creator = integer_value("Round", false, true).unwrap();

        assert_eq!(
            creator.create_tag(Some("1234")).unwrap().value(),
            Some(&1234)
        );
        assert_eq!(creator.create_tag(Some("+10")).unwrap().value(), Some(&10));
        assert_eq!(creator.create_tag(Some("-20")).unwrap().value(), Some(&-20));
    }

    #[test]
    fn test_integer_rejects_non_numeric_input() {
        for allow_empty in [false, true] {
            let creator = integer_value("Round", allow_empty, true).unwrap();
            let err = creator.create_tag(Some("not-an-integer")).unwrap_err();
            assert!(matches!(err, TagError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_integer_allow_empty_admits_blank_input() {
        let creator = integer_value("Round", true, true).unwrap();

        for input in [None, Some(""), Some("   ")] {
            let tag = creator.create_tag(input).unwrap();
            assert_eq!(tag.value(), None);
            assert_eq!(tag.render(), "[Round \"null\"]");
        }
    }

    #[test]
    fn test_integer_without_allow_empty_rejects_absent_input() {
        let creator = integer_value("Round", false, true).unwrap();
        let err = creator.create_tag(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input value <null> for tag 'Round'. Input value class=N/A."
        );
    }

    #[test]
    fn test_integer_overflow_surfaces_out_of_range() {
        let creator = integer_value("PlyCount", false, false).unwrap();
        let err = creator
            .create_tag(Some("99999999999999999999"))
            .unwrap_err();
        assert!(matches!(err, TagError::OutOfRange { .. }));
    }

    #[test]
    fn test_string_allow_empty_admits_blank_input() {
        let creator = string_value("Annotator", true, false).unwrap();

        for input in [None, Some(""), Some("   ")] {
            let tag = creator.create_tag(input).unwrap();
            assert_eq!(tag.value(), None);
        }

        let tag = creator.create_tag(Some("Clarke, P.H.")).unwrap();
        assert_eq!(tag.value().map(String::as_str), Some("Clarke, P.H."));
    }

    #[test]
    fn test_string_without_allow_empty_rejects_blank_input() {
        let creator = string_value("Annotator", false, false).unwrap();

        assert!(creator.create_tag(None).is_err());
        assert!(creator.create_tag(Some("  ")).is_err());
    }

    #[test]
    fn test_blank_creator_names_are_rejected() {
        assert!(integer_value("", false, false).is_err());
        assert!(string_value("   ", false, false).is_err());
    }
}
