//! Error types for tag creation and registry operations.
//!
//! Provides a unified error type covering all failure modes: rejected input
//! values, blank tag names, registration conflicts, and typed-lookup
//! mismatches.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while constructing creators, creating tags, or
/// registering creators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Tag name was empty or white-space only at construction.
    #[error("tag name cannot be empty or white-space only")]
    EmptyTagName,

    /// Input value rejected by a creator's validator.
    ///
    /// `input` carries the offending value's textual form, or `<null>` when
    /// the input was absent; `class` carries its runtime type, or `N/A`.
    #[error("Invalid input value {input} for tag '{tag}'. Input value class={class}.")]
    InvalidInput {
        /// Name of the tag the input was meant for.
        tag: String,
        /// Textual form of the rejected input.
        input: String,
        /// Runtime type of the rejected input.
        class: String,
    },

    /// A conversion was handed input its validator rejects.
    #[error("Value cannot be <null>, empty or white-space only.")]
    BlankValue,

    /// Digit string accepted by the validator but outside the integer range.
    #[error("value '{value}' for tag '{tag}' is out of range for an integer")]
    OutOfRange {
        /// Name of the tag the input was meant for.
        tag: String,
        /// The overflowing digit string.
        value: String,
    },

    /// `register` was called for a name that already has a creator.
    #[error("A tag creator already exists for tag name '{0}'")]
    AlreadyRegistered(String),

    /// A typed lookup found a creator whose tags hold a different value type.
    #[error("tag '{tag}' does not hold the requested value type")]
    ValueTypeMismatch {
        /// Name of the tag whose value type did not match.
        tag: String,
    },
}

impl TagError {
    /// Builds the validation-failure error for `input`, distinguishing an
    /// absent input from a present-but-rejected one.
    pub(crate) fn invalid_input<I>(tag: &str, input: Option<&I>) -> Self
    where
        I: fmt::Display + ?Sized,
    {
        match input {
            Some(value) => TagError::InvalidInput {
                tag: tag.to_string(),
                input: format!("'{value}'"),
                class: std::any::type_name::<I>().to_string(),
            },
            None => TagError::InvalidInput {
                tag: tag.to_string(),
                input: "<null>".to_string(),
                class: "N/A".to_string(),
            },
        }
    }
}

/// Convenience alias for results with [`TagError`].
pub type Result<T> = std::result::Result<T, TagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_for_present_value() {
        let err = TagError::invalid_input("Round", Some("33rd"));
        assert_eq!(
            err.to_string(),
            "Invalid input value '33rd' for tag 'Round'. Input value class=str."
        );
    }

    #[test]
    fn test_invalid_input_message_for_absent_value() {
        let err = TagError::invalid_input::<str>("Round", None);
        assert_eq!(
            err.to_string(),
            "Invalid input value <null> for tag 'Round'. Input value class=N/A."
        );
    }

    #[test]
    fn test_conflict_message_keeps_supplied_casing() {
        let err = TagError::AlreadyRegistered("Event".to_string());
        assert_eq!(
            err.to_string(),
            "A tag creator already exists for tag name 'Event'"
        );
    }
}
