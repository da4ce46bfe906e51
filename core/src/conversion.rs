//! Pluggable validation/conversion pairs for tag values.
//!
//! A [`TagValueConversion`] couples a validator with a converter: the
//! validator decides whether raw input is acceptable, the converter maps
//! accepted input into the typed value stored in a tag. Conversions are
//! stateless and shared behind `Arc`, so one instance can back any number of
//! creators across threads.
//!
//! Absent input is modeled as `None` throughout, and a converter returning
//! `Ok(None)` records an admitted-absent value (not an error).

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::error::{Result, TagError};

/// Validator half of a conversion: decides whether raw input is acceptable.
pub type TagValueValidator<I> = dyn Fn(Option<&I>) -> bool + Send + Sync;

/// Converter half of a conversion: maps validated input to a typed value.
pub type TagValueConverter<I, O> = dyn Fn(Option<&I>) -> Result<Option<O>> + Send + Sync;

/// A validator/converter pair mapping raw input of type `I` into typed tag
/// values of type `O`.
///
/// `I` may be unsized (`str` is the common case). Both halves are pure: no
/// side effects beyond the caller-visible return, so validating or
/// converting the same input twice gives the same answer.
///
/// # Examples
///
/// ```
/// use pgn_tags_core::TagValueConversion;
///
/// // A conversion accepting only four-digit years.
/// let year = TagValueConversion::new(
///     |input: Option<&str>| input.is_some_and(|s| s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())),
///     |input: Option<&str>| Ok(input.and_then(|s| s.parse::<u16>().ok())),
/// );
///
/// assert!(year.validate(Some("1972")));
/// assert!(!year.validate(Some("72")));
/// assert_eq!(year.convert(Some("1972")).unwrap(), Some(1972));
/// ```
pub struct TagValueConversion<I: ?Sized, O> {
    validator: Arc<TagValueValidator<I>>,
    converter: Arc<TagValueConverter<I, O>>,
}

impl<I: ?Sized, O> Clone for TagValueConversion<I, O> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            converter: Arc::clone(&self.converter),
        }
    }
}

impl<I: ?Sized, O> fmt::Debug for TagValueConversion<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagValueConversion").finish_non_exhaustive()
    }
}

impl<I: ?Sized, O> TagValueConversion<I, O> {
    /// Creates a conversion from a caller-supplied validator and converter.
    pub fn new(
        validator: impl Fn(Option<&I>) -> bool + Send + Sync + 'static,
        converter: impl Fn(Option<&I>) -> Result<Option<O>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            validator: Arc::new(validator),
            converter: Arc::new(converter),
        }
    }

    /// Creates a conversion whose validator only rejects absent input.
    ///
    /// For the rare case where conversion is possible but no specific
    /// validation applies, e.g. stringifying an arbitrary value.
    pub fn with_converter(converter: impl Fn(&I) -> O + Send + Sync + 'static) -> Self {
        Self::new(
            |input| input.is_some(),
            move |input| match input {
                Some(value) => Ok(Some(converter(value))),
                None => Err(TagError::BlankValue),
            },
        )
    }

    /// Returns whether `input` is acceptable to this conversion.
    pub fn validate(&self, input: Option<&I>) -> bool {
        (self.validator)(input)
    }

    /// Converts `input` into the typed tag value.
    ///
    /// Callers must validate first; behavior on rejected input is
    /// conversion-specific. The standard conversions fail with a
    /// [`TagError`] rather than panic.
    pub fn convert(&self, input: Option<&I>) -> Result<Option<O>> {
        (self.converter)(input)
    }
}

static DEFAULT_STRING: LazyLock<Arc<TagValueConversion<str, String>>> = LazyLock::new(|| {
    Arc::new(TagValueConversion::new(
        |input: Option<&str>| input.is_some_and(|s| !s.trim().is_empty()),
        |input: Option<&str>| match input {
            Some(s) if !s.trim().is_empty() => Ok(Some(s.to_string())),
            _ => Err(TagError::BlankValue),
        },
    ))
});

impl TagValueConversion<str, String> {
    /// Returns the shared string-identity conversion.
    ///
    /// The validator rejects absent, empty, and white-space-only input;
    /// accepted text passes through unchanged. The converter re-checks the
    /// rejection so even a creator that skipped validation cannot produce a
    /// blank value. A single instance backs every default creator in the
    /// process.
    pub fn default_string() -> Arc<Self> {
        Arc::clone(&DEFAULT_STRING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_string_rejects_blank_input() {
        let conversion = TagValueConversion::default_string();

        assert!(!conversion.validate(None));
        assert!(!conversion.validate(Some("")));
        assert!(!conversion.validate(Some("     ")));
        assert!(conversion.validate(Some("Fischer, Robert J.")));
    }

    #[test]
    fn test_default_string_passes_text_through() {
        let conversion = TagValueConversion::default_string();
        let converted = conversion.convert(Some("Fischer, Robert J.")).unwrap();
        assert_eq!(converted.as_deref(), Some("Fischer, Robert J."));
    }

    #[test]
    fn test_default_string_convert_rechecks_blank_input() {
        let conversion = TagValueConversion::default_string();

        assert_eq!(conversion.convert(None), Err(TagError::BlankValue));
        assert_eq!(conversion.convert(Some("   ")), Err(TagError::BlankValue));
    }

    #[test]
    fn test_default_string_is_shared() {
        let a = TagValueConversion::default_string();
        let b = TagValueConversion::default_string();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_with_converter_accepts_any_present_value() {
        let stringify = TagValueConversion::with_converter(|value: &i64| value.to_string());

        assert!(stringify.validate(Some(&42)));
        assert!(!stringify.validate(None));
        assert_eq!(
            stringify.convert(Some(&42)).unwrap(),
            Some("42".to_string())
        );
    }
}
