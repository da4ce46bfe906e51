//! Tag creators: named factories that validate and convert raw input into
//! immutable tags.
//!
//! [`TagCreator`] is the typed workhorse. [`RawTagCreator`] is its
//! object-safe face, the form the registry stores, and [`TypedTagCreator`]
//! is the checked downcasting wrapper that restores a typed surface after a
//! registry lookup.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::conversion::TagValueConversion;
use crate::error::{Result, TagError};
use crate::tag::{PgnTag, Tag};

/// A factory bound to one tag name.
///
/// `I` is the raw input type fed to [`create_tag`](Self::create_tag)
/// (usually `str`), `O` the value type stored in produced tags. A creator
/// holds no per-call state; every invocation is independent, and the
/// conversion behind it is shared, so creators are cheap to clone.
///
/// # Examples
///
/// ```
/// use pgn_tags_core::TagCreator;
///
/// let creator = TagCreator::default_string("White", true).unwrap();
/// let tag = creator.create_tag(Some("Spassky, Boris V.")).unwrap();
/// assert_eq!(tag.render(), "[White \"Spassky, Boris V.\"]");
///
/// // Blank input is rejected before conversion.
/// assert!(creator.create_tag(Some("   ")).is_err());
/// assert!(creator.create_tag(None).is_err());
/// ```
pub struct TagCreator<I: ?Sized, O> {
    name: String,
    required: bool,
    conversion: Arc<TagValueConversion<I, O>>,
}

impl<I: ?Sized, O> Clone for TagCreator<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            required: self.required,
            conversion: Arc::clone(&self.conversion),
        }
    }
}

impl<I: ?Sized, O> fmt::Debug for TagCreator<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagCreator")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

impl<I: ?Sized, O> TagCreator<I, O> {
    /// Creates a new creator producing tags named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::EmptyTagName`] if `name` is empty or white-space
    /// only.
    pub fn new(
        name: impl Into<String>,
        conversion: Arc<TagValueConversion<I, O>>,
        required: bool,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TagError::EmptyTagName);
        }
        Ok(Self {
            name,
            required,
            conversion,
        })
    }

    /// Returns the name of the tag this creator produces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether produced tags are marked required.
    pub fn required(&self) -> bool {
        self.required
    }
}

impl<I, O> TagCreator<I, O>
where
    I: fmt::Display + ?Sized,
{
    /// Creates a tag from `input`.
    ///
    /// The input is validated before the converter runs; only accepted
    /// input is converted. The produced tag carries this creator's name and
    /// required flag and the converted value.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidInput`] when the validator rejects
    /// `input`; the message names the offending value and its runtime type,
    /// or `<null>` for absent input. Converter failures pass through
    /// unchanged.
    pub fn create_tag(&self, input: Option<&I>) -> Result<Tag<O>> {
        if !self.conversion.validate(input) {
            return Err(TagError::invalid_input(&self.name, input));
        }
        let value = self.conversion.convert(input)?;
        Ok(Tag::new(self.name.clone(), value, self.required))
    }
}

impl TagCreator<str, String> {
    /// Creates a default creator: the shared string-identity conversion,
    /// with minimal validation (input must be present and not blank).
    ///
    /// This is the creator the registry's bulk-population helpers use for
    /// every name they are given.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::EmptyTagName`] if `name` is empty or white-space
    /// only.
    pub fn default_string(name: impl Into<String>, required: bool) -> Result<Self> {
        Self::new(name, TagValueConversion::default_string(), required)
    }
}

/// Object-safe creator contract, the form stored by
/// [`CreatorRegistry`](crate::CreatorRegistry).
///
/// Erases the value type so creators producing different payloads can share
/// one registry. Every `TagCreator<str, O>` with a displayable, thread-safe
/// `O` implements it. The typed surface can be restored with
/// [`TypedTagCreator`].
pub trait RawTagCreator: fmt::Debug + Send + Sync {
    /// The name of the tag this creator produces.
    fn name(&self) -> &str;

    /// Whether produced tags are marked required.
    fn required(&self) -> bool;

    /// Creates a tag from raw textual input.
    ///
    /// # Errors
    ///
    /// Fails exactly as the underlying creator's `create_tag` does.
    fn create_raw(&self, input: Option<&str>) -> Result<Box<dyn PgnTag>>;
}

impl<O> RawTagCreator for TagCreator<str, O>
where
    O: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn required(&self) -> bool {
        self.required
    }

    fn create_raw(&self, input: Option<&str>) -> Result<Box<dyn PgnTag>> {
        Ok(Box::new(self.create_tag(input)?))
    }
}

/// Strongly-typed wrapper around a type-erased creator handle.
///
/// Registry lookups return `Arc<dyn RawTagCreator>`; wrapping one restores a
/// typed [`create_tag`](Self::create_tag). The wrapper checks at runtime
/// that the creator actually produces `Tag<V>` and fails with
/// [`TagError::ValueTypeMismatch`] otherwise, so a wrong type assumption
/// surfaces as an error instead of a silent miscast.
///
/// # Examples
///
/// ```
/// use pgn_tags_core::{creators, CreatorRegistry, TypedTagCreator};
/// use std::sync::Arc;
///
/// let registry = CreatorRegistry::new();
/// let round = creators::integer_value("Round", false, true).unwrap();
/// registry.register(Arc::new(round)).unwrap();
///
/// let typed = TypedTagCreator::<i64>::new(registry.lookup("Round").unwrap());
/// let tag = typed.create_tag(Some("29")).unwrap();
/// assert_eq!(tag.value(), Some(&29));
///
/// // Asking for the wrong value type fails cleanly.
/// let wrong = TypedTagCreator::<String>::new(registry.lookup("Round").unwrap());
/// assert!(wrong.create_tag(Some("29")).is_err());
/// ```
pub struct TypedTagCreator<V> {
    inner: Arc<dyn RawTagCreator>,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for TypedTagCreator<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _value: PhantomData,
        }
    }
}

impl<V> fmt::Debug for TypedTagCreator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedTagCreator")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<V: 'static> TypedTagCreator<V> {
    /// Wraps a type-erased creator handle.
    pub fn new(inner: Arc<dyn RawTagCreator>) -> Self {
        Self {
            inner,
            _value: PhantomData,
        }
    }

    /// The name of the tag the wrapped creator produces.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Whether produced tags are marked required.
    pub fn required(&self) -> bool {
        self.inner.required()
    }

    /// Creates a typed tag from raw textual input.
    ///
    /// # Errors
    ///
    /// Fails as the wrapped creator fails, plus
    /// [`TagError::ValueTypeMismatch`] when the creator's tags do not hold
    /// a `V`.
    pub fn create_tag(&self, input: Option<&str>) -> Result<Tag<V>> {
        let raw = self.inner.create_raw(input)?;
        let name = raw.name().to_string();
        raw.into_any()
            .downcast::<Tag<V>>()
            .map(|tag| *tag)
            .map_err(|_| TagError::ValueTypeMismatch { tag: name })
    }
}
