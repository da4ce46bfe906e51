//! The tag value object and its type-erased view.
//!
//! A [`Tag`] is the transient output of a creator: a name, an optional typed
//! value, and a required flag, frozen at creation. [`PgnTag`] is the
//! object-safe view the registry layer works with when the value type is not
//! statically known.

use std::any::Any;
use std::fmt;

/// An immutable PGN tag: a name, an optional typed value, and a flag marking
/// whether the PGN standard requires the tag's presence.
///
/// Tags are produced exclusively by [`TagCreator::create_tag`]; there are no
/// public mutators, so a tag never changes after creation. The value is
/// `None` when the creator's allow-empty policy admitted a blank input.
///
/// [`TagCreator::create_tag`]: crate::TagCreator::create_tag
///
/// # Examples
///
/// ```
/// use pgn_tags_core::TagCreator;
///
/// let creator = TagCreator::default_string("Site", true).unwrap();
/// let tag = creator.create_tag(Some("Reykjavik ISL")).unwrap();
///
/// assert_eq!(tag.name(), "Site");
/// assert_eq!(tag.value().map(String::as_str), Some("Reykjavik ISL"));
/// assert!(tag.required());
/// assert_eq!(tag.render(), "[Site \"Reykjavik ISL\"]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<V> {
    name: String,
    value: Option<V>,
    required: bool,
}

impl<V> Tag<V> {
    pub(crate) fn new(name: String, value: Option<V>, required: bool) -> Self {
        Self {
            name,
            value,
            required,
        }
    }

    /// Returns the tag's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag's value, or `None` when the creator admitted an
    /// absent value.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns whether the PGN standard requires this tag.
    pub fn required(&self) -> bool {
        self.required
    }

    /// Consumes the tag and returns its value.
    pub fn into_value(self) -> Option<V> {
        self.value
    }
}

impl<V: fmt::Display> Tag<V> {
    /// Renders the tag as it appears in the tag section of a PGN game:
    /// `[<name> "<value>"]`.
    ///
    /// An absent value renders as the literal text `null`; callers that want
    /// an empty string or want to omit the tag entirely must substitute
    /// before rendering. Embedded `"` characters in the value are not
    /// escaped.
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("[{} \"{}\"]", self.name, value),
            None => format!("[{} \"null\"]", self.name),
        }
    }
}

/// Object-safe view of a tag, independent of its value type.
///
/// Creators obtained through [`CreatorRegistry::lookup`] produce
/// `Box<dyn PgnTag>`; the concrete [`Tag`] behind it can be recovered with
/// [`into_any`](PgnTag::into_any), or more conveniently through
/// [`TypedTagCreator`](crate::TypedTagCreator).
///
/// [`CreatorRegistry::lookup`]: crate::CreatorRegistry::lookup
pub trait PgnTag: fmt::Debug + Send + Sync {
    /// The tag's name.
    fn name(&self) -> &str;

    /// Whether the PGN standard requires this tag.
    fn required(&self) -> bool;

    /// The value's `Display` form, or `None` for an absent value.
    fn value_text(&self) -> Option<String>;

    /// Renders the tag in PGN bracket notation; see [`Tag::render`].
    fn render(&self) -> String;

    /// Converts into [`Any`] so callers can downcast to the concrete
    /// [`Tag`] type.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<V> PgnTag for Tag<V>
where
    V: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn required(&self) -> bool {
        self.required
    }

    fn value_text(&self) -> Option<String> {
        self.value.as_ref().map(|value| value.to_string())
    }

    fn render(&self) -> String {
        Tag::render(self)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_value() {
        let tag = Tag::new("Event".to_string(), Some("F/S Return Match"), true);
        assert_eq!(tag.render(), "[Event \"F/S Return Match\"]");
    }

    #[test]
    fn test_render_absent_value_uses_null_literal() {
        let tag: Tag<i64> = Tag::new("PlyCount".to_string(), None, false);
        assert_eq!(tag.render(), "[PlyCount \"null\"]");
    }

    #[test]
    fn test_render_does_not_escape_quotes() {
        let tag = Tag::new("Annotator".to_string(), Some("J. \"Doe\""), false);
        assert_eq!(tag.render(), "[Annotator \"J. \"Doe\"\"]");
    }

    #[test]
    fn test_erased_view_matches_typed_view() {
        let tag = Tag::new("Round".to_string(), Some(29_i64), true);
        let erased: Box<dyn PgnTag> = Box::new(tag.clone());

        assert_eq!(erased.name(), "Round");
        assert!(erased.required());
        assert_eq!(erased.value_text().as_deref(), Some("29"));
        assert_eq!(erased.render(), tag.render());

        let recovered = erased.into_any().downcast::<Tag<i64>>().unwrap();
        assert_eq!(*recovered, tag);
    }
}
