//! Name-keyed registry of tag creators.
//!
//! A [`CreatorRegistry`] is the piece collaborators reach for first: build
//! one, populate it with default creators for the tag names the document at
//! hand uses, then look creators up by name while walking a tag section.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::creator::{RawTagCreator, TagCreator};
use crate::error::{Result, TagError};

/// The seven tag names the PGN standard requires in every game record, in
/// the order the standard lists them.
pub const SEVEN_TAG_ROSTER: [&str; 7] =
    ["Event", "Site", "Date", "Round", "White", "Black", "Result"];

/// A store of tag creators, keyed by lower-cased tag name.
///
/// Lookups are case-insensitive. [`register`](Self::register) refuses to
/// overwrite an existing entry; [`replace`](Self::replace) overwrites only
/// what already exists. Entries are shared `Arc` handles, so a creator can
/// be used independently of any registry that also holds it.
///
/// The backing map sits behind an `RwLock`: every operation is a single
/// linearizable map access, safe from any number of threads. For one name,
/// exactly one concurrent `register` wins; concurrent `replace` calls race
/// freely and the last write sticks.
///
/// # Examples
///
/// ```
/// use pgn_tags_core::{CreatorRegistry, PgnTag, RawTagCreator, SEVEN_TAG_ROSTER};
///
/// let registry = CreatorRegistry::with_default_creators(SEVEN_TAG_ROSTER, true).unwrap();
///
/// let creator = registry.lookup("event").unwrap();
/// let tag = creator.create_raw(Some("F/S Return Match")).unwrap();
/// assert_eq!(tag.render(), "[Event \"F/S Return Match\"]");
/// ```
#[derive(Debug, Default)]
pub struct CreatorRegistry {
    creators: RwLock<HashMap<String, Arc<dyn RawTagCreator>>>,
}

impl CreatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry pre-populated with default string creators for
    /// every name in `names`, all sharing the given required flag.
    ///
    /// # Errors
    ///
    /// Fails as [`add_default_creators`](Self::add_default_creators) does.
    pub fn with_default_creators<S>(
        names: impl IntoIterator<Item = S>,
        required: bool,
    ) -> Result<Self>
    where
        S: Into<String>,
    {
        let registry = Self::new();
        registry.add_default_creators(names, required)?;
        Ok(registry)
    }

    /// Returns a snapshot of the registered tag names, in the casing
    /// supplied at registration.
    ///
    /// The snapshot is an independent copy; it stays valid while other
    /// threads keep mutating the registry.
    pub fn known_names(&self) -> HashSet<String> {
        self.creators
            .read()
            .expect("registry lock poisoned")
            .values()
            .map(|creator| creator.name().to_string())
            .collect()
    }

    /// Looks up the creator for `name`, case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn RawTagCreator>> {
        self.creators
            .read()
            .expect("registry lock poisoned")
            .get(&name.to_lowercase())
            .cloned()
    }

    /// Registers a new creator under its own name.
    ///
    /// Intended for initial setup, where a collision means a wiring
    /// mistake. Use [`replace`](Self::replace) for intentional overrides.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::EmptyTagName`] if the creator reports an empty
    /// name, or [`TagError::AlreadyRegistered`] if a creator already exists
    /// for the name (case-insensitive).
    pub fn register(&self, creator: Arc<dyn RawTagCreator>) -> Result<()> {
        let name = creator.name().to_string();
        if name.is_empty() {
            return Err(TagError::EmptyTagName);
        }

        let mut creators = self.creators.write().expect("registry lock poisoned");
        match creators.entry(name.to_lowercase()) {
            Entry::Occupied(_) => Err(TagError::AlreadyRegistered(name)),
            Entry::Vacant(slot) => {
                slot.insert(creator);
                debug!("Registered tag creator for tag '{name}'");
                Ok(())
            }
        }
    }

    /// Replaces the creator for an already-registered name.
    ///
    /// A name with no existing entry is left untouched: nothing is inserted
    /// and `false` is returned. Returns `true` when an existing entry was
    /// overwritten.
    pub fn replace(&self, creator: Arc<dyn RawTagCreator>) -> bool {
        let name = creator.name().to_string();

        let mut creators = self.creators.write().expect("registry lock poisoned");
        match creators.get_mut(&name.to_lowercase()) {
            Some(slot) => {
                *slot = creator;
                info!("Replaced tag creator for tag '{name}'");
                true
            }
            None => false,
        }
    }

    /// Registers a default string creator for every name in `names`, all
    /// sharing the given required flag.
    ///
    /// Not atomic: names registered before a failing one stay registered.
    ///
    /// # Errors
    ///
    /// Fails as [`register`](Self::register) does on the first colliding
    /// name, or with [`TagError::EmptyTagName`] on a blank name.
    pub fn add_default_creators<S>(
        &self,
        names: impl IntoIterator<Item = S>,
        required: bool,
    ) -> Result<()>
    where
        S: Into<String>,
    {
        for name in names {
            let creator = TagCreator::default_string(name, required)?;
            self.register(Arc::new(creator))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_tag_roster_order() {
        assert_eq!(
            SEVEN_TAG_ROSTER,
            ["Event", "Site", "Date", "Round", "White", "Black", "Result"]
        );
    }

    #[test]
    fn test_new_registry_is_empty() {
        assert!(CreatorRegistry::new().known_names().is_empty());
    }

    #[test]
    fn test_known_names_keep_registration_casing() {
        let registry =
            CreatorRegistry::with_default_creators(["EventDate", "WhiteElo"], false).unwrap();

        let names = registry.known_names();
        assert!(names.contains("EventDate"));
        assert!(names.contains("WhiteElo"));
        assert!(!names.contains("eventdate"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CreatorRegistry::with_default_creators(["Event"], true).unwrap();

        assert!(registry.lookup("Event").is_some());
        assert!(registry.lookup("EVENT").is_some());
        assert!(registry.lookup("event").is_some());
        assert!(registry.lookup("Site").is_none());
    }

    #[test]
    fn test_register_conflicts_on_case_variants() {
        let registry = CreatorRegistry::new();
        let first = TagCreator::default_string("Event", true).unwrap();
        let second = TagCreator::default_string("event", true).unwrap();

        registry.register(Arc::new(first)).unwrap();
        assert_eq!(
            registry.register(Arc::new(second)).unwrap_err(),
            TagError::AlreadyRegistered("event".to_string())
        );
    }

    #[test]
    fn test_replace_missing_name_does_not_insert() {
        let registry = CreatorRegistry::new();
        let creator = TagCreator::default_string("Opening", false).unwrap();

        assert!(!registry.replace(Arc::new(creator)));
        assert!(registry.lookup("Opening").is_none());
    }

    #[test]
    fn test_failed_bulk_population_keeps_earlier_entries() {
        let registry = CreatorRegistry::with_default_creators(["Event"], true).unwrap();

        let err = registry
            .add_default_creators(["Site", "Event", "Date"], true)
            .unwrap_err();
        assert_eq!(err, TagError::AlreadyRegistered("Event".to_string()));

        // Site made it in before the collision; Date never got a chance.
        assert!(registry.lookup("Site").is_some());
        assert!(registry.lookup("Date").is_none());
    }
}
