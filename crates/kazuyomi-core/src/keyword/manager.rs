use std::collections::HashMap;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::types::ElementCategory;

use super::defaults;

static GLOBAL: Lazy<KeywordManager> = Lazy::new(KeywordManager::new);

bitflags! {
    /// Behavioural flags attached to a registered keyword.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeywordOptions: u8 {
        /// A token matching this keyword may be marked as identified.
        const IDENTIFIABLE = 0b0000_0001;
        /// The keyword takes part in free keyword searches.
        const SEARCHABLE = 0b0000_0010;
        /// The keyword may stand on its own as a token (e.g. "EP" but not "E").
        const VALID = 0b0000_0100;
    }
}

impl KeywordOptions {
    pub const DEFAULT: Self = Self::all();
    pub const INVALID: Self = Self::IDENTIFIABLE.union(Self::SEARCHABLE);
    pub const UNIDENTIFIABLE: Self = Self::SEARCHABLE.union(Self::VALID);
    pub const UNIDENTIFIABLE_INVALID: Self = Self::SEARCHABLE;
    pub const UNIDENTIFIABLE_UNSEARCHABLE: Self = Self::VALID;

    pub fn is_identifiable(self) -> bool {
        self.contains(Self::IDENTIFIABLE)
    }

    pub fn is_searchable(self) -> bool {
        self.contains(Self::SEARCHABLE)
    }

    pub fn is_valid(self) -> bool {
        self.contains(Self::VALID)
    }
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A registered keyword: its category and behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword {
    pub category: ElementCategory,
    pub options: KeywordOptions,
}

/// Registry mapping normalized keyword strings to their category.
///
/// File extensions live in their own partition so that e.g. "AAC" can be both
/// an audio term and an (invalid) extension.
#[derive(Debug, Clone, Default)]
pub struct KeywordManager {
    keys: HashMap<String, Keyword>,
    file_extensions: HashMap<String, Keyword>,
}

impl KeywordManager {
    /// Builds a registry holding the built-in keyword set.
    pub fn new() -> Self {
        let mut manager = Self::empty();
        defaults::register_defaults(&mut manager);
        debug!(keywords = manager.len(), "keyword registry initialised");
        manager
    }

    /// Builds a registry with no keywords.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shared, process-wide registry, built on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Normalizes text for lookups (upper case).
    pub fn normalize(text: &str) -> String {
        text.to_uppercase()
    }

    /// Registers `keywords` under `category`.
    ///
    /// Empty strings are skipped and a keyword already present in the target
    /// partition keeps its first registration.
    pub fn register<I, S>(&mut self, category: ElementCategory, options: KeywordOptions, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let container = self.container_mut(category);
        for keyword in keywords {
            let keyword = keyword.as_ref();
            if keyword.is_empty() {
                continue;
            }
            container
                .entry(Self::normalize(keyword))
                .or_insert(Keyword { category, options });
        }
    }

    /// Returns `true` if `keyword` (normalized) is registered under exactly `category`.
    pub fn contains(&self, category: ElementCategory, keyword: &str) -> bool {
        self.container(category)
            .get(keyword)
            .is_some_and(|found| found.category == category)
    }

    /// Looks up a normalized `keyword`.
    ///
    /// With [`ElementCategory::Unknown`] any category in the main partition is
    /// accepted and reported back; a concrete category must match the
    /// registered one.
    pub fn find(&self, keyword: &str, category: ElementCategory) -> Option<Keyword> {
        let found = self.container(category).get(keyword)?;
        if category != ElementCategory::Unknown && found.category != category {
            return None;
        }
        Some(*found)
    }

    /// Every registered keyword across both partitions.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Keyword)> {
        self.keys
            .iter()
            .chain(self.file_extensions.iter())
            .map(|(key, keyword)| (key.as_str(), keyword))
    }

    pub fn len(&self) -> usize {
        self.keys.len() + self.file_extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn container(&self, category: ElementCategory) -> &HashMap<String, Keyword> {
        if category == ElementCategory::FileExtension {
            &self.file_extensions
        } else {
            &self.keys
        }
    }

    fn container_mut(&mut self, category: ElementCategory) -> &mut HashMap<String, Keyword> {
        if category == ElementCategory::FileExtension {
            &mut self.file_extensions
        } else {
            &mut self.keys
        }
    }
}
