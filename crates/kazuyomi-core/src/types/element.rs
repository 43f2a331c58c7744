use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KazuyomiError;

/// The kind of metadata an [`Element`] carries.
///
/// Keyword registry categories (prefixes, terms) share this enum with the
/// extracted element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    AnimeSeason,
    AnimeSeasonPrefix,
    AnimeTitle,
    AnimeType,
    AnimeYear,
    AudioTerm,
    DeviceCompatibility,
    EpisodeNumber,
    EpisodeNumberAlt,
    EpisodePrefix,
    EpisodeTitle,
    FileChecksum,
    FileExtension,
    FileName,
    Language,
    Other,
    ReleaseGroup,
    ReleaseInformation,
    ReleaseVersion,
    Source,
    Subtitles,
    VideoResolution,
    VideoTerm,
    VolumeNumber,
    VolumePrefix,
    /// Wildcard used by keyword lookups that accept any category.
    Unknown,
}

impl ElementCategory {
    /// Every category, in declaration order.
    pub const ALL: [ElementCategory; 26] = [
        Self::AnimeSeason,
        Self::AnimeSeasonPrefix,
        Self::AnimeTitle,
        Self::AnimeType,
        Self::AnimeYear,
        Self::AudioTerm,
        Self::DeviceCompatibility,
        Self::EpisodeNumber,
        Self::EpisodeNumberAlt,
        Self::EpisodePrefix,
        Self::EpisodeTitle,
        Self::FileChecksum,
        Self::FileExtension,
        Self::FileName,
        Self::Language,
        Self::Other,
        Self::ReleaseGroup,
        Self::ReleaseInformation,
        Self::ReleaseVersion,
        Self::Source,
        Self::Subtitles,
        Self::VideoResolution,
        Self::VideoTerm,
        Self::VolumeNumber,
        Self::VolumePrefix,
        Self::Unknown,
    ];

    /// The `snake_case` name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnimeSeason => "anime_season",
            Self::AnimeSeasonPrefix => "anime_season_prefix",
            Self::AnimeTitle => "anime_title",
            Self::AnimeType => "anime_type",
            Self::AnimeYear => "anime_year",
            Self::AudioTerm => "audio_term",
            Self::DeviceCompatibility => "device_compatibility",
            Self::EpisodeNumber => "episode_number",
            Self::EpisodeNumberAlt => "episode_number_alt",
            Self::EpisodePrefix => "episode_prefix",
            Self::EpisodeTitle => "episode_title",
            Self::FileChecksum => "file_checksum",
            Self::FileExtension => "file_extension",
            Self::FileName => "file_name",
            Self::Language => "language",
            Self::Other => "other",
            Self::ReleaseGroup => "release_group",
            Self::ReleaseInformation => "release_information",
            Self::ReleaseVersion => "release_version",
            Self::Source => "source",
            Self::Subtitles => "subtitles",
            Self::VideoResolution => "video_resolution",
            Self::VideoTerm => "video_term",
            Self::VolumeNumber => "volume_number",
            Self::VolumePrefix => "volume_prefix",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementCategory {
    type Err = KazuyomiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| KazuyomiError::UnknownCategory(s.to_string()))
    }
}

/// A typed metadata fact extracted from a filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    /// What the value means.
    pub category: ElementCategory,
    /// The extracted text.
    pub value: String,
}

impl Element {
    /// Creates a new element.
    pub fn new(category: ElementCategory, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

/// Ordered, append-only list of elements for one filename.
///
/// Existing entries are never removed during a parse; only their category
/// may be rewritten (an episode number demoted to an alternative one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Elements {
    items: Vec<Element>,
}

impl Elements {
    /// Creates an empty element list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn insert(&mut self, category: ElementCategory, value: impl Into<String>) {
        self.items.push(Element::new(category, value));
    }

    /// First value recorded under `category`.
    pub fn get(&self, category: ElementCategory) -> Option<&str> {
        self.items
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.value.as_str())
    }

    /// Every value recorded under `category`, in insertion order.
    pub fn get_all(&self, category: ElementCategory) -> Vec<&str> {
        self.items
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.value.as_str())
            .collect()
    }

    /// Number of values recorded under `category`.
    pub fn count(&self, category: ElementCategory) -> usize {
        self.items.iter().filter(|e| e.category == category).count()
    }

    /// Returns `true` if at least one value is recorded under `category`.
    pub fn contains(&self, category: ElementCategory) -> bool {
        self.items.iter().any(|e| e.category == category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Element> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every element, ready for the next filename.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
