use std::cmp::Ordering;

use tracing::warn;

use crate::error::Result;
use crate::keyword::KeywordManager;
use crate::parser::context::ParseContext;
use crate::parser::patterns::NumberPatterns;
use crate::types::{ElementCategory, Elements, TokenCategory, TokenFlags, Tokens};
use crate::util::{
    compare_leading_numbers, find_number_in_string, is_numeric_string, leading_number,
    strip_leading_zeros,
};

/// Highest number accepted as a volume when validating.
pub const MAX_VOLUME_NUMBER: u64 = 20;

/// Highest number accepted as an episode when validating.
pub const MAX_EPISODE_NUMBER: u64 = 2049;

/// Returns `true` if the leading digit run of `number` is a plausible volume.
pub fn is_valid_volume_number(number: &str) -> bool {
    leading_number(number).is_some_and(|n| n <= MAX_VOLUME_NUMBER)
}

/// Returns `true` if the leading digit run of `number` is a plausible episode.
///
/// Trailing text is ignored, so `"4a"` and `"07.5"` validate on 4 and 7.
pub fn is_valid_episode_number(number: &str) -> bool {
    leading_number(number).is_some_and(|n| n <= MAX_EPISODE_NUMBER)
}

/// The number disambiguation engine.
///
/// Holds the compiled patterns and a reference to the keyword registry; both
/// are read-only, so one parser can serve any number of parses.
///
/// ```rust
/// use kazuyomi_core::parser::NumberParser;
///
/// let parser = NumberParser::new().unwrap();
/// assert!(parser.keywords().contains(
///     kazuyomi_core::ElementCategory::EpisodePrefix,
///     "EP",
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct NumberParser<'k> {
    keywords: &'k KeywordManager,
    patterns: NumberPatterns,
}

impl NumberParser<'static> {
    /// Constructs a parser backed by the global keyword registry.
    ///
    /// # Errors
    ///
    /// Returns `KazuyomiError::RegexError` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_keywords(KeywordManager::global())
    }
}

impl<'k> NumberParser<'k> {
    /// Constructs a parser backed by `keywords`.
    ///
    /// # Errors
    ///
    /// Returns `KazuyomiError::RegexError` if a pattern fails to compile.
    pub fn with_keywords(keywords: &'k KeywordManager) -> Result<Self> {
        Ok(Self {
            keywords,
            patterns: NumberPatterns::new()?,
        })
    }

    pub fn keywords(&self) -> &'k KeywordManager {
        self.keywords
    }

    /// Opens a session over one filename's tokens and elements.
    pub fn session<'s>(
        &'s self,
        tokens: &'s mut Tokens,
        elements: &'s mut Elements,
        context: &'s mut ParseContext,
    ) -> NumberSession<'s> {
        NumberSession {
            keywords: self.keywords,
            patterns: &self.patterns,
            tokens,
            elements,
            context,
        }
    }
}

/// Number matching over one parse.
///
/// Every operation mutates the borrowed token and element lists in place and
/// reports success as a `bool`; a `false` means the caller should try its
/// next strategy.
pub struct NumberSession<'s> {
    pub(crate) keywords: &'s KeywordManager,
    pub(crate) patterns: &'s NumberPatterns,
    pub(crate) tokens: &'s mut Tokens,
    pub(crate) elements: &'s mut Elements,
    pub(crate) context: &'s mut ParseContext,
}

impl NumberSession<'_> {
    pub fn tokens(&self) -> &Tokens {
        self.tokens
    }

    pub fn elements(&self) -> &Elements {
        self.elements
    }

    pub fn context(&self) -> &ParseContext {
        self.context
    }

    /// Records a volume number and marks `token` as identified.
    pub fn set_volume_number(&mut self, number: &str, token: usize, validate: bool) -> bool {
        if !self.check_setter_input(number, token) {
            return false;
        }
        if validate && !is_valid_volume_number(number) {
            return false;
        }

        self.elements
            .insert(ElementCategory::VolumeNumber, strip_leading_zeros(number));
        self.identify(token);
        true
    }

    /// Records an episode number and marks `token` as identified.
    ///
    /// Once an episode-prefix keyword has been seen, the new number is
    /// arbitrated against the first recorded episode number: the smaller one
    /// stays primary, the larger one becomes the alternative, and an equal
    /// number is rejected. Without that context a value already recorded as
    /// an episode number is rejected.
    pub fn set_episode_number(&mut self, number: &str, token: usize, validate: bool) -> bool {
        if !self.check_setter_input(number, token) {
            return false;
        }
        if validate && !is_valid_episode_number(number) {
            return false;
        }

        self.identify(token);

        let value = strip_leading_zeros(number);
        let mut category = ElementCategory::EpisodeNumber;
        if self.context.episode_prefix_seen() {
            if let Some(existing) = self
                .elements
                .iter_mut()
                .find(|e| e.category == ElementCategory::EpisodeNumber)
            {
                match compare_leading_numbers(&value, &existing.value) {
                    Ordering::Greater => category = ElementCategory::EpisodeNumberAlt,
                    Ordering::Less => existing.category = ElementCategory::EpisodeNumberAlt,
                    Ordering::Equal => return false,
                }
            }
        } else if self
            .elements
            .iter()
            .any(|e| e.category == ElementCategory::EpisodeNumber && e.value == value)
        {
            return false;
        }

        self.elements.insert(category, value);
        true
    }

    /// Records an alternative episode number and marks `token` as identified.
    pub fn set_alternative_episode_number(&mut self, number: &str, token: usize) -> bool {
        if !self.check_setter_input(number, token) {
            return false;
        }

        self.elements
            .insert(ElementCategory::EpisodeNumberAlt, strip_leading_zeros(number));
        self.identify(token);
        true
    }

    /// Handles a prefix glued to its number, e.g. "EP.1", "Vol.3", "E05".
    ///
    /// Returns whether the prefix was recognized under `category`
    /// (episode or volume prefix), whether or not a number was recorded.
    pub fn number_comes_after_prefix(&mut self, category: ElementCategory, token: usize) -> bool {
        let Some(content) = self.tokens.get(token).map(|t| t.content.clone()) else {
            return false;
        };
        let number_begin = find_number_in_string(&content).unwrap_or(content.len());
        let (prefix, number) = content.split_at(number_begin);

        if !self
            .keywords
            .contains(category, &KeywordManager::normalize(prefix))
        {
            return false;
        }

        match category {
            ElementCategory::EpisodePrefix => {
                if !number.is_empty() && !self.match_episode_patterns(number, token) {
                    self.set_episode_number(number, token, false);
                }
            }
            ElementCategory::VolumePrefix => {
                if !number.is_empty() && !self.match_volume_patterns(number, token) {
                    self.set_volume_number(number, token, false);
                }
            }
            _ => return false,
        }
        true
    }

    /// Handles a prefix keyword standing on its own, e.g. "EP 01", "Vol 3".
    ///
    /// The next non-delimiter token must be unknown and start with a digit.
    /// Prefixes registered as invalid ("E") are not used this way.
    pub fn number_comes_after_prefix_token(
        &mut self,
        category: ElementCategory,
        token: usize,
    ) -> bool {
        let Some(prefix) = self.tokens.get(token) else {
            return false;
        };
        let usable = self
            .keywords
            .find(&KeywordManager::normalize(&prefix.content), category)
            .is_some_and(|keyword| keyword.options.is_valid());
        if !usable {
            return false;
        }

        let Some(next) = self.tokens.find_next(token, TokenFlags::NOT_DELIMITER) else {
            return false;
        };
        let next_token = &self.tokens[next];
        if next_token.category != TokenCategory::Unknown
            || find_number_in_string(&next_token.content) != Some(0)
        {
            return false;
        }
        let content = next_token.content.clone();

        match category {
            ElementCategory::EpisodePrefix => {
                if !self.match_episode_patterns(&content, next) {
                    self.set_episode_number(&content, next, false);
                }
            }
            ElementCategory::VolumePrefix => {
                if !self.match_volume_patterns(&content, next) {
                    self.set_volume_number(&content, next, false);
                }
            }
            _ => return false,
        }
        self.identify(token);
        true
    }

    /// Handles "01 of 24": the first number is the episode, the second the total.
    ///
    /// The separator matches without regard to ASCII case, so "01 OF 24" counts.
    pub fn number_comes_before_total_number(&mut self, token: usize) -> bool {
        self.number_comes_before_another_number(token, "of", false)
    }

    /// Handles "08 & 10": both numbers are episodes. "08 & 08" records one.
    pub fn number_comes_before_paired_number(&mut self, token: usize) -> bool {
        self.number_comes_before_another_number(token, "&", true)
    }

    fn number_comes_before_another_number(
        &mut self,
        token: usize,
        separator: &str,
        paired: bool,
    ) -> bool {
        let Some(separator_index) = self.tokens.find_next(token, TokenFlags::NOT_DELIMITER) else {
            return false;
        };
        if !self.tokens[separator_index]
            .content
            .eq_ignore_ascii_case(separator)
        {
            return false;
        }
        let Some(other) = self
            .tokens
            .find_next(separator_index, TokenFlags::NOT_DELIMITER)
        else {
            return false;
        };
        if !is_numeric_string(&self.tokens[other].content) {
            return false;
        }

        let number = self.tokens[token].content.clone();
        self.set_episode_number(&number, token, false);
        if paired {
            let other_number = self.tokens[other].content.clone();
            self.set_episode_number(&other_number, other, false);
        }
        self.identify(separator_index);
        self.identify(other);
        true
    }

    pub(crate) fn identify(&mut self, token: usize) {
        if let Some(token) = self.tokens.get_mut(token) {
            token.category = TokenCategory::Identifier;
        }
    }

    fn check_setter_input(&self, number: &str, token: usize) -> bool {
        if number.is_empty() {
            warn!(token, "refusing to record an empty number");
            return false;
        }
        token < self.tokens.len()
    }
}
