//! # Whole-list search strategies
//!
//! Each strategy scans candidate tokens for one kind of evidence and reports
//! whether it committed an episode number. [`NumberSession::search_for_episode_number`]
//! tries them in descending order of confidence.

use std::cmp::Ordering;

use tracing::debug;

use crate::parser::number::{NumberSession, is_valid_episode_number};
use crate::types::{ElementCategory, TokenCategory, TokenFlags};
use crate::util::{
    compare_leading_numbers, find_number_in_string, is_dash, is_numeric_string, starts_with_digit,
};

// TODO: source these from the keyword registry once it has a category for
// words that introduce a sequel or part number.
const LAST_NUMBER_BLOCKERS: &[&str] = &["Movie", "Part"];

impl NumberSession<'_> {
    /// Unknown tokens containing at least one digit.
    pub fn episode_candidates(&self) -> Vec<usize> {
        self.candidates(|content| find_number_in_string(content).is_some())
    }

    /// Unknown tokens made only of digits.
    pub fn numeric_candidates(&self) -> Vec<usize> {
        self.candidates(is_numeric_string)
    }

    fn candidates(&self, accept: impl Fn(&str) -> bool) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.category == TokenCategory::Unknown && accept(&token.content))
            .map(|(index, _)| index)
            .collect()
    }

    /// Finds an episode number, trying every strategy in priority order.
    ///
    /// Stops at the first strategy that commits.
    pub fn search_for_episode_number(&mut self) -> bool {
        if self.search_for_prefix_keywords() {
            return true;
        }

        let candidates = self.numeric_candidates();
        if self.search_for_equivalent_numbers(&candidates) {
            return true;
        }
        // Runs ahead of the pattern sweep, so "S01E03 - 12" settles on 12.
        let candidates = self.numeric_candidates();
        if self.search_for_separated_numbers(&candidates) {
            return true;
        }
        let candidates = self.episode_candidates();
        if self.search_for_episode_patterns(&candidates) {
            return true;
        }
        let candidates = self.numeric_candidates();
        if self.search_for_isolated_numbers(&candidates) {
            return true;
        }
        let candidates = self.numeric_candidates();
        self.search_for_last_number(&candidates)
    }

    /// Standalone prefix keywords: "EP 01", "Vol 3".
    ///
    /// Volume prefixes are consumed and the sweep goes on; the first episode
    /// prefix that claims a number ends it and marks the context.
    pub fn search_for_prefix_keywords(&mut self) -> bool {
        for index in 0..self.tokens.len() {
            if self.tokens[index].category != TokenCategory::Unknown {
                continue;
            }
            if self.number_comes_after_prefix_token(ElementCategory::EpisodePrefix, index) {
                self.context.mark_episode_prefix();
                debug!(strategy = "prefix_keywords", token = %self.tokens[index].content, "episode number committed");
                return true;
            }
            self.number_comes_after_prefix_token(ElementCategory::VolumePrefix, index);
        }
        false
    }

    /// "08 (114)": a number followed by an isolated bracketed number. The
    /// smaller one is the episode, the larger the alternative numbering.
    pub fn search_for_equivalent_numbers(&mut self, candidates: &[usize]) -> bool {
        for &index in candidates {
            let Some(token) = self.tokens.get(index) else {
                continue;
            };
            if self.tokens.is_isolated(index) || !is_valid_episode_number(&token.content) {
                continue;
            }

            let Some(bracket) = self.tokens.find_next(index, TokenFlags::NOT_DELIMITER) else {
                continue;
            };
            if self.tokens[bracket].category != TokenCategory::Bracket {
                continue;
            }
            let Some(next) = self
                .tokens
                .find_next(bracket, TokenFlags::ENCLOSED | TokenFlags::NOT_DELIMITER)
            else {
                continue;
            };
            let next_token = &self.tokens[next];
            if next_token.category != TokenCategory::Unknown
                || !self.tokens.is_isolated(next)
                || !is_numeric_string(&next_token.content)
                || !is_valid_episode_number(&next_token.content)
            {
                continue;
            }

            let (primary, alternative) =
                if compare_leading_numbers(&next_token.content, &token.content) == Ordering::Less {
                    (next, index)
                } else {
                    (index, next)
                };
            let primary_number = self.tokens[primary].content.clone();
            let alternative_number = self.tokens[alternative].content.clone();

            self.set_episode_number(&primary_number, primary, false);
            self.set_alternative_episode_number(&alternative_number, alternative);
            debug!(strategy = "equivalent_numbers", episode = %primary_number, alternative = %alternative_number, "episode number committed");
            return true;
        }
        false
    }

    /// "Show - 08": a number right after a lone dash.
    pub fn search_for_separated_numbers(&mut self, candidates: &[usize]) -> bool {
        for &index in candidates {
            let Some(previous) = self.tokens.find_prev(index, TokenFlags::NOT_DELIMITER) else {
                continue;
            };
            let dash = &self.tokens[previous];
            if dash.category != TokenCategory::Unknown || !is_dash(&dash.content) {
                continue;
            }

            let number = self.tokens[index].content.clone();
            if self.set_episode_number(&number, index, true) {
                self.identify(previous);
                debug!(strategy = "separated_numbers", episode = %number, "episode number committed");
                return true;
            }
        }
        false
    }

    /// Main sweep: glued prefixes, "N of M" and "N & M", then the episode
    /// cascade on each candidate's own content.
    pub fn search_for_episode_patterns(&mut self, candidates: &[usize]) -> bool {
        for &index in candidates {
            let Some(token) = self.tokens.get(index) else {
                continue;
            };
            if token.category != TokenCategory::Unknown {
                continue;
            }
            let content = token.content.clone();

            if !starts_with_digit(&content) {
                // "EP.1", "Vol.1"
                if self.number_comes_after_prefix(ElementCategory::EpisodePrefix, index) {
                    self.context.mark_episode_prefix();
                    debug!(strategy = "episode_prefix", token = %content, "episode number committed");
                    return true;
                }
                if self.number_comes_after_prefix(ElementCategory::VolumePrefix, index) {
                    continue;
                }
            } else if self.number_comes_before_total_number(index)
                || self.number_comes_before_paired_number(index)
            {
                debug!(strategy = "another_number", episode = %content, "episode number committed");
                return true;
            }

            if self.match_episode_patterns(&content, index) {
                debug!(strategy = "episode_patterns", token = %content, "episode number committed");
                return true;
            }
        }
        false
    }

    /// "[12]": the first bracketed number standing alone.
    pub fn search_for_isolated_numbers(&mut self, candidates: &[usize]) -> bool {
        for &index in candidates {
            let Some(token) = self.tokens.get(index) else {
                continue;
            };
            if !token.enclosed || !self.tokens.is_isolated(index) {
                continue;
            }

            let number = token.content.clone();
            if self.set_episode_number(&number, index, true) {
                debug!(strategy = "isolated_numbers", episode = %number, "episode number committed");
                return true;
            }
        }
        false
    }

    /// Last resort: the last bare number that follows the title.
    pub fn search_for_last_number(&mut self, candidates: &[usize]) -> bool {
        for &index in candidates.iter().rev() {
            // The title always comes first.
            if index == 0 {
                continue;
            }
            let Some(token) = self.tokens.get(index) else {
                continue;
            };
            if token.enclosed {
                continue;
            }
            let opens_title = self
                .tokens
                .iter()
                .take(index)
                .all(|t| t.enclosed || t.category == TokenCategory::Delimiter);
            if opens_title {
                continue;
            }
            if let Some(previous) = self.tokens.find_prev(index, TokenFlags::NOT_DELIMITER) {
                let previous = &self.tokens[previous];
                if previous.category == TokenCategory::Unknown
                    && LAST_NUMBER_BLOCKERS
                        .iter()
                        .any(|blocker| previous.content.eq_ignore_ascii_case(blocker))
                {
                    continue;
                }
            }

            let number = self.tokens[index].content.clone();
            if self.set_episode_number(&number, index, true) {
                debug!(strategy = "last_number", episode = %number, "episode number committed");
                return true;
            }
        }
        false
    }
}
