//! # Pattern cascades
//!
//! Ordered rule tables deciding what a single word containing a number
//! means. Each rule is guarded by the shape of the word (is the first or last
//! character a digit?) and the first rule that commits wins.

use tracing::trace;

use crate::keyword::KeywordManager;
use crate::parser::number::NumberSession;
use crate::types::{ElementCategory, Token, TokenCategory};
use crate::util::{
    ends_with_digit, find_number_in_string, is_numeric_string, leading_digits, leading_number,
    starts_with_digit, strip_leading_zeros, trim_separators,
};

type Matcher = fn(&mut NumberSession<'_>, &str, usize) -> bool;

/// Where the digits sit in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shape {
    numeric_front: bool,
    numeric_back: bool,
}

impl Shape {
    fn of(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }
        Some(Self {
            numeric_front: starts_with_digit(word),
            numeric_back: ends_with_digit(word),
        })
    }
}

/// Shape precondition a rule is tried under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    /// First and last characters are digits.
    Bounded,
    NumericBack,
    TextFront,
    NumericFrontTextBack,
    NumericFront,
}

impl Guard {
    fn admits(self, shape: Shape) -> bool {
        match self {
            Self::Bounded => shape.numeric_front && shape.numeric_back,
            Self::NumericBack => shape.numeric_back,
            Self::TextFront => !shape.numeric_front,
            Self::NumericFrontTextBack => shape.numeric_front && !shape.numeric_back,
            Self::NumericFront => shape.numeric_front,
        }
    }
}

struct Rule {
    name: &'static str,
    guard: Guard,
    matcher: Matcher,
}

const EPISODE_RULES: &[Rule] = &[
    Rule { name: "single_episode", guard: Guard::Bounded, matcher: single_episode },
    Rule { name: "multi_episode", guard: Guard::Bounded, matcher: multi_episode },
    Rule { name: "fractional_episode", guard: Guard::Bounded, matcher: fractional_episode },
    Rule { name: "season_and_episode", guard: Guard::NumericBack, matcher: season_and_episode },
    Rule { name: "number_sign", guard: Guard::NumericBack, matcher: number_sign },
    Rule { name: "type_and_episode", guard: Guard::TextFront, matcher: type_and_episode },
    Rule { name: "partial_episode", guard: Guard::NumericFrontTextBack, matcher: partial_episode },
    Rule { name: "japanese_counter", guard: Guard::NumericFront, matcher: japanese_counter },
];

const VOLUME_RULES: &[Rule] = &[
    Rule { name: "single_volume", guard: Guard::Bounded, matcher: single_volume },
    Rule { name: "multi_volume", guard: Guard::Bounded, matcher: multi_volume },
];

impl NumberSession<'_> {
    /// Runs the episode cascade on `word`, committing against `token`.
    ///
    /// Purely numeric words never match; they are left to the whole-list
    /// strategies.
    pub fn match_episode_patterns(&mut self, word: &str, token: usize) -> bool {
        self.run_rules(EPISODE_RULES, word, token)
    }

    /// Runs the volume cascade on `word`, committing against `token`.
    pub fn match_volume_patterns(&mut self, word: &str, token: usize) -> bool {
        self.run_rules(VOLUME_RULES, word, token)
    }

    fn run_rules(&mut self, rules: &[Rule], word: &str, token: usize) -> bool {
        if is_numeric_string(word) {
            return false;
        }
        let word = trim_separators(word);
        let Some(shape) = Shape::of(word) else {
            return false;
        };

        for rule in rules.iter().filter(|rule| rule.guard.admits(shape)) {
            if (rule.matcher)(self, word, token) {
                trace!(rule = rule.name, word, "number pattern matched");
                return true;
            }
        }
        false
    }
}

/// A range bound pair is usable only when strictly increasing.
fn is_increasing(lower: &str, upper: &str) -> bool {
    matches!((leading_number(lower), leading_number(upper)), (Some(l), Some(u)) if l < u)
}

fn record_version(session: &mut NumberSession<'_>, version: Option<regex::Match<'_>>) {
    if let Some(version) = version {
        session
            .elements
            .insert(ElementCategory::ReleaseVersion, version.as_str());
    }
}

// "01v2"
fn single_episode(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let Some(caps) = session.patterns.single_episode.captures(word) else {
        return false;
    };
    session.set_episode_number(&caps[1], token, false);
    record_version(session, caps.get(2));
    true
}

// "01-02", "03-05v2"
fn multi_episode(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let Some(caps) = session.patterns.multi_episode.captures(word) else {
        return false;
    };
    let (lower, upper) = (&caps[1], &caps[3]);
    if !is_increasing(lower, upper) || !session.set_episode_number(lower, token, true) {
        return false;
    }
    session.set_episode_number(upper, token, false);
    record_version(session, caps.get(2));
    record_version(session, caps.get(4));
    true
}

// "07.5"
fn fractional_episode(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    session.patterns.fractional_episode.is_match(word)
        && session.set_episode_number(word, token, true)
}

// "2x01", "S01E03", "S01-02xE001-150"
fn season_and_episode(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let Some(caps) = session.patterns.season_and_episode.captures(word) else {
        return false;
    };
    if leading_number(&caps[1]) == Some(0) {
        return false;
    }

    for season in [caps.get(1), caps.get(2)].into_iter().flatten() {
        session
            .elements
            .insert(ElementCategory::AnimeSeason, strip_leading_zeros(season.as_str()));
    }
    session.set_episode_number(&caps[3], token, false);
    if let Some(last) = caps.get(4) {
        session.set_episode_number(last.as_str(), token, false);
    }
    record_version(session, caps.get(5));
    true
}

// "#01", "#02-03v2"
fn number_sign(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    if !word.starts_with('#') {
        return false;
    }
    let Some(caps) = session.patterns.number_sign.captures(word) else {
        return false;
    };
    if !session.set_episode_number(&caps[1], token, true) {
        return false;
    }
    if let Some(second) = caps.get(2) {
        session.set_episode_number(second.as_str(), token, false);
    }
    record_version(session, caps.get(3));
    true
}

// "ED1", "OP4a", "OVA2"
fn type_and_episode(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let Some(number_begin) = find_number_in_string(word) else {
        return false;
    };
    let (prefix, number) = word.split_at(number_begin);
    let Some(keyword) = session
        .keywords
        .find(&KeywordManager::normalize(prefix), ElementCategory::AnimeType)
    else {
        return false;
    };

    session.elements.insert(ElementCategory::AnimeType, prefix);
    if !session.match_episode_patterns(number, token)
        && !session.set_episode_number(number, token, true)
    {
        return false;
    }

    // Split the token last so `token` stays valid for the commits above.
    let Some(original) = session.tokens.get_mut(token) else {
        return false;
    };
    let lead = original.content.find(word).unwrap_or(0);
    let prefix_offset = original.offset + lead;
    let enclosed = original.enclosed;
    original.content = number.to_string();
    original.offset = prefix_offset + number_begin;

    let category = if keyword.options.is_identifiable() {
        TokenCategory::Identifier
    } else {
        TokenCategory::Unknown
    };
    session
        .tokens
        .insert_before(token, Token::new(category, prefix, enclosed).at(prefix_offset));
    true
}

// "4a", "111C"
fn partial_episode(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let mut suffix = word[leading_digits(word).len()..].chars();
    let valid_suffix = matches!(
        (suffix.next(), suffix.next()),
        (Some('A'..='C' | 'a'..='c'), None)
    );
    valid_suffix && session.set_episode_number(word, token, true)
}

// "01話"
fn japanese_counter(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    if !word.ends_with('\u{8A71}') {
        return false;
    }
    let Some(caps) = session.patterns.japanese_counter.captures(word) else {
        return false;
    };
    session.set_episode_number(&caps[1], token, false);
    true
}

// "01v2"
fn single_volume(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let Some(caps) = session.patterns.single_volume.captures(word) else {
        return false;
    };
    session.set_volume_number(&caps[1], token, false);
    record_version(session, caps.get(2));
    true
}

// "01-02", "01-02v2"
fn multi_volume(session: &mut NumberSession<'_>, word: &str, token: usize) -> bool {
    let Some(caps) = session.patterns.multi_volume.captures(word) else {
        return false;
    };
    let (lower, upper) = (&caps[1], &caps[2]);
    if !is_increasing(lower, upper) || !session.set_volume_number(lower, token, true) {
        return false;
    }
    session.set_volume_number(upper, token, false);
    record_version(session, caps.get(3));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::context::ParseContext;
    use crate::parser::number::NumberParser;
    use crate::types::{Elements, Tokens};

    /// Runs the episode cascade over a one-token list.
    fn episode(word: &str) -> (bool, Tokens, Elements) {
        let parser = NumberParser::new().unwrap();
        let mut tokens: Tokens = vec![Token::new(TokenCategory::Unknown, word, false)].into();
        let mut elements = Elements::new();
        let mut context = ParseContext::new();
        let matched = parser
            .session(&mut tokens, &mut elements, &mut context)
            .match_episode_patterns(word, 0);
        (matched, tokens, elements)
    }

    fn volume(word: &str) -> (bool, Elements) {
        let parser = NumberParser::new().unwrap();
        let mut tokens: Tokens = vec![Token::new(TokenCategory::Unknown, word, false)].into();
        let mut elements = Elements::new();
        let mut context = ParseContext::new();
        let matched = parser
            .session(&mut tokens, &mut elements, &mut context)
            .match_volume_patterns(word, 0);
        (matched, elements)
    }

    #[test]
    fn test_guards() {
        let bounded = Shape::of("01v2").unwrap();
        let text_front = Shape::of("OP4a").unwrap();
        let partial = Shape::of("4a").unwrap();

        assert!(Guard::Bounded.admits(bounded));
        assert!(!Guard::Bounded.admits(partial));
        assert!(Guard::TextFront.admits(text_front));
        assert!(Guard::NumericFrontTextBack.admits(partial));
        assert!(Guard::NumericFront.admits(partial));
        assert!(!Guard::NumericBack.admits(text_front));
        assert!(Shape::of("").is_none());
    }

    #[test]
    fn test_numeric_words_are_left_alone() {
        let (matched, tokens, elements) = episode("08");
        assert!(!matched);
        assert!(elements.is_empty());
        assert_eq!(tokens[0].category, TokenCategory::Unknown);

        assert!(!episode("").0);
        assert!(!episode(" - ").0);
    }

    #[test]
    fn test_single_episode_with_version() {
        let (matched, tokens, elements) = episode("01v2");
        assert!(matched);
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("1"));
        assert_eq!(elements.get(ElementCategory::ReleaseVersion), Some("2"));
        assert_eq!(tokens[0].category, TokenCategory::Identifier);
    }

    #[test]
    fn test_multi_episode_range() {
        let (matched, _, elements) = episode("03-05v2");
        assert!(matched);
        assert_eq!(elements.get_all(ElementCategory::EpisodeNumber), vec!["3", "5"]);
        assert_eq!(elements.get_all(ElementCategory::ReleaseVersion), vec!["2"]);

        let (matched, _, elements) = episode("01v2-02v3");
        assert!(matched);
        assert_eq!(elements.get_all(ElementCategory::ReleaseVersion), vec!["2", "3"]);
    }

    #[test]
    fn test_descending_ranges_are_rejected() {
        for word in ["5-2", "009-1", "05-05"] {
            let (matched, _, elements) = episode(word);
            assert!(!matched, "{word}");
            assert!(elements.is_empty(), "{word}");
        }
    }

    #[test]
    fn test_fractional_episode() {
        let (matched, _, elements) = episode("07.5");
        assert!(matched);
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("7.5"));
        assert!(!episode("07.4").0);
    }

    #[test]
    fn test_season_and_episode() {
        let (matched, _, elements) = episode("S01E03");
        assert!(matched);
        assert_eq!(elements.get_all(ElementCategory::AnimeSeason), vec!["1"]);
        assert_eq!(elements.get_all(ElementCategory::EpisodeNumber), vec!["3"]);

        let (_, _, elements) = episode("S01-02xE001-150");
        assert_eq!(elements.get_all(ElementCategory::AnimeSeason), vec!["1", "2"]);
        assert_eq!(elements.get_all(ElementCategory::EpisodeNumber), vec!["1", "150"]);

        let (_, _, elements) = episode("2x01");
        assert_eq!(elements.get(ElementCategory::AnimeSeason), Some("2"));
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("1"));

        let (_, _, elements) = episode("s02e11v2");
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("11"));
        assert_eq!(elements.get(ElementCategory::ReleaseVersion), Some("2"));
    }

    #[test]
    fn test_season_zero_is_rejected() {
        let (matched, _, elements) = episode("S00E01");
        assert!(!matched);
        assert!(elements.is_empty());
    }

    #[test]
    fn test_number_sign() {
        let (matched, _, elements) = episode("#01-03v2");
        assert!(matched);
        assert_eq!(elements.get_all(ElementCategory::EpisodeNumber), vec!["1", "3"]);
        assert_eq!(elements.get(ElementCategory::ReleaseVersion), Some("2"));

        let (_, _, elements) = episode("#12");
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("12"));

        assert!(!episode("#9999").0);
    }

    #[test]
    fn test_type_and_episode_splits_token() {
        let parser = NumberParser::new().unwrap();
        let mut tokens: Tokens = vec![
            Token::new(TokenCategory::Unknown, "Show", false),
            Token::new(TokenCategory::Delimiter, " ", false).at(4),
            Token::new(TokenCategory::Unknown, "OP4a", false).at(5),
        ]
        .into();
        let mut elements = Elements::new();
        let mut context = ParseContext::new();
        let mut session = parser.session(&mut tokens, &mut elements, &mut context);

        assert!(session.match_episode_patterns("OP4a", 2));

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].content, "OP");
        assert_eq!(tokens[2].category, TokenCategory::Unknown);
        assert_eq!(tokens[2].offset, 5);
        assert_eq!(tokens[3].content, "4a");
        assert_eq!(tokens[3].category, TokenCategory::Identifier);
        assert_eq!(tokens[3].offset, 7);

        assert_eq!(elements.get(ElementCategory::AnimeType), Some("OP"));
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("4a"));
    }

    #[test]
    fn test_type_and_episode_keeps_identifiable_prefix_category() {
        let mut keywords = KeywordManager::empty();
        keywords.register(
            ElementCategory::AnimeType,
            crate::keyword::KeywordOptions::DEFAULT,
            ["CM"],
        );
        let parser = NumberParser::with_keywords(&keywords).unwrap();
        let mut tokens: Tokens = vec![Token::new(TokenCategory::Unknown, "CM02", true)].into();
        let mut elements = Elements::new();
        let mut context = ParseContext::new();

        assert!(parser
            .session(&mut tokens, &mut elements, &mut context)
            .match_episode_patterns("CM02", 0));
        assert_eq!(tokens[0].category, TokenCategory::Identifier);
        assert!(tokens[0].enclosed);
        assert_eq!(tokens[1].content, "02");
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("2"));
    }

    #[test]
    fn test_unknown_type_prefix_does_not_split() {
        let (matched, tokens, elements) = episode("XYZ4a");
        assert!(!matched);
        assert_eq!(tokens.len(), 1);
        assert!(elements.is_empty());
    }

    #[test]
    fn test_partial_episode() {
        let (matched, _, elements) = episode("111C");
        assert!(matched);
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("111C"));

        assert!(!episode("4d").0);
        assert!(!episode("4ab").0);
    }

    #[test]
    fn test_japanese_counter() {
        let (matched, _, elements) = episode("01\u{8A71}");
        assert!(matched);
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("1"));
    }

    #[test]
    fn test_input_is_trimmed() {
        let (matched, _, elements) = episode("-01v2 ");
        assert!(matched);
        assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("1"));
    }

    #[test]
    fn test_volume_patterns() {
        let (matched, elements) = volume("01v2");
        assert!(matched);
        assert_eq!(elements.get(ElementCategory::VolumeNumber), Some("1"));
        assert_eq!(elements.get(ElementCategory::ReleaseVersion), Some("2"));

        let (matched, elements) = volume("01-02v3");
        assert!(matched);
        assert_eq!(elements.get_all(ElementCategory::VolumeNumber), vec!["1", "2"]);
        assert_eq!(elements.get(ElementCategory::ReleaseVersion), Some("3"));

        assert!(!volume("03-01").0);
        assert!(!volume("05").0);
        assert!(!volume("S01E02").0);
        assert!(!volume("4a").0);
    }
}
