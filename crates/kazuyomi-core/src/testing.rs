//! # Test token lists
//!
//! Splits readable filenames into bracket, delimiter and unknown tokens so
//! whole-list tests can be written as strings. Real tokenization (extension
//! removal, delimiter voting, peeked spans) belongs to the caller.

use crate::types::{Token, TokenCategory, Tokens};

/// Delimiter characters; `.` and `-` stay inside tokens so "07.5" and
/// "S01-02" survive intact.
const DELIMITERS: &[char] = &[' ', '_'];

const OPEN_BRACKETS: &[char] = &['[', '(', '{', '「', '【'];
const CLOSE_BRACKETS: &[char] = &[']', ')', '}', '」', '】'];

/// Tokenize `input` the way the parse orchestrator would for simple names.
pub(crate) fn tokenize(input: &str) -> Tokens {
    let mut tokens = Tokens::new();
    let mut enclosed = false;
    let mut current_start = 0;

    for (idx, c) in input.char_indices() {
        let is_open = OPEN_BRACKETS.contains(&c);
        let is_close = CLOSE_BRACKETS.contains(&c);
        if !is_open && !is_close && !DELIMITERS.contains(&c) {
            continue;
        }

        if idx > current_start {
            tokens.push(
                Token::new(TokenCategory::Unknown, &input[current_start..idx], enclosed)
                    .at(current_start),
            );
        }

        if is_open {
            enclosed = true;
            tokens.push(Token::new(TokenCategory::Bracket, c.to_string(), true).at(idx));
        } else if is_close {
            tokens.push(Token::new(TokenCategory::Bracket, c.to_string(), true).at(idx));
            enclosed = false;
        } else {
            tokens.push(Token::new(TokenCategory::Delimiter, c.to_string(), enclosed).at(idx));
        }
        current_start = idx + c.len_utf8();
    }

    if current_start < input.len() {
        tokens.push(
            Token::new(TokenCategory::Unknown, &input[current_start..], enclosed)
                .at(current_start),
        );
    }

    tokens
}

#[test]
fn tokenize_brackets_and_delimiters() {
    let tokens = tokenize("[Group] Show_-_08 (114)");
    let contents: Vec<_> = tokens.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["[", "Group", "]", " ", "Show", "_", "-", "_", "08", " ", "(", "114", ")"]
    );
    assert!(tokens[1].enclosed);
    assert!(!tokens[4].enclosed);
    assert_eq!(tokens[8].offset, 15);
    assert_eq!(tokens[0].category, TokenCategory::Bracket);
    assert_eq!(tokens[3].category, TokenCategory::Delimiter);
}
