//! # Tokens
//!
//! Lexical units of a filename as produced by the tokenizer, and the ordered
//! list the number parser walks and rewrites.

use std::ops::{Index, IndexMut};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Lexical role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Not yet claimed by any element.
    #[default]
    Unknown,
    /// Claimed by an element; later passes leave it alone.
    Identifier,
    /// An opening or closing bracket.
    Bracket,
    /// A delimiter character such as a space or underscore.
    Delimiter,
}

/// A byte span inside the original filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenRange {
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub size: usize,
}

impl TokenRange {
    pub fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// Exclusive end offset, or `None` on overflow.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.size)
    }
}

/// A token extracted from a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current role of the token.
    pub category: TokenCategory,
    /// The token text.
    pub content: String,
    /// Whether the token sits inside a bracket pair.
    pub enclosed: bool,
    /// Byte offset of `content` in the original filename.
    pub offset: usize,
}

impl Token {
    /// Creates a token at offset zero.
    pub fn new(category: TokenCategory, content: impl Into<String>, enclosed: bool) -> Self {
        Self {
            category,
            content: content.into(),
            enclosed,
            offset: 0,
        }
    }

    /// Sets the byte offset of the token.
    #[must_use]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

bitflags! {
    /// Selects tokens in [`Tokens::find_next`] and [`Tokens::find_prev`].
    ///
    /// Enclosure flags must all hold; category flags are alternatives and
    /// at least one of them must hold.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const ENCLOSED = 1 << 0;
        const NOT_ENCLOSED = 1 << 1;
        const BRACKET = 1 << 2;
        const NOT_BRACKET = 1 << 3;
        const DELIMITER = 1 << 4;
        const NOT_DELIMITER = 1 << 5;
        const IDENTIFIER = 1 << 6;
        const NOT_IDENTIFIER = 1 << 7;
        const UNKNOWN = 1 << 8;
        const NOT_UNKNOWN = 1 << 9;
    }
}

impl TokenFlags {
    const ENCLOSURE: Self = Self::ENCLOSED.union(Self::NOT_ENCLOSED);
    const CATEGORIES: Self = Self::ENCLOSURE.complement();

    /// Returns `true` if `token` satisfies these flags.
    pub fn matches(self, token: &Token) -> bool {
        if self.intersects(Self::ENCLOSURE) {
            let enclosure_ok = if self.contains(Self::ENCLOSED) {
                token.enclosed
            } else {
                !token.enclosed
            };
            if !enclosure_ok {
                return false;
            }
        }

        if self.intersects(Self::CATEGORIES) {
            let checks = [
                (Self::BRACKET, Self::NOT_BRACKET, TokenCategory::Bracket),
                (Self::DELIMITER, Self::NOT_DELIMITER, TokenCategory::Delimiter),
                (Self::IDENTIFIER, Self::NOT_IDENTIFIER, TokenCategory::Identifier),
                (Self::UNKNOWN, Self::NOT_UNKNOWN, TokenCategory::Unknown),
            ];
            let category_ok = checks.iter().any(|&(is, is_not, category)| {
                if self.contains(is) {
                    token.category == category
                } else if self.contains(is_not) {
                    token.category != category
                } else {
                    false
                }
            });
            if !category_ok {
                return false;
            }
        }

        true
    }
}

/// Ordered token list addressed by index.
///
/// Indices are stable except across [`Tokens::insert_before`], which shifts
/// every token at or after the insertion point by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tokens {
    items: Vec<Token>,
}

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.items.push(token);
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Inserts `token` immediately before `index` and returns its position.
    ///
    /// An `index` past the end appends.
    pub fn insert_before(&mut self, index: usize, token: Token) -> usize {
        let index = index.min(self.items.len());
        self.items.insert(index, token);
        index
    }

    /// First token after `index` matching `flags`.
    pub fn find_next(&self, index: usize, flags: TokenFlags) -> Option<usize> {
        let start = index.checked_add(1)?;
        self.items
            .get(start..)?
            .iter()
            .position(|token| flags.matches(token))
            .map(|offset| start + offset)
    }

    /// Last token before `index` matching `flags`.
    pub fn find_prev(&self, index: usize, flags: TokenFlags) -> Option<usize> {
        let end = index.min(self.items.len());
        self.items[..end]
            .iter()
            .rposition(|token| flags.matches(token))
    }

    /// A token is isolated when its nearest non-delimiter neighbours on both
    /// sides are brackets, e.g. `"(114)"` or `"[ 12 ]"`.
    pub fn is_isolated(&self, index: usize) -> bool {
        let is_bracket = |found: Option<usize>| {
            found
                .and_then(|i| self.items.get(i))
                .is_some_and(|token| token.category == TokenCategory::Bracket)
        };
        is_bracket(self.find_prev(index, TokenFlags::NOT_DELIMITER))
            && is_bracket(self.find_next(index, TokenFlags::NOT_DELIMITER))
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IndexMut<usize> for Tokens {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(items: Vec<Token>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
