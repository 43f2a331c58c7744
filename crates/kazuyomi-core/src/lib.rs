//! # Kazuyomi Core
//!
//! The number disambiguation engine behind Kazuyomi. Given a filename already
//! split into tokens, it decides which numbers are episodes, volumes, seasons
//! or release versions, backed by a registry of known keywords.
//!
//! ## Quick Start
//!
//! ```rust
//! use kazuyomi_core::parser::{NumberParser, ParseContext};
//! use kazuyomi_core::{ElementCategory, Elements, Token, TokenCategory, Tokens};
//!
//! let mut tokens: Tokens = vec![
//!     Token::new(TokenCategory::Unknown, "Toradora", false),
//!     Token::new(TokenCategory::Delimiter, " ", false).at(8),
//!     Token::new(TokenCategory::Unknown, "-", false).at(9),
//!     Token::new(TokenCategory::Delimiter, " ", false).at(10),
//!     Token::new(TokenCategory::Unknown, "08", false).at(11),
//! ]
//! .into();
//! let mut elements = Elements::new();
//! let mut context = ParseContext::new();
//!
//! let parser = NumberParser::new().unwrap();
//! let found = parser
//!     .session(&mut tokens, &mut elements, &mut context)
//!     .search_for_episode_number();
//!
//! assert!(found);
//! assert_eq!(elements.get(ElementCategory::EpisodeNumber), Some("8"));
//! assert_eq!(tokens[2].category, TokenCategory::Identifier);
//! ```
pub mod error;
pub mod keyword;
pub mod parser;
pub mod types;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

// Re-export primary API
pub use error::{KazuyomiError, Result};
pub use keyword::{Keyword, KeywordManager, KeywordOptions};
pub use parser::{NumberParser, NumberSession, ParseContext};
pub use types::{
    Element, ElementCategory, Elements, Token, TokenCategory, TokenFlags, TokenRange, Tokens,
};
