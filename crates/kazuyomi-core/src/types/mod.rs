pub mod element;
pub mod token;

pub use element::{Element, ElementCategory, Elements};
pub use token::{Token, TokenCategory, TokenFlags, TokenRange, Tokens};
