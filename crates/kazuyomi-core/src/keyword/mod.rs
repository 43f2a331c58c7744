//! # Keyword Registry
//!
//! Classifies normalized strings into element categories and performs the
//! literal pre-scan that runs before tokenization.

mod defaults;
pub mod manager;
mod peek;

pub use manager::{Keyword, KeywordManager, KeywordOptions};
