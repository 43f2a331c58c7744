//! # Kazuyomi
//!
//! Episode, volume and season number extraction for anime release filenames.
//!
//! This crate re-exports [`kazuyomi_core`]; see its documentation for the
//! search strategies and the keyword registry.
//!
//! ```rust
//! use kazuyomi::{ElementCategory, KeywordManager};
//!
//! let keywords = KeywordManager::global();
//! assert!(keywords.contains(ElementCategory::VolumePrefix, "VOL"));
//! ```
pub use kazuyomi_core::*;
