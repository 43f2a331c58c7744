//! # Number Parser
//!
//! Decides what the numbers in a tokenized filename mean: episode, volume,
//! season or release version.

mod cascade;
pub mod context;
pub mod number;
pub mod patterns;
mod search;

pub use context::ParseContext;
pub use number::{
    MAX_EPISODE_NUMBER, MAX_VOLUME_NUMBER, NumberParser, NumberSession, is_valid_episode_number,
    is_valid_volume_number,
};
pub use patterns::NumberPatterns;
