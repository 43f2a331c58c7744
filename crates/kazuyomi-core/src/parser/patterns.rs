use regex::Regex;

use crate::error::Result;

/// Compiled, whole-string-anchored number patterns.
///
/// Digit classes are spelled `[0-9]` so full-width and other Unicode digits
/// never match.
#[derive(Debug, Clone)]
pub struct NumberPatterns {
    /// "01v2"
    pub(crate) single_episode: Regex,
    /// "01-02", "03-05v2", "01v2-02v3"
    pub(crate) multi_episode: Regex,
    /// "07.5"
    pub(crate) fractional_episode: Regex,
    /// "2x01", "S01E03", "S01-02xE001-150"
    pub(crate) season_and_episode: Regex,
    /// "#01", "#02-03v2"
    pub(crate) number_sign: Regex,
    /// "01話"
    pub(crate) japanese_counter: Regex,
    /// "01v2"
    pub(crate) single_volume: Regex,
    /// "01-02", "01-02v2"
    pub(crate) multi_volume: Regex,
}

impl NumberPatterns {
    /// Compiles every pattern.
    ///
    /// # Errors
    ///
    /// Returns `KazuyomiError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            single_episode: Regex::new(r"^([0-9]{1,4})[vV]([0-9])$")?,
            multi_episode: Regex::new(
                r"^([0-9]{1,4})(?:[vV]([0-9]))?[-~&+]([0-9]{1,4})(?:[vV]([0-9]))?$",
            )?,
            fractional_episode: Regex::new(r"^[0-9]+\.5$")?,
            season_and_episode: Regex::new(
                r"(?i)^S?([0-9]{1,2})(?:-S?([0-9]{1,2}))?(?:x|[ ._x-]?E)([0-9]{1,4})(?:-E?([0-9]{1,4}))?(?:v([0-9]))?$",
            )?,
            number_sign: Regex::new(r"^#([0-9]{1,4})(?:[-~&+]([0-9]{1,4}))?(?:[vV]([0-9]))?$")?,
            japanese_counter: Regex::new("^([0-9]{1,4})\u{8A71}$")?,
            single_volume: Regex::new(r"^([0-9]{1,2})[vV]([0-9])$")?,
            multi_volume: Regex::new(r"^([0-9]{1,2})[-~&+]([0-9]{1,2})(?:[vV]([0-9]))?$")?,
        })
    }
}
