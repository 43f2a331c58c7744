use crate::types::{ElementCategory, Elements, TokenRange};

use super::manager::KeywordManager;

/// Literal terms found by a case-sensitive scan before tokenization.
const PEEK_ENTRIES: &[(ElementCategory, &[&str])] = &[
    (ElementCategory::AudioTerm, &["Dual Audio"]),
    (ElementCategory::VideoTerm, &["H264", "H.264", "h264", "h.264"]),
    (ElementCategory::VideoResolution, &["480p", "720p", "1080p"]),
    (ElementCategory::Source, &["Blu-Ray"]),
];

impl KeywordManager {
    /// Scans `filename[range]` for a few multi-part terms the tokenizer would
    /// otherwise split ("Dual Audio", "H.264", "Blu-Ray").
    ///
    /// Every occurrence is appended to `elements` and its span pushed to
    /// `reserved` so the tokenizer keeps it whole. A range outside the
    /// filename, or not on character boundaries, scans nothing.
    pub fn peek_and_add(
        &self,
        filename: &str,
        range: TokenRange,
        elements: &mut Elements,
        reserved: &mut Vec<TokenRange>,
    ) {
        let Some(window) = range.end().and_then(|end| filename.get(range.offset..end)) else {
            return;
        };

        for &(category, keywords) in PEEK_ENTRIES {
            for keyword in keywords {
                for (position, matched) in window.match_indices(keyword) {
                    elements.insert(category, matched);
                    reserved.push(TokenRange::new(range.offset + position, matched.len()));
                }
            }
        }
    }
}
