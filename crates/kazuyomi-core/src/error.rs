use thiserror::Error;

/// Errors that can occur while building the Kazuyomi engine.
///
/// Number matching itself never fails: matchers and search strategies report
/// "no match" through their boolean results.
#[derive(Debug, Error)]
pub enum KazuyomiError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// An element category name could not be recognized.
    #[error("unknown element category: {0:?}")]
    UnknownCategory(String),
}

/// Result type alias for Kazuyomi operations.
pub type Result<T> = std::result::Result<T, KazuyomiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = KazuyomiError::UnknownCategory("episode_numbr".into());
        assert_eq!(err.to_string(), "unknown element category: \"episode_numbr\"");

        let regex_err = regex::Regex::new("(").unwrap_err();
        let err = KazuyomiError::from(regex_err);
        assert!(err.to_string().starts_with("regex compilation error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KazuyomiError>();
    }
}
