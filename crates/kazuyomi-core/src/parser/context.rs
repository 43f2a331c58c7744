/// State threaded through one filename parse.
///
/// The orchestrator sets the episode-prefix flag once it has seen an explicit
/// episode keyword ("EP", "Episode"); from then on competing episode numbers
/// are arbitrated instead of appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseContext {
    episode_prefix_seen: bool,
}

impl ParseContext {
    /// Create a fresh context for a new filename.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether an episode-prefix keyword has been observed.
    pub fn with_episode_prefix(mut self, seen: bool) -> Self {
        self.episode_prefix_seen = seen;
        self
    }

    pub fn episode_prefix_seen(&self) -> bool {
        self.episode_prefix_seen
    }

    /// Record that an episode-prefix keyword was observed.
    pub fn mark_episode_prefix(&mut self) {
        self.episode_prefix_seen = true;
    }

    /// Forget everything, ready for the next filename.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
