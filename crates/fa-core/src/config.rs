//! Ranking configuration.
//!
//! The settings a user can change between runs (sample size, ranking
//! direction) are carried in an immutable [`RankConfig`] passed to each
//! ranking call, never held as process-wide state.

use std::fmt;

// ── RankDirection ─────────────────────────────────────────────────────────────

/// Which end of the isolation ordering comes first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankDirection {
    /// Highest score first (strictly descending).
    #[default]
    MostIsolatedFirst,
    /// Lowest score first (ascending).
    LeastIsolatedFirst,
}

impl fmt::Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDirection::MostIsolatedFirst  => f.write_str("most isolated first"),
            RankDirection::LeastIsolatedFirst => f.write_str("least isolated first"),
        }
    }
}

// ── RankConfig ────────────────────────────────────────────────────────────────

/// Parameters of one ranking request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankConfig {
    /// Number of nearest stores averaged per residential node (`k`).
    /// Clamped down to the store count by the ranking driver; zero is an
    /// error.  Default: 3.
    pub sample_size: usize,

    /// Ordering of the output.  Default: most isolated first.
    pub direction: RankDirection,
}

impl RankConfig {
    pub const DEFAULT_SAMPLE_SIZE: usize = 3;

    pub fn new(sample_size: usize, direction: RankDirection) -> Self {
        Self { sample_size, direction }
    }

    /// The sample size actually usable against `stores` stores.
    #[inline]
    pub fn effective_sample_size(&self, stores: usize) -> usize {
        self.sample_size.min(stores)
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLE_SIZE, RankDirection::default())
    }
}
