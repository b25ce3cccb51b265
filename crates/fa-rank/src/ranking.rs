//! Total ordering of residential nodes by isolation score.
//!
//! # Ordering policy
//!
//! | Direction             | Order             | Ties                         |
//! |-----------------------|-------------------|------------------------------|
//! | `MostIsolatedFirst`   | descending score  | residential input order      |
//! | `LeastIsolatedFirst`  | ascending score   | residential input order      |
//!
//! Both directions keep tied nodes in input order, so `LeastIsolatedFirst`
//! reverses `MostIsolatedFirst` on the score sequence but is not a literal
//! reversal of the entry sequence when ties exist.
//!
//! The ordering is built by repeated extract-max / extract-min, scanning the
//! remaining candidates in index order and moving the best only on a strict
//! improvement.  This is `O(r²)` in the number of residential nodes; a
//! stable comparison sort would give the same output.

use std::ops::Range;
use std::slice;

use tracing::{debug, warn};

use fa_core::{FaError, FaResult, NodeIdx, RankConfig, RankDirection};
use fa_graph::{DistanceMatrix, NodeCatalog};

use crate::isolation::{average_distance, check_range};

// ── RankedEntry / RankedList ──────────────────────────────────────────────────

/// One residential node and its isolation score (edge-weight units).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    pub node:  NodeIdx,
    pub score: f64,
}

/// Residential nodes in rank order.  One entry per residential node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedList {
    entries:     Vec<RankedEntry>,
    direction:   RankDirection,
    sample_size: usize,
}

impl RankedList {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn direction(&self) -> RankDirection {
        self.direction
    }

    /// The `k` actually used, after clamping to the store count.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// The first `n` entries (all of them if `n >= len()`).
    pub fn top(&self, n: usize) -> &[RankedEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn iter(&self) -> slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = slice::Iter<'a, RankedEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── rank ──────────────────────────────────────────────────────────────────────

/// Score every node in `residential` against `stores` and order them.
///
/// `config.sample_size` larger than the store count is clamped down (with
/// a warning); zero, or an empty store range, is
/// [`FaError::InvalidSampleSize`].
pub fn rank(
    dist:        &DistanceMatrix,
    stores:      Range<usize>,
    residential: Range<usize>,
    config:      &RankConfig,
) -> FaResult<RankedList> {
    let n = dist.size();
    check_range(&stores, n)?;
    check_range(&residential, n)?;

    let store_count = stores.len();
    if config.sample_size == 0 || store_count == 0 {
        return Err(FaError::InvalidSampleSize { k: config.sample_size, stores: store_count });
    }
    let k = config.effective_sample_size(store_count);
    if k < config.sample_size {
        warn!(requested = config.sample_size, stores = store_count, "sample size clamped to store count");
    }

    let scored = residential
        .map(|r| -> FaResult<RankedEntry> {
            let node = NodeIdx::from_position(r)?;
            let score = average_distance(dist, stores.clone(), k, node)?;
            Ok(RankedEntry { node, score })
        })
        .collect::<FaResult<Vec<_>>>()?;

    let entries = select_order(scored, config.direction);
    debug!(residential = entries.len(), k, direction = %config.direction, "ranking computed");

    Ok(RankedList { entries, direction: config.direction, sample_size: k })
}

/// Repeatedly pull the best remaining entry.  `Vec::remove` keeps the
/// remaining candidates in input order, so the first of several tied
/// entries is always pulled first.
fn select_order(mut pending: Vec<RankedEntry>, direction: RankDirection) -> Vec<RankedEntry> {
    let mut ordered = Vec::with_capacity(pending.len());
    while !pending.is_empty() {
        let mut best = 0;
        for (i, e) in pending.iter().enumerate().skip(1) {
            let better = match direction {
                RankDirection::MostIsolatedFirst  => e.score > pending[best].score,
                RankDirection::LeastIsolatedFirst => e.score < pending[best].score,
            };
            if better {
                best = i;
            }
        }
        ordered.push(pending.remove(best));
    }
    ordered
}

// ── IsolationRanker ───────────────────────────────────────────────────────────

/// Binds a distance matrix to a catalog's store and residential ranges.
///
/// # Example
///
/// ```rust,ignore
/// let dist = FloydWarshall.compute(&adjacency);
/// let ranker = IsolationRanker::new(&dist, &catalog);
/// let ranked = ranker.rank(&RankConfig::default())?;
/// ```
pub struct IsolationRanker<'a> {
    dist:        &'a DistanceMatrix,
    stores:      Range<usize>,
    residential: Range<usize>,
}

impl<'a> IsolationRanker<'a> {
    pub fn new(dist: &'a DistanceMatrix, catalog: &NodeCatalog) -> Self {
        Self {
            dist,
            stores:      catalog.store_range(),
            residential: catalog.residential_range(),
        }
    }

    /// See [`average_distance`].
    pub fn average_distance(&self, node: NodeIdx, k: usize) -> FaResult<f64> {
        average_distance(self.dist, self.stores.clone(), k, node)
    }

    /// See [`rank`].
    pub fn rank(&self, config: &RankConfig) -> FaResult<RankedList> {
        rank(self.dist, self.stores.clone(), self.residential.clone(), config)
    }

    /// See [`reachable_store_count`](crate::reachable_store_count).
    pub fn reachable_stores(&self, node: NodeIdx) -> FaResult<usize> {
        crate::isolation::reachable_store_count(self.dist, self.stores.clone(), node)
    }
}
