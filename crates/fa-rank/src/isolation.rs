//! Per-node isolation score.

use std::ops::Range;

use fa_core::{FaError, FaResult, NodeIdx};
use fa_graph::DistanceMatrix;

/// Mean distance from `node` to its `k` nearest reachable stores.
///
/// Unreachable stores are dropped before selection and never count toward
/// `k`.  If fewer than `k` stores are reachable, all reachable ones are
/// averaged; if none are, the score is `0.0`.
///
/// The `k` nearest are picked by repeated extract-minimum (a partial
/// selection sort), which is `O(k · |stores|)`.
///
/// # Errors
///
/// - [`FaError::InvalidSampleSize`] if `k == 0` or `k > stores.len()`.
/// - [`FaError::IndexOutOfRange`] if `node` or `stores` reaches past the
///   matrix.
pub fn average_distance(
    dist:   &DistanceMatrix,
    stores: Range<usize>,
    k:      usize,
    node:   NodeIdx,
) -> FaResult<f64> {
    let n = dist.size();
    if node.index() >= n {
        return Err(FaError::IndexOutOfRange { index: node.index(), len: n });
    }
    check_range(&stores, n)?;
    if k == 0 || k > stores.len() {
        return Err(FaError::InvalidSampleSize { k, stores: stores.len() });
    }

    let row = dist.row(node.index());
    let mut candidates: Vec<f64> = row[stores].iter().filter_map(|d| d.value()).collect();

    let take = k.min(candidates.len());
    if take == 0 {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    for _ in 0..take {
        let pos = position_of_min(&candidates);
        sum += candidates.swap_remove(pos);
    }
    Ok(sum / take as f64)
}

/// Index of the first smallest value.  `values` must be non-empty.
fn position_of_min(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v < values[best] {
            best = i;
        }
    }
    best
}

/// Fail if `range` reaches past an `n`-node matrix.
pub(crate) fn check_range(range: &Range<usize>, n: usize) -> FaResult<()> {
    if range.end > n {
        return Err(FaError::IndexOutOfRange { index: range.end - 1, len: n });
    }
    Ok(())
}

/// Number of stores with a finite distance from `node`.
pub fn reachable_store_count(
    dist:   &DistanceMatrix,
    stores: Range<usize>,
    node:   NodeIdx,
) -> FaResult<usize> {
    let n = dist.size();
    if node.index() >= n {
        return Err(FaError::IndexOutOfRange { index: node.index(), len: n });
    }
    check_range(&stores, n)?;
    Ok(dist
        .row(node.index())
        .get(stores)
        .map_or(0, |cells| cells.iter().filter(|d| d.is_finite()).count()))
}
