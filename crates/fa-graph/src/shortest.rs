//! All-pairs shortest distances.
//!
//! # Pluggability
//!
//! Callers go through the [`ShortestPathEngine`] trait so an application can
//! swap in another all-pairs algorithm without touching the ranking code.
//! The default [`FloydWarshall`] is the right tool for the dense,
//! small-to-medium graphs this workspace targets.
//!
//! # Sentinel discipline
//!
//! The relaxation step is
//!
//! ```text
//! via       = dist[i][k] ⊕ dist[k][j]      (⊕ = Distance::join)
//! dist[i][j] = min(dist[i][j], via)        (min = Distance::min)
//! ```
//!
//! `join` only adds two finite legs, so a missing leg can never be mistaken
//! for a zero-length one.  `min` treats `Unreachable` as larger than any
//! finite distance.  Diagonal cells are skipped and keep their initial value.

use std::time::Instant;

use tracing::debug;

use crate::matrix::{AdjacencyMatrix, DistanceMatrix, Matrix};

// ── ShortestPathEngine trait ──────────────────────────────────────────────────

/// Pluggable all-pairs shortest-path algorithm.
pub trait ShortestPathEngine: Send + Sync {
    /// Compute shortest distances between every ordered pair of nodes.
    ///
    /// Never fails: every input the builder can produce has a well-defined
    /// result.
    fn compute(&self, adjacency: &AdjacencyMatrix) -> DistanceMatrix;
}

// ── FloydWarshall ─────────────────────────────────────────────────────────────

/// Classic Floyd–Warshall dynamic programming.  `O(n³)` time, `O(n²)` space.
///
/// With the `parallel` feature the row sweep for each intermediate node runs
/// on Rayon; the intermediate loop itself stays sequential.
#[derive(Copy, Clone, Debug, Default)]
pub struct FloydWarshall;

impl ShortestPathEngine for FloydWarshall {
    fn compute(&self, adjacency: &AdjacencyMatrix) -> DistanceMatrix {
        let start = Instant::now();
        let mut dist = adjacency.matrix().clone();
        relax_all(&mut dist);
        debug!(
            nodes = dist.size(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "all-pairs shortest distances computed"
        );
        DistanceMatrix::new(dist)
    }
}

/// Relax `dist` in place through every intermediate node.
///
/// Running this on an already relaxed matrix changes nothing.
pub fn relax_all(dist: &mut Matrix) {
    #[cfg(not(feature = "parallel"))]
    relax_sequential(dist);

    #[cfg(feature = "parallel")]
    relax_parallel(dist);
}

/// Single-threaded Floyd–Warshall, in the textbook `k, i, j` loop order.
pub fn relax_sequential(dist: &mut Matrix) {
    let n = dist.size();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let via = dist.get(i, k).join(dist.get(k, j));
                let best = dist.get(i, j).min(via);
                dist.set(i, j, best);
            }
        }
    }
}

/// Floyd–Warshall with the `i` sweep spread across Rayon workers.
///
/// During step `k`, row `k` and column `k` cannot change: improving
/// `dist[k][j]` would need `dist[k][k] ⊕ dist[k][j] < dist[k][j]`, which
/// non-negative weights (or an `Unreachable` diagonal) rule out.  Each
/// worker can therefore read a snapshot of row `k` and its own `dist[i][k]`
/// while writing only its own row, and the result matches
/// [`relax_sequential`] exactly.
#[cfg(feature = "parallel")]
pub fn relax_parallel(dist: &mut Matrix) {
    use rayon::prelude::*;

    let n = dist.size();
    if n == 0 {
        return;
    }
    for k in 0..n {
        let row_k = dist.row(k).to_vec();
        dist.cells_mut()
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row_i)| {
                let d_ik = row_i[k];
                for (j, cell) in row_i.iter_mut().enumerate() {
                    if i == j {
                        continue;
                    }
                    let cur = *cell;
                    *cell = cur.min(d_ik.join(row_k[j]));
                }
            });
    }
}
