//! Dense `n × n` distance tables.
//!
//! # Data layout
//!
//! Cells are stored row-major in one contiguous `Vec<Distance>`:
//!
//! ```text
//! cell(i, j) = cells[i * n + j]
//! ```
//!
//! so a row is a contiguous slice, which is what the Floyd–Warshall inner
//! loop and the per-residential store scan both walk.
//!
//! Two newtypes wrap the same [`Matrix`]: [`AdjacencyMatrix`] (direct edge
//! weights, produced by [`GraphBuilder`](crate::GraphBuilder)) and
//! [`DistanceMatrix`] (shortest distances, produced by a
//! [`ShortestPathEngine`](crate::ShortestPathEngine)).  Both deref to
//! `Matrix` for read access.

use std::fmt;
use std::ops::Deref;

use fa_core::Distance;

// ── Matrix ────────────────────────────────────────────────────────────────────

/// Square table of [`Distance`] cells addressed by node index.
///
/// All cells must be `Unreachable` or finite and non-negative; the
/// shortest-path engines rely on it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    n:     usize,
    cells: Vec<Distance>,
}

impl Matrix {
    /// An `n × n` matrix with every cell `Unreachable`.
    pub fn unreachable(n: usize) -> Self {
        Self { n, cells: vec![Distance::Unreachable; n * n] }
    }

    /// Number of rows (= columns = nodes).
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is `>= size()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Distance {
        debug_assert!(i < self.n && j < self.n);
        self.cells[i * self.n + j]
    }

    /// Overwrite cell `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, d: Distance) {
        debug_assert!(i < self.n && j < self.n);
        self.cells[i * self.n + j] = d;
    }

    /// Row `i` as a contiguous slice of length `size()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[Distance] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    /// Iterator over all rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> + '_ {
        // `chunks(0)` panics; an empty matrix has no rows anyway.
        self.cells.chunks(self.n.max(1))
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn cells_mut(&mut self) -> &mut [Distance] {
        &mut self.cells
    }
}

impl fmt::Display for Matrix {
    /// One line per row, cells right-aligned; `-` marks `Unreachable`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>10}", cell.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── AdjacencyMatrix ───────────────────────────────────────────────────────────

/// Direct edge weights.  Symmetric; diagonal always `Unreachable`.
///
/// Only [`GraphBuilder`](crate::GraphBuilder) constructs one.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix(Matrix);

impl AdjacencyMatrix {
    pub(crate) fn new(matrix: Matrix) -> Self {
        Self(matrix)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.0
    }
}

impl Deref for AdjacencyMatrix {
    type Target = Matrix;
    fn deref(&self) -> &Matrix {
        &self.0
    }
}

// ── DistanceMatrix ────────────────────────────────────────────────────────────

/// All-pairs shortest distances.  Cell `(i, j)` is the shortest known total
/// distance from `i` to `j`, or `Unreachable`.  The diagonal is never
/// computed and must not be read as a self-distance.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix(Matrix);

impl DistanceMatrix {
    /// Wrap a fully relaxed matrix.  Intended for [`ShortestPathEngine`]
    /// implementations.
    ///
    /// [`ShortestPathEngine`]: crate::ShortestPathEngine
    pub fn new(matrix: Matrix) -> Self {
        Self(matrix)
    }

    pub fn matrix(&self) -> &Matrix {
        &self.0
    }
}

impl Deref for DistanceMatrix {
    type Target = Matrix;
    fn deref(&self) -> &Matrix {
        &self.0
    }
}
