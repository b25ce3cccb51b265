//! Adjacency-matrix construction from catalogued nodes and raw edges.
//!
//! # Edge semantics
//!
//! - Undirected: every edge writes both `(i, j)` and `(j, i)`.
//! - Last write wins: re-declaring a pair overwrites the earlier weight.
//! - The diagonal is never written; a self-loop edge is skipped with a
//!   warning.

use tracing::{debug, warn};

use fa_core::{Distance, FaError, FaResult};

use crate::catalog::NodeCatalog;
use crate::matrix::{AdjacencyMatrix, Matrix};

/// An edge as delivered by the loader.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub from:   String,
    pub to:     String,
    /// Road length in the data file's distance unit.
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self { from: from.into(), to: to.into(), weight }
    }
}

/// Accumulate edges against a catalog, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use fa_graph::{EdgeRecord, GraphBuilder, NodeCatalog, NodeRecord};
///
/// let catalog = NodeCatalog::load(
///     vec![NodeRecord::new("G1", &["Store"])],
///     vec![NodeRecord::new("R1", &["Home"])],
///     vec![],
/// ).unwrap();
/// let mut b = GraphBuilder::new(&catalog);
/// b.add_edge(&EdgeRecord::new("G1", "R1", 4.0)).unwrap();
/// let adj = b.build();
/// assert_eq!(adj.get(0, 1), adj.get(1, 0));
/// ```
pub struct GraphBuilder<'a> {
    catalog: &'a NodeCatalog,
    matrix:  Matrix,
    edges:   usize,
}

impl<'a> GraphBuilder<'a> {
    /// Start from an `n × n` matrix of `Unreachable`, `n = catalog.len()`.
    pub fn new(catalog: &'a NodeCatalog) -> Self {
        Self {
            catalog,
            matrix: Matrix::unreachable(catalog.len()),
            edges:  0,
        }
    }

    /// Build in one step from a slice of edges.
    pub fn from_edges(catalog: &'a NodeCatalog, edges: &[EdgeRecord]) -> FaResult<AdjacencyMatrix> {
        let mut b = Self::new(catalog);
        for edge in edges {
            b.add_edge(edge)?;
        }
        Ok(b.build())
    }

    /// Record one undirected edge.
    ///
    /// Fails with [`FaError::UnknownNode`] if either endpoint is not in the
    /// catalog, or [`FaError::InvalidWeight`] if the weight is negative or
    /// not finite.
    pub fn add_edge(&mut self, edge: &EdgeRecord) -> FaResult<()> {
        let i = self.resolve(&edge.from)?;
        let j = self.resolve(&edge.to)?;

        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(FaError::InvalidWeight {
                from:   edge.from.clone(),
                to:     edge.to.clone(),
                weight: edge.weight,
            });
        }

        if i == j {
            warn!(node = %edge.from, "skipping self-loop edge");
            return Ok(());
        }

        let w = Distance::Finite(edge.weight);
        self.matrix.set(i, j, w);
        self.matrix.set(j, i, w);
        self.edges += 1;
        Ok(())
    }

    fn resolve(&self, code: &str) -> FaResult<usize> {
        self.catalog
            .index_of(code)
            .map(|idx| idx.index())
            .ok_or_else(|| FaError::UnknownNode(code.to_string()))
    }

    /// Number of edges written so far (self-loops excluded, duplicates
    /// counted once per declaration).
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Consume the builder and produce the adjacency matrix.
    pub fn build(self) -> AdjacencyMatrix {
        debug!(nodes = self.matrix.size(), edges = self.edges, "adjacency matrix built");
        AdjacencyMatrix::new(self.matrix)
    }
}
