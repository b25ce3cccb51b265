//! Node catalog: typed node collections plus the code → index bijection.
//!
//! # Index layout
//!
//! ```text
//! 0 ........ S-1 | S ........ S+R-1 | S+R ........ N-1
//!    stores      |   residential    |   intersections
//! ```
//!
//! Every downstream range computation ("the store columns", "the residential
//! rows") relies on this contiguity, so the catalog is the only place that
//! assigns indices.

use std::ops::Range;

use rustc_hash::FxHashMap;
use tracing::debug;

use fa_core::{FaError, FaResult, NodeIdx, NodeKind};

// ── Records ───────────────────────────────────────────────────────────────────

/// A node as delivered by the loader: a unique code plus label tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    pub code:  String,
    pub label: Vec<String>,
}

impl NodeRecord {
    pub fn new(code: impl Into<String>, label: &[&str]) -> Self {
        Self {
            code:  code.into(),
            label: label.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A catalogued node.  Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub code:  String,
    pub kind:  NodeKind,
    /// Free-text tokens; display only, never used in computation.
    pub label: Vec<String>,
}

impl Node {
    /// Label tokens joined with single spaces.
    pub fn label_text(&self) -> String {
        self.label.join(" ")
    }
}

// ── NodeCatalog ───────────────────────────────────────────────────────────────

/// All nodes of one loaded data file, indexed stores-first.
///
/// Construct with [`NodeCatalog::load`].  Loading a new file means building
/// a new catalog; there is no incremental editing.
#[derive(Clone, Debug)]
pub struct NodeCatalog {
    nodes:       Vec<Node>,
    by_code:     FxHashMap<String, NodeIdx>,
    stores:      usize,
    residential: usize,
}

impl NodeCatalog {
    /// Assign indices block by block (stores, residential areas,
    /// intersections), keeping each block's input order.
    ///
    /// Fails with [`FaError::DuplicateIdentity`] if a code occurs twice,
    /// whether within one block or across blocks.
    pub fn load(
        stores:        Vec<NodeRecord>,
        residential:   Vec<NodeRecord>,
        intersections: Vec<NodeRecord>,
    ) -> FaResult<Self> {
        let total = stores.len() + residential.len() + intersections.len();
        let mut catalog = Self {
            nodes:       Vec::with_capacity(total),
            by_code:     FxHashMap::default(),
            stores:      stores.len(),
            residential: residential.len(),
        };
        catalog.by_code.reserve(total);

        let blocks = [
            (NodeKind::Store, stores),
            (NodeKind::Residential, residential),
            (NodeKind::Intersection, intersections),
        ];
        for (kind, records) in blocks {
            for rec in records {
                catalog.push(kind, rec)?;
            }
        }

        debug!(
            stores = catalog.stores,
            residential = catalog.residential,
            intersections = catalog.intersection_count(),
            "node catalog loaded"
        );
        Ok(catalog)
    }

    fn push(&mut self, kind: NodeKind, rec: NodeRecord) -> FaResult<()> {
        let idx = NodeIdx::from_position(self.nodes.len())?;
        if self.by_code.contains_key(&rec.code) {
            return Err(FaError::DuplicateIdentity(rec.code));
        }
        self.by_code.insert(rec.code.clone(), idx);
        self.nodes.push(Node { code: rec.code, kind, label: rec.label });
        Ok(())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn store_count(&self) -> usize {
        self.stores
    }

    pub fn residential_count(&self) -> usize {
        self.residential
    }

    pub fn intersection_count(&self) -> usize {
        self.nodes.len() - self.stores - self.residential
    }

    /// Indices `[0, stores)`.
    pub fn store_range(&self) -> Range<usize> {
        0..self.stores
    }

    /// Indices `[stores, stores + residential)`.
    pub fn residential_range(&self) -> Range<usize> {
        self.stores..self.stores + self.residential
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Resolve a node code to its index.
    pub fn index_of(&self, code: &str) -> Option<NodeIdx> {
        self.by_code.get(code).copied()
    }

    /// The node at `idx`, or `None` if out of range.
    pub fn node(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx.index())
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// `(index, node)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIdx, &Node)> + '_ {
        // `push` only admits positions that fit in `u32`.
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIdx(i as u32), n))
    }
}
