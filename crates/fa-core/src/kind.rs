//! Node category enum.
//!
//! The category decides which block of the catalog a node lands in, and so
//! which index range it occupies.  Only stores and residential areas take
//! part in scoring; intersections exist purely for routing connectivity.

/// The three kinds of point on the road network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Grocery store.
    Store,
    /// Residential area; the only kind that gets scored and ranked.
    Residential,
    /// Artificial routing node.
    Intersection,
}

impl NodeKind {
    /// Map the leading character of a data-file node line to a kind.
    ///
    /// `G` (grocery) → `Store`, `R` → `Residential`, `I` → `Intersection`.
    pub fn from_tag(tag: char) -> Option<NodeKind> {
        match tag {
            'G' => Some(NodeKind::Store),
            'R' => Some(NodeKind::Residential),
            'I' => Some(NodeKind::Intersection),
            _ => None,
        }
    }

    /// Human-readable label, useful for report columns.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Store        => "store",
            NodeKind::Residential  => "residential",
            NodeKind::Intersection => "intersection",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
