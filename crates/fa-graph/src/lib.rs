//! `fa-graph`: node catalog, adjacency matrix, and all-pairs shortest paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`catalog`]  | `NodeRecord`, `Node`, `NodeCatalog`                          |
//! | [`matrix`]   | `Matrix`, `AdjacencyMatrix`, `DistanceMatrix`                |
//! | [`builder`]  | `EdgeRecord`, `GraphBuilder`                                 |
//! | [`shortest`] | `ShortestPathEngine` trait, `FloydWarshall`                  |
//!
//! # Pipeline
//!
//! ```text
//! records ──► NodeCatalog ──► GraphBuilder ──► AdjacencyMatrix
//!                                                   │
//!                                    FloydWarshall  ▼
//!                                              DistanceMatrix
//! ```
//!
//! Each stage returns a new structure; nothing downstream mutates an upstream
//! result.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Rayon row sweep inside each Floyd–Warshall step.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod builder;
pub mod catalog;
pub mod matrix;
pub mod shortest;

#[cfg(test)]
mod tests;

pub use builder::{EdgeRecord, GraphBuilder};
pub use catalog::{Node, NodeCatalog, NodeRecord};
pub use matrix::{AdjacencyMatrix, DistanceMatrix, Matrix};
pub use shortest::{FloydWarshall, ShortestPathEngine};
