//! `fa-core`: foundational types for the `food_access` workspace.
//!
//! This crate is a dependency of every other `fa-*` crate.  It has no `fa-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `NodeIdx`                                              |
//! | [`distance`]   | `Distance` (`Finite` / `Unreachable` tagged sentinel)  |
//! | [`kind`]       | `NodeKind` enum                                        |
//! | [`config`]     | `RankConfig`, `RankDirection`                          |
//! | [`error`]      | `FaError`, `FaResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod distance;
pub mod error;
pub mod ids;
pub mod kind;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RankConfig, RankDirection};
pub use distance::Distance;
pub use error::{FaError, FaResult};
pub use ids::NodeIdx;
pub use kind::NodeKind;
