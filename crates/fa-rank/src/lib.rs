//! `fa-rank`: isolation scoring and ranking of residential areas.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`isolation`] | `average_distance`, `reachable_store_count`               |
//! | [`ranking`]   | `rank`, `RankedEntry`, `RankedList`, `IsolationRanker`    |
//!
//! # Score model (summary)
//!
//! For a residential node `r` and sample size `k`:
//!
//! ```text
//! finite    = { dist[r][s] | s ∈ stores, dist[r][s] ≠ Unreachable }
//! nearest   = the min(k, |finite|) smallest values of `finite`
//! score(r)  = mean(nearest), or 0 if `finite` is empty
//! ```
//!
//! A node with no path to any store scores `0`, the same as a node sitting
//! on top of a store.  Callers that need to tell those apart should check
//! reachability themselves.

pub mod isolation;
pub mod ranking;


pub use isolation::{average_distance, reachable_store_count};
pub use ranking::{IsolationRanker, RankedEntry, RankedList, rank};
