//! Report rows and presentation settings.
//!
//! Everything here is presentation: truncation to the top `N` entries and
//! unit conversion happen after ranking and never feed back into it.

use serde::Serialize;

use fa_core::FaError;
use fa_graph::{DistanceMatrix, NodeCatalog};
use fa_rank::{RankedList, reachable_store_count};

use crate::LoadResult;

// ── DistanceUnit ──────────────────────────────────────────────────────────────

/// Display unit for scores.  Edge weights are assumed to be metres.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DistanceUnit {
    #[default]
    Metres,
    Kilometres,
}

impl DistanceUnit {
    /// Convert a score from edge-weight units (metres) to `self`.
    #[inline]
    pub fn convert(self, metres: f64) -> f64 {
        match self {
            DistanceUnit::Metres     => metres,
            DistanceUnit::Kilometres => metres / 1_000.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Metres     => "m",
            DistanceUnit::Kilometres => "km",
        }
    }
}

// ── ReportConfig ──────────────────────────────────────────────────────────────

/// How a ranking is presented.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportConfig {
    /// Keep only the first `N` ranked entries.  `None` keeps all.
    pub top_n:  Option<usize>,
    pub unit:   DistanceUnit,
    pub format: crate::ReportFormat,
}

// ── ReportRow ─────────────────────────────────────────────────────────────────

/// One line of a ranking report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based position in the ranking.
    pub rank:             usize,
    pub code:             String,
    pub label:            String,
    /// Isolation score in the configured unit.
    pub score:            f64,
    /// Stores with a finite path from this node.  Zero means the score of
    /// `0` reflects "no path", not "next door".
    pub reachable_stores: usize,
}

/// Turn a ranking into display rows: truncate, convert units, attach codes
/// and labels.
pub fn build_rows(
    catalog: &NodeCatalog,
    dist:    &DistanceMatrix,
    ranked:  &RankedList,
    config:  &ReportConfig,
) -> LoadResult<Vec<ReportRow>> {
    let shown = match config.top_n {
        Some(n) => ranked.top(n),
        None => ranked.entries(),
    };

    shown
        .iter()
        .enumerate()
        .map(|(i, entry)| -> LoadResult<ReportRow> {
            let node = catalog.node(entry.node).ok_or(FaError::IndexOutOfRange {
                index: entry.node.index(),
                len:   catalog.len(),
            })?;
            let reachable_stores = reachable_store_count(dist, catalog.store_range(), entry.node)?;
            Ok(ReportRow {
                rank: i + 1,
                code: node.code.clone(),
                label: node.label_text(),
                score: config.unit.convert(entry.score),
                reachable_stores,
            })
        })
        .collect()
}
