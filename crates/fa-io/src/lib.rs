//! `fa-io`: data-file loading and report output.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`loader`] | `load_network_file`, `load_network_reader`, `NetworkData`    |
//! | [`row`]    | `ReportRow`, `ReportConfig`, `DistanceUnit`, `build_rows`    |
//! | [`writer`] | `ReportWriter` trait, `ReportFormat`, `writer_for`           |
//! | [`table`]  | `TableWriter` (aligned plain text)                           |
//! | [`csv`]    | `CsvReportWriter`                                            |
//! | [`json`]   | `JsonWriter`                                                 |
//! | [`error`]  | `LoadError`, `LoadResult<T>`                                 |
//!
//! # Usage
//!
//! ```rust,ignore
//! let data = fa_io::load_network_file(Path::new("mobile.txt"))?;
//! let net = data.build()?;
//! let dist = FloydWarshall.compute(&net.adjacency);
//! let ranked = IsolationRanker::new(&dist, &net.catalog).rank(&RankConfig::default())?;
//! let rows = fa_io::build_rows(&net.catalog, &dist, &ranked, &ReportConfig::default())?;
//! fa_io::write_report(std::io::stdout(), &rows, &ReportConfig::default())?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod loader;
pub mod row;
pub mod table;
pub mod writer;


pub use crate::csv::CsvReportWriter;
pub use error::{LoadError, LoadResult};
pub use json::JsonWriter;
pub use loader::{LoadedNetwork, NetworkData, load_network_file, load_network_reader};
pub use row::{DistanceUnit, ReportConfig, ReportRow, build_rows};
pub use table::TableWriter;
pub use writer::{ReportFormat, ReportWriter, write_report, writer_for};
