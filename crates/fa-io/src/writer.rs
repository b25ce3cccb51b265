//! The `ReportWriter` trait implemented by all report backends.

use std::io::Write;

use crate::csv::CsvReportWriter;
use crate::json::JsonWriter;
use crate::table::TableWriter;
use crate::{DistanceUnit, LoadResult, ReportConfig, ReportRow};

/// Output format of a ranking report.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ReportFormat {
    /// Aligned plain-text columns.
    #[default]
    Table,
    Csv,
    Json,
}

/// Trait implemented by the table, CSV, and JSON writers.
pub trait ReportWriter {
    /// Write a batch of rows.  May be called more than once.
    fn write_rows(&mut self, rows: &[ReportRow]) -> LoadResult<()>;

    /// Flush everything to the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> LoadResult<()>;
}

/// Construct the backend for `format` over `out`.
pub fn writer_for<'w, W: Write + 'w>(
    format: ReportFormat,
    out:    W,
    unit:   DistanceUnit,
) -> Box<dyn ReportWriter + 'w> {
    match format {
        ReportFormat::Table => Box::new(TableWriter::new(out, unit)),
        ReportFormat::Csv   => Box::new(CsvReportWriter::new(out)),
        ReportFormat::Json  => Box::new(JsonWriter::new(out)),
    }
}

/// Write `rows` to `out` in the configured format and flush.
pub fn write_report<W: Write>(out: W, rows: &[ReportRow], config: &ReportConfig) -> LoadResult<()> {
    let mut writer = writer_for(config.format, out, config.unit);
    writer.write_rows(rows)?;
    writer.finish()
}
