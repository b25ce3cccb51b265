//! CSV report backend.
//!
//! Columns follow [`ReportRow`]: `rank,code,label,score,reachable_stores`.

use std::io::Write;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{LoadResult, ReportRow};

/// Writes rows as CSV records with a header line.
pub struct CsvReportWriter<W: Write> {
    inner:    Writer<W>,
    wrote:    bool,
    finished: bool,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { inner: Writer::from_writer(out), wrote: false, finished: false }
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> LoadResult<()> {
        for row in rows {
            self.inner.serialize(row)?;
            self.wrote = true;
        }
        Ok(())
    }

    fn finish(&mut self) -> LoadResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if !self.wrote {
            // `serialize` emits the header with the first row; do it by hand
            // when there are none.
            self.inner.write_record(["rank", "code", "label", "score", "reachable_stores"])?;
        }
        self.inner.flush()?;
        Ok(())
    }
}
