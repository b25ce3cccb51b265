//! JSON report backend: one pretty-printed array of row objects.

use std::io::Write;

use crate::writer::ReportWriter;
use crate::{LoadResult, ReportRow};

/// Buffers rows and writes them as a single JSON array on [`finish`].
///
/// [`finish`]: ReportWriter::finish
pub struct JsonWriter<W: Write> {
    out:      W,
    rows:     Vec<ReportRow>,
    finished: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: Vec::new(), finished: false }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> LoadResult<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }

    fn finish(&mut self) -> LoadResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        serde_json::to_writer_pretty(&mut self.out, &self.rows)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
