//! Plain-text table backend.
//!
//! ```text
//! Rank  Code    Score (km)  Stores  Label
//! ----  ------  ----------  ------  -----------
//!    1  R004        12.340       3  Eight Mile
//! ```

use std::io::Write;

use crate::writer::ReportWriter;
use crate::{DistanceUnit, LoadResult, ReportRow};

/// Writes rows as fixed-width text columns.  The header goes out with the
/// first batch.
pub struct TableWriter<W: Write> {
    out:            W,
    unit:           DistanceUnit,
    header_written: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W, unit: DistanceUnit) -> Self {
        Self { out, unit, header_written: false }
    }

    fn write_header(&mut self) -> LoadResult<()> {
        let score = format!("Score ({})", self.unit.suffix());
        writeln!(self.out, "{:>4}  {:<8}  {:>12}  {:>6}  Label", "Rank", "Code", score, "Stores")?;
        writeln!(self.out, "{}", "-".repeat(48))?;
        self.header_written = true;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write_rows(&mut self, rows: &[ReportRow]) -> LoadResult<()> {
        if !self.header_written {
            self.write_header()?;
        }
        for row in rows {
            writeln!(
                self.out,
                "{:>4}  {:<8}  {:>12.3}  {:>6}  {}",
                row.rank, row.code, row.score, row.reachable_stores, row.label
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> LoadResult<()> {
        if !self.header_written {
            // An empty ranking still gets column headings.
            self.write_header()?;
        }
        self.out.flush()?;
        Ok(())
    }
}
