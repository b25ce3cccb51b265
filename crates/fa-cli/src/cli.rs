//! Command-line interface definition.
//!
//! Each option maps onto a field of an immutable configuration record
//! ([`RankConfig`] or [`ReportConfig`]) built once per invocation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fa_core::{RankConfig, RankDirection};
use fa_io::{DistanceUnit, ReportConfig, ReportFormat};

#[derive(Parser, Debug)]
#[command(
    name = "food-access",
    version,
    about = "Rank residential areas by road distance to their nearest grocery stores"
)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score and rank residential areas
    Rank(RankArgs),
    /// Print node indices, the adjacency matrix and the distance matrix
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Network data file
    pub file: PathBuf,

    /// Number of nearest stores averaged per residential area
    #[arg(short = 'k', long = "sample-size", default_value_t = RankConfig::DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// List the least isolated areas first
    #[arg(long)]
    pub least_isolated: bool,

    /// Show only the first N entries
    #[arg(short, long, value_name = "N")]
    pub top: Option<usize>,

    /// Report scores in kilometres instead of metres
    #[arg(long)]
    pub km: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Network data file
    pub file: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Csv   => ReportFormat::Csv,
            FormatArg::Json  => ReportFormat::Json,
        }
    }
}

impl RankArgs {
    pub fn rank_config(&self) -> RankConfig {
        let direction = if self.least_isolated {
            RankDirection::LeastIsolatedFirst
        } else {
            RankDirection::MostIsolatedFirst
        };
        RankConfig::new(self.sample_size, direction)
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            top_n:  self.top,
            unit:   if self.km { DistanceUnit::Kilometres } else { DistanceUnit::Metres },
            format: self.format.into(),
        }
    }
}
