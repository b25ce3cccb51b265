//! food-access: rank residential areas by distance to grocery stores.
//!
//! Loads a `<NODES>` / `<EDGES>` data file, computes all-pairs shortest road
//! distances, scores every residential area by the mean distance to its `k`
//! nearest stores, and prints the ranking.
//!
//! ```text
//! food-access rank mobile.txt -k 3 --top 10 --km
//! food-access rank mobile.txt --least-isolated --format csv --output ranks.csv
//! food-access inspect mobile.txt
//! ```

mod cli;
mod commands;
mod logger;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        Command::Rank(rank_args) => commands::rank(&rank_args),
        Command::Inspect(inspect_args) => commands::inspect(&inspect_args),
    }
}
