//! Subcommand implementations.
//!
//! Each command has a thin entry point that resolves the output sink and a
//! `*_to` function that does the work against any `Write`, which is what
//! the tests drive.

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use fa_graph::{FloydWarshall, ShortestPathEngine};
use fa_io::{LoadedNetwork, build_rows, load_network_file, write_report};
use fa_rank::IsolationRanker;

use crate::cli::{InspectArgs, RankArgs};

fn load(path: &std::path::Path) -> Result<LoadedNetwork> {
    let data = load_network_file(path)?;
    data.build()
        .with_context(|| format!("invalid network in {}", path.display()))
}

// ── rank ──────────────────────────────────────────────────────────────────────

pub fn rank(args: &RankArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            // Render fully before touching the target so a failed run
            // leaves an existing report intact.
            let mut report = Vec::new();
            rank_to(args, &mut report)?;
            fs::write(path, &report)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "report written");
            Ok(())
        }
        None => rank_to(args, io::stdout().lock()),
    }
}

pub fn rank_to<W: Write>(args: &RankArgs, out: W) -> Result<()> {
    let start = Instant::now();
    let net = load(&args.file)?;
    let dist = FloydWarshall.compute(&net.adjacency);

    let rank_config = args.rank_config();
    let ranked = IsolationRanker::new(&dist, &net.catalog)
        .rank(&rank_config)
        .context("ranking failed")?;

    let report_config = args.report_config();
    let rows = build_rows(&net.catalog, &dist, &ranked, &report_config)?;
    write_report(out, &rows, &report_config)?;

    info!(
        residential = ranked.len(),
        shown = rows.len(),
        k = ranked.sample_size(),
        direction = %ranked.direction(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "ranking complete"
    );
    Ok(())
}

// ── inspect ───────────────────────────────────────────────────────────────────

pub fn inspect(args: &InspectArgs) -> Result<()> {
    inspect_to(args, io::stdout().lock())
}

pub fn inspect_to<W: Write>(args: &InspectArgs, mut out: W) -> Result<()> {
    let net = load(&args.file)?;
    let dist = FloydWarshall.compute(&net.adjacency);

    writeln!(out, "Nodes ({}):", net.catalog.len())?;
    for (idx, node) in net.catalog.iter() {
        writeln!(
            out,
            "{:>5}  {:<8}  {:<12}  {}",
            idx.index(),
            node.code,
            node.kind.as_str(),
            node.label_text()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Adjacency:")?;
    write!(out, "{}", net.adjacency.matrix())?;
    writeln!(out)?;
    writeln!(out, "Shortest distances:")?;
    write!(out, "{}", dist.matrix())?;
    out.flush()?;
    Ok(())
}
