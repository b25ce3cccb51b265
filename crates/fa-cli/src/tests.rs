//! Tests for argument parsing and the subcommands.

#[cfg(test)]
mod helpers {
    use std::io::Write;

    use tempfile::NamedTempFile;

    pub const SAMPLE: &str = "\
<NODES>
G001 Food Lion
G002 Publix
R001 Midtown
R002 Dog River
R003 Tillman's Corner
I001 Airport & University
<EDGES>
G001 I001 5000
I001 R001 3000
G002 R001 10000
G002 R003 2000
";

    pub fn data_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("create temp file");
        f.write_all(contents.as_bytes()).unwrap();
        f
    }
}

// ── Argument parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod args {
    use clap::Parser;

    use fa_core::RankDirection;
    use fa_io::{DistanceUnit, ReportFormat};

    use crate::cli::{Cli, Command};

    fn rank_args(argv: &[&str]) -> crate::cli::RankArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Rank(a) => a,
            other => panic!("expected rank, got {other:?}"),
        }
    }

    #[test]
    fn rank_defaults() {
        let a = rank_args(&["food-access", "rank", "net.txt"]);
        let rc = a.rank_config();
        assert_eq!(rc.sample_size, 3);
        assert_eq!(rc.direction, RankDirection::MostIsolatedFirst);
        let pc = a.report_config();
        assert_eq!(pc.top_n, None);
        assert_eq!(pc.unit, DistanceUnit::Metres);
        assert_eq!(pc.format, ReportFormat::Table);
        assert!(a.output.is_none());
    }

    #[test]
    fn rank_options() {
        let a = rank_args(&[
            "food-access", "rank", "net.txt", "-k", "2", "--least-isolated", "--top", "5",
            "--km", "--format", "json", "--output", "out.json",
        ]);
        assert_eq!(a.rank_config().sample_size, 2);
        assert_eq!(a.rank_config().direction, RankDirection::LeastIsolatedFirst);
        let pc = a.report_config();
        assert_eq!(pc.top_n, Some(5));
        assert_eq!(pc.unit, DistanceUnit::Kilometres);
        assert_eq!(pc.format, ReportFormat::Json);
        assert_eq!(a.output.unwrap().to_str(), Some("out.json"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["food-access", "inspect", "net.txt", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Inspect(_)));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["food-access", "-v", "-q", "inspect", "x"]).is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Cli::try_parse_from(["food-access", "rank", "x", "--format", "xml"]).is_err());
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use clap::Parser;

    use super::helpers::{SAMPLE, data_file};
    use crate::cli::{Cli, Command, InspectArgs};
    use crate::commands::{inspect_to, rank, rank_to};

    fn run_rank(extra: &[&str], contents: &str) -> anyhow::Result<String> {
        let file = data_file(contents);
        let path = file.path().to_str().unwrap().to_string();
        let mut argv = vec!["food-access", "rank", path.as_str()];
        argv.extend_from_slice(extra);
        let Command::Rank(args) = Cli::try_parse_from(argv).unwrap().command else {
            unreachable!()
        };
        let mut out = Vec::new();
        rank_to(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn rank_table_most_isolated() {
        // R001: stores at 8000 and 10000; R003: 2000 and 20000; R002: none.
        let text = run_rank(&["-k", "2"], SAMPLE).unwrap();
        let codes: Vec<_> = text
            .lines()
            .skip(2)
            .map(|l| l.split_whitespace().nth(1).unwrap())
            .collect();
        assert_eq!(codes, ["R003", "R001", "R002"]);
    }

    #[test]
    fn rank_csv_least_isolated_top_two_km() {
        let text =
            run_rank(&["-k", "1", "--least-isolated", "--top", "2", "--km", "-f", "csv"], SAMPLE)
                .unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "rank,code,label,score,reachable_stores");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,R002,"));
        assert!(lines[2].starts_with("2,R003,"));
        assert!(lines[2].contains(",2.0,"));
    }

    #[test]
    fn rank_writes_output_file() {
        let file = data_file(SAMPLE);
        let dir = tempfile::tempdir().expect("create temp dir");
        let out_path = dir.path().join("ranks.json");
        let args = crate::cli::RankArgs {
            file:           file.path().to_path_buf(),
            sample_size:    1,
            least_isolated: false,
            top:            None,
            km:             false,
            format:         crate::cli::FormatArg::Json,
            output:         Some(out_path.clone()),
        };
        rank(&args).unwrap();
        let text = std::fs::read_to_string(&out_path).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"R001\""));
    }

    #[test]
    fn failed_rank_keeps_existing_output() {
        let file = data_file("G1\nR1\n<EDGES>\nG1 R7 3\n");
        let dir = tempfile::tempdir().expect("create temp dir");
        let out_path = dir.path().join("ranks.txt");
        std::fs::write(&out_path, "previous report\n").unwrap();
        let args = crate::cli::RankArgs {
            file:           file.path().to_path_buf(),
            sample_size:    3,
            least_isolated: false,
            top:            None,
            km:             false,
            format:         crate::cli::FormatArg::Table,
            output:         Some(out_path.clone()),
        };
        assert!(rank(&args).is_err());
        assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "previous report\n");
    }

    #[test]
    fn rank_surfaces_data_errors() {
        let err = run_rank(&[], "G1\nR1\n<EDGES>\nG1 R7 3\n").unwrap_err();
        assert!(format!("{err:#}").contains("R7"), "{err:#}");

        let err = run_rank(&[], "G1\nQ1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn rank_rejects_zero_sample_size() {
        let err = run_rank(&["-k", "0"], SAMPLE).unwrap_err();
        assert!(format!("{err:#}").contains("sample size"), "{err:#}");
    }

    #[test]
    fn inspect_prints_all_sections() {
        let file = data_file(SAMPLE);
        let args = InspectArgs { file: file.path().to_path_buf() };
        let mut out = Vec::new();
        inspect_to(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Nodes (6):"));
        assert!(text.contains("Adjacency:"));
        assert!(text.contains("Shortest distances:"));
        // G001 (index 0) reaches R001 (index 2) through I001: 5000 + 3000.
        let dist_section = text.split("Shortest distances:").nth(1).unwrap();
        let row0: Vec<_> = dist_section.lines().nth(1).unwrap().split_whitespace().collect();
        assert_eq!(row0[2], "8000");
        assert_eq!(row0[0], "-");
    }
}
