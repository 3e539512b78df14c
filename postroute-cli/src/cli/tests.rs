use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use postroute_core::{Edge, RppError, RuralPostmanBuilder, UndirectedGraph};
use postroute_providers_urpp::UrppProviderError;
use postroute_test_support::tracing::RecordingLayer;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, StrategyArg, Verification, render_summary, run_cli};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const SQUARE: &str = "\
square
two required streets
VERTICES : 4
ARISTAS_REQ : 2
ARISTAS_NOREQ : 2
LISTA_ARISTAS_REQ :
 (1,2)  coste 3 3
 (3,4)  coste 3 3
LISTA_ARISTAS_NOREQ :
 (2,3)  coste 1 1
 (4,1)  coste 5 5
";

#[fixture]
fn dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn write_instance(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn cli(strategy: StrategyArg, instance: &Path) -> Cli {
    Cli {
        strategy,
        instance: instance.to_path_buf(),
        seed: Some(3),
        no_verify: false,
    }
}

#[rstest]
#[case::greedy(StrategyArg::Greedy)]
#[case::vertex_scan(StrategyArg::VertexScan)]
fn run_cli_solves_and_verifies(dir: TempDir, #[case] strategy: StrategyArg) -> TestResult {
    let path = write_instance(&dir, "square.txt", SQUARE)?;
    let summary = run_cli(cli(strategy, &path))?;
    assert_eq!(summary.instance, "square");
    assert_eq!(summary.solution.truncated_cost(), 12);
    assert_eq!(summary.verification, Verification::Passed);
    Ok(())
}

#[rstest]
fn run_cli_honours_no_verify(dir: TempDir) -> TestResult {
    let path = write_instance(&dir, "square.txt", SQUARE)?;
    let mut options = cli(StrategyArg::Greedy, &path);
    options.no_verify = true;
    let summary = run_cli(options)?;
    assert_eq!(summary.verification, Verification::Skipped);
    Ok(())
}

#[rstest]
fn run_cli_reports_missing_files(dir: TempDir) {
    let path = dir.path().join("absent.txt");
    let err = run_cli(cli(StrategyArg::Greedy, &path)).expect_err("file does not exist");
    assert!(matches!(err, CliError::Io { path: ref p, .. } if *p == path));
}

#[rstest]
fn run_cli_reports_malformed_instances(dir: TempDir) -> TestResult {
    let path = write_instance(&dir, "broken.txt", "name\ncomment\nVERTICES : lots\n")?;
    let err = run_cli(cli(StrategyArg::Greedy, &path)).expect_err("count is not a number");
    assert!(matches!(
        err,
        CliError::Instance {
            source: UrppProviderError::MalformedCount { line: 3, .. },
            ..
        }
    ));
    Ok(())
}

#[rstest]
fn run_cli_surfaces_solver_failures(dir: TempDir) -> TestResult {
    let islands = "\
islands
no road between the two required streets
VERTICES : 4
ARISTAS_REQ : 2
ARISTAS_NOREQ : 0
LISTA_ARISTAS_REQ :
(1,2) coste 1 1
(3,4) coste 1 1
";
    let path = write_instance(&dir, "islands.txt", islands)?;
    let err = run_cli(cli(StrategyArg::Greedy, &path)).expect_err("islands are unreachable");
    match err {
        CliError::Rpp(rpp) => {
            assert_eq!(rpp.code().as_str(), "RPP_UNREACHABLE");
            assert!(matches!(rpp, RppError::Unreachable { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn run_cli_records_span_fields(dir: TempDir) -> TestResult {
    let path = write_instance(&dir, "square.txt", SQUARE)?;
    let (layer, result) = RecordingLayer::capture(|| run_cli(cli(StrategyArg::VertexScan, &path)));
    result?;

    let span = layer.span("cli.run").expect("cli.run span must exist");
    assert_eq!(span.field("strategy"), Some("VertexScan"));
    assert_eq!(span.field("required"), Some("2"));
    assert!(layer.span("rpp.solve").is_some());
    assert_eq!(layer.events_with_message("instance solved").len(), 1);
    Ok(())
}

#[rstest]
fn render_summary_prints_one_based_vertices() -> TestResult {
    let graph = UndirectedGraph::from_edges(2, [Edge::new(0, 1, 2.5)])?;
    let solution = RuralPostmanBuilder::new()
        .build()
        .solve(&graph, &[Edge::new(0, 1, 2.5)])?;
    let summary = ExecutionSummary {
        instance: "pair".into(),
        solution,
        elapsed: Duration::from_millis(1250),
        verification: Verification::Passed,
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, "1 2 1\n5\n1.250 secs.\n");
    Ok(())
}

#[rstest]
fn render_summary_flags_defective_circuits() -> TestResult {
    let summary = ExecutionSummary {
        instance: "empty".into(),
        solution: RuralPostmanBuilder::new()
            .build()
            .solve(&UndirectedGraph::new(1), &[])?,
        elapsed: Duration::ZERO,
        verification: Verification::Failed(postroute_core::SolutionDefect::MissingRequired {
            u: 0,
            v: 1,
        }),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.starts_with("\n0\n0.000 secs.\n"));
    assert!(text.contains("invalid solution:"));
    Ok(())
}

#[rstest]
#[case::greedy(&["postroute", "a", "instance.txt"], StrategyArg::Greedy, None, false)]
#[case::vertex_scan(
    &["postroute", "v", "instance.txt", "--seed", "9", "--no-verify"],
    StrategyArg::VertexScan,
    Some(9),
    true
)]
fn clap_parses_positionals_and_flags(
    #[case] args: &[&str],
    #[case] strategy: StrategyArg,
    #[case] seed: Option<u64>,
    #[case] no_verify: bool,
) {
    let cli = Cli::try_parse_from(args).expect("arguments must parse");
    assert_eq!(cli.strategy, strategy);
    assert_eq!(cli.instance, PathBuf::from("instance.txt"));
    assert_eq!(cli.seed, seed);
    assert_eq!(cli.no_verify, no_verify);
}

#[rstest]
#[case::unknown_strategy(&["postroute", "x", "instance.txt"])]
#[case::missing_path(&["postroute", "a"])]
#[case::no_arguments(&["postroute"])]
#[case::bad_seed(&["postroute", "v", "instance.txt", "--seed", "-1"])]
fn clap_rejects_malformed_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}
