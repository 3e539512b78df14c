//! Command implementations and argument parsing for the postroute CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use postroute_core::{MatchingStrategy, RppError, RppSolution, RuralPostmanBuilder, SolutionDefect};
use postroute_providers_urpp::{UrppInstance, UrppProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "postroute",
    about = "Solve an undirected rural postman instance heuristically."
)]
pub struct Cli {
    /// Matching heuristic used to repair parity.
    #[arg(value_enum)]
    pub strategy: StrategyArg,

    /// Path to a URPP instance file.
    pub instance: PathBuf,

    /// Seed for the vertex-scan heuristic.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip checking the circuit against the required edges.
    #[arg(long)]
    pub no_verify: bool,
}

/// Positional strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Greedy perfect matching.
    #[value(name = "a")]
    Greedy,
    /// Vertex-scan perfect matching.
    #[value(name = "v")]
    VertexScan,
}

impl From<StrategyArg> for MatchingStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Greedy => Self::Greedy,
            StrategyArg::VertexScan => Self::VertexScan,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The instance file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The instance file could not be parsed.
    #[error("failed to load `{path}`: {source}")]
    Instance {
        /// Path of the rejected instance.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: UrppProviderError,
    },
    /// The solver failed.
    #[error(transparent)]
    Rpp(#[from] RppError),
}

/// Outcome of the circuit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// `--no-verify` was given.
    Skipped,
    /// The circuit is closed and covers every required edge.
    Passed,
    /// The circuit is defective.
    Failed(SolutionDefect),
}

/// Result of one CLI run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Instance name from the file header.
    pub instance: String,
    /// Circuit in original 0-based vertex ids.
    pub solution: RppSolution,
    /// Wall time spent in the solver.
    pub elapsed: Duration,
    /// Circuit check outcome.
    pub verification: Verification,
}

/// Loads the instance named by `cli`, solves it and checks the circuit.
///
/// # Errors
/// Returns [`CliError`] when the file cannot be read or parsed, or when the
/// solver fails. A defective circuit is reported in
/// [`ExecutionSummary::verification`] rather than as an error.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use postroute_cli::cli::{Cli, StrategyArg, Verification, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     "demo\n-\nVERTICES : 2\nARISTAS_REQ : 1\nARISTAS_NOREQ : 0\n\
///      LISTA_ARISTAS_REQ :\n(1,2) coste 2 2\nLISTA_ARISTAS_NOREQ :\n",
/// )?;
/// let cli = Cli {
///     strategy: StrategyArg::Greedy,
///     instance: file.path().to_path_buf(),
///     seed: None,
///     no_verify: false,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.solution.truncated_cost(), 4);
/// assert_eq!(summary.verification, Verification::Passed);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(
        path = %cli.instance.display(),
        strategy = ?cli.strategy,
        required = field::Empty,
    ),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let instance = load_instance(&cli)?;
    Span::current().record("required", instance.required().len());

    let mut builder = RuralPostmanBuilder::new().with_matching(cli.strategy.into());
    if let Some(seed) = cli.seed {
        builder = builder.with_seed(seed);
    }
    let solver = builder.build();

    let started = Instant::now();
    let solution = solver.solve(instance.graph(), instance.required())?;
    let elapsed = started.elapsed();

    let verification = if cli.no_verify {
        Verification::Skipped
    } else {
        match solution.verify(instance.required()) {
            Ok(()) => Verification::Passed,
            Err(defect) => {
                warn!(code = %defect.code(), %defect, "solution failed verification");
                Verification::Failed(defect)
            }
        }
    };
    info!(
        instance = instance.name(),
        cost = solution.total_cost(),
        elapsed_secs = elapsed.as_secs_f64(),
        "instance solved"
    );

    Ok(ExecutionSummary {
        instance: instance.name().to_owned(),
        solution,
        elapsed,
        verification,
    })
}

fn load_instance(cli: &Cli) -> Result<UrppInstance, CliError> {
    let file = File::open(&cli.instance).map_err(|source| CliError::Io {
        path: cli.instance.clone(),
        source,
    })?;
    UrppInstance::try_from_reader(BufReader::new(file)).map_err(|source| CliError::Instance {
        path: cli.instance.clone(),
        source,
    })
}

/// Renders `summary` to `writer`: the circuit as 1-based vertex ids on one
/// line, the truncated cost, and the solve time in seconds.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let vertices: Vec<String> = summary
        .solution
        .vertex_sequence()
        .iter()
        .map(|vertex| (vertex + 1).to_string())
        .collect();
    writeln!(writer, "{}", vertices.join(" "))?;
    writeln!(writer, "{}", summary.solution.truncated_cost())?;
    writeln!(writer, "{:.3} secs.", summary.elapsed.as_secs_f64())?;
    if let Verification::Failed(defect) = &summary.verification {
        writeln!(writer, "invalid solution: {defect}")?;
    }
    Ok(())
}
