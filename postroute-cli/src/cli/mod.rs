//! Command-line interface for the rural postman heuristic.
//!
//! `postroute <a|v> <instance>` loads a URPP instance, solves it with the
//! greedy (`a`) or vertex-scan (`v`) matching heuristic, and prints the
//! circuit, its cost, and the time spent solving.

mod commands;

pub use commands::{
    Cli, CliError, ExecutionSummary, StrategyArg, Verification, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
