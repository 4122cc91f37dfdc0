//! Magic Hexagon Solver
//!
//! Searches for arrangements of 1..=19 on the 19 cells of the magic
//! hexagon such that all 15 rows and diagonals sum to 38. Solutions are
//! printed to stdout as they are discovered; progress and the end-of-run
//! summary go to the log.

use clap::{Parser, ValueEnum};

use hexmagic::board::{format_flat, format_hexagon};
use hexmagic::puzzle::MAGIC_HEXAGON;
use hexmagic::solver::{self, SearchOutcome, SearchReport, DEFAULT_MAX_ATTEMPTS};

/// Brute-force search for magic hexagon arrangements.
#[derive(Parser)]
#[command(name = "hexmagic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How to enumerate candidate boards.
    #[arg(long, value_enum, default_value = "backtracking")]
    strategy: Strategy,

    /// Stop after this many completed boards have been checked.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u64).range(1..))]
    max_attempts: u64,

    /// Search the whole tree with no attempt cap.
    #[arg(long, conflicts_with = "max_attempts")]
    exhaustive: bool,

    /// Print each solution as an indented hexagon instead of one line.
    #[arg(long)]
    pretty: bool,
}

/// Candidate enumeration strategies. Both visit the same boards in the
/// same order; only the mechanism differs.
#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Recursive placement with an independent state copy per branch.
    Backtracking,
    /// Iterate permutations of the full board directly.
    Permutations,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let budget = (!cli.exhaustive).then_some(cli.max_attempts);
    let emit = |board: &[u8]| {
        if cli.pretty {
            println!("{}", format_hexagon(&MAGIC_HEXAGON, board));
        } else {
            println!("{}", format_flat(&MAGIC_HEXAGON, board));
        }
    };

    let report = match cli.strategy {
        Strategy::Backtracking => solver::solve(&MAGIC_HEXAGON, budget, emit),
        Strategy::Permutations => solver::solve_permutations(&MAGIC_HEXAGON, budget, emit),
    };

    log_summary(&report);
}

/// Logs how the run ended. Both outcomes are normal termination.
fn log_summary(report: &SearchReport) {
    match report.outcome {
        SearchOutcome::Exhausted => log::info!(
            "search exhausted after {} boards, {} solutions found",
            report.attempts,
            report.solutions
        ),
        SearchOutcome::Capped => log::info!(
            "attempt cap reached after {} boards, {} solutions found",
            report.attempts,
            report.solutions
        ),
    }
}
