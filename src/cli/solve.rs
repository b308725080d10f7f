use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::{read_costs, OutputFormat};
use crate::core::assignment::Assignment;
use crate::parsing::InputFormat;
use crate::solver::{HungarianAlgorithm, SolverConfig};

#[derive(Args)]
pub struct SolveArgs {
    /// Cost matrix file (TSV, CSV or JSON, optionally .gz)
    /// Use '-' for stdin (TSV unless --input-format is given)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (detected from the file extension by default)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Treat entries as profits and find the maximum-total assignment
    #[arg(long)]
    pub maximize: bool,

    /// Skip the row/column reduction heuristic
    #[arg(long)]
    pub no_reduce: bool,

    /// Skip the greedy warm-start heuristic
    #[arg(long)]
    pub no_greedy: bool,
}

/// Execute the solve command
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the matrix is rejected.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let costs = read_costs(&args.input, args.input_format)?;

    if verbose {
        eprintln!(
            "Input: {} workers x {} jobs",
            costs.len(),
            costs.first().map_or(0, Vec::len)
        );
    }

    let config = SolverConfig {
        reduce: !args.no_reduce,
        greedy_warm_start: !args.no_greedy,
    };
    debug!(?config, maximize = args.maximize, "Solver configuration");

    let solver = if args.maximize {
        HungarianAlgorithm::with_config(&negate_costs(&costs), config)?
    } else {
        HungarianAlgorithm::with_config(&costs, config)?
    };
    let assignment = solver.execute();

    // Report the cost against the matrix as given, not the negated copy
    let total = assignment.total_cost(&costs);

    match format {
        OutputFormat::Text => print_text_result(&args, &costs, &assignment, total),
        OutputFormat::Json => print_json_result(&args, config, &assignment, total)?,
        OutputFormat::Tsv => print_tsv_result(&costs, &assignment),
    }

    Ok(())
}

/// Negate every entry, turning a profit matrix into a cost matrix.
///
/// Minimizing the negated matrix maximizes the original total.
fn negate_costs(costs: &[Vec<f64>]) -> Vec<Vec<f64>> {
    costs
        .iter()
        .map(|row| row.iter().map(|&c| -c).collect())
        .collect()
}

fn objective(args: &SolveArgs) -> &'static str {
    if args.maximize {
        "maximize"
    } else {
        "minimize"
    }
}

fn print_text_result(
    args: &SolveArgs,
    costs: &[Vec<f64>],
    assignment: &Assignment,
    total: f64,
) {
    println!("Assignment Results");
    println!("{}", "=".repeat(60));

    println!("\nInput: {}", args.input.display());
    println!("  Workers: {}", assignment.len());
    println!("  Jobs: {}", assignment.job_count());
    println!("  Objective: {}", objective(args));

    println!("\nAssignment:");
    for (worker, job) in assignment.iter() {
        match job {
            Some(job) => println!(
                "  worker {worker} -> job {job}  (cost {})",
                costs[worker][job]
            ),
            None => println!("  worker {worker} -> unassigned"),
        }
    }

    let unassigned_jobs = assignment.unassigned_jobs();
    if !unassigned_jobs.is_empty() {
        println!("\nUnused jobs: {unassigned_jobs:?}");
    }

    println!("\nTotal cost: {total}");
}

fn print_json_result(
    args: &SolveArgs,
    config: SolverConfig,
    assignment: &Assignment,
    total: f64,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "workers": assignment.len(),
        "jobs": assignment.job_count(),
        "objective": objective(args),
        "config": config,
        "assignment": assignment.to_signed(),
        "total_cost": total,
        "unassigned_workers": assignment.unassigned_workers(),
        "unassigned_jobs": assignment.unassigned_jobs(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(costs: &[Vec<f64>], assignment: &Assignment) {
    println!("worker\tjob\tcost");
    for (worker, job) in assignment.iter() {
        match job {
            Some(job) => println!("{worker}\t{job}\t{}", costs[worker][job]),
            None => println!("{worker}\t-1\t"),
        }
    }
}
