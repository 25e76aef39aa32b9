use clap::Parser;
use sum_to_n::{sum_to_n_closed_formula, sum_to_n_iterative, sum_to_n_recursive};

/// Print 1 + 2 + ... + n computed three different ways.
#[derive(Debug, Parser)]
#[command(name = "sum-to-n", version, about)]
struct Cli {
    /// Upper bound of the sum (0..=4294967295)
    n: u32,
}

fn main() {
    let cli = Cli::parse();
    println!("Closed-form Formula: {}", sum_to_n_closed_formula(cli.n));
    println!("Iterative Approach: {}", sum_to_n_iterative(cli.n));
    println!("Recursive Approach: {}", sum_to_n_recursive(cli.n));
}
