//! Example: where ratio-greedy goes wrong, and what the table sees instead.
//!
//! Run with:
//! `cargo run --example greedy_trap`

use portfolio_dp::{GreedySolver, PortfolioSolver, Project, TabulationSolver};

fn main() {
    let projects = vec![
        Project::new("P1", 60, 10),
        Project::new("P2", 100, 20),
        Project::new("P3", 120, 30),
    ];
    let capacity = 50;

    println!("Greedy ranking (value/hours):");
    for entry in GreedySolver::rank(&projects) {
        println!("  {:<4} {:.2}", projects[entry.index].name, entry.ratio);
    }
    println!("Greedy value: {}", GreedySolver.solve(capacity, &projects));

    let table = TabulationSolver::build_table(capacity, &projects);
    println!("\nLast column of the table (capacity {capacity}):");
    for i in 0..table.rows() {
        println!("  first {i} project(s): {}", table.get(i, capacity));
    }

    let chosen = TabulationSolver::reconstruct(&table, &projects);
    let names: Vec<&str> = chosen.iter().map(|&k| projects[k].name.as_str()).collect();
    println!("Optimal value: {}  chosen: {:?}", table.optimal(), names);
}
