//! Example: run every strategy on the built-in portfolio cases.
//!
//! Run with:
//! `cargo run --example portfolio`

use portfolio_dp::{
    GreedySolver, MemoizedSolver, PortfolioSolver, RecursiveSolver, Scenario, TabulationSolver,
};

fn main() {
    for (idx, scenario) in Scenario::builtin().iter().enumerate() {
        println!("\n{}", "-".repeat(60));
        println!("Case {} - {}", idx + 1, scenario.label);
        println!("Capacity: {}", scenario.capacity);
        println!("Projects: {:?}", scenario.projects);

        let (capacity, projects) = (scenario.capacity, scenario.projects.as_slice());
        let mut results = Vec::new();

        for (label, value) in [
            ("Greedy (not guaranteed optimal)", GreedySolver.solve(capacity, projects)),
            ("Pure recursion (exponential)", RecursiveSolver.solve(capacity, projects)),
            ("Memoized recursion (top-down)", MemoizedSolver.solve(capacity, projects)),
        ] {
            println!("  {label}: {value}");
            results.push(value);
        }

        let selection = TabulationSolver.solve(capacity, projects);
        results.push(selection.value);
        println!("  Bottom-up table (optimal): {}", selection.value);
        println!("    Chosen projects: {:?}", selection.names());

        if let Some(best) = results.iter().max() {
            println!("  --> Best value found: {best}");
        }
    }
}
