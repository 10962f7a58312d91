//! Example: load scenarios from TOML and compare all strategies.
//!
//! Run with:
//! `cargo run --example scenario_file [-- path/to/scenarios.toml]`

use portfolio_dp::{scenario::load_scenarios, Comparator, ScenarioError};

fn main() -> Result<(), ScenarioError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/data/portfolios.toml").to_string());

    let comparator = Comparator::new();
    for cmp in comparator.compare_all(&load_scenarios(&path)?) {
        println!(
            "{:<20} optimal {:>4} via {:?}  (greedy {}, gap {})",
            cmp.label,
            cmp.optimal_value(),
            cmp.tabulation.names(),
            cmp.greedy,
            cmp.greedy_gap()
        );
    }
    Ok(())
}
