//! Exhaustive recursion over include/exclude decisions.
//!
//! `resolve(i, c)` is the best value using the first `i` projects with `c`
//! hours left. Each call branches on project `i - 1`, so the number of calls
//! grows as O(2^n); recursion depth is at most `n`.

use crate::normalize::split_columns;
use crate::project::Project;
use crate::traits::PortfolioSolver;

/// Pure recursive strategy, no caching. Exact, exponential.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveSolver;

struct Search<'a> {
    values: &'a [u64],
    hours: &'a [usize],
    calls: u64,
}

impl Search<'_> {
    fn resolve(&mut self, index: usize, remaining: usize) -> u64 {
        self.calls += 1;
        if index == 0 || remaining == 0 {
            return 0;
        }
        let hours = self.hours[index - 1];
        let value = self.values[index - 1];

        if hours > remaining {
            return self.resolve(index - 1, remaining);
        }
        let without = self.resolve(index - 1, remaining);
        let with = value + self.resolve(index - 1, remaining - hours);
        with.max(without)
    }
}

impl RecursiveSolver {
    /// Solve and also report how many times `resolve` was entered.
    pub fn solve_counting(&self, capacity: usize, projects: &[Project]) -> (u64, u64) {
        if capacity == 0 || projects.is_empty() {
            return (0, 0);
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("recursive_solve", n = projects.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let cols = split_columns(projects);
        let mut search = Search {
            values: &cols.values,
            hours: &cols.hours,
            calls: 0,
        };
        let best = search.resolve(cols.len(), capacity);

        #[cfg(feature = "tracing")]
        tracing::debug!(value = best, calls = search.calls, "recursive done");
        (best, search.calls)
    }
}

impl PortfolioSolver for RecursiveSolver {
    type Output = u64;

    fn name(&self) -> &'static str {
        "recursive"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn solve(&self, capacity: usize, projects: &[Project]) -> u64 {
        self.solve_counting(capacity, projects).0
    }

    fn total_value(&self, output: &u64) -> u64 {
        *output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_combination_greedy_misses() {
        let ps = vec![
            Project::new("P1", 60, 10),
            Project::new("P2", 100, 20),
            Project::new("P3", 120, 30),
        ];
        assert_eq!(RecursiveSolver.solve(50, &ps), 220);
    }

    #[test]
    fn single_item_that_fits_exactly() {
        let ps = vec![Project::new("only", 7, 3)];
        assert_eq!(RecursiveSolver.solve(3, &ps), 7);
        assert_eq!(RecursiveSolver.solve(2, &ps), 0);
    }

    #[test]
    fn call_count_grows_exponentially() {
        // Every project fits everywhere: each level doubles the calls until
        // capacity runs out.
        let ps: Vec<Project> = (0..10).map(|k| Project::new(format!("p{k}"), 1, 1)).collect();
        let (value, calls) = RecursiveSolver.solve_counting(100, &ps);
        assert_eq!(value, 10);
        assert_eq!(calls, (1u64 << 11) - 1);
    }

    #[test]
    fn degenerate_inputs_give_zero() {
        assert_eq!(RecursiveSolver.solve_counting(0, &[Project::new("A", 1, 1)]), (0, 0));
        assert_eq!(RecursiveSolver.solve(4, &[]), 0);
    }
}
