//! Top-down dynamic programming: the recursion of
//! [`RecursiveSolver`](super::recursive::RecursiveSolver) with a cache keyed by
//! `(index, remaining)`.
//!
//! Every subproblem, base cases included, is stored before it is returned, so
//! each distinct key is computed once. Time and cache size are both bounded by
//! `(n + 1) * (capacity + 1)`. The cache lives for one `solve` call.

use std::collections::HashMap;

use crate::normalize::split_columns;
use crate::project::Project;
use crate::traits::PortfolioSolver;

/// Memoized recursive strategy. Exact, O(n * capacity).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoizedSolver;

/// Work done by one memoized solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Distinct `(index, remaining)` pairs computed, i.e. final cache size.
    pub subproblems: usize,
    /// Lookups answered from the cache.
    pub cache_hits: u64,
}

struct MemoSearch<'a> {
    values: &'a [u64],
    hours: &'a [usize],
    memo: HashMap<(usize, usize), u64>,
    hits: u64,
}

impl MemoSearch<'_> {
    fn resolve(&mut self, index: usize, remaining: usize) -> u64 {
        if let Some(&cached) = self.memo.get(&(index, remaining)) {
            self.hits += 1;
            return cached;
        }
        if index == 0 || remaining == 0 {
            self.memo.insert((index, remaining), 0);
            return 0;
        }

        let hours = self.hours[index - 1];
        let value = self.values[index - 1];
        let best = if hours > remaining {
            self.resolve(index - 1, remaining)
        } else {
            let without = self.resolve(index - 1, remaining);
            let with = value + self.resolve(index - 1, remaining - hours);
            with.max(without)
        };

        self.memo.insert((index, remaining), best);
        best
    }
}

impl MemoizedSolver {
    /// Solve and report cache statistics.
    pub fn solve_with_stats(&self, capacity: usize, projects: &[Project]) -> (u64, MemoStats) {
        if capacity == 0 || projects.is_empty() {
            return (0, MemoStats::default());
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("memoized_solve", n = projects.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let cols = split_columns(projects);
        let mut search = MemoSearch {
            values: &cols.values,
            hours: &cols.hours,
            memo: HashMap::new(),
            hits: 0,
        };
        let best = search.resolve(cols.len(), capacity);
        let stats = MemoStats {
            subproblems: search.memo.len(),
            cache_hits: search.hits,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            value = best,
            subproblems = stats.subproblems,
            cache_hits = stats.cache_hits,
            "memoized done"
        );
        (best, stats)
    }
}

impl PortfolioSolver for MemoizedSolver {
    type Output = u64;

    fn name(&self) -> &'static str {
        "memoized"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn solve(&self, capacity: usize, projects: &[Project]) -> u64 {
        self.solve_with_stats(capacity, projects).0
    }

    fn total_value(&self, output: &u64) -> u64 {
        *output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::recursive::RecursiveSolver;

    fn uniform(n: usize) -> Vec<Project> {
        (0..n).map(|k| Project::new(format!("p{k}"), 1, 1)).collect()
    }

    #[test]
    fn statement_example() {
        let ps = vec![
            Project::new("A", 12, 4),
            Project::new("B", 10, 3),
            Project::new("C", 7, 2),
            Project::new("D", 4, 3),
        ];
        assert_eq!(MemoizedSolver.solve(10, &ps), 29);
    }

    #[test]
    fn cache_is_bounded_by_table_size() {
        let ps = uniform(20);
        let capacity = 8;
        let (value, stats) = MemoizedSolver.solve_with_stats(capacity, &ps);
        assert_eq!(value, 8);
        assert!(stats.subproblems <= (ps.len() + 1) * (capacity + 1));
        assert!(stats.cache_hits > 0);
    }

    #[test]
    fn collapses_repeated_subproblems() {
        let ps = uniform(16);
        let (_, calls) = RecursiveSolver.solve_counting(100, &ps);
        let (_, stats) = MemoizedSolver.solve_with_stats(100, &ps);
        assert!((stats.subproblems as u64) < calls / 100);
    }

    #[test]
    fn degenerate_inputs_give_zero() {
        assert_eq!(
            MemoizedSolver.solve_with_stats(0, &uniform(3)),
            (0, MemoStats::default())
        );
        assert_eq!(MemoizedSolver.solve(3, &[]), 0);
    }
}
