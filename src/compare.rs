//! Side-by-side comparison of all four strategies on one scenario.
//!
//! The exhaustive solver is exponential in the project count, so a
//! [`Comparator`] only runs it up to a configurable limit and records `None`
//! beyond that.
//!
//! Projects with zero hours and positive value ("free" projects) are the one
//! input where the exact strategies legitimately differ: the recursive pair
//! stops once the remaining capacity hits 0, while the table keeps adding free
//! projects. Such comparisons only require recursive == memoized <= tabulation.
//!
//! ```
//! use portfolio_dp::{compare::Comparator, scenario::Scenario};
//!
//! let scenario = &Scenario::builtin()[1];
//! let cmp = Comparator::new().compare(scenario);
//! assert_eq!(cmp.greedy, 160);
//! assert_eq!(cmp.optimal_value(), 220);
//! assert!(cmp.verify(scenario.capacity).is_ok());
//! ```

use serde::Serialize;

use crate::project::Project;
use crate::scenario::Scenario;
use crate::selection::Selection;
use crate::solvers::{GreedySolver, MemoizedSolver, RecursiveSolver, TabulationSolver};
use crate::traits::PortfolioSolver;
use crate::utils::DEFAULT_RECURSIVE_LIMIT;
#[cfg(feature = "parallel")]
use rayon::join;

/// Results of every strategy on a single scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub label: String,
    pub capacity: usize,
    pub greedy: u64,
    /// `None` when the project count exceeded the comparator's recursive limit.
    pub recursive: Option<u64>,
    pub memoized: u64,
    pub tabulation: Selection,
    /// Some project costs no hours but is worth something.
    pub free_projects: bool,
}

impl Comparison {
    /// The optimum, as found by the tabulated solver.
    #[inline]
    pub fn optimal_value(&self) -> u64 {
        self.tabulation.value
    }

    /// Highest value reported by any strategy.
    pub fn best_value(&self) -> u64 {
        [
            self.greedy,
            self.recursive.unwrap_or(0),
            self.memoized,
            self.tabulation.value,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// How much value greedy leaves on the table.
    #[inline]
    pub fn greedy_gap(&self) -> u64 {
        self.optimal_value().saturating_sub(self.greedy)
    }

    /// All exact strategies that ran report the same value, or, with free
    /// projects, the recursive pair agree and do not beat the table.
    pub fn exact_agree(&self) -> bool {
        let opt = self.optimal_value();
        let memo_ok = if self.free_projects {
            self.memoized <= opt
        } else {
            self.memoized == opt
        };
        memo_ok && self.recursive.map_or(true, |v| v == self.memoized)
    }

    /// Check the cross-solver and feasibility properties, describing the first
    /// violation found.
    pub fn verify(&self, capacity: usize) -> Result<(), String> {
        if !self.exact_agree() {
            return Err(format!(
                "exact solvers disagree: recursive={:?} memoized={} tabulation={} free_projects={}",
                self.recursive, self.memoized, self.tabulation.value, self.free_projects
            ));
        }
        if self.greedy > self.optimal_value() {
            return Err(format!(
                "greedy {} exceeds optimum {}",
                self.greedy,
                self.optimal_value()
            ));
        }
        if self.tabulation.total_hours() > capacity {
            return Err(format!(
                "selection uses {} hours, capacity is {capacity}",
                self.tabulation.total_hours()
            ));
        }
        if self.tabulation.total_value() != self.tabulation.value {
            return Err(format!(
                "selection is worth {}, reported {}",
                self.tabulation.total_value(),
                self.tabulation.value
            ));
        }
        Ok(())
    }
}

/// Runs all strategies on a scenario.
#[derive(Clone, Debug)]
pub struct Comparator {
    recursive_limit: usize,
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator {
    /// Comparator with [`DEFAULT_RECURSIVE_LIMIT`].
    pub fn new() -> Self {
        Self::with_recursive_limit(DEFAULT_RECURSIVE_LIMIT)
    }

    /// Comparator that runs the exhaustive solver for at most `limit` projects.
    pub fn with_recursive_limit(limit: usize) -> Self {
        Self {
            recursive_limit: limit,
        }
    }

    pub fn recursive_limit(&self) -> usize {
        self.recursive_limit
    }

    fn run_recursive(&self, capacity: usize, projects: &[Project]) -> Option<u64> {
        if projects.len() > self.recursive_limit {
            #[cfg(feature = "tracing")]
            tracing::info!(
                n = projects.len(),
                limit = self.recursive_limit,
                call_bound = crate::utils::recursive_call_bound(projects.len()),
                "skipping exhaustive solver"
            );
            return None;
        }
        Some(RecursiveSolver.solve(capacity, projects))
    }

    /// Solve `scenario` with every strategy.
    pub fn compare(&self, scenario: &Scenario) -> Comparison {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("compare", label = %scenario.label);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (capacity, projects) = (scenario.capacity, scenario.projects.as_slice());
        let (greedy, recursive, memoized, tabulation) = self.solve_all(capacity, projects);

        let cmp = Comparison {
            label: scenario.label.clone(),
            capacity,
            greedy,
            recursive,
            memoized,
            tabulation,
            free_projects: projects.iter().any(|p| p.hours == 0 && p.value > 0),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            optimal = cmp.optimal_value(),
            greedy = cmp.greedy,
            gap = cmp.greedy_gap(),
            agree = cmp.exact_agree(),
            "comparison done"
        );
        cmp
    }

    /// Compare every scenario in order.
    pub fn compare_all(&self, scenarios: &[Scenario]) -> Vec<Comparison> {
        scenarios.iter().map(|s| self.compare(s)).collect()
    }

    #[cfg(feature = "parallel")]
    fn solve_all(
        &self,
        capacity: usize,
        projects: &[Project],
    ) -> (u64, Option<u64>, u64, Selection) {
        let ((greedy, recursive), (memoized, tabulation)) = join(
            || {
                join(
                    || GreedySolver.solve(capacity, projects),
                    || self.run_recursive(capacity, projects),
                )
            },
            || {
                join(
                    || MemoizedSolver.solve(capacity, projects),
                    || TabulationSolver.solve(capacity, projects),
                )
            },
        );
        (greedy, recursive, memoized, tabulation)
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_all(
        &self,
        capacity: usize,
        projects: &[Project],
    ) -> (u64, Option<u64>, u64, Selection) {
        (
            GreedySolver.solve(capacity, projects),
            self.run_recursive(capacity, projects),
            MemoizedSolver.solve(capacity, projects),
            TabulationSolver.solve(capacity, projects),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_comparisons_verify() {
        let cmp = Comparator::new();
        for scenario in Scenario::builtin() {
            let c = cmp.compare(&scenario);
            assert_eq!(c.verify(scenario.capacity), Ok(()), "{}", scenario.label);
        }
    }

    #[test]
    fn greedy_gap_on_trap() {
        let c = Comparator::new().compare(&Scenario::builtin()[1]);
        assert_eq!(c.greedy_gap(), 60);
        assert_eq!(c.best_value(), 220);
        assert_eq!(c.tabulation.names(), vec!["P2", "P3"]);
    }

    #[test]
    fn recursive_skipped_above_limit() {
        let scenario = &Scenario::builtin()[0];
        let c = Comparator::with_recursive_limit(2).compare(scenario);
        assert_eq!(c.recursive, None);
        assert!(c.exact_agree());
        assert_eq!(c.optimal_value(), 29);
    }

    #[test]
    fn verify_reports_disagreement() {
        let mut c = Comparator::new().compare(&Scenario::builtin()[2]);
        c.memoized += 1;
        assert!(c.verify(5).unwrap_err().contains("disagree"));
    }

    #[test]
    fn free_projects_relax_exact_agreement() {
        let scenario = Scenario::new(
            "free",
            3,
            vec![Project::new("free", 5, 0), Project::new("A", 10, 3)],
        );
        let c = Comparator::new().compare(&scenario);
        assert!(c.free_projects);
        assert_eq!(c.recursive, Some(10));
        assert_eq!(c.memoized, 10);
        assert_eq!(c.optimal_value(), 15);
        assert!(c.exact_agree());
        assert_eq!(c.verify(3), Ok(()));
    }

    #[test]
    fn free_projects_still_catch_recursive_mismatch() {
        let scenario = Scenario::new(
            "free",
            3,
            vec![Project::new("free", 5, 0), Project::new("A", 10, 3)],
        );
        let mut c = Comparator::new().compare(&scenario);
        c.memoized = 16;
        assert!(c.verify(3).unwrap_err().contains("disagree"));
    }

    #[test]
    fn verify_reports_overfull_selection() {
        let c = Comparator::new().compare(&Scenario::builtin()[0]);
        assert!(c.verify(8).unwrap_err().contains("hours"));
    }
}
