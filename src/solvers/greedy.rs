//! Greedy selection by value-per-hour ratio.
//!
//! Projects are ranked by `value / hours`, highest first, and taken in that
//! order whenever they still fit. This runs in O(n log n) but is not exact:
//! with capacity 50 and `(60, 10)`, `(100, 20)`, `(120, 30)` it takes the
//! first two for 160 and misses `(100, 20) + (120, 30) = 220`.
//!
//! Zero-hours projects have no ratio and are left out of the ranking, so a
//! free project with positive value is never taken by this strategy.

use crate::project::Project;
use crate::traits::PortfolioSolver;

/// Ratio-greedy strategy. Returns only the accumulated value.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

/// One entry of the greedy ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedProject {
    /// Position in the input slice.
    pub index: usize,
    pub ratio: f64,
}

impl GreedySolver {
    /// Rank projects with positive hours by descending ratio.
    ///
    /// The sort is stable: equal ratios keep their input order.
    pub fn rank(projects: &[Project]) -> Vec<RankedProject> {
        let mut ranked: Vec<RankedProject> = projects
            .iter()
            .enumerate()
            .filter_map(|(index, p)| p.ratio().map(|ratio| RankedProject { index, ratio }))
            .collect();
        ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        ranked
    }
}

impl PortfolioSolver for GreedySolver {
    type Output = u64;

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn solve(&self, capacity: usize, projects: &[Project]) -> u64 {
        if capacity == 0 || projects.is_empty() {
            return 0;
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("greedy_solve", n = projects.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut remaining = capacity;
        let mut total = 0u64;
        for entry in Self::rank(projects) {
            let p = &projects[entry.index];
            if p.hours <= remaining {
                total += p.value;
                remaining -= p.hours;
                #[cfg(feature = "tracing")]
                tracing::trace!(project = %p.name, ratio = entry.ratio, remaining, "take");
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(value = total, unused = remaining, "greedy done");
        total
    }

    fn total_value(&self, output: &u64) -> u64 {
        *output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(raw: &[(&str, u64, usize)]) -> Vec<Project> {
        raw.iter().map(|&(n, v, h)| Project::new(n, v, h)).collect()
    }

    #[test]
    fn misses_optimum_on_ratio_trap() {
        let ps = projects(&[("P1", 60, 10), ("P2", 100, 20), ("P3", 120, 30)]);
        assert_eq!(GreedySolver.solve(50, &ps), 160);
    }

    #[test]
    fn ties_keep_input_order() {
        let ps = projects(&[("a", 4, 2), ("b", 6, 3), ("c", 2, 1)]);
        let order: Vec<usize> = GreedySolver::rank(&ps).iter().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn zero_hours_projects_are_ignored() {
        let ps = projects(&[("free", 50, 0), ("paid", 5, 1)]);
        assert_eq!(GreedySolver::rank(&ps).len(), 1);
        assert_eq!(GreedySolver.solve(1, &ps), 5);
    }

    #[test]
    fn skips_but_keeps_walking_after_a_misfit() {
        // "big" ranks second but does not fit; "small" still gets in.
        let ps = projects(&[("best", 10, 2), ("big", 18, 4), ("small", 3, 1)]);
        assert_eq!(GreedySolver.solve(3, &ps), 13);
    }

    #[test]
    fn degenerate_inputs_give_zero() {
        assert_eq!(GreedySolver.solve(0, &projects(&[("A", 1, 1)])), 0);
        assert_eq!(GreedySolver.solve(10, &[]), 0);
    }
}
