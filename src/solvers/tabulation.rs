//! Bottom-up dynamic programming with solution reconstruction.
//!
//! Phase 1 fills a [`DpTable`] row by row:
//!
//! ```text
//! T[i][c] = T[i-1][c]                                  if hours[i-1] > c
//!         = max(T[i-1][c], value[i-1] + T[i-1][c - hours[i-1]])  otherwise
//! ```
//!
//! Phase 2 walks the finished table from `(n, capacity)` upwards. Whenever a
//! cell differs from the one above it, project `i - 1` was taken and its hours
//! are subtracted from the column. The walk continues down to row 0 even once
//! the column reaches 0, so zero-hours projects taken by the table are also
//! reported.
//!
//! Both phases run in O(n * capacity) time; the table takes the same space and
//! is dropped when `solve` returns.

use crate::normalize::split_columns;
use crate::project::Project;
use crate::selection::Selection;
use crate::table::DpTable;
use crate::traits::PortfolioSolver;

/// Tabulated strategy returning the optimal value and the chosen projects.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabulationSolver;

impl TabulationSolver {
    /// Phase 1: the full `(n + 1) x (capacity + 1)` table.
    pub fn build_table(capacity: usize, projects: &[Project]) -> DpTable {
        let cols = split_columns(projects);
        let mut table = DpTable::new(cols.len(), capacity);

        for i in 1..=cols.len() {
            let hours = cols.hours[i - 1];
            let value = cols.values[i - 1];
            for cap in 0..=capacity {
                let without = table.get(i - 1, cap);
                let best = if hours > cap {
                    without
                } else {
                    without.max(value + table.get(i - 1, cap - hours))
                };
                table.set(i, cap, best);
            }
        }

        debug_assert!(table.is_monotone());
        table
    }

    /// Phase 2: indices of the chosen projects, ascending.
    ///
    /// `table` must have been built from `projects` by [`build_table`](Self::build_table).
    pub fn reconstruct(table: &DpTable, projects: &[Project]) -> Vec<usize> {
        debug_assert_eq!(table.rows(), projects.len() + 1);
        let mut chosen = Vec::new();
        let mut cap = table.cols() - 1;
        let mut i = projects.len();

        while i > 0 {
            if table.get(i, cap) != table.get(i - 1, cap) {
                chosen.push(i - 1);
                cap -= projects[i - 1].hours;
            }
            i -= 1;
        }

        chosen.reverse();
        chosen
    }
}

impl PortfolioSolver for TabulationSolver {
    type Output = Selection;

    fn name(&self) -> &'static str {
        "tabulation"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn solve(&self, capacity: usize, projects: &[Project]) -> Selection {
        if capacity == 0 || projects.is_empty() {
            return Selection::empty();
        }
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("tabulation_solve", n = projects.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("build_table");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            Self::build_table(capacity, projects)
        };
        let indices = {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("reconstruct");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            Self::reconstruct(&table, projects)
        };

        let selection = Selection {
            value: table.optimal(),
            projects: indices.iter().map(|&k| projects[k].clone()).collect(),
            indices,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            value = selection.value,
            chosen = selection.len(),
            hours = selection.total_hours(),
            "tabulation done"
        );
        selection
    }

    fn total_value(&self, output: &Selection) -> u64 {
        output.value
    }
}
