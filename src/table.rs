//! The bottom-up DP table used by the tabulated solver.
//!
//! `T[i][c]` is the best value reachable with the first `i` projects under
//! capacity `c`. Row 0 and column 0 stay zero unless a zero-hours project
//! lifts column 0; values never decrease along either axis.

use crate::utils::table_cells;

/// Dense `(n + 1) x (capacity + 1)` grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl DpTable {
    /// Zeroed table for `num_projects` projects and the given capacity.
    ///
    /// # Panics
    /// Panics if `(num_projects + 1) * (capacity + 1)` overflows `usize`.
    /// Use [`try_new`](Self::try_new) to check first.
    pub fn new(num_projects: usize, capacity: usize) -> Self {
        match Self::try_new(num_projects, capacity) {
            Some(table) => table,
            None => panic!("table for {num_projects} projects x capacity {capacity} overflows usize"),
        }
    }

    /// Zeroed table, or `None` when the cell count overflows `usize`.
    pub fn try_new(num_projects: usize, capacity: usize) -> Option<Self> {
        let len = table_cells(num_projects, capacity)?;
        Some(Self {
            rows: num_projects + 1,
            cols: capacity + 1,
            cells: vec![0; len],
        })
    }

    /// Number of rows, `n + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `capacity + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, cap: usize) -> u64 {
        debug_assert!(i < self.rows && cap < self.cols);
        self.cells[i * self.cols + cap]
    }

    #[inline]
    pub fn set(&mut self, i: usize, cap: usize, value: u64) {
        debug_assert!(i < self.rows && cap < self.cols);
        self.cells[i * self.cols + cap] = value;
    }

    /// Row `i` as a slice over all capacities.
    #[inline]
    pub fn row(&self, i: usize) -> &[u64] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Bottom-right cell: the optimum over all projects and full capacity.
    #[inline]
    pub fn optimal(&self) -> u64 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Check that row 0 is zero and values are non-decreasing along both axes.
    pub fn is_monotone(&self) -> bool {
        if self.row(0).iter().any(|&v| v != 0) {
            return false;
        }
        for i in 0..self.rows {
            let row = self.row(i);
            if row.windows(2).any(|w| w[1] < w[0]) {
                return false;
            }
            if i > 0 && row.iter().zip(self.row(i - 1)).any(|(cur, up)| cur < up) {
                return false;
            }
        }
        true
    }
}
