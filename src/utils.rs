//! Assorted utilities and helpers.

/// Largest project count for which a [`Comparator`](crate::compare::Comparator)
/// runs the exhaustive solver by default.
pub const DEFAULT_RECURSIVE_LIMIT: usize = 24;

/// Largest table, in cells, a loaded scenario may require (8 GiB of `u64`).
pub const MAX_TABLE_CELLS: usize = 1 << 30;

/// Worst-case number of `resolve` calls the exhaustive solver makes for `n`
/// projects, `2^(n+1) - 1`, saturating at `u64::MAX`.
#[inline]
pub fn recursive_call_bound(n: usize) -> u64 {
    if n >= 63 {
        u64::MAX
    } else {
        (1u64 << (n + 1)) - 1
    }
}

/// Number of cells in the tabulation table, `(n + 1) * (capacity + 1)`,
/// or `None` on overflow.
#[inline]
pub fn table_cells(n: usize, capacity: usize) -> Option<usize> {
    n.checked_add(1)?.checked_mul(capacity.checked_add(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_bound_small_n() {
        assert_eq!(recursive_call_bound(0), 1);
        assert_eq!(recursive_call_bound(1), 3);
        assert_eq!(recursive_call_bound(10), 2047);
    }

    #[test]
    fn call_bound_saturates() {
        assert_eq!(recursive_call_bound(63), u64::MAX);
        assert_eq!(recursive_call_bound(500), u64::MAX);
        assert!(recursive_call_bound(62) < u64::MAX);
    }

    #[test]
    fn table_cells_checks_overflow() {
        assert_eq!(table_cells(3, 10), Some(44));
        assert_eq!(table_cells(0, 0), Some(1));
        assert_eq!(table_cells(usize::MAX, 1), None);
        assert_eq!(table_cells(2, usize::MAX / 2), None);
    }
}
