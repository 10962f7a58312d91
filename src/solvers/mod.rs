//! The four knapsack strategies.
//!
//! - [`greedy`]     : value/hours ratio ordering; fast, not exact.
//! - [`recursive`]  : exhaustive include/exclude recursion; exact, O(2^n).
//! - [`memoized`]   : the same recursion with a `(index, remaining)` cache; O(n * C).
//! - [`tabulation`] : bottom-up table plus backtracking to recover the chosen projects.
//!
//! None depends on another; they share only the input shape and the
//! [`PortfolioSolver`](crate::traits::PortfolioSolver) trait.

pub mod greedy;
pub mod memoized;
pub mod recursive;
pub mod tabulation;

pub use greedy::GreedySolver;
pub use memoized::{MemoStats, MemoizedSolver};
pub use recursive::RecursiveSolver;
pub use tabulation::TabulationSolver;
