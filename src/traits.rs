//! The solver interface.
//!
//! Every strategy takes the same input, a capacity and an ordered slice of
//! [`Project`]s, and is a pure function of it: no state survives between
//! calls, so solving the same input twice yields the same output.
//!
//! Strategies differ in what they return. Value-only solvers use `u64` as
//! their output; the tabulated solver returns a [`Selection`](crate::selection::Selection).
//! [`PortfolioSolver::total_value`] recovers the objective from either.

use crate::project::Project;

/// A 0/1 knapsack strategy over projects.
pub trait PortfolioSolver {
    /// What [`solve`](Self::solve) returns.
    type Output: Clone + std::fmt::Debug;

    /// Short stable identifier, used in reports.
    fn name(&self) -> &'static str;

    /// Whether the strategy always returns the optimum.
    fn is_exact(&self) -> bool;

    /// Solve for `capacity` hours over `projects`.
    ///
    /// A capacity of 0 or an empty slice yields a zero-valued output.
    /// The sum of all project values must fit in `u64`;
    /// [`normalize_records`](crate::normalize::normalize_records) enforces this.
    fn solve(&self, capacity: usize, projects: &[Project]) -> Self::Output;

    /// Objective value carried by an output of this solver.
    fn total_value(&self, output: &Self::Output) -> u64;
}
