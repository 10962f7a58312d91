//! Project-portfolio selection as a 0/1 knapsack.
//!
//! Given a capacity (available specialist-hours) and candidate projects, each
//! with a value and an hours cost, pick a subset whose hours fit the capacity
//! and whose total value is maximal. Each project is taken at most once.
//!
//! ## Strategies
//! Four independent solvers implement [`PortfolioSolver`] over the same input:
//! - [`GreedySolver`]: ranks by value/hours and fills greedily. O(n log n),
//!   not guaranteed optimal.
//! - [`RecursiveSolver`]: tries every include/exclude decision. Exact, O(2^n).
//! - [`MemoizedSolver`]: the same recursion with a cache keyed by
//!   `(index, remaining)`. Exact, O(n * C).
//! - [`TabulationSolver`]: fills an `(n + 1) x (C + 1)` table bottom-up and
//!   backtracks through it to return the chosen projects. Exact, O(n * C).
//!
//! ## Quick start
//! ```
//! use portfolio_dp::{PortfolioSolver, Project, TabulationSolver, GreedySolver};
//!
//! let projects = vec![
//!     Project::new("P1", 60, 10),
//!     Project::new("P2", 100, 20),
//!     Project::new("P3", 120, 30),
//! ];
//! let best = TabulationSolver.solve(50, &projects);
//! assert_eq!(best.value, 220);
//! assert_eq!(best.names(), vec!["P2", "P3"]);
//! assert_eq!(GreedySolver.solve(50, &projects), 160);
//! ```
//!
//! ## Scenarios and comparison
//! [`scenario`] holds labelled instances, built in or loaded from TOML, and
//! [`compare`] runs every strategy on one and checks that the exact solvers
//! agree.

pub mod builder;
pub mod compare;
pub mod error;
pub mod normalize;
pub mod project;
pub mod scenario;
pub mod selection;
pub mod solvers;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::ComparatorBuilder;
pub use crate::compare::{Comparator, Comparison};
pub use crate::error::{InputError, ScenarioError};
pub use crate::project::{Project, ProjectRecord};
pub use crate::scenario::Scenario;
pub use crate::selection::Selection;
pub use crate::solvers::{GreedySolver, MemoizedSolver, RecursiveSolver, TabulationSolver};
pub use crate::traits::PortfolioSolver;
