//! Fluent construction of a [`Comparator`].

use crate::compare::Comparator;
use crate::utils::DEFAULT_RECURSIVE_LIMIT;

/// Builder for [`Comparator`]. Unset options fall back to their defaults.
///
/// ```
/// use portfolio_dp::ComparatorBuilder;
///
/// let cmp = ComparatorBuilder::new().with_recursive_limit(8).build();
/// assert_eq!(cmp.recursive_limit(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct ComparatorBuilder {
    recursive_limit: Option<usize>,
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparatorBuilder {
    pub fn new() -> Self {
        Self {
            recursive_limit: None,
        }
    }
    pub fn with_recursive_limit(mut self, limit: usize) -> Self {
        self.recursive_limit = Some(limit);
        self
    }
    /// Never run the exhaustive solver.
    pub fn without_recursive(mut self) -> Self {
        self.recursive_limit = Some(0);
        self
    }
    pub fn build(self) -> Comparator {
        Comparator::with_recursive_limit(self.recursive_limit.unwrap_or(DEFAULT_RECURSIVE_LIMIT))
    }
}
