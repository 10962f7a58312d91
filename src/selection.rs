//! Concrete project selections returned by the tabulated solver.

use serde::Serialize;

use crate::project::Project;

/// Optimal value together with the projects that achieve it.
///
/// `indices` are positions in the input slice, ascending; `projects[k]` is the
/// input project at `indices[k]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub value: u64,
    pub indices: Vec<usize>,
    pub projects: Vec<Project>,
}

impl Selection {
    /// The empty selection, value 0.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn total_hours(&self) -> usize {
        self.projects.iter().map(|p| p.hours).sum()
    }

    pub fn total_value(&self) -> u64 {
        self.projects.iter().map(|p| p.value).sum()
    }

    /// Fits within `capacity` and the chosen values add up to `value`.
    pub fn is_feasible(&self, capacity: usize) -> bool {
        self.total_hours() <= capacity && self.total_value() == self.value
    }

    pub fn names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }
}

impl From<Selection> for (u64, Vec<Project>) {
    fn from(sel: Selection) -> Self {
        (sel.value, sel.projects)
    }
}
