//! Project records: the items of the knapsack.
//!
//! A [`Project`] is an immutable `(name, value, hours)` triple. Identity is
//! positional: two projects with the same name are still distinct items, and
//! every solver refers to projects by their index in the input slice.
//!
//! [`ProjectRecord`] is the raw shape read from a scenario file. Its fields may
//! be missing or hold numeric text; it becomes a `Project` only through
//! [`normalize_records`](crate::normalize::normalize_records).

use serde::{Deserialize, Serialize};

/// A candidate project: reward `value` for spending `hours` of capacity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub value: u64,
    pub hours: usize,
}

impl Project {
    pub fn new(name: impl Into<String>, value: u64, hours: usize) -> Self {
        Self {
            name: name.into(),
            value,
            hours,
        }
    }

    /// Value per hour, or `None` for a zero-hours project.
    #[inline]
    pub fn ratio(&self) -> Option<f64> {
        if self.hours == 0 {
            None
        } else {
            Some(self.value as f64 / self.hours as f64)
        }
    }
}

impl<S: Into<String>> From<(S, u64, usize)> for Project {
    fn from((name, value, hours): (S, u64, usize)) -> Self {
        Project::new(name, value, hours)
    }
}

/// Numeric field as it may appear in a scenario file: `12` or `"12"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

/// Unvalidated project record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<FieldValue>,
    #[serde(default)]
    pub hours: Option<FieldValue>,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        hours: impl Into<FieldValue>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            hours: Some(hours.into()),
        }
    }
}

impl From<&Project> for ProjectRecord {
    fn from(p: &Project) -> Self {
        Self {
            name: Some(p.name.clone()),
            value: Some(FieldValue::Integer(p.value as i64)),
            hours: Some(FieldValue::Integer(p.hours as i64)),
        }
    }
}
