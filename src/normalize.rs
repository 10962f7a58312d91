//! Input normalization.
//!
//! Two entry points:
//! - [`split_columns`] turns well-formed projects into parallel columns, the
//!   shape the recursive and tabulated solvers index into.
//! - [`normalize_records`] validates raw [`ProjectRecord`]s and is the only
//!   place malformed input is reported.

use crate::error::InputError;
use crate::project::{FieldValue, Project, ProjectRecord};

/// Parallel views of a project slice. All three vectors have the same length
/// and entry `k` of each describes project `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columns<'a> {
    pub names: Vec<&'a str>,
    pub values: Vec<u64>,
    pub hours: Vec<usize>,
}

impl Columns<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split projects into parallel name/value/hours columns.
pub fn split_columns(projects: &[Project]) -> Columns<'_> {
    let mut names = Vec::with_capacity(projects.len());
    let mut values = Vec::with_capacity(projects.len());
    let mut hours = Vec::with_capacity(projects.len());
    for p in projects {
        names.push(p.name.as_str());
        values.push(p.value);
        hours.push(p.hours);
    }
    Columns {
        names,
        values,
        hours,
    }
}

/// Validate raw records and coerce their numeric fields.
///
/// Stops at the first malformed record. Also rejects inputs whose values sum
/// past `u64::MAX`, since no solver's total can then be represented.
pub fn normalize_records(records: &[ProjectRecord]) -> Result<Vec<Project>, InputError> {
    let projects = records
        .iter()
        .enumerate()
        .map(|(index, rec)| {
            let name = rec
                .name
                .clone()
                .ok_or(InputError::MissingField { index, field: "name" })?;
            let value = coerce(index, "value", rec.value.as_ref())?;
            let hours = coerce(index, "hours", rec.hours.as_ref())?;
            let hours = usize::try_from(hours).map_err(|_| InputError::NotAnInteger {
                index,
                field: "hours",
                raw: hours.to_string(),
            })?;
            Ok(Project::new(name, value, hours))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = 0u64;
    for (index, p) in projects.iter().enumerate() {
        total = total
            .checked_add(p.value)
            .ok_or(InputError::TotalValueOverflow { index })?;
    }
    Ok(projects)
}

fn coerce(
    index: usize,
    field: &'static str,
    raw: Option<&FieldValue>,
) -> Result<u64, InputError> {
    let parsed = match raw {
        None => return Err(InputError::MissingField { index, field }),
        Some(FieldValue::Integer(v)) => *v,
        Some(FieldValue::Text(s)) => {
            s.trim()
                .parse::<i64>()
                .map_err(|_| InputError::NotAnInteger {
                    index,
                    field,
                    raw: s.clone(),
                })?
        }
    };
    u64::try_from(parsed).map_err(|_| InputError::Negative {
        index,
        field,
        raw: parsed,
    })
}
