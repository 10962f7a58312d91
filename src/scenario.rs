//! Portfolio scenarios: a labelled capacity plus its candidate projects.
//!
//! Scenarios come from [`Scenario::builtin`] or from a TOML file:
//!
//! ```
//! use portfolio_dp::scenario::scenarios_from_toml_str;
//!
//! let scenarios = scenarios_from_toml_str(r#"
//!     [[scenarios]]
//!     label = "Greedy must fail"
//!     capacity = 50
//!     projects = [
//!         { name = "P1", value = 60, hours = 10 },
//!         { name = "P2", value = "100", hours = 20 },
//!         { name = "P3", value = 120, hours = 30 },
//!     ]
//! "#).unwrap();
//!
//! assert_eq!(scenarios[0].capacity, 50);
//! assert_eq!(scenarios[0].projects[1].value, 100);
//! ```
//!
//! A negative capacity in a file is read as 0, which every solver treats as
//! "nothing fits". A scenario whose table would exceed
//! [`MAX_TABLE_CELLS`](crate::utils::MAX_TABLE_CELLS) is rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::normalize::normalize_records;
use crate::project::{Project, ProjectRecord};
use crate::utils::{table_cells, MAX_TABLE_CELLS};

/// One knapsack instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub label: String,
    pub capacity: usize,
    pub projects: Vec<Project>,
}

impl Scenario {
    pub fn new(label: impl Into<String>, capacity: usize, projects: Vec<Project>) -> Self {
        Self {
            label: label.into(),
            capacity,
            projects,
        }
    }

    /// The four demonstration cases.
    pub fn builtin() -> Vec<Scenario> {
        fn ps(raw: &[(&str, u64, usize)]) -> Vec<Project> {
            raw.iter().map(|&(n, v, h)| Project::new(n, v, h)).collect()
        }
        vec![
            Scenario::new(
                "Statement example",
                10,
                ps(&[
                    ("Project A", 12, 4),
                    ("Project B", 10, 3),
                    ("Project C", 7, 2),
                    ("Project D", 4, 3),
                ]),
            ),
            Scenario::new(
                "Greedy must fail",
                50,
                ps(&[("P1", 60, 10), ("P2", 100, 20), ("P3", 120, 30)]),
            ),
            Scenario::new(
                "Small capacity",
                5,
                ps(&[("X", 5, 4), ("Y", 6, 5), ("Z", 3, 2)]),
            ),
            Scenario::new(
                "Only one project fits",
                3,
                ps(&[("Grande", 100, 10), ("Pequeno", 20, 3)]),
            ),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    scenarios: Vec<RawScenario>,
}

#[derive(Debug, Deserialize)]
struct RawScenario {
    label: String,
    capacity: i64,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

impl RawScenario {
    fn into_scenario(self) -> Result<Scenario, ScenarioError> {
        let projects = normalize_records(&self.projects).map_err(|source| ScenarioError::Input {
            label: self.label.clone(),
            source,
        })?;
        let capacity = usize::try_from(self.capacity.max(0)).map_err(|_| {
            ScenarioError::Invalid(format!(
                "scenario '{}': capacity {} does not fit in memory",
                self.label, self.capacity
            ))
        })?;
        if !projects.is_empty() {
            match table_cells(projects.len(), capacity) {
                Some(cells) if cells <= MAX_TABLE_CELLS => {}
                _ => {
                    return Err(ScenarioError::Invalid(format!(
                        "scenario '{}': {} projects x capacity {} exceeds {MAX_TABLE_CELLS} table cells",
                        self.label,
                        projects.len(),
                        capacity
                    )))
                }
            }
        }
        Ok(Scenario::new(self.label, capacity, projects))
    }
}

/// Parse scenarios from TOML text.
pub fn scenarios_from_toml_str(s: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let file: ScenarioFile = toml::from_str(s)?;
    if file.scenarios.is_empty() {
        return Err(ScenarioError::Invalid("no [[scenarios]] defined".into()));
    }
    file.scenarios
        .into_iter()
        .map(RawScenario::into_scenario)
        .collect()
}

/// Load scenarios from a TOML file.
pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
    let contents = std::fs::read_to_string(path)?;
    scenarios_from_toml_str(&contents)
}
