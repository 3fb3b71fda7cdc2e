//! Scenario fixtures: a named roster plus an ordered case list with expected
//! post-states. The JSON shape is preserved from the reference fixtures so
//! existing files keep loading.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SCENARIO_PATH: &str = "data/scenarios/kings_crypt.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub undead: Vec<RosterEntry>,
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Variant key, e.g. "Ghost". Parsed case-insensitively at roster build.
    pub undead: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub description: String,
    pub attacker: String,
    pub target: String,
    pub ability: String,
    /// Entity name -> expected post-state. BTreeMap keeps report ordering
    /// deterministic.
    pub expected_result: BTreeMap<String, ExpectedState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedState {
    pub hp: f64,
    pub is_dead: bool,
}

/// Parse a scenario from a JSON string.
pub fn parse_scenario(input: &str) -> Result<Scenario, ScenarioError> {
    serde_json::from_str(input).map_err(ScenarioError::Parse)
}

/// Load a scenario fixture from disk.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_scenario(&raw)
}

#[derive(Debug)]
pub enum ScenarioError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read scenario '{path}': {source}"),
            Self::Parse(err) => write!(f, "invalid scenario JSON: {err}"),
        }
    }
}

impl std::error::Error for ScenarioError {}
