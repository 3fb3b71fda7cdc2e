//! Scenario runner: build the roster, apply each case in order and compare
//! actual against expected state. This is the acceptance contract for the
//! combat engine.

use std::fmt;

use serde::Serialize;

use crate::combat::{Entity, Outcome, Roster, Variant};
use crate::data::scenario::Scenario;

/// Relative tolerance for HP comparison (math.isclose semantics). Death
/// status is compared exactly.
pub const HP_REL_TOLERANCE: f64 = 1e-3;

pub fn approx_eq_rel(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub generated_at: String,
    pub total: usize,
    pub passed: usize,
    pub cases: Vec<CaseReport>,
}

impl ScenarioReport {
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// 1-based case number, matching fixture order.
    pub case: usize,
    pub description: String,
    pub passed: bool,
    /// Lookup/resolution failures; the run continues with the next case.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    pub checks: Vec<EntityCheck>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityCheck {
    pub name: String,
    pub expected_hp: f64,
    pub actual_hp: f64,
    pub expected_dead: bool,
    pub actual_dead: bool,
    pub hp_ok: bool,
    pub dead_ok: bool,
}

impl EntityCheck {
    pub fn ok(&self) -> bool {
        self.hp_ok && self.dead_ok
    }
}

/// Instantiate the scenario roster. Unknown variant keys fail the whole run;
/// nothing is partially created.
pub fn build_roster(scenario: &Scenario) -> Result<Roster, RunError> {
    let mut roster = Roster::new();
    for entry in &scenario.undead {
        let variant = Variant::parse(&entry.undead).map_err(|err| RunError::UnknownVariant {
            name: entry.name.clone(),
            key: err.key,
        })?;
        roster.push(Entity::new(variant, Some(&entry.name)));
    }
    Ok(roster)
}

/// Run every case in order against a fresh roster. A case fails on any HP or
/// death mismatch, on a lookup failure, or on an expected entity missing
/// from the roster; the run itself always completes.
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioReport, RunError> {
    let mut roster = build_roster(scenario)?;
    let mut cases = Vec::with_capacity(scenario.cases.len());

    for (index, case) in scenario.cases.iter().enumerate() {
        let mut errors = Vec::new();

        let outcome = match roster.apply_by_names(&case.attacker, &case.target, &case.ability) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                errors.push(err.to_string());
                None
            }
        };

        let mut checks = Vec::new();
        for (name, expected) in &case.expected_result {
            match roster.by_name(name) {
                Some(entity) => {
                    let hp_ok = approx_eq_rel(entity.hp(), expected.hp, HP_REL_TOLERANCE);
                    let dead_ok = entity.is_dead() == expected.is_dead;
                    checks.push(EntityCheck {
                        name: name.clone(),
                        expected_hp: expected.hp,
                        actual_hp: entity.hp(),
                        expected_dead: expected.is_dead,
                        actual_dead: entity.is_dead(),
                        hp_ok,
                        dead_ok,
                    });
                }
                None => errors.push(format!("expected undead '{name}' is not in the roster")),
            }
        }

        let passed = errors.is_empty() && checks.iter().all(EntityCheck::ok);
        cases.push(CaseReport {
            case: index + 1,
            description: case.description.clone(),
            passed,
            errors,
            outcome,
            checks,
        });
    }

    let passed = cases.iter().filter(|case| case.passed).count();
    Ok(ScenarioReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total: cases.len(),
        passed,
        cases,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    UnknownVariant { name: String, key: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariant { name, key } => {
                write!(f, "undead '{name}' has unknown variant '{key}'")
            }
        }
    }
}

impl std::error::Error for RunError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_rel_matches_isclose_semantics() {
        assert!(approx_eq_rel(60.0, 60.05, 1e-3));
        assert!(!approx_eq_rel(60.0, 60.1, 1e-3));
        assert!(approx_eq_rel(0.0, 0.0, 1e-3));
        assert!(!approx_eq_rel(0.0, 0.01, 1e-3));
    }
}
