//! Scenario fixture validation: structural checks that catch authoring
//! mistakes before a run, reported as a full issue list rather than failing
//! on the first problem.

use std::collections::{HashMap, HashSet};

use crate::combat::Variant;
use crate::data::scenario::{load_scenario, Scenario};

/// Validate a scenario fixture file. `Err` carries every issue found,
/// including load/parse failures.
pub fn validate_scenario_file(path: &str) -> Result<(), Vec<String>> {
    let scenario = load_scenario(path).map_err(|err| vec![err.to_string()])?;
    let issues = validate_scenario(&scenario);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Structural checks on an already-parsed scenario.
pub fn validate_scenario(scenario: &Scenario) -> Vec<String> {
    let mut issues = Vec::new();

    if scenario.undead.is_empty() {
        issues.push("scenario has no undead roster".to_string());
    }
    if scenario.cases.is_empty() {
        issues.push("scenario has no cases".to_string());
    }

    let mut variants: HashMap<&str, Variant> = HashMap::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    for (index, entry) in scenario.undead.iter().enumerate() {
        if entry.name.trim().is_empty() {
            issues.push(format!("roster entry #{} has an empty name", index + 1));
        }
        if !seen_names.insert(entry.name.as_str()) {
            issues.push(format!("duplicate undead name '{}'", entry.name));
        }
        match Variant::parse(&entry.undead) {
            Ok(variant) => {
                variants.insert(entry.name.as_str(), variant);
            }
            Err(err) => issues.push(format!("undead '{}': {err}", entry.name)),
        }
    }

    for (index, case) in scenario.cases.iter().enumerate() {
        let case_number = index + 1;
        match variants.get(case.attacker.as_str()) {
            Some(variant) => {
                let known = variant
                    .abilities()
                    .iter()
                    .any(|ability| ability.name.eq_ignore_ascii_case(&case.ability));
                if !known {
                    issues.push(format!(
                        "case #{case_number}: {} ({variant}) has no ability '{}'",
                        case.attacker, case.ability
                    ));
                }
            }
            None => issues.push(format!(
                "case #{case_number}: attacker '{}' is not in the roster",
                case.attacker
            )),
        }
        if !variants.contains_key(case.target.as_str()) {
            issues.push(format!(
                "case #{case_number}: target '{}' is not in the roster",
                case.target
            ));
        }
        if case.expected_result.is_empty() {
            issues.push(format!("case #{case_number}: no expected result entries"));
        }
        for (name, expected) in &case.expected_result {
            if !variants.contains_key(name.as_str()) {
                issues.push(format!(
                    "case #{case_number}: expected undead '{name}' is not in the roster"
                ));
            }
            if !expected.hp.is_finite() || expected.hp < 0.0 {
                issues.push(format!(
                    "case #{case_number}: expected HP for '{name}' must be finite and non-negative"
                ));
            }
        }
    }

    issues
}
