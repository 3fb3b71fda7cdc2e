//! JSON payload builders for the local API console. Route handlers stay in
//! `routes.rs`; everything here is plain string-in/string-out so it is
//! directly testable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::{apply, resolve_by_name, Entity, Outcome, Target, Variant};
use crate::data::scenario::Scenario;
use crate::data::{run_scenario, validate_scenario};

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "barrow-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Clone, Serialize)]
pub struct AbilityInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantInfo {
    pub variant: &'static str,
    pub starting_hp: f64,
    pub death_pinned: bool,
    pub damage_intake_scale: f64,
    pub abilities: Vec<AbilityInfo>,
}

/// Catalog of the six variants: starting stats and ability lists. Also used
/// by the `variants` CLI command.
pub fn variants_payload() -> Result<String, serde_json::Error> {
    let variants: Vec<VariantInfo> = Variant::ALL
        .into_iter()
        .map(|variant| VariantInfo {
            variant: variant.name(),
            starting_hp: variant.starting_hp(),
            death_pinned: variant.death_pinned(),
            damage_intake_scale: variant.intake_scale(),
            abilities: variant
                .abilities()
                .iter()
                .map(|ability| AbilityInfo {
                    name: ability.name,
                    description: ability.description,
                    kind: ability.kind.label(),
                })
                .collect(),
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "variants": variants }))
}

#[derive(Debug, Clone, Deserialize)]
pub struct DuelRequest {
    pub attacker: CombatantSpec,
    /// Omitted target means the ability is applied to the attacker itself.
    #[serde(default)]
    pub target: Option<CombatantSpec>,
    pub ability: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CombatantSpec {
    pub variant: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Optional HP override for mid-battle starting states.
    #[serde(default)]
    pub hp: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityState {
    pub name: String,
    pub variant: &'static str,
    pub hp: f64,
    pub is_dead: bool,
}

fn entity_state(entity: &Entity) -> EntityState {
    EntityState {
        name: entity.name().to_string(),
        variant: entity.variant().name(),
        hp: entity.hp(),
        is_dead: entity.is_dead(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DuelResponse {
    pub status: &'static str,
    pub outcome: Outcome,
    pub attacker: EntityState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<EntityState>,
}

#[derive(Debug)]
pub enum DuelError {
    Parse(serde_json::Error),
    Validation(String),
}

impl fmt::Display for DuelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for DuelError {}

fn build_combatant(spec: &CombatantSpec) -> Result<Entity, DuelError> {
    let variant =
        Variant::parse(&spec.variant).map_err(|err| DuelError::Validation(err.to_string()))?;
    let mut entity = Entity::new(variant, spec.name.as_deref());
    if let Some(hp) = spec.hp {
        if !hp.is_finite() || hp < 0.0 {
            return Err(DuelError::Validation(format!(
                "hp override for '{}' must be finite and non-negative",
                entity.name()
            )));
        }
        entity.set_hp(hp);
    }
    Ok(entity)
}

/// One ability application between two ad-hoc entities.
pub fn duel_payload(body: &str) -> Result<String, DuelError> {
    let request: DuelRequest = serde_json::from_str(body).map_err(DuelError::Parse)?;

    let mut attacker = build_combatant(&request.attacker)?;
    let template = resolve_by_name(&attacker, &request.ability)
        .map_err(|err| DuelError::Validation(err.to_string()))?;

    let (outcome, target) = match &request.target {
        None => (apply(template, &mut attacker, Target::Itself), None),
        Some(spec) => {
            let mut target = build_combatant(spec)?;
            let outcome = apply(template, &mut attacker, Target::Other(&mut target));
            (outcome, Some(target))
        }
    };

    let response = DuelResponse {
        status: "ok",
        outcome,
        attacker: entity_state(&attacker),
        target: target.as_ref().map(entity_state),
    };
    serde_json::to_string_pretty(&response).map_err(DuelError::Parse)
}

#[derive(Debug)]
pub enum ScenarioApiError {
    Parse(serde_json::Error),
    Validation(Vec<String>),
}

impl fmt::Display for ScenarioApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Validation(issues) => write!(f, "invalid scenario ({} issue(s))", issues.len()),
        }
    }
}

impl std::error::Error for ScenarioApiError {}

/// Run a scenario fixture posted as the request body. Authoring mistakes are
/// rejected up front; case failures come back inside the report.
pub fn scenario_payload(body: &str) -> Result<String, ScenarioApiError> {
    let scenario: Scenario = serde_json::from_str(body).map_err(ScenarioApiError::Parse)?;

    let issues = validate_scenario(&scenario);
    if !issues.is_empty() {
        return Err(ScenarioApiError::Validation(issues));
    }

    let report = run_scenario(&scenario)
        .map_err(|err| ScenarioApiError::Validation(vec![err.to_string()]))?;
    serde_json::to_string_pretty(&report).map_err(ScenarioApiError::Parse)
}
