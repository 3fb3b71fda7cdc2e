//! Ability application: formula dispatch and outcome reporting.
//!
//! One application is atomic and mutates exactly one entity: attacks reduce
//! the target's HP, restoratives raise the actor's. Amounts are computed
//! from pre-mutation HP reads, so draining is cost-free to the victim and
//! self-targeting cannot double-count.

use serde::Serialize;

use crate::combat::abilities::{AbilityKind, AbilityTemplate, Formula};
use crate::combat::entity::Entity;

/// Target of an ability application. Self-targeting is legal (Revive is the
/// usual case) and expressed structurally, so actor/target aliasing cannot
/// arise.
#[derive(Debug)]
pub enum Target<'a> {
    Itself,
    Other(&'a mut Entity),
}

/// Structured result of one ability application, consumed by the CLI, the
/// interactive driver and the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub actor: String,
    /// `None` when the ability was applied to the actor itself; presentation
    /// layers print "itself".
    pub target: Option<String>,
    pub ability: &'static str,
    pub description: &'static str,
    pub kind: AbilityKind,
    /// Damage dealt (after intake scaling) or HP gained.
    pub amount: f64,
    pub actor_hp: f64,
    pub actor_dead: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dead: Option<bool>,
}

enum Action {
    Strike(f64),
    Restore(f64),
    Noop,
}

/// Apply one ability. Formula edge cases (sub-threshold zero damage,
/// draining a 0 HP target, self-targeting) complete normally and report a
/// zero or small amount.
pub fn apply(template: &AbilityTemplate, actor: &mut Entity, mut target: Target<'_>) -> Outcome {
    let actor_hp = actor.hp();
    let (target_hp, target_variant) = match &target {
        Target::Itself => (actor_hp, actor.variant()),
        Target::Other(other) => (other.hp(), other.variant()),
    };

    let action = match template.formula {
        Formula::SelfScaledStrike {
            fraction,
            min_hp_exclusive,
        } => {
            let damage = if min_hp_exclusive.map_or(true, |threshold| actor_hp > threshold) {
                actor_hp * fraction
            } else {
                0.0
            };
            Action::Strike(damage)
        }
        Formula::CompositeStrike {
            self_fraction,
            target_fraction,
        } => Action::Strike(self_fraction * actor_hp + target_fraction * target_hp),
        Formula::Drain { fraction } => Action::Restore(fraction * target_hp),
        Formula::DrainExceptKin { fraction } => {
            if target_variant == actor.variant() {
                Action::Noop
            } else {
                Action::Restore(fraction * target_hp)
            }
        }
        Formula::FixedRestore { amount } => Action::Restore(amount),
    };

    let amount = match action {
        Action::Strike(damage) => match &mut target {
            Target::Itself => actor.take_damage(damage),
            Target::Other(other) => other.take_damage(damage),
        },
        Action::Restore(gain) => actor.heal(gain),
        Action::Noop => 0.0,
    };

    let (target_name, target_hp, target_dead) = match &target {
        Target::Itself => (None, None, None),
        Target::Other(other) => (
            Some(other.name().to_string()),
            Some(other.hp()),
            Some(other.is_dead()),
        ),
    };

    Outcome {
        actor: actor.name().to_string(),
        target: target_name,
        ability: template.name,
        description: template.description,
        kind: template.kind,
        amount,
        actor_hp: actor.hp(),
        actor_dead: actor.is_dead(),
        target_hp,
        target_dead,
    }
}
