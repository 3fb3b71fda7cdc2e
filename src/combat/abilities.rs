//! Ability templates and resolution.
//!
//! Each variant declares a fixed, ordered ability list. Templates are
//! immutable statics shared by every entity of the variant, so no instance
//! can leak mutable ability state to another. Formulas are a closed tagged
//! set dispatched by the engine (no per-instance callables).

use std::fmt;

use serde::Serialize;

use crate::combat::entity::Entity;
use crate::combat::variant::Variant;

/// Offensive abilities reduce the target's HP; restorative abilities raise
/// the actor's own HP, reading the target's pre-heal HP as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AbilityKind {
    Attack,
    Heal,
}

impl AbilityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Heal => "Heal",
        }
    }
}

/// Damage/heal formulas as data, keyed per ability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Formula {
    /// Damage = `fraction * actor.hp` while `actor.hp > min_hp_exclusive`
    /// (when a threshold is set); zero damage below it, still applied as a
    /// no-op rather than rejected.
    SelfScaledStrike {
        fraction: f64,
        min_hp_exclusive: Option<f64>,
    },
    /// Damage = `self_fraction * actor.hp + target_fraction * target.hp`.
    CompositeStrike {
        self_fraction: f64,
        target_fraction: f64,
    },
    /// Actor heals `fraction * target.hp`. The target loses nothing.
    Drain { fraction: f64 },
    /// As [`Formula::Drain`], but yields 0 and mutates nothing when the
    /// target shares the actor's variant (a Mummy does not eat its own kind).
    DrainExceptKin { fraction: f64 },
    /// Actor heals a flat amount, ignoring the target entirely.
    FixedRestore { amount: f64 },
}

/// A named action bound to a variant, listed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbilityTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AbilityKind,
    pub formula: Formula,
}

const ZOMBIE_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        name: "Attack",
        description: "Attack another undead with damage equal to 50% of its HP.",
        kind: AbilityKind::Attack,
        formula: Formula::SelfScaledStrike {
            fraction: 0.5,
            min_hp_exclusive: Some(50.0),
        },
    },
    AbilityTemplate {
        name: "Eat",
        description: "Eat another undead to gain 50% of its HP.",
        kind: AbilityKind::Heal,
        formula: Formula::Drain { fraction: 0.5 },
    },
];

const VAMPIRE_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        name: "Attack",
        description: "Attack another undead with damage equal to its HP.",
        kind: AbilityKind::Attack,
        formula: Formula::SelfScaledStrike {
            fraction: 1.0,
            min_hp_exclusive: Some(0.0),
        },
    },
    AbilityTemplate {
        name: "Bite",
        description: "Bite another undead to gain 80% of its HP.",
        kind: AbilityKind::Heal,
        formula: Formula::Drain { fraction: 0.8 },
    },
];

const SKELETON_ABILITIES: &[AbilityTemplate] = &[AbilityTemplate {
    name: "Attack",
    description: "Attack another undead with damage equal to 70% of its HP.",
    kind: AbilityKind::Attack,
    formula: Formula::SelfScaledStrike {
        fraction: 0.7,
        min_hp_exclusive: None,
    },
}];

const GHOST_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        name: "Attack",
        description: "Attack another undead with damage equal to 20% of its HP.",
        kind: AbilityKind::Attack,
        formula: Formula::SelfScaledStrike {
            fraction: 0.2,
            min_hp_exclusive: None,
        },
    },
    AbilityTemplate {
        name: "Haunt",
        description: "Haunt another undead to gain 10% of its HP.",
        kind: AbilityKind::Heal,
        formula: Formula::Drain { fraction: 0.1 },
    },
];

const LICH_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        name: "Attack",
        description: "Attack another undead with damage equal to 70% of its HP.",
        kind: AbilityKind::Attack,
        formula: Formula::SelfScaledStrike {
            fraction: 0.7,
            min_hp_exclusive: Some(0.0),
        },
    },
    AbilityTemplate {
        name: "Cast Spell",
        description: "Cast a spell on another undead to gain 10% of its HP.",
        kind: AbilityKind::Heal,
        formula: Formula::Drain { fraction: 0.1 },
    },
];

const MUMMY_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        name: "Attack",
        description: "Attack another undead with damage equal to 50% of its HP plus 10% of the undead HP.",
        kind: AbilityKind::Attack,
        formula: Formula::CompositeStrike {
            self_fraction: 0.5,
            target_fraction: 0.1,
        },
    },
    AbilityTemplate {
        name: "Revive",
        description: "Revive itself to its initial HP.",
        kind: AbilityKind::Heal,
        formula: Formula::FixedRestore { amount: 100.0 },
    },
    AbilityTemplate {
        name: "Eat",
        description: "Eat another undead to gain 50% of its HP.",
        kind: AbilityKind::Heal,
        formula: Formula::DrainExceptKin { fraction: 0.5 },
    },
];

impl Variant {
    /// Ability list in fixed declaration order for this variant.
    pub fn abilities(self) -> &'static [AbilityTemplate] {
        match self {
            Self::Zombie => ZOMBIE_ABILITIES,
            Self::Vampire => VAMPIRE_ABILITIES,
            Self::Skeleton => SKELETON_ABILITIES,
            Self::Ghost => GHOST_ABILITIES,
            Self::Lich => LICH_ABILITIES,
            Self::Mummy => MUMMY_ABILITIES,
        }
    }
}

/// Ordered abilities available to `entity`.
pub fn list_abilities(entity: &Entity) -> &'static [AbilityTemplate] {
    entity.variant().abilities()
}

/// Resolve an ability by case-insensitive exact name match. Fails without
/// mutating anything.
pub fn resolve_by_name(
    entity: &Entity,
    name: &str,
) -> Result<&'static AbilityTemplate, ResolveError> {
    list_abilities(entity)
        .iter()
        .find(|ability| ability.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ResolveError::UnknownAbility {
            actor: entity.name().to_string(),
            name: name.to_string(),
        })
}

/// Resolve an ability by zero-based position in the declared list.
pub fn resolve_by_index(
    entity: &Entity,
    index: usize,
) -> Result<&'static AbilityTemplate, ResolveError> {
    let abilities = list_abilities(entity);
    abilities
        .get(index)
        .ok_or_else(|| ResolveError::IndexOutOfRange {
            actor: entity.name().to_string(),
            index,
            available: abilities.len(),
        })
}

/// Lookup failure: a retryable input error for the driver, never an engine
/// crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    UnknownAbility {
        actor: String,
        name: String,
    },
    IndexOutOfRange {
        actor: String,
        index: usize,
        available: usize,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAbility { actor, name } => {
                write!(f, "{actor} has no ability named '{name}'")
            }
            Self::IndexOutOfRange {
                actor,
                index,
                available,
            } => write!(
                f,
                "ability index {index} out of range for {actor} ({available} available)"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
