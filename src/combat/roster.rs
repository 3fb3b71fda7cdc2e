//! Battle roster: the ordered set of entities a driver owns and mutates
//! through ability applications.

use std::fmt;

use crate::combat::abilities::{resolve_by_name, ResolveError};
use crate::combat::engine::{apply, Outcome, Target};
use crate::combat::entity::Entity;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    entities: Vec<Entity>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// First entity with this exact name. Duplicate names are not rejected;
    /// lookup returns the earliest match.
    pub fn by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name() == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entities.iter().position(|entity| entity.name() == name)
    }

    /// Resolve `ability` on the actor and apply it to the target. Resolution
    /// failure leaves every entity untouched. `actor == target` is a legal
    /// self-targeted application.
    pub fn apply(
        &mut self,
        actor: usize,
        target: usize,
        ability: &str,
    ) -> Result<Outcome, RosterError> {
        let len = self.entities.len();
        if actor >= len {
            return Err(RosterError::NoSuchIndex { index: actor, len });
        }
        if target >= len {
            return Err(RosterError::NoSuchIndex { index: target, len });
        }

        let template = resolve_by_name(&self.entities[actor], ability)?;
        if actor == target {
            Ok(apply(template, &mut self.entities[actor], Target::Itself))
        } else {
            let (acting, targeted) = pair_mut(&mut self.entities, actor, target);
            Ok(apply(template, acting, Target::Other(targeted)))
        }
    }

    pub fn apply_by_names(
        &mut self,
        actor: &str,
        target: &str,
        ability: &str,
    ) -> Result<Outcome, RosterError> {
        let actor_index = self.index_of(actor).ok_or_else(|| RosterError::NoSuchName {
            name: actor.to_string(),
        })?;
        let target_index = self
            .index_of(target)
            .ok_or_else(|| RosterError::NoSuchName {
                name: target.to_string(),
            })?;
        self.apply(actor_index, target_index, ability)
    }
}

/// Disjoint mutable borrows of two roster slots. Callers guarantee
/// `a != b` and both in range.
fn pair_mut(entities: &mut [Entity], a: usize, b: usize) -> (&mut Entity, &mut Entity) {
    if a < b {
        let (low, high) = entities.split_at_mut(b);
        (&mut low[a], &mut high[0])
    } else {
        let (low, high) = entities.split_at_mut(a);
        (&mut high[0], &mut low[b])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    NoSuchIndex { index: usize, len: usize },
    NoSuchName { name: String },
    Resolve(ResolveError),
}

impl From<ResolveError> for RosterError {
    fn from(err: ResolveError) -> RosterError {
        RosterError::Resolve(err)
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchIndex { index, len } => {
                write!(f, "no undead at index {index} (roster holds {len})")
            }
            Self::NoSuchName { name } => write!(f, "no undead named '{name}' in the roster"),
            Self::Resolve(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RosterError {}
