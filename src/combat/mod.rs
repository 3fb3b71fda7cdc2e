pub mod abilities;
pub mod engine;
pub mod entity;
pub mod roster;
pub mod variant;

pub use abilities::{
    list_abilities, resolve_by_index, resolve_by_name, AbilityKind, AbilityTemplate, Formula,
    ResolveError,
};
pub use engine::{apply, Outcome, Target};
pub use entity::Entity;
pub use roster::{Roster, RosterError};
pub use variant::{UnknownVariant, Variant, BASE_HP, GHOST_INTAKE_SCALE, SKELETON_HP, VAMPIRE_HP};
