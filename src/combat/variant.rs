//! Creature type variants. A closed descriptor set replaces the source
//! material's inheritance chains (Lich from Skeleton, Mummy from Zombie):
//! each variant carries its starting HP, damage-intake scale, death pinning
//! and default display name; ability templates live in
//! [`crate::combat::abilities`].

use std::fmt;

/// Default undead HP. Zombie and Mummy start here; Ghost halves it at
/// construction.
pub const BASE_HP: f64 = 100.0;
pub const VAMPIRE_HP: f64 = 120.0;
pub const SKELETON_HP: f64 = 80.0;

/// Fraction of incoming damage a Ghost actually takes.
pub const GHOST_INTAKE_SCALE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Zombie,
    Vampire,
    Skeleton,
    Ghost,
    Lich,
    Mummy,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Zombie,
        Variant::Vampire,
        Variant::Skeleton,
        Variant::Ghost,
        Variant::Lich,
        Variant::Mummy,
    ];

    pub fn starting_hp(self) -> f64 {
        match self {
            Self::Zombie | Self::Mummy => BASE_HP,
            Self::Vampire => VAMPIRE_HP,
            Self::Skeleton | Self::Lich => SKELETON_HP,
            // Half the base, applied at construction.
            Self::Ghost => BASE_HP * 0.5,
        }
    }

    /// Multiplier applied to incoming damage before the HP reduction runs.
    pub fn intake_scale(self) -> f64 {
        match self {
            Self::Ghost => GHOST_INTAKE_SCALE,
            _ => 1.0,
        }
    }

    /// Vampire and Lich never report dead, whatever their HP. Their attacks
    /// still fall to zero damage at 0 HP.
    pub const fn death_pinned(self) -> bool {
        matches!(self, Self::Vampire | Self::Lich)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Zombie => "Zombie",
            Self::Vampire => "Vampire",
            Self::Skeleton => "Skeleton",
            Self::Ghost => "Ghost",
            Self::Lich => "Lich",
            Self::Mummy => "Mummy",
        }
    }

    /// Name a freshly created entity gets when the caller supplies none.
    pub const fn default_name(self) -> &'static str {
        self.name()
    }

    /// Case-insensitive lookup by variant key ("ghost", "Ghost", "GHOST").
    /// Unknown keys are an invalid-choice condition; no entity is created.
    pub fn parse(key: &str) -> Result<Variant, UnknownVariant> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| UnknownVariant {
                key: key.to_string(),
            })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub key: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown undead variant '{}'", self.key)
    }
}

impl std::error::Error for UnknownVariant {}
