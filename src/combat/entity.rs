//! Entity state: name, HP, death status. All mid-battle mutation goes through
//! [`Entity::take_damage`] and [`Entity::heal`], which enforce the rounding,
//! floor-at-zero and death-recompute invariants.

use crate::combat::variant::Variant;

/// Round to 2 decimal places. Applied after every mutation, never before.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One undead creature instance. Created with a variant and an optional
/// custom name; never destroyed during a session. A dead entity remains
/// addressable and may be healed back to a live state.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    hp: f64,
    dead: bool,
    variant: Variant,
}

impl Entity {
    /// Create an entity with the variant's starting HP. A missing `name`
    /// falls back to the variant's default display name.
    pub fn new(variant: Variant, name: Option<&str>) -> Entity {
        Entity {
            name: name.unwrap_or(variant.default_name()).to_string(),
            hp: variant.starting_hp(),
            dead: false,
            variant,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Death status. Death-pinned variants (Vampire, Lich) always read alive.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Reduce HP by `amount` scaled through the variant's damage intake
    /// (Ghost takes 10% of anything thrown at it). Returns the scaled amount
    /// handed to the HP reduction, not the amount absorbed: hitting a 3 HP
    /// target for 56 still reports 56.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let effective = amount * self.variant.intake_scale();
        self.set_hp(self.hp - effective);
        effective
    }

    /// Raise HP by `amount`. Heals are never intake-scaled.
    pub fn heal(&mut self, amount: f64) -> f64 {
        self.set_hp(self.hp + amount);
        amount
    }

    /// Direct HP override. Rounds, floors at zero and recomputes death like
    /// any other mutation. Reference behavior only uses this at construction
    /// time (the duel API uses it for ad-hoc starting states).
    pub fn set_hp(&mut self, hp: f64) {
        let rounded = round2(hp);
        self.hp = if rounded <= 0.0 { 0.0 } else { rounded };
        self.dead = !self.variant.death_pinned() && self.hp <= 0.0;
    }

    /// Proportional HP scaling, construction-time only (Ghost halves its
    /// base HP this way).
    pub fn scale_hp(&mut self, multiplier: f64) {
        self.set_hp(self.hp * multiplier);
    }
}
