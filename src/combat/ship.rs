//! Ship hulls and the stat snapshot handed to card behaviours.

use std::sync::Arc;

use super::damage::DamageableObjectModule;
use super::turret::Turret;
use crate::cards::ShipData;

/// A ship hull on the battlefield.
///
/// The hull owns its health. Its turret travels with the mounted weapon
/// card, see `CardShipPair`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    data: Arc<ShipData>,
    damage: DamageableObjectModule,
}

impl Ship {
    /// Create a hull at full health.
    #[must_use]
    pub fn new(data: Arc<ShipData>) -> Self {
        let damage = DamageableObjectModule::new(data.defence);
        Self { data, damage }
    }

    #[must_use]
    pub fn data(&self) -> &ShipData {
        &self.data
    }

    #[must_use]
    pub fn damage_module(&self) -> &DamageableObjectModule {
        &self.damage
    }

    pub fn damage_module_mut(&mut self) -> &mut DamageableObjectModule {
        &mut self.damage
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.damage.health()
    }

    #[must_use]
    pub fn dead(&self) -> bool {
        self.damage.dead()
    }

    /// Number of damage markers to show on the hull.
    ///
    /// One marker per point of damage taken. A destroyed hull shows none,
    /// it is replaced by its wreck.
    #[must_use]
    pub fn visible_damage_indicators(&self) -> usize {
        if self.dead() {
            return 0;
        }
        (self.data.defence - self.health()).max(0) as usize
    }

    /// Snapshot of the combat stats with `turret` mounted.
    #[must_use]
    pub fn view(&self, turret: &Turret) -> ShipView {
        ShipView {
            attack: self.data.attack,
            defence: self.data.defence,
            speed: self.data.speed,
            turret_damage: turret.damage(),
            default_turret: turret.is_default(),
        }
    }
}

/// Copyable combat stats of a ship and its mounted turret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipView {
    pub attack: i32,
    pub defence: i32,
    pub speed: i32,
    pub turret_damage: i32,
    pub default_turret: bool,
}

impl ShipView {
    /// Damage per shot before archetype modifiers.
    ///
    /// The default turret fires with the hull's attack; any other turret
    /// uses its own damage.
    #[must_use]
    pub fn base_attack(&self) -> i32 {
        if self.default_turret {
            self.attack
        } else {
            self.turret_damage
        }
    }
}
