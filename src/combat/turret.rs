//! Turrets: per-phase firing windows.

use serde::{Deserialize, Serialize};

use crate::cards::WeaponData;

/// A ship's weapon.
///
/// A turret gets `shots_per_turn` shots each time a placement phase
/// begins. It starts empty: a freshly laid ship cannot fire until it has
/// been refreshed at the start of a later turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turret {
    damage: i32,
    shots_per_turn: u32,
    shots_left: u32,
    is_default: bool,
}

impl Turret {
    /// Create a turret from weapon stats.
    #[must_use]
    pub fn new(data: &WeaponData, is_default: bool) -> Self {
        Self {
            damage: data.damage,
            shots_per_turn: data.shots_per_turn,
            shots_left: 0,
            is_default,
        }
    }

    /// Damage per shot. Only meaningful for non-default turrets.
    #[must_use]
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Whether this is the default turret every ship is built with.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    #[must_use]
    pub fn shots_per_turn(&self) -> u32 {
        self.shots_per_turn
    }

    #[must_use]
    pub fn shots_left(&self) -> u32 {
        self.shots_left
    }

    /// Whether any shots remain in the current window.
    #[must_use]
    pub fn can_fire(&self) -> bool {
        self.shots_left > 0
    }

    /// Consume one shot.
    ///
    /// Panics if the turret is exhausted; callers check `can_fire` first.
    pub fn fire(&mut self) {
        assert!(self.can_fire(), "Turret fired with no shots left");
        self.shots_left -= 1;
    }

    /// Open a new firing window.
    pub fn refresh(&mut self) {
        self.shots_left = self.shots_per_turn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twin_shot() -> Turret {
        Turret::new(&WeaponData::new(2, 2), false)
    }

    #[test]
    fn test_new_turret_is_empty() {
        let turret = twin_shot();
        assert!(!turret.can_fire());
        assert_eq!(turret.shots_per_turn(), 2);
    }

    #[test]
    fn test_fire_until_exhausted() {
        let mut turret = twin_shot();
        turret.refresh();

        turret.fire();
        assert!(turret.can_fire());
        turret.fire();
        assert!(!turret.can_fire());

        turret.refresh();
        assert_eq!(turret.shots_left(), 2);
    }

    #[test]
    #[should_panic(expected = "no shots left")]
    fn test_fire_exhausted_panics() {
        let mut turret = twin_shot();
        turret.fire();
    }
}
