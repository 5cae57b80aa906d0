//! Health tracking for anything that can be destroyed.

use serde::{Deserialize, Serialize};

/// Health counter with a terminal dead flag.
///
/// Health starts at `max_health` and only ever goes down. Once it reaches
/// zero the module is dead and ignores further damage.
///
/// ```
/// use space_card_game::combat::DamageableObjectModule;
///
/// let mut hull = DamageableObjectModule::new(3);
/// hull.apply_damage(1);
/// hull.apply_damage(1);
/// assert!(!hull.dead());
///
/// hull.apply_damage(1);
/// assert!(hull.dead());
/// assert_eq!(hull.health(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageableObjectModule {
    max_health: i32,
    health: i32,
    dead: bool,
}

impl DamageableObjectModule {
    /// Create a module at full health.
    ///
    /// Panics if `max_health` is not positive.
    #[must_use]
    pub fn new(max_health: i32) -> Self {
        assert!(max_health > 0, "Damageable objects need positive health, got {max_health}");
        Self {
            max_health,
            health: max_health,
            dead: false,
        }
    }

    /// Current health, never below zero.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health at creation.
    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Whether health has reached zero.
    #[must_use]
    pub fn dead(&self) -> bool {
        self.dead
    }

    /// Apply already-modified damage.
    ///
    /// Negative amounts count as zero. Returns the health actually removed.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        if self.dead {
            return 0;
        }

        let before = self.health;
        self.health = (self.health - amount.max(0)).max(0);
        if self.health <= 0 {
            self.dead = true;
        }

        before - self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_module_is_full() {
        let module = DamageableObjectModule::new(4);
        assert_eq!(module.health(), 4);
        assert_eq!(module.max_health(), 4);
        assert!(!module.dead());
    }

    #[test]
    fn test_three_hits_kill_defence_three() {
        let mut module = DamageableObjectModule::new(3);

        assert_eq!(module.apply_damage(1), 1);
        assert_eq!(module.apply_damage(1), 1);
        assert!(!module.dead());
        assert_eq!(module.apply_damage(1), 1);
        assert!(module.dead());

        // Dead is terminal.
        assert_eq!(module.apply_damage(1), 0);
        assert_eq!(module.health(), 0);
        assert!(module.dead());
    }

    #[test]
    fn test_overkill_clamps() {
        let mut module = DamageableObjectModule::new(2);
        assert_eq!(module.apply_damage(5), 2);
        assert_eq!(module.health(), 0);
        assert!(module.dead());
    }

    #[test]
    fn test_negative_damage_is_ignored() {
        let mut module = DamageableObjectModule::new(2);
        assert_eq!(module.apply_damage(-3), 0);
        assert_eq!(module.health(), 2);
    }

    #[test]
    #[should_panic(expected = "positive health")]
    fn test_zero_health_panics() {
        let _ = DamageableObjectModule::new(0);
    }
}
