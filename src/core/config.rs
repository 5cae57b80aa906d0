//! Battle and AI configuration.
//!
//! - `BattleConfig`: rule constants (ship slots, lay limits, hand sizes, seed)
//! - `AiConfig`: cadence of the AI turn controller
//!
//! Both are plain values handed to constructors; nothing reads them from
//! global state.

use serde::{Deserialize, Serialize};

/// Rule constants for a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Ships a player may have on the board at once (stations included).
    pub max_ship_number: u32,

    /// Resource cards a player may lay in a single turn.
    pub resource_cards_per_turn: u32,

    /// Cards drawn when the battle begins.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of each subsequent turn.
    pub cards_drawn_per_turn: usize,

    /// Seed for deck shuffling.
    pub seed: u64,

    /// Shuffle both decks when the battle begins. Off keeps deck order,
    /// which scripted battles rely on.
    pub shuffle_decks: bool,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_ship_number: 6,
            resource_cards_per_turn: 10,
            starting_hand_size: 5,
            cards_drawn_per_turn: 1,
            seed: 42,
            shuffle_decks: true,
        }
    }
}

impl BattleConfig {
    /// Set the ship slot limit.
    #[must_use]
    pub fn with_max_ship_number(mut self, max: u32) -> Self {
        self.max_ship_number = max;
        self
    }

    /// Set the per-turn resource card limit.
    #[must_use]
    pub fn with_resource_cards_per_turn(mut self, count: u32) -> Self {
        self.resource_cards_per_turn = count;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set how many cards are drawn each turn.
    #[must_use]
    pub fn with_cards_drawn_per_turn(mut self, count: usize) -> Self {
        self.cards_drawn_per_turn = count;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the opening shuffle.
    #[must_use]
    pub fn with_shuffle_decks(mut self, shuffle: bool) -> Self {
        self.shuffle_decks = shuffle;
        self
    }
}

/// Timing of the AI turn controller, in seconds of game time.
///
/// These only pace the AI so that a watching player can follow it; they
/// carry no rules meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Minimum time between two card lays.
    pub time_between_card_lays: f32,

    /// Time that must pass before the next volley of attacks.
    pub time_between_attacks: f32,

    /// Grace delay after the last possible attack before ending the turn.
    pub time_until_turn_end: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            time_between_card_lays: 1.0,
            time_between_attacks: 1.0,
            time_until_turn_end: 2.5,
        }
    }
}

impl AiConfig {
    /// A config with every delay set to zero, acting on every tick.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            time_between_card_lays: 0.0,
            time_between_attacks: 0.0,
            time_until_turn_end: 0.0,
        }
    }

    /// Set the delay between card lays.
    #[must_use]
    pub fn with_time_between_card_lays(mut self, seconds: f32) -> Self {
        self.time_between_card_lays = seconds;
        self
    }

    /// Set the delay between attack volleys.
    #[must_use]
    pub fn with_time_between_attacks(mut self, seconds: f32) -> Self {
        self.time_between_attacks = seconds;
        self
    }

    /// Set the grace delay before ending the turn.
    #[must_use]
    pub fn with_time_until_turn_end(mut self, seconds: f32) -> Self {
        self.time_until_turn_end = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_config_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.max_ship_number, 6);
        assert_eq!(config.resource_cards_per_turn, 10);
        assert_eq!(config.cards_drawn_per_turn, 1);
    }

    #[test]
    fn test_battle_config_builder() {
        let config = BattleConfig::default()
            .with_max_ship_number(3)
            .with_starting_hand_size(7)
            .with_seed(9)
            .with_shuffle_decks(false);

        assert_eq!(config.max_ship_number, 3);
        assert_eq!(config.starting_hand_size, 7);
        assert_eq!(config.seed, 9);
        assert!(!config.shuffle_decks);
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.time_between_card_lays, 1.0);
        assert_eq!(config.time_between_attacks, 1.0);
        assert_eq!(config.time_until_turn_end, 2.5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BattleConfig = serde_json::from_str(r#"{ "max_ship_number": 4 }"#).unwrap();
        assert_eq!(config.max_ship_number, 4);
        assert_eq!(config.resource_cards_per_turn, 10);

        let ai: AiConfig = serde_json::from_str(r#"{ "time_until_turn_end": 0.5 }"#).unwrap();
        assert_eq!(ai.time_until_turn_end, 0.5);
        assert_eq!(ai.time_between_attacks, 1.0);
    }
}
