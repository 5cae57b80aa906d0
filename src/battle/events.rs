//! Battle results and the event log.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::ResourceType;
use crate::core::{PairId, PlayerId};

/// The two phases of every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The active player lays cards.
    PlaceCards,
    /// The active player's ready ships attack.
    Battle,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::PlaceCards => f.write_str("place cards"),
            TurnPhase::Battle => f.write_str("battle"),
        }
    }
}

/// Where a card is laid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayTarget {
    /// The player's own board section.
    Board,
    /// One of the player's ships. Only weapons take a ship target.
    Ship(PairId),
}

/// What laying a card produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaidCard {
    /// A token was added to this pool.
    Resource(ResourceType),
    /// A new ship pair.
    Ship(PairId),
    /// A weapon pair mounted on `ship`.
    Weapon { ship: PairId, weapon: PairId },
    /// An ability resolved; `ships_hit` enemy ships took damage.
    Ability { ships_hit: usize, destroyed: Vec<PairId> },
}

/// Result of one shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: PairId,
    pub target: PairId,
    /// Health removed from the target.
    pub damage: i32,
    pub target_destroyed: bool,
}

/// Why an attack was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AttackRejection {
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Ships can only attack during the battle phase")]
    WrongPhase,
    #[error("{0} is not one of your ships")]
    NotYourShip(PairId),
    #[error("{0} is not ready")]
    NotReady(PairId),
    #[error("{0} has no shots left")]
    NoShotsLeft(PairId),
    #[error("{0} is not a living enemy ship")]
    InvalidTarget(PairId),
    #[error("The battle is over")]
    BattleOver,
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub winner: PlayerId,
    /// Turn on which the losing station fell.
    pub turn: u32,
}

/// Something the presentation layer should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    TurnBegan { player: PlayerId, turn: u32 },
    PhaseChanged { player: PlayerId, phase: TurnPhase },
    CardDrawn { player: PlayerId, card: String },
    CardLaid { player: PlayerId, card: String, pair: Option<PairId> },
    AttackResolved(AttackReport),
    ShipDestroyed { owner: PlayerId, pair: PairId },
    AbilityResolved { player: PlayerId, card: String, ships_hit: usize },
    BattleWon { winner: PlayerId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(AttackRejection::NotReady(PairId(3)).to_string(), "Pair(3) is not ready");
        assert_eq!(AttackRejection::BattleOver.to_string(), "The battle is over");
    }

    #[test]
    fn test_event_serialization() {
        let event = BattleEvent::AttackResolved(AttackReport {
            attacker: PairId(1),
            target: PairId(2),
            damage: 2,
            target_destroyed: false,
        });

        let json = serde_json::to_string(&event).unwrap();
        let back: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
