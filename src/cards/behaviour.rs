//! Per-archetype card behaviour.
//!
//! Every card carries an `Archetype` tag. The tag selects a stateless
//! strategy implementing `CardBehaviour`, which answers the rule questions
//! that differ between card types: whether the card can be laid, how an AI
//! should rate it, and how it modifies combat.
//!
//! ## Adding an archetype
//!
//! 1. Add the variant to `Archetype`.
//! 2. Implement `CardBehaviour` on a unit struct, overriding only what differs.
//! 3. Map the variant in `Archetype::behaviour` and `Archetype::accepts`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::{CardData, CardType, ShipData};
use super::resources::ResourceType;
use crate::board::BoardSection;
use crate::combat::ShipView;
use crate::players::GamePlayer;

/// Behaviour tag of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Plain resource card.
    Resource,
    /// Ship with no special rules.
    Ship,
    /// Fast frigate that punishes slower ships.
    EagleFrigate,
    /// A player's station.
    Station,
    /// The turret every ship is built with.
    DefaultTurret,
    KineticTurret,
    LaserBeamTurret,
    /// Ability hitting every small enemy ship.
    MissileBarrage,
}

impl Archetype {
    /// The strategy implementing this archetype.
    #[must_use]
    pub fn behaviour(self) -> &'static dyn CardBehaviour {
        match self {
            Archetype::Resource => &ResourceBehaviour,
            Archetype::Ship => &ShipBehaviour,
            Archetype::EagleFrigate => &EagleFrigateBehaviour,
            Archetype::Station => &StationBehaviour,
            Archetype::DefaultTurret => &DefaultTurretBehaviour,
            Archetype::KineticTurret | Archetype::LaserBeamTurret => &WeaponBehaviour,
            Archetype::MissileBarrage => &MissileBarrageBehaviour,
        }
    }

    /// Whether a card of `card_type` may carry this archetype.
    #[must_use]
    pub fn accepts(self, card_type: CardType) -> bool {
        let expected = match self {
            Archetype::Resource => CardType::Resource,
            Archetype::Ship | Archetype::EagleFrigate => CardType::Ship,
            Archetype::Station => CardType::Station,
            Archetype::DefaultTurret | Archetype::KineticTurret | Archetype::LaserBeamTurret => {
                CardType::Weapon
            }
            Archetype::MissileBarrage => CardType::Ability,
        };
        expected == card_type
    }
}

/// Coarse rating the AI uses to pick between layable cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AiCardWorth {
    ShouldNotPlayAtAll,
    BadCardToPlay,
    AverageCardToPlay,
    GoodCardToPlay,
}

/// Why a card cannot be laid right now.
///
/// The `Display` text is the reason shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayRejection {
    #[error("Insufficient {0}")]
    InsufficientResources(ResourceType),
    #[error("No free ship slots")]
    NoShipSlots,
    #[error("Resource card limit reached this turn")]
    ResourceLimitReached,
    #[error("No valid target")]
    NoValidTarget,
    #[error("Card cannot be laid from hand")]
    NotLayable,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Cards can only be laid while placing cards")]
    WrongPhase,
    #[error("No card at hand index {0}")]
    NotInHand(usize),
    #[error("The battle is over")]
    BattleOver,
}

/// Immediate effect of an ability card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Deal `damage` to every opponent ship whose defence plus speed is at
    /// most `max_defence_plus_speed`.
    DamageOpponentShips {
        damage: i32,
        max_defence_plus_speed: i32,
    },
}

impl AbilityEffect {
    /// Whether a ship with `data` is hit by this effect.
    #[must_use]
    pub fn affects(&self, data: &ShipData) -> bool {
        match *self {
            AbilityEffect::DamageOpponentShips {
                max_defence_plus_speed,
                ..
            } => data.defence + data.speed <= max_defence_plus_speed,
        }
    }
}

/// Rule hooks that vary by archetype.
///
/// Implementors are stateless; all state lives in the player, the board and
/// the card's data record.
pub trait CardBehaviour: Sync {
    /// Whether `player` may lay `card` now.
    ///
    /// The default only checks resources.
    fn can_lay(&self, card: &CardData, player: &GamePlayer) -> Result<(), LayRejection> {
        player.have_sufficient_resources(&card.resource_costs)
    }

    /// How much the AI wants to lay this card given both board sections.
    fn ai_worth(&self, _ai_section: &BoardSection, _other_section: &BoardSection) -> AiCardWorth {
        AiCardWorth::AverageCardToPlay
    }

    /// Damage per shot from `me` against `target` (`None` for non-ships).
    fn calculate_attack(&self, me: &ShipView, _target: Option<&ShipView>) -> i32 {
        me.base_attack()
    }

    /// Damage `me` takes from `input_damage` dealt by `attacker`.
    ///
    /// `attacker` is `None` when the source is not a ship.
    fn calculate_damage_done_to_this(
        &self,
        _me: &ShipView,
        _attacker: Option<&ShipView>,
        input_damage: i32,
    ) -> i32 {
        input_damage
    }

    /// Effect resolved when the card is laid.
    fn on_lay(&self) -> Option<AbilityEffect> {
        None
    }

    /// Called for every laid card when its owner's placement phase begins.
    fn on_turn_begin(&self, _card: &CardData) {}
}

/// Resource cards: limited per turn.
pub struct ResourceBehaviour;

impl CardBehaviour for ResourceBehaviour {
    fn can_lay(&self, card: &CardData, player: &GamePlayer) -> Result<(), LayRejection> {
        if !player.can_lay_resource() {
            return Err(LayRejection::ResourceLimitReached);
        }
        player.have_sufficient_resources(&card.resource_costs)
    }
}

/// Plain ships: need a free slot.
pub struct ShipBehaviour;

impl CardBehaviour for ShipBehaviour {
    fn can_lay(&self, card: &CardData, player: &GamePlayer) -> Result<(), LayRejection> {
        if !player.can_place_ship() {
            return Err(LayRejection::NoShipSlots);
        }
        player.have_sufficient_resources(&card.resource_costs)
    }
}

/// Eagle Frigate: +1 attack against slower ships, -1 damage from slower ships.
pub struct EagleFrigateBehaviour;

impl CardBehaviour for EagleFrigateBehaviour {
    fn can_lay(&self, card: &CardData, player: &GamePlayer) -> Result<(), LayRejection> {
        ShipBehaviour.can_lay(card, player)
    }

    fn ai_worth(&self, _ai_section: &BoardSection, _other_section: &BoardSection) -> AiCardWorth {
        AiCardWorth::GoodCardToPlay
    }

    fn calculate_attack(&self, me: &ShipView, target: Option<&ShipView>) -> i32 {
        let base = me.base_attack();
        match target {
            Some(target) if target.speed < me.speed => base + 1,
            _ => base,
        }
    }

    fn calculate_damage_done_to_this(
        &self,
        me: &ShipView,
        attacker: Option<&ShipView>,
        input_damage: i32,
    ) -> i32 {
        match attacker {
            Some(attacker) if attacker.speed < me.speed => (input_damage - 1).max(0),
            _ => input_damage,
        }
    }
}

/// Stations are placed at battle start, never from hand.
pub struct StationBehaviour;

impl CardBehaviour for StationBehaviour {
    fn can_lay(&self, _card: &CardData, _player: &GamePlayer) -> Result<(), LayRejection> {
        Err(LayRejection::NotLayable)
    }

    fn ai_worth(&self, _ai_section: &BoardSection, _other_section: &BoardSection) -> AiCardWorth {
        AiCardWorth::ShouldNotPlayAtAll
    }
}

/// The turret every ship is built with. Never in a hand.
pub struct DefaultTurretBehaviour;

impl CardBehaviour for DefaultTurretBehaviour {
    fn can_lay(&self, _card: &CardData, _player: &GamePlayer) -> Result<(), LayRejection> {
        Err(LayRejection::NotLayable)
    }

    fn ai_worth(&self, _ai_section: &BoardSection, _other_section: &BoardSection) -> AiCardWorth {
        panic!("The default turret is never offered to the AI");
    }
}

/// Weapon cards: need a ship to mount on.
pub struct WeaponBehaviour;

impl CardBehaviour for WeaponBehaviour {
    fn can_lay(&self, card: &CardData, player: &GamePlayer) -> Result<(), LayRejection> {
        if player.ships_placed() == 0 {
            return Err(LayRejection::NoValidTarget);
        }
        player.have_sufficient_resources(&card.resource_costs)
    }
}

/// Missile Barrage: 1 damage to every enemy ship with defence + speed <= 5.
pub struct MissileBarrageBehaviour;

impl MissileBarrageBehaviour {
    pub const EFFECT: AbilityEffect = AbilityEffect::DamageOpponentShips {
        damage: 1,
        max_defence_plus_speed: 5,
    };
}

impl CardBehaviour for MissileBarrageBehaviour {
    fn on_lay(&self) -> Option<AbilityEffect> {
        Some(Self::EFFECT)
    }
}
