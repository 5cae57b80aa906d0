//! Runtime card instances.

use std::sync::Arc;

use super::behaviour::{AiCardWorth, Archetype, CardBehaviour, LayRejection};
use super::definition::CardData;
use crate::board::BoardSection;
use crate::combat::ShipView;
use crate::core::PlayerId;
use crate::players::GamePlayer;

/// A card owned by a player, in hand or on the board.
///
/// Cheap to clone: the data record is shared with the registry and every
/// deck holding the same card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameCard {
    data: Arc<CardData>,
    owner: PlayerId,
}

impl GameCard {
    #[must_use]
    pub fn new(data: Arc<CardData>, owner: PlayerId) -> Self {
        Self { data, owner }
    }

    #[must_use]
    pub fn data(&self) -> &CardData {
        &self.data
    }

    /// Shared handle to the data record.
    #[must_use]
    pub fn data_arc(&self) -> &Arc<CardData> {
        &self.data
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn archetype(&self) -> Archetype {
        self.data.archetype
    }

    #[must_use]
    pub fn behaviour(&self) -> &'static dyn CardBehaviour {
        self.data.archetype.behaviour()
    }

    /// Whether `player` may lay this card now.
    pub fn can_lay(&self, player: &GamePlayer) -> Result<(), LayRejection> {
        self.behaviour().can_lay(&self.data, player)
    }

    #[must_use]
    pub fn calculate_ai_metric(&self, ai_section: &BoardSection, other_section: &BoardSection) -> AiCardWorth {
        self.behaviour().ai_worth(ai_section, other_section)
    }

    #[must_use]
    pub fn calculate_attack(&self, me: &ShipView, target: Option<&ShipView>) -> i32 {
        self.behaviour().calculate_attack(me, target)
    }

    #[must_use]
    pub fn calculate_damage_done_to_this(
        &self,
        me: &ShipView,
        attacker: Option<&ShipView>,
        input_damage: i32,
    ) -> i32 {
        self.behaviour()
            .calculate_damage_done_to_this(me, attacker, input_damage)
    }

    pub fn on_turn_begin(&self) {
        self.behaviour().on_turn_begin(&self.data);
    }
}

impl std::fmt::Display for GameCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.data.display_name, self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ResourceType;

    #[test]
    fn test_card_delegates_to_archetype() {
        let card = GameCard::new(
            Arc::new(CardData::ship("Eagle", "Ships/Eagle", Archetype::EagleFrigate)),
            PlayerId::SECOND,
        );

        assert_eq!(card.owner(), PlayerId::SECOND);
        assert_eq!(card.archetype(), Archetype::EagleFrigate);

        let me = ShipView {
            attack: 2,
            defence: 3,
            speed: 3,
            turret_damage: 0,
            default_turret: true,
        };
        let slow = ShipView { speed: 1, ..me };
        assert_eq!(card.calculate_attack(&me, Some(&slow)), 3);
    }

    #[test]
    fn test_display() {
        let card = GameCard::new(
            Arc::new(CardData::resource("Crew", ResourceType::Crew)),
            PlayerId::FIRST,
        );
        assert_eq!(card.to_string(), "Crew (Player 0)");
    }
}
