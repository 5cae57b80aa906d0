//! Per-player battle state.
//!
//! ## Resources
//!
//! Every laid resource card becomes a `ResourceCard` token in the pool of
//! its type. Laying a card marks tokens used; a new turn marks them all
//! unused again. Tokens are never removed.
//!
//! ## Limits
//!
//! The ship slot and per-turn resource limits are copied from the
//! `BattleConfig` the player was created with.

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{
    Archetype, CardData, CardKind, CardType, ChargeType, Deck, GameCard, LayRejection, ResourceCosts, ResourceType,
};
use crate::core::{BattleConfig, PlayerId};

/// A laid resource card acting as one token of its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceCard {
    data: Arc<CardData>,
    used: bool,
}

impl ResourceCard {
    #[must_use]
    pub fn data(&self) -> &CardData {
        &self.data
    }

    /// Whether the token has been spent this turn.
    #[must_use]
    pub fn used(&self) -> bool {
        self.used
    }
}

/// Notifications raised by a player, drained by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The player's turn began and its resources were refreshed.
    NewTurn,
    /// A card moved from the deck into the hand.
    CardDrawn { display_name: String },
}

/// One player in a battle.
#[derive(Clone, Debug)]
pub struct GamePlayer {
    id: PlayerId,
    deck: Deck,
    hand: Vec<GameCard>,
    resources: [Vec<ResourceCard>; ResourceType::COUNT],
    ships_placed: u32,
    resource_cards_placed_this_turn: u32,
    max_ship_number: u32,
    resource_cards_per_turn: u32,
    events: Vec<PlayerEvent>,
}

impl GamePlayer {
    /// Create a player drawing from `deck`.
    #[must_use]
    pub fn new(id: PlayerId, deck: Deck, config: &BattleConfig) -> Self {
        Self {
            id,
            deck,
            hand: Vec::new(),
            resources: Default::default(),
            ships_placed: 0,
            resource_cards_placed_this_turn: 0,
            max_ship_number: config.max_ship_number,
            resource_cards_per_turn: config.resource_cards_per_turn,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[GameCard] {
        &self.hand
    }

    /// Ships currently on the board, station included.
    #[must_use]
    pub fn ships_placed(&self) -> u32 {
        self.ships_placed
    }

    #[must_use]
    pub fn max_ship_number(&self) -> u32 {
        self.max_ship_number
    }

    #[must_use]
    pub fn can_place_ship(&self) -> bool {
        self.ships_placed < self.max_ship_number
    }

    #[must_use]
    pub fn resource_cards_placed_this_turn(&self) -> u32 {
        self.resource_cards_placed_this_turn
    }

    #[must_use]
    pub fn can_lay_resource(&self) -> bool {
        self.resource_cards_placed_this_turn < self.resource_cards_per_turn
    }

    /// Tokens of one type, in the order they were laid.
    #[must_use]
    pub fn resources(&self, resource: ResourceType) -> &[ResourceCard] {
        &self.resources[resource.index()]
    }

    /// Tokens of one type not yet spent this turn.
    #[must_use]
    pub fn unused_resources(&self, resource: ResourceType) -> usize {
        self.resources(resource).iter().filter(|card| !card.used).count()
    }

    /// Tokens of one type already spent this turn.
    #[must_use]
    pub fn used_resources(&self, resource: ResourceType) -> usize {
        self.resources(resource).len() - self.unused_resources(resource)
    }

    /// Begin this player's turn.
    ///
    /// Every token becomes unused and the per-turn resource counter resets.
    pub fn new_turn(&mut self) {
        self.resource_cards_placed_this_turn = 0;
        for card in self.resources.iter_mut().flatten() {
            card.used = false;
        }
        self.events.push(PlayerEvent::NewTurn);
    }

    /// Whether enough unused tokens exist to pay `costs`.
    ///
    /// Types are checked in enumeration order and the first one lacking is
    /// reported.
    pub fn have_sufficient_resources(&self, costs: &ResourceCosts) -> Result<(), LayRejection> {
        for (resource, cost) in costs.iter() {
            if self.unused_resources(resource) < cost as usize {
                return Err(LayRejection::InsufficientResources(resource));
            }
        }
        Ok(())
    }

    /// Charge or refund every cost in `costs`.
    pub fn alter_resources(&mut self, costs: &ResourceCosts, charge: ChargeType) {
        for (resource, cost) in costs.iter() {
            self.alter_resource(resource, cost, charge);
        }
    }

    /// Charge or refund `amount` tokens of one type.
    ///
    /// Charging marks unused tokens used; refunding marks used tokens
    /// unused. Panics if fewer than `amount` tokens are in the required
    /// state.
    pub fn alter_resource(&mut self, resource: ResourceType, amount: u32, charge: ChargeType) {
        let amount = amount as usize;
        let currently_used = charge == ChargeType::Refund;
        let pool = &mut self.resources[resource.index()];

        let available = pool.iter().filter(|card| card.used == currently_used).count();
        assert!(
            available >= amount,
            "{:?} of {amount} {resource} needs {amount} tokens, {} has {available}",
            charge,
            self.id
        );

        for card in pool
            .iter_mut()
            .filter(|card| card.used == currently_used)
            .take(amount)
        {
            card.used = !currently_used;
        }
    }

    /// Add a laid resource card to its pool as an unused token.
    ///
    /// Counts towards the per-turn resource limit. Panics if the card is
    /// not a resource card.
    pub fn add_resource_card(&mut self, data: Arc<CardData>) {
        let resource = match data.kind {
            CardKind::Resource { resource } => resource,
            _ => panic!("'{}' is not a resource card", data.display_name),
        };
        self.resources[resource.index()].push(ResourceCard { data, used: false });
        self.resource_cards_placed_this_turn += 1;
    }

    /// Record a ship placed on the board.
    ///
    /// Panics if every slot is taken.
    pub fn on_ship_placed(&mut self) {
        assert!(
            self.can_place_ship(),
            "{} already has {} ships",
            self.id,
            self.ships_placed
        );
        self.ships_placed += 1;
    }

    /// Record one of this player's ships being destroyed.
    pub fn on_ship_destroyed(&mut self) {
        assert!(self.ships_placed > 0, "{} has no ships to lose", self.id);
        self.ships_placed -= 1;
    }

    /// Move the top card of the deck into the hand.
    ///
    /// Returns `None` when the deck is empty.
    pub fn draw_card(&mut self) -> Option<&GameCard> {
        let Some(data) = self.deck.draw() else {
            warn!("{} tried to draw from an empty deck", self.id);
            return None;
        };
        Some(self.push_to_hand(data))
    }

    /// Move the topmost card of `archetype` from the deck into the hand.
    ///
    /// Panics if the deck has no such card.
    pub fn draw_card_of_archetype(&mut self, archetype: Archetype) -> &GameCard {
        let data = self
            .deck
            .take_first(|card| card.archetype == archetype)
            .unwrap_or_else(|| panic!("{}'s deck has no {archetype:?} card", self.id));
        self.push_to_hand(data)
    }

    /// Whether the deck still holds a station.
    #[must_use]
    pub fn has_station(&self) -> bool {
        self.deck.contains(|card| card.card_type() == CardType::Station)
    }

    /// Remove the station from the deck so it can be placed directly.
    ///
    /// Panics if the deck has no station.
    pub fn take_station_data(&mut self) -> Arc<CardData> {
        self.deck
            .take_first(|card| card.card_type() == CardType::Station)
            .unwrap_or_else(|| panic!("{}'s deck has no station", self.id))
    }

    /// Take a card out of the hand.
    ///
    /// Panics if `index` is out of range.
    pub fn remove_from_hand(&mut self, index: usize) -> GameCard {
        assert!(
            index < self.hand.len(),
            "{} has no card at hand index {index}",
            self.id
        );
        self.hand.remove(index)
    }

    /// Take all pending notifications.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_to_hand(&mut self, data: Arc<CardData>) -> &GameCard {
        debug!("{} drew {}", self.id, data.display_name);
        self.events.push(PlayerEvent::CardDrawn {
            display_name: data.display_name.clone(),
        });
        self.hand.push(GameCard::new(data, self.id));
        &self.hand[self.hand.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(resource: ResourceType) -> Arc<CardData> {
        Arc::new(CardData::resource(resource.name(), resource))
    }

    fn player() -> GamePlayer {
        GamePlayer::new(PlayerId::FIRST, Deck::new("Empty"), &BattleConfig::default())
    }

    fn player_with_deck(cards: Vec<Arc<CardData>>) -> GamePlayer {
        let mut deck = Deck::new("Test");
        deck.create_with(cards);
        GamePlayer::new(PlayerId::SECOND, deck, &BattleConfig::default())
    }

    #[test]
    fn test_insufficient_reports_first_lacking_type() {
        let mut player = player();
        player.add_resource_card(token(ResourceType::Crew));

        let costs = ResourceCosts::free()
            .with(ResourceType::Crew, 2)
            .with(ResourceType::Fuel, 1);
        let err = player.have_sufficient_resources(&costs).unwrap_err();
        assert_eq!(err.to_string(), "Insufficient Crew");

        player.add_resource_card(token(ResourceType::Crew));
        let err = player.have_sufficient_resources(&costs).unwrap_err();
        assert_eq!(err, LayRejection::InsufficientResources(ResourceType::Fuel));
    }

    #[test]
    fn test_charge_then_refund_restores() {
        let mut player = player();
        for _ in 0..3 {
            player.add_resource_card(token(ResourceType::Sensors));
        }
        let costs = ResourceCosts::free().with(ResourceType::Sensors, 2);

        player.alter_resources(&costs, ChargeType::Charge);
        assert_eq!(player.used_resources(ResourceType::Sensors), 2);
        assert!(player.have_sufficient_resources(&costs).is_err());

        player.alter_resources(&costs, ChargeType::Refund);
        assert_eq!(player.used_resources(ResourceType::Sensors), 0);
    }

    #[test]
    fn test_charge_skips_used_tokens() {
        let mut player = player();
        for _ in 0..3 {
            player.add_resource_card(token(ResourceType::Crew));
        }

        player.alter_resource(ResourceType::Crew, 1, ChargeType::Charge);
        player.alter_resource(ResourceType::Crew, 1, ChargeType::Charge);
        assert_eq!(player.used_resources(ResourceType::Crew), 2);
    }

    #[test]
    #[should_panic(expected = "needs 2 tokens")]
    fn test_overcharge_panics() {
        let mut player = player();
        player.add_resource_card(token(ResourceType::Fuel));
        player.alter_resource(ResourceType::Fuel, 2, ChargeType::Charge);
    }

    #[test]
    fn test_new_turn_refreshes() {
        let mut player = player();
        player.add_resource_card(token(ResourceType::Crew));
        player.alter_resource(ResourceType::Crew, 1, ChargeType::Charge);
        assert_eq!(player.resource_cards_placed_this_turn(), 1);

        player.new_turn();

        assert_eq!(player.unused_resources(ResourceType::Crew), 1);
        assert_eq!(player.resource_cards_placed_this_turn(), 0);
        assert_eq!(player.drain_events(), vec![PlayerEvent::NewTurn]);
        assert!(player.drain_events().is_empty());
    }

    #[test]
    fn test_resource_limit() {
        let config = BattleConfig::default().with_resource_cards_per_turn(2);
        let mut player = GamePlayer::new(PlayerId::FIRST, Deck::new("Empty"), &config);

        player.add_resource_card(token(ResourceType::Crew));
        assert!(player.can_lay_resource());
        player.add_resource_card(token(ResourceType::Crew));
        assert!(!player.can_lay_resource());
    }

    #[test]
    fn test_ship_slots() {
        let config = BattleConfig::default().with_max_ship_number(1);
        let mut player = GamePlayer::new(PlayerId::FIRST, Deck::new("Empty"), &config);

        player.on_ship_placed();
        assert!(!player.can_place_ship());
        player.on_ship_destroyed();
        assert!(player.can_place_ship());
    }

    #[test]
    fn test_draw_and_station() {
        let mut player = player_with_deck(vec![
            token(ResourceType::Crew),
            Arc::new(CardData::station("Outpost", "Ships/Outpost")),
            Arc::new(CardData::ship("Eagle", "Ships/Eagle", Archetype::EagleFrigate)),
        ]);

        assert!(player.has_station());
        assert_eq!(player.take_station_data().display_name, "Outpost");
        assert!(!player.has_station());

        let eagle = player.draw_card_of_archetype(Archetype::EagleFrigate);
        assert_eq!(eagle.owner(), PlayerId::SECOND);

        assert_eq!(player.draw_card().unwrap().data().display_name, "Crew");
        assert!(player.draw_card().is_none());
        assert_eq!(player.hand().len(), 2);

        let events = player.drain_events();
        assert_eq!(
            events,
            vec![
                PlayerEvent::CardDrawn {
                    display_name: "Eagle".into()
                },
                PlayerEvent::CardDrawn {
                    display_name: "Crew".into()
                },
            ]
        );
    }

    #[test]
    #[should_panic(expected = "has no MissileBarrage card")]
    fn test_draw_missing_archetype_panics() {
        let mut player = player_with_deck(vec![token(ResourceType::Crew)]);
        player.draw_card_of_archetype(Archetype::MissileBarrage);
    }

    #[test]
    fn test_remove_from_hand() {
        let mut player = player_with_deck(vec![token(ResourceType::Crew), token(ResourceType::Fuel)]);
        player.draw_card();
        player.draw_card();

        let card = player.remove_from_hand(0);
        assert_eq!(card.data().display_name, "Crew");
        assert_eq!(player.hand().len(), 1);
    }
}
