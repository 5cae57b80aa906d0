//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use space_card_game::cards::DEFAULT_WEAPON_CARD_ASSET;
use space_card_game::{
    Archetype, Battle, BattleConfig, CardData, ContentRegistry, Deck, LaidCard, LayTarget, PairId,
    PlayerId, PlayerMap, ResourceCosts, ResourceType, ShipData, TurnPhase, WeaponData,
};

/// A small registry with hand-picked stats.
///
/// - Cutter: attack 1, defence 2, speed 2, costs 1 Crew
/// - Brick: attack 1, defence 3, speed 1, costs 1 Crew
/// - Eagle Frigate: attack 2, defence 3, speed 3, costs 2 Crew
/// - Outpost: attack 1, defence 3, speed 0
pub fn registry() -> Arc<ContentRegistry> {
    let mut registry = ContentRegistry::new();
    registry.register_ship("Ships/Cutter", ShipData::new(1, 2, 2));
    registry.register_ship("Ships/Brick", ShipData::new(1, 3, 1));
    registry.register_ship("Ships/Eagle", ShipData::new(2, 3, 3));
    registry.register_ship("Ships/Outpost", ShipData::new(1, 3, 0));
    registry.register_weapon("Weapons/Default", WeaponData::new(0, 1));
    registry.register_weapon("Weapons/Kinetic", WeaponData::new(1, 2));

    let crew = |n| ResourceCosts::free().with(ResourceType::Crew, n);
    registry.register_card(
        DEFAULT_WEAPON_CARD_ASSET,
        CardData::weapon("Default Turret", "Weapons/Default", Archetype::DefaultTurret),
    );
    registry.register_card("Cards/Crew", CardData::resource("Crew", ResourceType::Crew));
    registry.register_card("Cards/Fuel", CardData::resource("Fuel", ResourceType::Fuel));
    registry.register_card(
        "Cards/Cutter",
        CardData::ship("Cutter", "Ships/Cutter", Archetype::Ship).with_costs(crew(1)),
    );
    registry.register_card(
        "Cards/Brick",
        CardData::ship("Brick", "Ships/Brick", Archetype::Ship).with_costs(crew(1)),
    );
    registry.register_card(
        "Cards/Eagle",
        CardData::ship("Eagle Frigate", "Ships/Eagle", Archetype::EagleFrigate).with_costs(crew(2)),
    );
    registry.register_card("Cards/Outpost", CardData::station("Outpost", "Ships/Outpost"));
    registry.register_card(
        "Cards/Kinetic",
        CardData::weapon("Kinetic Turret", "Weapons/Kinetic", Archetype::KineticTurret),
    );
    registry.register_card(
        "Cards/Barrage",
        CardData::ability("Missile Barrage", Archetype::MissileBarrage),
    );
    Arc::new(registry)
}

pub fn deck(registry: &ContentRegistry, keys: &[&str]) -> Deck {
    let mut deck = Deck::new("Test");
    deck.create_from_keys(registry, keys).unwrap();
    deck
}

/// A begun battle with unshuffled decks and every card in hand.
pub fn battle(first: &[&str], second: &[&str]) -> Battle {
    battle_with(BattleConfig::default(), first, second)
}

/// Like `battle`, on top of `config`.
pub fn battle_with(config: BattleConfig, first: &[&str], second: &[&str]) -> Battle {
    let registry = registry();
    let decks = PlayerMap::from_pair(deck(&registry, first), deck(&registry, second));
    let config = config
        .with_shuffle_decks(false)
        .with_starting_hand_size(first.len().max(second.len()));
    let mut battle = Battle::new(registry, config, decks).unwrap();
    battle.begin();
    battle
}

/// A core set battle between two starter decks.
pub fn starter_battle(seed: u64) -> Battle {
    let registry = Arc::new(ContentRegistry::core_set().unwrap());
    let decks = PlayerMap::new(|_| {
        let mut deck = Deck::new("Starter");
        deck.create_from_keys(&registry, registry.deck_list("Starter").unwrap())
            .unwrap();
        deck
    });
    let config = BattleConfig::default().with_seed(seed);
    Battle::new(registry, config, decks).unwrap()
}

pub fn hand_index(battle: &Battle, player: PlayerId, name: &str) -> usize {
    battle
        .player(player)
        .hand()
        .iter()
        .position(|card| card.data().display_name == name)
        .unwrap_or_else(|| panic!("{player} holds no {name}"))
}

pub fn lay(battle: &mut Battle, player: PlayerId, name: &str) -> LaidCard {
    let index = hand_index(battle, player, name);
    battle.lay_card(player, index, LayTarget::Board).unwrap()
}

pub fn lay_ship(battle: &mut Battle, player: PlayerId, name: &str) -> PairId {
    match lay(battle, player, name) {
        LaidCard::Ship(id) => id,
        other => panic!("expected a ship, got {other:?}"),
    }
}

/// Progress through whatever is left of the active player's turn.
pub fn end_turn(battle: &mut Battle) {
    while battle.phase() != TurnPhase::Battle {
        battle.progress_turn();
    }
    battle.progress_turn();
}
