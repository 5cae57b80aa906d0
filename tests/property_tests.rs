//! Property-based tests for resource payment, damage and pair state.

use std::sync::Arc;

use proptest::prelude::*;

use space_card_game::{
    BattleConfig, CardData, CardObjectPair, ChargeType, DamageableObjectModule, Deck, GameCard,
    GamePlayer, LayRejection, PairId, PlayerId, Representation, ResourceCosts, ResourceType,
};

fn player_with_tokens(tokens: [u32; ResourceType::COUNT]) -> GamePlayer {
    let mut player = GamePlayer::new(PlayerId::FIRST, Deck::new("Empty"), &BattleConfig::default());
    for resource in ResourceType::ALL {
        let data = Arc::new(CardData::resource(resource.name(), resource));
        for _ in 0..tokens[resource.index()] {
            player.add_resource_card(Arc::clone(&data));
        }
    }
    player
}

#[derive(Clone, Copy, Debug)]
enum PairStep {
    CardPlacement,
    Battle,
    TurnEnd,
}

fn pair_step() -> impl Strategy<Value = PairStep> {
    prop_oneof![
        Just(PairStep::CardPlacement),
        Just(PairStep::Battle),
        Just(PairStep::TurnEnd),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Payment succeeds exactly when every type has enough unused tokens,
    /// and otherwise names the first type that falls short.
    #[test]
    fn prop_sufficiency_matches_token_counts(
        tokens in prop::array::uniform4(0u32..5),
        costs in prop::array::uniform4(0u32..5),
    ) {
        let player = player_with_tokens(tokens);
        let result = player.have_sufficient_resources(&ResourceCosts::new(costs));

        let short = ResourceType::ALL
            .into_iter()
            .find(|r| tokens[r.index()] < costs[r.index()]);
        match short {
            None => prop_assert_eq!(result, Ok(())),
            Some(resource) => prop_assert_eq!(result, Err(LayRejection::InsufficientResources(resource))),
        }
    }

    /// Charging then refunding the same costs restores every count.
    #[test]
    fn prop_charge_then_refund_restores(
        tokens in prop::array::uniform4(0u32..6),
        fraction in prop::array::uniform4(0.0f64..=1.0),
    ) {
        let costs: [u32; ResourceType::COUNT] =
            std::array::from_fn(|i| (f64::from(tokens[i]) * fraction[i]).floor() as u32);
        let costs = ResourceCosts::new(costs);
        let mut player = player_with_tokens(tokens);

        player.alter_resources(&costs, ChargeType::Charge);
        for resource in ResourceType::ALL {
            prop_assert_eq!(player.used_resources(resource) as u32, costs[resource]);
            prop_assert_eq!(
                player.unused_resources(resource) as u32,
                tokens[resource.index()] - costs[resource]
            );
        }

        player.alter_resources(&costs, ChargeType::Refund);
        for resource in ResourceType::ALL {
            prop_assert_eq!(player.used_resources(resource), 0);
            prop_assert_eq!(player.unused_resources(resource) as u32, tokens[resource.index()]);
        }
    }

    /// Health after `hits` hits of `damage` is the clamped difference,
    /// and the module is dead exactly when health reaches zero.
    #[test]
    fn prop_damage_accumulates_and_clamps(
        defence in 1i32..20,
        damage in 0i32..6,
        hits in 0usize..30,
    ) {
        let mut module = DamageableObjectModule::new(defence);
        for _ in 0..hits {
            module.apply_damage(damage);
        }

        let expected = (defence - damage * hits as i32).max(0);
        prop_assert_eq!(module.health(), expected);
        prop_assert_eq!(module.dead(), expected == 0);
    }

    /// A pair always shows exactly one representation, and once ready it
    /// stays ready.
    #[test]
    fn prop_pair_shows_one_side(steps in prop::collection::vec(pair_step(), 0..40)) {
        let card = GameCard::new(
            Arc::new(CardData::resource("Fuel", ResourceType::Fuel)),
            PlayerId::SECOND,
        );
        let mut pair = CardObjectPair::new(PairId(0), card, ());
        let mut was_ready = false;

        for step in steps {
            match step {
                PairStep::CardPlacement => pair.make_ready_for_card_placement(),
                PairStep::Battle => pair.make_ready_for_battle(),
                PairStep::TurnEnd => pair.on_turn_end(),
            }

            prop_assert_ne!(pair.is_card_visible(), pair.is_object_visible());
            match step {
                PairStep::CardPlacement => prop_assert_eq!(pair.visible(), Representation::Card),
                PairStep::Battle => prop_assert_eq!(pair.visible(), Representation::Object),
                PairStep::TurnEnd => {}
            }
            prop_assert!(pair.is_ready() || !was_ready);
            was_ready = pair.is_ready();
        }
    }
}
