//! The battle orchestrator.
//!
//! `Battle` owns everything a battle needs and is the only place rules
//! actions enter: `lay_card`, `attack` and `progress_turn`. Each action
//! validates, mutates and appends to the event log in one call, so the
//! state is consistent between any two calls.
//!
//! ## Turn structure
//!
//! ```text
//! PlaceCards --progress_turn--> Battle --progress_turn--> PlaceCards (opponent)
//! ```
//!
//! At every turn start all pairs on both sides are made ready for card
//! placement, which also refreshes their turrets. Entering the battle phase
//! switches every pair to its object.

use std::sync::Arc;

use log::{debug, info, warn};

use super::events::{
    AttackRejection, AttackReport, BattleEvent, BattleOutcome, LaidCard, LayTarget, TurnPhase,
};
use crate::board::{Board, CardObjectPair, CardShipPair, CardWeaponPair, MountOnShip};
use crate::cards::{
    AbilityEffect, CardData, CardKind, ChargeType, ContentError, ContentRegistry, Deck, GameCard,
    LayRejection, ShipData, WeaponData,
};
use crate::combat::{Ship, Turret};
use crate::core::{BattleConfig, GameRng, PairId, PairIdAllocator, PlayerId, PlayerMap};
use crate::players::{GamePlayer, PlayerEvent};

/// A two-player battle.
#[derive(Clone, Debug)]
pub struct Battle {
    registry: Arc<ContentRegistry>,
    config: BattleConfig,
    default_weapon: Arc<CardData>,
    default_weapon_data: Arc<WeaponData>,
    players: PlayerMap<GamePlayer>,
    board: Board,
    active: PlayerId,
    phase: TurnPhase,
    turn: u32,
    started: bool,
    ids: PairIdAllocator,
    rng: GameRng,
    events: Vec<BattleEvent>,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    /// Set up a battle between two decks.
    ///
    /// The registry is validated so that every card laid later resolves.
    pub fn new(
        registry: Arc<ContentRegistry>,
        config: BattleConfig,
        mut decks: PlayerMap<Deck>,
    ) -> Result<Self, ContentError> {
        registry.validate()?;
        let default_weapon = registry.default_weapon_card()?;
        let default_weapon_data = default_weapon
            .kind
            .weapon_data_asset()
            .ok_or(ContentError::MissingDefaultTurret)
            .and_then(|key| registry.require::<WeaponData>(key))?;

        let players = PlayerMap::new(|player| {
            GamePlayer::new(player, std::mem::take(decks.get_mut(player)), &config)
        });

        Ok(Self {
            rng: GameRng::new(config.seed),
            registry,
            config,
            default_weapon,
            default_weapon_data,
            players,
            board: Board::new(),
            active: PlayerId::FIRST,
            phase: TurnPhase::PlaceCards,
            turn: 0,
            started: false,
            ids: PairIdAllocator::new(),
            events: Vec::new(),
            outcome: None,
        })
    }

    /// Shuffle, place stations, draw opening hands and start the first turn.
    ///
    /// Panics if called twice.
    pub fn begin(&mut self) {
        assert!(!self.started, "Battle already begun");
        self.started = true;

        for player in PlayerId::both() {
            if self.config.shuffle_decks {
                let mut rng = self.rng.for_context(&format!("deck-{}", player.index()));
                self.players[player].deck_mut().shuffle(&mut rng);
            }

            if self.players[player].has_station() {
                let station = GameCard::new(self.players[player].take_station_data(), player);
                let name = station.data().display_name.clone();
                let pair = self.place_ship(station);
                self.events.push(BattleEvent::CardLaid {
                    player,
                    card: name,
                    pair: Some(pair),
                });
            } else {
                warn!("{player} begins without a station");
            }

            for _ in 0..self.config.starting_hand_size {
                self.players[player].draw_card();
            }
        }
        self.collect_player_events();

        self.active = PlayerId::FIRST;
        self.phase = TurnPhase::PlaceCards;
        self.turn = 1;
        self.start_turn(false);
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<ContentRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &GamePlayer {
        &self.players[player]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Turn number, starting at 1 once the battle has begun.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn has_begun(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Events not yet drained.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Take every event logged since the last drain.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Lay the card at `hand_index` from `player`'s hand.
    ///
    /// Weapons need a `LayTarget::Ship` naming one of the player's living
    /// ships; every other card is laid on the board. Laying a ship card on
    /// a ship panics.
    pub fn lay_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        target: LayTarget,
    ) -> Result<LaidCard, LayRejection> {
        if self.is_over() {
            return Err(LayRejection::BattleOver);
        }
        if player != self.active {
            return Err(LayRejection::NotYourTurn);
        }
        if self.phase != TurnPhase::PlaceCards {
            return Err(LayRejection::WrongPhase);
        }

        let card = self.players[player]
            .hand()
            .get(hand_index)
            .cloned()
            .ok_or(LayRejection::NotInHand(hand_index))?;
        card.can_lay(&self.players[player])?;
        self.check_lay_target(player, &card, target)?;

        let card = self.players[player].remove_from_hand(hand_index);
        self.players[player].alter_resources(&card.data().resource_costs, ChargeType::Charge);
        let name = card.data().display_name.clone();
        debug!("{player} lays {name}");

        let kind = card.data().kind.clone();
        let laid = match kind {
            CardKind::Resource { resource } => {
                self.players[player].add_resource_card(Arc::clone(card.data_arc()));
                LaidCard::Resource(resource)
            }
            CardKind::Ship { .. } => LaidCard::Ship(self.place_ship(card)),
            CardKind::Weapon { weapon_data } => {
                let LayTarget::Ship(ship) = target else {
                    unreachable!("weapon targets are checked before laying");
                };
                let weapon = self.mount_weapon(card, &weapon_data, ship);
                LaidCard::Weapon { ship, weapon }
            }
            CardKind::Ability => {
                let effect = card.behaviour().on_lay();
                let (ships_hit, destroyed) = match effect {
                    Some(effect) => self.resolve_ability(player, effect),
                    None => (0, Vec::new()),
                };
                self.events.push(BattleEvent::AbilityResolved {
                    player,
                    card: name.clone(),
                    ships_hit,
                });
                LaidCard::Ability { ships_hit, destroyed }
            }
            CardKind::Station { .. } => panic!("Stations are placed when the battle begins"),
        };

        let pair = match &laid {
            LaidCard::Ship(id) => Some(*id),
            LaidCard::Weapon { weapon, .. } => Some(*weapon),
            LaidCard::Resource(_) | LaidCard::Ability { .. } => None,
        };
        self.events.push(BattleEvent::CardLaid {
            player,
            card: name,
            pair,
        });
        Ok(laid)
    }

    /// Fire one shot from `attacker` at `target`.
    pub fn attack(
        &mut self,
        player: PlayerId,
        attacker: PairId,
        target: PairId,
    ) -> Result<AttackReport, AttackRejection> {
        if self.is_over() {
            return Err(AttackRejection::BattleOver);
        }
        if player != self.active {
            return Err(AttackRejection::NotYourTurn);
        }
        if self.phase != TurnPhase::Battle {
            return Err(AttackRejection::WrongPhase);
        }

        let opponent = player.opponent();
        let attacking = self
            .board
            .section(player)
            .get(attacker)
            .ok_or(AttackRejection::NotYourShip(attacker))?;
        if !attacking.is_ready() {
            return Err(AttackRejection::NotReady(attacker));
        }
        if !attacking.turret().can_fire() {
            return Err(AttackRejection::NoShotsLeft(attacker));
        }
        let defending = self
            .board
            .section(opponent)
            .get(target)
            .filter(|ship| !ship.is_dead())
            .ok_or(AttackRejection::InvalidTarget(target))?;

        let attacker_view = attacking.view();
        let raw_damage = attacking.calculate_attack(Some(&defending.view()));

        let (mine, theirs) = self.board.split_mut(player);
        mine.get_mut(attacker)
            .expect("attacker was found above")
            .turret_mut()
            .fire();
        let defending = theirs.get_mut(target).expect("target was found above");
        let damage = defending.take_damage(Some(&attacker_view), raw_damage);
        let target_destroyed = defending.is_dead();

        let report = AttackReport {
            attacker,
            target,
            damage,
            target_destroyed,
        };
        debug!("{attacker} hits {target} for {damage}");
        self.events.push(BattleEvent::AttackResolved(report));

        if target_destroyed {
            self.resolve_deaths(opponent);
        }
        Ok(report)
    }

    /// Advance to the next phase, returning it.
    ///
    /// Does nothing once the battle is over. Panics before `begin`.
    pub fn progress_turn(&mut self) -> TurnPhase {
        assert!(self.started, "Battle has not begun");
        if self.is_over() {
            debug!("Ignoring turn progression after the battle ended");
            return self.phase;
        }

        match self.phase {
            TurnPhase::PlaceCards => {
                self.phase = TurnPhase::Battle;
                for (_, section) in self.board.iter_mut() {
                    section.make_ready_for_battle();
                }
                info!("{} enters the battle phase", self.active);
                self.events.push(BattleEvent::PhaseChanged {
                    player: self.active,
                    phase: TurnPhase::Battle,
                });
            }
            TurnPhase::Battle => {
                let ending = self.active;
                self.board.section_mut(ending).on_turn_end();

                self.active = ending.opponent();
                self.turn += 1;
                self.phase = TurnPhase::PlaceCards;
                self.events.push(BattleEvent::PhaseChanged {
                    player: self.active,
                    phase: TurnPhase::PlaceCards,
                });
                self.start_turn(true);
            }
        }
        self.phase
    }

    /// Whether `player` has anything left to do in its battle phase.
    ///
    /// False when either side has no ships, or when none of `player`'s
    /// ships is ready with shots left.
    #[must_use]
    pub fn continue_battle_phase(&self, player: PlayerId) -> bool {
        if self.players[player].ships_placed() == 0 || self.players[player.opponent()].ships_placed() == 0 {
            return false;
        }

        let section = self.board.section(player);
        if !section.any_ready() {
            return false;
        }
        !section.ships_able_to_attack().is_empty()
    }

    /// The earliest laid living ship of `player`'s opponent.
    #[must_use]
    pub fn first_living_enemy_ship(&self, player: PlayerId) -> Option<PairId> {
        self.board
            .section(player.opponent())
            .first_living_ship()
            .map(CardShipPair::id)
    }

    fn start_turn(&mut self, draw: bool) {
        let player = self.active;
        self.players[player].new_turn();
        if draw {
            for _ in 0..self.config.cards_drawn_per_turn {
                self.players[player].draw_card();
            }
        }
        for (_, section) in self.board.iter_mut() {
            section.make_ready_for_card_placement();
        }

        info!("Turn {} begins for {player}", self.turn);
        self.events.push(BattleEvent::TurnBegan {
            player,
            turn: self.turn,
        });
        self.collect_player_events();
    }

    fn check_lay_target(&self, player: PlayerId, card: &GameCard, target: LayTarget) -> Result<(), LayRejection> {
        match (&card.data().kind, target) {
            (CardKind::Weapon { .. }, LayTarget::Ship(ship)) => {
                match self.board.section(player).get(ship) {
                    Some(host) if !host.is_dead() => Ok(()),
                    _ => Err(LayRejection::NoValidTarget),
                }
            }
            (CardKind::Weapon { .. }, LayTarget::Board) => Err(LayRejection::NoValidTarget),
            (CardKind::Ship { .. }, LayTarget::Ship(_)) => panic!("Cannot add ships to other ships"),
            (_, LayTarget::Ship(_)) => Err(LayRejection::NoValidTarget),
            (_, LayTarget::Board) => Ok(()),
        }
    }

    fn place_ship(&mut self, card: GameCard) -> PairId {
        let owner = card.owner();
        let data = {
            let key = card
                .data()
                .kind
                .ship_data_asset()
                .unwrap_or_else(|| panic!("'{}' has no hull", card.data().display_name));
            self.registry
                .get_data::<ShipData>(key)
                .unwrap_or_else(|| panic!("Ship asset '{key}' missing from validated content"))
        };

        let id = self.ids.alloc();
        let weapon = self.default_weapon_pair(owner);
        let pair = CardShipPair::new(id, card, Ship::new(data), weapon);

        self.players[owner].on_ship_placed();
        self.board.section_mut(owner).add_ship(pair);
        debug!("{owner} placed {id}");
        id
    }

    fn default_weapon_pair(&mut self, owner: PlayerId) -> CardWeaponPair {
        let card = GameCard::new(Arc::clone(&self.default_weapon), owner);
        CardObjectPair::new(self.ids.alloc(), card, Turret::new(&self.default_weapon_data, true))
    }

    fn mount_weapon(&mut self, card: GameCard, weapon_data: &str, ship: PairId) -> PairId {
        let owner = card.owner();
        let data = self
            .registry
            .get_data::<WeaponData>(weapon_data)
            .unwrap_or_else(|| panic!("Weapon asset '{weapon_data}' missing from validated content"));

        let id = self.ids.alloc();
        let weapon = CardObjectPair::new(id, card, Turret::new(&data, false));
        let host = self
            .board
            .section_mut(owner)
            .get_mut(ship)
            .expect("weapon targets are checked before laying");
        if let Some(displaced) = weapon.add_to_card_ship_pair(host) {
            debug!("{} replaced on {ship}", displaced.card());
        }
        id
    }

    fn resolve_ability(&mut self, player: PlayerId, effect: AbilityEffect) -> (usize, Vec<PairId>) {
        let opponent = player.opponent();
        let mut ships_hit = 0;

        match effect {
            AbilityEffect::DamageOpponentShips { damage, .. } => {
                for ship in self.board.section_mut(opponent).iter_mut() {
                    if effect.affects(ship.ship().data()) {
                        ship.take_damage(None, damage);
                        ships_hit += 1;
                    }
                }
            }
        }

        debug!("{player}'s ability hit {ships_hit} ships");
        let destroyed = self.resolve_deaths(opponent);
        (ships_hit, destroyed)
    }

    /// Remove `owner`'s destroyed ships and settle the battle if its
    /// station fell.
    fn resolve_deaths(&mut self, owner: PlayerId) -> Vec<PairId> {
        let dead = self.board.section_mut(owner).remove_dead();
        let mut destroyed = Vec::with_capacity(dead.len());

        for pair in dead {
            self.players[owner].on_ship_destroyed();
            info!("{} destroyed", pair.card());
            self.events.push(BattleEvent::ShipDestroyed {
                owner,
                pair: pair.id(),
            });
            destroyed.push(pair.id());

            if pair.is_station() && self.outcome.is_none() {
                let winner = owner.opponent();
                info!("{winner} wins on turn {}", self.turn);
                self.outcome = Some(BattleOutcome {
                    winner,
                    turn: self.turn,
                });
                self.events.push(BattleEvent::BattleWon { winner });
            }
        }
        destroyed
    }

    fn collect_player_events(&mut self) {
        for (player, state) in self.players.iter_mut() {
            for event in state.drain_events() {
                match event {
                    PlayerEvent::CardDrawn { display_name } => self.events.push(BattleEvent::CardDrawn {
                        player,
                        card: display_name,
                    }),
                    PlayerEvent::NewTurn => {}
                }
            }
        }
    }
}
