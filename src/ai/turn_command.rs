//! The AI turn controller.
//!
//! An `AiTurnCommand` plays one turn for one seat. It is advanced with the
//! elapsed game time and spaces its actions out so a watching player can
//! follow them:
//!
//! ```text
//! PlacingCards --nothing left to lay--> Battling --nothing left to attack--> Finished
//!       \--------------------- no useful battle phase ---------------------/
//! ```
//!
//! Every state change resets all timers and progresses the battle's turn.

use log::debug;

use crate::battle::{Battle, LayTarget, TurnPhase};
use crate::cards::{AiCardWorth, CardType};
use crate::core::{AiConfig, PlayerId};

/// Where the command is in its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AiState {
    PlacingCards,
    Battling,
    Finished,
}

/// Plays a single turn for `player`.
#[derive(Clone, Debug)]
pub struct AiTurnCommand {
    player: PlayerId,
    config: AiConfig,
    state: AiState,
    time_since_card_lay: f32,
    time_since_attack: f32,
    time_until_turn_end: f32,
}

impl AiTurnCommand {
    #[must_use]
    pub fn new(player: PlayerId, config: AiConfig) -> Self {
        Self {
            player,
            config,
            state: AiState::PlacingCards,
            time_since_card_lay: 0.0,
            time_since_attack: 0.0,
            time_until_turn_end: 0.0,
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn state(&self) -> AiState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == AiState::Finished
    }

    /// Advance by `elapsed` seconds, acting on `battle` when timers allow.
    ///
    /// Finishes without acting if the battle is over or it is no longer
    /// this player's turn.
    pub fn update(&mut self, battle: &mut Battle, elapsed: f32) -> AiState {
        if self.is_finished() {
            return self.state;
        }
        if battle.is_over() || battle.active_player() != self.player {
            self.state = AiState::Finished;
            return self.state;
        }

        match battle.phase() {
            TurnPhase::PlaceCards => self.on_place_cards(battle, elapsed),
            TurnPhase::Battle => self.on_battle(battle, elapsed),
        }
        self.state
    }

    fn on_place_cards(&mut self, battle: &mut Battle, elapsed: f32) {
        self.time_since_card_lay += elapsed;

        let choice = Self::resource_to_lay(battle, self.player).or_else(|| Self::ship_to_lay(battle, self.player));
        match choice {
            Some(index) => {
                if self.time_since_card_lay >= self.config.time_between_card_lays {
                    self.lay_card(battle, index);
                }
            }
            None => {
                self.change_state(battle);
                if !battle.continue_battle_phase(self.player) {
                    self.change_state(battle);
                }
            }
        }
    }

    fn on_battle(&mut self, battle: &mut Battle, elapsed: f32) {
        self.time_since_attack += elapsed;

        if battle.continue_battle_phase(self.player) {
            if self.time_since_attack > self.config.time_between_attacks {
                self.attack_with_ready_ships(battle);
            }
        } else {
            self.time_until_turn_end += elapsed;
            if self.time_until_turn_end > self.config.time_until_turn_end {
                self.change_state(battle);
            }
        }
    }

    /// Index of the first resource card in hand that can be laid.
    fn resource_to_lay(battle: &Battle, player: PlayerId) -> Option<usize> {
        let state = battle.player(player);
        state
            .hand()
            .iter()
            .position(|card| card.data().card_type() == CardType::Resource && card.can_lay(state).is_ok())
    }

    /// Index of the best-rated ship card in hand that can be laid.
    ///
    /// Ties go to the card nearest the front of the hand.
    fn ship_to_lay(battle: &Battle, player: PlayerId) -> Option<usize> {
        let state = battle.player(player);
        if !state.can_place_ship() {
            return None;
        }

        let mine = battle.board().section(player);
        let theirs = battle.board().section(player.opponent());
        let mut best: Option<(usize, AiCardWorth)> = None;

        for (index, card) in state.hand().iter().enumerate() {
            if card.data().card_type() != CardType::Ship || card.can_lay(state).is_err() {
                continue;
            }
            let worth = card.calculate_ai_metric(mine, theirs);
            if worth == AiCardWorth::ShouldNotPlayAtAll {
                continue;
            }
            if best.map_or(true, |(_, best_worth)| worth > best_worth) {
                best = Some((index, worth));
            }
        }
        best.map(|(index, _)| index)
    }

    fn lay_card(&mut self, battle: &mut Battle, index: usize) {
        match battle.lay_card(self.player, index, LayTarget::Board) {
            Ok(laid) => debug!("AI {} laid {laid:?}", self.player),
            Err(reason) => debug!("AI {} could not lay card {index}: {reason}", self.player),
        }
        self.time_since_card_lay = 0.0;
    }

    /// Every ready ship with shots fires at the first living enemy ship.
    fn attack_with_ready_ships(&mut self, battle: &mut Battle) {
        let attackers = battle.board().section(self.player).ships_able_to_attack();

        for attacker in attackers {
            let Some(target) = battle.first_living_enemy_ship(self.player) else {
                break;
            };
            match battle.attack(self.player, attacker, target) {
                Ok(report) => debug!("AI {} attack: {report:?}", self.player),
                Err(reason) => debug!("AI {} attack refused: {reason}", self.player),
            }
            self.time_since_attack = 0.0;
            if battle.is_over() {
                break;
            }
        }
    }

    fn change_state(&mut self, battle: &mut Battle) {
        self.time_since_card_lay = 0.0;
        self.time_since_attack = 0.0;
        self.time_until_turn_end = 0.0;

        self.state = match battle.phase() {
            TurnPhase::PlaceCards => AiState::Battling,
            TurnPhase::Battle => AiState::Finished,
        };
        debug!("AI {} -> {:?}", self.player, self.state);
        battle.progress_turn();
    }
}
