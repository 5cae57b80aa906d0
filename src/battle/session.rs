//! Running a battle against the clock.
//!
//! `BattleSession` pairs a `Battle` with one `Controller` per seat. Human
//! seats act through `battle_mut`; AI seats are driven by `tick`, which
//! creates an `AiTurnCommand` when an AI seat's turn starts and drops it
//! once it reports `Finished`.

use log::{debug, info};

use super::state::Battle;
use crate::ai::AiTurnCommand;
use crate::core::{AiConfig, PlayerId, PlayerMap};

/// Who drives a seat.
#[derive(Clone, Debug, PartialEq)]
pub enum Controller {
    /// Actions arrive through `BattleSession::battle_mut`.
    Human,
    /// An AI turn command paced by the given config.
    Ai(AiConfig),
}

/// A battle plus the controllers driving it.
#[derive(Clone, Debug)]
pub struct BattleSession {
    battle: Battle,
    controllers: PlayerMap<Controller>,
    command: Option<AiTurnCommand>,
}

impl BattleSession {
    /// Wrap a battle. Begins it if it has not begun yet.
    #[must_use]
    pub fn new(mut battle: Battle, controllers: PlayerMap<Controller>) -> Self {
        if !battle.has_begun() {
            battle.begin();
        }
        Self {
            battle,
            controllers,
            command: None,
        }
    }

    #[must_use]
    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Input boundary for human seats.
    pub fn battle_mut(&mut self) -> &mut Battle {
        &mut self.battle
    }

    #[must_use]
    pub fn controller(&self, player: PlayerId) -> &Controller {
        &self.controllers[player]
    }

    /// The running AI command, if an AI seat is mid-turn.
    #[must_use]
    pub fn active_command(&self) -> Option<&AiTurnCommand> {
        self.command.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.battle.is_over()
    }

    /// Advance AI seats by `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f32) {
        if self.battle.is_over() {
            if self.command.take().is_some() {
                info!("Battle over, AI command dropped");
            }
            return;
        }

        if self.command.is_none() {
            let active = self.battle.active_player();
            if let Controller::Ai(config) = &self.controllers[active] {
                debug!("Starting AI turn for {active}");
                self.command = Some(AiTurnCommand::new(active, config.clone()));
            }
        }

        if let Some(command) = self.command.as_mut() {
            command.update(&mut self.battle, elapsed);
            if command.is_finished() {
                debug!("AI turn for {} finished", command.player());
                self.command = None;
            }
        }
    }

    /// Tick until the battle ends or `max_ticks` have passed.
    ///
    /// Returns the number of ticks run. Stops early if a human seat is
    /// waiting for input.
    pub fn run(&mut self, elapsed: f32, max_ticks: usize) -> usize {
        for ticks in 0..max_ticks {
            if self.is_over() {
                return ticks;
            }
            if self.controllers[self.battle.active_player()] == Controller::Human {
                return ticks;
            }
            self.tick(elapsed);
        }
        max_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ContentRegistry;
    use crate::cards::Deck;
    use crate::core::BattleConfig;
    use std::sync::Arc;

    fn session(controllers: PlayerMap<Controller>) -> BattleSession {
        let registry = Arc::new(ContentRegistry::core_set().unwrap());
        let decks = PlayerMap::new(|_| {
            let mut deck = Deck::new("Starter");
            deck.create_from_keys(&registry, registry.deck_list("Starter").unwrap())
                .unwrap();
            deck
        });
        let battle = Battle::new(Arc::clone(&registry), BattleConfig::default(), decks).unwrap();
        BattleSession::new(battle, controllers)
    }

    #[test]
    fn test_new_begins_battle() {
        let session = session(PlayerMap::from_pair(Controller::Human, Controller::Human));
        assert!(session.battle().has_begun());
        assert_eq!(session.battle().turn(), 1);
    }

    #[test]
    fn test_human_seats_are_not_ticked() {
        let mut session = session(PlayerMap::from_pair(Controller::Human, Controller::Ai(AiConfig::instant())));

        session.tick(1.0);
        assert!(session.active_command().is_none());
        assert_eq!(session.run(1.0, 10), 0);
        assert_eq!(session.battle().active_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_ai_turn_hands_back_to_human() {
        let mut session = session(PlayerMap::from_pair(Controller::Ai(AiConfig::instant()), Controller::Human));

        session.tick(0.1);
        assert!(session.active_command().is_some() || session.battle().active_player() == PlayerId::SECOND);

        session.run(0.1, 1_000);
        assert_eq!(session.battle().active_player(), PlayerId::SECOND);
        assert!(session.active_command().is_none());
    }
}
