//! # space-card-game
//!
//! Turn, resource and combat rules for a two-player space card battler.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: content lives in a `ContentRegistry` that is
//!    built once and handed to each battle. There are no globals.
//!
//! 2. **One Entry Point**: every rules action goes through `Battle`, which
//!    validates it, applies it and logs a `BattleEvent`.
//!
//! 3. **Two Kinds of Failure**: broken invariants panic; expected refusals
//!    ("Insufficient Crew", "Not your turn") come back as `Err` values whose
//!    `Display` is the player-facing reason.
//!
//! ## Modules
//!
//! - `core`: seats, pair IDs, RNG, configuration
//! - `cards`: card records, registry, decks and per-archetype behaviour
//! - `combat`: health, turrets and ship hulls
//! - `board`: card/object pairs and board sections
//! - `players`: hands, resource pools and ship counts
//! - `battle`: the turn-phase machine and the session scheduler
//! - `ai`: the AI turn controller
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use space_card_game::{
//!     AiConfig, Battle, BattleConfig, BattleSession, ContentRegistry, Controller, Deck, PlayerMap,
//! };
//!
//! let registry = Arc::new(ContentRegistry::core_set().unwrap());
//! let decks = PlayerMap::new(|_| {
//!     let mut deck = Deck::new("Starter");
//!     deck.create_from_keys(&registry, registry.deck_list("Starter").unwrap())
//!         .unwrap();
//!     deck
//! });
//!
//! let battle = Battle::new(Arc::clone(&registry), BattleConfig::default(), decks).unwrap();
//! let mut session = BattleSession::new(
//!     battle,
//!     PlayerMap::from_pair(Controller::Ai(AiConfig::instant()), Controller::Ai(AiConfig::instant())),
//! );
//!
//! session.run(0.1, 200);
//! assert!(session.battle().turn() > 1);
//! ```

pub mod ai;
pub mod battle;
pub mod board;
pub mod cards;
pub mod combat;
pub mod core;
pub mod players;

// Re-export commonly used types
pub use crate::core::{AiConfig, BattleConfig, GameRng, PairId, PlayerId, PlayerMap};

pub use crate::cards::{
    AbilityEffect, AiCardWorth, Archetype, CardBehaviour, CardData, CardKind, CardType, ChargeType,
    ContentError, ContentRegistry, Deck, GameCard, LayRejection, Rarity, ResourceCosts, ResourceType,
    ShipData, WeaponData,
};

pub use crate::combat::{DamageableObjectModule, Ship, ShipView, Turret};

pub use crate::board::{
    Board, BoardSection, CardObjectPair, CardShipPair, CardWeaponPair, MountOnShip, Representation,
};

pub use crate::players::{GamePlayer, PlayerEvent, ResourceCard};

pub use crate::battle::{
    AttackRejection, AttackReport, Battle, BattleEvent, BattleOutcome, BattleSession, Controller,
    LaidCard, LayTarget, TurnPhase,
};

pub use crate::ai::{AiState, AiTurnCommand};
