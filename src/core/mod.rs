//! Core types: seats, pair identifiers, RNG, configuration.
//!
//! Everything here is independent of card rules and is shared by the
//! board, player and battle modules.

pub mod config;
pub mod entity;
pub mod player;
pub mod rng;

pub use config::{AiConfig, BattleConfig};
pub use entity::{PairId, PairIdAllocator};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
