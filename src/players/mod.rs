//! Players: hand, draw pile, resource pools and ship count.

pub mod game_player;

pub use game_player::{GamePlayer, PlayerEvent, ResourceCard};
