//! Computer-controlled seats.

pub mod turn_command;

pub use turn_command::{AiState, AiTurnCommand};
