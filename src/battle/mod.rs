//! Battle orchestration.
//!
//! - `Battle`: the rules state and the only entry point for actions
//! - `BattleSession`: a battle driven by per-seat controllers
//! - events: phases, lay and attack results, rejections and the event log

pub mod events;
pub mod session;
pub mod state;

pub use events::{
    AttackRejection, AttackReport, BattleEvent, BattleOutcome, LaidCard, LayTarget, TurnPhase,
};
pub use session::{BattleSession, Controller};
pub use state::Battle;
