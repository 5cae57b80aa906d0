//! Battlefield combat entities.
//!
//! - `DamageableObjectModule`: health counter with a terminal dead flag
//! - `Turret`: damage and a per-turn firing window
//! - `Ship`: a hull owning its damage module
//! - `ShipView`: stat snapshot handed to card behaviours

pub mod damage;
pub mod ship;
pub mod turret;

pub use damage::DamageableObjectModule;
pub use ship::{Ship, ShipView};
pub use turret::Turret;
