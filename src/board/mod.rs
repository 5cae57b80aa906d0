//! The battlefield.
//!
//! - `CardObjectPair`: a laid card bound to its battlefield object
//! - `CardShipPair`: a ship with its mounted weapon
//! - `BoardSection`: one player's ships
//! - `Board`: both sections

pub mod pair;
pub mod section;
pub mod ship_pair;

pub use pair::{CardObjectPair, Representation};
pub use section::{Board, BoardSection, ShipIds};
pub use ship_pair::{CardShipPair, CardWeaponPair, MountOnShip};
