//! Card system: data records, registry, decks and behaviour.
//!
//! ## Key Types
//!
//! - `CardData`: immutable card record, shared as `Arc<CardData>`
//! - `ShipData` / `WeaponData`: combat stats referenced by ship and weapon cards
//! - `ContentRegistry`: asset-keyed lookup of every record
//! - `Deck`: ordered draw pile
//! - `Archetype` / `CardBehaviour`: per-card-type rules
//! - `GameCard`: a card owned by a player

pub mod behaviour;
pub mod card;
pub mod deck;
pub mod definition;
pub mod registry;
pub mod resources;

pub use behaviour::{AbilityEffect, AiCardWorth, Archetype, CardBehaviour, LayRejection};
pub use card::GameCard;
pub use deck::Deck;
pub use definition::{CardData, CardKind, CardType, Rarity, ShipData, WeaponData};
pub use registry::{ContentData, ContentError, ContentRegistry, DEFAULT_WEAPON_CARD_ASSET};
pub use resources::{ChargeType, ResourceCosts, ResourceType};
