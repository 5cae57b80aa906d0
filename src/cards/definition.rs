//! Static content records.
//!
//! `CardData` holds the immutable properties of a card. Ships and weapons
//! keep their combat stats in separate `ShipData` / `WeaponData` records
//! that the card references by asset key, so several cards can share one
//! hull or one weapon profile.
//!
//! None of these records change after loading. Runtime state (health,
//! shots left, used resources) lives in the combat and player modules.

use serde::{Deserialize, Serialize};

use super::behaviour::Archetype;
use super::resources::{ResourceCosts, ResourceType};

/// Coarse category of a card, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Resource,
    Ship,
    Station,
    Weapon,
    Ability,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Resource => "Resource",
            CardType::Ship => "Ship",
            CardType::Station => "Station",
            CardType::Weapon => "Weapon",
            CardType::Ability => "Ability",
        };
        f.write_str(name)
    }
}

/// What a card becomes when it is laid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardKind {
    /// Adds one token to the named resource pool.
    Resource { resource: ResourceType },
    /// A ship hull, stats under `ship_data`.
    Ship { ship_data: String },
    /// The player's station. Placed at battle start, never laid from hand.
    Station { ship_data: String },
    /// A turret mounted onto one of the player's ships.
    Weapon { weapon_data: String },
    /// A one-shot effect resolved on lay.
    Ability,
}

impl CardKind {
    /// The payload-free category.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self {
            CardKind::Resource { .. } => CardType::Resource,
            CardKind::Ship { .. } => CardType::Ship,
            CardKind::Station { .. } => CardType::Station,
            CardKind::Weapon { .. } => CardType::Weapon,
            CardKind::Ability => CardType::Ability,
        }
    }

    /// The `ShipData` key for ship and station cards.
    #[must_use]
    pub fn ship_data_asset(&self) -> Option<&str> {
        match self {
            CardKind::Ship { ship_data } | CardKind::Station { ship_data } => Some(ship_data),
            _ => None,
        }
    }

    /// The `WeaponData` key for weapon cards.
    #[must_use]
    pub fn weapon_data_asset(&self) -> Option<&str> {
        match self {
            CardKind::Weapon { weapon_data } => Some(weapon_data),
            _ => None,
        }
    }
}

/// Card rarity (deck building only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Immutable card record.
///
/// ## Example
///
/// ```
/// use space_card_game::cards::{Archetype, CardData, CardType, ResourceCosts, ResourceType};
///
/// let frigate = CardData::ship("Eagle Frigate", "Ships/EagleFrigate", Archetype::EagleFrigate)
///     .with_costs(ResourceCosts::free().with(ResourceType::Crew, 2));
///
/// assert_eq!(frigate.card_type(), CardType::Ship);
/// assert_eq!(frigate.resource_costs[ResourceType::Crew], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardData {
    /// Name shown to players.
    pub display_name: String,

    /// What the card becomes when laid.
    pub kind: CardKind,

    /// Behaviour tag.
    pub archetype: Archetype,

    #[serde(default)]
    pub rarity: Rarity,

    /// Resources charged when the card is laid.
    #[serde(default)]
    pub resource_costs: ResourceCosts,

    /// Card face texture.
    #[serde(default)]
    pub texture_asset: String,

    /// Texture of the battlefield object, if the card has one.
    #[serde(default)]
    pub object_texture_asset: Option<String>,
}

impl CardData {
    /// Create a card record.
    #[must_use]
    pub fn new(display_name: impl Into<String>, kind: CardKind, archetype: Archetype) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
            archetype,
            rarity: Rarity::Common,
            resource_costs: ResourceCosts::free(),
            texture_asset: String::new(),
            object_texture_asset: None,
        }
    }

    /// A free resource card for `resource`.
    #[must_use]
    pub fn resource(display_name: impl Into<String>, resource: ResourceType) -> Self {
        Self::new(display_name, CardKind::Resource { resource }, Archetype::Resource)
    }

    /// A ship card referencing the `ShipData` at `ship_data`.
    #[must_use]
    pub fn ship(display_name: impl Into<String>, ship_data: impl Into<String>, archetype: Archetype) -> Self {
        Self::new(
            display_name,
            CardKind::Ship {
                ship_data: ship_data.into(),
            },
            archetype,
        )
    }

    /// A station card referencing the `ShipData` at `ship_data`.
    #[must_use]
    pub fn station(display_name: impl Into<String>, ship_data: impl Into<String>) -> Self {
        Self::new(
            display_name,
            CardKind::Station {
                ship_data: ship_data.into(),
            },
            Archetype::Station,
        )
    }

    /// A weapon card referencing the `WeaponData` at `weapon_data`.
    #[must_use]
    pub fn weapon(display_name: impl Into<String>, weapon_data: impl Into<String>, archetype: Archetype) -> Self {
        Self::new(
            display_name,
            CardKind::Weapon {
                weapon_data: weapon_data.into(),
            },
            archetype,
        )
    }

    /// An ability card.
    #[must_use]
    pub fn ability(display_name: impl Into<String>, archetype: Archetype) -> Self {
        Self::new(display_name, CardKind::Ability, archetype)
    }

    /// Set resource costs (builder pattern).
    #[must_use]
    pub fn with_costs(mut self, costs: ResourceCosts) -> Self {
        self.resource_costs = costs;
        self
    }

    /// Set rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// The payload-free category.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.kind.card_type()
    }
}

/// Combat stats of a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipData {
    /// Damage dealt per shot with the default turret.
    pub attack: i32,
    /// Starting health. Must be positive.
    pub defence: i32,
    /// Used by speed-sensitive archetypes.
    pub speed: i32,
}

impl ShipData {
    #[must_use]
    pub const fn new(attack: i32, defence: i32, speed: i32) -> Self {
        Self {
            attack,
            defence,
            speed,
        }
    }
}

/// Combat stats of a turret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeaponData {
    /// Damage dealt per shot. Ignored by the default turret, which fires
    /// with the hull's own attack.
    pub damage: i32,
    /// Shots available in each battle phase.
    pub shots_per_turn: u32,
}

impl WeaponData {
    #[must_use]
    pub const fn new(damage: i32, shots_per_turn: u32) -> Self {
        Self {
            damage,
            shots_per_turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_payloads() {
        let ship = CardKind::Ship {
            ship_data: "Ships/Hull".into(),
        };
        assert_eq!(ship.card_type(), CardType::Ship);
        assert_eq!(ship.ship_data_asset(), Some("Ships/Hull"));
        assert_eq!(ship.weapon_data_asset(), None);

        let weapon = CardKind::Weapon {
            weapon_data: "Weapons/Laser".into(),
        };
        assert_eq!(weapon.weapon_data_asset(), Some("Weapons/Laser"));
        assert_eq!(CardKind::Ability.card_type(), CardType::Ability);
    }

    #[test]
    fn test_card_builder() {
        let card = CardData::resource("Crew", ResourceType::Crew).with_rarity(Rarity::Uncommon);

        assert_eq!(card.display_name, "Crew");
        assert_eq!(card.card_type(), CardType::Resource);
        assert_eq!(card.rarity, Rarity::Uncommon);
        assert_eq!(card.resource_costs.total(), 0);
    }

    #[test]
    fn test_card_json_shape() {
        let json = r#"{
            "display_name": "Cutter",
            "kind": { "type": "Ship", "ship_data": "Ships/Cutter" },
            "archetype": "Ship",
            "resource_costs": [1, 0, 1, 0]
        }"#;

        let card: CardData = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind.ship_data_asset(), Some("Ships/Cutter"));
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.resource_costs[ResourceType::Fuel], 1);
        assert_eq!(card.object_texture_asset, None);
    }
}
