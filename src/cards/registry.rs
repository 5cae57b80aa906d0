//! Content registry for data lookup.
//!
//! The `ContentRegistry` stores every static record a battle needs: card
//! records, ship hulls and weapon profiles, each keyed by a string asset
//! key such as `"Cards/Ships/EagleFrigate"`. It is built once, wrapped in an
//! `Arc` and handed to every battle that uses it.
//!
//! ## Content packs
//!
//! Packs are JSON documents with one table per record type:
//!
//! ```json
//! {
//!   "ships":   { "Ships/Cutter": { "attack": 1, "defence": 2, "speed": 2 } },
//!   "weapons": { "Weapons/Laser": { "damage": 2, "shots_per_turn": 1 } },
//!   "cards":   { "Cards/Cutter": { "display_name": "Cutter", ... } },
//!   "decks":   { "Starter": ["Cards/Cutter", "..."] }
//! }
//! ```

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use super::behaviour::Archetype;
use super::definition::{CardData, CardType, ShipData, WeaponData};

/// Asset key of the weapon card every ship is built with.
pub const DEFAULT_WEAPON_CARD_ASSET: &str = "Cards/Weapons/DefaultTurret";

/// Why content could not be loaded or resolved.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content pack: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing {kind} asset '{key}'")]
    MissingAsset { kind: &'static str, key: String },

    #[error("card '{key}' has archetype {archetype:?}, which does not fit a {card_type} card")]
    IncompatibleArchetype {
        key: String,
        archetype: Archetype,
        card_type: CardType,
    },

    #[error("ship '{key}' has defence {defence}, which must be positive")]
    InvalidShip { key: String, defence: i32 },

    #[error("default turret card 'Cards/Weapons/DefaultTurret' is missing or not a default turret")]
    MissingDefaultTurret,
}

/// Record types stored in the registry.
pub trait ContentData: Sized {
    /// Name used in error messages.
    const KIND: &'static str;

    /// The table holding records of this type.
    fn table(registry: &ContentRegistry) -> &FxHashMap<String, Arc<Self>>;
}

impl ContentData for CardData {
    const KIND: &'static str = "card";

    fn table(registry: &ContentRegistry) -> &FxHashMap<String, Arc<Self>> {
        &registry.cards
    }
}

impl ContentData for ShipData {
    const KIND: &'static str = "ship";

    fn table(registry: &ContentRegistry) -> &FxHashMap<String, Arc<Self>> {
        &registry.ships
    }
}

impl ContentData for WeaponData {
    const KIND: &'static str = "weapon";

    fn table(registry: &ContentRegistry) -> &FxHashMap<String, Arc<Self>> {
        &registry.weapons
    }
}

#[derive(Deserialize)]
struct ContentPack {
    #[serde(default)]
    ships: FxHashMap<String, ShipData>,
    #[serde(default)]
    weapons: FxHashMap<String, WeaponData>,
    #[serde(default)]
    cards: FxHashMap<String, CardData>,
    #[serde(default)]
    decks: FxHashMap<String, Vec<String>>,
}

/// Registry of static content.
///
/// ## Example
///
/// ```
/// use space_card_game::cards::{Archetype, CardData, ContentRegistry, ShipData};
///
/// let mut registry = ContentRegistry::new();
/// registry.register_ship("Ships/Cutter", ShipData::new(1, 2, 2));
/// registry.register_card(
///     "Cards/Cutter",
///     CardData::ship("Cutter", "Ships/Cutter", Archetype::Ship),
/// );
///
/// let card = registry.get_data::<CardData>("Cards/Cutter").unwrap();
/// assert_eq!(card.display_name, "Cutter");
/// assert!(registry.get_data::<ShipData>("Ships/Missing").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    cards: FxHashMap<String, Arc<CardData>>,
    ships: FxHashMap<String, Arc<ShipData>>,
    weapons: FxHashMap<String, Arc<WeaponData>>,
    decks: FxHashMap<String, Vec<String>>,
}

impl ContentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the bundled starter content.
    pub fn core_set() -> Result<Self, ContentError> {
        let mut registry = Self::new();
        registry.load_json(include_str!("../../content/core_set.json"))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Register a card record.
    ///
    /// Panics if the key is already registered.
    pub fn register_card(&mut self, key: impl Into<String>, card: CardData) {
        let key = key.into();
        if self.cards.contains_key(&key) {
            panic!("Card '{key}' already registered");
        }
        self.cards.insert(key, Arc::new(card));
    }

    /// Register a hull.
    ///
    /// Panics if the key is already registered.
    pub fn register_ship(&mut self, key: impl Into<String>, ship: ShipData) {
        let key = key.into();
        if self.ships.contains_key(&key) {
            panic!("Ship '{key}' already registered");
        }
        assert!(ship.defence > 0, "Ship '{key}' needs positive defence");
        self.ships.insert(key, Arc::new(ship));
    }

    /// Register a weapon profile.
    ///
    /// Panics if the key is already registered.
    pub fn register_weapon(&mut self, key: impl Into<String>, weapon: WeaponData) {
        let key = key.into();
        if self.weapons.contains_key(&key) {
            panic!("Weapon '{key}' already registered");
        }
        self.weapons.insert(key, Arc::new(weapon));
    }

    /// Register a named list of card keys.
    ///
    /// Panics if the name is already registered.
    pub fn register_deck(&mut self, name: impl Into<String>, card_keys: Vec<String>) {
        let name = name.into();
        if self.decks.contains_key(&name) {
            panic!("Deck '{name}' already registered");
        }
        self.decks.insert(name, card_keys);
    }

    /// Add every record of a JSON content pack.
    ///
    /// Keys clashing with already registered ones panic, as with the
    /// `register_*` methods.
    pub fn load_json(&mut self, json: &str) -> Result<(), ContentError> {
        let pack: ContentPack = serde_json::from_str(json)?;
        debug!(
            "Loading content pack: {} ships, {} weapons, {} cards, {} decks",
            pack.ships.len(),
            pack.weapons.len(),
            pack.cards.len(),
            pack.decks.len()
        );

        if let Some((key, ship)) = pack.ships.iter().find(|(_, ship)| ship.defence <= 0) {
            return Err(ContentError::InvalidShip {
                key: key.clone(),
                defence: ship.defence,
            });
        }

        for (key, ship) in pack.ships {
            self.register_ship(key, ship);
        }
        for (key, weapon) in pack.weapons {
            self.register_weapon(key, weapon);
        }
        for (key, card) in pack.cards {
            self.register_card(key, card);
        }
        for (name, keys) in pack.decks {
            self.register_deck(name, keys);
        }
        Ok(())
    }

    /// Check that every reference between records resolves.
    ///
    /// - ship and station cards point at a registered hull
    /// - weapon cards point at a registered weapon profile
    /// - every archetype fits its card's kind
    /// - the default turret card exists
    /// - every deck lists registered cards
    pub fn validate(&self) -> Result<(), ContentError> {
        for (key, card) in Self::sorted(&self.cards) {
            if !card.archetype.accepts(card.card_type()) {
                return Err(ContentError::IncompatibleArchetype {
                    key: key.to_string(),
                    archetype: card.archetype,
                    card_type: card.card_type(),
                });
            }
            if let Some(ship) = card.kind.ship_data_asset() {
                self.require::<ShipData>(ship)?;
            }
            if let Some(weapon) = card.kind.weapon_data_asset() {
                self.require::<WeaponData>(weapon)?;
            }
        }

        match self.cards.get(DEFAULT_WEAPON_CARD_ASSET) {
            Some(card) if card.archetype == Archetype::DefaultTurret => {}
            _ => return Err(ContentError::MissingDefaultTurret),
        }

        for keys in self.decks.values() {
            self.convert_to_data_list(keys)?;
        }
        Ok(())
    }

    /// Look up a record by asset key.
    #[must_use]
    pub fn get_data<T: ContentData>(&self, key: &str) -> Option<Arc<T>> {
        T::table(self).get(key).cloned()
    }

    /// Look up a record that must exist.
    pub fn require<T: ContentData>(&self, key: &str) -> Result<Arc<T>, ContentError> {
        self.get_data(key).ok_or_else(|| ContentError::MissingAsset {
            kind: T::KIND,
            key: key.to_string(),
        })
    }

    /// Every record of type `T`, ordered by key.
    #[must_use]
    pub fn all_data<T: ContentData>(&self) -> Vec<(&str, &Arc<T>)> {
        Self::sorted(T::table(self))
    }

    /// The asset key a card record was registered under.
    ///
    /// Matches the record itself, not an equal copy of it.
    #[must_use]
    pub fn find_card_data_asset(&self, card: &Arc<CardData>) -> Option<&str> {
        self.cards
            .iter()
            .find(|(_, data)| Arc::ptr_eq(data, card))
            .map(|(key, _)| key.as_str())
    }

    /// Every card of the given type, ordered by key.
    #[must_use]
    pub fn cards_of_type(&self, card_type: CardType) -> Vec<(&str, &Arc<CardData>)> {
        Self::sorted(&self.cards)
            .into_iter()
            .filter(|(_, card)| card.card_type() == card_type)
            .collect()
    }

    /// Resolve a list of card keys, keeping order and duplicates.
    pub fn convert_to_data_list<S: AsRef<str>>(&self, keys: &[S]) -> Result<Vec<Arc<CardData>>, ContentError> {
        keys.iter()
            .map(|key| self.require::<CardData>(key.as_ref()))
            .collect()
    }

    /// Card keys of a registered deck list.
    #[must_use]
    pub fn deck_list(&self, name: &str) -> Option<&[String]> {
        self.decks.get(name).map(Vec::as_slice)
    }

    /// Names of the registered deck lists, sorted.
    #[must_use]
    pub fn deck_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.decks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The weapon card every ship is built with.
    pub fn default_weapon_card(&self) -> Result<Arc<CardData>, ContentError> {
        self.get_data::<CardData>(DEFAULT_WEAPON_CARD_ASSET)
            .ok_or(ContentError::MissingDefaultTurret)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn sorted<T>(table: &FxHashMap<String, Arc<T>>) -> Vec<(&str, &Arc<T>)> {
        let mut entries: Vec<_> = table.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}
