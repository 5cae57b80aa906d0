//! Decks: ordered lists of card records.
//!
//! A deck is built from registry content and consumed as a player's draw
//! pile. Cards are stored in an `im::Vector` so a deck can be cloned into
//! several battles without copying its contents.

use std::sync::Arc;

use log::debug;

use super::definition::CardData;
use super::registry::{ContentError, ContentRegistry};
use crate::core::GameRng;

/// An ordered collection of card records. The front is the top of the deck.
///
/// A deck starts uncreated. `create*` fills it once, `delete` empties it
/// and allows it to be created again.
///
/// ```
/// use std::sync::Arc;
/// use space_card_game::cards::{CardData, Deck, ResourceType};
///
/// let mut deck = Deck::new("Starter");
/// deck.create_with(vec![Arc::new(CardData::resource("Crew", ResourceType::Crew))]);
///
/// assert!(deck.is_created());
/// assert_eq!(deck.len(), 1);
///
/// deck.delete();
/// assert!(!deck.is_created());
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    name: String,
    cards: im::Vector<Arc<CardData>>,
    is_created: bool,
}

impl Deck {
    /// An uncreated, empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: im::Vector::new(),
            is_created: false,
        }
    }

    /// Mark the deck as created with no cards.
    ///
    /// Panics if the deck is already created or holds cards.
    pub fn create(&mut self) {
        assert!(!self.is_created, "Deck '{}' already created", self.name);
        assert!(self.cards.is_empty(), "Deck '{}' must be empty before creation", self.name);
        self.is_created = true;
    }

    /// Create the deck from card records, keeping their order.
    pub fn create_with(&mut self, cards: impl IntoIterator<Item = Arc<CardData>>) {
        self.create();
        self.cards.extend(cards);
        debug!("Created deck '{}' with {} cards", self.name, self.cards.len());
    }

    /// Create the deck from registry asset keys.
    ///
    /// Nothing changes if a key does not resolve.
    pub fn create_from_keys<S: AsRef<str>>(
        &mut self,
        registry: &ContentRegistry,
        keys: &[S],
    ) -> Result<(), ContentError> {
        let cards = registry.convert_to_data_list(keys)?;
        self.create_with(cards);
        Ok(())
    }

    /// Empty the deck and mark it uncreated.
    pub fn delete(&mut self) {
        self.cards.clear();
        self.is_created = false;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        self.is_created
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardData>> {
        self.cards.iter()
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<_> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Arc<CardData>> {
        self.cards.pop_front()
    }

    /// Remove and return the topmost card matching `predicate`.
    pub fn take_first<F>(&mut self, predicate: F) -> Option<Arc<CardData>>
    where
        F: Fn(&CardData) -> bool,
    {
        let index = self.cards.iter().position(|card| predicate(card))?;
        Some(self.cards.remove(index))
    }

    /// Whether any card matches `predicate`.
    #[must_use]
    pub fn contains<F>(&self, predicate: F) -> bool
    where
        F: Fn(&CardData) -> bool,
    {
        self.cards.iter().any(|card| predicate(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Archetype, CardType, ResourceType};

    fn cards() -> Vec<Arc<CardData>> {
        vec![
            Arc::new(CardData::resource("Crew", ResourceType::Crew)),
            Arc::new(CardData::ship("Cutter", "Ships/Cutter", Archetype::Ship)),
            Arc::new(CardData::station("Outpost", "Ships/Outpost")),
            Arc::new(CardData::resource("Fuel", ResourceType::Fuel)),
        ]
    }

    #[test]
    fn test_create_and_draw_in_order() {
        let mut deck = Deck::new("Test");
        deck.create_with(cards());

        assert_eq!(deck.draw().unwrap().display_name, "Crew");
        assert_eq!(deck.draw().unwrap().display_name, "Cutter");
        assert_eq!(deck.len(), 2);
    }

    #[test]
    #[should_panic(expected = "already created")]
    fn test_double_create_panics() {
        let mut deck = Deck::new("Test");
        deck.create();
        deck.create();
    }

    #[test]
    fn test_delete_allows_recreate() {
        let mut deck = Deck::new("Test");
        deck.create_with(cards());
        deck.delete();
        deck.create_with(cards());
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn test_take_first_matching() {
        let mut deck = Deck::new("Test");
        deck.create_with(cards());

        assert!(deck.contains(|c| c.card_type() == CardType::Station));
        let station = deck.take_first(|c| c.card_type() == CardType::Station).unwrap();
        assert_eq!(station.display_name, "Outpost");
        assert!(!deck.contains(|c| c.card_type() == CardType::Station));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::new("A");
        a.create_with(cards().into_iter().cycle().take(20));
        let mut b = a.clone();

        a.shuffle(&mut GameRng::new(9));
        b.shuffle(&mut GameRng::new(9));

        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn test_create_from_keys_missing() {
        let registry = ContentRegistry::new();
        let mut deck = Deck::new("Test");

        assert!(deck.create_from_keys(&registry, &["Cards/Nope"]).is_err());
        assert!(!deck.is_created());
    }
}
