//! Board sections: each player's ships in lay order.

use smallvec::SmallVec;

use super::ship_pair::CardShipPair;
use crate::core::{PairId, PlayerId, PlayerMap};

/// Ids of a section's ships, inline for a full section.
pub type ShipIds = SmallVec<[PairId; 8]>;

/// One player's half of the battlefield.
///
/// Ships are kept in the order they were laid; "first" always means the
/// earliest surviving ship.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSection {
    owner: PlayerId,
    ships: Vec<CardShipPair>,
}

impl BoardSection {
    #[must_use]
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            ships: Vec::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Append a ship.
    ///
    /// Panics if the ship belongs to the other player.
    pub fn add_ship(&mut self, ship: CardShipPair) {
        assert_eq!(
            ship.owner(),
            self.owner,
            "{} cannot be placed in {}'s section",
            ship.id(),
            self.owner
        );
        self.ships.push(ship);
    }

    #[must_use]
    pub fn ships(&self) -> &[CardShipPair] {
        &self.ships
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardShipPair> {
        self.ships.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardShipPair> {
        self.ships.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PairId) -> Option<&CardShipPair> {
        self.ships.iter().find(|ship| ship.id() == id)
    }

    pub fn get_mut(&mut self, id: PairId) -> Option<&mut CardShipPair> {
        self.ships.iter_mut().find(|ship| ship.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: PairId) -> bool {
        self.get(id).is_some()
    }

    /// The earliest laid ship that is still alive.
    #[must_use]
    pub fn first_living_ship(&self) -> Option<&CardShipPair> {
        self.ships.iter().find(|ship| !ship.is_dead())
    }

    /// The section's station, if it has one.
    #[must_use]
    pub fn station(&self) -> Option<&CardShipPair> {
        self.ships.iter().find(|ship| ship.is_station())
    }

    /// Whether any ship is ready.
    #[must_use]
    pub fn any_ready(&self) -> bool {
        self.ships.iter().any(CardShipPair::is_ready)
    }

    /// Ids of ships that are ready and still have shots, in lay order.
    #[must_use]
    pub fn ships_able_to_attack(&self) -> ShipIds {
        self.ships
            .iter()
            .filter(|ship| ship.can_attack())
            .map(CardShipPair::id)
            .collect()
    }

    /// Remove destroyed ships, returning them in lay order.
    pub fn remove_dead(&mut self) -> Vec<CardShipPair> {
        let (dead, alive): (Vec<_>, Vec<_>) = self.ships.drain(..).partition(CardShipPair::is_dead);
        self.ships = alive;
        dead
    }

    pub fn make_ready_for_card_placement(&mut self) {
        self.ships
            .iter_mut()
            .for_each(CardShipPair::make_ready_for_card_placement);
    }

    pub fn make_ready_for_battle(&mut self) {
        self.ships.iter_mut().for_each(CardShipPair::make_ready_for_battle);
    }

    pub fn on_turn_end(&mut self) {
        self.ships.iter_mut().for_each(CardShipPair::on_turn_end);
    }
}

/// Both players' sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    sections: PlayerMap<BoardSection>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: PlayerMap::new(BoardSection::new),
        }
    }

    #[must_use]
    pub fn section(&self, player: PlayerId) -> &BoardSection {
        &self.sections[player]
    }

    pub fn section_mut(&mut self, player: PlayerId) -> &mut BoardSection {
        &mut self.sections[player]
    }

    /// `(player's section, opponent's section)`, both mutable.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut BoardSection, &mut BoardSection) {
        self.sections.split_mut(player)
    }

    /// Find a ship in either section.
    #[must_use]
    pub fn find_ship(&self, id: PairId) -> Option<&CardShipPair> {
        self.sections.iter().find_map(|(_, section)| section.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &BoardSection)> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut BoardSection)> {
        self.sections.iter_mut()
    }
}
