//! The card/object duality of laid cards.
//!
//! A laid card is shown as its card while players place cards, and as its
//! battlefield object during the battle phase. `CardObjectPair` owns both
//! and records which one is active, so "both visible" is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::cards::GameCard;
use crate::core::PairId;

/// Which half of a pair is currently shown and interactable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    Card,
    Object,
}

/// A laid card bound to its battlefield object.
///
/// ## Lifecycle
///
/// - Laid: card visible, not ready.
/// - `make_ready_for_battle`: object visible.
/// - `make_ready_for_card_placement`: card visible, ready.
///
/// A pair becomes ready the first time a placement phase begins after it
/// was laid, i.e. after one full turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardObjectPair<O> {
    id: PairId,
    card: GameCard,
    object: O,
    visible: Representation,
    ready: bool,
}

impl<O> CardObjectPair<O> {
    /// Bind a freshly laid card to its object.
    #[must_use]
    pub fn new(id: PairId, card: GameCard, object: O) -> Self {
        Self {
            id,
            card,
            object,
            visible: Representation::Card,
            ready: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PairId {
        self.id
    }

    #[must_use]
    pub fn card(&self) -> &GameCard {
        &self.card
    }

    #[must_use]
    pub fn object(&self) -> &O {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut O {
        &mut self.object
    }

    /// The currently active half.
    #[must_use]
    pub fn visible(&self) -> Representation {
        self.visible
    }

    #[must_use]
    pub fn is_card_visible(&self) -> bool {
        self.visible == Representation::Card
    }

    #[must_use]
    pub fn is_object_visible(&self) -> bool {
        self.visible == Representation::Object
    }

    /// Whether a full turn has passed since this pair was laid.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Switch to the card, mark the pair ready and run the card's
    /// turn-begin hook.
    pub fn make_ready_for_card_placement(&mut self) {
        self.visible = Representation::Card;
        self.ready = true;
        self.card.on_turn_begin();
    }

    /// Switch to the object.
    pub fn make_ready_for_battle(&mut self) {
        self.visible = Representation::Object;
    }

    /// Called when the owner's turn ends.
    pub fn on_turn_end(&mut self) {
        self.ready = true;
    }
}
