//! Ship pairs and the weapons mounted on them.

use super::pair::{CardObjectPair, Representation};
use crate::cards::GameCard;
use crate::combat::{Ship, ShipView, Turret};
use crate::core::{PairId, PlayerId};

/// A weapon card bound to its turret.
pub type CardWeaponPair = CardObjectPair<Turret>;

/// A ship card bound to its hull, carrying exactly one mounted weapon.
///
/// Every ship is built with the default turret. Laying a weapon card on the
/// ship replaces it. Phase changes on the ship propagate to the weapon so
/// the two always show the same representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardShipPair {
    pair: CardObjectPair<Ship>,
    owner: PlayerId,
    weapon: CardWeaponPair,
}

impl CardShipPair {
    /// Bind a ship card to its hull with its default weapon mounted.
    ///
    /// Panics if the default weapon's turret is not flagged as default.
    #[must_use]
    pub fn new(id: PairId, card: GameCard, ship: Ship, default_weapon: CardWeaponPair) -> Self {
        assert!(
            default_weapon.object().is_default(),
            "Ships must be built with the default turret"
        );
        let owner = card.owner();
        Self {
            pair: CardObjectPair::new(id, card, ship),
            owner,
            weapon: default_weapon,
        }
    }

    #[must_use]
    pub fn id(&self) -> PairId {
        self.pair.id()
    }

    /// The player whose ship count this pair occupies.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn card(&self) -> &GameCard {
        self.pair.card()
    }

    #[must_use]
    pub fn ship(&self) -> &Ship {
        self.pair.object()
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        self.pair.object_mut()
    }

    /// The mounted weapon pair.
    #[must_use]
    pub fn weapon(&self) -> &CardWeaponPair {
        &self.weapon
    }

    #[must_use]
    pub fn turret(&self) -> &Turret {
        self.weapon.object()
    }

    pub fn turret_mut(&mut self) -> &mut Turret {
        self.weapon.object_mut()
    }

    #[must_use]
    pub fn visible(&self) -> Representation {
        self.pair.visible()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.pair.is_ready()
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.ship().dead()
    }

    /// Whether this ship is a station.
    #[must_use]
    pub fn is_station(&self) -> bool {
        self.card().data().card_type() == crate::cards::CardType::Station
    }

    /// Ready, alive, and with shots left.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.is_ready() && !self.is_dead() && self.turret().can_fire()
    }

    /// Combat stats snapshot.
    #[must_use]
    pub fn view(&self) -> ShipView {
        self.ship().view(self.turret())
    }

    /// Damage this ship deals to `target` (or to a non-ship target).
    #[must_use]
    pub fn calculate_attack(&self, target: Option<&ShipView>) -> i32 {
        self.card().calculate_attack(&self.view(), target)
    }

    /// Damage this ship takes from `input_damage` dealt by `attacker`.
    #[must_use]
    pub fn calculate_damage_done_to_this(&self, attacker: Option<&ShipView>, input_damage: i32) -> i32 {
        self.card()
            .calculate_damage_done_to_this(&self.view(), attacker, input_damage)
    }

    /// Run `input_damage` through this ship's defensive modifiers and apply it.
    ///
    /// Returns the health actually removed.
    pub fn take_damage(&mut self, attacker: Option<&ShipView>, input_damage: i32) -> i32 {
        let damage = self.calculate_damage_done_to_this(attacker, input_damage);
        self.ship_mut().damage_module_mut().apply_damage(damage)
    }

    /// Card visible, ready, turret refreshed.
    pub fn make_ready_for_card_placement(&mut self) {
        self.pair.make_ready_for_card_placement();
        self.weapon.make_ready_for_card_placement();
        self.turret_mut().refresh();
    }

    /// Object visible.
    pub fn make_ready_for_battle(&mut self) {
        self.pair.make_ready_for_battle();
        self.weapon.make_ready_for_battle();
    }

    pub fn on_turn_end(&mut self) {
        self.pair.on_turn_end();
        self.weapon.on_turn_end();
    }
}

/// Cards that can be attached to an existing ship.
pub trait MountOnShip {
    /// Attach `self` to `ship_pair`, returning whatever it displaced.
    fn add_to_card_ship_pair(self, ship_pair: &mut CardShipPair) -> Option<CardWeaponPair>;
}

impl MountOnShip for CardWeaponPair {
    /// Replace the ship's turret. The displaced weapon is returned to the
    /// caller to be discarded.
    fn add_to_card_ship_pair(mut self, ship_pair: &mut CardShipPair) -> Option<CardWeaponPair> {
        assert_eq!(
            self.card().owner(),
            ship_pair.owner(),
            "Weapons can only be mounted on their owner's ships"
        );
        if ship_pair.visible() == Representation::Object {
            self.make_ready_for_battle();
        }
        Some(std::mem::replace(&mut ship_pair.weapon, self))
    }
}

impl MountOnShip for CardShipPair {
    fn add_to_card_ship_pair(self, _ship_pair: &mut CardShipPair) -> Option<CardWeaponPair> {
        panic!("Cannot add ships to other ships");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Archetype, CardData, ShipData, WeaponData};
    use std::sync::Arc;

    fn weapon(id: u32, owner: PlayerId, damage: i32, is_default: bool) -> CardWeaponPair {
        let archetype = if is_default {
            Archetype::DefaultTurret
        } else {
            Archetype::LaserBeamTurret
        };
        let card = GameCard::new(Arc::new(CardData::weapon("Turret", "Weapons/Test", archetype)), owner);
        CardObjectPair::new(PairId(id), card, Turret::new(&WeaponData::new(damage, 1), is_default))
    }

    fn ship_pair(id: u32, owner: PlayerId, archetype: Archetype, stats: ShipData) -> CardShipPair {
        let card = GameCard::new(Arc::new(CardData::ship("Hull", "Ships/Test", archetype)), owner);
        CardShipPair::new(
            PairId(id),
            card,
            Ship::new(Arc::new(stats)),
            weapon(id + 100, owner, 0, true),
        )
    }

    #[test]
    fn test_new_ship_pair() {
        let pair = ship_pair(1, PlayerId::FIRST, Archetype::Ship, ShipData::new(2, 3, 1));

        assert_eq!(pair.owner(), PlayerId::FIRST);
        assert!(pair.turret().is_default());
        assert!(!pair.is_ready());
        assert!(!pair.can_attack());
        assert_eq!(pair.visible(), Representation::Card);
    }

    #[test]
    fn test_phase_changes_propagate_to_weapon() {
        let mut pair = ship_pair(1, PlayerId::FIRST, Archetype::Ship, ShipData::new(2, 3, 1));

        pair.make_ready_for_battle();
        assert_eq!(pair.visible(), Representation::Object);
        assert_eq!(pair.weapon().visible(), Representation::Object);

        pair.make_ready_for_card_placement();
        assert_eq!(pair.visible(), Representation::Card);
        assert_eq!(pair.weapon().visible(), Representation::Card);
        assert!(pair.is_ready());
        assert!(pair.can_attack());
    }

    #[test]
    fn test_mount_weapon_replaces_default() {
        let mut pair = ship_pair(1, PlayerId::FIRST, Archetype::Ship, ShipData::new(2, 3, 1));
        let laser = weapon(2, PlayerId::FIRST, 5, false);

        let displaced = laser.add_to_card_ship_pair(&mut pair).unwrap();

        assert!(displaced.object().is_default());
        assert!(!pair.turret().is_default());
        assert_eq!(pair.calculate_attack(None), 5);
    }

    #[test]
    #[should_panic(expected = "Cannot add ships to other ships")]
    fn test_ship_on_ship_panics() {
        let mut host = ship_pair(1, PlayerId::FIRST, Archetype::Ship, ShipData::new(2, 3, 1));
        let other = ship_pair(2, PlayerId::FIRST, Archetype::Ship, ShipData::new(1, 1, 1));
        other.add_to_card_ship_pair(&mut host);
    }

    #[test]
    fn test_take_damage_applies_defensive_modifier() {
        let mut eagle = ship_pair(1, PlayerId::FIRST, Archetype::EagleFrigate, ShipData::new(2, 4, 3));
        let slow = ship_pair(2, PlayerId::SECOND, Archetype::Ship, ShipData::new(2, 3, 1));

        let removed = eagle.take_damage(Some(&slow.view()), 2);
        assert_eq!(removed, 1);
        assert_eq!(eagle.ship().health(), 3);

        // Non-ship sources are not reduced.
        let removed = eagle.take_damage(None, 2);
        assert_eq!(removed, 2);
        assert_eq!(eagle.ship().health(), 1);
        assert!(!eagle.is_dead());
    }
}
