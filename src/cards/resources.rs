//! Resource types and per-card resource costs.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The resource types a player can accumulate.
///
/// Declaration order is the enumeration order used when checking costs:
/// the first type found lacking is the one reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceType {
    Crew,
    Electricity,
    Fuel,
    Sensors,
}

impl ResourceType {
    /// Number of resource types.
    pub const COUNT: usize = 4;

    /// Every resource type in enumeration order.
    pub const ALL: [ResourceType; Self::COUNT] = [
        ResourceType::Crew,
        ResourceType::Electricity,
        ResourceType::Fuel,
        ResourceType::Sensors,
    ];

    /// Index of this type in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ResourceType::Crew => "Crew",
            ResourceType::Electricity => "Electricity",
            ResourceType::Fuel => "Fuel",
            ResourceType::Sensors => "Sensors",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource cost of a card, one entry per `ResourceType`.
///
/// ```
/// use space_card_game::cards::{ResourceCosts, ResourceType};
///
/// let costs = ResourceCosts::free()
///     .with(ResourceType::Crew, 2)
///     .with(ResourceType::Fuel, 1);
///
/// assert_eq!(costs[ResourceType::Crew], 2);
/// assert_eq!(costs[ResourceType::Sensors], 0);
/// assert_eq!(costs.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceCosts([u32; ResourceType::COUNT]);

impl ResourceCosts {
    /// A card costing nothing.
    #[must_use]
    pub const fn free() -> Self {
        Self([0; ResourceType::COUNT])
    }

    /// Create from raw costs in enumeration order.
    #[must_use]
    pub const fn new(costs: [u32; ResourceType::COUNT]) -> Self {
        Self(costs)
    }

    /// Set one cost (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: ResourceType, amount: u32) -> Self {
        self[resource] = amount;
        self
    }

    /// Iterate over `(ResourceType, cost)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, u32)> + '_ {
        ResourceType::ALL.iter().map(move |&r| (r, self[r]))
    }

    /// Sum of all costs.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<ResourceType> for ResourceCosts {
    type Output = u32;

    fn index(&self, resource: ResourceType) -> &Self::Output {
        &self.0[resource.index()]
    }
}

impl IndexMut<ResourceType> for ResourceCosts {
    fn index_mut(&mut self, resource: ResourceType) -> &mut Self::Output {
        &mut self.0[resource.index()]
    }
}

/// Direction of a resource alteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeType {
    /// Mark tokens as used.
    Charge,
    /// Mark previously used tokens as unused again.
    Refund,
}
