//! Battlefield entity identification.
//!
//! Every card laid onto the board becomes a `CardObjectPair` with a unique
//! `PairId`. IDs are allocated by the battle and never reused, so a stale ID
//! held by a controller simply stops resolving once its pair has died.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card/object pair on the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Monotonic `PairId` allocator.
#[derive(Clone, Debug, Default)]
pub struct PairIdAllocator {
    next: u32,
}

impl PairIdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> PairId {
        let id = PairId(self.next);
        self.next += 1;
        id
    }
}
