//! Collision probe results and the oracle that produces them.

use crate::movement::components::WallContact;

/// Five probe booleans, already aggregated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionProbes {
    pub grounded: bool,
    pub touching_left: bool,
    pub touching_right: bool,
    /// Touching the left wall with its upper part clear (a ledge).
    pub touching_top_left: bool,
    /// Touching the right wall with its upper part clear (a ledge).
    pub touching_top_right: bool,
}

impl CollisionProbes {
    pub fn touching_wall(&self) -> bool {
        self.touching_left || self.touching_right
    }

    /// The side wall when exactly one is touched.
    pub fn single_wall(&self) -> WallContact {
        match (self.touching_left, self.touching_right) {
            (true, false) => WallContact::Left,
            (false, true) => WallContact::Right,
            _ => WallContact::None,
        }
    }
}

/// Synchronous source of probe results, queried once per tick.
pub trait CollisionOracle {
    fn probe(&self) -> CollisionProbes;
}

impl CollisionOracle for CollisionProbes {
    fn probe(&self) -> CollisionProbes {
        *self
    }
}
