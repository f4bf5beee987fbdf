use crate::utilities::CopyStr;
use std::fmt;

/// A hub's name as given in the map file, lower-cased at load time.
pub type HubName = CopyStr<32>;

/// Dense index of a hub within a [`crate::simulation_map::SimulationMap`]'s arena.
///
/// Assigned in hub-declaration order at load time; stable for the lifetime
/// of the map. Used instead of name-keyed hashing everywhere the
/// time-expanded graph and solver need to identify a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HubIndex(u32);

impl HubIndex {
    pub fn new(index: usize) -> Self {
        HubIndex(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for HubIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discrete time step in the time-expanded graph.
pub type Turn = u32;

/// 1-based identifier assigned to a drone by the fleet scheduler.
pub type DroneId = u32;

/// Link capacity / hub capacity: an integer upper bound on simultaneous
/// occupancy.
pub type Capacity = u32;
