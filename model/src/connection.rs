use crate::base_types::{Capacity, HubIndex};

/// An undirected logical link between two distinct hubs. The core treats
/// each link as two directed arcs sharing the same `max_link_capacity`, but
/// with independent per-arc occupancy counters (see [`crate::ScheduleError`]
/// and the capacity tracker in the `solver` crate for the convention this
/// implementation settled on).
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    source: HubIndex,
    target: HubIndex,
    max_link_capacity: Capacity,
}

impl Connection {
    pub fn new(source: HubIndex, target: HubIndex, max_link_capacity: Capacity) -> Connection {
        Connection {
            source,
            target,
            max_link_capacity,
        }
    }

    pub fn source(&self) -> HubIndex {
        self.source
    }

    pub fn target(&self) -> HubIndex {
        self.target
    }

    pub fn max_link_capacity(&self) -> Capacity {
        self.max_link_capacity
    }
}
