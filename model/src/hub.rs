use crate::base_types::{Capacity, HubIndex, HubName};
use crate::zone::{NodeCategory, Zone};
use std::fmt;

/// Immutable hub record, as read from the map. The core only requires that
/// `name` is unique and `(x, y)` are carried through for the renderer; it
/// never interprets the position itself.
#[derive(Debug, Clone)]
pub struct Hub {
    index: HubIndex,
    name: HubName,
    x: i32,
    y: i32,
    max_drones: Capacity,
    zone: Zone,
    category: NodeCategory,
    color: Option<String>,
}

impl Hub {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: HubIndex,
        name: HubName,
        x: i32,
        y: i32,
        max_drones: Capacity,
        zone: Zone,
        category: NodeCategory,
        color: Option<String>,
    ) -> Hub {
        Hub {
            index,
            name,
            x,
            y,
            max_drones,
            zone,
            category,
            color,
        }
    }

    pub fn index(&self) -> HubIndex {
        self.index
    }

    pub fn name(&self) -> HubName {
        self.name
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn max_drones(&self) -> Capacity {
        self.max_drones
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn category(&self) -> NodeCategory {
        self.category
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({},{}) [{}, max_drones={}]",
            self.name, self.x, self.y, self.zone, self.max_drones
        )
    }
}
