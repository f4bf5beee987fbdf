use model::{Capacity, HubIndex, SimulationMap, Turn};

/// Dense arena index for a `(hub, turn)` pair: `hub.index() * (max_turns +
/// 1) + turn`. Two `TimeNodeId`s are equal iff they name the same hub at
/// the same turn, by construction — there is no separate equality check
/// to get wrong, unlike a `(hub_name, t)`-keyed hash map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeNodeId(u32);

impl TimeNodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed edge in the time-expanded graph: either a 1-turn wait at a
/// hub or a 1- or 2-turn movement across a connection.
#[derive(Debug, Clone, Copy)]
pub struct TimeEdge {
    pub source: TimeNodeId,
    pub target: TimeNodeId,
    pub duration: u32,
    pub max_capacity: Capacity,
}

/// The time-expanded graph built from a [`SimulationMap`] and a turn
/// horizon: one node per non-blocked `(hub, t)` pair for `0 <= t <=
/// max_turns`, plus wait and movement edges between them.
pub struct TimeGraph<'m> {
    map: &'m SimulationMap,
    max_turns: Turn,
    exists: Vec<bool>,
    adjacency: Vec<Vec<TimeEdge>>,
}

impl<'m> TimeGraph<'m> {
    pub fn max_turns(&self) -> Turn {
        self.max_turns
    }

    pub fn map(&self) -> &'m SimulationMap {
        self.map
    }

    pub fn node_id(&self, hub: HubIndex, t: Turn) -> TimeNodeId {
        node_id_raw(hub, t, self.max_turns)
    }

    pub fn hub_of(&self, node: TimeNodeId) -> HubIndex {
        HubIndex::new((node.0 / (self.max_turns + 1)) as usize)
    }

    pub fn turn_of(&self, node: TimeNodeId) -> Turn {
        node.0 % (self.max_turns + 1)
    }

    pub fn exists(&self, node: TimeNodeId) -> bool {
        self.exists[node.index()]
    }

    pub fn adjacency(&self, node: TimeNodeId) -> &[TimeEdge] {
        &self.adjacency[node.index()]
    }

    pub fn start_node(&self) -> TimeNodeId {
        self.node_id(self.map.start(), 0)
    }
}

/// Builds the time-expanded graph for `max_turns` turns.
///
/// Edge cases handled per §4.2: blocked hubs never get a node, movement
/// edges landing past `max_turns` are silently dropped, and an edge into
/// a `RESTRICTED` hub always has `duration == 2` (even when that hub is
/// the END hub).
pub fn build(map: &SimulationMap, max_turns: Turn) -> TimeGraph<'_> {
    let slots = map.size() * (max_turns as usize + 1);
    let mut exists = vec![false; slots];
    let mut adjacency: Vec<Vec<TimeEdge>> = vec![Vec::new(); slots];

    for hub in map.hubs() {
        if hub.zone().is_blocked() {
            continue;
        }
        for t in 0..=max_turns {
            exists[node_id_raw(hub.index(), t, max_turns).index()] = true;
        }
    }

    for hub in map.hubs() {
        if hub.zone().is_blocked() {
            continue;
        }

        for t in 0..=max_turns {
            let source = node_id_raw(hub.index(), t, max_turns);

            if t < max_turns {
                let wait_target = node_id_raw(hub.index(), t + 1, max_turns);
                adjacency[source.index()].push(TimeEdge {
                    source,
                    target: wait_target,
                    duration: 1,
                    max_capacity: hub.max_drones(),
                });
            }

            for connection in map.connections_from(hub.index()) {
                let target_hub = map.hub(connection.target());
                if target_hub.zone().is_blocked() {
                    continue;
                }

                let duration = target_hub.zone().arrival_duration();
                let arrival = t + duration;
                if arrival > max_turns {
                    continue;
                }

                let target = node_id_raw(connection.target(), arrival, max_turns);
                adjacency[source.index()].push(TimeEdge {
                    source,
                    target,
                    duration,
                    max_capacity: connection.max_link_capacity(),
                });
            }
        }
    }

    TimeGraph {
        map,
        max_turns,
        exists,
        adjacency,
    }
}

fn node_id_raw(hub: HubIndex, t: Turn, max_turns: Turn) -> TimeNodeId {
    TimeNodeId(hub.index() as u32 * (max_turns + 1) + t)
}
