use std::collections::HashMap;

use model::{Capacity, Turn};
use timegraph::{TimeEdge, TimeGraph, TimeNodeId};

/// Mutable bookkeeping for how many drones occupy each `(edge, turn)` and
/// `(hub, turn)` during scheduling.
///
/// Reservations are never released: a path accepted for one drone
/// permanently reduces the remaining capacity seen by every later drone.
/// This is what makes the fleet scheduler a single-writer, sequential
/// process (see `SPEC_FULL.md` §5) rather than something that needs
/// interior mutability shared across solver calls.
#[derive(Default)]
pub struct CapacityTracker {
    edge_use: HashMap<(TimeNodeId, TimeNodeId, Turn), u32>,
    node_use: HashMap<TimeNodeId, u32>,
}

impl CapacityTracker {
    pub fn new() -> CapacityTracker {
        CapacityTracker::default()
    }

    /// `true` iff every turn the edge spans still has spare capacity.
    pub fn can_use(&self, edge: &TimeEdge, graph: &TimeGraph) -> bool {
        let start_turn = graph.turn_of(edge.source);
        (start_turn..start_turn + edge.duration).all(|tau| {
            self.edge_use
                .get(&(edge.source, edge.target, tau))
                .copied()
                .unwrap_or(0)
                < edge.max_capacity
        })
    }

    /// `true` iff `node` still has spare hub capacity. Callers are
    /// responsible for the START-at-turn-0 exception (§4.3); this method
    /// always applies the raw check.
    pub fn can_enter(&self, node: TimeNodeId, max_drones: Capacity) -> bool {
        self.node_use.get(&node).copied().unwrap_or(0) < max_drones
    }

    /// Reserves every edge and node along `path`, skipping the node
    /// reservation for the very first entry (the START node at turn 0,
    /// per §4.3's exception).
    pub fn reserve(&mut self, path: &[TimeNodeId], graph: &TimeGraph) {
        for window in path.windows(2) {
            let (source, target) = (window[0], window[1]);
            let edge = graph
                .adjacency(source)
                .iter()
                .find(|e| e.target == target)
                .expect("reserve() called with a path containing a non-existent edge");

            let start_turn = graph.turn_of(source);
            for tau in start_turn..start_turn + edge.duration {
                *self.edge_use.entry((source, target, tau)).or_insert(0) += 1;
            }
        }

        for (i, &node) in path.iter().enumerate() {
            if i == 0 {
                continue;
            }
            *self.node_use.entry(node).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{NodeCategory, SimulationMapBuilder, Zone};

    fn name(s: &str) -> model::HubName {
        model::HubName::from(s)
    }

    #[test]
    fn edge_capacity_is_enforced_per_arc() {
        let mut builder = SimulationMapBuilder::new();
        builder.set_nb_drones(2);
        let a = builder
            .add_hub(name("a"), 0, 0, 2, Zone::Normal, NodeCategory::Start, None)
            .unwrap();
        let b = builder
            .add_hub(name("b"), 1, 0, 2, Zone::Normal, NodeCategory::End, None)
            .unwrap();
        builder.add_connection(a, b, 1);
        let map = builder.build().unwrap();
        let graph = timegraph::build(&map, 2);

        let mut tracker = CapacityTracker::new();
        let source = graph.node_id(a, 0);
        let target = graph.node_id(b, 1);
        let edge = *graph
            .adjacency(source)
            .iter()
            .find(|e| e.target == target)
            .unwrap();

        assert!(tracker.can_use(&edge, &graph));
        tracker.reserve(&[source, target], &graph);
        assert!(!tracker.can_use(&edge, &graph));
    }

    #[test]
    fn restricted_edge_reserves_both_spanned_turns() {
        let mut builder = SimulationMapBuilder::new();
        builder.set_nb_drones(1);
        let a = builder
            .add_hub(name("a"), 0, 0, 1, Zone::Normal, NodeCategory::Start, None)
            .unwrap();
        let r = builder
            .add_hub(name("r"), 1, 0, 1, Zone::Restricted, NodeCategory::End, None)
            .unwrap();
        builder.add_connection(a, r, 1);
        let map = builder.build().unwrap();
        let graph = timegraph::build(&map, 2);

        let mut tracker = CapacityTracker::new();
        let source = graph.node_id(a, 0);
        let target = graph.node_id(r, 2);
        tracker.reserve(&[source, target], &graph);

        assert!(!tracker.can_enter(target, 1));
    }
}
