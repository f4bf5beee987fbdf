use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use timegraph::{TimeGraph, TimeNodeId};

use crate::tracker::CapacityTracker;

/// A single drone's assigned route through the time-expanded graph, from
/// `(start, 0)` to `(end, t_end)`.
pub type DronePath = Vec<TimeNodeId>;

/// One-drone Dijkstra over the time-expanded graph, respecting `tracker`.
///
/// Cost key is `(turns, -priority_count)` compared lexicographically:
/// minimize total duration first, then maximize the count of visited
/// `PRIORITY` hubs. Ties beyond that are broken by insertion order, so the
/// result is deterministic for a fixed graph and tracker state (§5).
///
/// Does not mutate `tracker` — reservation is the fleet scheduler's job.
pub fn solve_for(graph: &TimeGraph, tracker: &CapacityTracker, start: TimeNodeId) -> Option<DronePath> {
    let start_priority = priority_bonus(graph, start);

    let mut best: HashMap<TimeNodeId, (u32, i32)> = HashMap::new();
    best.insert(start, (0, -start_priority));

    let mut parents: HashMap<TimeNodeId, TimeNodeId> = HashMap::new();
    let mut visited: HashSet<TimeNodeId> = HashSet::new();

    let mut heap: BinaryHeap<Reverse<(u32, i32, u64, TimeNodeId)>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    heap.push(Reverse((0, -start_priority, seq, start)));

    while let Some(Reverse((turns, neg_priority, _, node))) = heap.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node);

        if graph.map().hub(graph.hub_of(node)).category().is_end() {
            return Some(reconstruct_path(&parents, node));
        }

        let current_priority = -neg_priority;

        for edge in graph.adjacency(node) {
            let neighbor = edge.target;
            if visited.contains(&neighbor) {
                continue;
            }
            if !tracker.can_use(edge, graph) {
                continue;
            }

            let is_start_at_zero = neighbor == graph.start_node();
            if !is_start_at_zero {
                let max_drones = graph.map().hub(graph.hub_of(neighbor)).max_drones();
                if !tracker.can_enter(neighbor, max_drones) {
                    continue;
                }
            }

            let new_turns = turns + edge.duration;
            let new_priority = current_priority + priority_bonus(graph, neighbor);
            let candidate = (new_turns, -new_priority);

            let is_better = match best.get(&neighbor) {
                None => true,
                Some(&recorded) => candidate < recorded,
            };

            if is_better {
                best.insert(neighbor, candidate);
                parents.insert(neighbor, node);
                seq += 1;
                heap.push(Reverse((new_turns, -new_priority, seq, neighbor)));
            }
        }
    }

    None
}

fn priority_bonus(graph: &TimeGraph, node: TimeNodeId) -> i32 {
    if graph.map().hub(graph.hub_of(node)).zone().is_priority() {
        1
    } else {
        0
    }
}

fn reconstruct_path(parents: &HashMap<TimeNodeId, TimeNodeId>, end: TimeNodeId) -> DronePath {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
