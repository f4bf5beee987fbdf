use std::collections::{HashSet, VecDeque};

use model::{HubIndex, SimulationMap, Turn};

/// Plain FIFO BFS over the static hub graph, with a visited-on-pop check.
///
/// `BLOCKED` hubs are never enqueued. The cost of entering a hub is 2 if
/// it is `RESTRICTED`, else 1. This is not a true shortest-path search for
/// mixed 1/2 edge weights — a node can be popped with a larger accumulated
/// cost than its true distance if it is reached via a longer *hop count*
/// path before a shorter one is explored — but it yields an admissible
/// upper bound, which is all §4.1 requires of it (see `SPEC_FULL.md` for
/// why Dijkstra was deliberately not used here).
///
/// Returns `None` if no END hub is reachable from the start hub.
pub fn estimate_min_path_length(map: &SimulationMap) -> Option<u32> {
    let start = map.start();

    let mut visited: HashSet<HubIndex> = HashSet::new();
    let mut queue: VecDeque<(HubIndex, u32)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((current, cost_so_far)) = queue.pop_front() {
        if map.hub(current).category().is_end() {
            return Some(cost_so_far);
        }

        if visited.contains(&current) {
            continue;
        }
        visited.insert(current);

        for connection in map.connections_from(current) {
            let neighbor = connection.target();
            if visited.contains(&neighbor) {
                continue;
            }
            let neighbor_hub = map.hub(neighbor);
            if neighbor_hub.zone().is_blocked() {
                continue;
            }
            let cost = neighbor_hub.zone().arrival_duration();
            queue.push_back((neighbor, cost_so_far + cost));
        }
    }

    None
}

/// Upper bound on simulation length: `min_path + (nb_drones - 1)`.
///
/// In the worst case of a capacity-1 bottleneck, drones traverse it
/// single-file; drone *k* can arrive no later than the first drone's
/// arrival plus `k - 1` turns. Sizing the time-expanded graph to this
/// horizon guarantees it admits a valid schedule whenever one exists
/// under the greedy policy.
pub fn estimate_max_time(map: &SimulationMap) -> Option<Turn> {
    let min_path = estimate_min_path_length(map)?;
    Some(min_path + (map.nb_drones() - 1))
}
