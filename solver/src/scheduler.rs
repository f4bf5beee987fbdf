use model::Turn;
use timegraph::{TimeGraph, TimeNodeId};

use crate::dijkstra::{self, DronePath};
use crate::tracker::CapacityTracker;

/// Outcome of scheduling one fleet: one slot per drone, in ascending drone
/// id order (drone `k` is `paths[k - 1]`). `None` means that drone never
/// found a path under the reservations left by the drones solved before it.
pub struct FleetSchedule {
    paths: Vec<Option<DronePath>>,
}

impl FleetSchedule {
    pub fn paths(&self) -> &[Option<DronePath>] {
        &self.paths
    }

    pub fn nb_delivered(&self) -> usize {
        self.paths.iter().filter(|p| p.is_some()).count()
    }
}

/// Greedy per-drone scheduler (§5): solves drones in ascending id order,
/// reserving each accepted path before solving the next. A drone that finds
/// no path is recorded as a failure and does not block the drones after it.
pub fn solve_all(graph: &TimeGraph, nb_drones: u32) -> FleetSchedule {
    let mut tracker = CapacityTracker::new();
    let start = graph.start_node();

    let mut paths = Vec::with_capacity(nb_drones as usize);
    for _ in 0..nb_drones {
        match dijkstra::solve_for(graph, &tracker, start) {
            Some(path) => {
                tracker.reserve(&path, graph);
                paths.push(Some(path));
            }
            None => paths.push(None),
        }
    }

    FleetSchedule { paths }
}

/// Renders a fleet schedule into the per-turn movement lines described in
/// §4.5: one line per turn in `[0, t_last)` that has at least one drone
/// movement, empty turns are skipped entirely.
///
/// A drone's line for a turn is:
/// - nothing, if it is waiting at a hub (the next path node is the same hub)
/// - `D{id}-{hub}` if it arrives at `hub` on a 1-turn edge
/// - `D{id}-{source}-{target}` if it is departing on, or still mid-flight
///   on, a 2-turn edge into a `RESTRICTED` hub (emitted on both turns the
///   edge spans, per the accepted duplicate-line behavior)
pub fn emit_turns(graph: &TimeGraph, schedule: &FleetSchedule) -> Vec<String> {
    let drones: Vec<(u32, &DronePath)> = schedule
        .paths
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.as_ref().map(|path| ((i + 1) as u32, path)))
        .collect();

    let t_last = match drones.iter().map(|(_, p)| graph.turn_of(*p.last().unwrap())).max() {
        Some(t) => t,
        None => return Vec::new(),
    };

    let mut lines = Vec::new();

    for t in 0..t_last {
        let mut movements = Vec::new();

        for &(id, path) in &drones {
            let current_index = path.iter().position(|&n| graph.turn_of(n) == t);
            let current_index = match current_index {
                Some(i) => i,
                None => {
                    if let Some(crossing) = in_flight_restricted_crossing(graph, path, t) {
                        movements.push(format!("D{}-{}", id, crossing));
                    }
                    continue;
                }
            };

            let current_node = path[current_index];
            let next_node = match path.get(current_index + 1) {
                Some(&n) => n,
                None => continue,
            };

            let current_hub = graph.hub_of(current_node);
            let next_hub = graph.hub_of(next_node);
            if next_hub == current_hub {
                continue;
            }

            let next_hub_ref = graph.map().hub(next_hub);
            if next_hub_ref.zone().is_restricted() {
                let source_name = graph.map().hub(current_hub).name();
                movements.push(format!("D{}-{}-{}", id, source_name, next_hub_ref.name()));
            } else {
                movements.push(format!("D{}-{}", id, next_hub_ref.name()));
            }
        }

        if !movements.is_empty() {
            lines.push(movements.join(" "));
        }
    }

    lines
}

/// If `t` falls strictly between two consecutive path nodes and the later
/// one is `RESTRICTED`, the drone is mid-flight on that arrival edge.
fn in_flight_restricted_crossing(graph: &TimeGraph, path: &[TimeNodeId], t: Turn) -> Option<String> {
    for pair in path.windows(2) {
        let (source, target) = (pair[0], pair[1]);
        let (source_turn, target_turn) = (graph.turn_of(source), graph.turn_of(target));
        if source_turn < t && t < target_turn {
            let target_hub = graph.map().hub(graph.hub_of(target));
            if target_hub.zone().is_restricted() {
                let source_hub = graph.map().hub(graph.hub_of(source));
                return Some(format!("{}-{}", source_hub.name(), target_hub.name()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{NodeCategory, SimulationMapBuilder, Zone};

    fn name(s: &str) -> model::HubName {
        model::HubName::from(s)
    }

    #[test]
    fn two_drones_share_a_single_lane_one_after_another() {
        let mut builder = SimulationMapBuilder::new();
        builder.set_nb_drones(2);
        let start = builder
            .add_hub(name("start"), 0, 0, 2, Zone::Normal, NodeCategory::Start, None)
            .unwrap();
        let end = builder
            .add_hub(name("end"), 1, 0, 2, Zone::Normal, NodeCategory::End, None)
            .unwrap();
        builder.add_connection(start, end, 1);
        let map = builder.build().unwrap();
        let graph = timegraph::build(&map, 2);

        let schedule = solve_all(&graph, 2);
        assert_eq!(schedule.nb_delivered(), 2);

        let lines = emit_turns(&graph, &schedule);
        assert_eq!(lines, vec!["D1-end", "D2-end"]);
    }

    #[test]
    fn restricted_arrival_is_emitted_on_both_turns_it_spans() {
        let mut builder = SimulationMapBuilder::new();
        builder.set_nb_drones(1);
        let start = builder
            .add_hub(name("start"), 0, 0, 1, Zone::Normal, NodeCategory::Start, None)
            .unwrap();
        let end = builder
            .add_hub(name("end"), 1, 0, 1, Zone::Restricted, NodeCategory::End, None)
            .unwrap();
        builder.add_connection(start, end, 1);
        let map = builder.build().unwrap();
        let graph = timegraph::build(&map, 2);

        let schedule = solve_all(&graph, 1);
        let lines = emit_turns(&graph, &schedule);
        assert_eq!(lines, vec!["D1-start-end", "D1-start-end"]);
    }

    #[test]
    fn undeliverable_drone_leaves_a_gap_in_the_schedule() {
        let mut builder = SimulationMapBuilder::new();
        builder.set_nb_drones(2);
        let start = builder
            .add_hub(name("start"), 0, 0, 2, Zone::Normal, NodeCategory::Start, None)
            .unwrap();
        let end = builder
            .add_hub(name("end"), 1, 0, 2, Zone::Normal, NodeCategory::End, None)
            .unwrap();
        builder.add_connection(start, end, 1);
        let map = builder.build().unwrap();
        let graph = timegraph::build(&map, 1);

        let schedule = solve_all(&graph, 2);
        assert_eq!(schedule.nb_delivered(), 1);
        assert!(schedule.paths()[0].is_some());
        assert!(schedule.paths()[1].is_none());
    }
}
