pub mod dijkstra;
pub mod scheduler;
pub mod tracker;

pub use dijkstra::DronePath;
pub use scheduler::{emit_turns, solve_all, FleetSchedule};
pub use tracker::CapacityTracker;

use model::{RunConfig, ScheduleError, ScheduleResult, SimulationMap, Turn};

/// Everything the CLI front end needs about one completed run.
pub struct RunOutcome {
    pub lines: Vec<String>,
    pub nb_drones: u32,
    pub nb_delivered: usize,
    pub max_turns: Turn,
    /// Per-drone path length in turns, `None` for a drone that found no
    /// path (ascending drone id order, 1-based ids are `index + 1`).
    /// Surfaced for `RunConfig::verbose` diagnostics (§4.7).
    pub path_lengths: Vec<Option<Turn>>,
}

/// Schedules every drone in `map` and renders the per-turn movement lines.
///
/// `config.max_turns_override` bypasses the horizon estimator entirely
/// (useful for tests and for forcing a tighter or looser horizon); without
/// it, the horizon comes from [`timegraph::estimate_max_time`] and a map
/// whose END hub is unreachable from START is rejected up front rather than
/// producing an empty schedule.
pub fn run(map: &SimulationMap, config: &RunConfig) -> ScheduleResult<RunOutcome> {
    let max_turns = match config.max_turns_override {
        Some(t) => t,
        None => timegraph::estimate_max_time(map).ok_or(ScheduleError::Unreachable)?,
    };

    let graph = timegraph::build(map, max_turns);
    let schedule = scheduler::solve_all(&graph, map.nb_drones());
    let lines = scheduler::emit_turns(&graph, &schedule);
    let nb_delivered = schedule.nb_delivered();
    let path_lengths = schedule
        .paths()
        .iter()
        .map(|p| p.as_ref().map(|path| graph.turn_of(*path.last().unwrap())))
        .collect();

    Ok(RunOutcome {
        lines,
        nb_drones: map.nb_drones(),
        nb_delivered,
        max_turns,
        path_lengths,
    })
}
