//! End-to-end checks for the six worked scenarios of spec §8 (S1-S6),
//! run through the full pipeline: a map file's text, parsed by
//! `mapparser`, scheduled by `solver`, rendered by `emit_turns`.

use model::RunConfig;

fn run_map(map_text: &str) -> Result<solver::RunOutcome, fleetpath::RunError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    use std::io::Write;
    write!(file, "{}", map_text).unwrap();
    fleetpath::run_from_file(file.path(), &RunConfig::default())
}

#[test]
fn s1_linear_two_drones_share_a_single_lane() {
    let outcome = run_map(
        "nb_drones: 2\n\
         start_hub: start 0 0\n\
         hub: wp 5 5\n\
         end_hub: end 10 10\n\
         connection: start-wp\n\
         connection: wp-end\n",
    )
    .unwrap();

    assert_eq!(outcome.lines, vec!["D1-wp", "D1-end D2-wp", "D2-end"]);
}

#[test]
fn s2_blocked_hub_forces_a_detour() {
    let outcome = run_map(
        "nb_drones: 1\n\
         start_hub: start 0 0\n\
         hub: mid 1 0 [zone=blocked]\n\
         hub: alt 1 1\n\
         end_hub: end 2 0\n\
         connection: start-mid\n\
         connection: start-alt\n\
         connection: alt-end\n\
         connection: mid-end\n",
    )
    .unwrap();

    assert_eq!(outcome.lines, vec!["D1-alt", "D1-end"]);
}

#[test]
fn s3_restricted_hub_takes_two_turns_and_duplicates_the_line() {
    let outcome = run_map(
        "nb_drones: 1\n\
         start_hub: start 0 0\n\
         hub: r 1 0 [zone=restricted]\n\
         end_hub: end 2 0\n\
         connection: start-r\n\
         connection: r-end\n",
    )
    .unwrap();

    assert_eq!(
        outcome.lines,
        vec!["D1-start-r", "D1-start-r", "D1-end"]
    );
}

#[test]
fn s4_capacity_bottleneck_staggers_three_drones() {
    let outcome = run_map(
        "nb_drones: 3\n\
         start_hub: start 0 0\n\
         hub: m 1 0\n\
         end_hub: end 2 0\n\
         connection: start-m [max_link_capacity=1]\n\
         connection: m-end [max_link_capacity=1]\n",
    )
    .unwrap();

    // drone 1 arrives turn 2, drone 2 turn 3, drone 3 turn 4 (1-indexed
    // line list, so arrivals land on lines[1], lines[2], lines[3]).
    assert_eq!(outcome.path_lengths, vec![Some(2), Some(3), Some(4)]);
    assert_eq!(outcome.nb_delivered, 3);
}

#[test]
fn s5_priority_tie_break_prefers_the_priority_hub() {
    let outcome = run_map(
        "nb_drones: 1\n\
         start_hub: start 0 0\n\
         hub: a 1 0\n\
         hub: p 1 1 [zone=priority]\n\
         end_hub: end 2 0\n\
         connection: start-a\n\
         connection: a-end\n\
         connection: start-p\n\
         connection: p-end\n",
    )
    .unwrap();

    assert_eq!(outcome.lines, vec!["D1-p", "D1-end"]);
}

#[test]
fn s6_unreachable_end_is_a_structural_error() {
    let err = run_map(
        "nb_drones: 1\n\
         start_hub: start 0 0\n\
         end_hub: end 1 0\n",
    )
    .unwrap_err();

    assert!(matches!(
        err,
        fleetpath::RunError::Schedule(model::ScheduleError::Unreachable)
    ));
}
