pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_map, parse_str};

#[cfg(test)]
mod tests {
    use super::*;
    use model::NodeCategory;

    #[test]
    fn parses_a_minimal_map() {
        let map = parse_str(
            "nb_drones: 2\n\
             start_hub: start 0 0\n\
             end_hub: end 1 1\n\
             connection: start-end [max_link_capacity=2]\n",
        )
        .unwrap();

        assert_eq!(map.nb_drones(), 2);
        assert_eq!(map.size(), 2);
        assert_eq!(
            map.connections_from(map.start())[0].max_link_capacity(),
            2
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let map = parse_str(
            "# full map\n\
             \n\
             nb_drones: 1\n\
             # a comment about the start hub\n\
             start_hub: start 0 0\n\
             end_hub: end 1 0\n\
             connection: start-end\n",
        )
        .unwrap();
        assert_eq!(map.nb_drones(), 1);
    }

    #[test]
    fn missing_separator_is_an_error() {
        let err = parse_str("nb_drones 1\n").unwrap_err();
        assert_eq!(err, ParseError::MissingSeparator { line: 1 });
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        let err = parse_str("nb_drones: 1\nbeacon: foo\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownRecordType {
                line: 2,
                record: "beacon".to_string()
            }
        );
    }

    #[test]
    fn hub_before_drone_count_is_rejected() {
        let err = parse_str("hub: a 0 0\nnb_drones: 1\n").unwrap_err();
        assert_eq!(err, ParseError::DroneCountNotYetDefined { line: 1 });
    }

    #[test]
    fn duplicate_hub_name_is_rejected() {
        let err = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             hub: a 1 1\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateHub {
                line: 3,
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn duplicate_start_hub_is_rejected() {
        let err = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             start_hub: b 1 1\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateCategoryHub {
                line: 3,
                category: "start"
            }
        );
    }

    #[test]
    fn self_loop_connection_is_rejected() {
        let err = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             end_hub: b 1 0\n\
             connection: a-a\n",
        )
        .unwrap_err();
        assert_eq!(err, ParseError::SelfLoopConnection { line: 4 });
    }

    #[test]
    fn connection_to_undefined_hub_is_rejected() {
        let err = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             end_hub: b 1 0\n\
             connection: a-ghost\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::UndefinedHub {
                line: 4,
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn duplicate_connection_in_either_direction_is_rejected() {
        let err = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             end_hub: b 1 0\n\
             connection: a-b\n\
             connection: b-a\n",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateConnection { line: 5, .. }));
    }

    #[test]
    fn hub_names_are_lowercased() {
        let map = parse_str(
            "nb_drones: 1\n\
             start_hub: Start 0 0\n\
             end_hub: End 1 0\n\
             connection: Start-End\n",
        )
        .unwrap();
        assert!(map.hub_by_name(model::HubName::from("start")).is_some());
    }

    #[test]
    fn zone_and_color_parameters_are_applied() {
        let map = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             hub: r 1 0 [zone=restricted color=red]\n\
             end_hub: b 2 0\n\
             connection: a-r\n\
             connection: r-b\n",
        )
        .unwrap();

        let r = map.hub_by_name(model::HubName::from("r")).unwrap();
        assert!(r.zone().is_restricted());
        assert_eq!(r.color(), Some("red"));
        assert_eq!(r.category(), NodeCategory::Intermediate);
    }

    #[test]
    fn unknown_hub_parameter_is_rejected() {
        let err = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0 [speed=5]\n\
             end_hub: b 1 0\n",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownParameter {
                line: 2,
                key: "speed".to_string()
            }
        );
    }

    #[test]
    fn start_and_end_default_max_drones_to_fleet_size() {
        let map = parse_str(
            "nb_drones: 4\n\
             start_hub: a 0 0\n\
             end_hub: b 1 0\n\
             connection: a-b\n",
        )
        .unwrap();
        assert_eq!(map.hub(map.start()).max_drones(), 4);
        assert_eq!(map.hub(map.end()).max_drones(), 4);
    }

    #[test]
    fn intermediate_hub_defaults_max_drones_to_one() {
        let map = parse_str(
            "nb_drones: 1\n\
             start_hub: a 0 0\n\
             hub: m 1 0\n\
             end_hub: b 2 0\n\
             connection: a-m\n\
             connection: m-b\n",
        )
        .unwrap();
        assert_eq!(
            map.hub_by_name(model::HubName::from("m")).unwrap().max_drones(),
            1
        );
    }

    #[test]
    fn missing_end_hub_is_a_structural_error() {
        let err = parse_str("nb_drones: 1\nstart_hub: a 0 0\n").unwrap_err();
        assert_eq!(err, ParseError::Structural(model::ScheduleError::MissingEndHub));
    }

    #[test]
    fn no_nb_drones_record_is_rejected() {
        let err = parse_str("start_hub: a 0 0\n").unwrap_err();
        assert_eq!(err, ParseError::DroneCountNotYetDefined { line: 1 });
    }

    #[test]
    fn empty_file_is_a_structural_error() {
        let err = parse_str("# nothing here\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::Structural(model::ScheduleError::MissingDroneCount)
        );
    }
}
