use std::path::PathBuf;
use std::process::ExitCode;

use fleetpath::RunError;
use mapparser::ParseError;
use model::RunConfig;

/// Exit codes, per §4.7: usage/parse errors are 1 (I/O-flavored parse
/// failures are 2, matching the distinction the original implementation
/// draws between a malformed file and an unreadable one), structural
/// errors are 3, success is 0.
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("usage: fleetpath_bin <map-file>");
            return ExitCode::from(1);
        }
    };
    let verbose = args.any(|a| a == "-v" || a == "--verbose");

    let config = RunConfig::new(verbose, None);

    match fleetpath::run_from_file(&path, &config) {
        Ok(outcome) => {
            if config.verbose {
                eprintln!("estimated horizon: {} turns", outcome.max_turns);
                for (i, length) in outcome.path_lengths.iter().enumerate() {
                    match length {
                        Some(turns) => eprintln!("drone {}: delivered in {} turns", i + 1, turns),
                        None => eprintln!("drone {}: no path found", i + 1),
                    }
                }
            }

            for line in &outcome.lines {
                println!("{}", line);
            }

            if outcome.nb_delivered < outcome.nb_drones as usize {
                let undelivered: Vec<String> = outcome
                    .path_lengths
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| l.is_none())
                    .map(|(i, _)| (i + 1).to_string())
                    .collect();
                eprintln!(
                    "warning: {}/{} drones delivered; undelivered drone ids: {}",
                    outcome.nb_delivered,
                    outcome.nb_drones,
                    undelivered.join(", ")
                );
            }

            ExitCode::from(0)
        }
        Err(RunError::Parse(ParseError::Io { path, reason })) => {
            eprintln!("error reading input file {:?}: {}", path, reason);
            ExitCode::from(2)
        }
        Err(RunError::Parse(ParseError::Structural(e))) => {
            eprintln!("error: {}", e);
            ExitCode::from(3)
        }
        Err(RunError::Parse(e)) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
        Err(RunError::Schedule(e)) => {
            eprintln!("error: {}", e);
            ExitCode::from(3)
        }
    }
}
