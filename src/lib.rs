//! Glue between the map parser (`mapparser`) and the scheduling core
//! (`model` + `timegraph` + `solver`), wired the way the CLI front end
//! needs it: read a file, schedule the fleet, hand back rendered lines.

use std::path::Path;

use mapparser::ParseError;
use model::RunConfig;
use solver::RunOutcome;

/// Every way a run can fail, distinguished so the CLI can map each to its
/// own exit code (§4.7).
#[derive(Debug)]
pub enum RunError {
    Parse(ParseError),
    Schedule(model::ScheduleError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::Parse(e) => write!(f, "{}", e),
            RunError::Schedule(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ParseError> for RunError {
    fn from(e: ParseError) -> Self {
        RunError::Parse(e)
    }
}

impl From<model::ScheduleError> for RunError {
    fn from(e: model::ScheduleError) -> Self {
        RunError::Schedule(e)
    }
}

/// Parses `path` and schedules the fleet it describes.
pub fn run_from_file(path: &Path, config: &RunConfig) -> Result<RunOutcome, RunError> {
    let map = mapparser::parse_map(path)?;
    let outcome = solver::run(&map, config)?;
    Ok(outcome)
}
