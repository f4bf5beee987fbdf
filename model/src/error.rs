use thiserror::Error;

/// Structural failures detected before the scheduler is allowed to run:
/// malformed preconditions on an otherwise syntactically valid map.
///
/// These are distinct from [`mapparser::ParseError`](../mapparser/enum.ParseError.html),
/// which covers malformed *input*; a `ScheduleError` means the map parsed
/// fine but cannot be scheduled at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("nb_drones was never set")]
    MissingDroneCount,

    #[error("map has no start hub")]
    MissingStartHub,

    #[error("map has no end hub")]
    MissingEndHub,

    #[error("start and end hub must be distinct")]
    StartEqualsEnd,

    #[error("start hub capacity {capacity} is lower than the fleet size {nb_drones}")]
    StartCapacityTooLow { capacity: u32, nb_drones: u32 },

    #[error("end hub capacity {capacity} is lower than the fleet size {nb_drones}")]
    EndCapacityTooLow { capacity: u32, nb_drones: u32 },

    #[error("no path from start to end hub exists")]
    Unreachable,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
