use thiserror::Error;

/// Failures produced while turning the §6 text format into a
/// [`model::SimulationMap`]. Every variant that names a line carries its
/// 1-based number, matching the `[ERROR] Line {n}: ...` convention the
/// original parser prints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot read input file {path:?}: {reason}")]
    Io { path: String, reason: String },

    #[error("line {line}: missing ':' separator")]
    MissingSeparator { line: usize },

    #[error("line {line}: unknown record type '{record}'")]
    UnknownRecordType { line: usize, record: String },

    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("line {line}: optional parameters must be enclosed in '[...]'")]
    MalformedOptionalBlock { line: usize },

    #[error("line {line}: invalid key=value pair '{pair}'")]
    MalformedKeyValue { line: usize, pair: String },

    #[error("line {line}: unknown parameter '{key}' for this record type")]
    UnknownParameter { line: usize, key: String },

    #[error("line {line}: invalid value '{value}' for parameter '{key}'")]
    InvalidParameterValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: name '{name}' must be non-empty and contain no spaces or '-'")]
    InvalidName { line: usize, name: String },

    #[error("nb_drones must appear before any hub or connection line (line {line})")]
    DroneCountNotYetDefined { line: usize },

    #[error("line {line}: nb_drones is already defined")]
    DuplicateDroneCount { line: usize },

    #[error("line {line}: hub '{name}' is already defined")]
    DuplicateHub { line: usize, name: String },

    #[error("line {line}: {category} hub is already defined")]
    DuplicateCategoryHub { line: usize, category: &'static str },

    #[error("line {line}: connection between '{source}' and '{target}' already exists")]
    DuplicateConnection {
        line: usize,
        source: String,
        target: String,
    },

    #[error("line {line}: connection must be between two different hubs")]
    SelfLoopConnection { line: usize },

    #[error("line {line}: hub '{name}' referenced by a connection is not defined")]
    UndefinedHub { line: usize, name: String },

    #[error(transparent)]
    Structural(#[from] model::ScheduleError),
}
