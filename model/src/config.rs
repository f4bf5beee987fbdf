/// Ambient, non-algorithmic settings threaded through estimation, graph
/// building and solving, the way the teacher threads a plain `Config`
/// struct through its solver constructors instead of reading globals.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// When set, print extra diagnostics (estimated horizon, per-drone
    /// path lengths) to stderr.
    pub verbose: bool,
    /// Overrides the horizon computed by the reachability estimator.
    /// Intended for tests and for maps where the caller already knows a
    /// tighter bound suffices.
    pub max_turns_override: Option<u32>,
}

impl RunConfig {
    pub fn new(verbose: bool, max_turns_override: Option<u32>) -> RunConfig {
        RunConfig {
            verbose,
            max_turns_override,
        }
    }
}
