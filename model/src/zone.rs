use std::fmt;

/// Per-hub attribute governing accessibility and traversal cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Normal,
    Blocked,
    Restricted,
    Priority,
}

impl Zone {
    /// Number of turns spent in flight while arriving at a hub of this zone.
    pub fn arrival_duration(self) -> u32 {
        match self {
            Zone::Restricted => 2,
            _ => 1,
        }
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, Zone::Blocked)
    }

    pub fn is_priority(self) -> bool {
        matches!(self, Zone::Priority)
    }

    pub fn is_restricted(self) -> bool {
        matches!(self, Zone::Restricted)
    }

    pub fn parse(raw: &str) -> Option<Zone> {
        match raw {
            "normal" => Some(Zone::Normal),
            "blocked" => Some(Zone::Blocked),
            "restricted" => Some(Zone::Restricted),
            "priority" => Some(Zone::Priority),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Zone::Normal => "normal",
            Zone::Blocked => "blocked",
            Zone::Restricted => "restricted",
            Zone::Priority => "priority",
        };
        write!(f, "{}", s)
    }
}

/// Role a hub plays in the simulation: exactly one hub is `Start`, exactly
/// one is `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Start,
    End,
    Intermediate,
}

impl NodeCategory {
    pub fn is_start(self) -> bool {
        matches!(self, NodeCategory::Start)
    }

    pub fn is_end(self) -> bool {
        matches!(self, NodeCategory::End)
    }
}
