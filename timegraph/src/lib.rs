pub mod estimator;
pub mod graph;

pub use estimator::{estimate_max_time, estimate_min_path_length};
pub use graph::{build, TimeEdge, TimeGraph, TimeNodeId};
