pub mod base_types;
pub mod config;
pub mod connection;
pub mod error;
pub mod hub;
pub mod simulation_map;
pub mod utilities;
pub mod zone;

pub use base_types::{Capacity, DroneId, HubIndex, HubName, Turn};
pub use config::RunConfig;
pub use connection::Connection;
pub use error::{ScheduleError, ScheduleResult};
pub use hub::Hub;
pub use simulation_map::{SimulationMap, SimulationMapBuilder};
pub use zone::{NodeCategory, Zone};
