use std::collections::HashMap;

use crate::base_types::{Capacity, HubIndex, HubName};
use crate::connection::Connection;
use crate::error::ScheduleError;
use crate::hub::Hub;
use crate::zone::NodeCategory;

/// Read-only input to the scheduling core: hubs, connections, and the
/// fleet size. Immutable once built.
///
/// Internally hubs live in a dense arena indexed by [`HubIndex`] rather
/// than being looked up by name; `connections` is adjacency-list shaped,
/// one `Vec<Connection>` of outgoing arcs per hub index, with both
/// directions of a link represented as distinct [`Connection`] values
/// (see the design note in `SPEC_FULL.md` on per-arc capacity counters).
pub struct SimulationMap {
    nb_drones: u32,
    hubs: Vec<Hub>,
    name_to_index: HashMap<HubName, HubIndex>,
    connections: Vec<Vec<Connection>>,
    start: HubIndex,
    end: HubIndex,
}

impl SimulationMap {
    pub fn nb_drones(&self) -> u32 {
        self.nb_drones
    }

    pub fn size(&self) -> usize {
        self.hubs.len()
    }

    pub fn hub(&self, index: HubIndex) -> &Hub {
        &self.hubs[index.index()]
    }

    pub fn hub_by_name(&self, name: HubName) -> Option<&Hub> {
        self.name_to_index.get(&name).map(|&idx| self.hub(idx))
    }

    pub fn hubs(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter()
    }

    pub fn start(&self) -> HubIndex {
        self.start
    }

    pub fn end(&self) -> HubIndex {
        self.end
    }

    /// Outgoing arcs from `hub`, i.e. both directions of every connection
    /// touching it.
    pub fn connections_from(&self, hub: HubIndex) -> &[Connection] {
        &self.connections[hub.index()]
    }
}

/// Incremental arena builder used by the map parser (and by tests) to
/// assemble a [`SimulationMap`] one record at a time.
#[derive(Default)]
pub struct SimulationMapBuilder {
    nb_drones: Option<u32>,
    hubs: Vec<Hub>,
    name_to_index: HashMap<HubName, HubIndex>,
    start: Option<HubIndex>,
    end: Option<HubIndex>,
    connections: Vec<Vec<Connection>>,
}

impl SimulationMapBuilder {
    pub fn new() -> Self {
        SimulationMapBuilder::default()
    }

    pub fn nb_drones(&self) -> Option<u32> {
        self.nb_drones
    }

    pub fn set_nb_drones(&mut self, nb_drones: u32) {
        self.nb_drones = Some(nb_drones);
    }

    pub fn hub_index(&self, name: HubName) -> Option<HubIndex> {
        self.name_to_index.get(&name).copied()
    }

    pub fn hubs_iter(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter()
    }

    /// Adds a hub. Returns `None` if the name is already taken (the caller
    /// is expected to turn that into a parser-level duplicate-name error).
    #[allow(clippy::too_many_arguments)]
    pub fn add_hub(
        &mut self,
        name: HubName,
        x: i32,
        y: i32,
        max_drones: Capacity,
        zone: crate::zone::Zone,
        category: NodeCategory,
        color: Option<String>,
    ) -> Option<HubIndex> {
        if self.name_to_index.contains_key(&name) {
            return None;
        }

        let index = HubIndex::new(self.hubs.len());
        self.hubs
            .push(Hub::new(index, name, x, y, max_drones, zone, category, color));
        self.connections.push(Vec::new());
        self.name_to_index.insert(name, index);

        if category.is_start() {
            self.start = Some(index);
        } else if category.is_end() {
            self.end = Some(index);
        }

        Some(index)
    }

    /// Returns `false` if the link already exists in either direction (the
    /// caller turns that into a parser-level duplicate-connection error).
    pub fn add_connection(
        &mut self,
        source: HubIndex,
        target: HubIndex,
        max_link_capacity: Capacity,
    ) -> bool {
        if self.connections[source.index()]
            .iter()
            .any(|c| c.target() == target)
        {
            return false;
        }

        self.connections[source.index()].push(Connection::new(source, target, max_link_capacity));
        self.connections[target.index()].push(Connection::new(target, source, max_link_capacity));
        true
    }

    /// Finalizes the map, checking the structural invariants of the
    /// scheduling core (as opposed to the parser's input-grammar checks):
    /// start/end exist and are distinct, and their capacity admits the
    /// whole fleet.
    pub fn build(self) -> Result<SimulationMap, ScheduleError> {
        let nb_drones = self.nb_drones.ok_or(ScheduleError::MissingDroneCount)?;
        let start = self.start.ok_or(ScheduleError::MissingStartHub)?;
        let end = self.end.ok_or(ScheduleError::MissingEndHub)?;

        if start == end {
            return Err(ScheduleError::StartEqualsEnd);
        }

        let start_hub = &self.hubs[start.index()];
        if start_hub.max_drones() < nb_drones {
            return Err(ScheduleError::StartCapacityTooLow {
                capacity: start_hub.max_drones(),
                nb_drones,
            });
        }

        let end_hub = &self.hubs[end.index()];
        if end_hub.max_drones() < nb_drones {
            return Err(ScheduleError::EndCapacityTooLow {
                capacity: end_hub.max_drones(),
                nb_drones,
            });
        }

        Ok(SimulationMap {
            nb_drones,
            hubs: self.hubs,
            name_to_index: self.name_to_index,
            connections: self.connections,
            start,
            end,
        })
    }
}
