//! Catalogue storage and derived statistics.
//!
//! # Data layout
//!
//! Stops and buses live in plain `Vec`s indexed by [`StopId`]/[`BusId`];
//! name→id maps provide O(1) lookup for queries arriving by name.  The
//! per-stop incidence lists are kept parallel to `stops` and updated on every
//! `add_bus`, so `stop_info` is a slice borrow rather than a scan.
//!
//! The road-distance table is an `FxHashMap` keyed on the ordered
//! `(StopId, StopId)` pair.  Entries are directional; [`Catalogue::road_distance`]
//! falls back to the reverse pair when the requested direction is absent.

use rustc_hash::FxHashMap;

use tc_core::{BusId, GeoPoint, StopId};

use crate::error::{CatalogueError, CatalogueResult};

// ── Entities ──────────────────────────────────────────────────────────────────

/// A named geographic point served by zero or more buses.
#[derive(Clone, Debug)]
pub struct Stop {
    pub name: String,
    pub position: GeoPoint,
}

/// A named transit line with an ordered stop sequence.
///
/// For cyclic buses `route` is the whole loop (first stop repeated at the
/// end by the input convention).  For non-cyclic buses it is the one-way
/// listing; the vehicle runs there and back, so the effective route is
/// `route` followed by its reverse minus the pivot.
#[derive(Clone, Debug)]
pub struct Bus {
    pub name: String,
    pub is_cyclic: bool,
    pub route: Vec<StopId>,
}

/// Derived per-bus route statistics.  Computed on demand during the build
/// phase and persisted verbatim in the snapshot, so the serve phase never
/// needs the distance table.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BusStat {
    /// Stops along the effective route, repeats included.
    pub stop_count: usize,
    /// Distinct stops along the effective route.
    pub unique_stop_count: usize,
    /// Road length of the effective route in metres.
    pub route_length: u64,
    /// Road length divided by geodesic length.
    pub curvature: f64,
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

/// Append-only store of stops, buses, and road distances.
#[derive(Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index: FxHashMap<String, BusId>,
    /// Incident buses per stop, parallel to `stops`.  Sorted and distinct:
    /// a bus is recorded once per stop no matter how often its route
    /// revisits it, and bus IDs only grow, so pushes preserve order.
    stop_buses: Vec<Vec<BusId>>,
    distances: FxHashMap<(StopId, StopId), u64>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingest ────────────────────────────────────────────────────────────

    /// Register a stop.  Fails if the name is already taken.
    pub fn add_stop(&mut self, name: &str, position: GeoPoint) -> CatalogueResult<StopId> {
        if self.stop_index.contains_key(name) {
            return Err(CatalogueError::DuplicateName(name.to_owned()));
        }
        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop { name: name.to_owned(), position });
        self.stop_buses.push(Vec::new());
        self.stop_index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Record the road distance in metres for the ordered pair `(from, to)`,
    /// overwriting any prior value for that pair.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u64) -> CatalogueResult<()> {
        let from = self.resolve_stop(from)?;
        let to = self.resolve_stop(to)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Register a bus line over already-registered stops.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        is_cyclic: bool,
        stops: &[S],
    ) -> CatalogueResult<BusId> {
        if self.bus_index.contains_key(name) {
            return Err(CatalogueError::DuplicateName(name.to_owned()));
        }
        let route = stops
            .iter()
            .map(|s| self.resolve_stop(s.as_ref()))
            .collect::<CatalogueResult<Vec<_>>>()?;

        let id = BusId(self.buses.len() as u32);
        for &stop in &route {
            let incident = &mut self.stop_buses[stop.index()];
            if incident.last() != Some(&id) {
                incident.push(id);
            }
        }
        self.buses.push(Bus { name: name.to_owned(), is_cyclic, route });
        self.bus_index.insert(name.to_owned(), id);
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn find_stop(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn find_bus(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Road distance in metres for `(from, to)`: the directional entry if
    /// present, else the reverse entry, else 0.
    pub fn road_distance(&self, from: StopId, to: StopId) -> u64 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// Buses whose route contains `stop`, sorted by insertion order.
    /// Empty if the stop exists but no bus serves it.
    pub fn stop_info(&self, stop: StopId) -> &[BusId] {
        &self.stop_buses[stop.index()]
    }

    // ── Derived statistics ────────────────────────────────────────────────

    /// Compute route statistics for `bus`.
    ///
    /// Non-cyclic buses traverse the listed stops there and back; the two
    /// directions sum their own road distances, and the geodesic length is
    /// doubled.  The road length of the return leg starts from the reflexive
    /// `(last, last)` entry, which is zero unless the input recorded one.
    pub fn bus_stat(&self, bus: BusId) -> BusStat {
        let bus = &self.buses[bus.index()];
        let route = &bus.route;
        let Some(&last) = route.last() else {
            return BusStat::default();
        };

        let stop_count = if bus.is_cyclic {
            route.len()
        } else {
            2 * route.len() - 1
        };

        let unique_stop_count = {
            let mut seen: Vec<StopId> = route.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len()
        };

        let mut route_length = if bus.is_cyclic {
            0
        } else {
            self.road_distance(last, last)
        };
        let mut geodesic_length = 0.0;

        for pair in route.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let leg = self.stop(prev).position.distance_m(self.stop(next).position);
            if bus.is_cyclic {
                geodesic_length += leg;
                route_length += self.road_distance(prev, next);
            } else {
                geodesic_length += 2.0 * leg;
                route_length +=
                    self.road_distance(prev, next) + self.road_distance(next, prev);
            }
        }

        BusStat {
            stop_count,
            unique_stop_count,
            route_length,
            curvature: route_length as f64 / geodesic_length,
        }
    }

    // ── Ordered listings ──────────────────────────────────────────────────

    /// All bus IDs in lexicographic name order.
    pub fn sorted_buses(&self) -> Vec<BusId> {
        let mut ids: Vec<BusId> = (0..self.buses.len() as u32).map(BusId).collect();
        ids.sort_by(|a, b| self.buses[a.index()].name.cmp(&self.buses[b.index()].name));
        ids
    }

    /// Stops served by at least one bus, in lexicographic name order.
    pub fn non_empty_sorted_stops(&self) -> Vec<StopId> {
        let mut ids: Vec<StopId> = (0..self.stops.len() as u32)
            .map(StopId)
            .filter(|id| !self.stop_buses[id.index()].is_empty())
            .collect();
        ids.sort_by(|a, b| self.stops[a.index()].name.cmp(&self.stops[b.index()].name));
        ids
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn resolve_stop(&self, name: &str) -> CatalogueResult<StopId> {
        self.find_stop(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }
}
