//! Transit router: graph construction, edge labelling, itinerary queries.

use serde::{Deserialize, Serialize};

use tc_catalogue::Catalogue;
use tc_core::{BusId, StopId, VertexId};
use tc_graph::{Graph, RouteTable, Router};

// ── Settings ──────────────────────────────────────────────────────────────────

/// User-facing routing parameters, fixed at build time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes a passenger waits at a stop before any boarding.
    pub bus_wait_time: f64,
    /// Assumed bus velocity in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Ride time in minutes for `meters` of road at the configured velocity.
    #[inline]
    fn ride_minutes(&self, meters: u64) -> f64 {
        meters as f64 / (self.bus_velocity * 1000.0 / 60.0)
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// What a graph edge means to a passenger.  Recorded at construction,
/// indexed by `EdgeId`, and mapped back onto extracted edge sequences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EdgeLabel {
    /// Waiting at a stop before boarding.
    Wait { stop: StopId, time: f64 },
    /// Riding a bus across `span_count` consecutive hops.
    Bus { bus: BusId, span_count: usize, time: f64 },
}

/// The two vertices owned by a stop.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopVertices {
    pub wait_begin: VertexId,
    pub wait_end: VertexId,
}

/// A fastest-journey answer: total minutes plus the labelled steps in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    pub total_time: f64,
    pub steps: Vec<EdgeLabel>,
}

// ── TransitRouter ─────────────────────────────────────────────────────────────

/// The routing layer over a fully-populated [`Catalogue`].
///
/// Owns the graph, the all-pairs router, the per-stop vertex pairs, and the
/// per-edge labels.  All four are persisted in the snapshot and reassembled
/// with [`TransitRouter::from_parts`], which skips the precomputation.
pub struct TransitRouter {
    settings: RoutingSettings,
    graph: Graph,
    router: Router,
    /// Vertex pair per stop, indexed by `StopId`.
    stop_vertices: Vec<StopVertices>,
    /// Label per edge, indexed by `EdgeId`.
    labels: Vec<EdgeLabel>,
}

impl TransitRouter {
    /// Build the wait/ride graph for `catalogue` and precompute all-pairs
    /// shortest paths.
    pub fn build(catalogue: &Catalogue, settings: RoutingSettings) -> Self {
        let mut graph = Graph::new(2 * catalogue.stop_count());
        let mut labels = Vec::new();

        // Vertex pairs in stop insertion order: stop i owns (2i, 2i + 1).
        let stop_vertices: Vec<StopVertices> = (0..catalogue.stop_count() as u32)
            .map(|i| StopVertices {
                wait_begin: VertexId(2 * i),
                wait_end: VertexId(2 * i + 1),
            })
            .collect();

        for (i, pair) in stop_vertices.iter().enumerate() {
            graph.add_edge(pair.wait_begin, pair.wait_end, settings.bus_wait_time);
            labels.push(EdgeLabel::Wait {
                stop: StopId(i as u32),
                time: settings.bus_wait_time,
            });
        }

        for (i, bus) in catalogue.buses().iter().enumerate() {
            let bus_id = BusId(i as u32);
            add_ride_edges(&mut graph, &mut labels, catalogue, &settings, &stop_vertices, bus_id, &bus.route);
            if !bus.is_cyclic {
                let reversed: Vec<StopId> = bus.route.iter().rev().copied().collect();
                add_ride_edges(&mut graph, &mut labels, catalogue, &settings, &stop_vertices, bus_id, &reversed);
            }
        }

        log::info!(
            "transit graph: {} vertices, {} edges for {} stops / {} buses",
            graph.vertex_count(),
            graph.edge_count(),
            catalogue.stop_count(),
            catalogue.bus_count()
        );

        let router = Router::build(&graph);
        Self { settings, graph, router, stop_vertices, labels }
    }

    /// Reassemble a router from snapshot parts, installing the persisted
    /// table instead of rebuilding it.
    pub fn from_parts(
        settings: RoutingSettings,
        graph: Graph,
        table: RouteTable,
        stop_vertices: Vec<StopVertices>,
        labels: Vec<EdgeLabel>,
    ) -> Self {
        Self {
            settings,
            graph,
            router: Router::from_table(table),
            stop_vertices,
            labels,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The vertex pair owned by `stop`, if the graph covers it.
    pub fn vertex_ids_for(&self, stop: StopId) -> Option<StopVertices> {
        self.stop_vertices.get(stop.index()).copied()
    }

    /// Fastest itinerary between two stops, or `None` if unreachable.
    ///
    /// Runs wait-begin to wait-begin, so arriving back at a stop includes
    /// its final wait — except for `from == to`, which is an empty journey.
    pub fn route(&self, from: StopId, to: StopId) -> Option<Itinerary> {
        let from = self.vertex_ids_for(from)?.wait_begin;
        let to = self.vertex_ids_for(to)?.wait_begin;
        let plan = self.router.route(&self.graph, from, to)?;

        let steps = plan
            .edges
            .iter()
            .map(|&edge| self.labels[edge.index()].clone())
            .collect();
        Some(Itinerary { total_time: plan.weight, steps })
    }

    // ── Accessors (snapshot writer) ───────────────────────────────────────

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn table(&self) -> &RouteTable {
        self.router.table()
    }

    pub fn stop_vertices(&self) -> &[StopVertices] {
        &self.stop_vertices
    }

    pub fn labels(&self) -> &[EdgeLabel] {
        &self.labels
    }
}

/// Add one ride edge per ordered pair of positions along `route`, each
/// weighted by the cumulative road distance from the boarding stop.
fn add_ride_edges(
    graph: &mut Graph,
    labels: &mut Vec<EdgeLabel>,
    catalogue: &Catalogue,
    settings: &RoutingSettings,
    stop_vertices: &[StopVertices],
    bus: BusId,
    route: &[StopId],
) {
    for i in 0..route.len() {
        let mut meters = 0;
        for j in i + 1..route.len() {
            meters += catalogue.road_distance(route[j - 1], route[j]);
            let time = settings.ride_minutes(meters);
            graph.add_edge(
                stop_vertices[route[i].index()].wait_end,
                stop_vertices[route[j].index()].wait_begin,
                time,
            );
            labels.push(EdgeLabel::Bus { bus, span_count: j - i, time });
        }
    }
}
