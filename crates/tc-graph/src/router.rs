//! All-pairs shortest paths over [`Graph`].
//!
//! # Build
//!
//! One Dijkstra run per source vertex fills the table.  Weights are
//! non-negative minutes, so Dijkstra is exact; ties between equal-weight
//! paths break on vertex order, which keeps rebuilds deterministic.
//!
//! # Extraction
//!
//! [`Router::route`] walks `prev_edge` links backwards from the target and
//! reverses.  It needs the graph only to map an edge ID back to its source
//! vertex, so the router itself stores nothing but the table — exactly the
//! shape the snapshot persists.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tc_core::{EdgeId, VertexId};

use crate::graph::Graph;

// ── Table ─────────────────────────────────────────────────────────────────────

/// One reachable `(source, target)` pair: accumulated weight plus the last
/// edge on a shortest path.  `prev_edge` is `None` only on the diagonal.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteEntry {
    pub weight: f64,
    pub prev_edge: Option<EdgeId>,
}

/// Per-source rows of optional entries; `None` marks an unreachable target.
pub type RouteTable = Vec<Vec<Option<RouteEntry>>>;

/// An extracted route: total weight and the edge IDs in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Precomputed all-pairs shortest-path table.
pub struct Router {
    table: RouteTable,
}

impl Router {
    /// Run the all-pairs precomputation for `graph`.
    pub fn build(graph: &Graph) -> Self {
        let table = (0..graph.vertex_count())
            .map(|s| dijkstra(graph, VertexId(s as u32)))
            .collect();
        log::debug!(
            "router table built for {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Self { table }
    }

    /// Install a previously computed table without rebuilding.
    pub fn from_table(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Extract the shortest route `from → to`, or `None` if unreachable.
    ///
    /// `from == to` yields an empty edge list with weight 0.
    pub fn route(&self, graph: &Graph, from: VertexId, to: VertexId) -> Option<RoutePlan> {
        let entry = self.table[from.index()][to.index()]?;

        let mut edges = Vec::new();
        let mut cursor = to;
        while let Some(edge) = self.table[from.index()][cursor.index()].and_then(|e| e.prev_edge) {
            edges.push(edge);
            cursor = graph.edge(edge).from;
        }
        edges.reverse();

        Some(RoutePlan { weight: entry.weight, edges })
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered by weight, then vertex for deterministic ties.
/// Weights are finite and non-negative, so `total_cmp` is a true order.
#[derive(Copy, Clone, PartialEq)]
struct QueueEntry {
    weight: f64,
    vertex: VertexId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths from `source`; returns one table row.
fn dijkstra(graph: &Graph, source: VertexId) -> Vec<Option<RouteEntry>> {
    let mut row: Vec<Option<RouteEntry>> = vec![None; graph.vertex_count()];
    row[source.index()] = Some(RouteEntry { weight: 0.0, prev_edge: None });

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(QueueEntry { weight: 0.0, vertex: source }));

    while let Some(Reverse(QueueEntry { weight, vertex })) = heap.pop() {
        // Skip stale heap entries.
        match row[vertex.index()] {
            Some(entry) if entry.weight < weight => continue,
            _ => {}
        }

        for edge_id in graph.incident_from(vertex) {
            let edge = graph.edge(edge_id);
            let candidate = weight + edge.weight;
            let current = row[edge.to.index()].map(|e| e.weight);
            if current.is_none_or(|w| candidate < w) {
                row[edge.to.index()] =
                    Some(RouteEntry { weight: candidate, prev_edge: Some(edge_id) });
                heap.push(Reverse(QueueEntry { weight: candidate, vertex: edge.to }));
            }
        }
    }

    row
}
