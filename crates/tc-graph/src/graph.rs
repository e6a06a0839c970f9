//! Directed weighted multigraph with stable integer edge IDs.

use tc_core::{EdgeId, VertexId};

/// A directed edge with a non-negative weight in minutes.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Multigraph on a fixed set of vertices.
///
/// Parallel edges are allowed (the transit layer adds one bus edge per
/// stop pair per line); there is no edge removal.  Outgoing edges are kept
/// in per-vertex incidence lists so relaxation scans only a vertex's own
/// edges.
pub struct Graph {
    edges: Vec<Edge>,
    /// Outgoing edge IDs per vertex, parallel to the vertex range.
    incidence: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// Construct a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Append a directed edge and return its ID (sequential from 0).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { from, to, weight });
        self.incidence[from.index()].push(id);
        id
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterator over the IDs of all edges leaving `vertex`.
    #[inline]
    pub fn incident_from(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[vertex.index()].iter().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
