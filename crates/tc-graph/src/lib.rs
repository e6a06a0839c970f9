//! `tc-graph` — the routing graph and its precomputed shortest paths.
//!
//! # Data layout
//!
//! [`Graph`] is a directed weighted multigraph with a fixed vertex count and
//! append-only edges.  Edge IDs are positions in insertion order, which is
//! what the snapshot format relies on: serializing the edge list and
//! replaying it through [`Graph::add_edge`] reproduces identical IDs.
//!
//! [`Router`] holds the all-pairs shortest-path table: one row per source
//! vertex, one optional `{weight, prev_edge}` entry per target.  The table
//! is built once per catalogue (one Dijkstra run per source) and persisted,
//! so the serve phase only ever walks predecessor edges.

pub mod graph;
pub mod router;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use graph::{Edge, Graph};
pub use router::{RouteEntry, RoutePlan, RouteTable, Router};
