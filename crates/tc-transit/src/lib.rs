//! `tc-transit` — fastest-itinerary queries over the catalogue.
//!
//! # The dual-vertex construction
//!
//! Every stop owns two graph vertices: *wait-begin* (a passenger standing at
//! the stop) and *wait-end* (a passenger who has finished waiting and may
//! board).  The only edge into riding is the wait edge
//! `wait_begin → wait_end`, weighted by the configured wait time; every bus
//! edge leaves a `wait_end` and enters the destination's `wait_begin`.
//! Transferring between buses therefore costs exactly one wait, and a
//! journey always starts with one.
//!
//! Bus edges are added for every ordered pair of positions along a line's
//! route (both directions independently for non-cyclic lines), with the
//! cumulative road distance converted to minutes at the configured velocity.
//! That is O(L²) edges per direction for a route of length L — deliberate:
//! it lets a single edge represent "stay seated across k hops", which keeps
//! extraction trivial and spans exact.

pub mod router;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use router::{EdgeLabel, Itinerary, RoutingSettings, StopVertices, TransitRouter};
