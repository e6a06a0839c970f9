//! `tc-core` — foundational types for the transport-catalogue engine.
//!
//! This crate is a dependency of every other `tc-*` crate.  It intentionally
//! has no `tc-*` dependencies and a single external one (`serde`, for the
//! binary snapshot).
//!
//! # What lives here
//!
//! | Module   | Contents                                      |
//! |----------|-----------------------------------------------|
//! | [`ids`]  | `StopId`, `BusId`, `VertexId`, `EdgeId`       |
//! | [`geo`]  | `GeoPoint`, great-circle distance             |

pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId, VertexId};
