//! `tc-catalogue` — the in-memory transit database.
//!
//! The catalogue owns every stop and bus line, keyed by insertion-order
//! integer IDs, plus the asymmetric road-distance table.  Entities are
//! append-only: nothing is ever removed or renamed after ingest, so a
//! `StopId`/`BusId` handed out once stays valid for the catalogue's lifetime.
//!
//! Derived data — per-bus route statistics and per-stop incident-bus sets —
//! is computed by [`Catalogue::bus_stat`] and [`Catalogue::stop_info`].

pub mod catalogue;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalogue::{Bus, BusStat, Catalogue, Stop};
pub use error::{CatalogueError, CatalogueResult};
