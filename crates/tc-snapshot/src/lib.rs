//! `tc-snapshot` — the on-disk boundary between the build and serve phases.
//!
//! The snapshot is one CBOR document carrying three views: the catalogue
//! (entities plus precomputed per-bus statistics), the renderer (settings
//! plus already-projected primitives), and the transit router (settings,
//! graph edge list, the all-pairs table, vertex pairs, edge labels).
//!
//! Entities are referenced exclusively by their insertion-order integer IDs.
//! [`Snapshot::restore_catalogue`] replays the stop and bus arrays in order,
//! and [`Snapshot::restore_transit`] replays the edge list, so every ID in
//! the persisted table and labels resolves to the same entity it named at
//! build time.  The distance table is deliberately absent: the serve phase
//! never recomputes statistics or edge weights.

pub mod error;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SnapshotError, SnapshotResult};
pub use model::{BusRecord, CatalogueView, RendererView, Snapshot, StopRecord, TransitView};
