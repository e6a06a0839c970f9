//! `tc-render` — the network map.
//!
//! Split along the build/serve boundary:
//!
//! - the build phase projects stop coordinates onto the canvas
//!   ([`SphereProjector`]) and stores the resulting polylines and circles in
//!   the snapshot;
//! - the serve phase walks those projected primitives and emits the SVG
//!   document ([`MapRenderer::render`]).
//!
//! Primitive order is fixed — bus polylines, bus labels, stop circles, stop
//! labels — over name-sorted buses and non-empty name-sorted stops, which is
//! what makes the output byte-stable for identical inputs.

pub mod projector;
pub mod renderer;
pub mod svg;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use projector::SphereProjector;
pub use renderer::{BusPolyline, MapRenderer, RenderSettings, StopCircle};
pub use svg::{Color, Document, Point};
