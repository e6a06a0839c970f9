//! Snapshot schema, capture, and reconstruction.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use tc_catalogue::{BusStat, Catalogue};
use tc_core::{BusId, GeoPoint, StopId};
use tc_graph::{Edge, Graph, RouteTable};
use tc_render::{BusPolyline, MapRenderer, RenderSettings, StopCircle};
use tc_transit::{EdgeLabel, RoutingSettings, StopVertices, TransitRouter};

use crate::error::{SnapshotError, SnapshotResult};

// ── Schema ────────────────────────────────────────────────────────────────────

/// A stop as persisted: identity is the array position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub position: GeoPoint,
    /// Buses serving this stop, by ID.
    pub buses: Vec<BusId>,
}

/// A bus as persisted, with its statistics precomputed at build time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusRecord {
    pub name: String,
    pub is_cyclic: bool,
    pub route: Vec<StopId>,
    pub stat: BusStat,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogueView {
    pub stops: Vec<StopRecord>,
    pub buses: Vec<BusRecord>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RendererView {
    pub settings: RenderSettings,
    pub polylines: Vec<BusPolyline>,
    pub circles: Vec<StopCircle>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitView {
    pub settings: RoutingSettings,
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub table: RouteTable,
    /// Vertex pair per stop, indexed by `StopId`.
    pub stop_vertices: Vec<StopVertices>,
    /// Label per edge, indexed by `EdgeId`.
    pub labels: Vec<EdgeLabel>,
}

/// The whole on-disk artifact.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub catalogue: CatalogueView,
    pub renderer: RendererView,
    pub transit: TransitView,
}

// ── Capture ───────────────────────────────────────────────────────────────────

impl Snapshot {
    /// Capture everything the serve phase needs from a finished build.
    pub fn capture(
        catalogue: &Catalogue,
        renderer: &MapRenderer,
        transit: &TransitRouter,
    ) -> Self {
        let stops = catalogue
            .stops()
            .iter()
            .enumerate()
            .map(|(i, stop)| StopRecord {
                name: stop.name.clone(),
                position: stop.position,
                buses: catalogue.stop_info(StopId(i as u32)).to_vec(),
            })
            .collect();

        let buses = catalogue
            .buses()
            .iter()
            .enumerate()
            .map(|(i, bus)| BusRecord {
                name: bus.name.clone(),
                is_cyclic: bus.is_cyclic,
                route: bus.route.clone(),
                stat: catalogue.bus_stat(BusId(i as u32)),
            })
            .collect();

        let (polylines, circles) = renderer.project(catalogue);

        Self {
            catalogue: CatalogueView { stops, buses },
            renderer: RendererView {
                settings: renderer.settings().clone(),
                polylines,
                circles,
            },
            transit: TransitView {
                settings: *transit.settings(),
                vertex_count: transit.graph().vertex_count(),
                edges: transit.graph().edges().to_vec(),
                table: transit.table().clone(),
                stop_vertices: transit.stop_vertices().to_vec(),
                labels: transit.labels().to_vec(),
            },
        }
    }

    // ── File I/O ──────────────────────────────────────────────────────────

    /// Serialize to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path) -> SnapshotResult<()> {
        let file = BufWriter::new(File::create(path)?);
        ciborium::ser::into_writer(self, file)?;
        log::info!(
            "snapshot written to {}: {} stops, {} buses, {} edges",
            path.display(),
            self.catalogue.stops.len(),
            self.catalogue.buses.len(),
            self.transit.edges.len()
        );
        Ok(())
    }

    /// Deserialize from `path`.
    pub fn read_file(path: &Path) -> SnapshotResult<Self> {
        let file = BufReader::new(File::open(path)?);
        let snapshot: Snapshot = ciborium::de::from_reader(file)?;
        log::info!(
            "snapshot read from {}: {} stops, {} buses",
            path.display(),
            snapshot.catalogue.stops.len(),
            snapshot.catalogue.buses.len()
        );
        Ok(snapshot)
    }

    // ── Reconstruction ────────────────────────────────────────────────────

    /// Rebuild the catalogue by replaying stops and buses in array order,
    /// which reproduces every ID.  The distance table is not persisted, so
    /// the result answers identity, incidence, and ordering queries but not
    /// `road_distance`/`bus_stat` — the stored [`BusRecord::stat`] covers
    /// the latter.
    pub fn restore_catalogue(&self) -> SnapshotResult<Catalogue> {
        let mut catalogue = Catalogue::new();
        for record in &self.catalogue.stops {
            catalogue
                .add_stop(&record.name, record.position)
                .map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        }
        for record in &self.catalogue.buses {
            let stops: Vec<&str> = record
                .route
                .iter()
                .map(|&id| {
                    self.catalogue
                        .stops
                        .get(id.index())
                        .map(|s| s.name.as_str())
                        .ok_or_else(|| {
                            SnapshotError::Malformed(format!("bus route references {id}"))
                        })
                })
                .collect::<SnapshotResult<_>>()?;
            catalogue
                .add_bus(&record.name, record.is_cyclic, &stops)
                .map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        }
        Ok(catalogue)
    }

    /// Rebuild the transit router by replaying the edge list and installing
    /// the persisted table.
    pub fn restore_transit(&self) -> SnapshotResult<TransitRouter> {
        let view = &self.transit;
        self.validate_transit()?;

        let mut graph = Graph::new(view.vertex_count);
        for edge in &view.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        Ok(TransitRouter::from_parts(
            view.settings,
            graph,
            view.table.clone(),
            view.stop_vertices.clone(),
            view.labels.clone(),
        ))
    }

    /// Cross-reference checks on the transit view: every persisted ID must
    /// resolve within the snapshot itself.
    fn validate_transit(&self) -> SnapshotResult<()> {
        let view = &self.transit;
        let malformed = |what: String| Err(SnapshotError::Malformed(what));

        if view.labels.len() != view.edges.len() {
            return malformed(format!(
                "{} edge labels for {} edges",
                view.labels.len(),
                view.edges.len()
            ));
        }
        for edge in &view.edges {
            if edge.from.index() >= view.vertex_count || edge.to.index() >= view.vertex_count {
                return malformed(format!("edge endpoints out of range: {edge:?}"));
            }
        }
        if view.table.len() != view.vertex_count {
            return malformed(format!(
                "router table has {} rows for {} vertices",
                view.table.len(),
                view.vertex_count
            ));
        }
        for row in &view.table {
            if row.len() != view.vertex_count {
                return malformed(format!("router table row of width {}", row.len()));
            }
            for entry in row.iter().flatten() {
                if let Some(edge) = entry.prev_edge {
                    if edge.index() >= view.edges.len() {
                        return malformed(format!("router table references {edge}"));
                    }
                }
            }
        }
        for pair in &view.stop_vertices {
            if pair.wait_begin.index() >= view.vertex_count
                || pair.wait_end.index() >= view.vertex_count
            {
                return malformed(format!("stop vertex pair out of range: {pair:?}"));
            }
        }
        Ok(())
    }
}
