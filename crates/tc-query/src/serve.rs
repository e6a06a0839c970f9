//! Serve phase: snapshot → query surfaces → response document.

use std::io::{Read, Write};

use serde_json::{json, Value};

use tc_catalogue::{BusStat, Catalogue};
use tc_render::{BusPolyline, MapRenderer, StopCircle};
use tc_snapshot::{Snapshot, SnapshotResult};
use tc_transit::{EdgeLabel, TransitRouter};

use crate::error::{QueryError, QueryResult};
use crate::input::{InputDoc, StatRequest};

/// Run the whole serve phase: parse `input`, load the snapshot it names,
/// answer every `stat_request`, and print the response array to `output`.
///
/// The array is built completely before printing; a failing query never
/// leaves a half-written response behind.
pub fn process_requests<R: Read, W: Write>(input: R, mut output: W) -> QueryResult<()> {
    let doc: InputDoc = serde_json::from_reader(input)?;
    let file = doc
        .serialization_settings
        .as_ref()
        .map(|s| s.file.clone())
        .ok_or(QueryError::MissingSection("serialization_settings"))?;

    let snapshot = Snapshot::read_file(&file)?;
    let dispatcher = QueryDispatcher::from_snapshot(snapshot)?;

    let answers: Vec<Value> = doc.stat_requests.iter().map(|r| dispatcher.dispatch(r)).collect();
    serde_json::to_writer_pretty(&mut output, &answers)?;
    output.write_all(b"\n")?;
    Ok(())
}

// ── QueryDispatcher ───────────────────────────────────────────────────────────

/// Query surfaces reconstructed from a snapshot.
///
/// The catalogue is replayed for identity/incidence lookups, bus statistics
/// come from the persisted records (the distance table is not in the
/// snapshot), and the transit router is reassembled around the persisted
/// all-pairs table.
pub struct QueryDispatcher {
    catalogue: Catalogue,
    /// Persisted statistics, indexed by `BusId`.
    stats: Vec<BusStat>,
    renderer: MapRenderer,
    polylines: Vec<BusPolyline>,
    circles: Vec<StopCircle>,
    transit: TransitRouter,
}

impl QueryDispatcher {
    pub fn from_snapshot(snapshot: Snapshot) -> SnapshotResult<Self> {
        let catalogue = snapshot.restore_catalogue()?;
        let transit = snapshot.restore_transit()?;
        Ok(Self {
            catalogue,
            stats: snapshot.catalogue.buses.iter().map(|b| b.stat).collect(),
            renderer: MapRenderer::new(snapshot.renderer.settings.clone()),
            polylines: snapshot.renderer.polylines,
            circles: snapshot.renderer.circles,
            transit,
        })
    }

    /// Answer one query.  Misses are inline `"not found"` objects.
    pub fn dispatch(&self, request: &StatRequest) -> Value {
        match request {
            StatRequest::Bus { id, name } => self.bus_answer(*id, name),
            StatRequest::Stop { id, name } => self.stop_answer(*id, name),
            StatRequest::Map { id } => self.map_answer(*id),
            StatRequest::Route { id, from, to } => self.route_answer(*id, from, to),
        }
    }

    // ── Per-kind answers ──────────────────────────────────────────────────

    fn bus_answer(&self, id: i64, name: &str) -> Value {
        let Some(bus) = self.catalogue.find_bus(name) else {
            log::debug!("bus {name:?} not found (request {id})");
            return not_found(id);
        };
        let stat = &self.stats[bus.index()];
        json!({
            "request_id": id,
            "curvature": stat.curvature,
            "route_length": stat.route_length,
            "stop_count": stat.stop_count,
            "unique_stop_count": stat.unique_stop_count,
        })
    }

    fn stop_answer(&self, id: i64, name: &str) -> Value {
        let Some(stop) = self.catalogue.find_stop(name) else {
            log::debug!("stop {name:?} not found (request {id})");
            return not_found(id);
        };
        let mut buses: Vec<&str> = self
            .catalogue
            .stop_info(stop)
            .iter()
            .map(|&bus| self.catalogue.bus(bus).name.as_str())
            .collect();
        buses.sort_unstable();
        json!({ "request_id": id, "buses": buses })
    }

    fn map_answer(&self, id: i64) -> Value {
        let map = self.renderer.render(&self.catalogue, &self.polylines, &self.circles);
        json!({ "request_id": id, "map": map })
    }

    fn route_answer(&self, id: i64, from: &str, to: &str) -> Value {
        let (Some(from), Some(to)) =
            (self.catalogue.find_stop(from), self.catalogue.find_stop(to))
        else {
            return not_found(id);
        };
        let Some(itinerary) = self.transit.route(from, to) else {
            return not_found(id);
        };

        let items: Vec<Value> = itinerary.steps.iter().map(|s| self.step_value(s)).collect();
        json!({
            "request_id": id,
            "total_time": itinerary.total_time,
            "items": items,
        })
    }

    fn step_value(&self, step: &EdgeLabel) -> Value {
        match step {
            EdgeLabel::Wait { stop, time } => json!({
                "type": "Wait",
                "stop_name": self.catalogue.stop(*stop).name,
                "time": time,
            }),
            EdgeLabel::Bus { bus, span_count, time } => json!({
                "type": "Bus",
                "bus": self.catalogue.bus(*bus).name,
                "span_count": span_count,
                "time": time,
            }),
        }
    }
}

fn not_found(id: i64) -> Value {
    json!({ "request_id": id, "error_message": "not found" })
}
