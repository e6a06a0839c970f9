//! Build phase: request document → populated state → snapshot file.

use std::io::Read;

use tc_catalogue::Catalogue;
use tc_core::GeoPoint;
use tc_graph::Graph;
use tc_render::MapRenderer;
use tc_snapshot::Snapshot;
use tc_transit::{RoutingSettings, TransitRouter};

use crate::error::{QueryError, QueryResult};
use crate::input::{BaseRequest, InputDoc};

/// Run the whole build phase: parse `input`, build the snapshot, and write
/// it to the file named in `serialization_settings`.
pub fn make_base<R: Read>(input: R) -> QueryResult<()> {
    let doc: InputDoc = serde_json::from_reader(input)?;
    let file = doc
        .serialization_settings
        .as_ref()
        .map(|s| s.file.clone())
        .ok_or(QueryError::MissingSection("serialization_settings"))?;

    let snapshot = build_snapshot(doc)?;
    snapshot.write_file(&file)?;
    Ok(())
}

/// Populate the catalogue from `base_requests` and capture all three
/// snapshot views.  Missing `render_settings`/`routing_settings` sections
/// produce empty views: the serve phase then answers Map with a bare canvas
/// and every Route with "not found".
pub fn build_snapshot(doc: InputDoc) -> QueryResult<Snapshot> {
    let catalogue = fill_catalogue(&doc.base_requests)?;

    let renderer = MapRenderer::new(match doc.render_settings {
        Some(settings) => settings.into_settings()?,
        None => Default::default(),
    });

    let transit = match doc.routing_settings {
        Some(settings) => TransitRouter::build(&catalogue, settings),
        None => TransitRouter::from_parts(
            RoutingSettings::default(),
            Graph::new(0),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        ),
    };

    Ok(Snapshot::capture(&catalogue, &renderer, &transit))
}

/// Three passes over `base_requests`: stops first so that distances and
/// routes can reference stops declared later in the document.
fn fill_catalogue(requests: &[BaseRequest]) -> QueryResult<Catalogue> {
    let mut catalogue = Catalogue::new();

    for request in requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = request {
            catalogue.add_stop(name, GeoPoint::new(*latitude, *longitude))?;
        }
    }
    for request in requests {
        if let BaseRequest::Stop { name, road_distances, .. } = request {
            for (to, meters) in road_distances {
                catalogue.add_distance(name, to, *meters)?;
            }
        }
    }
    for request in requests {
        if let BaseRequest::Bus { name, is_roundtrip, stops } = request {
            catalogue.add_bus(name, *is_roundtrip, stops)?;
        }
    }

    log::info!(
        "catalogue filled: {} stops, {} buses",
        catalogue.stop_count(),
        catalogue.bus_count()
    );
    Ok(catalogue)
}
