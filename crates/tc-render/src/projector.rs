//! Projection of geographic coordinates onto the rendering canvas.

use tc_core::GeoPoint;

use crate::svg::Point;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Affine fit of a set of coordinates into a `width × height` canvas with
/// `padding` on all sides.
///
/// The zoom factor is the smaller of the horizontal and vertical fits; a
/// degenerate span on one axis falls back to the other, and a single point
/// (or empty set) projects with zoom 0 straight onto the padding corner.
/// Latitude is flipped: north is up, canvas y grows downward.
#[derive(Debug, Clone, Copy)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: &[GeoPoint], width: f64, height: f64, padding: f64) -> Self {
        let mut projector = Self { padding, min_lng: 0.0, max_lat: 0.0, zoom: 0.0 };
        let Some(first) = points.first() else {
            return projector;
        };

        let mut min_lng = first.lng;
        let mut max_lng = first.lng;
        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        for p in points {
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }
        projector.min_lng = min_lng;
        projector.max_lat = max_lat;

        let width_zoom = (!is_zero(max_lng - min_lng))
            .then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom = (!is_zero(max_lat - min_lat))
            .then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };
        projector
    }

    /// Project a coordinate onto the canvas.
    pub fn project(&self, coords: GeoPoint) -> Point {
        Point {
            x: (coords.lng - self.min_lng) * self.zoom + self.padding,
            y: (self.max_lat - coords.lat) * self.zoom + self.padding,
        }
    }
}
