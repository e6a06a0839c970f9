//! Map renderer: projected primitives and the SVG drawing walk.

use serde::{Deserialize, Serialize};

use tc_catalogue::Catalogue;
use tc_core::{BusId, StopId};

use crate::projector::SphereProjector;
use crate::svg::{Circle, Color, Document, Point, Polyline, Text};

// ── Settings ──────────────────────────────────────────────────────────────────

/// Stylistic parameters of the map, taken verbatim from the input document
/// and persisted in the snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stop_radius: f64,
    pub line_width: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

// ── Projected primitives (snapshot payload) ───────────────────────────────────

/// A bus route projected onto the canvas, points in one-direction order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusPolyline {
    pub bus: BusId,
    pub points: Vec<Point>,
}

/// A served stop projected onto the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopCircle {
    pub stop: StopId,
    pub center: Point,
}

// ── MapRenderer ───────────────────────────────────────────────────────────────

/// Renders the network map from projected primitives.
pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Build-phase projection: fit all served stops onto the canvas and
    /// project every bus route and stop position.
    ///
    /// Polylines are stored in sorted-bus order and circles in sorted-stop
    /// order, so the serve phase can walk them without re-sorting.
    pub fn project(&self, catalogue: &Catalogue) -> (Vec<BusPolyline>, Vec<StopCircle>) {
        let served = catalogue.non_empty_sorted_stops();
        let coordinates: Vec<_> = served
            .iter()
            .map(|&id| catalogue.stop(id).position)
            .collect();
        let projector = SphereProjector::new(
            &coordinates,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let polylines = catalogue
            .sorted_buses()
            .into_iter()
            .map(|bus| BusPolyline {
                bus,
                points: catalogue
                    .bus(bus)
                    .route
                    .iter()
                    .map(|&stop| projector.project(catalogue.stop(stop).position))
                    .collect(),
            })
            .collect();

        let circles = served
            .into_iter()
            .map(|stop| StopCircle {
                stop,
                center: projector.project(catalogue.stop(stop).position),
            })
            .collect();

        (polylines, circles)
    }

    /// Serve-phase drawing walk: polylines, bus labels, stop circles, stop
    /// labels, in that order.  `catalogue` supplies names and route shapes;
    /// positions come exclusively from the projected primitives.
    pub fn render(
        &self,
        catalogue: &Catalogue,
        polylines: &[BusPolyline],
        circles: &[StopCircle],
    ) -> String {
        let mut doc = Document::new();
        self.add_bus_lines(&mut doc, catalogue, polylines);
        self.add_bus_labels(&mut doc, catalogue, polylines);
        self.add_stop_circles(&mut doc, circles);
        self.add_stop_labels(&mut doc, catalogue, circles);
        doc.render()
    }

    // ── Drawing passes ────────────────────────────────────────────────────

    /// Palette color of the `k`-th bus with a non-empty route.
    fn palette_color(&self, k: usize) -> Color {
        let palette = &self.settings.color_palette;
        palette
            .get(k % palette.len().max(1))
            .cloned()
            .unwrap_or_default()
    }

    fn add_bus_lines(&self, doc: &mut Document, catalogue: &Catalogue, polylines: &[BusPolyline]) {
        let mut drawn = 0;
        for line in polylines {
            if line.points.is_empty() {
                continue;
            }
            let mut points = line.points.clone();
            if !catalogue.bus(line.bus).is_cyclic && points.len() > 1 {
                points.extend(line.points.iter().rev().skip(1));
            }
            doc.add(Polyline {
                points,
                stroke: self.palette_color(drawn),
                stroke_width: self.settings.line_width,
            });
            drawn += 1;
        }
    }

    fn add_bus_labels(&self, doc: &mut Document, catalogue: &Catalogue, polylines: &[BusPolyline]) {
        let mut drawn = 0;
        for line in polylines {
            if line.points.is_empty() {
                continue;
            }
            let bus = catalogue.bus(line.bus);
            let color = self.palette_color(drawn);
            drawn += 1;

            self.add_bus_label_pair(doc, &bus.name, line.points[0], &color);
            if !bus.is_cyclic && bus.route.first() != bus.route.last() {
                if let Some(&last) = line.points.last() {
                    self.add_bus_label_pair(doc, &bus.name, last, &color);
                }
            }
        }
    }

    fn add_bus_label_pair(&self, doc: &mut Document, name: &str, at: Point, color: &Color) {
        doc.add(Text {
            position: at,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            bold: true,
            fill: Color::None,
            stroke: Some((self.settings.underlayer_color.clone(), self.settings.underlayer_width)),
            content: name.to_owned(),
        });
        doc.add(Text {
            position: at,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            bold: true,
            fill: color.clone(),
            stroke: None,
            content: name.to_owned(),
        });
    }

    fn add_stop_circles(&self, doc: &mut Document, circles: &[StopCircle]) {
        for circle in circles {
            doc.add(Circle {
                center: circle.center,
                radius: self.settings.stop_radius,
                fill: Color::Named("white".to_owned()),
            });
        }
    }

    fn add_stop_labels(&self, doc: &mut Document, catalogue: &Catalogue, circles: &[StopCircle]) {
        for circle in circles {
            let name = &catalogue.stop(circle.stop).name;
            doc.add(Text {
                position: circle.center,
                offset: self.settings.stop_label_offset,
                font_size: self.settings.stop_label_font_size,
                bold: false,
                fill: Color::None,
                stroke: Some((
                    self.settings.underlayer_color.clone(),
                    self.settings.underlayer_width,
                )),
                content: name.clone(),
            });
            doc.add(Text {
                position: circle.center,
                offset: self.settings.stop_label_offset,
                font_size: self.settings.stop_label_font_size,
                bold: false,
                fill: Color::Named("black".to_owned()),
                stroke: None,
                content: name.clone(),
            });
        }
    }
}
