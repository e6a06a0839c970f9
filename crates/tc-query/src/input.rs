//! Typed view of the JSON request document.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "serialization_settings": { "file": "transport.db" },
//!   "base_requests": [
//!     { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!       "road_distances": { "B": 3900 } },
//!     { "type": "Bus", "name": "256", "is_roundtrip": false,
//!       "stops": ["A", "B"] }
//!   ],
//!   "render_settings":  { ... },
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "stat_requests": [
//!     { "id": 1, "type": "Bus", "name": "256" },
//!     { "id": 2, "type": "Route", "from": "A", "to": "B" }
//!   ]
//! }
//! ```
//!
//! `base_requests`/`render_settings`/`routing_settings` appear in build
//! inputs, `stat_requests` in serve inputs; both phases read
//! `serialization_settings`.  Palette and underlayer colors are either a
//! name string, `[r, g, b]`, or `[r, g, b, a]`.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use tc_render::{Color, RenderSettings};
use tc_render::svg::Point;
use tc_transit::RoutingSettings;

use crate::error::{QueryError, QueryResult};

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub serialization_settings: Option<SerializationSettings>,
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    pub render_settings: Option<RenderSettingsIn>,
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SerializationSettings {
    pub file: PathBuf,
}

/// One entity of the build input.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: HashMap<String, u64>,
    },
    Bus {
        name: String,
        is_roundtrip: bool,
        stops: Vec<String>,
    },
}

/// One query of the serve input.  `id` is echoed back as `request_id`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

// ── Render settings ───────────────────────────────────────────────────────────

/// Wire form of the render settings; offsets are `[x, y]` arrays and colors
/// need shape validation, so this converts rather than derives into
/// [`RenderSettings`].
#[derive(Debug, Deserialize)]
pub struct RenderSettingsIn {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stop_radius: f64,
    pub line_width: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: ColorIn,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorIn>,
}

impl RenderSettingsIn {
    pub fn into_settings(self) -> QueryResult<RenderSettings> {
        Ok(RenderSettings {
            width: self.width,
            height: self.height,
            padding: self.padding,
            stop_radius: self.stop_radius,
            line_width: self.line_width,
            bus_label_font_size: self.bus_label_font_size,
            bus_label_offset: Point::new(self.bus_label_offset[0], self.bus_label_offset[1]),
            stop_label_font_size: self.stop_label_font_size,
            stop_label_offset: Point::new(self.stop_label_offset[0], self.stop_label_offset[1]),
            underlayer_color: self.underlayer_color.into_color()?,
            underlayer_width: self.underlayer_width,
            color_palette: self
                .color_palette
                .into_iter()
                .map(ColorIn::into_color)
                .collect::<QueryResult<_>>()?,
        })
    }
}

/// A color as the input document writes it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ColorIn {
    Named(String),
    Channels(Vec<f64>),
}

impl ColorIn {
    pub fn into_color(self) -> QueryResult<Color> {
        match self {
            ColorIn::Named(name) => Ok(Color::Named(name)),
            ColorIn::Channels(c) => match c[..] {
                [r, g, b] => Ok(Color::Rgb(r as u8, g as u8, b as u8)),
                [r, g, b, a] => Ok(Color::Rgba(r as u8, g as u8, b as u8, a)),
                _ => Err(QueryError::Input(format!(
                    "color array must have 3 or 4 components, got {}",
                    c.len()
                ))),
            },
        }
    }
}
