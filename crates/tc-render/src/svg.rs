//! Minimal SVG document model.
//!
//! Covers exactly the primitives the map emits: polylines with round
//! caps/joins, filled circles, and text with an optional stroked underlayer
//! pass.  Rendering goes through `fmt::Write` into one `String`; there is no
//! incremental output, matching the build-whole-response-then-print contract
//! of the query layer.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

// ── Geometry & color ──────────────────────────────────────────────────────────

/// A point on the rendering canvas (pixels, y grows downward).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An SVG color in any of the forms the input document allows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

// ── Objects ───────────────────────────────────────────────────────────────────

/// `<polyline>` with the map's stroke styling.
#[derive(Clone, Debug)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// `<circle>` with a plain fill.
#[derive(Clone, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
}

/// `<text>` for a label or its underlayer.
#[derive(Clone, Debug)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: u32,
    pub bold: bool,
    pub fill: Color,
    /// Underlayer pass: stroke color and width, rendered with round
    /// caps/joins beneath the glyph pass.
    pub stroke: Option<(Color, f64)>,
    pub content: String,
}

#[derive(Clone, Debug)]
pub enum Object {
    Polyline(Polyline),
    Circle(Circle),
    Text(Text),
}

impl From<Polyline> for Object {
    fn from(p: Polyline) -> Self {
        Object::Polyline(p)
    }
}

impl From<Circle> for Object {
    fn from(c: Circle) -> Self {
        Object::Circle(c)
    }
}

impl From<Text> for Object {
    fn from(t: Text) -> Self {
        Object::Text(t)
    }
}

// ── Document ──────────────────────────────────────────────────────────────────

/// An ordered list of objects plus the XML envelope.
#[derive(Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    /// Render the whole document to a string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
        out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n");
        for object in &self.objects {
            out.push_str("  ");
            // Writing into a String cannot fail.
            let _ = match object {
                Object::Polyline(p) => render_polyline(&mut out, p),
                Object::Circle(c) => render_circle(&mut out, c),
                Object::Text(t) => render_text(&mut out, t),
            };
            out.push('\n');
        }
        out.push_str("</svg>");
        out
    }
}

fn render_polyline(out: &mut String, p: &Polyline) -> fmt::Result {
    out.push_str("<polyline points=\"");
    for (i, point) in p.points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{},{}", point.x, point.y)?;
    }
    write!(
        out,
        "\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
        p.stroke, p.stroke_width
    )
}

fn render_circle(out: &mut String, c: &Circle) -> fmt::Result {
    write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
        c.center.x, c.center.y, c.radius, c.fill
    )
}

fn render_text(out: &mut String, t: &Text) -> fmt::Result {
    out.push_str("<text");
    if let Some((color, width)) = &t.stroke {
        write!(
            out,
            " fill=\"{color}\" stroke=\"{color}\" stroke-width=\"{width}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\""
        )?;
    } else {
        write!(out, " fill=\"{}\"", t.fill)?;
    }
    write!(
        out,
        " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\" font-family=\"Verdana\"",
        t.position.x, t.position.y, t.offset.x, t.offset.y, t.font_size
    )?;
    if t.bold {
        out.push_str(" font-weight=\"bold\"");
    }
    out.push('>');
    escape_into(out, &t.content);
    out.push_str("</text>");
    Ok(())
}

/// Escape the five XML-significant characters in text content.
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}
