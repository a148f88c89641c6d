//! Shape entities - the four geometric kinds and their shared attributes
//!
//! A shape is a tagged union: shared identity and colour attributes on the
//! wrapper, per-variant geometry in the `Geometry` payload. Every generic
//! operation (position, area, colours) dispatches with an exhaustive match
//! so adding a variant is a compile error until all of them are handled.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SEGMENT_AREA_PER_UNIT, TEXT_AREA_PER_CHAR};

/// Discriminant of a shape's geometry variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rect,
    Segment,
    Text,
}

/// A circle: centre plus radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub stroke_width: f64,
}

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
}

/// A line segment between two endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    pub dashed: bool,
    pub stroke_width: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Horizontal placement of a text relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Typography attributes carried along for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: String,
    pub weight: String,
    pub size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            weight: "normal".to_string(),
            size: 12.0,
        }
    }
}

/// A labelled text run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub anchor: DVec2,
    pub anchor_mode: Anchor,
    pub content: String,
    pub style: TextStyle,
}

/// Per-variant geometry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Circle(Circle),
    Rect(Rect),
    Segment(Segment),
    Text(Text),
}

/// A shape in play: geometry plus identity and colours
///
/// Ids are caller-assigned and not guaranteed unique across a run; clones
/// produced during resolution draw theirs from [`super::CloneIds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: i32,
    pub geometry: Geometry,
    pub border_color: String,
    pub fill_color: String,
}

impl Shape {
    pub fn circle(
        id: i32,
        center: DVec2,
        radius: f64,
        border_color: &str,
        fill_color: &str,
    ) -> Self {
        Self {
            id,
            geometry: Geometry::Circle(Circle {
                center,
                radius,
                stroke_width: 1.0,
            }),
            border_color: border_color.to_string(),
            fill_color: fill_color.to_string(),
        }
    }

    pub fn rect(
        id: i32,
        origin: DVec2,
        width: f64,
        height: f64,
        border_color: &str,
        fill_color: &str,
    ) -> Self {
        Self {
            id,
            geometry: Geometry::Rect(Rect {
                origin,
                width,
                height,
            }),
            border_color: border_color.to_string(),
            fill_color: fill_color.to_string(),
        }
    }

    /// Segments carry a single colour; it serves as border and fill alike
    pub fn segment(id: i32, start: DVec2, end: DVec2, color: &str) -> Self {
        Self {
            id,
            geometry: Geometry::Segment(Segment {
                start,
                end,
                dashed: false,
                stroke_width: 1.0,
            }),
            border_color: color.to_string(),
            fill_color: color.to_string(),
        }
    }

    pub fn text(
        id: i32,
        anchor: DVec2,
        anchor_mode: Anchor,
        content: &str,
        border_color: &str,
        fill_color: &str,
    ) -> Self {
        Self {
            id,
            geometry: Geometry::Text(Text {
                anchor,
                anchor_mode,
                content: content.to_string(),
                style: TextStyle::default(),
            }),
            border_color: border_color.to_string(),
            fill_color: fill_color.to_string(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match &self.geometry {
            Geometry::Circle(_) => ShapeKind::Circle,
            Geometry::Rect(_) => ShapeKind::Rect,
            Geometry::Segment(_) => ShapeKind::Segment,
            Geometry::Text(_) => ShapeKind::Text,
        }
    }

    /// Characteristic position: circle centre, rect origin, segment start,
    /// text anchor
    pub fn position(&self) -> DVec2 {
        match &self.geometry {
            Geometry::Circle(c) => c.center,
            Geometry::Rect(r) => r.origin,
            Geometry::Segment(s) => s.start,
            Geometry::Text(t) => t.anchor,
        }
    }

    /// Move the shape so its characteristic position lands on `pos`.
    ///
    /// A segment is translated as a whole: both endpoints shift by the same
    /// delta, preserving length and orientation.
    pub fn set_position(&mut self, pos: DVec2) {
        match &mut self.geometry {
            Geometry::Circle(c) => c.center = pos,
            Geometry::Rect(r) => r.origin = pos,
            Geometry::Segment(s) => {
                let delta = pos - s.start;
                s.start = pos;
                s.end += delta;
            }
            Geometry::Text(t) => t.anchor = pos,
        }
    }

    /// Area used for the crush-vs-modify comparison.
    ///
    /// Circles and rectangles use their true area. Segments and texts have
    /// no visual area, so they get a synthetic weight: segment length and
    /// text character count scaled by fixed multipliers.
    pub fn area(&self) -> f64 {
        match &self.geometry {
            Geometry::Circle(c) => std::f64::consts::PI * c.radius * c.radius,
            Geometry::Rect(r) => r.width * r.height,
            Geometry::Segment(s) => SEGMENT_AREA_PER_UNIT * s.length(),
            Geometry::Text(t) => TEXT_AREA_PER_CHAR * t.content.chars().count() as f64,
        }
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }

    pub fn set_border_color(&mut self, color: &str) {
        self.border_color = color.to_string();
    }

    pub fn set_fill_color(&mut self, color: &str) {
        self.fill_color = color.to_string();
    }

    /// Clone with border and fill colours swapped and a fresh id.
    /// Geometry is copied unchanged.
    pub fn inverted(&self, id: i32) -> Shape {
        Shape {
            id,
            geometry: self.geometry.clone(),
            border_color: self.fill_color.clone(),
            fill_color: self.border_color.clone(),
        }
    }
}
