//! Pairwise overlap tests between shapes
//!
//! One symmetric, pure predicate per unordered kind pair. Texts reduce to a
//! horizontal segment sized by their character count before testing, so the
//! ten pairings bottom out in four geometric routines: circle-circle,
//! rect-rect, circle-rect clamping and the orientation/straddle segment test.

use glam::DVec2;

use super::shape::{Anchor, Circle, Geometry, Rect, Segment, Shape, Text};
use crate::consts::TEXT_EXTENT_PER_CHAR;

/// Turn direction of the ordered point triple (p, q, r)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation from the sign of the cross product (q - p) x (r - p)
pub fn orientation(p: DVec2, q: DVec2, r: DVec2) -> Orientation {
    let cross = (q - p).perp_dot(r - p);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Whether `q` lies on the segment p-r, assuming the three are collinear
fn on_segment(p: DVec2, q: DVec2, r: DVec2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Check whether two shapes overlap.
///
/// Symmetric and total over all ten unordered kind pairs; never mutates.
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    use Geometry::*;
    match (&a.geometry, &b.geometry) {
        (Circle(c1), Circle(c2)) => circle_circle(c1, c2),
        (Rect(r1), Rect(r2)) => rect_rect(r1, r2),
        (Circle(c), Rect(r)) | (Rect(r), Circle(c)) => circle_rect(c, r),
        (Segment(s1), Segment(s2)) => segment_segment(s1, s2),
        (Circle(c), Segment(s)) | (Segment(s), Circle(c)) => circle_segment(c, s),
        (Rect(r), Segment(s)) | (Segment(s), Rect(r)) => rect_segment(r, s),
        (Text(t1), Text(t2)) => segment_segment(&text_as_segment(t1), &text_as_segment(t2)),
        (Segment(s), Text(t)) | (Text(t), Segment(s)) => segment_segment(s, &text_as_segment(t)),
        (Circle(c), Text(t)) | (Text(t), Circle(c)) => circle_segment(c, &text_as_segment(t)),
        (Rect(r), Text(t)) | (Text(t), Rect(r)) => rect_segment(r, &text_as_segment(t)),
    }
}

/// Closed test: touching circles count as overlapping.
/// Squared distances avoid the square root.
fn circle_circle(c1: &Circle, c2: &Circle) -> bool {
    let reach = c1.radius + c2.radius;
    c1.center.distance_squared(c2.center) <= reach * reach
}

/// Strict AABB test: rectangles sharing only an edge do NOT overlap.
fn rect_rect(r1: &Rect, r2: &Rect) -> bool {
    let overlap_x = r1.origin.x < r2.origin.x + r2.width && r1.origin.x + r1.width > r2.origin.x;
    let overlap_y = r1.origin.y < r2.origin.y + r2.height && r1.origin.y + r1.height > r2.origin.y;
    overlap_x && overlap_y
}

/// Clamp the circle centre to the rectangle to find the nearest point,
/// then compare against the radius.
fn circle_rect(c: &Circle, r: &Rect) -> bool {
    let closest = c.center.clamp(r.origin, r.origin + DVec2::new(r.width, r.height));
    c.center.distance_squared(closest) <= c.radius * c.radius
}

/// Classic orientation/straddle intersection test with the collinear
/// bounding-box special cases.
fn segment_segment(s1: &Segment, s2: &Segment) -> bool {
    let (p1, q1) = (s1.start, s1.end);
    let (p2, q2) = (s2.start, s2.end);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // General case: each segment's endpoints straddle the other's line
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases: an endpoint falls within the other segment's box
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Distance from the circle centre to the closest point on the segment,
/// compared against the radius.
fn circle_segment(c: &Circle, s: &Segment) -> bool {
    let line = s.end - s.start;
    let len_sq = line.length_squared();

    let closest = if len_sq == 0.0 {
        // Degenerate segment: a point
        s.start
    } else {
        let t = ((c.center - s.start).dot(line) / len_sq).clamp(0.0, 1.0);
        s.start + line * t
    };

    c.center.distance_squared(closest) <= c.radius * c.radius
}

/// A segment overlaps a rectangle if an endpoint lies inside it or the
/// segment crosses one of its four edges.
fn rect_segment(r: &Rect, s: &Segment) -> bool {
    let min = r.origin;
    let max = r.origin + DVec2::new(r.width, r.height);

    let inside =
        |p: DVec2| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;
    if inside(s.start) || inside(s.end) {
        return true;
    }

    let corners = [
        min,
        DVec2::new(max.x, min.y),
        max,
        DVec2::new(min.x, max.y),
    ];
    (0..4).any(|i| {
        let edge = Segment {
            start: corners[i],
            end: corners[(i + 1) % 4],
            dashed: false,
            stroke_width: 0.0,
        };
        segment_segment(s, &edge)
    })
}

/// Reduce a text to a horizontal segment along its baseline.
///
/// The extent is derived from the character count; the anchor mode decides
/// how the extent is distributed around the anchor point.
pub(crate) fn text_as_segment(t: &Text) -> Segment {
    let length = TEXT_EXTENT_PER_CHAR * t.content.chars().count() as f64;
    let (x1, x2) = match t.anchor_mode {
        Anchor::Start => (t.anchor.x, t.anchor.x + length),
        Anchor::Middle => (t.anchor.x - length / 2.0, t.anchor.x + length / 2.0),
        Anchor::End => (t.anchor.x - length, t.anchor.x),
    };
    Segment {
        start: DVec2::new(x1, t.anchor.y),
        end: DVec2::new(x2, t.anchor.y),
        dashed: false,
        stroke_width: 0.0,
    }
}
