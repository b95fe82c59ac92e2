//! Extruded 2D outlines: path flattening, polygon triangulation and
//! extrusion into closed surfaces, plus the outline-provider seam used for
//! text.

use crate::geometry::Surface;
use glam::{Vec2, Vec3};

const EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug)]
enum PathCommand {
    Line(Vec2),
    Cubic(Vec2, Vec2, Vec2),
}

/// A single closed 2D contour built from line and cubic Bezier segments.
#[derive(Clone, Debug, Default)]
pub struct Path2 {
    start: Vec2,
    commands: Vec<PathCommand>,
}

impl Path2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.start = Vec2::new(x, y);
        self.commands.clear();
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::Line(Vec2::new(x, y)));
        self
    }

    pub fn bezier_curve_to(
        mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> Self {
        self.commands.push(PathCommand::Cubic(
            Vec2::new(c1x, c1y),
            Vec2::new(c2x, c2y),
            Vec2::new(x, y),
        ));
        self
    }

    /// Flatten into a polygon, `segments` steps per curve.
    ///
    /// A closing point that repeats the start is dropped.
    pub fn flatten(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let mut points = vec![self.start];
        let mut cursor = self.start;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::Line(p) => {
                    points.push(p);
                    cursor = p;
                }
                PathCommand::Cubic(c1, c2, end) => {
                    for k in 1..=segments {
                        let t = k as f32 / segments as f32;
                        points.push(cubic_bezier(cursor, c1, c2, end, t));
                    }
                    cursor = end;
                }
            }
        }
        points.dedup_by(|a, b| a.distance_squared(*b) < EPSILON * EPSILON);
        if points.len() > 1 && points[0].distance_squared(points[points.len() - 1]) < EPSILON {
            points.pop();
        }
        points
    }
}

#[inline]
fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k * k) + p1 * (3.0 * k * k * t) + p2 * (3.0 * k * t * t) + p3 * (t * t * t)
}

/// Signed area of a polygon; positive for counter-clockwise winding.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    let n = polygon.len();
    (0..n)
        .map(|i| polygon[i].perp_dot(polygon[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

#[inline]
fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
}

/// Ear-clipping triangulation of a simple polygon of either winding.
///
/// Returns counter-clockwise index triples into `polygon`.
pub fn triangulate(polygon: &[Vec2]) -> Vec<[usize; 3]> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }
    let mut remaining: Vec<usize> = if signed_area(polygon) >= 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };
    let mut triangles = Vec::with_capacity(n - 2);

    let mut misses = 0;
    let mut i = 0;
    while remaining.len() > 3 {
        let m = remaining.len();
        let (ia, ib, ic) = (
            remaining[(i + m - 1) % m],
            remaining[i % m],
            remaining[(i + 1) % m],
        );
        let (a, b, c) = (polygon[ia], polygon[ib], polygon[ic]);
        let convex = (b - a).perp_dot(c - b) > EPSILON;
        let is_ear = convex
            && remaining.iter().all(|&j| {
                j == ia || j == ib || j == ic || !point_in_triangle(polygon[j], a, b, c)
            });
        if is_ear {
            triangles.push([ia, ib, ic]);
            remaining.remove(i % m);
            misses = 0;
        } else {
            misses += 1;
            i += 1;
        }
        if misses > m {
            // Collinear or self-touching leftovers: drop the vertex we are on.
            log::debug!("triangulate: no ear among {m} vertices, dropping one");
            remaining.remove(i % m);
            misses = 0;
        }
        if !remaining.is_empty() {
            i %= remaining.len();
        }
    }
    if remaining.len() == 3 {
        let (a, b, c) = (remaining[0], remaining[1], remaining[2]);
        if (polygon[b] - polygon[a]).perp_dot(polygon[c] - polygon[b]).abs() > EPSILON {
            triangles.push([a, b, c]);
        }
    }
    triangles
}

/// Extrude a polygon from `z = 0` to `z = depth` into a closed prism.
///
/// Caps face outwards along +Z and -Z; side walls join consecutive vertices.
pub fn extrude(polygon: &[Vec2], depth: f32) -> Surface {
    let n = polygon.len();
    let caps = triangulate(polygon);
    if caps.is_empty() {
        return Surface::default();
    }
    let ccw = signed_area(polygon) >= 0.0;

    let mut positions = Vec::with_capacity(n * 2);
    positions.extend(polygon.iter().map(|p| p.extend(0.0)));
    positions.extend(polygon.iter().map(|p| p.extend(depth)));

    let front = n as u32;
    let mut indices = Vec::with_capacity(caps.len() * 6 + n * 6);
    for [a, b, c] in caps {
        let (a, b, c) = (a as u32, b as u32, c as u32);
        indices.extend_from_slice(&[a + front, b + front, c + front]);
        indices.extend_from_slice(&[c, b, a]);
    }
    for i in 0..n {
        let (mut a, mut b) = (i as u32, ((i + 1) % n) as u32);
        if !ccw {
            std::mem::swap(&mut a, &mut b);
        }
        indices.extend_from_slice(&[a, b, b + front]);
        indices.extend_from_slice(&[a, b + front, a + front]);
    }
    Surface::indexed(positions, indices)
}

/// The hand-authored heart silhouette, upright, roughly 2.4 x 2.1 units.
pub fn heart_outline() -> Path2 {
    Path2::new()
        .move_to(0.0, 0.5)
        .bezier_curve_to(-0.6, 1.2, -1.2, 0.6, -1.2, 0.0)
        .bezier_curve_to(-1.2, -0.6, -0.6, -1.2, 0.0, -1.6)
        .bezier_curve_to(0.6, -1.2, 1.2, -0.6, 1.2, 0.0)
        .bezier_curve_to(1.2, 0.6, 0.6, 1.2, 0.0, 0.5)
}

/// Size and extrusion depth for text outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub depth: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: crate::constants::TEXT_SIZE,
            depth: crate::constants::TEXT_DEPTH,
        }
    }
}

/// Source of extruded text surfaces.
///
/// Returning `None` means the resource is not available (yet); callers fall
/// back instead of blocking.
pub trait OutlineProvider {
    fn text_surface(&self, text: &str, style: &TextStyle) -> Option<Surface>;
}

/// A provider whose resource never loads.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOutlines;

impl OutlineProvider for NoOutlines {
    fn text_surface(&self, _text: &str, _style: &TextStyle) -> Option<Surface> {
        None
    }
}

/// `None` models a provider that is still loading.
impl<P: OutlineProvider> OutlineProvider for Option<P> {
    fn text_surface(&self, text: &str, style: &TextStyle) -> Option<Surface> {
        self.as_ref()?.text_surface(text, style)
    }
}

/// Extruded quad helper shared by voxel-style outlines: one box face as two
/// triangles in a plain triangle list.
#[inline]
pub(crate) fn push_quad(out: &mut Vec<Vec3>, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
    out.extend_from_slice(&[a, b, c, a, c, d]);
}
