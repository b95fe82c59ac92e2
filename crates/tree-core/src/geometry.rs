//! Triangulated surfaces and area-weighted surface sampling.
//!
//! A [`Surface`] mirrors a GPU buffer geometry: a flat list of vertex positions
//! and an optional index list. Without indices every three consecutive
//! positions form one triangle.

use crate::error::SampleError;
use glam::Vec3;
use rand::Rng;

/// Triangle soup with optional indexing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Surface {
    pub positions: Vec<Vec3>,
    pub indices: Option<Vec<u32>>,
}

impl Surface {
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            indices: None,
        }
    }

    pub fn indexed(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices: Some(indices),
        }
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(idx) => idx.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Vertices of triangle `i` in winding order.
    pub fn triangle(&self, i: usize) -> [Vec3; 3] {
        match &self.indices {
            Some(idx) => [
                self.positions[idx[i * 3] as usize],
                self.positions[idx[i * 3 + 1] as usize],
                self.positions[idx[i * 3 + 2] as usize],
            ],
            None => [
                self.positions[i * 3],
                self.positions[i * 3 + 1],
                self.positions[i * 3 + 2],
            ],
        }
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        (0..self.triangle_count()).map(move |i| self.triangle(i))
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty surface.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    /// Move the bounding-box center to the origin.
    pub fn center(&mut self) -> &mut Self {
        if let Some((lo, hi)) = self.bounding_box() {
            let mid = (lo + hi) * 0.5;
            self.translate(-mid);
        }
        self
    }

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        for p in &mut self.positions {
            *p += offset;
        }
        self
    }

    pub fn scale(&mut self, factors: Vec3) -> &mut Self {
        for p in &mut self.positions {
            *p *= factors;
        }
        self
    }

    /// Append `other`, keeping indexing consistent.
    pub fn merge(&mut self, other: &Surface) {
        let base = self.positions.len() as u32;
        match (self.indices.as_mut(), other.indices.as_ref()) {
            (None, None) => self.positions.extend_from_slice(&other.positions),
            (Some(idx), Some(other_idx)) => {
                idx.extend(other_idx.iter().map(|i| i + base));
                self.positions.extend_from_slice(&other.positions);
            }
            _ => {
                // Mixed forms: flatten both to a plain triangle list.
                let mut flat: Vec<Vec3> = self.triangles().flatten().collect();
                flat.extend(other.triangles().flatten());
                self.positions = flat;
                self.indices = None;
            }
        }
    }
}

#[inline]
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (b - a).cross(c - a).length() * 0.5
}

/// Total area of every triangle in `surface`.
pub fn area(surface: &Surface) -> f32 {
    surface
        .triangles()
        .map(|[a, b, c]| triangle_area(a, b, c))
        .sum()
}

/// Uniform point inside triangle `abc` from two uniform draws in `[0, 1)`.
///
/// Draws whose sum exceeds one are reflected back into the lower half of the
/// unit square so the result stays inside the triangle.
#[inline]
pub fn barycentric_point(a: Vec3, b: Vec3, c: Vec3, mut r1: f32, mut r2: f32) -> Vec3 {
    if r1 + r2 > 1.0 {
        r1 = 1.0 - r1;
        r2 = 1.0 - r2;
    }
    a * r1 + b * r2 + c * (1.0 - r1 - r2)
}

/// Cumulative-area table for repeated area-weighted draws on one surface.
pub struct SurfaceSampler<'a> {
    surface: &'a Surface,
    cumulative: Vec<f32>,
    total: f32,
}

impl<'a> SurfaceSampler<'a> {
    pub fn new(surface: &'a Surface) -> Result<Self, SampleError> {
        if surface.triangle_count() == 0 {
            return Err(SampleError::EmptySurface);
        }
        let mut total = 0.0f32;
        let cumulative = surface
            .triangles()
            .map(|[a, b, c]| {
                total += triangle_area(a, b, c);
                total
            })
            .collect::<Vec<_>>();
        if total.is_nan() || total <= 0.0 {
            return Err(SampleError::DegenerateSurface);
        }
        Ok(Self {
            surface,
            cumulative,
            total,
        })
    }

    pub fn total_area(&self) -> f32 {
        self.total
    }

    /// Index of the first triangle whose cumulative area reaches `r`.
    ///
    /// Rounding can leave `r` above the last prefix sum; that lands on the
    /// final triangle.
    pub fn pick_triangle(&self, r: f32) -> usize {
        let idx = self.cumulative.partition_point(|&c| c < r);
        idx.min(self.cumulative.len() - 1)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let r = rng.gen::<f32>() * self.total;
        let [a, b, c] = self.surface.triangle(self.pick_triangle(r));
        let r1 = rng.gen::<f32>();
        let r2 = rng.gen::<f32>();
        barycentric_point(a, b, c, r1, r2)
    }

    pub fn sample_into<R: Rng + ?Sized>(&self, count: usize, rng: &mut R, out: &mut Vec<Vec3>) {
        out.reserve(count);
        for _ in 0..count {
            out.push(self.sample(rng));
        }
    }
}

/// Draw `count` points spread over `surface` proportionally to triangle area.
pub fn sample_points<R: Rng + ?Sized>(
    surface: &Surface,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec3>, SampleError> {
    let sampler = SurfaceSampler::new(surface)?;
    let mut points = Vec::with_capacity(count);
    sampler.sample_into(count, rng, &mut points);
    Ok(points)
}
