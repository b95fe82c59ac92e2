//! Particle kinds and their one-time color assignment.

use crate::constants::{
    CUBE_GOLD_PROBABILITY, DEEP_GOLD, GOLD, GREEN, LIGHTNESS_JITTER, RED, SPHERE_GOLD_PROBABILITY,
};
use crate::palette::{hex_to_srgb, offset_lightness, srgb_to_linear};
use glam::Vec3;
use rand::Rng;
use std::ops::Range;

/// Visual family of a particle; each kind is drawn as its own instanced mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Sphere,
    Cube,
}

impl ParticleKind {
    /// Indices below `sphere_count` are spheres, the rest cubes.
    #[inline]
    pub fn of(index: usize, sphere_count: usize) -> Self {
        if index < sphere_count {
            ParticleKind::Sphere
        } else {
            ParticleKind::Cube
        }
    }

    /// Index range of this kind within `[0, count)`.
    pub fn range(self, count: usize, sphere_count: usize) -> Range<usize> {
        let split = sphere_count.min(count);
        match self {
            ParticleKind::Sphere => 0..split,
            ParticleKind::Cube => split..count,
        }
    }

    /// Two-color palette and the probability of picking the first entry.
    pub fn palette(self) -> (u32, u32, f64) {
        match self {
            ParticleKind::Sphere => (GOLD, RED, SPHERE_GOLD_PROBABILITY),
            ParticleKind::Cube => (DEEP_GOLD, GREEN, CUBE_GOLD_PROBABILITY),
        }
    }
}

/// Position of particle `index` inside its kind's instance buffer.
#[inline]
pub fn slot(index: usize, sphere_count: usize) -> usize {
    match ParticleKind::of(index, sphere_count) {
        ParticleKind::Sphere => index,
        ParticleKind::Cube => index - sphere_count,
    }
}

/// Pick a palette color for one particle and jitter its lightness.
///
/// Returns a linear RGB color ready for the renderer.
pub fn particle_color<R: Rng + ?Sized>(kind: ParticleKind, rng: &mut R) -> Vec3 {
    let (first, second, p_first) = kind.palette();
    let base = if rng.gen_bool(p_first) { first } else { second };
    let jitter = (rng.gen::<f32>() - 0.5) * LIGHTNESS_JITTER;
    srgb_to_linear(offset_lightness(hex_to_srgb(base), jitter))
}

/// Colors for every particle, index-aligned, assigned once per session.
pub fn assign_colors<R: Rng + ?Sized>(count: usize, sphere_count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|i| particle_color(ParticleKind::of(i, sphere_count), rng))
        .collect()
}
