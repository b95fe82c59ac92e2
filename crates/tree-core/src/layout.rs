//! Target position sets for the three formations.
//!
//! Every layout is an index-aligned list of exactly `count` positions: entry
//! `i` is where particle `i` heads in that mode. Layouts are built once per
//! session (or again when a shape resource arrives) and never mutated.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::LayoutError;
use crate::geometry::{self, Surface};
use crate::mode::Mode;
use crate::outline::{extrude, heart_outline, OutlineProvider, TextStyle};
use glam::{Vec2, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Spiral cone position for particle `index` of `total`.
pub fn tree_position<R: Rng + ?Sized>(index: usize, total: usize, rng: &mut R) -> Vec3 {
    let t = index as f32 / total as f32;
    let y = -TREE_HEIGHT / 2.0 + t * TREE_HEIGHT;
    let radius = (1.0 - t.powf(TREE_TAPER_EXPONENT)) * TREE_BASE_RADIUS;
    let angle = index as f32 * TREE_ANGLE_STEP;
    let x = angle.cos() * radius + (rng.gen::<f32>() - 0.5) * TREE_JITTER;
    let z = angle.sin() * radius + (rng.gen::<f32>() - 0.5) * TREE_JITTER;
    Vec3::new(x, y, z)
}

pub fn tree_layout<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count).map(|i| tree_position(i, count, rng)).collect()
}

/// Uniform direction on the sphere at a random radius in the explosion shell.
pub fn explosion_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = EXPLODE_MIN_RADIUS + rng.gen::<f32>() * (EXPLODE_MAX_RADIUS - EXPLODE_MIN_RADIUS);
    let theta = rng.gen::<f32>() * TAU;
    // arccos keeps the density uniform over the sphere instead of bunching at the poles
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

pub fn explosion_layout<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Vec3> {
    (0..count).map(|_| explosion_position(rng)).collect()
}

/// What a composition entry draws.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeSource {
    Text(String),
    Heart,
}

/// A shape placed in the text composition.
///
/// The shape is centered on its bounding box, scaled, then moved to `offset`
/// on the XY plane.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedShape {
    pub source: ShapeSource,
    pub offset: Vec2,
    pub scale: Vec3,
}

impl PlacedShape {
    pub fn text(text: &str, offset: Vec2) -> Self {
        Self {
            source: ShapeSource::Text(text.to_owned()),
            offset,
            scale: Vec3::ONE,
        }
    }

    pub fn heart(offset: Vec2, scale: Vec3) -> Self {
        Self {
            source: ShapeSource::Heart,
            offset,
            scale,
        }
    }
}

/// "MERRY" / "CHRISTMAS" with two initials either side of a heart.
pub fn default_composition() -> Vec<PlacedShape> {
    vec![
        PlacedShape::text("MERRY", MERRY_OFFSET),
        PlacedShape::text("CHRISTMAS", CHRISTMAS_OFFSET),
        PlacedShape::text("ZJY", LEFT_NAME_OFFSET),
        PlacedShape::heart(HEART_OFFSET, HEART_SCALE),
        PlacedShape::text("YJQ", RIGHT_NAME_OFFSET),
    ]
}

/// Build the positioned surface of every shape in order.
///
/// Returns `None` if the outline provider cannot supply any of the texts; the
/// composition is all-or-nothing.
pub fn build_shape_surfaces(
    shapes: &[PlacedShape],
    provider: &dyn OutlineProvider,
    style: &TextStyle,
    curve_segments: usize,
) -> Option<Vec<Surface>> {
    shapes
        .iter()
        .map(|shape| {
            let mut surface = match &shape.source {
                ShapeSource::Text(text) => provider.text_surface(text, style)?,
                ShapeSource::Heart => extrude(&heart_outline().flatten(curve_segments), style.depth),
            };
            surface
                .center()
                .scale(shape.scale)
                .translate(shape.offset.extend(0.0));
            Some(surface)
        })
        .collect()
}

/// Per-shape particle counts: the floor of each shape's share of the area.
///
/// The sum can fall short of `count`; the caller pads.
pub fn particle_quotas(areas: &[f32], count: usize) -> SmallVec<[usize; 8]> {
    let total: f64 = areas.iter().map(|a| *a as f64).sum();
    if total.is_nan() || total <= 0.0 {
        return areas.iter().map(|_| 0).collect();
    }
    areas
        .iter()
        .map(|a| ((*a as f64 / total) * count as f64).floor() as usize)
        .collect()
}

/// Sample the composed shapes into exactly `count` positions.
///
/// With no surfaces (resource unavailable) every particle sits at the origin.
/// Shortfalls from rounding or rejected shapes are padded with origin points;
/// any excess is cut.
pub fn text_layout<R: Rng + ?Sized>(
    count: usize,
    surfaces: Option<&[Surface]>,
    rng: &mut R,
) -> Vec<Vec3> {
    let Some(surfaces) = surfaces else {
        log::warn!("text layout: shape resource unavailable, collapsing to origin");
        return vec![Vec3::ZERO; count];
    };

    let areas: SmallVec<[f32; 8]> = surfaces.iter().map(geometry::area).collect();
    let quotas = particle_quotas(&areas, count);
    log::debug!("text layout: areas {areas:?} quotas {quotas:?}");

    let mut points = Vec::with_capacity(count);
    for (surface, quota) in surfaces.iter().zip(quotas) {
        match geometry::sample_points(surface, quota, rng) {
            Ok(sampled) => points.extend(sampled),
            Err(e) => log::warn!("text layout: skipping shape ({e})"),
        }
    }
    if points.len() != count {
        log::debug!("text layout: {} sampled, resizing to {count}", points.len());
    }
    points.resize(count, Vec3::ZERO);
    points
}

/// The three frozen target sets.
#[derive(Clone, Debug)]
pub struct Layouts {
    pub tree: Vec<Vec3>,
    pub explode: Vec<Vec3>,
    pub text: Vec<Vec3>,
}

impl Layouts {
    /// Build every layout for `config` and check the lengths before handing
    /// them out.
    pub fn build<R: Rng + ?Sized>(
        config: &SceneConfig,
        provider: &dyn OutlineProvider,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        let count = config.count;
        let surfaces = build_shape_surfaces(
            &config.composition,
            provider,
            &config.text_style,
            config.curve_segments,
        );
        let layouts = Self {
            tree: tree_layout(count, rng),
            explode: explosion_layout(count, rng),
            text: text_layout(count, surfaces.as_deref(), rng),
        };
        layouts.validate(count)?;
        log::info!(
            "built layouts for {count} particles (text resource {})",
            if surfaces.is_some() { "ready" } else { "missing" }
        );
        Ok(layouts)
    }

    pub fn validate(&self, expected: usize) -> Result<(), LayoutError> {
        for (layout, positions) in [
            ("tree", &self.tree),
            ("explode", &self.explode),
            ("text", &self.text),
        ] {
            if positions.len() != expected {
                return Err(LayoutError::LengthMismatch {
                    layout,
                    expected,
                    actual: positions.len(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn target(&self, mode: Mode) -> &[Vec3] {
        match mode {
            Mode::Tree => &self.tree,
            Mode::Explode => &self.explode,
            Mode::Text => &self.text,
        }
    }
}
