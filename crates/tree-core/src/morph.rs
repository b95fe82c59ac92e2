//! Per-frame interpolation of particle positions and instance transforms.
//!
//! The engine owns the only mutable copy of every particle position. Each
//! frame it pulls positions toward the layout of the active mode with a
//! clamped linear step, derives rotation and scale, and rewrites the two
//! per-kind instance buffers in place.

use crate::constants::*;
use crate::layout::Layouts;
use crate::mode::Mode;
use crate::particles::{slot, ParticleKind};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Lerp factor for one frame: `delta * rate` clamped to `[0, 1]`.
///
/// A delta of `1 / rate` seconds or more lands exactly on the target.
#[inline]
pub fn morph_step(delta: f32, rate: f32) -> f32 {
    (delta * rate).clamp(0.0, 1.0)
}

/// Move every `current` position `step` of the way toward its target.
///
/// A full step copies the target so the snap is exact.
pub fn lerp_positions(current: &mut [Vec3], target: &[Vec3], step: f32) {
    if step >= 1.0 {
        let n = current.len().min(target.len());
        current[..n].copy_from_slice(&target[..n]);
        return;
    }
    for (c, t) in current.iter_mut().zip(target) {
        *c += (*t - *c) * step;
    }
}

/// Orientation of particle `index` this frame.
///
/// Text particles stay axis-aligned; in the other modes each particle tumbles
/// with its own phase so the field never moves in lockstep.
pub fn particle_rotation(mode: Mode, index: usize, elapsed: f32) -> Quat {
    if mode == Mode::Text {
        return Quat::IDENTITY;
    }
    let phase = index as f32;
    let angles = SPIN_RATES * elapsed + Vec3::splat(phase);
    Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}

/// Uniform scale of particle `index` this frame.
pub fn particle_scale(mode: Mode, index: usize, elapsed: f32) -> f32 {
    if mode == Mode::Text {
        return TEXT_PARTICLE_SCALE;
    }
    let base = if index % 2 == 0 {
        EVEN_PARTICLE_SCALE
    } else {
        ODD_PARTICLE_SCALE
    };
    let pulse = (elapsed * PULSE_FREQUENCY + index as f32).sin() * PULSE_AMPLITUDE + 1.0;
    base * pulse
}

/// Per-instance record uploaded to the GPU: column-major model matrix and
/// linear RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Transforms and colors of every instance of one particle kind.
///
/// Both vectors are sized once; frames overwrite entries in place.
#[derive(Clone, Debug)]
pub struct InstanceBuffer {
    kind: ParticleKind,
    transforms: Vec<Mat4>,
    colors: Vec<Vec3>,
    dirty: bool,
}

impl InstanceBuffer {
    pub fn new(kind: ParticleKind, colors: Vec<Vec3>) -> Self {
        Self {
            kind,
            transforms: vec![Mat4::IDENTITY; colors.len()],
            colors,
            dirty: true,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Set after every frame; the consumer clears it once uploaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Pack into `out` for upload, reusing its allocation.
    pub fn write_raw(&self, out: &mut Vec<InstanceRaw>) {
        out.clear();
        out.extend(
            self.transforms
                .iter()
                .zip(&self.colors)
                .map(|(m, c)| InstanceRaw {
                    model: m.to_cols_array_2d(),
                    color: c.extend(1.0).to_array(),
                }),
        );
    }
}

/// The accent object above the tree: spins, wobbles, and is only visible in
/// tree mode.
#[derive(Clone, Debug)]
pub struct Topper {
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
    pub scale: f32,
}

impl Default for Topper {
    fn default() -> Self {
        Self {
            position: TOPPER_POSITION,
            yaw: 0.0,
            roll: 0.0,
            scale: 1.0,
        }
    }
}

impl Topper {
    pub fn update(&mut self, mode: Mode, step: f32, delta: f32, elapsed: f32) {
        self.yaw += delta;
        self.roll = elapsed.sin() * TOPPER_WOBBLE;
        let target = if mode == Mode::Tree { 1.0 } else { 0.0 };
        self.scale += (target - self.scale) * step;
    }

    pub fn is_visible(&self) -> bool {
        self.scale > 1e-3
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, 0.0, self.yaw, self.roll),
            self.position,
        )
    }
}

/// Mutable particle state and the render buffers derived from it.
pub struct MorphEngine {
    current: Vec<Vec3>,
    sphere_count: usize,
    rate: f32,
    spheres: InstanceBuffer,
    cubes: InstanceBuffer,
    topper: Topper,
}

impl MorphEngine {
    /// `colors` is index-aligned with particles; its length sets the particle
    /// count. Every particle starts at the origin.
    pub fn new(colors: &[Vec3], sphere_count: usize, rate: f32) -> Self {
        let split = sphere_count.min(colors.len());
        Self {
            current: vec![Vec3::ZERO; colors.len()],
            sphere_count: split,
            rate,
            spheres: InstanceBuffer::new(ParticleKind::Sphere, colors[..split].to_vec()),
            cubes: InstanceBuffer::new(ParticleKind::Cube, colors[split..].to_vec()),
            topper: Topper::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn sphere_count(&self) -> usize {
        self.sphere_count
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn spheres(&self) -> &InstanceBuffer {
        &self.spheres
    }

    pub fn cubes(&self) -> &InstanceBuffer {
        &self.cubes
    }

    pub fn buffer(&self, kind: ParticleKind) -> &InstanceBuffer {
        match kind {
            ParticleKind::Sphere => &self.spheres,
            ParticleKind::Cube => &self.cubes,
        }
    }

    pub fn buffers_mut(&mut self) -> (&mut InstanceBuffer, &mut InstanceBuffer) {
        (&mut self.spheres, &mut self.cubes)
    }

    pub fn topper(&self) -> &Topper {
        &self.topper
    }

    /// Advance one frame toward the layout selected by `mode`.
    ///
    /// `delta` is the frame time and `elapsed` the session time, both in
    /// seconds. Every particle sees the same step and mode.
    pub fn update(&mut self, layouts: &Layouts, mode: Mode, delta: f32, elapsed: f32) {
        let step = morph_step(delta, self.rate);
        let target = layouts.target(mode);
        debug_assert_eq!(target.len(), self.current.len(), "layout/particle count mismatch");

        self.topper.update(mode, step, delta, elapsed);
        lerp_positions(&mut self.current, target, step);

        for (i, pos) in self.current.iter().enumerate() {
            let rotation = particle_rotation(mode, i, elapsed);
            let scale = particle_scale(mode, i, elapsed);
            let matrix = Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, *pos);
            let buffer = match ParticleKind::of(i, self.sphere_count) {
                ParticleKind::Sphere => &mut self.spheres,
                ParticleKind::Cube => &mut self.cubes,
            };
            buffer.transforms[slot(i, self.sphere_count)] = matrix;
        }

        self.spheres.dirty = true;
        self.cubes.dirty = true;
    }
}
