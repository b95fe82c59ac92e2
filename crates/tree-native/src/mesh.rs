//! Unit meshes drawn once per instance: UV sphere, cube and the octahedron topper.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.vertices.len() as u16;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        index
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Sphere of `radius` with `segments` around the equator and `rings` pole to pole.
pub fn uv_sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for ring in 0..=rings {
        let theta = ring as f32 / rings as f32 * PI;
        for seg in 0..=segments {
            let phi = seg as f32 / segments as f32 * TAU;
            let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            mesh.push(n * radius, n);
        }
    }
    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = (ring * stride + seg) as u16;
            let b = a + stride as u16;
            // poles collapse one triangle of each quad
            if ring != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if ring != rings - 1 {
                mesh.indices.extend_from_slice(&[b, b + 1, a + 1]);
            }
        }
    }
    mesh
}

/// Axis-aligned cube with edge `size`, flat-shaded.
pub fn cube(size: f32) -> MeshData {
    let h = size / 2.0;
    let mut mesh = MeshData::default();
    for normal in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z] {
        // two tangents spanning the face, ordered so the face winds counter-clockwise
        let u = if normal.y.abs() > 0.5 {
            Vec3::X
        } else {
            Vec3::Y
        };
        let v = normal.cross(u);
        let corners = [-u - v, u - v, u + v, -u + v].map(|c| (normal + c) * h);
        let base = mesh.push(corners[0], normal);
        for c in &corners[1..] {
            mesh.push(*c, normal);
        }
        let (b0, b1, b2, b3) = (base, base + 1, base + 2, base + 3);
        let ccw = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .dot(normal)
            > 0.0;
        if ccw {
            mesh.indices.extend_from_slice(&[b0, b1, b2, b0, b2, b3]);
        } else {
            mesh.indices.extend_from_slice(&[b0, b2, b1, b0, b3, b2]);
        }
    }
    mesh
}

/// Regular octahedron with vertices at distance `radius`, flat-shaded.
pub fn octahedron(radius: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let poles = [Vec3::Y, Vec3::NEG_Y];
    let ring = [Vec3::X, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Z];
    for pole in poles {
        for k in 0..4 {
            let (a, b) = (ring[k], ring[(k + 1) % 4]);
            let mut tri = [pole, a, b];
            if (a - pole).cross(b - pole).dot(pole + a + b) < 0.0 {
                tri.swap(1, 2);
            }
            let face_normal = (pole + a + b).normalize();
            for p in tri {
                let i = mesh.push(p * radius, face_normal);
                mesh.indices.push(i);
            }
        }
    }
    mesh
}
