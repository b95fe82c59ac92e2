// Host-side tests for surface area and area-weighted sampling.

use glam::Vec3;
use rand::prelude::*;
use tree_core::geometry::{barycentric_point, triangle_area};
use tree_core::*;

fn unit_right_triangle() -> Surface {
    Surface::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ])
}

#[test]
fn unit_right_triangle_has_half_area() {
    assert!((area(&unit_right_triangle()) - 0.5).abs() < 1e-6);
    assert!(
        (triangle_area(Vec3::ZERO, Vec3::X, Vec3::Y) - 0.5).abs() < 1e-6,
        "direct triangle area"
    );
}

#[test]
fn indexed_and_flat_surfaces_agree() {
    // unit square as two triangles
    let corners = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    let indexed = Surface::indexed(corners.clone(), vec![0, 1, 2, 0, 2, 3]);
    let flat = Surface::new(vec![
        corners[0], corners[1], corners[2], corners[0], corners[2], corners[3],
    ]);
    assert_eq!(indexed.triangle_count(), 2);
    assert_eq!(flat.triangle_count(), 2);
    assert!((area(&indexed) - 4.0).abs() < 1e-5);
    assert!((area(&indexed) - area(&flat)).abs() < 1e-6);
}

#[test]
fn samples_stay_inside_single_triangle() {
    let surface = unit_right_triangle();
    let mut rng = StdRng::seed_from_u64(7);
    let points = sample_points(&surface, 10_000, &mut rng).expect("valid surface");
    assert_eq!(points.len(), 10_000);
    for p in &points {
        // barycentric coordinates w.r.t. (0,0,0), (1,0,0), (0,1,0)
        let (u, v) = (p.x, p.y);
        let w = 1.0 - u - v;
        assert!(u >= -1e-6 && v >= -1e-6 && w >= -1e-6, "outside triangle: {p:?}");
        assert!(((u + v + w) - 1.0).abs() < 1e-5);
        assert!(p.x >= -1e-6 && p.x <= 1.0 + 1e-6 && p.y >= -1e-6 && p.y <= 1.0 + 1e-6);
        assert_eq!(p.z, 0.0);
    }
}

#[test]
fn reflected_draws_land_inside() {
    let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::Y);
    // r1 + r2 > 1 gets folded back
    let p = barycentric_point(a, b, c, 0.9, 0.8);
    assert!((p - Vec3::new(0.2, 0.7, 0.0)).length() < 1e-6, "{p:?}");
    let q = barycentric_point(a, b, c, 0.25, 0.25);
    assert!((q - Vec3::new(0.25, 0.5, 0.0)).length() < 1e-6, "{q:?}");
}

#[test]
fn sampling_follows_area_ratio() {
    // 3:1 area ratio, far apart so points are easy to attribute
    let surface = Surface::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(11.0, 0.0, 0.0),
        Vec3::new(10.0, 1.0, 0.0),
    ]);
    let mut rng = StdRng::seed_from_u64(42);
    let n = 100_000;
    let points = sample_points(&surface, n, &mut rng).expect("valid surface");
    let big = points.iter().filter(|p| p.x < 5.0).count() as f32 / n as f32;
    assert!((big - 0.75).abs() < 0.02, "big share {big}");
}

#[test]
fn empty_and_degenerate_surfaces_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        sample_points(&Surface::default(), 10, &mut rng),
        Err(SampleError::EmptySurface)
    );
    let collinear = Surface::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
    ]);
    assert_eq!(
        sample_points(&collinear, 10, &mut rng),
        Err(SampleError::DegenerateSurface)
    );
    assert!(SurfaceSampler::new(&collinear).is_err());
}

#[test]
fn zero_count_yields_no_points() {
    let mut rng = StdRng::seed_from_u64(1);
    let points = sample_points(&unit_right_triangle(), 0, &mut rng).expect("valid surface");
    assert!(points.is_empty());
}

#[test]
fn pick_triangle_uses_lower_bound_and_clamps() {
    let surface = Surface::new(vec![
        Vec3::ZERO,
        Vec3::X,
        Vec3::Y, // area 0.5, cumulative 0.5
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0), // area 1.0, cumulative 1.5
    ]);
    let sampler = SurfaceSampler::new(&surface).expect("valid surface");
    assert!((sampler.total_area() - 1.5).abs() < 1e-6);
    assert_eq!(sampler.pick_triangle(0.0), 0);
    assert_eq!(sampler.pick_triangle(0.5), 0);
    assert_eq!(sampler.pick_triangle(0.50001), 1);
    assert_eq!(sampler.pick_triangle(1.5), 1);
    // rounding past the last prefix sum falls back to the last triangle
    assert_eq!(sampler.pick_triangle(2.0), 1);
}

#[test]
fn center_scale_translate_compose() {
    let mut surface = Surface::new(vec![
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(4.0, 2.0, 0.0),
        Vec3::new(2.0, 6.0, 1.0),
    ]);
    surface
        .center()
        .scale(Vec3::new(2.0, 1.0, 1.0))
        .translate(Vec3::new(0.0, -3.0, 0.0));
    let (lo, hi) = surface.bounding_box().expect("non-empty");
    assert!((lo - Vec3::new(-2.0, -5.0, -0.5)).length() < 1e-6, "{lo:?}");
    assert!((hi - Vec3::new(2.0, -1.0, 0.5)).length() < 1e-6, "{hi:?}");
}

#[test]
fn merge_keeps_total_area() {
    let mut a = Surface::indexed(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 2]);
    let b = Surface::indexed(
        vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)],
        vec![0, 1, 2],
    );
    a.merge(&b);
    assert_eq!(a.triangle_count(), 2);
    assert!((area(&a) - 2.5).abs() < 1e-6);

    // mixing forms flattens
    a.merge(&unit_right_triangle());
    assert!(a.indices.is_none());
    assert_eq!(a.triangle_count(), 3);
    assert!((area(&a) - 3.0).abs() < 1e-6);
}
