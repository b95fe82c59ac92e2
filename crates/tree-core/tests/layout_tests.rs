// Host-side tests for the tree, explosion and text layouts.

use glam::{Vec2, Vec3};
use rand::prelude::*;
use tree_core::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn every_layout_has_exactly_n_entries() {
    for n in [1usize, 2, 7, 100, 1234, 5000] {
        let config = SceneConfig::with_count(n);
        for provider in [&BlockFont as &dyn OutlineProvider, &NoOutlines] {
            let layouts = Layouts::build(&config, provider, &mut rng()).expect("valid config");
            assert_eq!(layouts.tree.len(), n);
            assert_eq!(layouts.explode.len(), n);
            assert_eq!(layouts.text.len(), n);
            assert!(layouts.validate(n).is_ok());
        }
    }
}

#[test]
fn tree_is_a_tapering_spiral() {
    let n = 2000;
    let tree = tree_layout(n, &mut rng());
    let half_jitter = TREE_JITTER / 2.0;
    for (i, p) in tree.iter().enumerate() {
        let t = i as f32 / n as f32;
        let expected_y = -TREE_HEIGHT / 2.0 + t * TREE_HEIGHT;
        assert!((p.y - expected_y).abs() < 1e-4);
        let max_r = (1.0 - t.powf(TREE_TAPER_EXPONENT)) * TREE_BASE_RADIUS;
        let r = Vec2::new(p.x, p.z).length();
        // jitter is at most half the width on each horizontal axis
        assert!(r <= max_r + half_jitter * std::f32::consts::SQRT_2 + 1e-4, "i={i} r={r}");
    }
    assert!(tree.iter().all(|p| p.y >= -TREE_HEIGHT / 2.0 && p.y < TREE_HEIGHT / 2.0));
    // base is wide, top is narrow
    let base = Vec2::new(tree[0].x, tree[0].z).length();
    let top = Vec2::new(tree[n - 1].x, tree[n - 1].z).length();
    assert!(base > TREE_BASE_RADIUS - 1.0);
    assert!(top < 1.0);
}

#[test]
fn tree_without_jitter_follows_the_golden_step() {
    // two draws per index; a fixed rng that always yields 0.5 cancels the jitter
    struct Half;
    impl RngCore for Half {
        fn next_u32(&mut self) -> u32 {
            1 << 31
        }
        fn next_u64(&mut self) -> u64 {
            1 << 63
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0x80);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }
    let p = tree_position(10, 100, &mut Half);
    let t: f32 = 0.1;
    let radius = (1.0 - t.powf(TREE_TAPER_EXPONENT)) * TREE_BASE_RADIUS;
    let angle = 10.0 * TREE_ANGLE_STEP;
    assert!((p.x - angle.cos() * radius).abs() < 1e-4, "{p:?}");
    assert!((p.z - angle.sin() * radius).abs() < 1e-4, "{p:?}");
}

#[test]
fn explosion_points_sit_in_the_shell() {
    let points = explosion_layout(20_000, &mut rng());
    for p in &points {
        let r = p.length();
        assert!(r >= EXPLODE_MIN_RADIUS - 1e-3 && r <= EXPLODE_MAX_RADIUS + 1e-3, "r={r}");
    }
    // directions are not biased toward the poles: about half lie within |cos| < 0.5
    let equatorial = points
        .iter()
        .filter(|p| (p.z / p.length()).abs() < 0.5)
        .count() as f32
        / points.len() as f32;
    assert!((equatorial - 0.5).abs() < 0.02, "equatorial share {equatorial}");
}

#[test]
fn explosion_is_re_randomised_per_build() {
    let a = explosion_layout(50, &mut StdRng::seed_from_u64(1));
    let b = explosion_layout(50, &mut StdRng::seed_from_u64(2));
    let a2 = explosion_layout(50, &mut StdRng::seed_from_u64(1));
    assert_ne!(a, b);
    assert_eq!(a, a2);
}

#[test]
fn quotas_floor_each_share() {
    let q = particle_quotas(&[3.0, 1.0], 10);
    assert_eq!(q.as_slice(), &[7, 2]);
    let q = particle_quotas(&[1.0, 1.0, 1.0], 100);
    assert_eq!(q.as_slice(), &[33, 33, 33]);
    assert!(q.iter().sum::<usize>() <= 100);
    let q = particle_quotas(&[0.0, 0.0], 10);
    assert_eq!(q.as_slice(), &[0, 0]);
}

#[test]
fn missing_resource_collapses_text_to_origin() {
    let n = 500;
    let config = SceneConfig::with_count(n);
    let layouts = Layouts::build(&config, &NoOutlines, &mut rng()).expect("valid config");
    assert_eq!(layouts.text.len(), n);
    assert!(layouts.text.iter().all(|p| *p == Vec3::ZERO));

    let loading: Option<BlockFont> = None;
    let layouts = Layouts::build(&config, &loading, &mut rng()).expect("valid config");
    assert!(layouts.text.iter().all(|p| *p == Vec3::ZERO));

    assert!(text_layout(n, None, &mut rng()).iter().all(|p| *p == Vec3::ZERO));
}

#[test]
fn text_points_cover_the_composition() {
    let n = 5000;
    let config = SceneConfig::with_count(n);
    let layouts = Layouts::build(&config, &BlockFont, &mut rng()).expect("valid config");
    let placed = layouts.text.iter().filter(|p| **p != Vec3::ZERO).count();
    // floor rounding loses at most one particle per shape
    assert!(placed >= n - config.composition.len(), "placed {placed}");
    for p in &layouts.text {
        assert!(p.x.abs() < 12.0 && p.y.abs() < 6.0 && p.z.abs() < 1.0, "{p:?}");
    }
    // every line of text receives particles
    let near = |y: f32| layouts.text.iter().filter(|p| (p.y - y).abs() < 0.8).count();
    assert!(near(MERRY_OFFSET.y) > 200);
    assert!(near(CHRISTMAS_OFFSET.y) > 200);
    assert!(near(LEFT_NAME_OFFSET.y) > 200);
}

#[test]
fn text_layout_pads_and_truncates() {
    let tri = Surface::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
    let degenerate = Surface::new(vec![Vec3::ZERO, Vec3::X, Vec3::X * 2.0]);

    // single shape takes the whole budget
    let pts = text_layout(10, Some(&[tri.clone()]), &mut rng());
    assert_eq!(pts.len(), 10);
    assert!(pts.iter().all(|p| p.x + p.y <= 1.0 + 1e-5));

    // a shape that cannot be sampled contributes nothing; the rest is padding
    let pts = text_layout(10, Some(&[tri.clone(), degenerate.clone()]), &mut rng());
    assert_eq!(pts.len(), 10);

    // all-degenerate input falls back to the origin
    let pts = text_layout(10, Some(&[degenerate]), &mut rng());
    assert_eq!(pts.len(), 10);
    assert!(pts.iter().all(|p| *p == Vec3::ZERO));

    let pts = text_layout(0, Some(&[tri]), &mut rng());
    assert!(pts.is_empty());
}

#[test]
fn default_composition_is_ordered() {
    let shapes = default_composition();
    let names: Vec<String> = shapes
        .iter()
        .map(|s| match &s.source {
            ShapeSource::Text(t) => t.clone(),
            ShapeSource::Heart => "<heart>".to_owned(),
        })
        .collect();
    assert_eq!(names, ["MERRY", "CHRISTMAS", "ZJY", "<heart>", "YJQ"]);
    assert_eq!(shapes[3].offset, HEART_OFFSET);
    assert_eq!(shapes[3].scale, HEART_SCALE);
}

#[test]
fn shape_surfaces_are_all_or_nothing() {
    let style = TextStyle::default();
    let shapes = default_composition();
    assert!(build_shape_surfaces(&shapes, &NoOutlines, &style, CURVE_SEGMENTS).is_none());
    let surfaces =
        build_shape_surfaces(&shapes, &BlockFont, &style, CURVE_SEGMENTS).expect("font ready");
    assert_eq!(surfaces.len(), shapes.len());
    for (surface, shape) in surfaces.iter().zip(&shapes) {
        let (lo, hi) = surface.bounding_box().expect("non-empty");
        let mid = (lo + hi) * 0.5;
        assert!((mid.truncate() - shape.offset).length() < 1e-4, "{mid:?}");
    }
    // heart-only compositions need no font
    let heart = [PlacedShape::heart(Vec2::ZERO, Vec3::ONE)];
    assert!(build_shape_surfaces(&heart, &NoOutlines, &style, CURVE_SEGMENTS).is_some());
}

#[test]
fn invalid_configs_fail_fast() {
    let mut config = SceneConfig::with_count(10);
    config.sphere_count = 11;
    assert!(matches!(
        Layouts::build(&config, &NoOutlines, &mut rng()),
        Err(LayoutError::InvalidConfig(_))
    ));
    let config = SceneConfig::with_count(0);
    assert!(Layouts::build(&config, &NoOutlines, &mut rng()).is_err());
}

#[test]
fn length_mismatch_is_reported() {
    let mut layouts =
        Layouts::build(&SceneConfig::with_count(10), &NoOutlines, &mut rng()).expect("valid");
    layouts.text.pop();
    assert_eq!(
        layouts.validate(10),
        Err(LayoutError::LengthMismatch {
            layout: "text",
            expected: 10,
            actual: 9
        })
    );
}
