// Host-side tests for color conversion and particle color assignment.

use glam::Vec3;
use rand::prelude::*;
use tree_core::palette::*;
use tree_core::*;

#[test]
fn hex_parses_channels() {
    assert_eq!(hex_to_srgb(0xFF0000), Vec3::X);
    assert_eq!(hex_to_srgb(0x000000), Vec3::ZERO);
    let gold = hex_to_srgb(GOLD);
    assert!((gold - Vec3::new(1.0, 215.0 / 255.0, 0.0)).length() < 1e-6);
}

#[test]
fn hsl_round_trips() {
    for hex in [GOLD, RED, GREEN, DEEP_GOLD, 0x808080, 0x123456] {
        let c = hex_to_srgb(hex);
        let back = hsl_to_rgb(rgb_to_hsl(c));
        assert!((back - c).length() < 1e-5, "{hex:06x}: {c:?} vs {back:?}");
    }
}

#[test]
fn lightness_offset_clamps() {
    assert_eq!(offset_lightness(Vec3::ONE, 0.5), Vec3::ONE);
    assert_eq!(offset_lightness(Vec3::ZERO, -0.5), Vec3::ZERO);
    let lighter = offset_lightness(hex_to_srgb(GREEN), 0.05);
    assert!(rgb_to_hsl(lighter).z > rgb_to_hsl(hex_to_srgb(GREEN)).z);
}

#[test]
fn linear_conversion_keeps_endpoints() {
    assert_eq!(srgb_to_linear(Vec3::ZERO), Vec3::ZERO);
    assert!((srgb_to_linear(Vec3::ONE) - Vec3::ONE).length() < 1e-5);
    // mid grey is darker in linear space
    assert!(srgb_channel_to_linear(0.5) < 0.25);
}

#[test]
fn colors_stay_near_their_palette() {
    let mut rng = StdRng::seed_from_u64(12);
    let colors = assign_colors(2000, 1000, &mut rng);
    assert_eq!(colors.len(), 2000);
    for c in &colors {
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0 + 1e-5, "{c:?}");
    }
    // gold keeps a strong green channel, red has almost none
    let (spheres, cubes) = colors.split_at(1000);
    let gold = spheres.iter().filter(|c| c.y > 0.3).count();
    let red = spheres.iter().filter(|c| c.y < 0.05).count();
    assert_eq!(gold + red, spheres.len());
    let share = gold as f64 / spheres.len() as f64;
    assert!((share - SPHERE_GOLD_PROBABILITY).abs() < 0.06, "gold share {share}");

    // deep gold keeps its red channel, green has none
    let deep = cubes.iter().filter(|c| c.x > 0.3).count();
    let green = cubes.iter().filter(|c| c.x < 0.05).count();
    assert_eq!(deep + green, cubes.len());
    let share = deep as f64 / cubes.len() as f64;
    assert!((share - CUBE_GOLD_PROBABILITY).abs() < 0.06, "deep gold share {share}");
}
