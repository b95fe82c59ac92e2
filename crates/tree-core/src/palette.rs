//! Color helpers: hex parsing, HSL round trips and sRGB to linear conversion.
//!
//! Palette math (lightness offsets) happens in sRGB so that a given offset
//! looks the same on dark and bright colors; renderers get linear values.

use glam::Vec3;

/// `0xRRGGBB` to sRGB components in `[0, 1]`.
pub fn hex_to_srgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn srgb_channel_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}

pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(c.x),
        srgb_channel_to_linear(c.y),
        srgb_channel_to_linear(c.z),
    )
}

/// Hue, saturation and lightness, each in `[0, 1]`.
pub fn rgb_to_hsl(c: Vec3) -> Vec3 {
    let max = c.max_element();
    let min = c.min_element();
    let lightness = (min + max) / 2.0;
    if min == max {
        return Vec3::new(0.0, 0.0, lightness);
    }
    let delta = max - min;
    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    let hue = if max == c.x {
        (c.y - c.z) / delta + if c.y < c.z { 6.0 } else { 0.0 }
    } else if max == c.y {
        (c.z - c.x) / delta + 2.0
    } else {
        (c.x - c.y) / delta + 4.0
    };
    Vec3::new(hue / 6.0, saturation, lightness)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Inverse of [`rgb_to_hsl`]. Hue wraps; saturation and lightness clamp.
pub fn hsl_to_rgb(hsl: Vec3) -> Vec3 {
    let h = hsl.x.rem_euclid(1.0);
    let s = hsl.y.clamp(0.0, 1.0);
    let l = hsl.z.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Shift the HSL lightness of an sRGB color.
pub fn offset_lightness(srgb: Vec3, delta: f32) -> Vec3 {
    let mut hsl = rgb_to_hsl(srgb);
    hsl.z += delta;
    hsl_to_rgb(hsl)
}
