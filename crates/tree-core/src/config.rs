use crate::constants::{CURVE_SEGMENTS, MORPH_RATE, PARTICLE_COUNT, SPHERE_COUNT};
use crate::error::LayoutError;
use crate::layout::{default_composition, PlacedShape};
use crate::outline::TextStyle;

/// Scene-wide parameters fixed at construction time.
///
/// - `count`: total particles, `sphere_count` of which are spheres
/// - `morph_rate`: per-second factor turning frame delta into a lerp step
/// - `text_style` / `curve_segments`: how shape outlines are built
/// - `composition`: ordered shapes of the text formation
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub count: usize,
    pub sphere_count: usize,
    pub morph_rate: f32,
    pub text_style: TextStyle,
    pub curve_segments: usize,
    pub composition: Vec<PlacedShape>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            sphere_count: SPHERE_COUNT,
            morph_rate: MORPH_RATE,
            text_style: TextStyle::default(),
            curve_segments: CURVE_SEGMENTS,
            composition: default_composition(),
        }
    }
}

impl SceneConfig {
    /// Default scene scaled to `count` particles, half of them spheres.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            sphere_count: count / 2,
            ..Self::default()
        }
    }

    pub fn cube_count(&self) -> usize {
        self.count.saturating_sub(self.sphere_count)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.count == 0 {
            return Err(LayoutError::InvalidConfig("particle count is zero".into()));
        }
        if self.sphere_count > self.count {
            return Err(LayoutError::InvalidConfig(format!(
                "sphere count {} exceeds particle count {}",
                self.sphere_count, self.count
            )));
        }
        if !(self.morph_rate.is_finite() && self.morph_rate >= 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "morph rate {} is not a non-negative number",
                self.morph_rate
            )));
        }
        Ok(())
    }
}
