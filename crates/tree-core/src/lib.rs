pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod glyphs;
pub mod layout;
pub mod mode;
pub mod morph;
pub mod outline;
pub mod palette;
pub mod particles;
pub mod scene;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geometry::{area, sample_points, Surface, SurfaceSampler};
pub use glyphs::BlockFont;
pub use layout::*;
pub use mode::*;
pub use morph::*;
pub use outline::{NoOutlines, OutlineProvider, TextStyle};
pub use particles::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
