use glam::{Vec2, Vec3};

// Shared visual tuning constants used by the core and the native frontend.

// Particle budget
pub const PARTICLE_COUNT: usize = 5000;
pub const SPHERE_COUNT: usize = 2500; // the remainder are cubes

// Tree layout
pub const TREE_HEIGHT: f32 = 22.0;
pub const TREE_BASE_RADIUS: f32 = 8.0;
pub const TREE_TAPER_EXPONENT: f32 = 0.8; // >0 and <1 keeps the canopy wide until near the top
pub const TREE_ANGLE_STEP: f32 = 2.4; // radians per particle, close to the golden angle
pub const TREE_JITTER: f32 = 0.6; // full width of the horizontal jitter

// Explosion layout
pub const EXPLODE_MIN_RADIUS: f32 = 15.0;
pub const EXPLODE_MAX_RADIUS: f32 = 30.0;

// Text composition
pub const TEXT_SIZE: f32 = 2.0;
pub const TEXT_DEPTH: f32 = 0.1;
pub const HEART_SCALE: Vec3 = Vec3::new(1.8, 1.8, 1.0);
pub const CURVE_SEGMENTS: usize = 12; // per Bezier segment when flattening outlines

// Morphing
pub const MORPH_RATE: f32 = 2.0; // step = delta * rate, clamped to [0, 1]

// Per-particle animation
pub const TEXT_PARTICLE_SCALE: f32 = 0.12;
pub const EVEN_PARTICLE_SCALE: f32 = 0.35;
pub const ODD_PARTICLE_SCALE: f32 = 0.3;
pub const PULSE_FREQUENCY: f32 = 2.0; // radians per second
pub const PULSE_AMPLITUDE: f32 = 0.1; // fraction of the base scale
pub const SPIN_RATES: Vec3 = Vec3::new(0.2, 0.1, 0.3); // radians per second around X, Y, Z

// Topper accent
pub const TOPPER_POSITION: Vec3 = Vec3::new(0.0, 11.0, 0.0);
pub const TOPPER_RADIUS: f32 = 1.5;
pub const TOPPER_WOBBLE: f32 = 0.1; // roll amplitude in radians

// Palette (sRGB hex)
pub const GOLD: u32 = 0xFFD700;
pub const RED: u32 = 0xD90429;
pub const GREEN: u32 = 0x006400;
pub const DEEP_GOLD: u32 = 0xB8860B;
pub const TOPPER_COLOR: u32 = 0xFFFF00;
pub const BACKGROUND_COLOR: u32 = 0x050505;

pub const SPHERE_GOLD_PROBABILITY: f64 = 0.6;
pub const CUBE_GOLD_PROBABILITY: f64 = 0.5;
pub const LIGHTNESS_JITTER: f32 = 0.1; // full width of the HSL lightness offset

// Camera (native frontend)
pub const CAMERA_DISTANCE: f32 = 25.0;
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_MIN_DISTANCE: f32 = 10.0;
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;
pub const AUTO_ROTATE_SPEED: f32 = 0.5; // in units of one orbit per 60 seconds

/// Placement of each line of the default composition.
pub const MERRY_OFFSET: Vec2 = Vec2::new(0.0, 3.5);
pub const CHRISTMAS_OFFSET: Vec2 = Vec2::new(0.0, 0.0);
pub const LEFT_NAME_OFFSET: Vec2 = Vec2::new(-4.5, -3.5);
pub const HEART_OFFSET: Vec2 = Vec2::new(0.0, -3.1);
pub const RIGHT_NAME_OFFSET: Vec2 = Vec2::new(4.5, -3.5);
