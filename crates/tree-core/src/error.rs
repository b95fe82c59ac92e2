use thiserror::Error;

/// Reasons a surface cannot be sampled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("surface has no triangles")]
    EmptySurface,
    #[error("surface has zero total area")]
    DegenerateSurface,
}

/// Construction-time failures of the layout generator.
///
/// A length mismatch means a quota or rounding bug slipped past the pad and
/// truncate pass. It is never expected at runtime and callers should abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{layout} layout has {actual} entries, expected {expected}")]
    LengthMismatch {
        layout: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}
