//! Fatal configuration errors.
//!
//! Everything that could make the simulation produce NaN or garbage is
//! rejected at construction time. Per-tick computation is total and never
//! returns an error; transient numeric hazards are handled locally with
//! epsilon guards.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("curve has {count} control points, need at least {min}")]
    DegenerateCurve { count: usize, min: usize },

    #[error("path arc length is zero or not finite")]
    DegenerateArcLength,

    #[error("track segment {index} range [{start}, {end}] must satisfy 0 <= start <= end <= 1")]
    SegmentRange { index: usize, start: f32, end: f32 },

    #[error("track segment {index} has a non-finite parameter")]
    SegmentParameter { index: usize },
}
