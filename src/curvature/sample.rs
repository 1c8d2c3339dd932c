use glam::Vec3;

/// Derived curvature data for one tick.
///
/// Pure output, recomputed every tick from the path geometry and the fresh
/// motion state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureSample {
    /// Local rate of tangent-direction change per unit path parameter,
    /// normalized by the tangent magnitude. Always >= 0.
    pub curvature: f32,
    /// `speed^2 * curvature`, the inward acceleration needed to hold the
    /// curve at the current speed. Always >= 0.
    pub centripetal_acceleration: f32,
    /// Unit-mass centripetal force, pointing toward the inside of the turn.
    pub force_vector: Vec3,
    /// World-space velocity: unit tangent scaled by the current speed.
    pub velocity: Vec3,
}

impl CurvatureSample {
    pub const ZERO: Self = Self {
        curvature: 0.0,
        centripetal_acceleration: 0.0,
        force_vector: Vec3::ZERO,
        velocity: Vec3::ZERO,
    };
}

impl Default for CurvatureSample {
    fn default() -> Self {
        Self::ZERO
    }
}
