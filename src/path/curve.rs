use glam::Vec3;

/// A differentiable parametric curve over `t` in [0, 1].
///
/// `tangent` returns the raw derivative dP/dt, not a unit vector; callers
/// that need a direction normalize it themselves. Implementations may assume
/// `t` has already been clamped to [0, 1] by [`super::PathGeometry`].
pub trait Curve {
    fn position(&self, t: f32) -> Vec3;
    fn tangent(&self, t: f32) -> Vec3;
    fn up_vector(&self, t: f32) -> Vec3;
}
