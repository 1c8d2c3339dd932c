use glam::Vec3;

use crate::error::ConfigError;

use super::curve::Curve;

/// Centripetal-free uniform Catmull-Rom spline through a set of control
/// points.
///
/// Open splines clamp their end tangents by repeating the boundary points;
/// closed splines wrap around, producing a loop with C1 continuity at every
/// control point. The up vector is a reference direction orthogonalized
/// against the local tangent (Gram-Schmidt), so banked geometry is out of
/// scope here.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    reference_up: Vec3,
    closed: bool,
}

const MIN_OPEN_POINTS: usize = 4;
const MIN_CLOSED_POINTS: usize = 3;

impl CatmullRomCurve {
    /// Builds a spline with `Vec3::Y` as the up reference.
    ///
    /// Degenerate control-point data is a fatal configuration error caught
    /// here, not per evaluation.
    pub fn new(points: Vec<Vec3>, closed: bool) -> Result<Self, ConfigError> {
        let min = if closed {
            MIN_CLOSED_POINTS
        } else {
            MIN_OPEN_POINTS
        };
        if points.len() < min {
            return Err(ConfigError::DegenerateCurve {
                count: points.len(),
                min,
            });
        }
        Ok(Self {
            points,
            reference_up: Vec3::Y,
            closed,
        })
    }

    pub fn with_reference_up(mut self, up: Vec3) -> Self {
        self.reference_up = up;
        self
    }

    fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Maps global `t` to a segment index and local parameter `u` in [0, 1].
    fn locate(&self, t: f32) -> (usize, f32) {
        let count = self.segment_count();
        let scaled = t.clamp(0.0, 1.0) * count as f32;
        let index = (scaled as usize).min(count - 1);
        (index, scaled - index as f32)
    }

    fn control_points(&self, segment: usize) -> [Vec3; 4] {
        let n = self.points.len();
        if self.closed {
            [
                self.points[(segment + n - 1) % n],
                self.points[segment % n],
                self.points[(segment + 1) % n],
                self.points[(segment + 2) % n],
            ]
        } else {
            [
                self.points[segment.saturating_sub(1)],
                self.points[segment],
                self.points[segment + 1],
                self.points[(segment + 2).min(n - 1)],
            ]
        }
    }
}

impl Curve for CatmullRomCurve {
    fn position(&self, t: f32) -> Vec3 {
        let (segment, u) = self.locate(t);
        let [p0, p1, p2, p3] = self.control_points(segment);

        let u2 = u * u;
        let u3 = u2 * u;
        0.5 * (2.0 * p1
            + (p2 - p0) * u
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
            + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3)
    }

    fn tangent(&self, t: f32) -> Vec3 {
        let (segment, u) = self.locate(t);
        let [p0, p1, p2, p3] = self.control_points(segment);

        let u2 = u * u;
        let local = 0.5
            * ((p2 - p0)
                + 2.0 * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u
                + 3.0 * (3.0 * p1 - p0 - 3.0 * p2 + p3) * u2);
        // Chain rule: d/dt = d/du * segments-per-unit-t.
        local * self.segment_count() as f32
    }

    fn up_vector(&self, t: f32) -> Vec3 {
        let direction = self.tangent(t).normalize_or_zero();
        if direction == Vec3::ZERO {
            return self.reference_up;
        }
        (self.reference_up - direction * direction.dot(self.reference_up))
            .try_normalize()
            .unwrap_or(self.reference_up)
    }
}
