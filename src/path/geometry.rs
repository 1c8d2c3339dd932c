use glam::Vec3;

use crate::error::ConfigError;

use super::curve::Curve;

/// Default sample count for the chord-sum arc length estimate.
pub const ARC_LENGTH_SAMPLES: usize = 100;

/// A curve plus its cached total arc length.
///
/// The arc length is computed once at construction by sampling equally
/// spaced points and summing chord distances; it is immutable for the
/// lifetime of a ride session. A zero or non-finite length is a fatal
/// configuration error, so downstream speed/position conversions can divide
/// by it without guards.
pub struct PathGeometry {
    curve: Box<dyn Curve>,
    arc_length: f32,
}

impl PathGeometry {
    pub fn new(curve: Box<dyn Curve>) -> Result<Self, ConfigError> {
        Self::with_samples(curve, ARC_LENGTH_SAMPLES)
    }

    pub fn with_samples(curve: Box<dyn Curve>, samples: usize) -> Result<Self, ConfigError> {
        let arc_length = compute_arc_length(curve.as_ref(), samples);
        if !arc_length.is_finite() || arc_length <= f32::EPSILON {
            return Err(ConfigError::DegenerateArcLength);
        }
        Ok(Self { curve, arc_length })
    }

    pub fn arc_length(&self) -> f32 {
        self.arc_length
    }

    pub fn position(&self, t: f32) -> Vec3 {
        self.curve.position(t.clamp(0.0, 1.0))
    }

    pub fn tangent(&self, t: f32) -> Vec3 {
        self.curve.tangent(t.clamp(0.0, 1.0))
    }

    pub fn up_vector(&self, t: f32) -> Vec3 {
        self.curve.up_vector(t.clamp(0.0, 1.0))
    }
}

fn compute_arc_length(curve: &dyn Curve, samples: usize) -> f32 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = curve.position(0.0);

    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let current = curve.position(t);
        length += prev.distance(current);
        prev = current;
    }

    length
}
