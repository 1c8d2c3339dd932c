use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::path::PathGeometry;

use super::sample::CurvatureSample;

/// Load-time curvature monitor tuning, immutable for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvatureParams {
    /// Forward finite-difference step in path-parameter units.
    pub finite_difference_step: f32,
    /// Floor for tangent magnitudes before division.
    pub tangent_epsilon: f32,
    /// Centripetal acceleration above which a sharp-curve event fires.
    pub centripetal_threshold: f32,
}

impl Default for CurvatureParams {
    fn default() -> Self {
        Self {
            finite_difference_step: 0.001,
            tangent_epsilon: 1e-4,
            centripetal_threshold: 50.0,
        }
    }
}

/// Derives curvature and centripetal data from the path geometry and the
/// current motion state, once per tick after the motion update.
///
/// All computation is total: near-zero tangents hold the last sample
/// (stale but safe) and degenerate cross products collapse to a zero force
/// vector rather than NaN.
pub struct CurvatureMonitor {
    params: CurvatureParams,
    last: CurvatureSample,
}

impl CurvatureMonitor {
    pub fn new(params: CurvatureParams) -> Self {
        Self {
            params,
            last: CurvatureSample::ZERO,
        }
    }

    pub fn params(&self) -> &CurvatureParams {
        &self.params
    }

    /// Most recent sample, retained across degenerate ticks.
    pub fn last_sample(&self) -> CurvatureSample {
        self.last
    }

    /// Recomputes the sample for the given position and speed.
    pub fn update(&mut self, path: &PathGeometry, t: f32, speed: f32) -> CurvatureSample {
        let tangent = path.tangent(t);
        let magnitude = tangent.length();
        if !magnitude.is_finite() || magnitude < self.params.tangent_epsilon {
            return self.last;
        }
        let unit_tangent = tangent / magnitude;

        let curvature = self.curvature_at(path, t, tangent);
        let centripetal_acceleration = speed * speed * curvature;
        let direction = self.curvature_direction(path, t, unit_tangent);

        let sample = CurvatureSample {
            curvature,
            centripetal_acceleration,
            force_vector: direction * centripetal_acceleration,
            velocity: unit_tangent * speed,
        };
        self.last = sample;
        sample
    }

    /// Level-triggered: true every tick the threshold is exceeded.
    pub fn exceeds_threshold(&self, sample: &CurvatureSample) -> bool {
        sample.centripetal_acceleration > self.params.centripetal_threshold
    }

    /// `|dT/dt| / max(|T|, epsilon)` with a forward finite difference of the
    /// unnormalized tangent.
    fn curvature_at(&self, path: &PathGeometry, t: f32, tangent: Vec3) -> f32 {
        let step = self.params.finite_difference_step;
        let next = path.tangent((t + step).clamp(0.0, 1.0));
        let derivative = (next - tangent) / step;
        derivative.length() / tangent.length().max(self.params.tangent_epsilon)
    }

    /// Unit vector perpendicular to the tangent pointing toward the inside
    /// of the turn.
    ///
    /// Built from the tangent crossed with a chord sampled symmetrically
    /// around `t`, sign-corrected against a point slightly ahead. On nearly
    /// straight spans the chord runs parallel to the tangent and the cross
    /// product degenerates; the tangent finite difference, orthogonalized
    /// against the tangent, supplies the principal normal instead.
    fn curvature_direction(&self, path: &PathGeometry, t: f32, unit_tangent: Vec3) -> Vec3 {
        let step = self.params.finite_difference_step.clamp(0.001, 0.1);
        let behind = path.position((t - step).clamp(0.0, 1.0));
        let ahead = path.position((t + step).clamp(0.0, 1.0));
        let chord = (ahead - behind).normalize_or_zero();

        let curve_normal = unit_tangent.cross(chord);
        let to_center = if curve_normal.length() > self.params.tangent_epsilon {
            unit_tangent.cross(curve_normal.normalize()).normalize_or_zero()
        } else {
            let delta = path.tangent((t + step).clamp(0.0, 1.0)) - path.tangent(t);
            (delta - unit_tangent * unit_tangent.dot(delta)).normalize_or_zero()
        };

        let offset = path.position((t + step * 0.5).clamp(0.0, 1.0)) - path.position(t);
        if to_center.dot(offset) >= 0.0 {
            to_center
        } else {
            -to_center
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Curve;
    use approx::assert_relative_eq;

    struct Line;

    impl Curve for Line {
        fn position(&self, t: f32) -> Vec3 {
            Vec3::X * (t * 100.0)
        }

        fn tangent(&self, _t: f32) -> Vec3 {
            Vec3::X * 100.0
        }

        fn up_vector(&self, _t: f32) -> Vec3 {
            Vec3::Y
        }
    }

    /// Circular arc of `sweep` radians on the unit circle; the curvature
    /// estimate `|dT/dt| / |T|` evaluates to exactly `sweep`.
    struct Arc {
        sweep: f32,
    }

    impl Curve for Arc {
        fn position(&self, t: f32) -> Vec3 {
            let angle = t * self.sweep;
            Vec3::new(angle.cos(), 0.0, angle.sin())
        }

        fn tangent(&self, t: f32) -> Vec3 {
            let angle = t * self.sweep;
            Vec3::new(-angle.sin(), 0.0, angle.cos()) * self.sweep
        }

        fn up_vector(&self, _t: f32) -> Vec3 {
            Vec3::Y
        }
    }

    /// Cubic with a stationary point at t = 0.5 where the tangent vanishes.
    struct Cusp;

    impl Curve for Cusp {
        fn position(&self, t: f32) -> Vec3 {
            let s = t - 0.5;
            Vec3::X * (s * s * s * 4.0)
        }

        fn tangent(&self, t: f32) -> Vec3 {
            let s = t - 0.5;
            Vec3::X * (s * s * 12.0)
        }

        fn up_vector(&self, _t: f32) -> Vec3 {
            Vec3::Y
        }
    }

    fn monitor() -> CurvatureMonitor {
        CurvatureMonitor::new(CurvatureParams::default())
    }

    #[test]
    fn default_params() {
        let params = CurvatureParams::default();
        assert_relative_eq!(params.finite_difference_step, 0.001);
        assert_relative_eq!(params.tangent_epsilon, 1e-4);
        assert_relative_eq!(params.centripetal_threshold, 50.0);
    }

    #[test]
    fn straight_line_has_zero_curvature() {
        let path = PathGeometry::new(Box::new(Line)).unwrap();
        let mut monitor = monitor();

        let sample = monitor.update(&path, 0.5, 10.0);

        assert_relative_eq!(sample.curvature, 0.0, epsilon = 1e-5);
        assert_relative_eq!(sample.centripetal_acceleration, 0.0, epsilon = 1e-4);
        assert_relative_eq!(sample.force_vector.length(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn unit_circle_arc_curvature_matches_sweep() {
        let path = PathGeometry::new(Box::new(Arc {
            sweep: std::f32::consts::TAU,
        }))
        .unwrap();
        let mut monitor = monitor();

        let sample = monitor.update(&path, 0.25, 1.0);

        assert_relative_eq!(sample.curvature, std::f32::consts::TAU, epsilon = 0.05);
    }

    #[test]
    fn sharper_turns_report_higher_curvature() {
        let gentle = PathGeometry::new(Box::new(Arc { sweep: 1.0 })).unwrap();
        let sharp = PathGeometry::new(Box::new(Arc { sweep: 2.0 })).unwrap();
        let mut monitor = monitor();

        let gentle_sample = monitor.update(&gentle, 0.5, 1.0);
        let sharp_sample = monitor.update(&sharp, 0.5, 1.0);

        assert!(sharp_sample.curvature > gentle_sample.curvature);
    }

    #[test]
    fn centripetal_acceleration_is_speed_squared_times_curvature() {
        // Unit-radius arc of one radian: curvature estimate = 1.
        let path = PathGeometry::new(Box::new(Arc { sweep: 1.0 })).unwrap();
        let mut monitor = monitor();

        let sample = monitor.update(&path, 0.5, 8.0);

        assert_relative_eq!(sample.curvature, 1.0, epsilon = 0.01);
        assert_relative_eq!(sample.centripetal_acceleration, 64.0, epsilon = 1.0);
    }

    #[test]
    fn threshold_is_level_triggered_and_strict() {
        let monitor = monitor();

        let above = CurvatureSample {
            centripetal_acceleration: 64.0,
            ..CurvatureSample::ZERO
        };
        let at = CurvatureSample {
            centripetal_acceleration: 50.0,
            ..CurvatureSample::ZERO
        };

        assert!(monitor.exceeds_threshold(&above));
        assert!(!monitor.exceeds_threshold(&at));
    }

    #[test]
    fn force_vector_points_toward_circle_center() {
        let path = PathGeometry::new(Box::new(Arc {
            sweep: std::f32::consts::TAU,
        }))
        .unwrap();
        let mut monitor = monitor();

        let t = 0.25;
        let sample = monitor.update(&path, t, 2.0);

        // The center sits at the origin, so inward is minus the position.
        let inward = -path.position(t).normalize();
        let direction = sample.force_vector.normalize();
        assert_relative_eq!(direction.dot(inward), 1.0, epsilon = 1e-2);
    }

    #[test]
    fn velocity_is_unit_tangent_times_speed() {
        let path = PathGeometry::new(Box::new(Line)).unwrap();
        let mut monitor = monitor();

        let sample = monitor.update(&path, 0.3, 7.5);

        assert_relative_eq!(sample.velocity.length(), 7.5, epsilon = 1e-4);
        assert_relative_eq!(sample.velocity.x, 7.5, epsilon = 1e-4);
    }

    #[test]
    fn degenerate_tangent_holds_last_sample() {
        let path = PathGeometry::new(Box::new(Cusp)).unwrap();
        let mut monitor = monitor();

        let good = monitor.update(&path, 0.1, 3.0);
        assert!(good.velocity.length() > 0.0);

        // Tangent vanishes at t = 0.5; the monitor must not crash or zero out.
        let held = monitor.update(&path, 0.5, 3.0);
        assert_eq!(held, good);
        assert_eq!(monitor.last_sample(), good);
    }

    #[test]
    fn curvature_is_never_negative() {
        let paths: Vec<Box<dyn Curve>> = vec![
            Box::new(Line),
            Box::new(Arc { sweep: 1.0 }),
            Box::new(Arc {
                sweep: std::f32::consts::TAU,
            }),
        ];

        for curve in paths {
            let path = PathGeometry::new(curve).unwrap();
            let mut monitor = monitor();
            for i in 0..=10 {
                let sample = monitor.update(&path, i as f32 / 10.0, 4.0);
                assert!(sample.curvature >= 0.0);
                assert!(sample.centripetal_acceleration >= 0.0);
            }
        }
    }
}
