use glam::{Mat3, Quat, Vec3};

use crate::path::PathGeometry;
use crate::track::{SegmentEffect, SegmentTable};

use super::params::{MotionParams, WrapMode};

/// Player intent for one tick. Latest write wins; magnitudes are clamped to
/// [0, 1] on construction, so malformed values are tamed before the update
/// ever sees them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intent {
    pub acceleration: f32,
    pub braking: f32,
}

impl Intent {
    pub const IDLE: Self = Self {
        acceleration: 0.0,
        braking: 0.0,
    };

    pub fn new(acceleration: f32, braking: f32) -> Self {
        Self {
            acceleration: clamp_unit(acceleration),
            braking: clamp_unit(braking),
        }
    }

    pub fn accelerating(&self) -> bool {
        self.acceleration > 0.0
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// World-space pose of the vehicle on the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Owns the vehicle's normalized position and scalar speed, and advances
/// both once per physics tick.
///
/// The per-tick update: scalar forces projected on the tangent (intent,
/// gravity, friction), speed integration, the active segment's effect,
/// ceiling clamp, position advance with wrapping, pose derivation. Speed is
/// clamped to `[0, effective max]` every tick and is never negative.
pub struct MotionController {
    params: MotionParams,
    position: f32,
    speed: f32,
    pose: Pose,
}

impl MotionController {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            position: 0.0,
            speed: 0.0,
            pose: Pose::IDENTITY,
        }
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    pub fn normalized_position(&self) -> f32 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Speed ceiling for the current tick: boosted while acceleration intent
    /// is held, the plain maximum otherwise.
    pub fn effective_max_speed(&self, intent: Intent) -> f32 {
        if intent.accelerating() {
            self.params.max_speed * self.params.max_acceleration_multiplier
        } else {
            self.params.max_speed
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        intent: Intent,
        path: &PathGeometry,
        segments: &SegmentTable,
    ) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let tangent = path.tangent(self.position).normalize_or_zero();

        let input_force = intent.acceleration * self.params.acceleration_force
            - intent.braking * self.params.braking_force;
        let gravity_accel = self.params.gravity.dot(tangent) * self.params.gravity_influence;
        let total_accel = gravity_accel - self.params.friction + input_force;

        self.speed = (self.speed + total_accel * dt).max(0.0);

        // Segment effects run after the general force integration, so they
        // are authoritative for their zone.
        if let Some(segment) = segments.active_segment_at(self.position) {
            match segment.effect {
                SegmentEffect::Lift { lift_speed } => {
                    self.speed = self.speed.max(lift_speed);
                }
                SegmentEffect::Brake { strength, min_speed } => {
                    self.speed = (self.speed - strength * dt).max(min_speed);
                }
                SegmentEffect::Booster { force } => {
                    self.speed += force * dt;
                }
                SegmentEffect::Checkpoint => {}
            }
        }

        self.speed = self.speed.clamp(0.0, self.effective_max_speed(intent));

        let progress = self.speed * dt / path.arc_length();
        self.position = wrap_position(self.position + progress, self.params.wrap_mode);

        self.refresh_pose(path);
    }

    /// Reinitializes position and speed and recomputes the pose immediately,
    /// without applying a tick's worth of integration. Idempotent.
    pub fn reset_motion(&mut self, position: f32, speed: f32, path: &PathGeometry) {
        self.position = if position.is_finite() {
            position.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.speed = if speed.is_finite() {
            speed.clamp(0.0, self.params.max_speed)
        } else {
            0.0
        };
        self.refresh_pose(path);
    }

    /// Instantaneous speed change, e.g. a launch kick or collision knock.
    pub fn apply_impulse(&mut self, delta: f32) {
        if delta.is_finite() {
            self.speed = (self.speed + delta).clamp(0.0, self.params.max_speed);
        }
    }

    fn refresh_pose(&mut self, path: &PathGeometry) {
        let position = path.position(self.position);
        let rotation = if self.params.align_to_path {
            look_rotation(path.tangent(self.position), path.up_vector(self.position))
        } else {
            self.pose.rotation
        };
        self.pose = Pose { position, rotation };
    }
}

fn wrap_position(t: f32, mode: WrapMode) -> f32 {
    match mode {
        WrapMode::Once => t.clamp(0.0, 1.0),
        WrapMode::Loop => t.rem_euclid(1.0),
        WrapMode::PingPong => {
            let cycle = t.rem_euclid(2.0);
            1.0 - (cycle - 1.0).abs()
        }
    }
}

/// Rotation whose local Z axis points along `forward` with `up` as the up
/// reference. Falls back to an arbitrary perpendicular when the two are
/// parallel, and to identity when `forward` is degenerate.
fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = up
        .cross(forward)
        .try_normalize()
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}
