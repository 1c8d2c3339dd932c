use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Behavior of the normalized position once it exits [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Clamp to [0, 1]; motion halts at the end of the path.
    Once,
    /// Wrap modulo into [0, 1).
    Loop,
    /// Reflect at both boundaries.
    PingPong,
}

/// Load-time motion tuning, immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionParams {
    /// Tangential force per unit of acceleration intent.
    pub acceleration_force: f32,
    /// Tangential force per unit of braking intent.
    pub braking_force: f32,
    /// Constant deceleration magnitude; never pushes speed below zero.
    pub friction: f32,
    /// World gravity vector, injected rather than queried from a physics
    /// engine.
    pub gravity: Vec3,
    /// Scales the gravity component projected onto the path tangent.
    pub gravity_influence: f32,
    pub max_speed: f32,
    /// Speed ceiling multiplier while acceleration intent is held.
    pub max_acceleration_multiplier: f32,
    pub wrap_mode: WrapMode,
    /// Orient the vehicle to the local tangent/up frame each tick.
    pub align_to_path: bool,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            acceleration_force: 1.5,
            braking_force: 2.0,
            friction: 0.05,
            gravity: Vec3::new(0.0, -9.81, 0.0),
            gravity_influence: 0.2,
            max_speed: 5.0,
            max_acceleration_multiplier: 1.6,
            wrap_mode: WrapMode::Loop,
            align_to_path: true,
        }
    }
}
