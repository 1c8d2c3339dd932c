use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Discrete effect a segment applies to the vehicle's speed while active.
///
/// One tagged variant per segment kind; the motion controller dispatches on
/// it with a single exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentEffect {
    /// Enforces a speed floor, as a chain lift does. Never slows the vehicle.
    Lift { lift_speed: f32 },
    /// Constant deceleration with a floor that prevents a full stop mid-zone.
    Brake { strength: f32, min_speed: f32 },
    /// Unconditional additive acceleration while inside the zone.
    Booster { force: f32 },
    /// No speed effect; hook point for external lap/scoring logic.
    Checkpoint,
}

/// A sub-range [start, end] of the normalized path parameter with an effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    pub start: f32,
    pub end: f32,
    pub effect: SegmentEffect,
}

impl TrackSegment {
    pub const fn new(start: f32, end: f32, effect: SegmentEffect) -> Self {
        Self { start, end, effect }
    }

    /// A segment is active at `t` iff `start <= t <= end` (inclusive).
    pub fn is_active(&self, t: f32) -> bool {
        t >= self.start && t <= self.end
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let in_range = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.end <= 1.0
            && self.start <= self.end;
        if !in_range {
            return Err(ConfigError::SegmentRange {
                index,
                start: self.start,
                end: self.end,
            });
        }

        let params_finite = match self.effect {
            SegmentEffect::Lift { lift_speed } => lift_speed.is_finite(),
            SegmentEffect::Brake { strength, min_speed } => {
                strength.is_finite() && min_speed.is_finite()
            }
            SegmentEffect::Booster { force } => force.is_finite(),
            SegmentEffect::Checkpoint => true,
        };
        if !params_finite {
            return Err(ConfigError::SegmentParameter { index });
        }

        Ok(())
    }
}
