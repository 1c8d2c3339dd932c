//! Ride session: wires the motion controller and curvature monitor over one
//! path and segment table, and runs them in deterministic order each tick.

use log::debug;

use crate::curvature::{CurvatureMonitor, CurvatureParams, CurvatureSample};
use crate::error::ConfigError;
use crate::motion::{Intent, MotionController, MotionParams, Pose};
use crate::path::{Curve, PathGeometry};
use crate::track::{SegmentEffect, SegmentTable, TrackSegment};

/// Outputs of one tick, consumed by HUD/audio/telemetry collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub pose: Pose,
    pub speed: f32,
    pub normalized_position: f32,
    pub sample: CurvatureSample,
    /// Level-triggered: set every tick the centripetal threshold is exceeded.
    pub sharp_curve: bool,
    /// Edge-triggered: the segment index on the tick the vehicle enters a
    /// checkpoint zone. External lap/scoring logic consumes this.
    pub checkpoint: Option<usize>,
}

/// A single vehicle on a single path.
///
/// Owns all mutable simulation state; independent rides share nothing.
/// Intent is sampled latest-write-wins: collaborators may set it at frame
/// cadence, the physics tick reads whatever was written last.
pub struct Ride {
    path: PathGeometry,
    segments: SegmentTable,
    controller: MotionController,
    monitor: CurvatureMonitor,
    intent: Intent,
    last_checkpoint: Option<usize>,
}

impl Ride {
    /// Validates and assembles a session. All fatal configuration checks
    /// (degenerate curve, zero arc length, malformed segments) happen here;
    /// once a `Ride` exists, every tick is total.
    pub fn new(
        curve: Box<dyn Curve>,
        segments: Vec<TrackSegment>,
        motion: MotionParams,
        curvature: CurvatureParams,
    ) -> Result<Self, ConfigError> {
        let path = PathGeometry::new(curve)?;
        let table = SegmentTable::new(segments)?;
        Ok(Self::from_parts(path, table, motion, curvature))
    }

    /// Assembles a session from already-validated parts.
    pub fn from_parts(
        path: PathGeometry,
        segments: SegmentTable,
        motion: MotionParams,
        curvature: CurvatureParams,
    ) -> Self {
        let mut controller = MotionController::new(motion);
        controller.reset_motion(0.0, 0.0, &path);
        Self {
            path,
            segments,
            controller,
            monitor: CurvatureMonitor::new(curvature),
            intent: Intent::IDLE,
            last_checkpoint: None,
        }
    }

    pub fn path(&self) -> &PathGeometry {
        &self.path
    }

    pub fn segments(&self) -> &SegmentTable {
        &self.segments
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
    }

    pub fn speed(&self) -> f32 {
        self.controller.speed()
    }

    pub fn normalized_position(&self) -> f32 {
        self.controller.normalized_position()
    }

    pub fn pose(&self) -> Pose {
        self.controller.pose()
    }

    pub fn last_sample(&self) -> CurvatureSample {
        self.monitor.last_sample()
    }

    /// Instantaneous speed kick, outside the regular force integration.
    pub fn apply_impulse(&mut self, delta: f32) {
        self.controller.apply_impulse(delta);
    }

    /// Advances one physics tick: motion first, then the curvature monitor
    /// over the fresh position and speed.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        self.controller
            .update(dt, self.intent, &self.path, &self.segments);

        let position = self.controller.normalized_position();
        let speed = self.controller.speed();
        let sample = self.monitor.update(&self.path, position, speed);

        let sharp_curve = self.monitor.exceeds_threshold(&sample);
        if sharp_curve {
            debug!(
                "sharp curve at t={:.3}: centripetal acceleration {:.1}",
                position, sample.centripetal_acceleration
            );
        }

        let checkpoint = self.checkpoint_entry(position);
        if let Some(index) = checkpoint {
            debug!("entered checkpoint segment {index} at t={position:.3}");
        }

        TickReport {
            pose: self.controller.pose(),
            speed,
            normalized_position: position,
            sample,
            sharp_curve,
            checkpoint,
        }
    }

    /// Reinitializes the vehicle without a tick's worth of integration;
    /// fully applied before the next read of position or speed.
    pub fn reset(&mut self, position: f32, speed: f32) {
        self.controller.reset_motion(position, speed, &self.path);
        self.intent = Intent::IDLE;
        self.last_checkpoint = None;
        debug!(
            "ride reset: t={:.3}, speed={:.2}",
            self.controller.normalized_position(),
            self.controller.speed()
        );
    }

    fn checkpoint_entry(&mut self, position: f32) -> Option<usize> {
        let current = self
            .segments
            .active_entry_at(position)
            .filter(|(_, segment)| matches!(segment.effect, SegmentEffect::Checkpoint))
            .map(|(index, _)| index);

        let entered = match (self.last_checkpoint, current) {
            (None, Some(index)) => Some(index),
            (Some(previous), Some(index)) if previous != index => Some(index),
            _ => None,
        };
        self.last_checkpoint = current;
        entered
    }
}
