//! splinerider - path-following motion and curvature analysis for
//! rail-constrained rides.
//!
//! # Architecture
//!
//! Layered modules, leaf to root:
//!
//! - **path**: Parametric curves, arc-length sampling ([`PathGeometry`])
//! - **track**: Ordered speed-effect zones along the path ([`SegmentTable`])
//! - **motion**: Per-tick speed integration and pose ([`MotionController`])
//! - **curvature**: Centripetal monitoring and events ([`CurvatureMonitor`])
//! - **ride**: Session aggregate wiring the above ([`Ride`])
//!
//! The host drives a fixed-timestep loop: write the latest [`Intent`], call
//! [`Ride::tick`], consume the [`TickReport`]. Everything is single-threaded
//! and deterministic; all fallible validation happens at construction.
//!
//! ```
//! use splinerider::{CatmullRomCurve, CurvatureParams, Intent, MotionParams, Ride};
//! use glam::Vec3;
//!
//! let curve = CatmullRomCurve::new(
//!     vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(10.0, 2.0, 0.0),
//!         Vec3::new(10.0, 2.0, 10.0),
//!         Vec3::new(0.0, 0.0, 10.0),
//!     ],
//!     true,
//! )?;
//! let mut ride = Ride::new(
//!     Box::new(curve),
//!     vec![],
//!     MotionParams::default(),
//!     CurvatureParams::default(),
//! )?;
//!
//! ride.set_intent(Intent::new(1.0, 0.0));
//! let report = ride.tick(0.01);
//! assert!(report.speed >= 0.0);
//! # Ok::<(), splinerider::ConfigError>(())
//! ```

pub mod curvature;
pub mod error;
pub mod motion;
pub mod path;
pub mod ride;
pub mod track;

// Re-export commonly used types at crate root
pub use curvature::{CurvatureMonitor, CurvatureParams, CurvatureSample};
pub use error::ConfigError;
pub use motion::{Intent, MotionController, MotionParams, Pose, WrapMode};
pub use path::{CatmullRomCurve, Curve, PathGeometry};
pub use ride::{Ride, TickReport};
pub use track::{SegmentEffect, SegmentTable, TrackSegment};
