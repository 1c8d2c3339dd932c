//! Curvature monitoring: finite-difference curvature, centripetal
//! acceleration, and sharp-curve threshold detection.

mod monitor;
mod sample;

pub use monitor::{CurvatureMonitor, CurvatureParams};
pub use sample::CurvatureSample;
