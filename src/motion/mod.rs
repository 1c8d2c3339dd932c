//! Vehicle motion along the path: speed integration, segment effects,
//! position wrapping, and pose derivation.

mod controller;
mod params;

pub use controller::{Intent, MotionController, Pose};
pub use params::{MotionParams, WrapMode};
