//! Path geometry: parametric curves and arc-length bookkeeping.
//!
//! A [`Curve`] supplies position, tangent, and an up reference for a
//! normalized parameter in [0, 1]. [`PathGeometry`] wraps a curve, clamps
//! the parameter, and caches the sampled total arc length for the lifetime
//! of a ride session.

mod curve;
mod geometry;
mod spline;

pub use curve::Curve;
pub use geometry::{PathGeometry, ARC_LENGTH_SAMPLES};
pub use spline::CatmullRomCurve;
