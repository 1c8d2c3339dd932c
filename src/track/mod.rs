//! Track segments: labeled sub-ranges of the path with discrete speed
//! effects.
//!
//! Segments are authored before a session starts and are read-only during
//! simulation; the table resolves which zone, if any, is active at a given
//! normalized position.

mod segment;
mod table;

pub use segment::{SegmentEffect, TrackSegment};
pub use table::SegmentTable;
