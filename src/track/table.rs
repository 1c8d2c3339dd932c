use crate::error::ConfigError;

use super::segment::TrackSegment;

/// Ordered, read-only collection of track segments.
///
/// Lookup is a linear scan; tables hold dozens of segments at most, so no
/// index structure is warranted. When segment ranges overlap, the first
/// match in table order wins.
#[derive(Debug, Clone, Default)]
pub struct SegmentTable {
    segments: Vec<TrackSegment>,
}

impl SegmentTable {
    /// Validates every segment up front; a malformed segment refuses to
    /// start the simulation rather than misbehave mid-ride.
    pub fn new(segments: Vec<TrackSegment>) -> Result<Self, ConfigError> {
        for (index, segment) in segments.iter().enumerate() {
            segment.validate(index)?;
        }
        Ok(Self { segments })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// First segment in table order containing `t`, if any.
    pub fn active_segment_at(&self, t: f32) -> Option<&TrackSegment> {
        self.active_entry_at(t).map(|(_, segment)| segment)
    }

    /// Like [`Self::active_segment_at`] but also yields the table index.
    pub fn active_entry_at(&self, t: f32) -> Option<(usize, &TrackSegment)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, segment)| segment.is_active(t))
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
