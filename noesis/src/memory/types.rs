//! Record type stored in the thought memory.

use serde::{Deserialize, Serialize};

use crate::content_hash::ThoughtId;

/// A processed thought as it sits in memory.
///
/// Immutable once created: re-processing the same text produces a new record
/// rather than mutating an old one. The `sequence` number is a monotonic
/// insertion counter, assigned by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThoughtRecord {
    /// Content address of the original text.
    pub id: ThoughtId,
    /// The text as it entered the engine.
    pub original: String,
    /// The text after the refinement passes.
    pub refined: String,
    /// Emotion label supplied by the caller.
    pub emotion: String,
    /// Intuition label derived from the emotion.
    pub intuition: String,
    /// Monotonic insertion counter.
    pub sequence: u64,
}
