//! Emotion weighting and trend tracking.
//!
//! The label tables are closed sets with an explicit fallback arm; any
//! unrecognized emotion falls through to the neutral weighting rather than
//! erroring. Trend counters are insertion-ordered so equal counts report in
//! first-seen order.
//!
//! Unit tests are colocated at the bottom of this file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::memory::BoundedLog;

/// The closed set of emotions the weighting tables know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Neutral,
}

impl Emotion {
    /// Case-insensitive parse; `None` for labels outside the closed set.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "joy" => Some(Emotion::Joy),
            "sadness" => Some(Emotion::Sadness),
            "anger" => Some(Emotion::Anger),
            "fear" => Some(Emotion::Fear),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }

    /// Textual tone applied during refinement.
    pub fn tone(self) -> &'static str {
        match self {
            Emotion::Joy => "optimistic",
            Emotion::Sadness => "introspective",
            Emotion::Anger => "critical",
            Emotion::Fear => "cautious",
            Emotion::Neutral => "balanced",
        }
    }

    /// Cognitive weight applied to a thought carrying this emotion.
    pub fn weight(self) -> f64 {
        match self {
            Emotion::Joy => 1.2,
            Emotion::Sadness => 0.8,
            Emotion::Anger => 1.1,
            Emotion::Fear => 0.9,
            Emotion::Neutral => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Neutral => "neutral",
        }
    }
}

/// Tone label for a raw emotion string. Unknown labels read as "neutral",
/// which is distinct from the explicit neutral emotion ("balanced").
pub fn tone_label(raw: &str) -> &'static str {
    Emotion::parse(raw).map(Emotion::tone).unwrap_or("neutral")
}

/// Weight for a raw emotion string, 1.0 for anything unrecognized.
pub fn weight_for(raw: &str) -> f64 {
    Emotion::parse(raw).map(Emotion::weight).unwrap_or(1.0)
}

/// Intuition label derived from the emotion, recorded on every thought.
pub fn intuition_label(raw: &str) -> &'static str {
    match Emotion::parse(raw) {
        Some(Emotion::Joy) => "expansive",
        Some(Emotion::Sadness) => "withdrawn",
        Some(Emotion::Anger) => "assertive",
        Some(Emotion::Fear) => "guarded",
        _ => "steady",
    }
}

/// One tagged thought as it sits in the emotion memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmotionRecord {
    pub thought: String,
    pub emotion: String,
}

/// Bounded emotion memory plus recurring-emotion counters.
#[derive(Debug, Clone)]
pub struct EmotionEngine {
    memory: BoundedLog<EmotionRecord>,
    trends: IndexMap<String, u64>,
}

impl EmotionEngine {
    pub fn new(capacity: usize) -> Self {
        Self {
            memory: BoundedLog::new(capacity),
            trends: IndexMap::new(),
        }
    }

    /// Tag a thought with an emotion, bump its trend counter and return the
    /// weighted label line.
    pub fn process_emotion(&mut self, thought: &str, emotion: &str) -> String {
        self.memory.push(EmotionRecord {
            thought: thought.to_string(),
            emotion: emotion.to_string(),
        });
        *self.trends.entry(emotion.to_string()).or_insert(0) += 1;
        format!("Processed Thought: {} (Weight: {})", thought, weight_for(emotion))
    }

    /// Emotions by frequency, most frequent first. Equal counts keep their
    /// first-seen order.
    pub fn emotional_trends(&self) -> Vec<(String, u64)> {
        let mut trends: Vec<(String, u64)> =
            self.trends.iter().map(|(k, v)| (k.clone(), *v)).collect();
        trends.sort_by(|a, b| b.1.cmp(&a.1));
        trends
    }

    pub fn records(&self) -> Vec<EmotionRecord> {
        self.memory.to_vec()
    }

    /// Load-path replacement; trend counters are rebuilt from the records
    /// that survive capacity truncation.
    pub fn restore(&mut self, records: Vec<EmotionRecord>) {
        self.memory.replace_all(records);
        self.trends.clear();
        let counted: Vec<String> = self.memory.iter().map(|r| r.emotion.clone()).collect();
        for emotion in counted {
            *self.trends.entry(emotion).or_insert(0) += 1;
        }
    }
}
