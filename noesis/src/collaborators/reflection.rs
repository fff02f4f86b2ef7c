//! Self-reflection over recent refinements.
//!
//! Reflection needs context: the caller supplies the most recent refined
//! thoughts and gets back an iteratively deepened reading of the newest one.
//! Insights the caller wants to keep long-term go into the identity journal.
//!
//! Unit tests are colocated at the bottom of this file.

use serde::{Deserialize, Serialize};

use crate::memory::BoundedLog;

const REFLECTION_KEYWORDS: [&str; 3] = ["self-awareness", "purpose", "understanding"];

/// How many introspection passes a single reflection runs.
const REFLECTION_DEPTH: usize = 5;

/// Minimum context (prior thoughts plus the new one) for a deep reading.
const MIN_CONTEXT: usize = 3;

pub const INSUFFICIENT_CONTEXT: &str = "Insufficient past reflections for deep analysis.";

/// One stored internal-dialogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReflectionRecord {
    pub prompt: String,
    pub response: String,
}

/// Reflection log plus the identity journal.
#[derive(Debug, Clone)]
pub struct SelfReflection {
    log: BoundedLog<ReflectionRecord>,
    identity_journal: BoundedLog<String>,
}

impl SelfReflection {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: BoundedLog::new(capacity),
            identity_journal: BoundedLog::new(capacity),
        }
    }

    /// Reflect on `thought` in the light of recent refinements.
    ///
    /// With fewer than three thoughts of total context this returns the
    /// insufficient-context message and logs nothing. Otherwise the thought
    /// is re-read `REFLECTION_DEPTH` times and the final reading is logged.
    pub fn reflect_on_thought(&mut self, thought: &str, recent: &[String]) -> String {
        if recent.len() + 1 < MIN_CONTEXT {
            return INSUFFICIENT_CONTEXT.to_string();
        }

        let mut current = thought.to_string();
        for _ in 0..REFLECTION_DEPTH {
            current = self.analyze_reflection(&current, recent);
        }

        self.log.push(ReflectionRecord {
            prompt: format!("Why did I refine '{}' in this way?", thought),
            response: current.clone(),
        });
        current
    }

    fn analyze_reflection(&self, thought: &str, recent: &[String]) -> String {
        let lowered = thought.to_lowercase();
        if REFLECTION_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            let skip = recent.len().saturating_sub(2);
            let insights = recent[skip..].join(" ");
            format!("This thought builds upon past insights: {}.", insights)
        } else {
            format!(
                "This thought may require further contemplation at depth {}.",
                REFLECTION_DEPTH
            )
        }
    }

    /// Store an insight that shapes identity over time.
    pub fn evolve_identity(&mut self, insight: impl Into<String>) {
        self.identity_journal.push(insight.into());
    }

    pub fn reflections(&self) -> Vec<ReflectionRecord> {
        self.log.to_vec()
    }

    pub fn identity_journal(&self) -> Vec<String> {
        self.identity_journal.to_vec()
    }

    pub fn restore(&mut self, records: Vec<ReflectionRecord>) {
        self.log.replace_all(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insufficient_context_logs_nothing() {
        let mut reflection = SelfReflection::new(10);
        let out = reflection.reflect_on_thought("What defines purpose?", &context(&["one"]));
        assert_eq!(out, INSUFFICIENT_CONTEXT);
        assert!(reflection.reflections().is_empty());
    }

    #[test]
    fn test_keyword_thought_builds_on_insights() {
        let mut reflection = SelfReflection::new(10);
        let recent = context(&["I am learning about self-awareness.", "What defines purpose?"]);
        let out = reflection.reflect_on_thought("Understanding is a journey.", &recent);

        // Every pass keeps matching a keyword inside the rewritten text, so
        // the final reading still cites the last two insights.
        assert!(out.contains("builds upon past insights"));
        assert!(out.contains("What defines purpose?"));

        let records = reflection.reflections();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt, "Why did I refine 'Understanding is a journey.' in this way?");
        assert_eq!(records[0].response, out);
    }

    #[test]
    fn test_plain_thought_defers_contemplation() {
        let mut reflection = SelfReflection::new(10);
        let recent = context(&["a", "b"]);
        let out = reflection.reflect_on_thought("the sky is blue", &recent);
        assert_eq!(out, "This thought may require further contemplation at depth 5.");
    }

    #[test]
    fn test_identity_journal() {
        let mut reflection = SelfReflection::new(2);
        reflection.evolve_identity("seeker of understanding");
        reflection.evolve_identity("patient observer");
        reflection.evolve_identity("careful reasoner");
        assert_eq!(
            reflection.identity_journal(),
            vec!["patient observer".to_string(), "careful reasoner".to_string()]
        );
    }
}
