//! Keyword-based bias and logic review.
//!
//! The detectors are pure functions over the text; only `analyze_thought`
//! touches state, by appending the produced report to the bounded
//! meta-analysis log.
//!
//! Unit tests are colocated at the bottom of this file.

use serde::{Deserialize, Serialize};

use crate::memory::BoundedLog;

const BIAS_KEYWORDS: [&str; 4] = ["always", "never", "must", "should"];

pub const BIAS_DETECTED: &str = "Potential Absolutist Bias Detected";
pub const BIAS_NONE: &str = "No Strong Bias Identified";
pub const LOGIC_INCONSISTENT: &str = "Logical Inconsistency Detected";
pub const LOGIC_SOUND: &str = "Logical Flow Maintained";

/// One stored self-analysis report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaAnalysis {
    pub thought: String,
    pub bias: String,
    pub logical_integrity: String,
    pub correction_suggestion: String,
}

/// Recurring themes extracted from the meta-analysis log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CognitivePatterns {
    /// Unique bias labels seen, in first-seen order.
    pub common_biases: Vec<String>,
    /// The last five analyzed thoughts.
    pub recent_thoughts: Vec<String>,
}

/// Bias/logic reviewer with a bounded analysis log.
#[derive(Debug, Clone)]
pub struct MetaCognition {
    log: BoundedLog<MetaAnalysis>,
}

impl MetaCognition {
    pub fn new(capacity: usize) -> Self {
        Self {
            log: BoundedLog::new(capacity),
        }
    }

    /// Scan the thought for absolutist wording.
    pub fn detect_bias(&self, thought: &str) -> &'static str {
        let lowered = thought.to_lowercase();
        if BIAS_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            BIAS_DETECTED
        } else {
            BIAS_NONE
        }
    }

    /// Check the reasoning text for flagged inconsistency wording.
    pub fn assess_logic(&self, reasoning: &str) -> &'static str {
        if reasoning.to_lowercase().contains("contradiction") {
            LOGIC_INCONSISTENT
        } else {
            LOGIC_SOUND
        }
    }

    /// Refinement suggestion based on the two review labels.
    pub fn suggest_correction(&self, bias: &str, logic: &str) -> &'static str {
        if bias.contains("Bias Detected") {
            "Consider re-evaluating with a more flexible perspective."
        } else if logic.contains("Inconsistency") {
            "Review premises for contradictions."
        } else {
            "No Correction Needed"
        }
    }

    /// Review a thought against its reasoning text and log the report.
    pub fn analyze_thought(&mut self, thought: &str, reasoning: &str) -> MetaAnalysis {
        let bias = self.detect_bias(thought).to_string();
        let logical_integrity = self.assess_logic(reasoning).to_string();
        let correction_suggestion = self.suggest_correction(&bias, &logical_integrity).to_string();
        let report = MetaAnalysis {
            thought: thought.to_string(),
            bias,
            logical_integrity,
            correction_suggestion,
        };
        self.log.push(report.clone());
        report
    }

    /// Recurring bias labels and the most recently analyzed thoughts.
    pub fn cognitive_patterns(&self) -> CognitivePatterns {
        let mut common_biases: Vec<String> = Vec::new();
        for report in self.log.iter() {
            if !common_biases.contains(&report.bias) {
                common_biases.push(report.bias.clone());
            }
        }
        let recent_thoughts = self.log.tail(5).map(|r| r.thought.clone()).collect();
        CognitivePatterns {
            common_biases,
            recent_thoughts,
        }
    }

    pub fn records(&self) -> Vec<MetaAnalysis> {
        self.log.to_vec()
    }

    pub fn restore(&mut self, records: Vec<MetaAnalysis>) {
        self.log.replace_all(records);
    }
}
