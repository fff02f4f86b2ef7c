//! Bounded multi-pass thought refinement.
//!
//! Each pass looks up the current intermediate text in the graph's
//! refinement map, folds the previous refinement into the new text and
//! applies the emotion tone. The final pass also mixes in the tail of the
//! thought memory. Depth is an explicit loop bound, so refinement always
//! terminates after exactly `max_depth` passes regardless of input.
//!
//! Unit tests are colocated at the bottom of this file.

use crate::collaborators::emotion::tone_label;
use crate::content_hash::thought_hash;
use crate::graph::KnowledgeGraph;
use crate::memory::{BoundedLog, ThoughtRecord};

/// How many trailing memory entries the final pass folds in.
pub const INFLUENCE_WINDOW: usize = 5;

/// Multi-pass refiner with a fixed maximum depth.
#[derive(Debug, Clone, Copy)]
pub struct ThoughtRefiner {
    max_depth: usize,
}

impl ThoughtRefiner {
    /// Depth zero is clamped to one; a refiner that never runs a pass would
    /// return its input unchanged and break the toned-output contract.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Run the refinement passes. Reads engine state, never mutates it, so
    /// repeated calls on unchanged state return identical output.
    pub fn refine(
        &self,
        graph: &KnowledgeGraph,
        memory: &BoundedLog<ThoughtRecord>,
        text: &str,
        emotion: &str,
    ) -> String {
        let tone = tone_label(emotion);
        let mut current = text.to_string();

        for depth in 0..self.max_depth {
            let seed = graph
                .last_refinement(&thought_hash(&current))
                .unwrap_or("");
            let merged = format!("{} {}", seed, current);
            let mut next = format!("Refined: {} ({})", merged.trim(), tone);

            if depth + 1 == self.max_depth {
                let influence: Vec<&str> = memory
                    .tail(INFLUENCE_WINDOW)
                    .map(|r| r.refined.as_str())
                    .collect();
                if !influence.is_empty() {
                    next = format!("{} [Influenced by: {}]", next, influence.join(" | "));
                }
            }

            current = next;
        }

        current.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_hash::thought_hash;

    fn empty_memory() -> BoundedLog<ThoughtRecord> {
        BoundedLog::new(100)
    }

    fn record(refined: &str, sequence: u64) -> ThoughtRecord {
        ThoughtRecord {
            id: thought_hash(refined),
            original: refined.to_string(),
            refined: refined.to_string(),
            emotion: "neutral".to_string(),
            intuition: "steady".to_string(),
            sequence,
        }
    }

    #[test]
    fn test_runs_exactly_max_depth_passes() {
        let graph = KnowledgeGraph::new();
        let memory = empty_memory();
        for depth in 1..=5 {
            let refiner = ThoughtRefiner::new(depth);
            let out = refiner.refine(&graph, &memory, "hello", "joy");
            // Each pass prepends exactly one marker.
            assert_eq!(out.matches("Refined:").count(), depth);
        }
    }

    #[test]
    fn test_contains_tone_and_original_text() {
        let refiner = ThoughtRefiner::new(3);
        let out = refiner.refine(&KnowledgeGraph::new(), &empty_memory(), "hello", "joy");
        assert!(out.contains("hello"));
        assert!(out.contains("optimistic"));
    }

    #[test]
    fn test_deterministic_on_unchanged_state() {
        let graph = KnowledgeGraph::new();
        let memory = empty_memory();
        let refiner = ThoughtRefiner::new(3);
        let first = refiner.refine(&graph, &memory, "hello", "joy");
        let second = refiner.refine(&graph, &memory, "hello", "joy");
        assert_eq!(first, second);
    }

    #[test]
    fn test_previous_refinement_seeds_next_run() {
        let mut graph = KnowledgeGraph::new();
        let memory = empty_memory();
        let refiner = ThoughtRefiner::new(3);

        let first = refiner.refine(&graph, &memory, "hello", "joy");
        graph.record_refinement(thought_hash("hello"), first.clone(), "joy");

        let second = refiner.refine(&graph, &memory, "hello", "joy");
        assert_ne!(first, second);
        // The first run's output is folded into the second run's first pass.
        assert!(second.contains(&first));
    }

    #[test]
    fn test_final_pass_folds_in_memory_tail() {
        let graph = KnowledgeGraph::new();
        let mut memory = empty_memory();
        for n in 0..7 {
            memory.push(record(&format!("insight {}", n), n));
        }

        let refiner = ThoughtRefiner::new(2);
        let out = refiner.refine(&graph, &memory, "hello", "neutral");
        assert!(out.contains("[Influenced by:"));
        // Only the last five entries are folded in.
        assert!(out.contains("insight 6"));
        assert!(out.contains("insight 2"));
        assert!(!out.contains("insight 1"));
        assert_eq!(out.matches("[Influenced by:").count(), 1);
    }

    #[test]
    fn test_empty_input_still_refines() {
        let refiner = ThoughtRefiner::new(3);
        let out = refiner.refine(&KnowledgeGraph::new(), &empty_memory(), "", "fear");
        assert!(!out.is_empty());
        assert!(out.contains("cautious"));
    }

    #[test]
    fn test_unknown_emotion_falls_back_to_neutral_tone() {
        let refiner = ThoughtRefiner::new(1);
        let out = refiner.refine(&KnowledgeGraph::new(), &empty_memory(), "hello", "curiosity");
        assert!(out.contains("(neutral)"));
    }
}
