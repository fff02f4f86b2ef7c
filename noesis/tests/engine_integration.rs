//! End-to-end engine flows: persistence round trips, snapshot degradation
//! and review reporting over a real directory.

use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

use noesis::{
    CannedExpander, ConceptExpander, EngineConfig, FileSnapshotStore, Noesis, SnapshotStore,
    UNKNOWN_THOUGHT,
};

/// Deterministic stand-in for the randomized default expander.
struct FixedExpander;

impl ConceptExpander for FixedExpander {
    fn expand(&self, concept: &str) -> String {
        format!("an echo of {}", concept)
    }
    fn metaphor_for(&self, concept: &str) -> String {
        format!("{} as a closed book", concept)
    }
}

fn file_store(dir: &std::path::Path) -> Box<dyn SnapshotStore> {
    Box::new(FileSnapshotStore::new(dir).expect("store dir"))
}

#[test]
fn fresh_engine_processes_hello_joy() {
    let mut engine = Noesis::new(EngineConfig::default().with_flush_on_process(false));
    let outcome = engine.process("hello", "joy").expect("process");

    assert!(!outcome.refined.is_empty());
    assert!(outcome.refined.contains("hello"));
    assert!(outcome.refined.contains("optimistic"));

    let again = engine.process("hello", "joy").expect("process again");
    assert_ne!(outcome.refined, again.refined);
}

#[test]
fn write_through_round_trip_restores_state() {
    let dir = tempdir().unwrap();
    let config = EngineConfig::default();

    let first_review = {
        let mut engine = Noesis::with_store_and_expander(
            config.clone(),
            file_store(dir.path()),
            Box::new(FixedExpander),
        );
        engine.process("What is the nature of self-awareness?", "joy").unwrap();
        engine.process("Understanding is a journey.", "neutral").unwrap();
        engine.process("I must always be correct.", "anger").unwrap();
        engine.link("Self-Awareness", &["Consciousness", "Introspection"]).unwrap();
        engine.review()
    };

    // A new engine over the same directory picks the state back up.
    let mut engine = Noesis::with_store_and_expander(
        config,
        file_store(dir.path()),
        Box::new(FixedExpander),
    );
    let review = engine.review();

    assert_eq!(review.thought_history, first_review.thought_history);
    assert_eq!(review.emotional_trends, first_review.emotional_trends);
    assert_eq!(review.knowledge_patterns, first_review.knowledge_patterns);
    assert_eq!(review.reflection_history, first_review.reflection_history);
    assert_eq!(review.abstract_history, first_review.abstract_history);

    // The refinement map survived too: reprocessing a seen thought keeps
    // diverging instead of starting over.
    let resumed = engine.process("What is the nature of self-awareness?", "joy").unwrap();
    assert_ne!(resumed.refined, first_review.thought_history[0].refined);
    assert!(resumed.refined.contains(&first_review.thought_history[0].refined));
}

#[test]
fn sequence_numbers_continue_after_reload() {
    let dir = tempdir().unwrap();
    let config = EngineConfig::default();

    {
        let mut engine = Noesis::with_store(config.clone(), file_store(dir.path()));
        engine.process("a", "joy").unwrap();
        engine.process("b", "fear").unwrap();
    }

    let mut engine = Noesis::with_store(config, file_store(dir.path()));
    engine.process("c", "neutral").unwrap();

    let sequences: Vec<u64> = engine
        .review()
        .thought_history
        .iter()
        .map(|t| t.sequence)
        .collect();
    assert_eq!(sequences, vec![1, 2, 3]);
}

#[test]
fn reload_truncates_history_to_capacity() {
    let dir = tempdir().unwrap();

    {
        let mut engine = Noesis::with_store(EngineConfig::default(), file_store(dir.path()));
        for n in 0..5 {
            engine.process(&format!("thought {}", n), "neutral").unwrap();
        }
    }

    // A smaller capacity on reload keeps only the most recent records.
    let config = EngineConfig::default().with_thought_capacity(2);
    let engine = Noesis::with_store(config, file_store(dir.path()));
    let history = engine.review().thought_history;
    let originals: Vec<&str> = history.iter().map(|t| t.original.as_str()).collect();
    assert_eq!(originals, vec!["thought 3", "thought 4"]);
}

#[test]
fn corrupt_snapshot_degrades_to_empty_state() {
    let dir = tempdir().unwrap();

    {
        let mut engine = Noesis::with_store(EngineConfig::default(), file_store(dir.path()));
        engine.process("will be lost", "joy").unwrap();
    }
    fs::write(dir.path().join("thought_memory.json"), "{ not json").unwrap();

    let mut engine = Noesis::with_store(EngineConfig::default(), file_store(dir.path()));
    assert!(engine.review().thought_history.is_empty());

    // Still fully usable, and the next flush repairs the store.
    engine.process("fresh start", "joy").unwrap();
    let reopened = Noesis::with_store(EngineConfig::default(), file_store(dir.path()));
    assert_eq!(reopened.review().thought_history.len(), 1);
}

#[test]
fn associations_survive_round_trip() {
    let dir = tempdir().unwrap();

    {
        let mut engine = Noesis::with_store(EngineConfig::default(), file_store(dir.path()));
        engine.link("Self-Awareness", &["Consciousness", "Reflection"]).unwrap();
        engine.link("Understanding", &["Knowledge"]).unwrap();
    }

    let engine = Noesis::with_store(EngineConfig::default(), file_store(dir.path()));
    assert_eq!(
        engine.associations_of("Self-Awareness"),
        vec!["Self-Awareness", "Self-Awareness"]
    );
    let patterns = engine.review().knowledge_patterns;
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns["Understanding"], vec!["Understanding"]);
}

#[test]
fn unresolved_identifier_reads_as_unknown() {
    let mut engine = Noesis::new(EngineConfig::default().with_flush_on_process(false));
    engine.link("A", &["B"]).unwrap();

    // "A" is a source vertex but never a target, so its id resolves to the
    // sentinel while B's id resolves back to A.
    let graph = engine.graph();
    assert_eq!(graph.resolve(&noesis::thought_hash("A")), UNKNOWN_THOUGHT);
    assert_eq!(graph.resolve(&noesis::thought_hash("B")), "A");
}

#[test]
fn reflection_needs_context_before_it_deepens() {
    let mut engine = Noesis::new(EngineConfig::default().with_flush_on_process(false));

    let first = engine.process("What defines purpose?", "neutral").unwrap();
    assert_eq!(first.reflection, "Insufficient past reflections for deep analysis.");

    engine.process("Understanding is a journey.", "neutral").unwrap();
    let third = engine.process("Exploring self-awareness", "joy").unwrap();
    assert_ne!(third.reflection, "Insufficient past reflections for deep analysis.");
}

#[test]
fn default_expander_stays_inside_its_pools() {
    let expander = CannedExpander::new();
    let metaphor = expander.metaphor_for("shadow");
    assert_eq!(metaphor, "A silent echo of what is known, yet unseen.");
    // Unknown concepts fall back to the fixed defaults.
    assert_eq!(expander.expand("gravity"), "A paradox yet to be understood");
}
