//! Noesis - recursive thought refinement over an associative knowledge graph.
//!
//! Purpose:
//! - Turn a unit of text (a "thought") into a content-addressed node.
//! - Refine it through bounded-depth passes that consult prior engine state.
//! - Keep a bounded-recency memory of past refinements and a directed
//!   associates-with graph between thought nodes.
//!
//! Structure:
//! - content_hash.rs: deterministic SHA-256 content addressing
//! - memory/: bounded FIFO logs and the serializable record types
//! - graph/: the knowledge graph (edges, refinement map, reverse resolution)
//! - refinement.rs: the bounded multi-pass refiner
//! - persistence/: snapshot store trait and the JSON file store
//! - collaborators/: emotion weighting, bias/logic review, self-reflection,
//!   abstract expansion (injectable text generation)
//! - engine.rs: the `Noesis` facade composing everything
//!
//! Testing strategy:
//! - Unit tests colocated in each file for the specific component
//! - Integration tests under /tests for end-to-end flows

pub mod collaborators;
pub mod config;
pub mod content_hash;
pub mod engine;
pub mod graph;
pub mod memory;
pub mod persistence;
pub mod refinement;

pub use collaborators::abstraction::{AbstractReflection, AbstractThought, CannedExpander, ConceptExpander};
pub use collaborators::emotion::{Emotion, EmotionEngine, EmotionRecord};
pub use collaborators::meta_cognition::{CognitivePatterns, MetaAnalysis, MetaCognition};
pub use collaborators::reflection::{ReflectionRecord, SelfReflection};
pub use config::EngineConfig;
pub use content_hash::{thought_hash, ThoughtId};
pub use engine::{CognitionReview, EngineError, Noesis, ThoughtOutcome};
pub use graph::{GraphSnapshot, KnowledgeGraph, UNKNOWN_THOUGHT};
pub use memory::{BoundedLog, ThoughtRecord};
pub use persistence::{EngineSnapshot, FileSnapshotStore, PersistenceError, SnapshotStore};
pub use refinement::ThoughtRefiner;
