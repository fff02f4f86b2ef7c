//! The `Noesis` facade.
//!
//! Owns every piece of mutable engine state (thought memory, knowledge
//! graph, collaborator logs) and composes them into `process` and `review`.
//! All mutation goes through `&mut self`, which is the whole concurrency
//! story: one engine, one writer.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::collaborators::abstraction::{AbstractReflection, AbstractThought, CannedExpander, ConceptExpander};
use crate::collaborators::emotion::{intuition_label, tone_label, EmotionEngine};
use crate::collaborators::meta_cognition::{CognitivePatterns, MetaAnalysis, MetaCognition};
use crate::collaborators::reflection::{ReflectionRecord, SelfReflection};
use crate::config::EngineConfig;
use crate::content_hash::{thought_hash, ThoughtId};
use crate::graph::KnowledgeGraph;
use crate::memory::{BoundedLog, ThoughtRecord};
use crate::persistence::{EngineSnapshot, PersistenceError, SnapshotStore};
use crate::refinement::ThoughtRefiner;

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A write-through flush failed. In-memory state is still valid and
    /// usable; only durability was lost.
    #[error("persistence failure: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Everything `process` produced for one thought.
#[derive(Debug, Clone, Serialize)]
pub struct ThoughtOutcome {
    pub id: ThoughtId,
    pub refined: String,
    pub tone: String,
    pub emotional_response: String,
    pub meta_analysis: MetaAnalysis,
    pub reflection: String,
    pub abstract_expansion: AbstractReflection,
    pub associations: Vec<String>,
}

/// Read-only view over accumulated engine state.
#[derive(Debug, Clone, Serialize)]
pub struct CognitionReview {
    pub thought_history: Vec<ThoughtRecord>,
    pub emotional_trends: Vec<(String, u64)>,
    pub knowledge_patterns: IndexMap<String, Vec<String>>,
    pub cognitive_patterns: CognitivePatterns,
    pub reflection_history: Vec<ReflectionRecord>,
    pub abstract_history: Vec<AbstractReflection>,
    pub identity_journal: Vec<String>,
}

/// The cognitive engine: content addressing, bounded memory, associative
/// graph and multi-pass refinement behind one `process` call.
pub struct Noesis {
    config: EngineConfig,
    sequence: u64,
    memory: BoundedLog<ThoughtRecord>,
    graph: KnowledgeGraph,
    refiner: ThoughtRefiner,
    emotions: EmotionEngine,
    meta: MetaCognition,
    reflection: SelfReflection,
    abstraction: AbstractThought,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Noesis {
    /// Memory-only engine with the default randomized expander.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_expander(config, Box::new(CannedExpander::new()))
    }

    /// Memory-only engine with an injected expansion collaborator.
    pub fn with_expander(config: EngineConfig, expander: Box<dyn ConceptExpander>) -> Self {
        let refiner = ThoughtRefiner::new(config.max_depth);
        Self {
            sequence: 0,
            memory: BoundedLog::new(config.thought_capacity),
            graph: KnowledgeGraph::new(),
            refiner,
            emotions: EmotionEngine::new(config.thought_capacity),
            meta: MetaCognition::new(config.log_capacity),
            reflection: SelfReflection::new(config.log_capacity),
            abstraction: AbstractThought::new(config.log_capacity, expander),
            store: None,
            config,
        }
    }

    /// Engine backed by a snapshot store. Prior state is loaded immediately;
    /// a missing or unreadable snapshot degrades to an empty engine with a
    /// warning rather than failing startup.
    pub fn with_store(config: EngineConfig, store: Box<dyn SnapshotStore>) -> Self {
        let mut engine = Self::new(config);
        engine.store = Some(store);
        engine.load_state();
        engine
    }

    /// As `with_store`, with an injected expansion collaborator.
    pub fn with_store_and_expander(
        config: EngineConfig,
        store: Box<dyn SnapshotStore>,
        expander: Box<dyn ConceptExpander>,
    ) -> Self {
        let mut engine = Self::with_expander(config, expander);
        engine.store = Some(store);
        engine.load_state();
        engine
    }

    fn load_state(&mut self) {
        let Some(store) = &self.store else {
            return;
        };
        match store.load() {
            Ok(Some(snapshot)) => self.restore(snapshot),
            Ok(None) => log::debug!("no prior snapshot, starting empty"),
            Err(e) => log::warn!("discarding unreadable snapshot, starting empty: {}", e),
        }
    }

    fn restore(&mut self, snapshot: EngineSnapshot) {
        self.memory.replace_all(snapshot.thoughts);
        self.sequence = self.memory.iter().map(|t| t.sequence).max().unwrap_or(0);
        self.emotions.restore(snapshot.emotions);
        self.reflection.restore(snapshot.reflections);
        self.meta.restore(snapshot.meta);
        self.abstraction.restore(snapshot.abstracts);
        self.graph.restore(snapshot.graph);
    }

    /// Push a thought through the full pipeline.
    ///
    /// Refinement reads the graph's previous-refinement map, so processing
    /// the same text twice produces different output the second time. When
    /// write-through is on, a failed flush is returned as an error after all
    /// in-memory updates have been applied.
    pub fn process(&mut self, text: &str, emotion: &str) -> Result<ThoughtOutcome, EngineError> {
        let id = thought_hash(text);
        let refined = self.refiner.refine(&self.graph, &self.memory, text, emotion);
        let recent: Vec<String> = self.memory.tail(3).map(|r| r.refined.clone()).collect();

        self.sequence += 1;
        self.memory.push(ThoughtRecord {
            id: id.clone(),
            original: text.to_string(),
            refined: refined.clone(),
            emotion: emotion.to_string(),
            intuition: intuition_label(emotion).to_string(),
            sequence: self.sequence,
        });
        self.graph.record_refinement(id.clone(), refined.clone(), emotion);

        let emotional_response = self.emotions.process_emotion(text, emotion);
        let meta_analysis = self.meta.analyze_thought(text, &refined);
        let reflection = self.reflection.reflect_on_thought(&refined, &recent);
        let abstract_expansion = self.abstraction.generate(text);
        let associations = self.graph.associations_of(text);

        if self.config.flush_on_process {
            self.flush()?;
        }

        Ok(ThoughtOutcome {
            id,
            refined,
            tone: tone_label(emotion).to_string(),
            emotional_response,
            meta_analysis,
            reflection,
            abstract_expansion,
            associations,
        })
    }

    /// Record directed associations from a thought to related thoughts.
    pub fn link(&mut self, source: &str, related: &[&str]) -> Result<(), EngineError> {
        self.graph.link(source, related.iter().copied());
        if self.config.flush_on_process {
            self.flush()?;
        }
        Ok(())
    }

    /// Resolved associations stored under this thought's identifier.
    pub fn associations_of(&self, text: &str) -> Vec<String> {
        self.graph.associations_of(text)
    }

    /// Store an insight in the identity journal.
    pub fn evolve_identity(&mut self, insight: &str) {
        self.reflection.evolve_identity(insight);
    }

    /// Read-only snapshots of all histories and the association overview.
    pub fn review(&self) -> CognitionReview {
        CognitionReview {
            thought_history: self.memory.to_vec(),
            emotional_trends: self.emotions.emotional_trends(),
            knowledge_patterns: self.graph.association_overview(),
            cognitive_patterns: self.meta.cognitive_patterns(),
            reflection_history: self.reflection.reflections(),
            abstract_history: self.abstraction.reflections(),
            identity_journal: self.reflection.identity_journal(),
        }
    }

    fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            thoughts: self.memory.to_vec(),
            emotions: self.emotions.records(),
            reflections: self.reflection.reflections(),
            meta: self.meta.records(),
            abstracts: self.abstraction.reflections(),
            graph: self.graph.snapshot(),
        }
    }

    /// Write the current state to the snapshot store, if one is configured.
    pub fn flush(&mut self) -> Result<(), EngineError> {
        if let Some(store) = &self.store {
            store.save(&self.snapshot())?;
            log::debug!("snapshot flushed ({} thoughts)", self.memory.len());
        }
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }
}
