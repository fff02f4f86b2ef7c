//! Associative knowledge graph between thought nodes.
//!
//! Responsibilities:
//! - Directed "associates-with" edges keyed by content address, duplicates
//!   kept, insertion order preserved, never removed during a session.
//! - Reverse resolution from an identifier back to originating text by
//!   scanning the adjacency lists (first match wins; ties break by source
//!   insertion order, which is why the maps are IndexMaps).
//! - The identifier -> last-refined-text map consulted by the refiner.
//!
//! Resolution cost is O(vertices x degree) per identifier. A target->sources
//! reverse index would change that cost without changing observable behavior;
//! the scan is kept as the reference behavior.
//!
//! Unit tests are colocated at the bottom of this file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::content_hash::{thought_hash, ThoughtId};

/// Sentinel returned when an identifier cannot be reverse-resolved.
pub const UNKNOWN_THOUGHT: &str = "Unknown Thought";

/// Serializable full-state snapshot of the graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSnapshot {
    /// Source identifier -> ordered target identifiers (duplicates kept).
    pub edges: IndexMap<ThoughtId, Vec<ThoughtId>>,
    /// Source identifier -> originating text, recorded at link time.
    pub sources: IndexMap<ThoughtId, String>,
    /// Identifier -> last refined text for that thought.
    pub refinements: HashMap<ThoughtId, String>,
    /// Identifier -> emotion label recorded with the refinement.
    pub emotions: HashMap<ThoughtId, String>,
}

/// The associative graph plus the refinement map.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    edges: IndexMap<ThoughtId, Vec<ThoughtId>>,
    sources: IndexMap<ThoughtId, String>,
    refinements: HashMap<ThoughtId, String>,
    emotions: HashMap<ThoughtId, String>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record directed associations from `source_text` to each related text.
    ///
    /// Appends to the adjacency list without deduplication; linking the same
    /// pair twice stores the edge twice. Linking with no related texts still
    /// registers the source vertex.
    pub fn link<I, S>(&mut self, source_text: &str, related: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source_id = thought_hash(source_text);
        self.sources
            .entry(source_id.clone())
            .or_insert_with(|| source_text.to_string());
        let targets = self.edges.entry(source_id).or_default();
        for text in related {
            targets.push(thought_hash(text.as_ref()));
        }
    }

    /// Reverse-resolve an identifier to originating text.
    ///
    /// Scans every adjacency list in source insertion order and returns the
    /// text of the first source whose list references `id`. The scan only
    /// follows forward edges, so it terminates even on cyclic graphs.
    pub fn resolve(&self, id: &str) -> &str {
        for (source_id, targets) in &self.edges {
            if targets.iter().any(|t| t == id) {
                if let Some(text) = self.sources.get(source_id) {
                    return text;
                }
            }
        }
        UNKNOWN_THOUGHT
    }

    /// Resolved texts for every association stored under `text`'s identifier.
    ///
    /// A thought that was never linked (or linked with no related texts)
    /// yields an empty vector, not an error.
    pub fn associations_of(&self, text: &str) -> Vec<String> {
        let id = thought_hash(text);
        match self.edges.get(&id) {
            Some(targets) => targets.iter().map(|t| self.resolve(t).to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Every source vertex mapped to its resolved associations, in source
    /// insertion order. Used by review reporting.
    pub fn association_overview(&self) -> IndexMap<String, Vec<String>> {
        self.edges
            .iter()
            .map(|(source_id, targets)| {
                let label = self
                    .sources
                    .get(source_id)
                    .map(String::as_str)
                    .unwrap_or(UNKNOWN_THOUGHT)
                    .to_string();
                let resolved = targets.iter().map(|t| self.resolve(t).to_string()).collect();
                (label, resolved)
            })
            .collect()
    }

    /// Record the latest refinement of a thought, keyed by its identifier.
    pub fn record_refinement(
        &mut self,
        id: ThoughtId,
        refined: impl Into<String>,
        emotion: impl Into<String>,
    ) {
        self.refinements.insert(id.clone(), refined.into());
        self.emotions.insert(id, emotion.into());
    }

    /// Last refined text stored for an identifier, if any.
    pub fn last_refinement(&self, id: &str) -> Option<&str> {
        self.refinements.get(id).map(String::as_str)
    }

    /// Emotion label recorded with the last refinement, if any.
    pub fn emotion_of(&self, id: &str) -> Option<&str> {
        self.emotions.get(id).map(String::as_str)
    }

    /// Number of source vertices.
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            edges: self.edges.clone(),
            sources: self.sources.clone(),
            refinements: self.refinements.clone(),
            emotions: self.emotions.clone(),
        }
    }

    /// Replace all graph state with the snapshot contents.
    pub fn restore(&mut self, snapshot: GraphSnapshot) {
        self.edges = snapshot.edges;
        self.sources = snapshot.sources;
        self.refinements = snapshot.refinements;
        self.emotions = snapshot.emotions;
    }
}
