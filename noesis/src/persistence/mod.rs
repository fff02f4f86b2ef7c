//! Snapshot persistence for engine state.
//!
//! Responsibilities:
//! - Define the storage-agnostic `SnapshotStore` contract.
//! - Keep the serializable `EngineSnapshot` shape in one place.
//!
//! A missing snapshot is a normal startup condition (`Ok(None)`), not an
//! error; only decodable-but-broken data and failed writes surface as
//! errors, and the engine treats the former like an absent snapshot.

pub mod file_store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collaborators::abstraction::AbstractReflection;
use crate::collaborators::emotion::EmotionRecord;
use crate::collaborators::meta_cognition::MetaAnalysis;
use crate::collaborators::reflection::ReflectionRecord;
use crate::graph::GraphSnapshot;
use crate::memory::ThoughtRecord;

pub use file_store::FileSnapshotStore;

/// Error type for snapshot stores.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Data was readable but not a valid snapshot. Recovered by falling
    /// back to empty state, never fatal.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
    /// IO failure; on the save path this is the write-failure the caller
    /// must see, in-memory state stays valid.
    #[error("IO error: {0}")]
    Io(String),
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Serde(e.to_string())
    }
}

/// Full engine state as written to a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineSnapshot {
    pub thoughts: Vec<ThoughtRecord>,
    pub emotions: Vec<EmotionRecord>,
    pub reflections: Vec<ReflectionRecord>,
    pub meta: Vec<MetaAnalysis>,
    pub abstracts: Vec<AbstractReflection>,
    pub graph: GraphSnapshot,
}

/// Minimal storage contract the engine needs.
pub trait SnapshotStore {
    /// Persist the snapshot. Failures leave any previous snapshot intact.
    fn save(&self, snapshot: &EngineSnapshot) -> Result<(), PersistenceError>;

    /// Load the last saved snapshot; `Ok(None)` when none exists yet.
    fn load(&self) -> Result<Option<EngineSnapshot>, PersistenceError>;
}
