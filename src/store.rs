//! Key-value persistence for user and project state.
//!
//! The [`KeyValueStore`] trait defines the whole-blob contract the
//! pipeline relies on: every stored collection is fully loaded and fully
//! replaced on each read/write, with no partial updates and no
//! transactions. Last writer wins; concurrent writers are out of scope
//! (single local session).
//!
//! Backends: [`FileStore`] (one JSON file per key under a directory) and
//! [`MemoryStore`] (tests). [`AppStore`] layers the typed accessors the
//! commands use on top of any backend.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::models::{KeywordProject, User};

const KEY_USER: &str = "seo_harness_user";
const KEY_PROJECTS: &str = "seo_harness_projects";

/// Whole-blob string key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

// ============ File backend ============

/// Stores each key as `<dir>/<key>.json`. The directory is created on
/// first write.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory {}", self.dir.display()))?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
        }
    }
}

// ============ In-memory backend ============

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.map.lock().unwrap().remove(key);
        Ok(())
    }
}

// ============ Typed accessor ============

/// Typed access to the user record and the project list, serialized as
/// whole-value JSON blobs.
pub struct AppStore {
    kv: Box<dyn KeyValueStore>,
}

impl AppStore {
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// File-backed store rooted at the configured directory.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileStore::new(dir)))
    }

    pub fn get_user(&self) -> Result<Option<User>> {
        match self.kv.get(KEY_USER)? {
            Some(blob) => Ok(Some(
                serde_json::from_str(&blob).context("Corrupt user record")?,
            )),
            None => Ok(None),
        }
    }

    pub fn save_user(&self, user: &User) -> Result<()> {
        self.kv.set(KEY_USER, &serde_json::to_string(user)?)
    }

    pub fn clear_user(&self) -> Result<()> {
        self.kv.delete(KEY_USER)
    }

    pub fn get_projects(&self) -> Result<Vec<KeywordProject>> {
        match self.kv.get(KEY_PROJECTS)? {
            Some(blob) => serde_json::from_str(&blob).context("Corrupt project list"),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the project with the same `id`, or appends it. Full
    /// read-modify-write of the project list.
    pub fn save_project(&self, project: &KeywordProject) -> Result<()> {
        let mut projects = self.get_projects()?;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        self.kv.set(KEY_PROJECTS, &serde_json::to_string(&projects)?)
    }

    pub fn delete_project(&self, id: &str) -> Result<()> {
        let mut projects = self.get_projects()?;
        projects.retain(|p| p.id != id);
        self.kv.set(KEY_PROJECTS, &serde_json::to_string(&projects)?)
    }

    /// Finds a project by exact name.
    pub fn find_project_by_name(&self, name: &str) -> Result<Option<KeywordProject>> {
        Ok(self.get_projects()?.into_iter().find(|p| p.name == name))
    }
}
