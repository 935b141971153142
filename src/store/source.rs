use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};

/// Read-only access to input files by source-relative path, e.g.
/// "DATASET_CLUSTERIZADO.csv", "brasil_municipios.json".
pub trait ByteSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
    fn has(&self, rel: &str) -> bool;
}

/// Simple disk-backed source rooted at a directory.
pub struct DiskSource {
    root: PathBuf,
}

impl DiskSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }
}

impl ByteSource for DiskSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        crate::common::require_file_exists(&path)?;
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn has(&self, rel: &str) -> bool {
        self.full(rel).is_file()
    }
}

/// Simple in-memory source, used to inject fixtures in tests.
#[derive(Default, Clone)]
pub struct MemSource {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemSource {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self {
        Self { files }
    }

    pub fn insert(&mut self, rel: &str, bytes: &[u8]) {
        self.files.insert(rel.to_string(), Arc::from(bytes.to_vec()));
    }
}

impl ByteSource for MemSource {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files
            .get(rel)
            .cloned()
            .ok_or_else(|| anyhow!("missing source file: {rel}"))
    }

    fn has(&self, rel: &str) -> bool {
        self.files.contains_key(rel)
    }
}
