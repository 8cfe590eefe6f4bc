use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};
use walkdir::WalkDir;

/// Read access to source tables by data-directory-relative path.
pub trait TableSource: Send + Sync {
    /// File names (not paths) directly inside directory `dir`, sorted.
    fn list(&self, dir: &str) -> Result<Vec<String>>;
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
}

/// Write access for output tables by relative path.
pub trait TableSink: Send + Sync {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()>;
}

/// Source tables and outputs on disk, rooted at a data directory.
pub struct DiskTables {
    root: PathBuf,
}

impl DiskTables {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl TableSource for DiskTables {
    fn list(&self, dir: &str) -> Result<Vec<String>> {
        let path = self.full(dir);
        crate::common::require_dir_exists(&path)?;

        let mut names = Vec::new();
        for entry in WalkDir::new(&path).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!("[source] Failed to list {}", path.display()))?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("[source] Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }
}

impl TableSink for DiskTables {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        let path = self.full(rel);
        if let Some(parent) = path.parent() {
            crate::common::ensure_dir_exists(parent)?;
        }
        std::fs::write(&path, bytes)
            .with_context(|| format!("[source] Failed to write {}", path.display()))
    }
}

/// Simple in-memory table store.
/// Keys are relative paths, e.g. "stateupper/upper_AK_2022.csv".
#[derive(Default, Clone)]
pub struct MemTables {
    pub(crate) files: BTreeMap<String, Arc<[u8]>>,
}

impl MemTables {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert, convenient for fixtures.
    pub fn with(mut self, rel: &str, bytes: impl AsRef<[u8]>) -> Self {
        self.files.insert(rel.to_string(), Arc::from(bytes.as_ref()));
        self
    }
}

impl TableSource for MemTables {
    fn list(&self, dir: &str) -> Result<Vec<String>> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let names = self.files.keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|name| !name.contains('/'))
            .map(str::to_string)
            .collect::<Vec<_>>();
        if names.is_empty() {
            return Err(anyhow!("[source] Directory does not exist: {dir}"));
        }
        Ok(names)
    }

    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("[source] Missing table file: {rel}"))
    }
}

impl TableSink for MemTables {
    fn put(&mut self, rel: &str, bytes: &[u8]) -> Result<()> {
        self.files.insert(rel.to_string(), Arc::from(bytes));
        Ok(())
    }
}
