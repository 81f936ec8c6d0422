use crate::error::{CliError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The kinds of downloaded files kept in the cache, each in its own subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    Pdb,
    Fasta,
}

impl CacheKind {
    fn directory(&self) -> &'static str {
        match self {
            CacheKind::Pdb => "pdb",
            CacheKind::Fasta => "fasta",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            CacheKind::Pdb => "pdb",
            CacheKind::Fasta => "fasta",
        }
    }
}

/// On-disk cache of downloaded structure files, keyed by PDB id.
#[derive(Debug, Clone)]
pub struct CacheManager {
    base_path: PathBuf,
}

impl CacheManager {
    pub fn new() -> Result<Self> {
        let path = Self::get_default_cache_path()?;
        debug!("CacheManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn get_cache_path(&self) -> &Path {
        &self.base_path
    }

    pub fn entry_path(&self, kind: CacheKind, pdb_id: &str) -> PathBuf {
        self.base_path.join(kind.directory()).join(format!(
            "{}.{}",
            pdb_id.to_ascii_uppercase(),
            kind.extension()
        ))
    }

    /// Returns the cached content, or `None` if the entry is missing or unreadable.
    pub fn load(&self, kind: CacheKind, pdb_id: &str) -> Option<String> {
        let path = self.entry_path(kind, pdb_id);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Cache hit for {} ({:?}).", pdb_id, kind);
                Some(content)
            }
            Err(e) => {
                warn!("Ignoring unreadable cache entry {:?}: {}", path, e);
                None
            }
        }
    }

    pub fn store(&self, kind: CacheKind, pdb_id: &str, content: &str) -> Result<()> {
        let path = self.entry_path(kind, pdb_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        debug!("Cached {} ({:?}) at {:?}.", pdb_id, kind, path);
        Ok(())
    }

    /// Removes the cache directory. Returns `false` if there was nothing to remove.
    pub fn clear(&self) -> Result<bool> {
        if !self.base_path.exists() {
            return Ok(false);
        }
        info!("Removing cache directory {:?}", &self.base_path);
        fs::remove_dir_all(&self.base_path)?;
        Ok(true)
    }

    fn get_default_cache_path() -> Result<PathBuf> {
        ProjectDirs::from("edu", "caltech", "ramapp")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Cache("Could not determine default cache directory path.".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entry_paths_are_grouped_by_kind_and_uppercased() {
        let temp_dir = tempdir().unwrap();
        let manager = CacheManager::with_custom_path(temp_dir.path().to_path_buf());
        assert_eq!(
            manager.entry_path(CacheKind::Pdb, "4hhb"),
            temp_dir.path().join("pdb/4HHB.pdb")
        );
        assert_eq!(
            manager.entry_path(CacheKind::Fasta, "4HHB"),
            temp_dir.path().join("fasta/4HHB.fasta")
        );
    }

    #[test]
    fn store_then_load_returns_content() {
        let temp_dir = tempdir().unwrap();
        let manager = CacheManager::with_custom_path(temp_dir.path().join("cache"));

        assert_eq!(manager.load(CacheKind::Fasta, "1ABC"), None);
        manager
            .store(CacheKind::Fasta, "1ABC", ">1ABC_1|Chain A|X|Y\nMKV\n")
            .unwrap();
        assert_eq!(
            manager.load(CacheKind::Fasta, "1abc").as_deref(),
            Some(">1ABC_1|Chain A|X|Y\nMKV\n")
        );
        assert_eq!(manager.load(CacheKind::Pdb, "1ABC"), None);
    }

    #[test]
    fn clear_removes_everything_and_reports_if_anything_was_there() {
        let temp_dir = tempdir().unwrap();
        let manager = CacheManager::with_custom_path(temp_dir.path().join("cache"));
        assert!(!manager.clear().unwrap());

        manager.store(CacheKind::Pdb, "2LZM", "END\n").unwrap();
        assert!(manager.clear().unwrap());
        assert!(!manager.get_cache_path().exists());
        assert_eq!(manager.load(CacheKind::Pdb, "2LZM"), None);
    }
}
