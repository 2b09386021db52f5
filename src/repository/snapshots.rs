//! Snapshot file storage for the whole library

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::snapshot::{LibrarySnapshot, SnapshotInfo},
};

use super::SharedLibrary;

#[derive(Clone)]
pub struct SnapshotsRepository {
    library: SharedLibrary,
    path: Option<PathBuf>,
    /// Held for the whole capture-and-write of a save and for a load, so a
    /// file on disk is never older than one written before it
    file_lock: Arc<Mutex<()>>,
    write_seq: Arc<AtomicU64>,
}

impl SnapshotsRepository {
    pub fn new(library: SharedLibrary, path: Option<String>) -> Self {
        Self {
            library,
            path: path.map(PathBuf::from),
            file_lock: Arc::new(Mutex::new(())),
            write_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.path.is_some()
    }

    /// True when a snapshot file is configured and present on disk
    pub async fn exists(&self) -> AppResult<bool> {
        match &self.path {
            Some(path) => Ok(tokio::fs::try_exists(path).await?),
            None => Ok(false),
        }
    }

    fn configured_path(&self) -> AppResult<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| AppError::Validation("No snapshot path configured".to_string()))
    }

    /// Write the current library to the snapshot file
    pub async fn save(&self) -> AppResult<SnapshotInfo> {
        let path = self.configured_path()?;
        let _file = self.file_lock.lock().await;
        let snapshot = LibrarySnapshot::capture(&*self.library.read().await);
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        write_snapshot(path, &snapshot, seq).await?;
        Ok(SnapshotInfo::new(path.display().to_string(), &snapshot))
    }

    /// Replace the current library with the snapshot file's content.
    ///
    /// The file is parsed and checked before the library is touched.
    pub async fn load(&self) -> AppResult<SnapshotInfo> {
        let path = self.configured_path()?;
        let _file = self.file_lock.lock().await;
        let snapshot = read_snapshot(path).await?;
        let info = SnapshotInfo::new(path.display().to_string(), &snapshot);
        let restored = snapshot.into_library()?;
        *self.library.write().await = restored;
        Ok(info)
    }
}

/// Serialize to a sibling temp file unique to this write, then rename it over `path`
async fn write_snapshot(path: &Path, snapshot: &LibrarySnapshot, seq: u64) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(snapshot)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(format!(".{}.{}.tmp", std::process::id(), seq));
    let tmp = PathBuf::from(tmp);
    if let Err(e) = tokio::fs::write(&tmp, json).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

pub async fn read_snapshot(path: &Path) -> AppResult<LibrarySnapshot> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            AppError::NotFound(format!("Snapshot file {} not found", path.display()))
        }
        _ => AppError::Io(e),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::Snapshot(e.to_string()))
}
