//! Snapshot persistence service

use validator::Validate;

use crate::{
    config::SeedBook,
    error::{AppError, AppResult},
    models::{book::CreateBook, snapshot::SnapshotInfo},
    repository::Repository,
};

#[derive(Clone)]
pub struct StorageService {
    repository: Repository,
    autosave: bool,
}

impl StorageService {
    pub fn new(repository: Repository, autosave: bool) -> Self {
        Self { repository, autosave }
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave && self.repository.snapshots.is_configured()
    }

    /// Save the whole library to the configured snapshot file
    pub async fn save(&self) -> AppResult<SnapshotInfo> {
        let info = self.repository.snapshots.save().await?;
        tracing::info!(path = %info.path, books = info.books, users = info.users, "Library snapshot saved");
        Ok(info)
    }

    /// Replace the whole library with the configured snapshot file
    pub async fn load(&self) -> AppResult<SnapshotInfo> {
        let info = self.repository.snapshots.load().await?;
        tracing::info!(path = %info.path, books = info.books, users = info.users, "Library snapshot loaded");
        Ok(info)
    }

    /// Startup: restore the snapshot when asked to and present, otherwise
    /// stock the catalog with `seed`. Returns true when a snapshot was loaded.
    ///
    /// An existing snapshot that is not loaded is never overwritten by the
    /// seed catalog; startup fails instead when autosave would replace it.
    pub async fn restore_or_seed(&self, load_on_startup: bool, seed: &[SeedBook]) -> AppResult<bool> {
        let exists = self.repository.snapshots.exists().await?;
        if exists && load_on_startup {
            self.load().await?;
            return Ok(true);
        }
        if exists && self.autosave_enabled() {
            return Err(AppError::Snapshot(
                "Snapshot file exists but load_on_startup is off; refusing to overwrite it".to_string(),
            ));
        }

        let books = seed
            .iter()
            .map(|book| {
                let book = CreateBook {
                    title: book.title.clone(),
                    author: book.author.clone(),
                    quantity: i64::from(book.quantity),
                }
                .normalized();
                book.validate()?;
                Ok(book)
            })
            .collect::<AppResult<Vec<_>>>()?;

        {
            let mut library = self.repository.library.write().await;
            for book in &books {
                let quantity = u32::try_from(book.quantity)
                    .map_err(|_| AppError::Validation("Quantity is too large.".to_string()))?;
                library.add_book(book.title.as_str(), book.author.as_str(), quantity)?;
            }
        }
        tracing::info!(books = books.len(), "Catalog seeded from configuration");

        if !exists && self.autosave_enabled() {
            self.save().await?;
        }
        Ok(false)
    }

    /// Called after every committed change. A failed autosave does not undo
    /// the change; it is logged and retried with the next change.
    pub async fn after_change(&self) {
        if !self.autosave_enabled() {
            return;
        }
        if let Err(e) = self.save().await {
            tracing::error!("Autosave failed: {}", e);
        }
    }
}
