//! Versioned on-disk representation of a whole library

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;
use super::library::Library;
use super::user::User;
use crate::error::{AppError, AppResult};

/// Current snapshot layout version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub books: Vec<Book>,
    pub users: Vec<User>,
}

impl LibrarySnapshot {
    pub fn capture(library: &Library) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            books: library.books().to_vec(),
            users: library.users().to_vec(),
        }
    }

    pub fn into_library(self) -> AppResult<Library> {
        if self.version != SNAPSHOT_VERSION {
            return Err(AppError::Snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }
        Library::from_parts(self.books, self.users)
    }
}

/// Outcome of a save or load
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SnapshotInfo {
    pub path: String,
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub books: usize,
    pub users: usize,
}

impl SnapshotInfo {
    pub fn new(path: impl Into<String>, snapshot: &LibrarySnapshot) -> Self {
        Self {
            path: path.into(),
            version: snapshot.version,
            saved_at: snapshot.saved_at,
            books: snapshot.books.len(),
            users: snapshot.users.len(),
        }
    }
}
