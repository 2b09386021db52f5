//! Repository layer over the in-memory library and its snapshot file

pub mod books;
pub mod loans;
pub mod snapshots;
pub mod users;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Library;

/// The single library instance shared by every handler.
///
/// Commands that mutate take the write guard for their whole
/// lookup-validate-commit sequence.
pub type SharedLibrary = Arc<RwLock<Library>>;

/// Main repository struct holding the shared library
#[derive(Clone)]
pub struct Repository {
    pub library: SharedLibrary,
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
    pub loans: loans::LoansRepository,
    pub snapshots: snapshots::SnapshotsRepository,
}

impl Repository {
    /// Create a repository around an existing library
    pub fn new(library: Library, snapshot_path: Option<String>) -> Self {
        let library: SharedLibrary = Arc::new(RwLock::new(library));
        Self {
            books: books::BooksRepository::new(library.clone()),
            users: users::UsersRepository::new(library.clone()),
            loans: loans::LoansRepository::new(library.clone()),
            snapshots: snapshots::SnapshotsRepository::new(library.clone(), snapshot_path),
            library,
        }
    }
}
