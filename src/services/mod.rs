//! Business logic services

pub mod catalog;
pub mod loans;
pub mod storage;
pub mod users;

use crate::{config::StorageConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub users: users::UsersService,
    pub loans: loans::LoansService,
    pub storage: storage::StorageService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, storage_config: &StorageConfig) -> Self {
        let storage = storage::StorageService::new(repository.clone(), storage_config.autosave);
        Self {
            catalog: catalog::CatalogService::new(repository.clone(), storage.clone()),
            users: users::UsersService::new(repository.clone(), storage.clone()),
            loans: loans::LoansService::new(repository, storage.clone()),
            storage,
        }
    }
}
