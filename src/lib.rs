//! Shelf - small library inventory and loans server
//!
//! Keeps a catalog of books, a list of patrons and the loans between them,
//! and exposes issue/return and listing commands over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the repository and services for `library` according to `config`
    pub fn new(config: AppConfig, library: models::Library) -> Self {
        let repository = repository::Repository::new(library, config.storage.snapshot_path.clone());
        let services = services::Services::new(repository, &config.storage);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
