//! Patron management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UserDetails},
    repository::Repository,
};

use super::storage::StorageService;

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    storage: StorageService,
}

impl UsersService {
    pub fn new(repository: Repository, storage: StorageService) -> Self {
        Self { repository, storage }
    }

    /// Register a user under a client-chosen id, rejecting taken ids
    pub async fn create_user(&self, user: CreateUser) -> AppResult<UserDetails> {
        let user = user.normalized();
        user.validate()?;

        let created = self.repository.users.create(&user.name, user.id).await?;
        tracing::info!(user_id = created.id, name = %created.name, "User added");

        self.storage.after_change().await;
        Ok(UserDetails {
            id: created.id,
            name: created.name,
            issued_books: Vec::new(),
        })
    }

    pub async fn get_user(&self, id: i32) -> AppResult<UserDetails> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn list_users(&self) -> Vec<UserDetails> {
        self.repository.users.list().await
    }

    /// Plain-text patron listing with issued titles
    pub async fn users_report(&self) -> String {
        self.repository.users.report().await
    }
}
