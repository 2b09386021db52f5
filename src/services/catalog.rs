//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, CreateBook},
    repository::Repository,
};

use super::storage::StorageService;

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    storage: StorageService,
}

impl CatalogService {
    pub fn new(repository: Repository, storage: StorageService) -> Self {
        Self { repository, storage }
    }

    /// Add a catalog line. Duplicate titles make a separate line.
    pub async fn add_book(&self, book: CreateBook) -> AppResult<Book> {
        let book = book.normalized();
        book.validate()?;
        let quantity = u32::try_from(book.quantity)
            .map_err(|_| AppError::Validation("Quantity is too large.".to_string()))?;

        let created = self
            .repository
            .books
            .create(&book.title, &book.author, quantity)
            .await?;
        tracing::info!(book_id = %created.id, title = %created.title, quantity, "Book added");

        self.storage.after_change().await;
        Ok(created)
    }

    pub async fn get_book(&self, id: BookId) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Plain-text catalog listing
    pub async fn books_report(&self) -> String {
        self.repository.books.report().await
    }
}
