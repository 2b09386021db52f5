//! Books repository over the shared catalog

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId},
};

use super::SharedLibrary;

#[derive(Clone)]
pub struct BooksRepository {
    library: SharedLibrary,
}

impl BooksRepository {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }

    /// Append a catalog line
    pub async fn create(&self, title: &str, author: &str, quantity: u32) -> AppResult<Book> {
        let mut library = self.library.write().await;
        let id = library.add_book(title, author, quantity)?;
        library
            .book(id)
            .cloned()
            .ok_or_else(|| AppError::Internal(format!("book {} missing after insert", id)))
    }

    /// Get a catalog line by ID
    pub async fn get_by_id(&self, id: BookId) -> AppResult<Book> {
        self.library
            .read()
            .await
            .book(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// All catalog lines in catalog order
    pub async fn list(&self) -> Vec<Book> {
        self.library.read().await.books().to_vec()
    }

    pub async fn report(&self) -> String {
        self.library.read().await.books_report()
    }
}
