//! Loan management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::loan::{LoanDetails, LoanRequest},
    repository::Repository,
};

use super::storage::StorageService;

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    storage: StorageService,
}

impl LoansService {
    pub fn new(repository: Repository, storage: StorageService) -> Self {
        Self { repository, storage }
    }

    /// Issue the first available line matching the title to a user
    pub async fn issue_book(&self, request: LoanRequest) -> AppResult<LoanDetails> {
        let request = request.normalized();
        request.validate()?;

        let loan = self.repository.loans.issue(&request.title, request.user_id).await?;
        tracing::info!(
            user_id = loan.user.id,
            book_id = %loan.book.id,
            remaining = loan.quantity_available,
            "Book issued"
        );

        self.storage.after_change().await;
        Ok(loan)
    }

    /// Return a book previously issued to the user
    pub async fn return_book(&self, request: LoanRequest) -> AppResult<LoanDetails> {
        let request = request.normalized();
        request.validate()?;

        let loan = self
            .repository
            .loans
            .return_book(&request.title, request.user_id)
            .await?;
        tracing::info!(
            user_id = loan.user.id,
            book_id = %loan.book.id,
            remaining = loan.quantity_available,
            "Book returned"
        );

        self.storage.after_change().await;
        Ok(loan)
    }

    /// Get loans for a user
    pub async fn get_user_loans(&self, user_id: i32) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.get_user_loans(user_id).await
    }

    pub async fn list_loans(&self) -> Vec<LoanDetails> {
        self.repository.loans.list().await
    }
}
