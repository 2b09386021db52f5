//! Loans repository: issue and return against the shared library

use crate::{
    error::{AppError, AppResult},
    models::loan::LoanDetails,
};

use super::SharedLibrary;

#[derive(Clone)]
pub struct LoansRepository {
    library: SharedLibrary,
}

impl LoansRepository {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }

    pub async fn issue(&self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        self.library.write().await.issue_book(title, user_id)
    }

    pub async fn return_book(&self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        self.library.write().await.return_book(title, user_id)
    }

    /// Outstanding loans for every user
    pub async fn list(&self) -> Vec<LoanDetails> {
        self.library.read().await.loans()
    }

    /// Outstanding loans for one user, in issue order
    pub async fn get_user_loans(&self, user_id: i32) -> AppResult<Vec<LoanDetails>> {
        let library = self.library.read().await;
        if library.get_user_by_id(user_id).is_none() {
            return Err(AppError::UserNotFound(user_id));
        }
        Ok(library
            .loans()
            .into_iter()
            .filter(|loan| loan.user.id == user_id)
            .collect())
    }
}
