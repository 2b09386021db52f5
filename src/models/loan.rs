//! Loan (issue/return) model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;
use validator::Validate;

use super::book::BookShort;
use super::user::UserShort;

/// An outstanding loan of one catalog line to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoanDetails {
    pub user: UserShort,
    pub book: BookShort,
    /// Copies of the line left on the shelf after the operation
    pub quantity_available: u32,
}

/// Issue or return request, addressed by title
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    #[validate(length(min = 1, message = "Book title cannot be empty!"))]
    pub title: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = i32)]
    pub user_id: i32,
}

impl LoanRequest {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            user_id: self.user_id,
        }
    }
}
