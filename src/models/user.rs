//! User (patron) model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;
use validator::Validate;

use super::book::{BookId, BookShort};

/// Library patron with the catalog lines currently on loan to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub id: i32,
    /// Issue order; the same line appears twice if issued twice
    pub issued_books: Vec<BookId>,
}

impl User {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id,
            issued_books: Vec::new(),
        }
    }

    pub fn issue_book(&mut self, book: BookId) {
        self.issued_books.push(book);
    }

    /// Drop the loan at `position` in the issued list
    pub(crate) fn remove_issued(&mut self, position: usize) -> Option<BookId> {
        (position < self.issued_books.len()).then(|| self.issued_books.remove(position))
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

/// User with resolved loans, as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetails {
    pub id: i32,
    pub name: String,
    pub issued_books: Vec<BookShort>,
}

/// Short user representation embedded in loans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserShort {
    pub id: i32,
    pub name: String,
}

impl From<&User> for UserShort {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

/// Add-user request
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "User name cannot be empty!"))]
    pub name: String,
    /// Client-chosen identifier, a JSON number or a numeric string
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = i32)]
    pub id: i32,
}

impl CreateUser {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            id: self.id,
        }
    }
}
