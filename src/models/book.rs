//! Book (catalog line) model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;
use validator::Validate;

/// Stable identifier of a catalog line.
///
/// Lines are never deleted, so the identifier is also the line's position
/// in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl BookId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog line: a title/author pair with its own availability counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub quantity_available: u32,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity_available: quantity,
        }
    }

    /// Case-insensitive title comparison used by issue and return
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn is_available(&self) -> bool {
        self.quantity_available > 0
    }

    /// Take one copy off the shelf. Returns false when none is left.
    pub fn issue(&mut self) -> bool {
        match self.quantity_available.checked_sub(1) {
            Some(remaining) => {
                self.quantity_available = remaining;
                true
            }
            None => false,
        }
    }

    /// Put one copy back on the shelf
    pub fn return_copy(&mut self) {
        self.quantity_available = self.quantity_available.saturating_add(1);
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} ({} available)",
            self.title, self.author, self.quantity_available
        )
    }
}

/// Short book representation embedded in loans and user listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookShort {
    pub id: BookId,
    pub title: String,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}

/// Add-book request
#[serde_as]
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Book title cannot be empty!"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author name cannot be empty!"))]
    pub author: String,
    /// Number of copies, a JSON number or a numeric string
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[schema(value_type = i64)]
    #[validate(range(min = 1, message = "Quantity must be a positive number."))]
    pub quantity: i64,
}

impl CreateBook {
    /// Trim text fields so that blank input fails validation
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            quantity: self.quantity,
        }
    }
}
