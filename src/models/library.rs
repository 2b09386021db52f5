//! Library aggregator: the catalog, the patrons and the loans between them.
//!
//! Books live in an owning arena indexed by [`BookId`]; users refer to the
//! lines they borrowed by id, so a change of availability is seen from both
//! the catalog and every user holding that line.
//!
//! The aggregator performs no input validation. Commands that need it
//! (non-empty fields, unique user ids) check before calling in.

use super::book::{Book, BookId, BookShort};
use super::loan::LoanDetails;
use super::user::{User, UserDetails, UserShort};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
    users: Vec<User>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a catalog line and return its identifier
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> AppResult<BookId> {
        let id = u32::try_from(self.books.len())
            .map(BookId)
            .map_err(|_| AppError::Internal("catalog is full".to_string()))?;
        self.books.push(Book::new(id, title, author, quantity));
        Ok(id)
    }

    /// Append a user. Id uniqueness is the caller's concern.
    pub fn add_user(&mut self, name: impl Into<String>, id: i32) -> &User {
        self.users.push(User::new(name, id));
        &self.users[self.users.len() - 1]
    }

    /// First user with the given id, in insertion order
    pub fn get_user_by_id(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn user_position(&self, id: i32) -> AppResult<usize> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AppError::UserNotFound(id))
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.index())
    }

    /// Catalog lines on loan to `user`, in issue order
    pub fn issued_books<'a>(&'a self, user: &'a User) -> impl Iterator<Item = &'a Book> + 'a {
        user.issued_books.iter().filter_map(|id| self.book(*id))
    }

    pub fn user_details(&self, user: &User) -> UserDetails {
        UserDetails {
            id: user.id,
            name: user.name.clone(),
            issued_books: self.issued_books(user).map(BookShort::from).collect(),
        }
    }

    /// All outstanding loans, grouped by user in insertion order
    pub fn loans(&self) -> Vec<LoanDetails> {
        self.users
            .iter()
            .flat_map(|user| {
                self.issued_books(user).map(move |book| LoanDetails {
                    user: UserShort::from(user),
                    book: BookShort::from(book),
                    quantity_available: book.quantity_available,
                })
            })
            .collect()
    }

    /// Lend the first line titled `title` that still has a copy on the shelf.
    ///
    /// Lines with a matching title but no copies left are skipped, so a later
    /// duplicate line can satisfy the request. Nothing changes on error.
    pub fn issue_book(&mut self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        let user_pos = self.user_position(user_id)?;

        let book_pos = self
            .books
            .iter()
            .position(|b| b.title_matches(title) && b.is_available())
            .ok_or_else(|| AppError::Unavailable("Book not available!".to_string()))?;

        let book = &mut self.books[book_pos];
        if !book.issue() {
            return Err(AppError::Internal(format!("line {} emptied during issue", book.id)));
        }
        let user = &mut self.users[user_pos];
        user.issue_book(book.id);

        Ok(LoanDetails {
            user: UserShort::from(&*user),
            book: BookShort::from(&*book),
            quantity_available: book.quantity_available,
        })
    }

    /// Take back the first loan of `user_id` whose title matches.
    ///
    /// Only the user's own loans are searched, and the exact line that was
    /// issued gets the copy back.
    pub fn return_book(&mut self, title: &str, user_id: i32) -> AppResult<LoanDetails> {
        let user_pos = self.user_position(user_id)?;

        let books = &self.books;
        let user = &self.users[user_pos];
        let loan_pos = user
            .issued_books
            .iter()
            .position(|id| books.get(id.index()).is_some_and(|b| b.title_matches(title)))
            .ok_or_else(|| AppError::NotFound("This book was not issued to the user.".to_string()))?;

        let user = &mut self.users[user_pos];
        let book_id = user
            .remove_issued(loan_pos)
            .ok_or_else(|| AppError::Internal(format!("loan {} vanished during return", loan_pos)))?;
        let book = self
            .books
            .get_mut(book_id.index())
            .ok_or_else(|| AppError::Internal(format!("dangling loan reference {}", book_id)))?;
        book.return_copy();

        Ok(LoanDetails {
            user: UserShort::from(&*user),
            book: BookShort::from(&*book),
            quantity_available: book.quantity_available,
        })
    }

    /// Plain-text catalog listing, one line per book
    pub fn books_report(&self) -> String {
        if self.books.is_empty() {
            return "No books available!".to_string();
        }
        self.books
            .iter()
            .map(|b| format!("{}\n", b))
            .collect()
    }

    /// Plain-text patron listing with each user's issued titles
    pub fn users_report(&self) -> String {
        if self.users.is_empty() {
            return "No users found!".to_string();
        }
        let mut out = String::new();
        for user in &self.users {
            out.push_str(&format!("{}\nIssued Books:\n", user));
            for book in self.issued_books(user) {
                out.push_str(&format!("  - {}\n", book.title));
            }
            out.push('\n');
        }
        out
    }

    /// Rebuild from raw parts, checking the references between them
    pub(crate) fn from_parts(books: Vec<Book>, users: Vec<User>) -> AppResult<Self> {
        for (position, book) in books.iter().enumerate() {
            if book.id.index() != position {
                return Err(AppError::Snapshot(format!(
                    "book id {} found at catalog position {}",
                    book.id, position
                )));
            }
        }
        for (position, user) in users.iter().enumerate() {
            if users[..position].iter().any(|u| u.id == user.id) {
                return Err(AppError::Snapshot(format!("duplicate user id {}", user.id)));
            }
            if let Some(missing) = user.issued_books.iter().find(|id| id.index() >= books.len()) {
                return Err(AppError::Snapshot(format!(
                    "user {} holds unknown book {}",
                    user.id, missing
                )));
            }
        }
        Ok(Self { books, users })
    }
}
