//! Data models for Shelf

pub mod book;
pub mod library;
pub mod loan;
pub mod snapshot;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookId, BookShort};
pub use library::Library;
pub use loan::LoanDetails;
pub use snapshot::LibrarySnapshot;
pub use user::{User, UserDetails, UserShort};
