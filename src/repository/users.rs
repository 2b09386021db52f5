//! Users repository over the shared patron list

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserDetails},
};

use super::SharedLibrary;

#[derive(Clone)]
pub struct UsersRepository {
    library: SharedLibrary,
}

impl UsersRepository {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }

    /// Insert a user unless the id is taken.
    ///
    /// Lookup and insert happen under one write guard so two concurrent
    /// requests cannot both claim the same id.
    pub async fn create(&self, name: &str, id: i32) -> AppResult<User> {
        let mut library = self.library.write().await;
        if library.get_user_by_id(id).is_some() {
            return Err(AppError::Duplicate(
                "User ID already exists! Please enter a unique ID.".to_string(),
            ));
        }
        Ok(library.add_user(name, id).clone())
    }

    /// Get user with resolved loans by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<UserDetails> {
        let library = self.library.read().await;
        let user = library.get_user_by_id(id).ok_or(AppError::UserNotFound(id))?;
        Ok(library.user_details(user))
    }

    pub async fn list(&self) -> Vec<UserDetails> {
        let library = self.library.read().await;
        library.users().iter().map(|u| library.user_details(u)).collect()
    }

    pub async fn report(&self) -> String {
        self.library.read().await.users_report()
    }
}
