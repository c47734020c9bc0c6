//! User Entity
//!
//! One row of the credential store. Created at registration, read at login,
//! never updated.

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// User name (unique)
    pub user_name: UserName,
    /// Argon2id PHC hash
    pub password_hash: UserPassword,
}

impl User {
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_name,
            password_hash,
        }
    }
}
