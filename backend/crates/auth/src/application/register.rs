//! Register Use Case
//!
//! Creates a new user with a hashed password.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Validate, hash and store
    ///
    /// Uniqueness is left to the store: a duplicate name comes back as
    /// `AuthError::UserNameTaken` from `create`.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<UserName> {
        let user_name = UserName::new(&input.user_name)?;
        let raw_password = RawPassword::new(input.password)?;

        let password_hash = UserPassword::from_raw(&raw_password)?;
        let user = User::new(user_name.clone(), password_hash);

        self.user_repo.create(&user).await?;

        tracing::info!(user_name = %user_name, "User registered");

        Ok(user_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::infra::memory::MemoryUserRepository;

    fn input(user_name: &str, password: &str) -> RegisterInput {
        RegisterInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        let name = use_case.execute(input("alice", "hunter2")).await.unwrap();
        assert_eq!(name.as_str(), "alice");

        let stored = repo.find_by_user_name(&name).await.unwrap().unwrap();
        assert_ne!(stored.password_hash.as_phc_string(), "hunter2");
        assert!(stored.password_hash.as_phc_string().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_taken() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo);

        use_case.execute(input("alice", "hunter2")).await.unwrap();
        let err = use_case.execute(input("alice", "other")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));
    }

    #[tokio::test]
    async fn test_validation_failures() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo);

        let err = use_case.execute(input("   ", "hunter2")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidUserName(_)));

        let err = use_case.execute(input("bob", "")).await.unwrap_err();
        assert!(matches!(err, AuthError::PasswordValidation(_)));
    }
}
