//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential store (`users` table)
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query to confirm the database is reachable
    pub async fn check_connection(&self) -> AuthResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES ($1, $2)")
            .bind(user.user_name.as_str())
            .bind(user.password_hash.as_phc_string())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::UserNameTaken)
            }
            Err(e) => Err(AuthError::Database(e)),
        }
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        // LIMIT 2 is enough to tell "one" from "more than one"
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                password
            FROM users
            WHERE username = $1
            LIMIT 2
            "#,
        )
        .bind(user_name.as_str())
        .fetch_all(&self.pool)
        .await?;

        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (None, _) => Ok(None),
            (Some(row), None) => row.into_user().map(Some),
            (Some(_), Some(_)) => Err(AuthError::AmbiguousUser),
        }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    password: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_name = UserName::new(&self.username)
            .map_err(|e| AuthError::Internal(format!("Stored user name is invalid: {e}")))?;
        let password_hash = UserPassword::from_phc_string(self.password)?;

        Ok(User::new(user_name, password_hash))
    }
}
