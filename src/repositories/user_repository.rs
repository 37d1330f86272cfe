use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{Session, User};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn create_session(
        &self,
        token: Uuid,
        user_id: i32,
        expires: DateTime<Utc>,
    ) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, user_id, expires)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(expires)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Solo devuelve la sesión si todavía no expiró
    pub async fn find_valid_session(&self, token: Uuid) -> Result<Option<Session>, AppError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE token = $1 AND expires > NOW()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }
}
