use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::customer::{Customer, NewsletterSubscriber};
use crate::utils::errors::{conflict_error, AppError};

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_reservation(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        mobile: &str,
        booking_date: DateTime<Utc>,
        terms_accepted: bool,
        classified_id: i32,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers
                (first_name, last_name, email, mobile, booking_date, terms_accepted, classified_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(mobile)
        .bind(booking_date)
        .bind(terms_accepted)
        .bind(classified_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn subscriber_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM newsletter_subscribers WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Un choque con el índice único de email se reporta como Conflict
    pub async fn create_subscriber(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<NewsletterSubscriber, AppError> {
        let subscriber = sqlx::query_as::<_, NewsletterSubscriber>(
            r#"
            INSERT INTO newsletter_subscribers (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                conflict_error("Subscriber", "email", email)
            }
            _ => AppError::from(e),
        })?;

        Ok(subscriber)
    }
}
