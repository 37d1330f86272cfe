//! Modelos de clientes
//!
//! Clientes creados por el flujo de reserva y suscriptores del boletín.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cliente con reserva - mapea a la tabla customers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub booking_date: DateTime<Utc>,
    pub terms_accepted: bool,
    pub classified_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Suscriptor del boletín - mapea a la tabla newsletter_subscribers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NewsletterSubscriber {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
