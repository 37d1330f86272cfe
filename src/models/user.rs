//! Modelo de User
//!
//! Credenciales de administración y sesiones respaldadas en base de datos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Usuario administrador - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

/// Sesión activa - mapea a la tabla sessions
///
/// El token UUID actúa como primary key y se entrega como Bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub token: Uuid,
    pub user_id: i32,
    pub expires: DateTime<Utc>,
}
