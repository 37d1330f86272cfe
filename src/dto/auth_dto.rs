//! DTOs de autenticación de administradores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request de sign-in con credenciales
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Sesión emitida tras un sign-in exitoso
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: Uuid,
    pub expires: DateTime<Utc>,
}
