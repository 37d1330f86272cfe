use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{SignInRequest, SignInResponse};
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::AuthService;
use crate::utils::errors::AppError;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(pool: PgPool, session_max_age: i64) -> Self {
        Self {
            service: AuthService::new(UserRepository::new(pool), session_max_age),
        }
    }

    /// Credenciales inválidas responden 401 con un mensaje fijo que no
    /// distingue email desconocido de contraseña incorrecta
    pub async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, AppError> {
        request.validate()?;

        match self
            .service
            .sign_in(&request.email, &request.password)
            .await?
        {
            Some(response) => Ok(response),
            None => Err(AppError::Unauthorized("Invalid credentials".to_string())),
        }
    }
}
