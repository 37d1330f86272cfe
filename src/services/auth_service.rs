use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::auth_dto::SignInResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

/// Servicio de autenticación de administradores
///
/// Las sesiones viven en la base de datos: un token UUID con vencimiento.
pub struct AuthService {
    repository: UserRepository,
    session_max_age: i64,
}

impl AuthService {
    pub fn new(repository: UserRepository, session_max_age: i64) -> Self {
        Self {
            repository,
            session_max_age,
        }
    }

    /// Verifica credenciales y abre una sesión nueva.
    ///
    /// Devuelve None tanto para email desconocido como para contraseña
    /// incorrecta, sin distinguir el caso.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<SignInResponse>, AppError> {
        let user = match self.repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("⚠️ Intento de acceso con email desconocido");
                return Ok(None);
            }
        };

        let valid = bcrypt::verify(password, &user.hashed_password)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        if !valid {
            warn!("⚠️ Contraseña incorrecta para {}", user.email);
            return Ok(None);
        }

        let token = Uuid::new_v4();
        let expires = Utc::now() + Duration::seconds(self.session_max_age);
        let session = self
            .repository
            .create_session(token, user.id, expires)
            .await?;

        info!("✅ Sesión abierta para {}", user.email);

        Ok(Some(SignInResponse {
            token: session.token,
            expires: session.expires,
        }))
    }
}
