//! Middleware de autenticación por sesión
//!
//! Este módulo valida el token Bearer contra la tabla de sesiones
//! y expone el usuario autenticado como extensión del request.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::repositories::user_repository::UserRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_uuid;

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
}

/// Valida `Authorization: Bearer <token>` contra la tabla de sesiones.
///
/// El token es el UUID emitido en el sign-in; una sesión vencida o
/// desconocida responde 401 sin tocar el handler.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = match auth_header.strip_prefix("Bearer ") {
        Some(token) => token,
        None => {
            return Err(AppError::Unauthorized(
                "Authorization header must be a Bearer token".to_string(),
            ))
        }
    };

    let token = validate_uuid(token)
        .map_err(|_| AppError::Unauthorized("Invalid session token".to_string()))?;

    let repository = UserRepository::new(state.pool.clone());

    let session = match repository.find_valid_session(token).await? {
        Some(session) => session,
        None => {
            return Err(AppError::Unauthorized(
                "Session expired or unknown".to_string(),
            ))
        }
    };

    let user = match repository.find_by_id(session.user_id).await? {
        Some(user) => user,
        None => {
            return Err(AppError::Unauthorized(
                "Session expired or unknown".to_string(),
            ))
        }
    };

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}
