use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{SignInRequest, SignInResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/sign-in", post(sign_in))
}

async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.session_max_age);
    let response = controller.sign_in(request).await?;
    Ok(Json(response))
}
