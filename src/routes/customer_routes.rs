use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::common::FormResult;
use crate::dto::customer_dto::{CreateCustomerRequest, SubscribeRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas con path completo: se montan con merge y no con nest
pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/api/reservations", post(create_reservation))
        .route("/api/subscribe", post(subscribe))
}

async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<FormResult>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let result = controller.reserve(request).await?;
    Ok(Json(result))
}

async fn subscribe(
    State(state): State<AppState>,
    Json(request): Json<SubscribeRequest>,
) -> Result<Json<FormResult>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let result = controller.subscribe(request).await?;
    Ok(Json(result))
}
