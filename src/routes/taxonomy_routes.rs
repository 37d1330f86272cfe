use axum::{
    extract::{Query, State},
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use tracing::info;

use crate::controllers::taxonomy_controller::TaxonomyController;
use crate::dto::common::ApiResponse;
use crate::dto::taxonomy_dto::{SyncSummaryResponse, TaxonomyResponse};
use crate::middleware::auth::{session_auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// El sync es el único endpoint administrado: va detrás del middleware de sesión
pub fn create_taxonomy_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/sync", post(sync_taxonomy))
        .route_layer(from_fn_with_state(state, session_auth_middleware));

    Router::new().route("/", get(get_taxonomy)).merge(admin)
}

#[derive(Debug, Deserialize)]
struct TaxonomyQuery {
    make: Option<String>,
    model: Option<String>,
}

async fn get_taxonomy(
    State(state): State<AppState>,
    Query(query): Query<TaxonomyQuery>,
) -> Result<Json<TaxonomyResponse>, AppError> {
    // Un id ilegible cuenta como no elegido: dropdown vacío, nunca un error
    let make_id = query.make.as_deref().and_then(|raw| raw.parse::<i32>().ok());
    let model_id = query.model.as_deref().and_then(|raw| raw.parse::<i32>().ok());

    let controller = TaxonomyController::new(state.pool.clone());
    let response = controller.options(make_id, model_id).await?;
    Ok(Json(response))
}

async fn sync_taxonomy(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<SyncSummaryResponse>>, AppError> {
    info!("🔄 Sincronización de taxonomía solicitada por {}", user.email);

    let controller = TaxonomyController::new(state.pool.clone());
    let summary = controller.sync(&state.config.taxonomy_csv_path).await?;

    Ok(Json(ApiResponse::success_with_message(
        summary,
        "Taxonomy synchronised".to_string(),
    )))
}
