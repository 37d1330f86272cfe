use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::classified_controller::ClassifiedController;
use crate::controllers::favourites_controller::FavouritesController;
use crate::dto::classified_dto::{
    AggregatesResponse, ClassifiedCountResponse, ClassifiedDetailResponse, ClassifiedListResponse,
    ClassifiedResponse, ReserveStepResponse,
};
use crate::middleware::source_id::source_id_from_headers;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_classified_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classifieds))
        .route("/count", get(count_classifieds))
        .route("/aggregates", get(get_aggregates))
        .route("/latest", get(latest_classifieds))
        .route("/:slug", get(get_classified))
        .route("/:slug/reserve", get(reserve_classified))
}

async fn list_classifieds(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ClassifiedListResponse>, AppError> {
    let controller = ClassifiedController::new(state.pool.clone());
    let mut response = controller.list(&params).await?;

    // Los corazones del listado salen del set del visitante, si lo hay
    if let Some(source_id) = source_id_from_headers(&headers) {
        let favourites = FavouritesController::new(state.redis.clone());
        response.favourites = favourites.list_ids(source_id).await?.ids;
    }

    Ok(Json(response))
}

async fn count_classifieds(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ClassifiedCountResponse>, AppError> {
    let controller = ClassifiedController::new(state.pool.clone());
    let response = controller.count(&params).await?;
    Ok(Json(response))
}

async fn get_aggregates(
    State(state): State<AppState>,
) -> Result<Json<AggregatesResponse>, AppError> {
    let controller = ClassifiedController::new(state.pool.clone());
    let response = controller.aggregates().await?;
    Ok(Json(response))
}

async fn latest_classifieds(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassifiedResponse>>, AppError> {
    let controller = ClassifiedController::new(state.pool.clone());
    let response = controller.latest().await?;
    Ok(Json(response))
}

async fn get_classified(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ClassifiedDetailResponse>, AppError> {
    let controller = ClassifiedController::new(state.pool.clone());
    let response = controller.detail(&slug).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct ReserveQuery {
    step: Option<String>,
}

async fn reserve_classified(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ReserveQuery>,
) -> Result<Json<ReserveStepResponse>, AppError> {
    // Un step ausente o no numérico cae en el mismo 404 que uno fuera de rango
    let step = query
        .step
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0);

    let controller = ClassifiedController::new(state.pool.clone());
    let response = controller.reserve(&slug, step).await?;
    Ok(Json(response))
}
