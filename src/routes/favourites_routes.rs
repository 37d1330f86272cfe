use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};

use crate::controllers::classified_controller::ClassifiedController;
use crate::controllers::favourites_controller::FavouritesController;
use crate::dto::classified_dto::ClassifiedListResponse;
use crate::dto::favourite_dto::{Favourites, ToggleFavouriteRequest};
use crate::middleware::source_id::source_id_from_headers;
use crate::search::parse_page;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_favourites_router() -> Router<AppState> {
    Router::new().route("/", post(toggle_favourite).get(list_favourites))
}

async fn toggle_favourite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ToggleFavouriteRequest>,
) -> Result<Json<Favourites>, AppError> {
    let source_id = match source_id_from_headers(&headers) {
        Some(source_id) => source_id,
        None => {
            return Err(AppError::BadRequest(
                "Missing or invalid X-Source-Id header".to_string(),
            ))
        }
    };

    let controller = FavouritesController::new(state.redis.clone());
    let favourites = controller.toggle(source_id, request).await?;
    Ok(Json(favourites))
}

/// Página de favoritos con el mismo formato del listado general.
/// Sin header no hay identidad, y por lo tanto tampoco favoritos.
async fn list_favourites(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ClassifiedListResponse>, AppError> {
    let page = parse_page(&params);

    let ids = match source_id_from_headers(&headers) {
        Some(source_id) => {
            let controller = FavouritesController::new(state.redis.clone());
            controller.list_ids(source_id).await?.ids
        }
        None => Vec::new(),
    };

    let controller = ClassifiedController::new(state.pool.clone());
    let response = controller.favourites_page(&ids, page).await?;
    Ok(Json(response))
}
