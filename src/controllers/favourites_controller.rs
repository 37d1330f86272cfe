use uuid::Uuid;

use crate::cache::redis_client::RedisClient;
use crate::dto::favourite_dto::{Favourites, ToggleFavouriteRequest};
use crate::services::favourites_service::FavouritesService;
use crate::utils::errors::{validation_error, AppError};

pub struct FavouritesController {
    service: FavouritesService<RedisClient>,
}

impl FavouritesController {
    pub fn new(redis: RedisClient) -> Self {
        Self {
            service: FavouritesService::new(redis),
        }
    }

    /// Alterna el id en el set del visitante y devuelve el set resultante
    pub async fn toggle(
        &self,
        source_id: Uuid,
        request: ToggleFavouriteRequest,
    ) -> Result<Favourites, AppError> {
        if request.id < 1 {
            return Err(validation_error("id", "must be a positive classified id"));
        }

        self.service
            .toggle(&source_id.to_string(), request.id)
            .await
            .map_err(|e| AppError::Internal(format!("Error de favoritos: {}", e)))
    }

    /// Ids favoritos del visitante
    pub async fn list_ids(&self, source_id: Uuid) -> Result<Favourites, AppError> {
        self.service
            .list(&source_id.to_string())
            .await
            .map_err(|e| AppError::Internal(format!("Error de favoritos: {}", e)))
    }
}
