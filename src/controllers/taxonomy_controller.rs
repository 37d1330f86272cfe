use sqlx::PgPool;

use crate::dto::taxonomy_dto::{LabelValue, SyncSummaryResponse, TaxonomyResponse};
use crate::repositories::taxonomy_repository::TaxonomyRepository;
use crate::services::taxonomy_sync_service::TaxonomySyncService;
use crate::utils::errors::AppError;

pub struct TaxonomyController {
    repository: TaxonomyRepository,
    sync_service: TaxonomySyncService,
}

impl TaxonomyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TaxonomyRepository::new(pool.clone()),
            sync_service: TaxonomySyncService::new(TaxonomyRepository::new(pool)),
        }
    }

    /// Opciones para los dropdowns encadenados marca -> modelo -> variante.
    ///
    /// Las marcas van siempre; modelos y variantes solo cuando el caller ya
    /// eligió el nivel anterior.
    pub async fn options(
        &self,
        make_id: Option<i32>,
        model_id: Option<i32>,
    ) -> Result<TaxonomyResponse, AppError> {
        let makes = self.repository.list_makes().await?;

        let models = match make_id {
            Some(make_id) => self.repository.models_by_make(make_id).await?,
            None => Vec::new(),
        };

        let model_variants = match model_id {
            Some(model_id) => self.repository.variants_by_model(model_id).await?,
            None => Vec::new(),
        };

        Ok(TaxonomyResponse {
            makes: makes
                .iter()
                .map(|make| LabelValue::new(&make.name, make.id))
                .collect(),
            models: models
                .iter()
                .map(|model| LabelValue::new(&model.name, model.id))
                .collect(),
            model_variants: model_variants
                .iter()
                .map(|variant| LabelValue::new(&variant.name, variant.id))
                .collect(),
        })
    }

    /// Reconciliación completa contra el CSV configurado
    pub async fn sync(&self, csv_path: &str) -> Result<SyncSummaryResponse, AppError> {
        self.sync_service.sync_from_path(csv_path).await
    }
}
