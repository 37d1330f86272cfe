use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::classified_dto::{
    AggregatesResponse, ClassifiedCountResponse, ClassifiedDetailResponse, ClassifiedListResponse,
    ClassifiedResponse, ClassifiedSummaryResponse, ReserveStepResponse,
};
use crate::dto::customer_dto::ReserveStep;
use crate::models::classified::{Classified, ClassifiedStatus, Image};
use crate::repositories::classified_repository::ClassifiedRepository;
use crate::search::{parse_filters, parse_page, total_pages};
use crate::utils::errors::{not_found_error, AppError};

/// Cantidad de avisos en el carrusel de últimos ingresos
const LATEST_COUNT: i64 = 6;

pub struct ClassifiedController {
    repository: ClassifiedRepository,
}

impl ClassifiedController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClassifiedRepository::new(pool),
        }
    }

    /// Listado paginado con los filtros del query string
    pub async fn list(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<ClassifiedListResponse, AppError> {
        let filters = parse_filters(params);
        let page = parse_page(params);

        let classifieds = self.repository.search(&filters, page).await?;
        // Mismos predicados que la página: el total nunca diverge del listado
        let total = self.repository.count(&filters).await?;

        let ids: Vec<i32> = classifieds.iter().map(|c| c.id).collect();
        let images = self.repository.first_images_for(&ids).await?;

        Ok(ClassifiedListResponse {
            classifieds: attach_images(classifieds, images),
            total,
            page,
            total_pages: total_pages(total),
            favourites: Vec::new(),
        })
    }

    pub async fn count(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<ClassifiedCountResponse, AppError> {
        let filters = parse_filters(params);
        let count = self.repository.count(&filters).await?;

        Ok(ClassifiedCountResponse { count })
    }

    /// Extremos del inventario publicado para los sliders de rango
    pub async fn aggregates(&self) -> Result<AggregatesResponse, AppError> {
        self.repository.aggregates().await
    }

    pub async fn latest(&self) -> Result<Vec<ClassifiedResponse>, AppError> {
        let classifieds = self.repository.latest(LATEST_COUNT).await?;
        let ids: Vec<i32> = classifieds.iter().map(|c| c.id).collect();
        let images = self.repository.first_images_for(&ids).await?;

        Ok(attach_images(classifieds, images))
    }

    /// Detalle por slug: cuenta la vista y devuelve la marca y todas las imágenes
    pub async fn detail(&self, slug: &str) -> Result<ClassifiedDetailResponse, AppError> {
        let classified = self.find_published(slug).await?;
        let views = self.repository.increment_views(classified.id).await?;
        let make = self.repository.make_for(classified.make_id).await?;
        let images = self.repository.images_for(classified.id).await?;

        let mut response = ClassifiedDetailResponse::from_parts(classified, make, images);
        response.classified.views = views;

        Ok(response)
    }

    /// Paso del asistente de reserva; un paso fuera de rango es un 404
    pub async fn reserve(&self, slug: &str, step: i64) -> Result<ReserveStepResponse, AppError> {
        let step = match ReserveStep::from_number(step) {
            Some(step) => step,
            None => return Err(not_found_error("Reserve step", &step.to_string())),
        };

        let classified = self.find_published(slug).await?;
        let make = self.repository.make_for(classified.make_id).await?;

        Ok(ReserveStepResponse {
            step: step.number(),
            classified: ClassifiedSummaryResponse::from_parts(classified, make),
        })
    }

    /// Página de favoritos del visitante, con el mismo formato del listado
    pub async fn favourites_page(
        &self,
        ids: &[i32],
        page: i64,
    ) -> Result<ClassifiedListResponse, AppError> {
        if ids.is_empty() {
            return Ok(ClassifiedListResponse {
                classifieds: Vec::new(),
                total: 0,
                page,
                total_pages: 0,
                favourites: Vec::new(),
            });
        }

        let classifieds = self.repository.find_page_by_ids(ids, page).await?;
        let total = self.repository.count_by_ids(ids).await?;

        let page_ids: Vec<i32> = classifieds.iter().map(|c| c.id).collect();
        let images = self.repository.first_images_for(&page_ids).await?;

        Ok(ClassifiedListResponse {
            classifieds: attach_images(classifieds, images),
            total,
            page,
            total_pages: total_pages(total),
            favourites: ids.to_vec(),
        })
    }

    /// Un slug desconocido es 404; un aviso retirado o en borrador es 410
    async fn find_published(&self, slug: &str) -> Result<Classified, AppError> {
        let classified = match self.repository.find_by_slug(slug).await? {
            Some(classified) => classified,
            None => return Err(not_found_error("Classified", slug)),
        };

        if classified.status != ClassifiedStatus::Live {
            return Err(AppError::Gone(format!(
                "Classified '{}' is no longer published",
                slug
            )));
        }

        Ok(classified)
    }
}

/// Empareja cada classified con sus imágenes conservando el orden del listado
fn attach_images(classifieds: Vec<Classified>, images: Vec<Image>) -> Vec<ClassifiedResponse> {
    let mut by_classified: HashMap<i32, Vec<Image>> = HashMap::new();
    for image in images {
        by_classified.entry(image.classified_id).or_default().push(image);
    }

    classifieds
        .into_iter()
        .map(|classified| {
            let images = by_classified.remove(&classified.id).unwrap_or_default();
            ClassifiedResponse::from_parts(classified, images)
        })
        .collect()
}
