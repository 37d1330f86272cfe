use sqlx::PgPool;

use crate::dto::classified_dto::AggregatesResponse;
use crate::models::classified::{Classified, Image};
use crate::models::taxonomy::Make;
use crate::search::filter::CLASSIFIEDS_PER_PAGE;
use crate::search::query::page_offset;
use crate::search::{build_count_query, build_search_query, ClassifiedFilter};
use crate::utils::errors::AppError;

pub struct ClassifiedRepository {
    pool: PgPool,
}

impl ClassifiedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Página de resultados para los predicados dados
    pub async fn search(
        &self,
        filters: &[ClassifiedFilter],
        page: i64,
    ) -> Result<Vec<Classified>, AppError> {
        let mut qb = build_search_query(filters, page);
        let classifieds = qb
            .build_query_as::<Classified>()
            .fetch_all(&self.pool)
            .await?;

        Ok(classifieds)
    }

    /// Conteo total para los mismos predicados de búsqueda
    pub async fn count(&self, filters: &[ClassifiedFilter]) -> Result<i64, AppError> {
        let mut qb = build_count_query(filters);
        let count: i64 = qb.build_query_scalar().fetch_one(&self.pool).await?;

        Ok(count)
    }

    /// Extremos de año, precio y lectura del inventario publicado
    pub async fn aggregates(&self) -> Result<AggregatesResponse, AppError> {
        let aggregates = sqlx::query_as::<_, AggregatesResponse>(
            r#"
            SELECT MIN(year) AS min_year, MAX(year) AS max_year,
                   MIN(price) AS min_price, MAX(price) AS max_price,
                   MIN(odo_reading) AS min_reading, MAX(odo_reading) AS max_reading
            FROM classifieds
            WHERE status = 'LIVE'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(aggregates)
    }

    /// Últimos ingresos publicados
    pub async fn latest(&self, limit: i64) -> Result<Vec<Classified>, AppError> {
        let classifieds = sqlx::query_as::<_, Classified>(
            "SELECT * FROM classifieds WHERE status = 'LIVE' ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(classifieds)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Classified>, AppError> {
        let classified = sqlx::query_as::<_, Classified>(
            "SELECT * FROM classifieds WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(classified)
    }

    /// Página de favoritos: ids que ya no existen simplemente no aparecen
    pub async fn find_page_by_ids(
        &self,
        ids: &[i32],
        page: i64,
    ) -> Result<Vec<Classified>, AppError> {
        let classifieds = sqlx::query_as::<_, Classified>(
            r#"
            SELECT * FROM classifieds
            WHERE id = ANY($1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(ids)
        .bind(CLASSIFIEDS_PER_PAGE)
        .bind(page_offset(page))
        .fetch_all(&self.pool)
        .await?;

        Ok(classifieds)
    }

    pub async fn count_by_ids(&self, ids: &[i32]) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM classifieds WHERE id = ANY($1)")
                .bind(ids)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Incrementar el contador de vistas y devolver el valor nuevo
    pub async fn increment_views(&self, id: i32) -> Result<i32, AppError> {
        let views: i32 = sqlx::query_scalar(
            "UPDATE classifieds SET views = views + 1 WHERE id = $1 RETURNING views",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(views)
    }

    /// La FK garantiza que la marca de un classified existe
    pub async fn make_for(&self, make_id: i32) -> Result<Make, AppError> {
        let make = sqlx::query_as::<_, Make>("SELECT * FROM makes WHERE id = $1")
            .bind(make_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(make)
    }

    pub async fn images_for(&self, classified_id: i32) -> Result<Vec<Image>, AppError> {
        let images = sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE classified_id = $1 ORDER BY id",
        )
        .bind(classified_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }

    /// Primera imagen de cada classified, para las tarjetas del listado
    pub async fn first_images_for(&self, classified_ids: &[i32]) -> Result<Vec<Image>, AppError> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT DISTINCT ON (classified_id) *
            FROM images
            WHERE classified_id = ANY($1)
            ORDER BY classified_id, id
            "#,
        )
        .bind(classified_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(images)
    }
}
