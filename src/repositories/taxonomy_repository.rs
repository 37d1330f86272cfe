use sqlx::PgPool;

use crate::models::taxonomy::{Make, Model, ModelVariant};
use crate::utils::errors::AppError;

pub struct TaxonomyRepository {
    pool: PgPool,
}

impl TaxonomyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn upsert_make(&self, name: &str, image: &str) -> Result<Make, AppError> {
        let make = sqlx::query_as::<_, Make>(
            r#"
            INSERT INTO makes (name, image)
            VALUES ($1, $2)
            ON CONFLICT (name)
            DO UPDATE SET name = EXCLUDED.name, image = EXCLUDED.image, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(image)
        .fetch_one(&self.pool)
        .await?;

        Ok(make)
    }

    pub async fn upsert_model(&self, name: &str, make_id: i32) -> Result<Model, AppError> {
        let model = sqlx::query_as::<_, Model>(
            r#"
            INSERT INTO models (name, make_id)
            VALUES ($1, $2)
            ON CONFLICT (name, make_id)
            DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(make_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    /// El rango de años solo se fija al crear la variante, nunca en el update
    pub async fn upsert_variant(
        &self,
        name: &str,
        model_id: i32,
        year_start: i32,
        year_end: i32,
    ) -> Result<ModelVariant, AppError> {
        let variant = sqlx::query_as::<_, ModelVariant>(
            r#"
            INSERT INTO model_variants (name, model_id, year_start, year_end)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name, model_id)
            DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(model_id)
        .bind(year_start)
        .bind(year_end)
        .fetch_one(&self.pool)
        .await?;

        Ok(variant)
    }

    pub async fn list_makes(&self) -> Result<Vec<Make>, AppError> {
        let makes = sqlx::query_as::<_, Make>("SELECT * FROM makes ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(makes)
    }

    pub async fn models_by_make(&self, make_id: i32) -> Result<Vec<Model>, AppError> {
        let models = sqlx::query_as::<_, Model>(
            "SELECT * FROM models WHERE make_id = $1 ORDER BY name ASC",
        )
        .bind(make_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(models)
    }

    pub async fn variants_by_model(&self, model_id: i32) -> Result<Vec<ModelVariant>, AppError> {
        let variants = sqlx::query_as::<_, ModelVariant>(
            "SELECT * FROM model_variants WHERE model_id = $1 ORDER BY name ASC",
        )
        .bind(model_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(variants)
    }
}
