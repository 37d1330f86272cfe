//! Modelos de taxonomía vehicular
//!
//! Jerarquía de tres niveles make -> model -> model_variant.
//! Las tres tablas usan claves naturales por nombre además del id serial.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Marca - mapea a la tabla makes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Make {
    pub id: i32,
    pub name: String,
    /// URL del logo derivada del nombre
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Modelo de una marca - mapea a la tabla models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Model {
    pub id: i32,
    pub name: String,
    pub make_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Variante de un modelo - mapea a la tabla model_variants
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ModelVariant {
    pub id: i32,
    pub name: String,
    pub model_id: i32,
    pub year_start: i32,
    pub year_end: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
